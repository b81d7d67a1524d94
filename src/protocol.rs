//! JSON request handling.
//!
//! Requests and responses are single-line JSON objects. The `command` field
//! selects the operation:
//!
//! - `status` - Report that the engine is ready
//! - `move` - Suggest a move (or pass/resign) for `player` on `board`
//! - `play` - Apply a move with full legality checks and return the result
//!
//! Boards are arrays of rows; each cell is `null`, `"black"` or `"white"`.
//! This is the only layer that validates input. Everything below it trusts
//! the board to be square and the coordinates to be on it.
//!
//! ## Example
//!
//! ```
//! use epsilon_go::protocol::JsonEngine;
//!
//! let mut engine = JsonEngine::new();
//! let reply = engine
//!     .handle_line(r#"{"command":"status"}"#)
//!     .unwrap();
//! assert_eq!(reply, r#"{"message":"EpsilonGo Backend Ready"}"#);
//! ```

use std::io::{self, BufRead, Write};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Color, ShapeError};
use crate::constants::{DEFAULT_DIFFICULTY, MAX_BOARD_SIZE, MIN_BOARD_SIZE, READY_MESSAGE};
use crate::evaluate::Prisoners;
use crate::rules::{MoveError, play_move};
use crate::selector::{Suggestion, Verdict, suggest_move_with_rng};

/// Cell grid as it appears on the wire.
pub type Rows = Vec<Vec<Option<Color>>>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Request {
    Status,
    Move(MoveRequest),
    Play(PlayRequest),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveRequest {
    pub board: Rows,
    pub player: Color,
    /// Accepted for compatibility; every level plays the same way.
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default)]
    pub prisoners: Prisoners,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayRequest {
    pub board: Rows,
    pub player: Color,
    pub row: usize,
    pub col: usize,
    #[serde(default)]
    pub prisoners: Prisoners,
}

fn default_difficulty() -> String {
    DEFAULT_DIFFICULTY.to_string()
}

/// Verdict of a `move` request. `row`/`col` are present only for a move.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveResponse {
    pub pass: bool,
    pub resign: bool,
    pub win_rate: f64,
    pub lead: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<usize>,
}

impl From<Suggestion> for MoveResponse {
    fn from(s: Suggestion) -> Self {
        let (row, col) = match s.verdict {
            Verdict::Play((r, c)) => (Some(r), Some(c)),
            Verdict::Pass | Verdict::Resign => (None, None),
        };
        Self {
            pass: s.verdict == Verdict::Pass,
            resign: s.verdict == Verdict::Resign,
            win_rate: s.win_rate,
            lead: s.lead,
            row,
            col,
        }
    }
}

/// Result of a `play` request: the new board and updated prisoner counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayResponse {
    pub board: Rows,
    pub captured: usize,
    pub prisoners: Prisoners,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Status { message: String },
    Move(MoveResponse),
    Play(PlayResponse),
    Error { error: String },
}

/// Why a request was rejected.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("unsupported board size {size}, expected {min} to {max}")]
    Size { size: usize, min: usize, max: usize },
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Request handler settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Largest board accepted; never above [`MAX_BOARD_SIZE`].
    pub max_board_size: usize,
    /// Fixed seed for the move shuffle. `None` seeds from the environment.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_board_size: MAX_BOARD_SIZE,
            seed: None,
        }
    }
}

/// Stateless request handler. The only thing it keeps between requests is
/// its random number generator.
pub struct JsonEngine {
    max_board_size: usize,
    rng: fastrand::Rng,
}

impl Default for JsonEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self {
            max_board_size: config.max_board_size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE),
            rng,
        }
    }

    /// Serve requests line by line until `input` is exhausted.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if let Some(reply) = self.handle_line(&line) {
                writeln!(output, "{reply}")?;
                output.flush()?;
            }
        }
        Ok(())
    }

    /// Answer one protocol line. Blank lines and `#` comments get no reply;
    /// failures are reported as an `{"error": ...}` object.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let response = self.handle_json(line).unwrap_or_else(|e| {
            warn!("rejected request: {e}");
            Response::Error {
                error: e.to_string(),
            }
        });
        Some(serde_json::to_string(&response).unwrap_or_else(|e| {
            format!(r#"{{"error":"failed to encode response: {e}"}}"#)
        }))
    }

    /// Parse and execute one JSON request.
    pub fn handle_json(&mut self, text: &str) -> Result<Response, RequestError> {
        let request: Request = serde_json::from_str(text)?;
        self.handle(request)
    }

    pub fn handle(&mut self, request: Request) -> Result<Response, RequestError> {
        match request {
            Request::Status => Ok(Response::Status {
                message: READY_MESSAGE.to_string(),
            }),

            Request::Move(req) => {
                let board = self.validate_board(&req.board)?;
                debug!(
                    "move request: {}x{} board, {} to play, difficulty {}",
                    board.size(),
                    board.size(),
                    req.player,
                    req.difficulty
                );
                let suggestion =
                    suggest_move_with_rng(&board, req.player, &req.prisoners, &mut self.rng);
                Ok(Response::Move(suggestion.into()))
            }

            Request::Play(req) => {
                let mut board = self.validate_board(&req.board)?;
                let captured = play_move(&mut board, (req.row, req.col), req.player)?;
                let mut prisoners = req.prisoners;
                prisoners.add(req.player, captured);
                debug!(
                    "{} plays ({}, {}), captures {captured}",
                    req.player, req.row, req.col
                );
                Ok(Response::Play(PlayResponse {
                    board: board.to_rows(),
                    captured,
                    prisoners,
                }))
            }
        }
    }

    fn validate_board(&self, rows: &[Vec<Option<Color>>]) -> Result<Board, RequestError> {
        let board = Board::from_rows(rows)?;
        if !(MIN_BOARD_SIZE..=self.max_board_size).contains(&board.size()) {
            return Err(RequestError::Size {
                size: board.size(),
                min: MIN_BOARD_SIZE,
                max: self.max_board_size,
            });
        }
        Ok(board)
    }
}
