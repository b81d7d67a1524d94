//! Position evaluation: a stone-and-prisoner count squashed into a win rate.
//!
//! This is deliberately crude. There is no territory estimate, so the score
//! is only a rough indicator of who is ahead.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Color};
use crate::constants::{RESIGN_THRESHOLD, WIN_RATE_STEEPNESS};

/// Stones captured so far by each side, as reported by the caller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prisoners {
    pub black: u32,
    pub white: u32,
}

impl Prisoners {
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// Credit `count` captured stones to `color`. Totals saturate at
    /// `u32::MAX`.
    pub fn add(&mut self, color: Color, count: usize) {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        let total = match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        };
        *total = total.saturating_add(count);
    }
}

/// `(black stones + black prisoners) - (white stones + white prisoners)`.
///
/// Positive favors Black.
pub fn score_diff(board: &Board, prisoners: &Prisoners) -> i64 {
    let side = |c: Color| board.stone_count(c) as i64 + i64::from(prisoners.get(c));
    side(Color::Black) - side(Color::White)
}

/// Black's win probability: `1 / (1 + e^(-k * score_diff))`.
pub fn win_rate_black(score_diff: i64) -> f64 {
    1.0 / (1.0 + (-WIN_RATE_STEEPNESS * score_diff as f64).exp())
}

/// True when `player` is behind by more than [`RESIGN_THRESHOLD`].
pub fn resign_check(score_diff: i64, player: Color) -> bool {
    match player {
        Color::White => score_diff > RESIGN_THRESHOLD,
        Color::Black => score_diff < -RESIGN_THRESHOLD,
    }
}

/// Evaluation from the point of view of the side to move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// Raw difference, positive favors Black.
    pub score_diff: i64,
    /// Win probability for `player`.
    pub win_rate: f64,
    /// Score difference from `player`'s side, positive when ahead.
    pub lead: i64,
}

impl Evaluation {
    pub fn new(board: &Board, prisoners: &Prisoners, player: Color) -> Self {
        Self::from_score_diff(score_diff(board, prisoners), player)
    }

    pub fn from_score_diff(score_diff: i64, player: Color) -> Self {
        let black = win_rate_black(score_diff);
        let (win_rate, lead) = match player {
            Color::Black => (black, score_diff),
            Color::White => (1.0 - black, -score_diff),
        };
        Self {
            score_diff,
            win_rate,
            lead,
        }
    }
}
