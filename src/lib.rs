//! EpsilonGo: a stateless Go move-suggestion engine.
//!
//! Given a board, the side to move and prisoner counts, the engine returns a
//! uniformly random legal move (or pass/resign) together with a rough
//! win-rate estimate. The real work is the rules engine that validates and
//! simulates candidate moves.
//!
//! ## Modules
//!
//! - [`constants`] - Board limits and evaluation parameters
//! - [`board`] - Square board snapshot
//! - [`rules`] - Groups, liberties, captures and suicide
//! - [`evaluate`] - Stone+prisoner score and win-rate estimate
//! - [`selector`] - Random legal move selection
//! - [`protocol`] - JSON requests, validation and the serving loop
//!
//! ## Example
//!
//! ```
//! use epsilon_go::board::{Board, Color};
//! use epsilon_go::evaluate::Prisoners;
//! use epsilon_go::selector::{Verdict, suggest_move};
//!
//! let board = Board::new(9);
//! let suggestion = suggest_move(&board, Color::Black, &Prisoners::default());
//! assert!(matches!(suggestion.verdict, Verdict::Play(_)));
//! assert_eq!(suggestion.win_rate, 0.5);
//! ```

pub mod board;
pub mod constants;
pub mod evaluate;
pub mod protocol;
pub mod rules;
pub mod selector;
