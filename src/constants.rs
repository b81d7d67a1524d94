//! Constants for board limits and evaluation parameters.
//!
//! Boards arrive with every request, so there is no compile-time board size.
//! The evaluation parameters are fixed: the engine is a random mover with a
//! crude score estimate, and nothing here is tunable at runtime.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest board accepted at the request boundary.
pub const MIN_BOARD_SIZE: usize = 1;

/// Largest board accepted at the request boundary.
///
/// Simulation clones the whole board per candidate, which stays cheap up to
/// this size.
pub const MAX_BOARD_SIZE: usize = 25;

// =============================================================================
// Position Evaluation
// =============================================================================

/// Steepness `k` of the logistic curve mapping score difference to win rate.
pub const WIN_RATE_STEEPNESS: f64 = 0.1;

/// Score difference (raw points, not probability) beyond which the losing
/// side resigns.
pub const RESIGN_THRESHOLD: i64 = 30;

/// Win rate reported alongside a resignation.
pub const RESIGN_WIN_RATE: f64 = 0.0;

// =============================================================================
// Protocol
// =============================================================================

/// Reply to a `status` request.
pub const READY_MESSAGE: &str = "EpsilonGo Backend Ready";

/// Difficulty label assumed when a request omits it.
pub const DEFAULT_DIFFICULTY: &str = "beginner";
