//! Move selection: a uniformly random legal move.
//!
//! This is not a Go player. Empty points are shuffled and the first one that
//! is not suicide is played. There is no reading, no ko awareness and no
//! preference among legal moves.

use log::{debug, info, trace};

use crate::board::{Board, Color, Point};
use crate::constants::RESIGN_WIN_RATE;
use crate::evaluate::{Evaluation, Prisoners, resign_check};
use crate::rules::{is_suicide, resolve_captures};

/// What the engine decided to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Play(Point),
    Pass,
    Resign,
}

/// A verdict together with the evaluation it was made under.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Suggestion {
    pub verdict: Verdict,
    /// Win probability for the side to move; 0.0 on resignation.
    pub win_rate: f64,
    /// Score lead for the side to move; negative on resignation.
    pub lead: i64,
    /// Raw score difference, positive favors Black.
    pub score_diff: i64,
}

/// Suggest a move for `player` using a freshly seeded generator.
pub fn suggest_move(board: &Board, player: Color, prisoners: &Prisoners) -> Suggestion {
    suggest_move_with_rng(board, player, prisoners, &mut fastrand::Rng::new())
}

/// Suggest a move for `player`, drawing the candidate order from `rng`.
///
/// Resignation is checked first and skips the move scan entirely.
pub fn suggest_move_with_rng(
    board: &Board,
    player: Color,
    prisoners: &Prisoners,
    rng: &mut fastrand::Rng,
) -> Suggestion {
    let eval = Evaluation::new(board, prisoners, player);

    if resign_check(eval.score_diff, player) {
        info!("{player} resigns, score diff {}", eval.score_diff);
        return Suggestion {
            verdict: Verdict::Resign,
            win_rate: RESIGN_WIN_RATE,
            lead: eval.lead,
            score_diff: eval.score_diff,
        };
    }

    let mut candidates = board.empty_points();
    rng.shuffle(&mut candidates);

    let verdict = match first_legal(board, player, &candidates) {
        Some(pt) => Verdict::Play(pt),
        None => {
            info!("{player} passes, no legal move among {} empty points", candidates.len());
            Verdict::Pass
        }
    };
    debug!(
        "{player}: {verdict:?} (win rate {:.3}, lead {})",
        eval.win_rate, eval.lead
    );

    Suggestion {
        verdict,
        win_rate: eval.win_rate,
        lead: eval.lead,
        score_diff: eval.score_diff,
    }
}

/// The first candidate, in the given order, that `player` can legally play.
///
/// Each candidate is simulated on its own copy of the board.
pub fn first_legal(board: &Board, player: Color, candidates: &[Point]) -> Option<Point> {
    candidates.iter().copied().find(|&pt| {
        debug_assert!(board.get(pt).is_none(), "candidate {pt:?} is occupied");
        let mut sim = board.clone();
        sim.set(pt, Some(player));
        let captured = resolve_captures(&mut sim, pt, player);
        let suicide = is_suicide(&sim, pt, player);
        trace!("candidate {pt:?}: captures {captured}, suicide {suicide}");
        !suicide
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(diagram: &str) -> Board {
        diagram.parse().unwrap()
    }

    #[test]
    fn test_empty_board_plays_in_bounds() {
        let b = Board::new(3);
        let s = suggest_move(&b, Color::Black, &Prisoners::default());
        assert_eq!(s.score_diff, 0);
        assert_eq!(s.win_rate, 0.5);
        assert_eq!(s.lead, 0);
        match s.verdict {
            Verdict::Play((r, c)) => assert!(r < 3 && c < 3),
            other => panic!("expected a move, got {other:?}"),
        }
    }

    #[test]
    fn test_full_board_passes() {
        let b = board("X O\nO X");
        let s = suggest_move(&b, Color::White, &Prisoners::default());
        assert_eq!(s.verdict, Verdict::Pass);
        assert_eq!(s.win_rate, 0.5);
    }

    #[test]
    fn test_only_suicide_available_passes() {
        // every empty point is a black eye and black has other liberties
        let b = board(
            ". X .
             X X X
             . X .",
        );
        let s = suggest_move(&b, Color::White, &Prisoners::default());
        assert_eq!(s.verdict, Verdict::Pass);
    }

    #[test]
    fn test_white_resigns_far_behind() {
        let b = Board::new(5);
        let prisoners = Prisoners { black: 40, white: 0 };
        let s = suggest_move(&b, Color::White, &prisoners);
        assert_eq!(s.verdict, Verdict::Resign);
        assert_eq!(s.win_rate, 0.0);
        assert_eq!(s.lead, -40);
        assert_eq!(s.score_diff, 40);
    }

    #[test]
    fn test_black_resigns_far_behind() {
        let b = Board::new(5);
        let prisoners = Prisoners { black: 0, white: 31 };
        let s = suggest_move(&b, Color::Black, &prisoners);
        assert_eq!(s.verdict, Verdict::Resign);
        assert_eq!(s.lead, -31);
    }

    #[test]
    fn test_resign_checked_before_full_board_pass() {
        let b = board("X X\nX X");
        let s = suggest_move(&b, Color::White, &Prisoners { black: 30, white: 0 });
        // 4 + 30 > 30
        assert_eq!(s.verdict, Verdict::Resign);
    }

    #[test]
    fn test_first_legal_skips_suicide() {
        let b = board(
            ". X .
             X X O
             O O .",
        );
        // (0,0) is suicide for White; (0,2) joins the white stone at (1,2)
        assert_eq!(first_legal(&b, Color::White, &[(0, 0), (0, 2)]), Some((0, 2)));
        assert_eq!(first_legal(&b, Color::White, &[(0, 0)]), None);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let b = Board::new(9);
        let p = Prisoners::default();
        let a = suggest_move_with_rng(&b, Color::Black, &p, &mut fastrand::Rng::with_seed(7));
        let c = suggest_move_with_rng(&b, Color::Black, &p, &mut fastrand::Rng::with_seed(7));
        assert_eq!(a, c);
    }

    #[test]
    fn test_input_board_not_mutated() {
        let b = board(
            ". X O
             X X O
             O O .",
        );
        let before = b.clone();
        let _ = suggest_move(&b, Color::White, &Prisoners::default());
        assert_eq!(b, before);
    }
}
