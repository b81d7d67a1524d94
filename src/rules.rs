//! Go rules: neighbors, groups, liberties, captures and suicide.
//!
//! The functions here trust their inputs. Coordinates must be on the board,
//! and the capture and suicide checks expect the move to be placed already.
//! [`play_move`] is the checked entry point for untrusted moves.
//!
//! A placement is resolved in a fixed order:
//! 1. put the stone on the board,
//! 2. [`resolve_captures`] removes opponent groups left without liberties,
//! 3. [`is_suicide`] inspects the mover's own group.
//!
//! Swapping steps 2 and 3 flags capturing moves as suicide.
//! There is no ko rule.

use thiserror::Error;

use crate::board::{Board, Color, Point};

/// Why [`play_move`] refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Illegal move: point off the board")]
    OutOfBounds,
    #[error("Illegal move: point occupied")]
    Occupied,
    #[error("Illegal move: suicide")]
    Suicide,
}

/// The up-to-four orthogonal neighbors of `pt` on a `size`×`size` board.
pub fn neighbors((row, col): Point, size: usize) -> Vec<Point> {
    let mut v = Vec::with_capacity(4);
    if row > 0 {
        v.push((row - 1, col));
    }
    if row + 1 < size {
        v.push((row + 1, col));
    }
    if col > 0 {
        v.push((row, col - 1));
    }
    if col + 1 < size {
        v.push((row, col + 1));
    }
    v
}

/// Flood-fill the group containing `pt`.
///
/// Returns the number of distinct liberties and the group's stones, each
/// visited exactly once. An empty `pt` yields `(0, vec![])`.
pub fn group_and_liberties(board: &Board, pt: Point) -> (usize, Vec<Point>) {
    let Some(color) = board.get(pt) else {
        return (0, Vec::new());
    };
    let size = board.size();
    let idx = |(r, c): Point| r * size + c;

    let mut visited = vec![false; size * size];
    let mut is_liberty = vec![false; size * size];
    let mut liberties = 0;
    let mut group = Vec::new();
    let mut stack = vec![pt];
    visited[idx(pt)] = true;

    while let Some(cur) = stack.pop() {
        group.push(cur);
        for n in neighbors(cur, size) {
            let ni = idx(n);
            match board.get(n) {
                None if !is_liberty[ni] => {
                    is_liberty[ni] = true;
                    liberties += 1;
                }
                Some(c) if c == color && !visited[ni] => {
                    visited[ni] = true;
                    stack.push(n);
                }
                _ => {}
            }
        }
    }
    (liberties, group)
}

/// Remove every opponent group adjacent to `pt` that has no liberties.
///
/// `pt` must already hold a `mover` stone. Each distinct opponent group is
/// examined once even when it touches `pt` on several sides. Returns the
/// number of stones removed.
pub fn resolve_captures(board: &mut Board, pt: Point, mover: Color) -> usize {
    debug_assert_eq!(
        board.get(pt),
        Some(mover),
        "resolve_captures at {pt:?} before the stone was placed"
    );
    let size = board.size();
    let opp = mover.opponent();
    let mut examined = vec![false; size * size];
    let mut to_remove = Vec::new();

    for n in neighbors(pt, size) {
        if board.get(n) != Some(opp) || examined[n.0 * size + n.1] {
            continue;
        }
        let (libs, group) = group_and_liberties(board, n);
        for &(r, c) in &group {
            examined[r * size + c] = true;
        }
        if libs == 0 {
            to_remove.extend(group);
        }
    }

    for &s in &to_remove {
        board.set(s, None);
    }
    to_remove.len()
}

/// True iff the `mover` group at `pt` has no liberties.
///
/// Only meaningful after [`resolve_captures`] has run for this placement.
/// Debug builds assert that no adjacent opponent group is still sitting at
/// zero liberties.
pub fn is_suicide(board: &Board, pt: Point, mover: Color) -> bool {
    debug_assert_eq!(
        board.get(pt),
        Some(mover),
        "is_suicide at {pt:?} without the mover's stone"
    );
    debug_assert!(
        !has_dead_neighbor(board, pt, mover.opponent()),
        "is_suicide at {pt:?} called before resolve_captures"
    );
    let (libs, _) = group_and_liberties(board, pt);
    libs == 0
}

fn has_dead_neighbor(board: &Board, pt: Point, opp: Color) -> bool {
    neighbors(pt, board.size())
        .into_iter()
        .any(|n| board.get(n) == Some(opp) && group_and_liberties(board, n).0 == 0)
}

/// Play `color` at `pt` with full legality checks.
///
/// On success the board holds the new stone with captures removed and the
/// number of captured stones is returned. On error the board is unchanged.
pub fn play_move(board: &mut Board, pt: Point, color: Color) -> Result<usize, MoveError> {
    if !board.contains(pt) {
        return Err(MoveError::OutOfBounds);
    }
    if board.get(pt).is_some() {
        return Err(MoveError::Occupied);
    }

    board.set(pt, Some(color));
    let captured = resolve_captures(board, pt, color);
    if is_suicide(board, pt, color) {
        // a capture always leaves a liberty, so only the stone needs undoing
        board.set(pt, None);
        return Err(MoveError::Suicide);
    }
    Ok(captured)
}
