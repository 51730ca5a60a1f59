//! Random play (legal-move enumeration and random game simulation).
//!
//! A playout plays uniformly random legal moves until both players pass,
//! then scores the result. Moves into a player's own single-point eye are
//! skipped so games terminate instead of filling every last point.

use fastrand::Rng;
use tracing::{debug, warn};

use crate::board::{Color, Grid, Point};
use crate::constants::MAX_GAME_LEN_FACTOR;
use crate::game::GameState;
use crate::scoring::Score;

/// All points where the side to move may place a stone.
pub fn legal_moves(state: &GameState) -> Vec<Point> {
    if state.is_over() {
        return Vec::new();
    }
    state
        .grid()
        .empty_points()
        .filter(|&p| state.check_move(p).is_ok())
        .collect()
}

/// True if every on-board neighbor of the empty `point` is a stone of `color`.
///
/// This may be a false eye; playouts only need a cheap stopping rule.
pub fn is_own_eye(grid: &Grid, point: Point, color: Color) -> bool {
    grid.get(point).is_none()
        && grid
            .neighbors_of(point)
            .into_iter()
            .all(|n| grid.get(n) == Some(color))
}

/// Choose a random legal move that does not fill the mover's own eye.
pub fn choose_random_move(state: &GameState, rng: &mut Rng) -> Option<Point> {
    let color = state.current_turn();
    let candidates: Vec<Point> = legal_moves(state)
        .into_iter()
        .filter(|&p| !is_own_eye(state.grid(), p, color))
        .collect();

    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.usize(..candidates.len())])
}

/// Play random moves from `state` until the game ends and return the score.
///
/// After `MAX_GAME_LEN_FACTOR * N * N` placements both sides simply pass.
pub fn random_playout(state: &mut GameState, rng: &mut Rng) -> Score {
    let n = state.grid().len();
    let limit = MAX_GAME_LEN_FACTOR * n * n;

    while !state.is_over() {
        let mv = if state.moves_played() < limit {
            choose_random_move(state, rng)
        } else {
            None
        };

        match mv {
            Some(pt) => {
                if let Err(err) = state.place_at(pt) {
                    warn!(%err, "random move rejected, passing");
                    state.pass();
                }
            }
            None => {
                state.pass();
            }
        }
    }

    debug!(moves = state.moves_played(), score = %state.score(), "playout finished");
    state.score()
}
