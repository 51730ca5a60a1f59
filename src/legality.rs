//! Move legality for the side to move.
//!
//! Rules checked here:
//! - a player may not replay the point of their own previous placement (ko)
//! - a point that still has an open neighbor is always playable
//! - a fully surrounded point is suicide unless a friendly neighbor group
//!   keeps another liberty or the move takes an enemy group's last liberty

use crate::board::{Grid, Point};
use crate::error::IllegalReason;
use crate::game::GameState;
use crate::group::Group;

/// True if every in-bounds neighbor of `point` holds a stone of either color.
///
/// Off-board points are never surrounded.
pub fn location_is_surrounded(grid: &Grid, point: Point) -> bool {
    if !grid.contains(point) {
        return false;
    }
    let occupied = grid
        .neighbors_of(point)
        .into_iter()
        .filter(|&n| grid.get(n).is_some())
        .count();
    occupied == grid.border_of(point).max_neighbors()
}

/// Check a placement at an on-board `point` for the side to move.
///
/// Bounds and game-over are checked by [`GameState::check_move`].
pub(crate) fn check_move(state: &GameState, point: Point) -> Result<(), IllegalReason> {
    let grid = state.grid();
    if grid.get(point).is_some() {
        return Err(IllegalReason::Occupied);
    }

    let turn = state.current_turn();
    if state.last_move(turn) == Some(point) {
        return Err(IllegalReason::Ko);
    }

    let neighbouring: Vec<&Group> = state
        .groups()
        .iter()
        .filter(|g| g.liberties_contain(point))
        .collect();
    if neighbouring.is_empty() {
        return Ok(());
    }

    if !location_is_surrounded(grid, point) {
        return Ok(());
    }

    let (friendly, enemy): (Vec<&Group>, Vec<&Group>) =
        neighbouring.into_iter().partition(|g| g.color() == turn);

    let would_capture_enemy = enemy.iter().any(|g| g.would_be_captured_by_move_at(point));
    // Vacuously true with no friendly neighbors
    let all_friendly_one_liberty = friendly.iter().all(|g| g.liberty_count() == 1);

    if all_friendly_one_liberty && !would_capture_enemy {
        return Err(IllegalReason::Suicide);
    }
    Ok(())
}
