//! Game state: turn sequencing, group maintenance and capture resolution.
//!
//! A [`GameState`] owns the grid and every live group. It changes only through
//! [`GameState::place_stone`] (or [`GameState::place_at`]) and
//! [`GameState::pass`]; both are atomic, so a rejected call leaves the state
//! exactly as it was.
//!
//! Captures are not resolved when a stone is placed. They are swept during
//! the turn switch that follows every placement or pass: liberties are
//! recomputed and zero-liberty groups are removed, the opponent's first.
//! This ordering is what lets a move that fills its own last liberty stand
//! when it also takes the last liberty of an enemy group.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, info};

use crate::board::{BoardSize, Color, Grid, PerColor, Point, vertex_string};
use crate::error::{BoardSizeError, MoveError};
use crate::group::Group;
use crate::legality;
use crate::scoring::{self, Score};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Reached only through two consecutive passes.
    Ended,
}

/// Outcome of a pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnResult {
    InProgress,
    Ended(Score),
}

/// A game of Go in progress (or finished).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    /// Live groups, in creation order (merged groups go to the back)
    groups: Vec<Group>,
    turn: Color,
    /// Each color's most recent placement
    last_move: PerColor<Option<Point>>,
    last_turn_was_pass: bool,
    status: GameStatus,
    /// Final score; zero until the game ends
    score: Score,
    /// Number of stones placed so far
    moves_played: usize,
}

impl GameState {
    /// Start a new game on an empty board with Black to move.
    pub fn new(size: BoardSize) -> Self {
        Self {
            grid: Grid::new(size),
            groups: Vec::new(),
            turn: Color::Black,
            last_move: PerColor::default(),
            last_turn_was_pass: false,
            status: GameStatus::InProgress,
            score: Score::default(),
            moves_played: 0,
        }
    }

    pub fn with_size(n: usize) -> Result<Self, BoardSizeError> {
        Ok(Self::new(BoardSize::try_from(n)?))
    }

    // -- Accessors --

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> BoardSize {
        self.grid.size()
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn current_turn(&self) -> Color {
        self.turn
    }

    pub fn last_move(&self, color: Color) -> Option<Point> {
        *self.last_move.get(color)
    }

    pub fn last_turn_was_pass(&self) -> bool {
        self.last_turn_was_pass
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Ended
    }

    /// Final score. All zeros while the game is in progress.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Score the current position as if the game ended now.
    pub fn territory(&self) -> Score {
        scoring::score(&self.groups)
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn occupant_at(&self, row: usize, col: usize) -> Result<Option<Color>, MoveError> {
        Ok(self.grid.cell_at(row, col)?.occupant)
    }

    /// The group holding a stone at `point`, if any.
    pub fn group_at(&self, point: Point) -> Option<&Group> {
        self.groups.iter().find(|g| g.contains(point))
    }

    pub fn liberties_at(&self, point: Point) -> Option<&BTreeSet<Point>> {
        self.group_at(point).map(Group::liberties)
    }

    // -- Legality --

    /// Check whether the side to move may place a stone at `point`.
    pub fn check_move(&self, point: Point) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.grid.contains(point) {
            return Err(MoveError::OutOfBounds {
                row: point.row,
                col: point.col,
                size: self.grid.len(),
            });
        }
        legality::check_move(self, point)?;
        Ok(())
    }

    /// Read-only legality query for move previews.
    ///
    /// Off-board points, occupied points and any point after the game has
    /// ended all count as illegal.
    pub fn is_move_illegal(&self, row: usize, col: usize) -> bool {
        self.check_move(Point::new(row, col)).is_err()
    }

    // -- Moves --

    /// Place a stone for the side to move, then switch turns.
    ///
    /// # Errors
    /// - [`MoveError::GameOver`] - the game has ended
    /// - [`MoveError::OutOfBounds`] - `(row, col)` is off the board
    /// - [`MoveError::IllegalMove`] - occupied point, ko, or suicide
    pub fn place_stone(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        self.place_at(Point::new(row, col))
    }

    pub fn place_at(&mut self, point: Point) -> Result<(), MoveError> {
        self.check_move(point)?;

        let color = self.turn;
        *self.last_move.get_mut(color) = Some(point);
        self.add_stone(point, color);
        self.moves_played += 1;
        debug!(
            %color,
            vertex = %vertex_string(point, self.size()),
            groups = self.groups.len(),
            "stone placed"
        );

        self.switch_turns(false);
        Ok(())
    }

    /// Pass the turn. A second consecutive pass ends the game and scores it.
    ///
    /// Passing after the game has ended changes nothing and reports the final
    /// score again.
    pub fn pass(&mut self) -> TurnResult {
        if self.is_over() {
            return TurnResult::Ended(self.score);
        }
        debug!(color = %self.turn, "pass");
        self.switch_turns(true)
    }

    /// Join the new stone to its friendly neighbors, merging them if needed.
    fn add_stone(&mut self, point: Point, color: Color) {
        let neighbouring: Vec<usize> = self
            .groups
            .iter()
            .enumerate()
            .filter(|(_, g)| g.color() == color && g.liberties_contain(point))
            .map(|(i, _)| i)
            .collect();

        self.grid.set(point, Some(color));

        match neighbouring.as_slice() {
            [] => self.groups.push(Group::new(color, point, &self.grid)),
            &[i] => self.groups[i].add(point, &self.grid),
            _ => {
                // Remove from the back so earlier indices stay valid
                let merging: Vec<Group> = neighbouring
                    .iter()
                    .rev()
                    .map(|&i| self.groups.remove(i))
                    .collect();
                let merged = Group::combine(color, merging, point, &self.grid);
                self.groups.push(merged);
            }
        }

        self.refresh_liberties();
    }

    fn refresh_liberties(&mut self) {
        for group in &mut self.groups {
            group.refresh_liberties(&self.grid);
        }
    }

    fn switch_turns(&mut self, passed: bool) -> TurnResult {
        if self.last_turn_was_pass && passed {
            self.end();
            return TurnResult::Ended(self.score);
        }

        self.last_turn_was_pass = passed;
        self.turn = self.turn.opponent();
        self.sweep_captures();
        TurnResult::InProgress
    }

    /// Remove every group left without liberties.
    ///
    /// Groups of the side now to move go first, so a capture made by the
    /// previous move is applied before that move's own stones are examined.
    fn sweep_captures(&mut self) {
        for color in [self.turn, self.turn.opponent()] {
            self.refresh_liberties();
            let (captured, alive): (Vec<Group>, Vec<Group>) = std::mem::take(&mut self.groups)
                .into_iter()
                .partition(|g| g.color() == color && g.liberty_count() == 0);
            self.groups = alive;

            for group in captured {
                debug!(%color, stones = group.members().len(), "group captured");
                for &point in group.members() {
                    self.grid.set(point, None);
                }
            }
        }
        self.refresh_liberties();
    }

    fn end(&mut self) {
        self.score = scoring::score(&self.groups);
        self.status = GameStatus::Ended;
        info!(
            black = self.score.black,
            white = self.score.white,
            result = %self.score.result_string(),
            "game over"
        );
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IllegalReason;

    /// Play alternating moves; `None` passes.
    fn setup(size: BoardSize, moves: &[Option<(usize, usize)>]) -> GameState {
        let mut state = GameState::new(size);
        for mv in moves {
            match *mv {
                Some((r, c)) => state
                    .place_stone(r, c)
                    .unwrap_or_else(|e| panic!("setup move ({r}, {c}) failed: {e}")),
                None => {
                    state.pass();
                }
            }
        }
        state
    }

    /// Every occupied cell is in exactly one group and no group has stray members.
    fn assert_partition(state: &GameState) {
        for cell in state.grid().cells() {
            let owners = state
                .groups()
                .iter()
                .filter(|g| g.contains(cell.point))
                .count();
            match cell.occupant {
                Some(color) => {
                    assert_eq!(owners, 1, "{:?} owned by {owners} groups", cell.point);
                    assert_eq!(state.group_at(cell.point).map(Group::color), Some(color));
                }
                None => assert_eq!(owners, 0, "empty {:?} is in a group", cell.point),
            }
        }
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new(BoardSize::Small);
        assert_eq!(state.current_turn(), Color::Black);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(state.groups().is_empty());
        assert_eq!(state.last_move(Color::Black), None);
        assert_eq!(state.last_move(Color::White), None);
        assert_eq!(state.moves_played(), 0);
    }

    #[test]
    fn test_with_size() {
        assert_eq!(GameState::with_size(13).map(|s| s.size()), Ok(BoardSize::Medium));
        assert_eq!(GameState::with_size(10), Err(BoardSizeError(10)));
    }

    #[test]
    fn test_place_switches_turn_and_records_last_move() {
        let mut state = GameState::new(BoardSize::Small);
        state.place_stone(2, 2).unwrap();
        assert_eq!(state.current_turn(), Color::White);
        assert_eq!(state.last_move(Color::Black), Some(Point::new(2, 2)));
        assert_eq!(state.occupant_at(2, 2), Ok(Some(Color::Black)));
        assert_eq!(state.moves_played(), 1);
        assert!(!state.last_turn_was_pass());
    }

    #[test]
    fn test_adjacent_stone_joins_group() {
        let state = setup(BoardSize::Small, &[Some((4, 4)), None, Some((4, 5))]);
        assert_eq!(state.groups().len(), 1);
        assert_eq!(state.group_at(Point::new(4, 4)).unwrap().members().len(), 2);
        assert_eq!(state.liberties_at(Point::new(4, 5)).unwrap().len(), 6);
    }

    #[test]
    fn test_merge_three_groups() {
        // Black at (4,3), (3,4), (4,5), then (4,4) joins all three
        let state = setup(
            BoardSize::Small,
            &[
                Some((4, 3)),
                Some((0, 0)),
                Some((3, 4)),
                Some((0, 8)),
                Some((4, 5)),
                Some((8, 0)),
                Some((4, 4)),
            ],
        );
        let black: Vec<&Group> = state
            .groups()
            .iter()
            .filter(|g| g.color() == Color::Black)
            .collect();
        assert_eq!(black.len(), 1);
        assert_eq!(black[0].members().len(), 4);
        // Merged group is appended after the white groups
        assert_eq!(state.groups().last().map(Group::color), Some(Color::Black));
        assert_partition(&state);
    }

    #[test]
    fn test_occupied_is_rejected_for_both_colors() {
        let mut state = setup(BoardSize::Small, &[Some((3, 3)), Some((5, 5))]);
        for (r, c) in [(3, 3), (5, 5)] {
            assert_eq!(
                state.place_stone(r, c),
                Err(MoveError::IllegalMove(IllegalReason::Occupied))
            );
        }
        state.pass();
        for (r, c) in [(3, 3), (5, 5)] {
            assert_eq!(
                state.place_stone(r, c),
                Err(MoveError::IllegalMove(IllegalReason::Occupied))
            );
        }
    }

    #[test]
    fn test_out_of_bounds() {
        let mut state = GameState::new(BoardSize::Small);
        assert_eq!(
            state.place_stone(9, 0),
            Err(MoveError::OutOfBounds {
                row: 9,
                col: 0,
                size: 9
            })
        );
        assert!(state.is_move_illegal(0, 9));
        assert!(state.occupant_at(0, 9).is_err());
    }

    #[test]
    fn test_rejection_is_atomic() {
        let mut state = setup(
            BoardSize::Small,
            &[Some((0, 1)), Some((5, 5)), Some((1, 0))],
        );
        let before = state.clone();
        assert_eq!(
            state.place_stone(0, 0),
            Err(MoveError::IllegalMove(IllegalReason::Suicide))
        );
        assert_eq!(state, before);
        assert!(state.place_stone(20, 20).is_err());
        assert_eq!(state, before);
        assert!(state.place_stone(0, 1).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_single_stone_capture() {
        // White (4,4) surrounded by Black
        let state = setup(
            BoardSize::Small,
            &[
                Some((3, 4)),
                Some((4, 4)),
                Some((5, 4)),
                Some((0, 0)),
                Some((4, 3)),
                Some((0, 8)),
                Some((4, 5)),
            ],
        );
        assert_eq!(state.occupant_at(4, 4), Ok(None));
        assert!(state.group_at(Point::new(4, 4)).is_none());
        // The capturing stones regained the liberty
        assert!(
            state
                .liberties_at(Point::new(3, 4))
                .unwrap()
                .contains(&Point::new(4, 4))
        );
        assert_partition(&state);
    }

    #[test]
    fn test_capture_before_suicide() {
        // r0: .  W  B
        // r1: B  W  B
        // r2: W  B
        // Black at (0,0) has no liberties of its own but takes White's last one.
        let mut state = setup(
            BoardSize::Small,
            &[
                Some((0, 2)),
                Some((0, 1)),
                Some((1, 2)),
                Some((1, 1)),
                Some((2, 1)),
                Some((2, 0)),
                Some((1, 0)),
                None,
            ],
        );
        assert_eq!(state.current_turn(), Color::Black);
        assert!(!state.is_move_illegal(0, 0));

        state.place_stone(0, 0).unwrap();
        assert_eq!(state.occupant_at(0, 1), Ok(None));
        assert_eq!(state.occupant_at(1, 1), Ok(None));
        assert_eq!(state.occupant_at(0, 0), Ok(Some(Color::Black)));
        assert_eq!(state.occupant_at(1, 0), Ok(Some(Color::Black)));
        // White (2,0) still has (3,0)
        assert_eq!(state.occupant_at(2, 0), Ok(Some(Color::White)));
        assert_eq!(
            state.liberties_at(Point::new(0, 0)).unwrap().len(),
            2,
            "corner group should own the two vacated points"
        );
        assert_partition(&state);
    }

    #[test]
    fn test_pass_pass_ends_game() {
        let mut state = setup(BoardSize::Small, &[Some((0, 0)), Some((8, 8))]);
        assert_eq!(state.pass(), TurnResult::InProgress);
        assert_eq!(state.current_turn(), Color::White);
        assert!(state.last_turn_was_pass());

        let expected = Score { black: 2, white: 2 };
        assert_eq!(state.pass(), TurnResult::Ended(expected));
        assert!(state.is_over());
        assert_eq!(state.score(), expected);

        // Terminal: nothing changes afterwards
        let before = state.clone();
        assert_eq!(state.pass(), TurnResult::Ended(expected));
        assert_eq!(state.place_stone(4, 4), Err(MoveError::GameOver));
        assert!(state.is_move_illegal(4, 4));
        assert_eq!(state, before);
    }

    #[test]
    fn test_placement_resets_pass_flag() {
        let mut state = GameState::new(BoardSize::Small);
        state.pass();
        state.place_stone(4, 4).unwrap();
        assert_eq!(state.pass(), TurnResult::InProgress);
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_display() {
        let state = setup(BoardSize::Small, &[Some((0, 0)), Some((0, 1))]);
        assert!(state.to_string().starts_with(" 9 X O . "));
    }
}
