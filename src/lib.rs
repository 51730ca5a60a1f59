//! Goban: a rules engine for the game of Go.
//!
//! This crate tracks the board, groups and liberties of a two-player game on
//! a 9x9, 13x13 or 19x19 grid, decides move legality, resolves captures, and
//! scores the game once both players pass in succession.
//!
//! ## Modules
//!
//! - [`constants`] - Board sizes and limits
//! - [`board`] - Colors, points, cells and the grid
//! - [`group`] - Connected groups and their liberties
//! - [`legality`] - Ko and suicide checks
//! - [`game`] - Game state, turn sequencing and capture resolution
//! - [`scoring`] - Liberty-based territory count
//! - [`playout`] - Random legal moves and random games
//! - [`gtp`] - Go Text Protocol front end
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use goban::board::{BoardSize, Color};
//! use goban::game::{GameState, TurnResult};
//!
//! let mut game = GameState::new(BoardSize::Small);
//! game.place_stone(2, 2).unwrap();
//! assert_eq!(game.current_turn(), Color::White);
//!
//! game.pass();
//! game.place_stone(6, 6).unwrap();
//! game.pass();
//! match game.pass() {
//!     TurnResult::Ended(score) => println!("{score}"),
//!     TurnResult::InProgress => unreachable!(),
//! }
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod group;
pub mod gtp;
pub mod legality;
pub mod playout;
pub mod scoring;
