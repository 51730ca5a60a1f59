//! Constants for board dimensions, game limits, and front-end defaults.
//!
//! Board size is chosen at runtime from the three standard sizes rather than
//! at compile time, so a single binary can serve 9x9, 13x13 and 19x19 games.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest supported board (9x9).
pub const SMALL_BOARD: usize = 9;

/// Medium board (13x13).
pub const MEDIUM_BOARD: usize = 13;

/// Full-size board (19x19).
pub const LARGE_BOARD: usize = 19;

/// Board sizes accepted by [`crate::board::BoardSize`].
pub const SUPPORTED_SIZES: [usize; 3] = [SMALL_BOARD, MEDIUM_BOARD, LARGE_BOARD];

/// Size used when no size is requested.
pub const DEFAULT_SIZE: usize = LARGE_BOARD;

/// Maximum game length as a multiple of the board area.
///
/// Random playouts stop after `MAX_GAME_LEN_FACTOR * N * N` placements to
/// allow for captures and replays without looping forever.
pub const MAX_GAME_LEN_FACTOR: usize = 3;

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Row/column offsets to the orthogonal neighbors of a point.
/// Order: up, right, down, left.
pub const DELTA: [(isize, isize); 4] = [
    (-1, 0), // Up (previous row)
    (0, 1),  // Right (next column)
    (1, 0),  // Down (next row)
    (0, -1), // Left (previous column)
];

// =============================================================================
// Text Protocol
// =============================================================================

/// Engine name reported over GTP.
pub const ENGINE_NAME: &str = "goban";

/// Column letters used in vertex notation. `I` is skipped by convention.
pub const COLUMN_LETTERS: &[u8; 19] = b"ABCDEFGHJKLMNOPQRST";

/// Characters used when rendering the board as text.
pub const BLACK_CHAR: char = 'X';
pub const WHITE_CHAR: char = 'O';
pub const EMPTY_CHAR: char = '.';
