//! End-of-game territory count.
//!
//! Territory is approximated from liberties: each color is credited with the
//! empty points adjacent to its groups, minus any point that also touches the
//! other color. Empty points that touch no stone count for nobody, so large
//! enclosed areas are under-counted.

use std::collections::BTreeSet;
use std::fmt;

use crate::board::{Color, Point};
use crate::group::Group;

/// Territory per color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    pub fn get(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// Winning color, or `None` for a draw.
    pub fn winner(&self) -> Option<Color> {
        use std::cmp::Ordering;
        match self.black.cmp(&self.white) {
            Ordering::Greater => Some(Color::Black),
            Ordering::Less => Some(Color::White),
            Ordering::Equal => None,
        }
    }

    /// Result in GTP notation: `B+3`, `W+1` or `0`.
    pub fn result_string(&self) -> String {
        match self.winner() {
            Some(Color::Black) => format!("B+{}", self.black - self.white),
            Some(Color::White) => format!("W+{}", self.white - self.black),
            None => "0".to_string(),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Black {} - White {}", self.black, self.white)
    }
}

fn liberty_union(groups: &[Group], color: Color) -> BTreeSet<Point> {
    groups
        .iter()
        .filter(|g| g.color() == color)
        .flat_map(|g| g.liberties().iter().copied())
        .collect()
}

/// Score a set of groups whose liberties are up to date.
pub fn score(groups: &[Group]) -> Score {
    let black = liberty_union(groups, Color::Black);
    let white = liberty_union(groups, Color::White);
    Score {
        black: black.difference(&white).count(),
        white: white.difference(&black).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardSize, Grid};

    fn groups_on(stones: &[(usize, usize, Color)]) -> Vec<Group> {
        let mut grid = Grid::new(BoardSize::Small);
        for &(r, c, color) in stones {
            grid.set(Point::new(r, c), Some(color));
        }
        stones
            .iter()
            .map(|&(r, c, color)| Group::new(color, Point::new(r, c), &grid))
            .collect()
    }

    #[test]
    fn test_empty_board() {
        assert_eq!(score(&[]), Score::default());
        assert_eq!(Score::default().winner(), None);
    }

    #[test]
    fn test_contested_point_counts_for_nobody() {
        // (4,5) touches both stones
        let groups = groups_on(&[(4, 4, Color::Black), (4, 6, Color::White)]);
        assert_eq!(score(&groups), Score { black: 3, white: 3 });
    }

    #[test]
    fn test_shared_liberties_counted_once() {
        // (0,1) and (1,0) are both liberties of two black stones
        let groups = groups_on(&[(0, 0, Color::Black), (1, 1, Color::Black), (8, 8, Color::White)]);
        let s = score(&groups);
        assert_eq!(s, Score { black: 4, white: 2 });
        assert_eq!(s.winner(), Some(Color::Black));
        assert_eq!(s.result_string(), "B+2");
        assert_eq!(s.get(Color::White), 2);
    }

    #[test]
    fn test_result_string() {
        assert_eq!(Score { black: 1, white: 4 }.result_string(), "W+3");
        assert_eq!(Score { black: 2, white: 2 }.result_string(), "0");
        assert_eq!(Score { black: 2, white: 2 }.to_string(), "Black 2 - White 2");
    }
}
