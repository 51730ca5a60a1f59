//! Connected groups of same-color stones and their liberties.

use std::collections::BTreeSet;

use crate::board::{Color, Grid, Point};

/// A maximal 4-connected set of same-color stones.
///
/// Members are stored by coordinate. The liberty set is derived from the grid
/// and must be refreshed with [`Group::refresh_liberties`] whenever this
/// group's membership or any nearby occupancy changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    color: Color,
    members: BTreeSet<Point>,
    liberties: BTreeSet<Point>,
}

impl Group {
    /// Create a single-stone group. Liberties are computed from `grid`.
    pub fn new(color: Color, point: Point, grid: &Grid) -> Self {
        let mut group = Self {
            color,
            members: BTreeSet::from([point]),
            liberties: BTreeSet::new(),
        };
        group.refresh_liberties(grid);
        group
    }

    /// Merge several groups of one color plus a joining stone into one group.
    pub fn combine(color: Color, groups: Vec<Group>, joining: Point, grid: &Grid) -> Self {
        let mut members: BTreeSet<Point> = groups.into_iter().flat_map(|g| g.members).collect();
        members.insert(joining);
        let mut group = Self {
            color,
            members,
            liberties: BTreeSet::new(),
        };
        group.refresh_liberties(grid);
        group
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn members(&self) -> &BTreeSet<Point> {
        &self.members
    }

    pub fn liberties(&self) -> &BTreeSet<Point> {
        &self.liberties
    }

    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.members.contains(&point)
    }

    pub fn liberties_contain(&self, point: Point) -> bool {
        self.liberties.contains(&point)
    }

    /// Add a stone and refresh liberties.
    pub fn add(&mut self, point: Point, grid: &Grid) {
        self.members.insert(point);
        self.refresh_liberties(grid);
    }

    /// Recompute liberties from scratch: every empty neighbor of every member.
    pub fn refresh_liberties(&mut self, grid: &Grid) {
        self.liberties = compute_liberties(&self.members, grid);
    }

    /// True if a stone at `point` would leave this group with no liberties.
    pub fn would_be_captured_by_move_at(&self, point: Point) -> bool {
        self.liberty_count() == 1 && self.liberties_contain(point)
    }
}

fn compute_liberties(members: &BTreeSet<Point>, grid: &Grid) -> BTreeSet<Point> {
    members
        .iter()
        .flat_map(|&m| grid.neighbors_of(m))
        .filter(|&n| grid.get(n).is_none())
        .collect()
}
