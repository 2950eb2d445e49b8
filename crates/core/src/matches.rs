//! Match types produced by a board scan
//!
//! Both types are fixed-capacity: a run can never be longer than a row, and an
//! 8x8 board holds at most two runs per line in each orientation.

use arrayvec::ArrayVec;

use crate::types::{Coord, BOARD_SIZE};

/// Upper bound on matches in one scan (2 per row + 2 per column)
const MAX_MATCHES: usize = 4 * BOARD_SIZE as usize;

/// A run of three or more same-kind tiles along one row or column
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Match {
    coords: ArrayVec<Coord, { BOARD_SIZE as usize }>,
}

impl Match {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, c: Coord) {
        self.coords.push(c);
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords.iter().copied()
    }

    /// Check whether a coordinate is part of this run
    pub fn matched(&self, c: Coord) -> bool {
        self.coords.contains(&c)
    }

    /// Element at index `len / 2` (anchor for score popups)
    pub fn mid_square(&self) -> Coord {
        self.coords[self.coords.len() / 2]
    }
}

/// All matches found by one scan, in scan order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchSet {
    matches: ArrayVec<Match, MAX_MATCHES>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, m: Match) {
        self.matches.push(m);
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    /// Check whether any match contains the coordinate
    pub fn matched(&self, c: Coord) -> bool {
        self.matches.iter().any(|m| m.matched(c))
    }

    /// Every coordinate of every match (cells in a row and a column match repeat)
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.matches.iter().flat_map(Match::iter)
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(coords: &[(u8, u8)]) -> Match {
        let mut m = Match::new();
        for &(x, y) in coords {
            m.push(Coord::new(x, y));
        }
        m
    }

    #[test]
    fn test_mid_square_of_odd_and_even_runs() {
        assert_eq!(run(&[(2, 0), (3, 0), (4, 0)]).mid_square(), Coord::new(3, 0));
        assert_eq!(
            run(&[(0, 5), (0, 6), (0, 7), (0, 8)]).mid_square(),
            Coord::new(0, 7)
        );
    }

    #[test]
    fn test_match_set_membership() {
        let mut set = MatchSet::new();
        assert!(set.is_empty());
        set.push(run(&[(0, 0), (1, 0), (2, 0)]));
        set.push(run(&[(5, 3), (5, 4), (5, 5)]));

        assert_eq!(set.len(), 2);
        assert!(set.matched(Coord::new(1, 0)));
        assert!(set.matched(Coord::new(5, 5)));
        assert!(!set.matched(Coord::new(3, 0)));
        assert_eq!(set.coords().count(), 6);
        assert_eq!((&set).into_iter().map(Match::len).sum::<usize>(), 6);
    }
}
