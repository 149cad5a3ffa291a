//! The movement model of the grid. The move deltas and the distance estimate used by A* live
//! side by side here: the estimate is only admissible for exactly these moves, so changing one
//! means changing the other.
use grid_util::point::Point;
use smallvec::SmallVec;

use crate::N_SMALLVEC_SIZE;

/// 4-neighborhood ([von Neumann](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood)) movement.
/// Diagonal steps are never allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neumann;

impl Neumann {
    /// Up, down, left, right. Successors are always generated in this order, which keeps the
    /// tie-breaking of the search reproducible.
    pub const DELTAS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

    /// All four neighbours of `point`, in [DELTAS](Self::DELTAS) order, without bounds checks.
    pub fn neighborhood(point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        Self::DELTAS
            .iter()
            .map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .collect()
    }

    /// Minimal number of moves between two points, i.e. the Manhattan distance.
    pub fn distance(p1: &Point, p2: &Point) -> i32 {
        (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighborhood_order() {
        let n = Neumann::neighborhood(&Point::new(3, 3));
        assert_eq!(
            n.as_slice(),
            &[
                Point::new(3, 2),
                Point::new(3, 4),
                Point::new(2, 3),
                Point::new(4, 3)
            ]
        );
    }

    #[test]
    fn distance_matches_single_moves() {
        let p = Point::new(-2, 7);
        for q in Neumann::neighborhood(&p) {
            assert_eq!(Neumann::distance(&p, &q), 1);
        }
        assert_eq!(Neumann::distance(&Point::new(0, 0), &Point::new(4, -3)), 7);
    }
}
