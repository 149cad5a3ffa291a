use grid_util::point::Point;

use crate::{neighborhood::Neumann, solver::GridSolver};

/// A* with the Manhattan distance, which never overestimates on a 4-grid where every step costs
/// at least [ORDINARY_COST](crate::ORDINARY_COST). Paths are therefore as cheap as those of
/// [DijkstraSolver](super::dijkstra::DijkstraSolver).
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl GridSolver for AstarSolver {
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        Neumann::distance(p1, p2) * crate::ORDINARY_COST
    }
}

#[cfg(test)]
mod tests {
    use crate::TollGrid;

    use super::*;

    /// Asserts that the optimal 4 step solution is found.
    #[test]
    fn solve_simple_problem() {
        // |S  |
        // | # |
        // |  E|
        let grid = TollGrid::from_cells(3, 3, [Point::new(1, 1)], []);
        let start = Point::new(0, 0);
        let end = Point::new(2, 2);
        let result = AstarSolver.search(&grid, start, end).unwrap();
        assert_eq!(result.path.len(), 5);
        assert_eq!(result.total_cost, 4);
    }

    #[test]
    fn heuristic_is_zero_at_goal() {
        let p = Point::new(4, 2);
        assert_eq!(AstarSolver.heuristic(&p, &p), 0);
        assert_eq!(AstarSolver.heuristic(&Point::new(0, 0), &p), 6);
    }

    /// A* only looks into the direction of the goal on an open grid.
    #[test]
    fn expansion_stays_in_bounding_box() {
        let grid = TollGrid::square(9);
        let start = Point::new(4, 4);
        let end = Point::new(8, 4);
        let result = AstarSolver.search(&grid, start, end).unwrap();
        assert_eq!(result.expanded_count, 5);
        assert!(result.visitation_order.iter().all(|p| p.y == 4 && p.x >= 4));
    }
}
