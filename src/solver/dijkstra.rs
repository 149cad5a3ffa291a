use grid_util::point::Point;

use crate::solver::GridSolver;

/// Uniform-cost search: a zero heuristic turns the best-first search into Dijkstra's algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Point, _: &Point) -> i32 {
        0
    }
}
