//! # toll_grid
//!
//! Shortest paths on a small grid where some cells are walls and some are toll cells. A single
//! best-first search runs either as [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
//! or as [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic. Besides the
//! path and its cost, every search reports the order in which cells were expanded so that a
//! front-end can replay the search step by step, together with the elapsed time and the number of
//! expanded cells.
//!
//! Entering an ordinary cell costs [ORDINARY_COST], entering a toll cell costs [TOLL_COST]. A
//! [CostModel] turns a found path into fuel and toll figures, and [RoutePlanner] keeps a grid,
//! two endpoints and the latest result together, re-running the search after every edit.
//!
//! ```
//! use toll_grid::{search, Point, SearchMode, TollGrid};
//!
//! let mut grid = TollGrid::square(5);
//! grid.set_tolled(Point::new(2, 0), true);
//! let result = search(Point::new(0, 0), Point::new(4, 0), &grid, SearchMode::HeuristicGuided)
//!     .unwrap();
//! assert_eq!(result.total_cost, 6);
//! assert!(!result.path.contains(&Point::new(2, 0)));
//! ```
mod best_first;
pub mod cost_model;
pub mod error;
pub mod neighborhood;
pub mod planner;
pub mod solver;
pub mod pathing_grid;

pub use cost_model::{CostModel, TripCost};
pub use error::{ConfigError, SearchError};
pub use grid_util::point::Point;
pub use planner::{PlannerConfig, RoutePlanner};
pub use solver::{search, GridSolver, SearchMode, SearchResult};
pub use pathing_grid::TollGrid;

/// Cost of entering an ordinary cell.
pub const ORDINARY_COST: i32 = 1;
/// Cost of entering a toll cell.
pub const TOLL_COST: i32 = 10;

/// Inline capacity of neighbour lists, one slot per move direction.
pub const N_SMALLVEC_SIZE: usize = 4;
