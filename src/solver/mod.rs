use crate::best_first::{best_first, Exploration};
use crate::error::{ConfigError, SearchError};
use crate::{pathing_grid::TollGrid, N_SMALLVEC_SIZE};
use core::fmt;
use grid_util::point::Point;
use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;
use std::time::{Duration, Instant};

pub mod astar;
pub mod dijkstra;

use astar::AstarSolver;
use dijkstra::DijkstraSolver;

/// Everything a single search produces. Owns its data, so it stays valid when the grid it was
/// computed on is edited afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResult {
    /// Start to goal inclusive, empty if the goal could not be reached.
    pub path: Vec<Point>,
    /// Cost of `path`, zero if it is empty.
    pub total_cost: i32,
    /// Cells in the order they were expanded, starting with the start cell.
    pub visitation_order: Vec<Point>,
    pub elapsed_millis: f64,
    pub expanded_count: usize,
}

impl SearchResult {
    fn new(exploration: Exploration<Point, i32>, elapsed: Duration) -> SearchResult {
        let Exploration {
            path,
            cost,
            visited,
        } = exploration;
        SearchResult {
            path,
            total_cost: cost,
            expanded_count: visited.len(),
            visitation_order: visited,
            elapsed_millis: elapsed.as_secs_f64() * 1000.0,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Replays the expansion one cell at a time; pacing is left to the consumer.
    pub fn replay(&self) -> impl Iterator<Item = &Point> + '_ {
        self.visitation_order.iter()
    }
}

pub trait GridSolver {
    /// Estimate of the remaining cost from `p1` to the goal `p2`.
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32;

    /// Open neighbours of `node` together with the cost of stepping onto them.
    fn successors(
        &self,
        grid: &TollGrid,
        node: &Point,
    ) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        grid.neighborhood_points(node)
            .into_iter()
            .filter(|p| !grid.is_blocked(p))
            .map(|p| (p, grid.edge_cost(node, &p)))
            .collect()
    }

    /// Computes a least-cost path from `start` to `goal`. Both endpoints have to lie on the grid
    /// and must not be walls; an unreachable goal yields an empty path.
    fn search(
        &self,
        grid: &TollGrid,
        start: Point,
        goal: Point,
    ) -> Result<SearchResult, SearchError> {
        grid.check_endpoint(&start)?;
        grid.check_endpoint(&goal)?;
        Ok(self.search_unchecked(grid, start, goal))
    }

    /// Like [search](Self::search) without validating the endpoints. A walled-off goal is simply
    /// never reached, exhausting the component of `start`.
    fn search_unchecked(&self, grid: &TollGrid, start: Point, goal: Point) -> SearchResult {
        let before = Instant::now();
        let exploration = best_first(
            &start,
            |node| self.successors(grid, node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        );
        let result = SearchResult::new(exploration, before.elapsed());
        if result.is_found() {
            debug!(
                "Found path {} -> {} with cost {} after expanding {} cells",
                start, goal, result.total_cost, result.expanded_count
            );
        } else {
            debug!(
                "{} is not reachable from {}, expanded {} cells",
                goal, start, result.expanded_count
            );
        }
        result
    }
}

/// Selects the solver: uniform-cost search is Dijkstra's algorithm, heuristic-guided search is A*.
/// Both find paths of equal cost; they differ in how many cells they expand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchMode {
    #[serde(rename = "Dijkstra")]
    UniformCost,
    #[default]
    #[serde(rename = "A*")]
    HeuristicGuided,
}

impl SearchMode {
    pub fn solver(self) -> &'static dyn GridSolver {
        match self {
            SearchMode::UniformCost => &DijkstraSolver,
            SearchMode::HeuristicGuided => &AstarSolver,
        }
    }

    pub fn toggled(self) -> SearchMode {
        match self {
            SearchMode::UniformCost => SearchMode::HeuristicGuided,
            SearchMode::HeuristicGuided => SearchMode::UniformCost,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchMode::UniformCost => "Dijkstra",
            SearchMode::HeuristicGuided => "A*",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SearchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A*" | "astar" | "a-star" => Ok(SearchMode::HeuristicGuided),
            "Dijkstra" | "dijkstra" => Ok(SearchMode::UniformCost),
            other => Err(ConfigError::UnknownMode(other.to_owned())),
        }
    }
}

/// Runs one search from `start` to `end` on `grid` with the solver selected by `mode`.
pub fn search(
    start: Point,
    end: Point,
    grid: &TollGrid,
    mode: SearchMode,
) -> Result<SearchResult, SearchError> {
    mode.solver().search(grid, start, end)
}
