use grid_util::point::Point;
use log::info;
use serde::{Deserialize, Serialize};

use crate::cost_model::{CostModel, TripCost};
use crate::error::ConfigError;
use crate::pathing_grid::TollGrid;
use crate::solver::{SearchMode, SearchResult};

/// Initial state of a [RoutePlanner].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub grid_size: usize,
    pub start: (i32, i32),
    pub end: (i32, i32),
    pub mode: SearchMode,
    pub costs: CostModel,
}

impl Default for PlannerConfig {
    fn default() -> PlannerConfig {
        PlannerConfig {
            grid_size: 20,
            start: (2, 9),
            end: (17, 9),
            mode: SearchMode::HeuristicGuided,
            costs: CostModel::default(),
        }
    }
}

impl PlannerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let size = i32::try_from(self.grid_size).map_err(|_| ConfigError::GridTooLarge {
            size: self.grid_size,
        })?;
        for (x, y) in [self.start, self.end] {
            if x < 0 || y < 0 || x >= size || y >= size {
                return Err(ConfigError::EndpointOutOfBounds {
                    x,
                    y,
                    size: self.grid_size,
                });
            }
        }
        if self.start == self.end {
            let (x, y) = self.start;
            return Err(ConfigError::SameEndpoints { x, y });
        }
        self.costs.validate()
    }
}

/// Keeps a grid, its two endpoints and the latest search result together. Every edit that
/// changes the state runs a fresh search, so [result](Self::result) and [trip](Self::trip) always
/// describe the current grid. Endpoints are never walls: painting a wall onto an endpoint and
/// moving an endpoint onto a wall are refused.
#[derive(Clone, Debug)]
pub struct RoutePlanner {
    grid: TollGrid,
    start: Point,
    end: Point,
    mode: SearchMode,
    costs: CostModel,
    result: SearchResult,
    trip: TripCost,
}

impl RoutePlanner {
    pub fn new(config: PlannerConfig) -> Result<RoutePlanner, ConfigError> {
        config.validate()?;
        let mut planner = RoutePlanner {
            grid: TollGrid::square(config.grid_size),
            start: Point::new(config.start.0, config.start.1),
            end: Point::new(config.end.0, config.end.1),
            mode: config.mode,
            costs: config.costs,
            result: SearchResult::default(),
            trip: TripCost::default(),
        };
        planner.replan();
        Ok(planner)
    }

    pub fn grid(&self) -> &TollGrid {
        &self.grid
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn costs(&self) -> &CostModel {
        &self.costs
    }

    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    pub fn trip(&self) -> &TripCost {
        &self.trip
    }

    fn is_endpoint(&self, point: &Point) -> bool {
        *point == self.start || *point == self.end
    }

    /// Places a wall, replacing a toll on the same cell. Endpoints cannot be walled.
    pub fn paint_wall(&mut self, point: Point) -> bool {
        if self.is_endpoint(&point) {
            return false;
        }
        self.edit(|grid| grid.set_blocked(point, true))
    }

    /// Places a toll cell, replacing a wall on the same cell. Endpoints may carry a toll.
    pub fn paint_toll(&mut self, point: Point) -> bool {
        self.edit(|grid| grid.set_tolled(point, true))
    }

    pub fn erase(&mut self, point: Point) -> bool {
        self.edit(|grid| grid.clear_cell(point))
    }

    /// Removes every wall and toll. Returns false if the grid was already empty.
    pub fn clear_all(&mut self) -> bool {
        self.edit(|grid| grid.clear_all())
    }

    pub fn move_start(&mut self, point: Point) -> bool {
        if !self.can_host_endpoint(&point) {
            return false;
        }
        self.start = point;
        self.replan();
        true
    }

    pub fn move_end(&mut self, point: Point) -> bool {
        if !self.can_host_endpoint(&point) {
            return false;
        }
        self.end = point;
        self.replan();
        true
    }

    pub fn set_mode(&mut self, mode: SearchMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.replan();
        true
    }

    /// Switches to the other search mode. Always a change, so always re-plans.
    pub fn toggle_mode(&mut self) -> bool {
        self.set_mode(self.mode.toggled())
    }

    /// Runs both solvers on the current state, uniform-cost first.
    pub fn compare_modes(&self) -> (SearchResult, SearchResult) {
        (
            self.run(SearchMode::UniformCost),
            self.run(SearchMode::HeuristicGuided),
        )
    }

    fn can_host_endpoint(&self, point: &Point) -> bool {
        self.grid.in_bounds(point) && !self.grid.is_blocked(point) && !self.is_endpoint(point)
    }

    fn edit<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut TollGrid) -> bool,
    {
        let changed = f(&mut self.grid);
        if changed {
            self.replan();
        }
        changed
    }

    fn run(&self, mode: SearchMode) -> SearchResult {
        // Endpoints are kept valid by every edit, so validation can be skipped.
        mode.solver()
            .search_unchecked(&self.grid, self.start, self.end)
    }

    fn replan(&mut self) {
        self.result = self.run(self.mode);
        self.trip = self.costs.trip_cost(&self.result.path, &self.grid);
        info!(
            "{}: {} -> {}, cost {}, {} cells expanded in {:.2} ms, trip total {:.2}",
            self.mode,
            self.start,
            self.end,
            self.result.total_cost,
            self.result.expanded_count,
            self.result.elapsed_millis,
            self.trip.total
        );
    }
}
