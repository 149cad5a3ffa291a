use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use itertools::{iproduct, Itertools};
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::error::SearchError;
use crate::neighborhood::Neumann;
use crate::{N_SMALLVEC_SIZE, ORDINARY_COST, TOLL_COST};

/// [TollGrid] is the caller-owned state a search runs over: two [BoolGrid] layers marking walls
/// ([true] in `blocked`) and toll cells ([true] in `tolled`). A cell is never both; marking it
/// as one clears the other. Connected components of the open cells are tracked with a
/// [UnionFind] structure for reachability queries.
#[derive(Clone, Debug)]
pub struct TollGrid {
    blocked: BoolGrid,
    tolled: BoolGrid,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Default for TollGrid {
    fn default() -> TollGrid {
        TollGrid {
            blocked: BoolGrid::default(),
            tolled: BoolGrid::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl TollGrid {
    /// An open grid of the given dimensions without walls or tolls.
    pub fn new(width: usize, height: usize) -> TollGrid {
        let mut grid = TollGrid {
            blocked: BoolGrid::new(width, height, false),
            tolled: BoolGrid::new(width, height, false),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    pub fn square(size: usize) -> TollGrid {
        TollGrid::new(size, size)
    }

    /// Builds a grid from explicit wall and toll sets. Out of bounds cells are ignored; a cell
    /// listed in both sets ends up as a toll cell.
    pub fn from_cells<B, T>(width: usize, height: usize, blocked: B, tolled: T) -> TollGrid
    where
        B: IntoIterator<Item = Point>,
        T: IntoIterator<Item = Point>,
    {
        let mut grid = TollGrid::new(width, height);
        for p in blocked {
            grid.set_blocked(p, true);
        }
        for p in tolled {
            grid.set_tolled(p, true);
        }
        grid.update();
        grid
    }

    pub fn width(&self) -> usize {
        self.blocked.width()
    }

    pub fn height(&self) -> usize {
        self.blocked.height()
    }

    pub fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width()
            && (point.y as usize) < self.height()
    }

    pub fn is_blocked(&self, point: &Point) -> bool {
        self.in_bounds(point) && self.blocked.get_point(*point)
    }

    pub fn is_tolled(&self, point: &Point) -> bool {
        self.in_bounds(point) && self.tolled.get_point(*point)
    }

    /// Marks or unmarks a wall, clearing a toll on the same cell. Joins newly connected
    /// components and flags the components as dirty if they are (potentially) broken apart.
    /// Returns whether anything changed.
    pub fn set_blocked(&mut self, point: Point, blocked: bool) -> bool {
        if !self.in_bounds(&point) {
            return false;
        }
        let was_blocked = self.blocked.get_point(point);
        let was_tolled = self.tolled.get_point(point);
        if blocked {
            self.tolled.set_point(point, false);
            if !was_blocked {
                self.components_dirty = true;
            }
        }
        self.blocked.set_point(point, blocked);
        if was_blocked && !blocked {
            self.join_neighbours(point);
        }
        was_blocked != blocked || (blocked && was_tolled)
    }

    /// Marks or unmarks a toll cell, removing a wall on the same cell. Returns whether anything
    /// changed.
    pub fn set_tolled(&mut self, point: Point, tolled: bool) -> bool {
        if !self.in_bounds(&point) {
            return false;
        }
        let was_tolled = self.tolled.get_point(point);
        let was_blocked = self.blocked.get_point(point);
        if tolled && was_blocked {
            self.blocked.set_point(point, false);
            self.join_neighbours(point);
        }
        self.tolled.set_point(point, tolled);
        was_tolled != tolled || (tolled && was_blocked)
    }

    /// Turns a cell back into an ordinary open cell.
    pub fn clear_cell(&mut self, point: Point) -> bool {
        let unblocked = self.set_blocked(point, false);
        let untolled = self.set_tolled(point, false);
        unblocked || untolled
    }

    /// Removes every wall and toll. Returns whether anything was removed.
    pub fn clear_all(&mut self) -> bool {
        let changed =
            self.blocked_points().next().is_some() || self.tolled_points().next().is_some();
        if changed {
            *self = TollGrid::new(self.width(), self.height());
        }
        changed
    }

    /// All cells of the grid in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        iproduct!(0..self.height() as i32, 0..self.width() as i32).map(|(y, x)| Point::new(x, y))
    }

    pub fn blocked_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(|p| self.blocked.get_point(*p))
    }

    pub fn tolled_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(|p| self.tolled.get_point(*p))
    }

    /// In-bounds neighbours of `point` in the fixed up, down, left, right order. Walls are
    /// included; skipping them is up to the search.
    pub fn neighborhood_points(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        Neumann::neighborhood(point)
            .into_iter()
            .filter(|p| self.in_bounds(p))
            .collect()
    }

    /// Cost of stepping from `_from` onto `to`, which only depends on the destination cell.
    pub fn edge_cost(&self, _from: &Point, to: &Point) -> i32 {
        if self.is_tolled(to) {
            TOLL_COST
        } else {
            ORDINARY_COST
        }
    }

    /// Sum of the edge costs along consecutive points of a path.
    pub fn path_cost(&self, path: &[Point]) -> i32 {
        path.iter()
            .tuple_windows()
            .map(|(from, to)| self.edge_cost(from, to))
            .sum()
    }

    /// Checks that a point can serve as start or goal of a search.
    pub fn check_endpoint(&self, point: &Point) -> Result<(), SearchError> {
        if !self.in_bounds(point) {
            return Err(SearchError::OutOfBounds {
                point: *point,
                width: self.width(),
                height: self.height(),
            });
        }
        if self.is_blocked(point) {
            return Err(SearchError::Blocked { point: *point });
        }
        Ok(())
    }

    fn join_neighbours(&mut self, point: Point) {
        let p_ix = self.blocked.get_ix_point(&point);
        for n in self.neighborhood_points(&point) {
            if !self.blocked.get_point(n) {
                let n_ix = self.blocked.get_ix_point(&n);
                self.components.union(p_ix, n_ix);
            }
        }
    }

    /// Retrieves the component id a given [Point] belongs to, [None] if it lies outside the grid.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.in_bounds(point)
            .then(|| self.components.find(self.blocked.get_ix_point(point)))
    }

    /// Checks if start and goal are open cells on the same connected component. Only exact after
    /// [update](Self::update) when walls were added since the last regeneration.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if self.is_blocked(start) || self.is_blocked(goal) {
            return false;
        }
        match (self.get_component(start), self.get_component(goal)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Number of open cells in the component of `point`, zero for walls and out of bounds points.
    pub fn component_size(&self, point: &Point) -> usize {
        if self.is_blocked(point) {
            return 0;
        }
        let Some(component) = self.get_component(point) else {
            return 0;
        };
        self.points()
            .filter(|p| !self.blocked.get_point(*p) && self.get_component(p) == Some(component))
            .count()
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        let w = self.width();
        let h = self.height();
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for point in iproduct!(0..w as i32, 0..h as i32).map(|(x, y)| Point::new(x, y)) {
            if self.blocked.get_point(point) {
                continue;
            }
            let parent_ix = self.blocked.get_ix_point(&point);
            for n in [Point::new(point.x + 1, point.y), Point::new(point.x, point.y + 1)] {
                if self.in_bounds(&n) && !self.blocked.get_point(n) {
                    let ix = self.blocked.get_ix_point(&n);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

impl fmt::Display for TollGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            let row: String = (0..self.width() as i32)
                .map(|x| {
                    let p = Point::new(x, y);
                    if self.blocked.get_point(p) {
                        '#'
                    } else if self.tolled.get_point(p) {
                        '$'
                    } else {
                        '.'
                    }
                })
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
