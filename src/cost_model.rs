use grid_util::point::Point;
use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, pathing_grid::TollGrid};

/// Prices that turn a path into trip costs: fuel is paid for every cell on the path, the toll for
/// every toll cell on it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    pub fuel_unit_price: f64,
    pub toll_unit_price: f64,
}

impl Default for CostModel {
    fn default() -> CostModel {
        CostModel {
            fuel_unit_price: 0.5,
            toll_unit_price: 4.0,
        }
    }
}

/// Costs of one trip along a path.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TripCost {
    /// Number of cells on the path.
    pub distance: usize,
    /// Number of toll cells on the path.
    pub toll_hits: usize,
    pub fuel: f64,
    pub toll: f64,
    pub total: f64,
}

impl CostModel {
    pub fn new(fuel_unit_price: f64, toll_unit_price: f64) -> Result<CostModel, ConfigError> {
        let model = CostModel {
            fuel_unit_price,
            toll_unit_price,
        };
        model.validate()?;
        Ok(model)
    }

    /// Rejects negative or NaN prices.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("fuel", self.fuel_unit_price),
            ("toll", self.toll_unit_price),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::NegativePrice { name, value });
            }
        }
        Ok(())
    }

    /// Prices a path found on `grid`. Toll cells are counted by membership of the path, so a toll
    /// on an endpoint is paid as well. An empty path costs nothing.
    pub fn trip_cost(&self, path: &[Point], grid: &TollGrid) -> TripCost {
        let distance = path.len();
        let toll_hits = path.iter().filter(|p| grid.is_tolled(p)).count();
        let fuel = distance as f64 * self.fuel_unit_price;
        let toll = toll_hits as f64 * self.toll_unit_price;
        TripCost {
            distance,
            toll_hits,
            fuel,
            toll,
            total: fuel + toll,
        }
    }
}
