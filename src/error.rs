use grid_util::point::Point;
use thiserror::Error;

/// Precondition violations of a search. An unreachable goal is not an error, it yields an empty
/// [SearchResult](crate::SearchResult).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{point} lies outside the {width}x{height} grid")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },
    #[error("{point} is a wall and cannot be a search endpoint")]
    Blocked { point: Point },
}

/// Rejected planner or pricing configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid size must be positive")]
    EmptyGrid,
    #[error("grid size {size} exceeds the coordinate range")]
    GridTooLarge { size: usize },
    #[error("endpoint ({x}, {y}) lies outside a grid of size {size}")]
    EndpointOutOfBounds { x: i32, y: i32, size: usize },
    #[error("start and end must differ, both are ({x}, {y})")]
    SameEndpoints { x: i32, y: i32 },
    #[error("{name} price must be a non-negative number, got {value}")]
    NegativePrice { name: &'static str, value: f64 },
    #[error("unknown search mode {0:?}, expected \"A*\" or \"Dijkstra\"")]
    UnknownMode(String),
}
