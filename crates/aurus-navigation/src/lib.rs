//! Grid path planning for Aurus.
//!
//! A [`CostGrid`] holds the cost of entering each cell; a [`PathSearch`] owns
//! one and answers cheapest-path queries from its start cell with A*, reusing
//! the previous answer until the grid or the goal changes.

pub mod astar;
pub mod config;
pub mod error;
mod frontier;
pub mod heuristic;
pub mod map;
pub mod waypoints;

pub use astar::{CellSnapshot, PathResult, PathSearch, SearchSnapshot, SearchStats};
pub use config::PlannerConfig;
pub use error::NavigationError;
pub use heuristic::{Heuristic, ParseHeuristicError};
pub use map::{CostGrid, Edge, GridPoint, ResizePlan};
