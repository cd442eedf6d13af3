//! Map-related functionality for navigation.
//!
//! This module provides the cost grid the planner searches over and the
//! coordinate types used to address it.

pub mod cost_grid;
pub mod point_types;

pub use cost_grid::{CostGrid, ResizePlan};
pub use point_types::{Edge, GridPoint};
