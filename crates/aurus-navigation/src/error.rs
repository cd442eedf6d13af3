//! This module defines the error types used by the `aurus-navigation` crate.

#![warn(missing_docs)]

use crate::map::GridPoint;

/// Error type for navigation operations.
///
/// Every variant describes bad caller input detected synchronously by the
/// call that introduced it. Operations that fail leave the grid and any cached
/// search results untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NavigationError {
    /// A cell cost (or the grid's minimum cost) was zero, negative, NaN or infinite.
    #[error("Invalid cell cost {cost}: costs must be positive and finite")]
    InvalidCost {
        /// The rejected value.
        cost: f64,
    },
    /// The start position lies outside the grid.
    #[error("Invalid start {0}: outside the grid")]
    InvalidStart(GridPoint),
    /// The requested goal lies outside the grid.
    #[error("Invalid goal {0}: outside the grid")]
    InvalidGoal(GridPoint),
    /// A resize would collapse a dimension or remove the start or goal cell.
    #[error("Invalid resize: {0}")]
    InvalidResize(&'static str),
    /// Width or height is zero, too large, or a bulk update has the wrong length.
    #[error("Invalid map dimensions: {0}")]
    InvalidDimensions(&'static str),
    /// A cell outside the grid was read or written.
    #[error("Map access out of bounds at {0}")]
    OutOfBounds(GridPoint),
    /// The frontier ran dry before the goal was reached.
    #[error("Goal {0} is unreachable from the start")]
    GoalUnreachable(GridPoint),
}
