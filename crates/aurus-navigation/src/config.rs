//! Planner configuration.

use crate::heuristic::Heuristic;

/// Settings fixed when a [`PathSearch`](crate::astar::PathSearch) is built.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Cost floor for every cell; unset cells start at this value and the
    /// heuristic is scaled by it.
    pub min_cost: f64,
    /// Distance metric for the A* estimate.
    pub heuristic: Heuristic,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_cost: 1.0,
            heuristic: Heuristic::Manhattan,
        }
    }
}

impl PlannerConfig {
    /// Default configuration with a different heuristic.
    pub fn with_heuristic(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            ..Default::default()
        }
    }

    /// Replace the cost floor.
    pub fn with_min_cost(mut self, min_cost: f64) -> Self {
        self.min_cost = min_cost;
        self
    }
}
