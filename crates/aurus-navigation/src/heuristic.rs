//! Distance heuristics for A*.

use std::fmt;
use std::str::FromStr;

use crate::map::GridPoint;

/// Distance metric used to estimate the remaining cost to the goal.
///
/// Movement is 4-connected, so every metric here is a lower bound on the
/// number of steps to the goal (Manhattan ≥ Euclidean ≥ Chebyshev). The
/// planner multiplies the distance by the grid's `min_cost`, which keeps the
/// estimate admissible and consistent as long as no cell is cheaper than that.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    /// `|dx| + |dy|`; the tightest bound for 4-connected movement.
    #[default]
    Manhattan,
    /// `sqrt(dx² + dy²)`.
    Euclidean,
    /// `max(|dx|, |dy|)`.
    Chebyshev,
}

impl Heuristic {
    /// Distance between `a` and `b` under this metric, in cells.
    pub fn distance(&self, a: GridPoint, b: GridPoint) -> f64 {
        let dx = a.x.abs_diff(b.x) as f64;
        let dy = a.y.abs_diff(b.y) as f64;
        match self {
            Heuristic::Manhattan => dx + dy,
            Heuristic::Euclidean => dx.hypot(dy),
            Heuristic::Chebyshev => dx.max(dy),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Manhattan => write!(f, "manhattan"),
            Heuristic::Euclidean => write!(f, "euclidean"),
            Heuristic::Chebyshev => write!(f, "chebyshev"),
        }
    }
}

/// Error returned when parsing an unknown heuristic name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown heuristic '{0}' (expected manhattan, euclidean or chebyshev)")]
pub struct ParseHeuristicError(String);

impl FromStr for Heuristic {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Heuristic::Manhattan),
            "euclidean" => Ok(Heuristic::Euclidean),
            "chebyshev" => Ok(Heuristic::Chebyshev),
            _ => Err(ParseHeuristicError(s.to_string())),
        }
    }
}
