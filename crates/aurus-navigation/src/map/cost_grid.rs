//! Rectangular cost grid for path planning.
//!
//! Every cell stores the positive cost of *entering* it. The grid remembers the
//! start position of the planner that owns it and keeps a generation counter
//! that is bumped on every mutation, which lets a planner tell whether results
//! computed earlier are still valid.

#![warn(missing_docs)]

use tracing::{debug, warn};

use super::{Edge, GridPoint};
use crate::error::NavigationError;

/// Returns `Ok(cost)` when `cost` is a usable cell cost.
fn validate_cost(cost: f64) -> Result<f64, NavigationError> {
    if cost.is_finite() && cost > 0.0 {
        Ok(cost)
    } else {
        Err(NavigationError::InvalidCost { cost })
    }
}

/// The outcome of validating a [`CostGrid::resize_edge`] request.
///
/// A plan records the new dimensions and how far surviving cells move, so the
/// same mapping can be applied to the cells, the start and any goal the caller
/// is tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePlan {
    width: usize,
    height: usize,
    shift_x: isize,
    shift_y: isize,
}

impl ResizePlan {
    /// Validates growing (`n > 0`) or shrinking (`n < 0`) `edge` of a
    /// `width` x `height` grid by `|n|` rows or columns.
    pub fn new(width: usize, height: usize, edge: Edge, n: isize) -> Result<Self, NavigationError> {
        let grow = |len: usize| -> Result<usize, NavigationError> {
            len.checked_add_signed(n)
                .filter(|&new_len| new_len > 0)
                .ok_or(NavigationError::InvalidResize(
                    "resize would leave the map with no rows or columns",
                ))
        };

        let plan = match edge {
            Edge::Top => ResizePlan {
                width,
                height: grow(height)?,
                shift_x: 0,
                shift_y: n,
            },
            Edge::Bottom => ResizePlan {
                width,
                height: grow(height)?,
                shift_x: 0,
                shift_y: 0,
            },
            Edge::Left => ResizePlan {
                width: grow(width)?,
                height,
                shift_x: n,
                shift_y: 0,
            },
            Edge::Right => ResizePlan {
                width: grow(width)?,
                height,
                shift_x: 0,
                shift_y: 0,
            },
        };

        plan.width
            .checked_mul(plan.height)
            .ok_or(NavigationError::InvalidDimensions(
                "Map dimensions too large, would cause overflow",
            ))?;

        Ok(plan)
    }

    /// Width after the resize.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height after the resize.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Where the cell currently at `p` ends up, or `None` if it is removed.
    pub fn map(&self, p: GridPoint) -> Option<GridPoint> {
        let moved = p.offset(self.shift_x, self.shift_y)?;
        (moved.x < self.width && moved.y < self.height).then_some(moved)
    }
}

/// A 2D grid of traversal costs.
///
/// Cells are stored row-major (`index = y * width + x`). Unset cells hold the
/// grid's `min_cost`, the per-step floor the planner's heuristic relies on.
///
/// Deserialization goes through [`CostGrid::new`] and [`CostGrid::set_costs`],
/// so a decoded grid satisfies the same checks as one built in code.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCostGrid"))]
pub struct CostGrid {
    /// Width of the grid in cells
    width: usize,
    /// Height of the grid in cells
    height: usize,
    /// Lower bound every cell cost is expected to respect
    min_cost: f64,
    /// Start cell of the planner using this grid
    start: GridPoint,
    /// Cost of entering each cell
    data: Vec<f64>,
    /// Bumped on every mutation
    #[cfg_attr(feature = "serde", serde(skip))]
    generation: u64,
}

/// Unvalidated wire form of a [`CostGrid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCostGrid {
    width: usize,
    height: usize,
    min_cost: f64,
    start: GridPoint,
    data: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCostGrid> for CostGrid {
    type Error = NavigationError;

    fn try_from(raw: RawCostGrid) -> Result<Self, Self::Error> {
        let mut grid = CostGrid::new(raw.height, raw.width, raw.start, raw.min_cost)?;
        grid.set_costs(&raw.data)?;
        grid.generation = 0;
        Ok(grid)
    }
}

impl CostGrid {
    /// Creates a new `CostGrid` with every cell set to `min_cost`.
    ///
    /// # Arguments
    /// * `height` - Number of rows
    /// * `width` - Number of columns
    /// * `start` - Start cell of the planner; must lie inside the grid
    /// * `min_cost` - Positive per-cell cost floor
    ///
    /// # Returns
    /// * `Result<Self, NavigationError>` - The grid, or an error if any argument is invalid
    pub fn new(
        height: usize,
        width: usize,
        start: GridPoint,
        min_cost: f64,
    ) -> Result<Self, NavigationError> {
        if width == 0 || height == 0 {
            return Err(NavigationError::InvalidDimensions(
                "Width and height must be non-zero",
            ));
        }
        let total_cells = width.checked_mul(height).ok_or(NavigationError::InvalidDimensions(
            "Map dimensions too large, would cause overflow",
        ))?;
        let min_cost = validate_cost(min_cost)?;
        if start.x >= width || start.y >= height {
            return Err(NavigationError::InvalidStart(start));
        }

        Ok(CostGrid {
            width,
            height,
            min_cost,
            start,
            data: vec![min_cost; total_cells],
            generation: 0,
        })
    }

    /// Width of the grid in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The per-cell cost floor.
    pub fn min_cost(&self) -> f64 {
        self.min_cost
    }

    /// The start cell, kept in place across resizes.
    pub fn start(&self) -> GridPoint {
        self.start
    }

    /// Mutation counter; differs from a remembered value iff the grid changed since.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of cells.
    pub fn total_cells(&self) -> usize {
        self.data.len()
    }

    /// Row-major view of all cell costs.
    pub fn costs(&self) -> &[f64] {
        &self.data
    }

    /// True iff `p` addresses a cell of this grid.
    pub fn in_bounds(&self, p: GridPoint) -> bool {
        p.x < self.width && p.y < self.height
    }

    pub(crate) fn index(&self, p: GridPoint) -> usize {
        p.y * self.width + p.x
    }

    pub(crate) fn point(&self, index: usize) -> GridPoint {
        GridPoint::new(index % self.width, index / self.width)
    }

    fn checked_index(&self, p: GridPoint) -> Result<usize, NavigationError> {
        if self.in_bounds(p) {
            Ok(self.index(p))
        } else {
            Err(NavigationError::OutOfBounds(p))
        }
    }

    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Number of `costs` below the floor and the lowest of them, if any.
    fn below_floor(&self, costs: &[f64]) -> Option<(usize, f64)> {
        costs
            .iter()
            .filter(|&&cost| cost < self.min_cost)
            .fold(None, |acc, &cost| match acc {
                None => Some((1, cost)),
                Some((count, lowest)) => Some((count + 1, lowest.min(cost))),
            })
    }

    fn warn_below_floor(&self, p: GridPoint, cost: f64) {
        if cost < self.min_cost {
            warn!(
                x = p.x,
                y = p.y,
                cost,
                min_cost = self.min_cost,
                "Cell cost below the heuristic floor; paths may no longer be optimal"
            );
        }
    }

    /// Gets the cost of entering `p`.
    pub fn get_cell_cost(&self, p: GridPoint) -> Result<f64, NavigationError> {
        let index = self.checked_index(p)?;
        Ok(self.data[index])
    }

    /// Sets the cost of entering `p`.
    ///
    /// Costs below `min_cost` are accepted with a warning, since the heuristic
    /// may then overestimate and the planner can return a suboptimal path.
    ///
    /// # Returns
    /// * `Result<(), NavigationError>` - `InvalidCost` for non-positive or non-finite
    ///   costs, `OutOfBounds` for cells outside the grid
    pub fn set_cell_cost(&mut self, p: GridPoint, cost: f64) -> Result<(), NavigationError> {
        let index = self.checked_index(p)?;
        let cost = validate_cost(cost)?;
        self.warn_below_floor(p, cost);
        self.data[index] = cost;
        self.touch();
        Ok(())
    }

    /// Replaces every cell cost from a row-major slice (row 0 first).
    ///
    /// The whole slice is validated before any cell changes.
    pub fn set_costs(&mut self, costs: &[f64]) -> Result<(), NavigationError> {
        if costs.len() != self.data.len() {
            return Err(NavigationError::InvalidDimensions(
                "Cost slice length must equal width * height",
            ));
        }
        for &cost in costs {
            validate_cost(cost)?;
        }
        if let Some((count, lowest)) = self.below_floor(costs) {
            warn!(
                count,
                lowest,
                min_cost = self.min_cost,
                "Cell costs below the heuristic floor; paths may no longer be optimal"
            );
        }
        self.data.copy_from_slice(costs);
        self.touch();
        Ok(())
    }

    /// Validates a resize without applying it. See [`CostGrid::resize_edge`].
    pub fn plan_resize(&self, edge: Edge, n: isize) -> Result<ResizePlan, NavigationError> {
        let plan = ResizePlan::new(self.width, self.height, edge, n)?;
        if plan.map(self.start).is_none() {
            return Err(NavigationError::InvalidResize(
                "resize would remove the start cell",
            ));
        }
        Ok(plan)
    }

    /// Inserts (`n > 0`) or removes (`n < 0`) `|n|` rows or columns at `edge`.
    ///
    /// New cells cost `min_cost`. Surviving cells keep their cost and the start
    /// moves with its cell. Always bumps the generation, even for `n == 0`.
    pub fn resize_edge(&mut self, edge: Edge, n: isize) -> Result<(), NavigationError> {
        let plan = self.plan_resize(edge, n)?;
        let mut data = vec![self.min_cost; plan.width * plan.height];
        for (index, &cost) in self.data.iter().enumerate() {
            if let Some(moved) = plan.map(self.point(index)) {
                data[moved.y * plan.width + moved.x] = cost;
            }
        }

        debug!(
            ?edge,
            n,
            old_width = self.width,
            old_height = self.height,
            width = plan.width,
            height = plan.height,
            "Resized cost grid"
        );

        // `plan_resize` guarantees the start survives.
        self.start = plan.map(self.start).unwrap_or(self.start);
        self.width = plan.width;
        self.height = plan.height;
        self.data = data;
        self.touch();
        Ok(())
    }
}

impl std::fmt::Display for CostGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "CostGrid ({}x{}, min cost: {}, start: {})",
            self.width, self.height, self.min_cost, self.start
        )?;
        for row in self.data.chunks(self.width) {
            for cost in row {
                write!(f, "{:>6} ", cost)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
