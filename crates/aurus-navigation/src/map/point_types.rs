use std::fmt;

/// Represents a point in grid coordinates (cell indices).
///
/// `x` grows to the right (columns) and `y` grows downward (rows), so row 0 is
/// the top edge of the map.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    /// The x-coordinate (column index) in the grid.
    pub x: usize,
    /// The y-coordinate (row index) in the grid.
    pub y: usize,
}

impl GridPoint {
    /// Creates a new `GridPoint`.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance to `other`, in cells.
    #[must_use]
    pub fn manhattan(&self, other: &GridPoint) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Returns the 4-connected neighbor one step away in direction `(dx, dy)`,
    /// or `None` if that step would leave the non-negative quadrant.
    pub(crate) fn offset(&self, dx: isize, dy: isize) -> Option<GridPoint> {
        Some(GridPoint::new(
            self.x.checked_add_signed(dx)?,
            self.y.checked_add_signed(dy)?,
        ))
    }
}

impl From<(usize, usize)> for GridPoint {
    fn from((x, y): (usize, usize)) -> Self {
        GridPoint::new(x, y)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four borders of a [`CostGrid`](super::CostGrid).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Edge {
    /// Row 0.
    Top,
    /// Row `height - 1`.
    Bottom,
    /// Column 0.
    Left,
    /// Column `width - 1`.
    Right,
}
