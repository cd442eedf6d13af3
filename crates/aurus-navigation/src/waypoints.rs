//! Path simplification into turn points.
//!
//! A waypoint is emitted at every cell where the step direction changes,
//! reversals included, plus the first and last cell. Between two consecutive
//! waypoints the path is therefore a straight run along one axis, which is what
//! [`expand`] relies on to reproduce the cells of the path.

use crate::map::GridPoint;

fn step(from: GridPoint, to: GridPoint) -> (isize, isize) {
    (
        (to.x as isize - from.x as isize).signum(),
        (to.y as isize - from.y as isize).signum(),
    )
}

/// Reduces a cell-by-cell path to its turn points.
///
/// The result is a subsequence of `path` that starts and ends with the same
/// cells. Paths of fewer than three cells are returned unchanged.
pub fn simplify(path: &[GridPoint]) -> Vec<GridPoint> {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return Vec::new();
    };
    if path.len() < 3 {
        return path.to_vec();
    }

    let mut waypoints = vec![first];
    let mut direction = step(path[0], path[1]);
    for window in path.windows(3) {
        let next = step(window[1], window[2]);
        if next != direction {
            waypoints.push(window[1]);
            direction = next;
        }
    }
    waypoints.push(last);
    waypoints
}

/// Walks the straight runs between consecutive waypoints back into cells.
///
/// Inverse of [`simplify`] for 4-connected paths. Consecutive waypoints that
/// differ on both axes are joined by moving along x first, then y.
pub fn expand(waypoints: &[GridPoint]) -> Vec<GridPoint> {
    let Some(&first) = waypoints.first() else {
        return Vec::new();
    };

    let mut path = vec![first];
    let mut current = first;
    for &target in &waypoints[1..] {
        while current != target {
            let (dx, dy) = step(current, target);
            // Finish the x run before starting on y.
            let (dx, dy) = if dx != 0 { (dx, 0) } else { (0, dy) };
            match current.offset(dx, dy) {
                Some(next) => current = next,
                None => break,
            }
            path.push(current);
        }
    }
    path
}
