/*

A* = f(n) = g(n) + h(n)

Where:
    n = a cell of the grid
    g(n) = cheapest known cost from the start to n (sum of entry costs)
    h(n) = min_cost * distance(n, goal)
    f(n) = estimated cost of the cheapest path through n

Per query:
    - if the grid is unchanged since the last run and the goal is the same,
      hand back the cached path
    - otherwise reset all per-cell state and push the start with g = 0
    - pop the lowest f (ties: earliest push); discard it if its g is stale
    - stop when the goal is popped, else relax the 4 neighbors and push
      every neighbor whose g improved
    - walk predecessors back from the goal to build the path

*/

use std::cell::OnceCell;
use std::fmt;

use tracing::{debug, trace};

use crate::config::PlannerConfig;
use crate::error::NavigationError;
use crate::frontier::Frontier;
use crate::heuristic::Heuristic;
use crate::map::{CostGrid, Edge, GridPoint};
use crate::waypoints;

/// Up, down, right, left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Per-cell bookkeeping for one search run.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SearchState {
    path_cost: f64,
    predecessor: Option<usize>,
    in_frontier: bool,
    visited: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            path_cost: f64::INFINITY,
            predecessor: None,
            in_frontier: false,
            visited: false,
        }
    }
}

/// Represents the result of an A* query with metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Cells from start to goal inclusive, 4-connected.
    pub path: Vec<GridPoint>,
    /// Sum of the entry costs of every cell after the start.
    pub total_cost: f64,
    /// Cells expanded by the run that produced this path.
    pub nodes_expanded: usize,
    /// True when the path came from the cache instead of a new run.
    pub from_cache: bool,
}

impl PathResult {
    /// The number of cells in the path.
    pub fn path_length(&self) -> usize {
        self.path.len()
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PathResult {{ path_length: {}, total_cost: {}, nodes_expanded: {}, from_cache: {} }}",
            self.path_length(),
            self.total_cost,
            self.nodes_expanded,
            self.from_cache
        )
    }
}

/// Counters from the most recent search run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells popped and expanded.
    pub nodes_expanded: usize,
    /// Entries pushed onto the frontier, duplicates included.
    pub frontier_pushes: usize,
    /// Popped entries discarded because a cheaper entry for the cell was pushed later.
    pub stale_pops: usize,
    /// Largest frontier size seen during the run.
    pub peak_frontier: usize,
}

/// Incremental A* planner over a [`CostGrid`] it owns.
///
/// The start is fixed by the grid. Each [`find_path`](PathSearch::find_path)
/// reruns the full search only when the grid changed or the goal differs from
/// the previous query; otherwise the cached path is returned as is.
#[derive(Debug)]
pub struct PathSearch {
    grid: CostGrid,
    heuristic: Heuristic,
    states: Vec<SearchState>,
    frontier: Frontier,
    path: Vec<GridPoint>,
    waypoints: OnceCell<Vec<GridPoint>>,
    goal: Option<GridPoint>,
    /// Grid generation the cached path was computed against.
    searched_generation: Option<u64>,
    stats: SearchStats,
}

impl PathSearch {
    /// Wraps an existing grid.
    pub fn new(grid: CostGrid, heuristic: Heuristic) -> Self {
        let states = vec![SearchState::default(); grid.total_cells()];
        Self {
            grid,
            heuristic,
            states,
            frontier: Frontier::new(),
            path: Vec::new(),
            waypoints: OnceCell::new(),
            goal: None,
            searched_generation: None,
            stats: SearchStats::default(),
        }
    }

    /// Builds a `height` x `width` grid with every cell at `config.min_cost`
    /// and a planner for it.
    pub fn with_config(
        height: usize,
        width: usize,
        start: GridPoint,
        config: PlannerConfig,
    ) -> Result<Self, NavigationError> {
        let grid = CostGrid::new(height, width, start, config.min_cost)?;
        Ok(Self::new(grid, config.heuristic))
    }

    /// Same as [`with_config`](PathSearch::with_config) with the default configuration.
    pub fn with_defaults(
        height: usize,
        width: usize,
        start: GridPoint,
    ) -> Result<Self, NavigationError> {
        Self::with_config(height, width, start, PlannerConfig::default())
    }

    /// The grid being planned over.
    pub fn grid(&self) -> &CostGrid {
        &self.grid
    }

    /// Gives the grid back, dropping all search state.
    pub fn into_grid(self) -> CostGrid {
        self.grid
    }

    /// The heuristic in use.
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// The start cell.
    pub fn start(&self) -> GridPoint {
        self.grid.start()
    }

    /// Goal of the last successful query, if any.
    pub fn goal(&self) -> Option<GridPoint> {
        self.goal
    }

    /// Whether the next query for the cached goal would rerun the search.
    pub fn is_dirty(&self) -> bool {
        self.searched_generation != Some(self.grid.generation())
    }

    /// Counters from the most recent search run.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Sets the cost of entering `p`. See [`CostGrid::set_cell_cost`].
    pub fn set_cell_cost(&mut self, p: GridPoint, cost: f64) -> Result<(), NavigationError> {
        self.grid.set_cell_cost(p, cost)
    }

    /// Replaces every cell cost. See [`CostGrid::set_costs`].
    pub fn set_costs(&mut self, costs: &[f64]) -> Result<(), NavigationError> {
        self.grid.set_costs(costs)
    }

    /// Grows or shrinks one edge of the grid. See [`CostGrid::resize_edge`].
    ///
    /// Also refuses to remove the goal of the last query. The cached path and
    /// waypoints are cleared since their coordinates no longer line up.
    pub fn resize_edge(&mut self, edge: Edge, n: isize) -> Result<(), NavigationError> {
        let plan = self.grid.plan_resize(edge, n)?;
        let goal = match self.goal {
            Some(goal) => Some(plan.map(goal).ok_or(NavigationError::InvalidResize(
                "resize would remove the goal cell",
            ))?),
            None => None,
        };

        self.grid.resize_edge(edge, n)?;
        self.goal = goal;
        self.states = vec![SearchState::default(); self.grid.total_cells()];
        self.frontier.clear();
        self.clear_path();
        Ok(())
    }

    /// Computes (or reuses) the cheapest path from the start to `goal`.
    ///
    /// # Returns
    /// * `Result<PathResult, NavigationError>` - The path with metadata, or
    ///   `InvalidGoal` if `goal` lies outside the grid
    pub fn find_path(&mut self, goal: GridPoint) -> Result<PathResult, NavigationError> {
        if !self.grid.in_bounds(goal) {
            return Err(NavigationError::InvalidGoal(goal));
        }

        if !self.is_dirty() && self.goal == Some(goal) {
            trace!(x = goal.x, y = goal.y, "Returning cached path");
            return Ok(self.result(true));
        }

        self.reset();
        let start = self.grid.start();
        debug!(
            start = %start,
            goal = %goal,
            heuristic = %self.heuristic,
            "Starting A* search"
        );

        let start_idx = self.grid.index(start);
        let goal_idx = self.grid.index(goal);
        self.states[start_idx].path_cost = 0.0;

        if start_idx == goal_idx {
            self.states[start_idx].visited = true;
        } else {
            self.expand(start_idx, goal_idx, goal)?;
        }

        self.reconstruct(start_idx, goal_idx)?;
        self.goal = Some(goal);
        self.searched_generation = Some(self.grid.generation());

        let result = self.result(false);
        debug!(
            goal = %goal,
            nodes_expanded = result.nodes_expanded,
            path_length = result.path_length(),
            total_cost = result.total_cost,
            "A* search finished"
        );
        Ok(result)
    }

    /// Path from the last search, or empty if none succeeded yet.
    pub fn path(&self) -> &[GridPoint] {
        &self.path
    }

    /// Turn points of [`path`](PathSearch::path), derived on first use.
    ///
    /// See [`waypoints::simplify`] for the rule.
    pub fn waypoints(&self) -> &[GridPoint] {
        self.waypoints.get_or_init(|| waypoints::simplify(&self.path))
    }

    /// Cumulative cost from the start to `p` found by the last run, or `None`
    /// if the run never reached `p`.
    pub fn path_cost(&self, p: GridPoint) -> Option<f64> {
        if !self.grid.in_bounds(p) {
            return None;
        }
        let cost = self.states.get(self.grid.index(p))?.path_cost;
        cost.is_finite().then_some(cost)
    }

    /// Copies the per-cell bookkeeping of the last run for inspection.
    pub fn snapshot(&self) -> SearchSnapshot {
        let on_path: Vec<bool> = {
            let mut flags = vec![false; self.states.len()];
            for &p in &self.path {
                flags[self.grid.index(p)] = true;
            }
            flags
        };
        let cells = self
            .states
            .iter()
            .zip(on_path)
            .map(|(state, on_path)| CellSnapshot {
                path_cost: state.path_cost.is_finite().then_some(state.path_cost),
                predecessor: state.predecessor.map(|idx| self.grid.point(idx)),
                in_frontier: state.in_frontier,
                visited: state.visited,
                on_path,
            })
            .collect();

        SearchSnapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            goal: self.goal,
            next_expansion: self.frontier.peek().map(|entry| self.grid.point(entry.cell)),
            cells,
        }
    }

    fn clear_path(&mut self) {
        self.path.clear();
        self.waypoints = OnceCell::new();
        self.searched_generation = None;
    }

    fn reset(&mut self) {
        self.states.clear();
        self.states
            .resize(self.grid.total_cells(), SearchState::default());
        self.frontier.clear();
        self.stats = SearchStats::default();
        self.goal = None;
        self.clear_path();
    }

    fn estimate(&self, p: GridPoint, goal: GridPoint) -> f64 {
        self.grid.min_cost() * self.heuristic.distance(p, goal)
    }

    fn push(&mut self, idx: usize, g: f64, goal: GridPoint) {
        let f = g + self.estimate(self.grid.point(idx), goal);
        self.frontier.push(idx, g, f);
        self.states[idx].in_frontier = true;
        self.stats.frontier_pushes += 1;
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
    }

    fn expand(
        &mut self,
        start_idx: usize,
        goal_idx: usize,
        goal: GridPoint,
    ) -> Result<(), NavigationError> {
        self.push(start_idx, 0.0, goal);

        while let Some(entry) = self.frontier.pop() {
            let current = entry.cell;

            // Skip stale entries. A visited cell whose cost dropped since its
            // expansion is expanded again so its descendants pick up the gain.
            if entry.g > self.states[current].path_cost {
                self.stats.stale_pops += 1;
                continue;
            }

            let state = &mut self.states[current];
            state.in_frontier = false;
            state.visited = true;
            self.stats.nodes_expanded += 1;

            if current == goal_idx {
                return Ok(());
            }

            let current_g = state.path_cost;
            let current_point = self.grid.point(current);
            for (dx, dy) in DIRECTIONS {
                let Some(neighbor) = current_point.offset(dx, dy) else {
                    continue;
                };
                if !self.grid.in_bounds(neighbor) {
                    continue;
                }
                let ni = self.grid.index(neighbor);
                let candidate = current_g + self.grid.costs()[ni];
                if candidate < self.states[ni].path_cost {
                    self.states[ni].path_cost = candidate;
                    self.states[ni].predecessor = Some(current);
                    self.push(ni, candidate, goal);
                }
            }
        }

        Err(NavigationError::GoalUnreachable(goal))
    }

    fn reconstruct(&mut self, start_idx: usize, goal_idx: usize) -> Result<(), NavigationError> {
        let goal = self.grid.point(goal_idx);
        let mut path = vec![goal];
        let mut current = goal_idx;
        while current != start_idx {
            // Predecessor costs strictly decrease, so a walk longer than the grid is corrupt.
            if path.len() > self.states.len() {
                return Err(NavigationError::GoalUnreachable(goal));
            }
            let Some(prev) = self.states[current].predecessor else {
                return Err(NavigationError::GoalUnreachable(goal));
            };
            path.push(self.grid.point(prev));
            current = prev;
        }
        path.reverse();
        self.path = path;
        Ok(())
    }

    fn result(&self, from_cache: bool) -> PathResult {
        // Summed along the path rather than read from the goal's state: below-floor
        // costs can lower a predecessor after the goal was last relaxed.
        let total_cost = self
            .path
            .iter()
            .skip(1)
            .map(|&p| self.grid.costs()[self.grid.index(p)])
            .sum();
        PathResult {
            path: self.path.clone(),
            total_cost,
            nodes_expanded: self.stats.nodes_expanded,
            from_cache,
        }
    }
}

/// Bookkeeping for one cell, as captured by [`PathSearch::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSnapshot {
    /// Best known cost from the start, `None` if never reached.
    pub path_cost: Option<f64>,
    /// Cell the best cost was reached from.
    pub predecessor: Option<GridPoint>,
    /// Pushed and not yet expanded.
    pub in_frontier: bool,
    /// Expanded (its cost is final).
    pub visited: bool,
    /// Part of the reconstructed path.
    pub on_path: bool,
}

impl CellSnapshot {
    /// Search-map code: 0 untouched, 1 frontier, 2 expanded, 3 on the path.
    pub fn status_code(&self) -> u8 {
        if self.on_path {
            3
        } else if self.visited {
            2
        } else if self.in_frontier {
            1
        } else {
            0
        }
    }
}

/// Owned copy of the planner's per-cell state after a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchSnapshot {
    /// Grid width at capture time.
    pub width: usize,
    /// Grid height at capture time.
    pub height: usize,
    /// Goal of the run, if one completed.
    pub goal: Option<GridPoint>,
    /// Cell at the top of the frontier when the run stopped.
    pub next_expansion: Option<GridPoint>,
    /// Row-major per-cell state.
    pub cells: Vec<CellSnapshot>,
}

impl SearchSnapshot {
    /// State of the cell at `p`, if it is inside the captured grid.
    pub fn cell(&self, p: GridPoint) -> Option<&CellSnapshot> {
        if p.x >= self.width || p.y >= self.height {
            return None;
        }
        self.cells.get(p.y * self.width + p.x)
    }
}

impl fmt::Display for SearchSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "search map:")?;
        for row in self.cells.chunks(self.width) {
            for cell in row {
                write!(f, "{} ", cell.status_code())?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(f, "path cost map:")?;
        for row in self.cells.chunks(self.width) {
            for cell in row {
                match cell.path_cost {
                    Some(cost) => write!(f, "{:>6} ", cost)?,
                    None => write!(f, "{:>6} ", "-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(height: usize, width: usize, start: (usize, usize)) -> PathSearch {
        PathSearch::with_defaults(height, width, GridPoint::from(start)).unwrap()
    }

    fn assert_connected(path: &[GridPoint]) {
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan(&pair[1]), 1, "Path must be 4-connected: {:?}", pair);
        }
    }

    #[test]
    fn test_3x3_uniform_example() {
        let mut search = uniform(3, 3, (0, 0));
        let result = search.find_path(GridPoint::new(2, 2)).unwrap();
        assert_eq!(result.total_cost, 4.0);
        assert_eq!(result.path_length(), 5);
        assert_eq!(result.path[0], GridPoint::new(0, 0));
        assert_eq!(*result.path.last().unwrap(), GridPoint::new(2, 2));
        assert_connected(&result.path);
        assert!(!result.from_cache);
    }

    #[test]
    fn test_goal_equals_start() {
        let mut search = uniform(4, 4, (1, 2));
        let result = search.find_path(GridPoint::new(1, 2)).unwrap();
        assert_eq!(result.path, vec![GridPoint::new(1, 2)]);
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(search.waypoints(), &[GridPoint::new(1, 2)]);
    }

    #[test]
    fn test_single_cell_grid() {
        let mut search = uniform(1, 1, (0, 0));
        let result = search.find_path(GridPoint::new(0, 0)).unwrap();
        assert_eq!(result.path, vec![GridPoint::new(0, 0)]);
        assert_eq!(result.total_cost, 0.0);
    }

    #[test]
    fn test_invalid_goal() {
        let mut search = uniform(3, 3, (0, 0));
        assert_eq!(
            search.find_path(GridPoint::new(3, 1)),
            Err(NavigationError::InvalidGoal(GridPoint::new(3, 1)))
        );
        assert!(search.path().is_empty());
        assert!(search.waypoints().is_empty());
    }

    #[test]
    fn test_invalid_start() {
        assert_eq!(
            PathSearch::with_defaults(3, 3, GridPoint::new(0, 5)).unwrap_err(),
            NavigationError::InvalidStart(GridPoint::new(0, 5))
        );
    }

    #[test]
    fn test_avoids_expensive_wall() {
        // A wall of cost 50 across column 2 with a cheap gap at the bottom.
        let mut search = uniform(5, 5, (0, 0));
        for y in 0..4 {
            search.set_cell_cost(GridPoint::new(2, y), 50.0).unwrap();
        }
        let result = search.find_path(GridPoint::new(4, 0)).unwrap();
        assert_connected(&result.path);
        assert!(result.path.contains(&GridPoint::new(2, 4)));
        assert!(!result.path.iter().any(|p| p.x == 2 && p.y < 4));
        // Down 4, across 4, up 4.
        assert_eq!(result.total_cost, 12.0);
    }

    #[test]
    fn test_goes_through_wall_when_cheaper() {
        let mut search = uniform(5, 5, (0, 0));
        for y in 0..5 {
            search.set_cell_cost(GridPoint::new(2, y), 3.0).unwrap();
        }
        let result = search.find_path(GridPoint::new(4, 0)).unwrap();
        assert_eq!(result.total_cost, 6.0);
        assert_eq!(result.path_length(), 5);
    }

    #[test]
    fn test_cache_is_reused() {
        let mut search = uniform(6, 6, (0, 0));
        search.set_cell_cost(GridPoint::new(3, 3), 9.0).unwrap();
        let first = search.find_path(GridPoint::new(5, 4)).unwrap();
        let second = search.find_path(GridPoint::new(5, 4)).unwrap();
        assert!(!first.from_cache);
        assert!(second.from_cache);
        assert_eq!(first.path, second.path);
        assert_eq!(first.total_cost, second.total_cost);
        assert!(!search.is_dirty());
    }

    #[test]
    fn test_cost_change_invalidates_cache() {
        let mut search = uniform(3, 3, (0, 0));
        let goal = GridPoint::new(2, 0);
        let first = search.find_path(goal).unwrap();
        assert_eq!(first.path, vec![GridPoint::new(0, 0), GridPoint::new(1, 0), goal]);

        search.set_cell_cost(GridPoint::new(1, 0), 10.0).unwrap();
        assert!(search.is_dirty());
        // The stale path stays readable until the next query.
        assert_eq!(search.path(), first.path.as_slice());

        let second = search.find_path(goal).unwrap();
        assert!(!second.from_cache);
        assert!(!second.path.contains(&GridPoint::new(1, 0)));
        assert_eq!(second.total_cost, 4.0);
    }

    #[test]
    fn test_new_goal_reruns_search() {
        let mut search = uniform(4, 4, (0, 0));
        search.find_path(GridPoint::new(3, 3)).unwrap();
        let result = search.find_path(GridPoint::new(0, 3)).unwrap();
        assert!(!result.from_cache);
        assert_eq!(result.total_cost, 3.0);
        assert_eq!(search.goal(), Some(GridPoint::new(0, 3)));
    }

    #[test]
    fn test_resize_invalidates_and_shifts() {
        let mut search = uniform(3, 3, (0, 0));
        search.find_path(GridPoint::new(2, 2)).unwrap();

        search.resize_edge(Edge::Top, 2).unwrap();
        assert!(search.path().is_empty());
        assert!(search.is_dirty());
        assert_eq!(search.start(), GridPoint::new(0, 2));
        assert_eq!(search.goal(), Some(GridPoint::new(2, 4)));

        let result = search.find_path(GridPoint::new(2, 4)).unwrap();
        assert!(!result.from_cache);
        assert_eq!(result.path[0], GridPoint::new(0, 2));
        assert_eq!(result.total_cost, 4.0);
    }

    #[test]
    fn test_resize_zero_still_invalidates() {
        let mut search = uniform(3, 3, (0, 0));
        search.find_path(GridPoint::new(2, 2)).unwrap();
        search.resize_edge(Edge::Left, 0).unwrap();
        let result = search.find_path(GridPoint::new(2, 2)).unwrap();
        assert!(!result.from_cache);
    }

    #[test]
    fn test_resize_cannot_remove_goal() {
        let mut search = uniform(4, 4, (0, 0));
        search.find_path(GridPoint::new(3, 3)).unwrap();
        let before = search.grid().clone();
        assert!(matches!(
            search.resize_edge(Edge::Right, -1),
            Err(NavigationError::InvalidResize(_))
        ));
        assert!(matches!(
            search.resize_edge(Edge::Left, -4),
            Err(NavigationError::InvalidResize(_))
        ));
        assert_eq!(search.grid(), &before);
        // The cached path survives a rejected resize.
        assert!(search.find_path(GridPoint::new(3, 3)).unwrap().from_cache);
    }

    #[test]
    fn test_ties_are_deterministic() {
        let run = || {
            let mut search = uniform(6, 6, (0, 0));
            search.find_path(GridPoint::new(5, 5)).unwrap().path
        };
        let first = run();
        for _ in 0..5 {
            assert_eq!(run(), first);
        }
    }

    #[test]
    fn test_heuristics_agree_on_cost() {
        let costs: Vec<f64> = (0..36).map(|i| ((i * 7) % 5 + 1) as f64).collect();
        let mut totals = Vec::new();
        for heuristic in [Heuristic::Manhattan, Heuristic::Euclidean, Heuristic::Chebyshev] {
            let config = PlannerConfig::with_heuristic(heuristic);
            let mut search = PathSearch::with_config(6, 6, GridPoint::new(0, 5), config).unwrap();
            search.set_costs(&costs).unwrap();
            totals.push(search.find_path(GridPoint::new(5, 0)).unwrap().total_cost);
        }
        assert_eq!(totals[0], totals[1]);
        assert_eq!(totals[0], totals[2]);
    }

    #[test]
    fn test_min_cost_scales_heuristic() {
        let config = PlannerConfig::default().with_min_cost(2.0);
        let mut search = PathSearch::with_config(4, 4, GridPoint::new(0, 0), config).unwrap();
        search.set_cell_cost(GridPoint::new(1, 0), 5.0).unwrap();
        let result = search.find_path(GridPoint::new(3, 0)).unwrap();
        // Detour through row 1 costs 5 * 2.0 = 10, straight through costs 2 + 5 + 2 = 9.
        assert_eq!(result.total_cost, 9.0);
    }

    #[test]
    fn test_path_costs_along_path() {
        let mut search = uniform(3, 4, (0, 0));
        search.set_cell_cost(GridPoint::new(1, 0), 2.0).unwrap();
        let result = search.find_path(GridPoint::new(3, 0)).unwrap();
        let costs: Vec<f64> = result.path.iter().map(|&p| search.path_cost(p).unwrap()).collect();
        assert_eq!(costs.first(), Some(&0.0));
        assert!(costs.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(costs.last(), Some(&result.total_cost));
        assert_eq!(search.path_cost(GridPoint::new(9, 9)), None);
    }

    #[test]
    fn test_snapshot() {
        let mut search = uniform(3, 5, (0, 1));
        search.find_path(GridPoint::new(4, 1)).unwrap();
        let snapshot = search.snapshot();

        assert_eq!((snapshot.width, snapshot.height), (5, 3));
        assert_eq!(snapshot.goal, Some(GridPoint::new(4, 1)));
        let start = snapshot.cell(GridPoint::new(0, 1)).unwrap();
        assert_eq!(start.path_cost, Some(0.0));
        assert_eq!(start.predecessor, None);
        assert_eq!(start.status_code(), 3);
        let goal = snapshot.cell(GridPoint::new(4, 1)).unwrap();
        assert_eq!(goal.predecessor, Some(GridPoint::new(3, 1)));
        assert!(goal.visited);
        assert!(snapshot.cell(GridPoint::new(5, 0)).is_none());

        let stats = search.stats();
        assert_eq!(stats.nodes_expanded, 5);
        assert!(stats.frontier_pushes >= stats.nodes_expanded);

        let rendered = snapshot.to_string();
        assert!(rendered.starts_with("search map:"));
        assert!(rendered.contains("3 3 3 3 3"));
        assert!(rendered.contains("path cost map:"));
    }

    #[test]
    fn test_waypoints_are_cached_per_run() {
        let mut search = uniform(4, 4, (0, 0));
        search.find_path(GridPoint::new(3, 3)).unwrap();
        let waypoints = search.waypoints().to_vec();
        assert_eq!(waypoints.first(), Some(&GridPoint::new(0, 0)));
        assert_eq!(waypoints.last(), Some(&GridPoint::new(3, 3)));
        assert_eq!(waypoints::expand(&waypoints), search.path());

        search.find_path(GridPoint::new(0, 3)).unwrap();
        assert_eq!(search.waypoints(), &[GridPoint::new(0, 0), GridPoint::new(0, 3)]);
    }

    #[test]
    fn test_path_result_display() {
        let mut search = uniform(2, 2, (0, 0));
        let result = search.find_path(GridPoint::new(1, 1)).unwrap();
        let display_str = format!("{}", result);
        assert!(display_str.contains("path_length: 3"));
        assert!(display_str.contains("from_cache: false"));
    }
}
