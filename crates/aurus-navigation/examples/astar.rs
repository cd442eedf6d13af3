use aurus_navigation::{Edge, GridPoint, PathSearch};
use std::collections::HashSet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 10x10 grid, start in the top-left corner
    let start = GridPoint::new(0, 0);
    let mut search = PathSearch::with_defaults(10, 10, start)?;

    // Expensive cells the planner should route around
    let walls = vec![
        (1, 1), (2, 1), (7, 1), (8, 1),
        (4, 2),
        (2, 3), (3, 3), (4, 3), (5, 3), (7, 3),
        (5, 4), (7, 4),
        (1, 5), (2, 5), (3, 5), (5, 5), (7, 5), (8, 5),
        (3, 6),
        (1, 7), (3, 7), (5, 7), (6, 7), (7, 7),
        (1, 8), (8, 8),
        (3, 9), (4, 9), (5, 9),
    ];
    for (x, y) in walls {
        search.set_cell_cost(GridPoint::new(x, y), 25.0)?;
    }

    let goal = GridPoint::new(9, 9);
    println!("{}", search.grid());

    let result = search.find_path(goal)?;
    println!("{}", result);
    println!("\nGrid with path:");
    print_path(&search, goal);
    println!("\nWaypoints: {:?}", search.waypoints());

    // Same query again: served from the cache
    let cached = search.find_path(goal)?;
    println!("\nSecond query from cache: {}", cached.from_cache);

    // Open a cheap corridor along row 8 and replan
    for x in 1..9 {
        search.set_cell_cost(GridPoint::new(x, 8), 0.5)?;
    }
    let replanned = search.find_path(goal)?;
    println!("\nAfter opening a corridor: {}", replanned);
    print_path(&search, goal);

    // Grow the map on the left; start and goal move with their cells
    search.resize_edge(Edge::Left, 2)?;
    let goal = search.goal().unwrap_or(goal);
    let resized = search.find_path(goal)?;
    println!("\nAfter growing the left edge: {}", resized);
    println!("\n{}", search.snapshot());

    Ok(())
}

fn print_path(search: &PathSearch, goal: GridPoint) {
    let grid = search.grid();
    let path: HashSet<GridPoint> = search.path().iter().copied().collect();

    for y in 0..grid.height() {
        print!("{} ", y);
        for x in 0..grid.width() {
            let p = GridPoint::new(x, y);
            let symbol = if p == grid.start() {
                "S"
            } else if p == goal {
                "G"
            } else if path.contains(&p) {
                "*"
            } else if grid.get_cell_cost(p).map_or(false, |c| c > grid.min_cost()) {
                "#"
            } else {
                "."
            };
            print!("{} ", symbol);
        }
        println!();
    }
}
