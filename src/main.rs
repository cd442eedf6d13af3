mod map_file; // text map parser
mod settings; // layered configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use aurus_navigation::{Heuristic, PathSearch};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "aurus-planner")]
#[command(about = "Cheapest 4-connected path over a cost grid map")]
#[command(version)]
struct Cli {
    /// Map file: dimensions, start, goal and row-major cell costs
    map: PathBuf,

    /// Configuration file (defaults to config/default.toml when present)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Distance heuristic: manhattan, euclidean or chebyshev
    #[arg(long = "heuristic", value_name = "NAME")]
    heuristic: Option<Heuristic>,

    /// Per-cell cost floor the heuristic is scaled by
    #[arg(long = "min-cost", value_name = "COST")]
    min_cost: Option<f64>,

    /// Also print the simplified waypoints
    #[arg(short = 'w', long = "waypoints")]
    waypoints: bool,

    /// Print the cost grid and the final search state
    #[arg(short = 'd', long = "dump")]
    dump: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings =
        settings::load_settings(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(heuristic) = cli.heuristic {
        settings.planner.heuristic = heuristic;
    }
    if let Some(min_cost) = cli.min_cost {
        settings.planner.min_cost = min_cost;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();
    debug!(?settings, "Configuration loaded");

    let map = map_file::load(&cli.map)?;
    info!(
        height = map.height,
        width = map.width,
        start = %map.start,
        goal = %map.goal,
        "Map loaded"
    );

    let mut search = PathSearch::with_config(map.height, map.width, map.start, settings.planner)
        .context("Invalid map header")?;
    search.set_costs(&map.costs).context("Invalid cell costs")?;

    if cli.dump {
        println!("{}", search.grid());
    }

    let result = search.find_path(map.goal).context("Path query failed")?;

    println!("path coordinates:");
    for &p in &result.path {
        let cost = search.path_cost(p).unwrap_or_default();
        println!("{},{} (cost = {})", p.x, p.y, cost);
    }
    println!("total cost: {}", result.total_cost);

    if cli.waypoints {
        println!("waypoints:");
        for p in search.waypoints() {
            println!("{},{}", p.x, p.y);
        }
    }

    if cli.dump {
        println!();
        print!("{}", search.snapshot());
    }

    info!(
        nodes_expanded = result.nodes_expanded,
        path_length = result.path_length(),
        "Planning finished"
    );
    Ok(())
}
