//! Plan a path across an occupancy grid map.
//!
//! Usage:
//!   gridplan --map maps/office.txt --start 0 0 --goal 40 12
//!   gridplan --map maps/office.txt --world --start -1.2 0.4 --goal 2.5 1.0 -a bfs

use anyhow::{ bail, Context, Result };
use clap::Parser;
use either::Either;
use log::info;

use gridplan::{ Algorithm, Cell, GraphConfig, GridGraph };

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map file: a header line `origin_x origin_y width height meters_per_cell`
    /// followed by one line of log-odds values per row
    #[arg(short, long)]
    map: PathBuf,

    /// Search algorithm (dfs, bfs or astar)
    #[arg(short, long, default_value = "astar")]
    algorithm: Algorithm,

    /// Start cell, or position with --world
    #[arg(long, num_args = 2, value_names = ["I", "J"], allow_negative_numbers = true, required = true)]
    start: Vec<f64>,

    /// Goal cell, or position with --world
    #[arg(long, num_args = 2, value_names = ["I", "J"], allow_negative_numbers = true, required = true)]
    goal: Vec<f64>,

    /// Read start and goal as world coordinates and print the path as
    /// cell centers in world coordinates
    #[arg(short, long)]
    world: bool,

    /// Log-odds value at or above which a cell is occupied
    #[arg(long, default_value_t = -100, allow_negative_numbers = true)]
    threshold: i32,

    /// Robot radius in world units
    #[arg(long, default_value_t = 0.15)]
    radius: f64,

    /// Print the loaded map before searching
    #[arg(long)]
    dump: bool,
}

fn to_cell(graph: &GridGraph, xy: &[f64], world: bool) -> Result<Cell> {
    let (x, y) = (xy[0], xy[1]);
    if world {
        return Ok(graph.pos_to_cell(x, y))
    }
    if x.fract() != 0. || y.fract() != 0. {
        bail!("cell coordinates must be integers, got {} {}", x, y);
    }
    Ok(Cell::new(x as i32, y as i32))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = GraphConfig::default()
        .with_threshold(args.threshold)
        .with_collision_radius(args.radius);
    let graph = GridGraph::load(&args.map, config)
        .with_context(|| format!("Failed to build graph from {:?}", args.map))?;
    info!("Loaded {}x{} map, robot spans {} cells",
          graph.width(), graph.height(), graph.collision_radius_cells());

    if args.dump {
        print!("{}", graph.as_string());
    }

    let start = to_cell(&graph, &args.start, args.world)?;
    let goal = to_cell(&graph, &args.goal, args.world)?;

    let search = args.algorithm.run(&graph, start, goal);
    info!("{} expanded {} cells", args.algorithm, search.visited_cells().len());

    if !search.found() {
        println!("No path from {} to {}", start, goal);
        return Ok(())
    }

    let lines = if args.world {
        Either::Left(search.path.iter().map(|c| {
            let p = graph.cell_to_pos(c.i, c.j);
            format!("{:.3} {:.3}", p.x, p.y)
        }))
    } else {
        Either::Right(search.path.iter().map(|c| format!("{} {}", c.i, c.j)))
    };
    for line in lines {
        println!("{}", line);
    }
    info!("Path of {} cells ({} steps)", search.path.len(), search.path.len() - 1);

    Ok(())
}
