//! Find a path across a text map and print it.
//!
//! # Usage
//!
//! ```bash
//! # Cheapest route across the bundled map
//! findpath demos/maps/tower.txt dijkstra 0 0 15 7
//!
//! # Read the map from stdin, with search logs
//! RUST_LOG=debug findpath - bfs 0 0 3 1 < map.txt
//! ```

use std::env;
use std::fs;
use std::io::{self, Read};

use vecmap_core::{NodeId, Path};
use vecmap_map::{VectorMap, render_path};
use vecmap_paths::{PathFinder, Strategy};

struct Config {
    source: String,
    strategy: Strategy,
    from: (i32, i32),
    to: (i32, i32),
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("findpath", String::as_str);
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage(program);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let [_, source, strategy, x0, y0, x1, y1] = args else {
        return Err(format!("expected 6 arguments, got {}", args.len().saturating_sub(1)));
    };
    let coord = |name: &str, s: &str| {
        s.parse::<i32>()
            .map_err(|e| format!("invalid {name} \u{201c}{s}\u{201d}: {e}"))
    };
    Ok(Config {
        source: source.clone(),
        strategy: strategy.parse().map_err(|e| format!("{e}"))?,
        from: (coord("x0", x0)?, coord("y0", y0)?),
        to: (coord("x1", x1)?, coord("y1", y1)?),
    })
}

fn print_usage(program: &str) {
    let names: Vec<&str> = Strategy::ALL.iter().map(|s| s.name()).collect();
    eprintln!(
        r#"
Usage: {program} <MAP> <STRATEGY> <X0> <Y0> <X1> <Y1>

Search a grid map from (X0, Y0) to (X1, Y1) and draw the path.

ARGUMENTS:
    <MAP>        Map file, or - to read standard input
    <STRATEGY>   One of: {}
    <X0> <Y0>    Origin column and row
    <X1> <Y1>    Destination column and row

Cells: . open floor, # wall, H ladder (links floor and wall)
"#,
        names.join(", ")
    );
}

fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let text = if config.source == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&config.source)?
    };
    let map: VectorMap = text.parse()?;
    log::debug!(
        "loaded {}x{} map from {}",
        map.width(),
        map.height(),
        config.source
    );

    let from = locate(&map, config.from, "origin")?;
    let to = locate(&map, config.to, "destination")?;

    match config.strategy.find_path(map.graph(), from, to)? {
        Some(path) => report(&map, &path),
        None => {
            println!("{map}");
            println!();
            println!("no path ({})", config.strategy);
            Ok(())
        }
    }
}

fn locate(map: &VectorMap, (x, y): (i32, i32), what: &str) -> Result<NodeId, String> {
    map.find_node(x, y).ok_or_else(|| {
        format!(
            "{what} ({x}, {y}) is outside the {}x{} map",
            map.width(),
            map.height()
        )
    })
}

fn report(map: &VectorMap, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render_path(map, path)?);
    println!();
    for v in path {
        println!("  {}", map.graph().describe(v));
    }
    println!(
        "{} steps, total magnitude {}",
        path.len(),
        path.total_magnitude()
    );
    Ok(())
}
