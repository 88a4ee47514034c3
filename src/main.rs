//! Orbit Map CLI
//!
//! Usage:
//!   orbit-map [OPTIONS]
//!
//! Options:
//!   -c, --config <FILE>      Map definition (TOML); built-in map if omitted
//!   -s, --state-dir <DIR>    Directory holding the persisted layout
//!   -m, --move <ID=X,Y>      Drag a node to a position (repeatable)
//!   -r, --reset              Put every node back on the default orbit
//!   --dump-layout            Print the layout snapshot as JSON instead of SVG
//!   -d, --debug              Log node positions and connector geometry
//!   -h, --help               Print help

use std::path::PathBuf;
use std::process;

use clap::Parser;

use orbit_map::layout::{NodeId, Point, PositionOverride};
use orbit_map::persistence::{FileBackend, KeyedStore, LayoutStore, NullStore};
use orbit_map::{render_map, MapConfig, MindMap, RenderConfig, SvgConfig};

#[derive(Parser)]
#[command(name = "orbit-map")]
#[command(about = "Render an orbital mind map as SVG")]
struct Cli {
    /// Map definition (TOML); the built-in map is used if omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the persisted layout (layout is not saved if omitted)
    #[arg(short, long)]
    state_dir: Option<PathBuf>,

    /// Drag a node: ID=X,Y (repeatable, applied in order)
    #[arg(short, long = "move", value_parser = parse_move)]
    moves: Vec<PositionOverride>,

    /// Put every node back on the default orbit before applying moves
    #[arg(short, long)]
    reset: bool,

    /// Print the layout snapshot as JSON instead of SVG
    #[arg(long)]
    dump_layout: bool,

    /// Omit the XML declaration
    #[arg(long)]
    no_standalone: bool,

    /// Log node positions and connector geometry
    #[arg(short, long)]
    debug: bool,
}

fn parse_move(s: &str) -> Result<PositionOverride, String> {
    let (id, coords) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=X,Y, got '{}'", s))?;
    let (x, y) = coords
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y after '=', got '{}'", coords))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|e| format!("bad x '{}': {}", x, e))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|e| format!("bad y '{}': {}", y, e))?;
    if id.is_empty() {
        return Err("node id must not be empty".to_string());
    }
    Ok(PositionOverride::new(NodeId::new(id), Point::new(x, y)))
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let map_config = match &cli.config {
        Some(path) => match MapConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading map '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => MapConfig::default(),
    };

    let mut store: Box<dyn LayoutStore> = match &cli.state_dir {
        Some(dir) => Box::new(KeyedStore::new(
            FileBackend::new(dir),
            map_config.storage_key.clone(),
        )),
        None => Box::new(NullStore),
    };

    let mut map = match MindMap::open(&map_config, &*store) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if cli.reset {
        map.reset(&mut *store);
    }

    for event in cli.moves {
        if let Err(e) = map.apply(event, &mut *store) {
            eprintln!("Error: {}", e);
            if let Some(suggestions) = e.suggestions().filter(|s| !s.is_empty()) {
                eprintln!("Did you mean: {}?", suggestions.join(", "));
            }
            process::exit(1);
        }
    }

    if cli.dump_layout {
        println!("{}", map.snapshot().to_json());
        return;
    }

    let config = RenderConfig::new()
        .with_svg(SvgConfig::new().with_standalone(!cli.no_standalone))
        .with_debug(cli.debug);
    println!("{}", render_map(&map, &map_config.theme, &config));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        let event = parse_move("assets=10,-20.5").unwrap();
        assert_eq!(event, PositionOverride::new("assets", Point::new(10.0, -20.5)));
    }

    #[test]
    fn test_parse_move_errors() {
        assert!(parse_move("assets").is_err());
        assert!(parse_move("assets=10").is_err());
        assert!(parse_move("assets=x,1").is_err());
        assert!(parse_move("=1,2").is_err());
    }
}
