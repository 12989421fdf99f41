use clap::Parser;
use gridbots::config::{self, ArenaConfig};
use gridbots::render::TextRenderer;
use gridbots::{Game, logging, strategies};
use log::{LevelFilter, error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Robots to enter, by tactic name (tank, sniper, bomber, pyro). Defaults to all four.
    robots: Vec<String>,

    /// Number of grid rows.
    #[arg(long, default_value_t = config::ARENA_ROWS)]
    rows: usize,

    /// Number of grid columns.
    #[arg(long, default_value_t = config::ARENA_COLS)]
    cols: usize,

    #[arg(long, default_value_t = config::NUM_MOUNDS)]
    mounds: usize,

    #[arg(long, default_value_t = config::NUM_PITS)]
    pits: usize,

    #[arg(long, default_value_t = config::NUM_FLAMETHROWERS)]
    flamethrowers: usize,

    /// Maximum number of rounds to simulate.
    #[arg(long, default_value_t = config::MAX_ROUNDS)]
    max_rounds: u32,

    /// Maximum number of robots admitted to the arena.
    #[arg(long, default_value_t = config::MAX_ROBOTS)]
    max_robots: usize,

    /// Pause between rounds so the game can be followed live.
    #[arg(long)]
    watch_live: bool,

    /// Seed for hazard placement and damage rolls. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Debug filter to specify log topics (e.g., "round,radar,move,weapon")
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let log_level = match args.log_level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    if let Err(e) = logging::init_logger(log_level, args.debug_filter.clone()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    info!("Initializing arena...");
    let config = ArenaConfig {
        arena_rows: args.rows,
        arena_cols: args.cols,
        num_mounds: args.mounds,
        num_pits: args.pits,
        num_flamethrowers: args.flamethrowers,
        max_rounds: args.max_rounds,
        watch_live: args.watch_live,
        max_robots: args.max_robots,
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(&config, rng);

    let names: Vec<String> = if args.robots.is_empty() {
        strategies::NAMES.iter().map(|s| s.to_string()).collect()
    } else {
        args.robots
    };
    for name in &names {
        let strategy = match strategies::by_name(name) {
            Ok(strategy) => strategy,
            Err(e) => {
                error!("{} (known: {})", e, strategies::NAMES.join(", "));
                process::exit(1);
            }
        };
        if let Err(e) = game.add_robot(strategy) {
            warn!("Skipping {}: {}", name, e);
        }
    }
    info!("Loaded {} robots.", game.robots.len());

    let mut renderer = TextRenderer::new(io::stdout());
    game.run(&mut renderer);
    info!("Exiting arena.");
}
