//! Main entry point for the canteen-wait tool
//!
//! Reads a menu snapshot, scores it with the configured penalty and prints
//! the recommendation as text or JSON.

use anyhow::Result;
use canteen_wait::config::{validate_config, AppConfig};
use canteen_wait::menu::{FileMenuProvider, MenuProvider, MenuSnapshot, StaticMenuProvider};
use canteen_wait::report::RecommendedItem;
use canteen_wait::types::MenuItem;
use canteen_wait::wait_time::WaitEstimator;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Canteen Wait - shortest-wait recommendations for campus canteens
#[derive(Parser)]
#[command(
    name = "canteen-wait",
    version,
    about = "Recommend the menu item or canteen with the shortest expected wait",
    long_about = "canteen-wait scores each menu item as preparation time plus pending orders \
                 weighted by a penalty, then recommends the fastest item and the canteen with \
                 the lowest mean score. Menus are read as JSON from a file or standard input."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Menu snapshot path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Menu snapshot JSON file, `-` for standard input"
    )]
    menu: Option<PathBuf>,

    /// Penalty override
    #[arg(
        short,
        long,
        value_name = "MINUTES",
        help = "Override the minutes added per pending order"
    )]
    penalty: Option<f64>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without reading a menu")]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fastest item, fastest canteen and the full canteen ranking
    Report,
    /// Fastest item, optionally within one canteen
    Item {
        /// Only consider items served by this canteen
        #[arg(long, value_name = "ID")]
        canteen: Option<String>,
    },
    /// Canteen with the lowest mean score
    Canteen,
    /// All canteens by ascending mean score
    Rank,
    /// Score a single item without reading a menu
    Score {
        /// Preparation time in minutes
        #[arg(long, default_value_t = 0.0)]
        prep_time: f64,
        /// Orders queued ahead
        #[arg(long, default_value_t = 0)]
        pending_orders: u32,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file, environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(penalty) = args.penalty {
        config.estimator.penalty = penalty;
    }

    if let Some(menu) = &args.menu {
        config.menu.snapshot_path = Some(menu.clone());
    }

    validate_config(&config)?;
    Ok(config)
}

/// Pick the menu source: a file, or standard input for `-` or no path
fn menu_provider(path: Option<&Path>) -> Result<Box<dyn MenuProvider>> {
    match path {
        Some(path) if path != Path::new("-") => Ok(Box::new(FileMenuProvider::new(path))),
        _ => {
            let snapshot = MenuSnapshot::from_reader(io::stdin().lock())?;
            Ok(Box::new(StaticMenuProvider::new(snapshot)))
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Fetch the menu from the configured source
fn load_snapshot(config: &AppConfig) -> Result<MenuSnapshot> {
    let provider = menu_provider(config.menu.snapshot_path.as_deref())?;
    info!("Reading menu from {}", provider.describe());

    let snapshot = provider.snapshot()?;
    debug!(
        "Menu captured at {} with {} items across {} canteens",
        snapshot.captured_at,
        snapshot.len(),
        snapshot.canteens().len()
    );

    Ok(snapshot)
}

fn run(args: &Args, config: &AppConfig) -> Result<()> {
    let estimator = WaitEstimator::new(config.estimator.clone())?;
    let default_command = Command::Report;
    let command = args.command.as_ref().unwrap_or(&default_command);

    match command {
        Command::Report => {
            let snapshot = load_snapshot(config)?;
            let report = estimator.recommend(&snapshot.items);
            match args.format {
                OutputFormat::Json => print_json(&report)?,
                OutputFormat::Text => print!("{}", report),
            }
        }
        Command::Item { canteen } => {
            let snapshot = load_snapshot(config)?;
            let snapshot = match canteen {
                Some(canteen) => snapshot.for_canteen(canteen),
                None => snapshot,
            };
            let best = estimator
                .recommend_item(&snapshot.items)
                .map(RecommendedItem::from);
            match (args.format, &best) {
                (OutputFormat::Json, _) => print_json(&best)?,
                (OutputFormat::Text, Some(item)) => println!("Fastest item: {}", item),
                (OutputFormat::Text, None) => println!("No items to recommend"),
            }
        }
        Command::Canteen => {
            let snapshot = load_snapshot(config)?;
            let best = estimator.recommend_canteen(&snapshot.items);
            match (args.format, &best) {
                (OutputFormat::Json, _) => print_json(&best)?,
                (OutputFormat::Text, Some(canteen)) => println!("Fastest canteen: {}", canteen),
                (OutputFormat::Text, None) => println!("No canteens to recommend"),
            }
        }
        Command::Rank => {
            let snapshot = load_snapshot(config)?;
            let ranking = estimator.rank_canteens(&snapshot.items);
            match args.format {
                OutputFormat::Json => print_json(&ranking)?,
                OutputFormat::Text => {
                    for (rank, canteen) in ranking.iter().enumerate() {
                        println!("{}. {}", rank + 1, canteen);
                    }
                }
            }
        }
        Command::Score {
            prep_time,
            pending_orders,
        } => {
            let score = estimator.score(&MenuItem::new(*prep_time, *pending_orders));
            match args.format {
                OutputFormat::Json => print_json(&serde_json::json!({ "score": score }))?,
                OutputFormat::Text => println!("Score: {:.2}", score),
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        info!("Configuration validation successful");
        info!(
            "Service {} with penalty {}",
            config.service.name, config.estimator.penalty
        );
        info!("Dry run completed - exiting without reading a menu");
        return Ok(());
    }

    if let Err(e) = run(&args, &config) {
        error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
