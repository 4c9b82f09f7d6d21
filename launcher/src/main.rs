//! WaveTech launcher
//!
//! Decides at startup whether to show remote content or the built-in
//! microwave workshop, and gives command-line access to the workshop records.
//!
//! Usage:
//!   wavetech [--config wavetech.json] [--data-dir DIR] [start]
//!   wavetech list parts
//!   wavetech search listings heatwave
//!   wavetech reset-trust

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;
use wavetech_inventory::RecordKind;
use wavetech_launcher::{App, AppConfig, Launch};

#[derive(Parser, Debug)]
#[command(name = "wavetech")]
#[command(about = "WaveTech microwave workshop")]
struct Args {
    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the data directory
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the startup gate (default)
    Start,
    /// Print every record of a kind
    List {
        /// listings, parts, inventory, work-logs, templates, or diagnostics
        kind: RecordKind,
    },
    /// Print records of a kind matching a query
    Search { kind: RecordKind, query: String },
    /// Forget the cached trust record
    ResetTrust,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let mut config = AppConfig::load(args.config.as_deref()).context("Failed to load config")?;
    if let Some(dir) = args.data_dir {
        config.data_dir = Some(dir);
    }
    let app = App::open(config).context("Failed to open stores")?;

    match args.command.unwrap_or(Command::Start) {
        Command::Start => match app.launch().await? {
            Launch::Remote(url) => println!("{url}"),
            Launch::Native(summary) => println!("{summary}"),
        },
        Command::List { kind } => print_records(&app, kind, "")?,
        Command::Search { kind, query } => print_records(&app, kind, &query)?,
        Command::ResetTrust => {
            app.reset_trust()?;
            info!("Next launch will validate again");
        }
    }
    Ok(())
}

fn print_records(app: &App, kind: RecordKind, query: &str) -> Result<()> {
    let store = app.inventory()?;
    let lines = store.headlines(kind, query);
    if lines.is_empty() {
        println!("No {kind} found");
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
