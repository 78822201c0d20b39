mod commands;
mod config;
mod logging;
mod report;

use batsense_sensors::linux::SysfsBatterySource;
use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

use config::LogLevel;

#[derive(Debug, Subcommand)]
enum Commands {
    /// List discovered batteries (default)
    #[command(alias = "ls")]
    List {
        /// Output JSON instead of a table
        #[arg(short, long)]
        json: bool,

        /// Compact JSON output (single line)
        #[arg(short, long)]
        compact: bool,
    },

    /// Show details for one battery
    Show {
        /// Battery name (e.g., BAT0)
        name: String,
    },
}

/// Battery capacity and charging state from /sys/class/power_supply
#[derive(Debug, Parser)]
#[command(name = "batsense", version, verbatim_doc_comment)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let log_level = cli
        .log_level
        .as_deref()
        .map(LogLevel::from_str)
        .unwrap_or_default();
    logging::init(log_level);

    let source = SysfsBatterySource::new();
    if !source.is_supported() {
        tracing::warn!(root = %source.root().display(), "power supply registry not found");
    }

    match cli.command {
        Some(Commands::List { json, compact }) => commands::list::run(&source, json, compact),
        Some(Commands::Show { name }) => commands::show::run(&source, &name),
        None => commands::list::run(&source, false, false),
    }
}
