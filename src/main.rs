mod commands;
mod config;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::commands::config::ConfigUpdate;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "lodge-calendar")]
#[command(about = "Generate, browse and export the lodge meeting calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the year's events month by month
    Show {
        /// Calendar year (defaults to default_year from config, else this year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Only events for: all, aldenham, radlett, elstree, loi
        #[arg(short, long)]
        category: Option<String>,

        /// Free-text search over labels, descriptions and dates (e.g. "15th Aug", "15/08")
        #[arg(short, long)]
        search: Option<String>,

        /// Print matching events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the year's calendar as an .ics file
    Export {
        #[arg(short, long)]
        year: Option<i32>,

        /// Output file (defaults to <output_dir>/<file_prefix>-<year>.ics)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the next scheduled event
    Next,
    /// Count meetings, LoI nights and officers nights
    Stats {
        #[arg(short, long)]
        year: Option<i32>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show or change settings in config.toml
    Config {
        #[arg(long)]
        output_dir: Option<PathBuf>,

        #[arg(long)]
        file_prefix: Option<String>,

        #[arg(long)]
        default_year: Option<i32>,
    },
}

fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Commands::Show {
            year,
            category,
            search,
            json,
        } => {
            let config = Config::load()?;
            let filter = commands::build_filter(search, category.as_deref())?;
            commands::show::run(config.resolve_year(year, today), filter, json)
        }
        Commands::Export { year, output } => {
            let config = Config::load()?;
            let year = config.resolve_year(year, today);
            commands::export::run(&config, year, output)
        }
        Commands::Next => commands::next::run(today),
        Commands::Stats {
            year,
            category,
            search,
        } => {
            let config = Config::load()?;
            let filter = commands::build_filter(search, category.as_deref())?;
            commands::stats::run(config.resolve_year(year, today), filter)
        }
        Commands::Config {
            output_dir,
            file_prefix,
            default_year,
        } => commands::config::run(ConfigUpdate {
            output_dir,
            file_prefix,
            default_year,
        }),
    }
}

/// Log to stderr, filtered by RUST_LOG (warnings only by default)
fn init_logging() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {}", e))?;

    Ok(())
}
