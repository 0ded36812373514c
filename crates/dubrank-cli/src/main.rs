mod compare;
mod list;
mod watch;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dubrank_core::config::{self, DubrankConfig, OutputFormat};
use dubrank_core::Catalog;

use compare::CompareOpts;

#[derive(Parser)]
#[command(
    name = "dubrank",
    version,
    about = "Compare cutscene durations across voice-acted languages"
)]
struct Cli {
    /// Path to dubrank.toml (default: ./dubrank.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Catalog file to load instead of the built-in table.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Log recomputation details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every catalog entry with its id.
    List {
        /// Output the listing as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Rank languages over a selection of entries.
    Compare {
        /// Entry name to select (repeatable).
        #[arg(long = "entry")]
        entries: Vec<String>,
        /// Comma-separated entry ids, e.g. 0-1,3-0.
        #[arg(long)]
        ids: Option<String>,
        /// Select every entry of a category (repeatable).
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Select the whole catalog.
        #[arg(long)]
        all: bool,
        /// Output the comparison as JSON.
        #[arg(long)]
        json: bool,
        /// Only print rows for selected entries.
        #[arg(long)]
        hide_unselected: bool,
    },
    /// Read one selection per stdin line and print each published result.
    Watch {
        /// Print each result as a JSON line.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(path) = &cli.catalog {
        config.catalog.path = Some(path.display().to_string());
    }
    let calc = config.catalog.calculator();
    let catalog = Catalog::from_config(&config.catalog, &calc).context("failed to load catalog")?;

    match cli.command {
        Command::List { json } => list::run(&catalog, json || wants_json(&config)),
        Command::Compare {
            entries,
            ids,
            categories,
            all,
            json,
            hide_unselected,
        } => {
            let opts = CompareOpts {
                entries,
                ids,
                categories,
                all,
                json: json || wants_json(&config),
                show_unselected: config.output.show_unselected && !hide_unselected,
            };
            compare::run(&catalog, &calc, &opts)
        }
        Command::Watch { json } => {
            watch::run(Arc::new(catalog), calc, json || wants_json(&config)).await
        }
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<DubrankConfig> {
    match path {
        Some(path) => config::load_config(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(DubrankConfig::load_or_default()),
    }
}

fn wants_json(config: &DubrankConfig) -> bool {
    config.output.format == OutputFormat::Json
}
