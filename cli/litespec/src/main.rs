//! litespec CLI — classify vehicle observations with composable specifications.

mod commands;
mod fleet;
mod vehicle;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::classify::{ClassifyOptions, OutputFormat};
use vehicle::VehicleClass;

#[derive(Parser)]
#[command(name = "litespec", version, about = "Composable vehicle classification rules")]
struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g., warn, debug, litespec_core=trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Judge every observation in a fleet file
    Classify {
        /// Fleet file (TOML with [[observation]] tables)
        #[arg(long)]
        input: PathBuf,
        /// Accept observations matching any of these classes (repeatable)
        #[arg(long = "as", value_enum)]
        accept: Vec<VehicleClass>,
        /// Reject observations matching any of these classes (repeatable)
        #[arg(long, value_enum)]
        exclude: Vec<VehicleClass>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
        /// Print only the observations that satisfy the rule
        #[arg(long)]
        matching_only: bool,
    },
    /// List the known vehicle classes
    Rules,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Classify {
            input,
            accept,
            exclude,
            format,
            matching_only,
        } => commands::classify::run(
            &input,
            &ClassifyOptions {
                accept,
                exclude,
                format,
                matching_only,
            },
        ),
        Commands::Rules => commands::rules::run(),
    }
}
