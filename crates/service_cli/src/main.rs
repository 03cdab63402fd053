//! optprice - European option pricing from the command line
//!
//! # Commands
//!
//! - `optprice price --config <file>` - Price call and put with the analytical,
//!   binomial and Monte Carlo models
//! - `optprice simulate --config <file> --export <csv>` - Export simulated
//!   paths for an external charting tool
//!
//! Market values and model settings given as flags override the scenario
//! file. Logging goes to stderr; set `RUST_LOG` or pass `--verbose`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::price::OutputFormat;
use config::{Overrides, Scenario};

/// European option pricer
#[derive(Parser)]
#[command(name = "optprice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the scenario with every model
    Price {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Simulate paths and export them as CSV
    Simulate {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// CSV file to write
        #[arg(short, long)]
        export: PathBuf,

        /// Number of leading paths to export
        #[arg(short = 'k', long, default_value_t = 10)]
        plot_paths: usize,
    },
}

/// Scenario file and per-value overrides shared by all commands
#[derive(Args)]
struct ScenarioArgs {
    /// Scenario TOML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Spot price
    #[arg(long)]
    spot: Option<f64>,

    /// Strike price
    #[arg(long)]
    strike: Option<f64>,

    /// Calendar days to maturity
    #[arg(long)]
    days: Option<f64>,

    /// Continuously compounded risk-free rate
    #[arg(long, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Annualised volatility
    #[arg(long)]
    vol: Option<f64>,

    /// Binomial lattice steps
    #[arg(long)]
    steps: Option<usize>,

    /// Monte Carlo paths
    #[arg(long)]
    paths: Option<usize>,

    /// Monte Carlo seed
    #[arg(long)]
    seed: Option<u64>,

    /// Use antithetic path pairs
    #[arg(long, overrides_with = "no_antithetic")]
    antithetic: bool,

    /// Disable antithetic path pairs set in the scenario file
    #[arg(long, overrides_with = "antithetic")]
    no_antithetic: bool,
}

impl ScenarioArgs {
    fn resolve(&self) -> Result<Scenario> {
        let overrides = Overrides {
            spot: self.spot,
            strike: self.strike,
            maturity_days: self.days,
            rate: self.rate,
            volatility: self.vol,
            binomial_steps: self.steps,
            mc_paths: self.paths,
            mc_seed: self.seed,
            mc_antithetic: match (self.antithetic, self.no_antithetic) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
        };
        Scenario::from_sources(self.config.as_deref(), &overrides)
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Price { scenario, format } => {
            let scenario = scenario.resolve()?;
            debug!(?scenario, "Resolved scenario");
            commands::price::run(&scenario, format)
        }
        Commands::Simulate {
            scenario,
            export,
            plot_paths,
        } => {
            let scenario = scenario.resolve()?;
            debug!(?scenario, "Resolved scenario");
            commands::simulate::run(&scenario, &export, plot_paths)
        }
    }
}
