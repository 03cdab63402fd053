//! CLI error type
//!
//! Every library error converts into [`CliError`] so command handlers can
//! use `?` throughout.

use pricer_core::types::PricingError;
use pricer_pricing::mc::{ConfigError, McError};
use thiserror::Error;

/// Errors surfaced by `optprice` commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Argument value rejected before pricing
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Scenario is incomplete after merging file and flags
    #[error("Configuration error: {0}")]
    Config(String),

    /// Market parameters or model inputs rejected by a pricer
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Monte Carlo configuration rejected
    #[error("Monte Carlo configuration: {0}")]
    Simulation(#[from] ConfigError),

    /// Monte Carlo estimation failed
    #[error("Monte Carlo pricing: {0}")]
    MonteCarlo(#[from] McError),

    /// Scenario file could not be parsed
    #[error("Failed to parse scenario file: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON rendering failed
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV export failed
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_is_transparent() {
        let err: CliError = PricingError::InvalidOptionType("straddle".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Invalid option type: 'straddle'. Use 'call' or 'put'"
        );
    }

    #[test]
    fn test_simulation_error_message() {
        let err: CliError = ConfigError::InvalidStepCount(30.5).into();
        assert!(err.to_string().starts_with("Monte Carlo configuration:"));
    }

    #[test]
    fn test_file_not_found_message() {
        let err = CliError::FileNotFound("scenario.toml".to_string());
        assert_eq!(err.to_string(), "File not found: scenario.toml");
    }
}
