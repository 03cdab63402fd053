//! Error types for the Monte Carlo engine.
//!
//! [`ConfigError`] is raised while building a configuration or pricer;
//! [`McError`] is raised when pricing from a simulated matrix.

use pricer_core::types::PricingError;
use thiserror::Error;

use super::config::{MAX_CELLS, MAX_PATHS, MAX_STEPS};

/// Configuration error for the Monte Carlo pricer.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Path count outside [1, 10_000_000].
    #[error("Invalid path count {0}: must be in range [1, {max}]", max = MAX_PATHS)]
    InvalidPathCount(usize),

    /// Maturity that does not map to a whole number of daily steps in [1, 10_000].
    #[error("Invalid maturity of {0} days: must be a whole number of days in [1, {max}]", max = MAX_STEPS)]
    InvalidStepCount(f64),

    /// Antithetic pairing needs an even number of paths.
    #[error("Antithetic sampling requires an even path count, got {0}")]
    OddAntitheticPaths(usize),

    /// Step and path counts whose product exceeds the matrix cell limit.
    #[error(
        "Price matrix of {rows} steps x {paths} paths is too large: at most {max} cells",
        max = MAX_CELLS
    )]
    MatrixTooLarge {
        /// Daily steps (matrix rows).
        rows: usize,
        /// Simulated paths (matrix columns).
        paths: usize,
    },

    /// A required builder field was never set.
    #[error("Missing parameter '{0}': must be specified")]
    MissingParameter(&'static str),
}

/// Runtime error when estimating a price from simulated paths.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum McError {
    /// No price matrix is available to price from.
    #[error("No simulated prices available: call simulate_prices first")]
    NotSimulated,

    /// Matrix dimensions differ from the pricer that is reading it.
    #[error("Price matrix is {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    ShapeMismatch {
        /// Rows (time steps) the pricer expects.
        expected_rows: usize,
        /// Columns (paths) the pricer expects.
        expected_cols: usize,
        /// Rows found in the matrix.
        rows: usize,
        /// Columns found in the matrix.
        cols: usize,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidPathCount(n) => PricingError::InvalidParameter {
                name: "n_paths",
                value: n as f64,
                reason: "must be in range [1, 10_000_000]",
            },
            ConfigError::InvalidStepCount(days) => PricingError::InvalidParameter {
                name: "maturity_days",
                value: days,
                reason: "must be a whole number of days in [1, 10_000] for simulation",
            },
            ConfigError::OddAntitheticPaths(n) => PricingError::InvalidParameter {
                name: "n_paths",
                value: n as f64,
                reason: "must be even for antithetic sampling",
            },
            ConfigError::MatrixTooLarge { paths, .. } => PricingError::InvalidParameter {
                name: "n_paths",
                value: paths as f64,
                reason: "steps x n_paths must not exceed 100_000_000 matrix cells",
            },
            other @ ConfigError::MissingParameter(_) => PricingError::ModelFailure(other.to_string()),
        }
    }
}

impl From<McError> for PricingError {
    fn from(err: McError) -> Self {
        PricingError::ModelFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = ConfigError::InvalidStepCount(30.5);
        assert!(err.to_string().contains("30.5 days"));

        let err = ConfigError::OddAntitheticPaths(999);
        assert!(err.to_string().contains("999"));

        let err = ConfigError::MissingParameter("n_paths");
        assert!(err.to_string().contains("n_paths"));

        let err = ConfigError::MatrixTooLarge {
            rows: 365,
            paths: 10_000_000,
        };
        assert!(err.to_string().contains("365 steps x 10000000 paths"));
    }

    #[test]
    fn test_mc_error_display() {
        assert!(McError::NotSimulated.to_string().contains("simulate_prices"));

        let err = McError::ShapeMismatch {
            expected_rows: 30,
            expected_cols: 1000,
            rows: 30,
            cols: 500,
        };
        assert_eq!(err.to_string(), "Price matrix is 30x500, expected 30x1000");
    }

    #[test]
    fn test_config_error_into_pricing_error() {
        match PricingError::from(ConfigError::InvalidStepCount(0.5)) {
            PricingError::InvalidParameter { name, value, .. } => {
                assert_eq!(name, "maturity_days");
                assert_eq!(value, 0.5);
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
        assert!(matches!(
            PricingError::from(ConfigError::MissingParameter("n_paths")),
            PricingError::ModelFailure(_)
        ));
    }

    #[test]
    fn test_mc_error_into_pricing_error() {
        let err: PricingError = McError::NotSimulated.into();
        assert!(err.to_string().contains("No simulated prices"));
    }
}
