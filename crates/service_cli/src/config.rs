//! Scenario configuration
//!
//! A scenario is read from a TOML file with `[market]` and `[models]`
//! tables and then overridden by command-line flags.
//!
//! ```toml
//! [market]
//! spot = 100.0
//! strike = 105.0
//! maturity_days = 30
//! rate = 0.01
//! volatility = 0.2
//!
//! [models]
//! binomial_steps = 500
//! mc_paths = 1000
//! mc_seed = 42
//! mc_antithetic = false
//! ```
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Scenario file
//! 3. Defaults (`[models]` only; market values have no default)

use std::path::Path;

use pricer_core::market_data::MarketParameters;
use pricer_pricing::mc::{MonteCarloConfig, DEFAULT_SEED};
use serde::Deserialize;

use crate::{CliError, Result};

/// Default binomial lattice size
pub const DEFAULT_BINOMIAL_STEPS: usize = 500;

/// Default Monte Carlo path count
pub const DEFAULT_MC_PATHS: usize = 1000;

/// `[market]` table; every field may be supplied by a flag instead
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarketSection {
    pub spot: Option<f64>,
    pub strike: Option<f64>,
    pub maturity_days: Option<f64>,
    pub rate: Option<f64>,
    pub volatility: Option<f64>,
}

/// `[models]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelSection {
    pub binomial_steps: usize,
    pub mc_paths: usize,
    pub mc_seed: u64,
    pub mc_antithetic: bool,
}

impl Default for ModelSection {
    fn default() -> Self {
        Self {
            binomial_steps: DEFAULT_BINOMIAL_STEPS,
            mc_paths: DEFAULT_MC_PATHS,
            mc_seed: DEFAULT_SEED,
            mc_antithetic: false,
        }
    }
}

/// Scenario file contents before flags are applied
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioFile {
    pub market: MarketSection,
    pub models: ModelSection,
}

impl ScenarioFile {
    /// Parse a scenario from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a scenario file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub spot: Option<f64>,
    pub strike: Option<f64>,
    pub maturity_days: Option<f64>,
    pub rate: Option<f64>,
    pub volatility: Option<f64>,
    pub binomial_steps: Option<usize>,
    pub mc_paths: Option<usize>,
    pub mc_seed: Option<u64>,
    pub mc_antithetic: Option<bool>,
}

/// Fully resolved, validated scenario
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub market: MarketParameters,
    pub models: ModelSection,
}

impl Scenario {
    /// Merge flags over file values and validate the market parameters
    pub fn resolve(file: ScenarioFile, overrides: &Overrides) -> Result<Self> {
        let market = &file.market;
        let market = MarketParameters::new(
            required("spot", overrides.spot.or(market.spot))?,
            required("strike", overrides.strike.or(market.strike))?,
            required(
                "maturity_days",
                overrides.maturity_days.or(market.maturity_days),
            )?,
            required("rate", overrides.rate.or(market.rate))?,
            required("volatility", overrides.volatility.or(market.volatility))?,
        )?;

        let mut models = file.models;
        if let Some(steps) = overrides.binomial_steps {
            models.binomial_steps = steps;
        }
        if let Some(paths) = overrides.mc_paths {
            models.mc_paths = paths;
        }
        if let Some(seed) = overrides.mc_seed {
            models.mc_seed = seed;
        }
        if let Some(antithetic) = overrides.mc_antithetic {
            models.mc_antithetic = antithetic;
        }

        Ok(Self { market, models })
    }

    /// Load the optional scenario file and resolve it against `overrides`
    pub fn from_sources(path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let file = match path {
            Some(path) => ScenarioFile::load(path)?,
            None => ScenarioFile::default(),
        };
        Self::resolve(file, overrides)
    }

    /// Monte Carlo configuration for this scenario
    pub fn mc_config(&self) -> Result<MonteCarloConfig> {
        Ok(MonteCarloConfig::builder()
            .n_paths(self.models.mc_paths)
            .seed(self.models.mc_seed)
            .antithetic(self.models.mc_antithetic)
            .build()?)
    }
}

fn required(name: &str, value: Option<f64>) -> Result<f64> {
    value.ok_or_else(|| {
        CliError::Config(format!(
            "market value '{}' missing: set it under [market] or pass it as a flag",
            name
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"
        [market]
        spot = 100.0
        strike = 105.0
        maturity_days = 30
        rate = 0.01
        volatility = 0.2

        [models]
        binomial_steps = 200
        mc_paths = 5000
    "#;

    #[test]
    fn test_parse_full_scenario() {
        let file = ScenarioFile::parse(SCENARIO).unwrap();
        assert_eq!(file.market.spot, Some(100.0));
        assert_eq!(file.market.maturity_days, Some(30.0));
        assert_eq!(file.models.binomial_steps, 200);
        assert_eq!(file.models.mc_paths, 5000);
        // Unset model fields keep their defaults
        assert_eq!(file.models.mc_seed, 42);
        assert!(!file.models.mc_antithetic);
    }

    #[test]
    fn test_model_defaults() {
        let models = ModelSection::default();
        assert_eq!(models.binomial_steps, 500);
        assert_eq!(models.mc_paths, 1000);
        assert_eq!(models.mc_seed, 42);
        assert!(!models.mc_antithetic);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = ScenarioFile::parse("[market]\nspott = 100.0\n");
        assert!(matches!(result, Err(CliError::Toml(_))));
    }

    #[test]
    fn test_resolve_file_only() {
        let file = ScenarioFile::parse(SCENARIO).unwrap();
        let scenario = Scenario::resolve(file, &Overrides::default()).unwrap();
        assert_eq!(scenario.market.strike(), 105.0);
        assert_eq!(scenario.models.mc_paths, 5000);
    }

    #[test]
    fn test_flags_override_file() {
        let file = ScenarioFile::parse(SCENARIO).unwrap();
        let overrides = Overrides {
            spot: Some(110.0),
            mc_paths: Some(2000),
            mc_seed: Some(7),
            mc_antithetic: Some(true),
            ..Default::default()
        };
        let scenario = Scenario::resolve(file, &overrides).unwrap();
        assert_eq!(scenario.market.spot(), 110.0);
        assert_eq!(scenario.market.strike(), 105.0);
        assert_eq!(scenario.models.mc_paths, 2000);
        assert_eq!(scenario.models.mc_seed, 7);
        assert!(scenario.models.mc_antithetic);
        assert_eq!(scenario.models.binomial_steps, 200);
    }

    #[test]
    fn test_flag_disables_antithetic_from_file() {
        let file = ScenarioFile::parse(&format!("{}mc_antithetic = true\n", SCENARIO)).unwrap();
        assert!(file.models.mc_antithetic);

        let kept = Scenario::resolve(file.clone(), &Overrides::default()).unwrap();
        assert!(kept.models.mc_antithetic);

        let overrides = Overrides {
            mc_antithetic: Some(false),
            ..Default::default()
        };
        let scenario = Scenario::resolve(file, &overrides).unwrap();
        assert!(!scenario.models.mc_antithetic);
    }

    #[test]
    fn test_flags_only_without_file() {
        let overrides = Overrides {
            spot: Some(100.0),
            strike: Some(100.0),
            maturity_days: Some(90.0),
            rate: Some(0.05),
            volatility: Some(0.25),
            ..Default::default()
        };
        let scenario = Scenario::from_sources(None, &overrides).unwrap();
        assert_eq!(scenario.market.volatility(), 0.25);
        assert_eq!(scenario.models, ModelSection::default());
    }

    #[test]
    fn test_missing_market_value() {
        let file = ScenarioFile::parse("[market]\nspot = 100.0\n").unwrap();
        match Scenario::resolve(file, &Overrides::default()).unwrap_err() {
            CliError::Config(message) => assert!(message.contains("strike")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_market_value() {
        let overrides = Overrides {
            volatility: Some(-0.2),
            ..Default::default()
        };
        let file = ScenarioFile::parse(SCENARIO).unwrap();
        assert!(matches!(
            Scenario::resolve(file, &overrides),
            Err(CliError::Pricing(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = Scenario::from_sources(
            Some(Path::new("/nonexistent/scenario.toml")),
            &Overrides::default(),
        );
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.toml");
        std::fs::write(&path, SCENARIO).unwrap();
        let scenario = Scenario::from_sources(Some(&path), &Overrides::default()).unwrap();
        assert_eq!(scenario.market.maturity_days(), 30.0);
    }

    #[test]
    fn test_mc_config_rejects_odd_antithetic() {
        let overrides = Overrides {
            mc_paths: Some(1001),
            mc_antithetic: Some(true),
            ..Default::default()
        };
        let file = ScenarioFile::parse(SCENARIO).unwrap();
        let scenario = Scenario::resolve(file, &overrides).unwrap();
        assert!(matches!(scenario.mc_config(), Err(CliError::Simulation(_))));
    }
}
