//! Monte Carlo simulation configuration.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of daily time steps (rows) allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Maximum number of matrix cells (`steps × n_paths`) one simulation may hold.
pub const MAX_CELLS: usize = 100_000_000;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Monte Carlo simulation configuration.
///
/// Immutable once built. Use [`MonteCarloConfigBuilder`] to construct
/// instances; the step count is not configured here because it follows
/// from the option's maturity (one step per calendar day).
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .antithetic(true)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.seed(), 42);
/// assert!(config.antithetic());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    n_paths: usize,
    seed: u64,
    antithetic: bool,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the seed every simulation starts from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns whether paths are drawn in antithetic pairs.
    #[inline]
    pub fn antithetic(&self) -> bool {
        self.antithetic
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than 10,000,000
    /// - antithetic sampling is enabled with an odd `n_paths`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.antithetic && self.n_paths % 2 != 0 {
            return Err(ConfigError::OddAntitheticPaths(self.n_paths));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .seed(12345)
///     .build()
///     .expect("valid config");
/// assert_eq!(config.seed(), 12345);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    seed: Option<u64>,
    antithetic: bool,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths, in [1, 10_000_000].
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the seed. Defaults to [`DEFAULT_SEED`].
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables antithetic pairing of normal draws.
    #[inline]
    pub fn antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_paths` is not set or the result fails
    /// [`MonteCarloConfig::validate`].
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_paths = self
            .n_paths
            .ok_or(ConfigError::MissingParameter("n_paths"))?;

        let config = MonteCarloConfig {
            n_paths,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            antithetic: self.antithetic,
        };

        config.validate()?;
        Ok(config)
    }
}
