//! Monte Carlo pricer for European options.
//!
//! Simulation and valuation are separate steps: [`MonteCarloPricer::simulate_prices`]
//! returns a [`PriceMatrix`] and the pricing methods read it explicitly.

use pricer_core::market_data::MarketParameters;
use pricer_core::types::OptionType;
use tracing::{debug, instrument};

use super::config::{MonteCarloConfig, MAX_CELLS, MAX_STEPS};
use super::error::{ConfigError, McError};
use super::paths::{simulate_gbm, GbmStep, PriceMatrix};
use crate::rng::PricerRng;

/// Monte Carlo price estimate.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricingResult;
///
/// let result = PricingResult { price: 10.45, std_error: 0.05 };
/// assert!((result.confidence_95() - 0.098).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingResult {
    /// Discounted sample mean of the payoff.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo pricer under risk-neutral geometric Brownian motion.
///
/// One time step is simulated per calendar day, so the matrix has
/// `maturity_days` rows. Row 0 is the spot and each following row applies
/// one daily GBM transition; the last row is the terminal distribution used
/// for payoffs, which lies at [`horizon`](Self::horizon) years. Payoffs are
/// discounted over the full expiry `T`.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::MarketParameters;
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let params = MarketParameters::new(100.0, 105.0, 30.0, 0.01, 0.2).unwrap();
/// let config = MonteCarloConfig::builder().n_paths(1000).seed(42).build().unwrap();
/// let pricer = MonteCarloPricer::new(params, config).unwrap();
///
/// let matrix = pricer.simulate_prices();
/// assert_eq!(matrix.shape(), (30, 1000));
///
/// let call = pricer.calculate_call_option_price(&matrix).unwrap();
/// let put = pricer.calculate_put_option_price(&matrix).unwrap();
/// assert!(call > 0.0 && put > call);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    params: MarketParameters,
    config: MonteCarloConfig,
    steps: usize,
    dt: f64,
    step: GbmStep,
}

impl MonteCarloPricer {
    /// Creates a pricer for `params` with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidStepCount` unless `maturity_days` is a
    /// whole number in [1, 10_000], and `ConfigError::MatrixTooLarge` when
    /// `steps × n_paths` exceeds [`MAX_CELLS`].
    pub fn new(params: MarketParameters, config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let days = params.maturity_days();
        if days.fract() != 0.0 || days < 1.0 || days > MAX_STEPS as f64 {
            return Err(ConfigError::InvalidStepCount(days));
        }

        let steps = days as usize;
        let n_paths = config.n_paths();
        if steps.saturating_mul(n_paths) > MAX_CELLS {
            return Err(ConfigError::MatrixTooLarge {
                rows: steps,
                paths: n_paths,
            });
        }
        let dt = params.expiry() / steps as f64;
        let step = GbmStep::new(params.rate(), params.volatility(), dt);

        Ok(Self {
            params,
            config,
            steps,
            dt,
            step,
        })
    }

    /// Returns the market parameters.
    #[inline]
    pub fn params(&self) -> &MarketParameters {
        &self.params
    }

    /// Returns the simulation configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Number of time steps (matrix rows).
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Step length in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Time in years of the terminal row, `(steps - 1) × dt`.
    #[inline]
    pub fn horizon(&self) -> f64 {
        (self.steps - 1) as f64 * self.dt
    }

    /// Simulates `steps × n_paths` GBM prices.
    ///
    /// Each call starts a fresh generator from the configured seed, so
    /// repeated calls and separate instances with equal inputs return
    /// identical matrices.
    #[instrument(
        level = "debug",
        skip(self),
        fields(n_paths = self.config.n_paths(), steps = self.steps, seed = self.config.seed())
    )]
    pub fn simulate_prices(&self) -> PriceMatrix {
        let mut rng = PricerRng::from_seed(self.config.seed());
        let matrix = simulate_gbm(
            self.params.spot(),
            self.steps,
            self.config.n_paths(),
            self.step,
            self.config.antithetic(),
            &mut rng,
        );
        debug!(rows = matrix.rows(), "simulation complete");
        matrix
    }

    /// Estimates the option price from the terminal row of `matrix`.
    ///
    /// Takes the payoff of every terminal price, averages and discounts by
    /// `exp(-rT)`. With antithetic sampling each mirrored pair is averaged
    /// first, so the standard error reflects independent samples only.
    ///
    /// # Errors
    ///
    /// `McError::ShapeMismatch` if `matrix` was not produced with this
    /// pricer's step and path counts.
    pub fn price(
        &self,
        matrix: &PriceMatrix,
        option_type: OptionType,
    ) -> Result<PricingResult, McError> {
        self.check_shape(matrix)?;

        let strike = self.params.strike();
        let payoffs: Vec<f64> = matrix
            .terminal()
            .iter()
            .map(|&spot| option_type.payoff(spot, strike))
            .collect();

        let samples = if self.config.antithetic() {
            let (base, mirror) = payoffs.split_at(payoffs.len() / 2);
            base.iter()
                .zip(mirror)
                .map(|(a, b)| 0.5 * (a + b))
                .collect()
        } else {
            payoffs
        };

        let (mean, std_error) = mean_and_std_error(&samples);
        let discount = self.params.discount_factor();
        let result = PricingResult {
            price: mean * discount,
            std_error: std_error * discount,
        };

        debug!(
            %option_type,
            price = result.price,
            std_error = result.std_error,
            "monte carlo estimate"
        );
        Ok(result)
    }

    /// Prices from a matrix that may not have been simulated yet.
    ///
    /// # Errors
    ///
    /// `McError::NotSimulated` when `matrix` is `None`, otherwise as
    /// [`price`](Self::price).
    pub fn price_from(
        &self,
        matrix: Option<&PriceMatrix>,
        option_type: OptionType,
    ) -> Result<PricingResult, McError> {
        let matrix = matrix.ok_or(McError::NotSimulated)?;
        self.price(matrix, option_type)
    }

    /// Call price estimate from `matrix`.
    pub fn calculate_call_option_price(&self, matrix: &PriceMatrix) -> Result<f64, McError> {
        self.price(matrix, OptionType::Call).map(|r| r.price)
    }

    /// Put price estimate from `matrix`.
    pub fn calculate_put_option_price(&self, matrix: &PriceMatrix) -> Result<f64, McError> {
        self.price(matrix, OptionType::Put).map(|r| r.price)
    }

    fn check_shape(&self, matrix: &PriceMatrix) -> Result<(), McError> {
        let expected = (self.steps, self.config.n_paths());
        if matrix.shape() != expected {
            return Err(McError::ShapeMismatch {
                expected_rows: expected.0,
                expected_cols: expected.1,
                rows: matrix.rows(),
                cols: matrix.n_paths(),
            });
        }
        Ok(())
    }
}

/// Sample mean and standard error of the mean (n - 1 denominator).
fn mean_and_std_error(samples: &[f64]) -> (f64, f64) {
    let n = samples.len();
    if n == 0 {
        return (0.0, 0.0);
    }
    let mean = samples.iter().sum::<f64>() / n as f64;
    if n < 2 {
        return (mean, 0.0);
    }
    let variance = samples.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    (mean, (variance / n as f64).sqrt())
}
