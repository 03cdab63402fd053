//! Geometric Brownian motion path simulation.
//!
//! Paths follow the exact log-normal transition of risk-neutral GBM:
//!
//! ```text
//! S(t+dt) = S(t) × exp((r - σ²/2)dt + σ√dt × Z),   Z ~ N(0, 1)
//! ```
//!
//! # Memory Layout
//!
//! A [`PriceMatrix`] is stored row-major with one row per time step and one
//! column per path: `data[step * n_paths + path]`. Row 0 holds the spot.

use rayon::prelude::*;

use crate::rng::PricerRng;

/// Axis label for the horizontal (time) axis of a path chart.
pub const TIME_AXIS_LABEL: &str = "time step";

/// Axis label for the vertical (price) axis of a path chart.
pub const PRICE_AXIS_LABEL: &str = "simulated price";

/// Per-step GBM increment constants.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::GbmStep;
///
/// let step = GbmStep::new(0.05, 0.2, 1.0 / 365.0);
/// // A zero shock moves the price by the drift only
/// assert!((step.factor(0.0) - step.drift_dt().exp()).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmStep {
    drift_dt: f64,
    vol_sqrt_dt: f64,
}

impl GbmStep {
    /// Precomputes `(r - σ²/2)dt` and `σ√dt`.
    #[inline]
    pub fn new(rate: f64, volatility: f64, dt: f64) -> Self {
        Self {
            drift_dt: (rate - 0.5 * volatility * volatility) * dt,
            vol_sqrt_dt: volatility * dt.sqrt(),
        }
    }

    /// Returns the log drift per step, `(r - σ²/2)dt`.
    #[inline]
    pub fn drift_dt(&self) -> f64 {
        self.drift_dt
    }

    /// Returns the log diffusion scale per step, `σ√dt`.
    #[inline]
    pub fn vol_sqrt_dt(&self) -> f64 {
        self.vol_sqrt_dt
    }

    /// Multiplicative price factor for the standard normal shock `z`.
    #[inline]
    pub fn factor(&self, z: f64) -> f64 {
        (self.drift_dt + self.vol_sqrt_dt * z).exp()
    }
}

/// Simulated price paths: `rows` time steps × `n_paths` columns.
///
/// Only produced by simulation, so it always has at least one row and one
/// column.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceMatrix {
    rows: usize,
    n_paths: usize,
    data: Vec<f64>,
}

impl PriceMatrix {
    /// Number of time steps (rows), including the initial spot row.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of simulated paths (columns).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns `(rows, n_paths)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.n_paths)
    }

    /// Prices of every path at time step `step`, or `None` past the last row.
    pub fn row(&self, step: usize) -> Option<&[f64]> {
        let start = step.checked_mul(self.n_paths)?;
        let end = start.checked_add(self.n_paths)?;
        self.data.get(start..end)
    }

    /// Prices of every path at the last simulated step.
    pub fn terminal(&self) -> &[f64] {
        &self.data[(self.rows - 1) * self.n_paths..]
    }

    /// One path through time, or `None` if `path` is out of range.
    pub fn path(&self, path: usize) -> Option<Vec<f64>> {
        if path >= self.n_paths {
            return None;
        }
        Some(
            self.data
                .iter()
                .skip(path)
                .step_by(self.n_paths)
                .copied()
                .collect(),
        )
    }

    /// The first `k` paths as time series; `k` is clamped to `n_paths`.
    pub fn leading_paths(&self, k: usize) -> Vec<Vec<f64>> {
        (0..k.min(self.n_paths))
            .filter_map(|j| self.path(j))
            .collect()
    }

    /// Raw row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// Data handed to an external renderer for a path chart.
///
/// Holds the leading path series, a horizontal reference line at the
/// strike and the axis labels. Rendering is left to the caller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathChart {
    /// One series per plotted path, each `n_steps` long.
    pub series: Vec<Vec<f64>>,
    /// Strike level drawn as a horizontal line.
    pub strike: f64,
    /// Horizontal axis label.
    pub x_label: &'static str,
    /// Vertical axis label.
    pub y_label: &'static str,
}

impl PathChart {
    /// Builds a chart from the first `k` paths of `matrix`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_core::market_data::MarketParameters;
    /// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer, PathChart};
    ///
    /// let params = MarketParameters::new(100.0, 105.0, 30.0, 0.01, 0.2).unwrap();
    /// let config = MonteCarloConfig::builder().n_paths(200).build().unwrap();
    /// let pricer = MonteCarloPricer::new(params, config).unwrap();
    /// let matrix = pricer.simulate_prices();
    ///
    /// let chart = PathChart::from_matrix(&matrix, 10, params.strike());
    /// assert_eq!(chart.series.len(), 10);
    /// assert_eq!(chart.n_steps(), 30);
    /// assert_eq!(chart.x_label, "time step");
    /// ```
    pub fn from_matrix(matrix: &PriceMatrix, k: usize, strike: f64) -> Self {
        Self {
            series: matrix.leading_paths(k),
            strike,
            x_label: TIME_AXIS_LABEL,
            y_label: PRICE_AXIS_LABEL,
        }
    }

    /// Length of each series.
    pub fn n_steps(&self) -> usize {
        self.series.first().map_or(0, Vec::len)
    }
}

/// Simulates `n_paths` GBM paths over `rows` time steps.
///
/// Normal draws for a row are taken sequentially from `rng`; the row update
/// itself runs in parallel across paths. With `antithetic`, path `j` and
/// path `j + n_paths/2` share the same draw with opposite sign.
///
/// Callers guarantee `rows >= 1`, `n_paths >= 1`, and an even `n_paths`
/// when `antithetic` is set.
pub(crate) fn simulate_gbm(
    spot: f64,
    rows: usize,
    n_paths: usize,
    step: GbmStep,
    antithetic: bool,
    rng: &mut PricerRng,
) -> PriceMatrix {
    let mut data = vec![spot; rows * n_paths];
    let independent = if antithetic { n_paths / 2 } else { n_paths };
    let mut draws = vec![0.0; n_paths];

    for t in 1..rows {
        rng.fill_normal(&mut draws[..independent]);
        if antithetic {
            let (base, mirror) = draws.split_at_mut(independent);
            for (m, &z) in mirror.iter_mut().zip(base.iter()) {
                *m = -z;
            }
        }

        let (done, rest) = data.split_at_mut(t * n_paths);
        let previous = &done[(t - 1) * n_paths..];
        rest[..n_paths]
            .par_iter_mut()
            .zip(previous.par_iter())
            .zip(draws.par_iter())
            .for_each(|((price, &prev), &z)| *price = prev * step.factor(z));
    }

    PriceMatrix {
        rows,
        n_paths,
        data,
    }
}
