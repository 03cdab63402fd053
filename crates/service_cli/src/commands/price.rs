//! Price command implementation
//!
//! Prices the scenario's call and put with all three models and prints
//! the results as a table or JSON.

use pricer_core::market_data::MarketParameters;
use pricer_core::types::OptionType;
use pricer_models::analytical::{AnalyticalPricer, Greeks};
use pricer_models::lattice::BinomialPricer;
use pricer_pricing::mc::{ConfigError, MonteCarloPricer, PricingResult};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Scenario;
use crate::Result;

/// Output format for the price command
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Analytical price and Greeks for one option type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticalRow {
    pub option_type: OptionType,
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

impl AnalyticalRow {
    fn new(option_type: OptionType, greeks: Greeks) -> Self {
        Self {
            option_type,
            price: greeks.price,
            delta: greeks.delta,
            gamma: greeks.gamma,
            vega: greeks.vega,
            theta: greeks.theta,
            rho: greeks.rho,
        }
    }
}

/// Binomial lattice prices
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinomialSection {
    pub steps: usize,
    pub probability: f64,
    pub call: f64,
    pub put: f64,
}

/// Monte Carlo estimates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonteCarloSection {
    pub paths: usize,
    pub seed: u64,
    pub antithetic: bool,
    pub call: PricingResult,
    pub put: PricingResult,
}

/// Results of all three models for one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceReport {
    pub market: MarketParameters,
    pub analytical: Vec<AnalyticalRow>,
    pub binomial: BinomialSection,
    /// `None` when the maturity cannot be simulated in daily steps
    pub monte_carlo: Option<MonteCarloSection>,
    /// Why the Monte Carlo section is missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monte_carlo_unavailable: Option<String>,
}

/// Price the scenario with every model
pub fn build_report(scenario: &Scenario) -> Result<PriceReport> {
    let params = scenario.market;

    let bs = AnalyticalPricer::new(params);
    let analytical = OptionType::ALL
        .iter()
        .map(|&option_type| AnalyticalRow::new(option_type, bs.greeks(option_type)))
        .collect();

    let tree = BinomialPricer::new(params, scenario.models.binomial_steps)?;
    let binomial = BinomialSection {
        steps: tree.n_steps(),
        probability: tree.probability(),
        call: tree.call_price(),
        put: tree.put_price(),
    };

    let config = scenario.mc_config()?;
    let (monte_carlo, monte_carlo_unavailable) = match MonteCarloPricer::new(params, config) {
        Ok(mc) => {
            let matrix = mc.simulate_prices();
            let section = MonteCarloSection {
                paths: mc.config().n_paths(),
                seed: mc.config().seed(),
                antithetic: mc.config().antithetic(),
                call: mc.price(&matrix, OptionType::Call)?,
                put: mc.price(&matrix, OptionType::Put)?,
            };
            (Some(section), None)
        }
        // Fractional or out-of-range maturities still have closed-form and lattice prices
        Err(err @ ConfigError::InvalidStepCount(_)) => {
            warn!(error = %err, "Skipping Monte Carlo");
            (None, Some(err.to_string()))
        }
        Err(err) => return Err(err.into()),
    };

    Ok(PriceReport {
        market: params,
        analytical,
        binomial,
        monte_carlo,
        monte_carlo_unavailable,
    })
}

/// Render the report as a fixed-width table
pub fn render_table(report: &PriceReport) -> String {
    let m = &report.market;
    let mut lines = vec![
        format!(
            "S = {}  K = {}  days = {}  r = {}  vol = {}",
            m.spot(),
            m.strike(),
            m.maturity_days(),
            m.rate(),
            m.volatility()
        ),
        String::new(),
        format!(
            "{:<12} {:<5} {:>12} {:>10} {:>10} {:>10} {:>10} {:>10}",
            "model", "type", "price", "delta", "gamma", "vega", "theta", "rho"
        ),
    ];
    lines.extend(report.analytical.iter().map(|row| {
        format!(
            "{:<12} {:<5} {:>12.6} {:>10.6} {:>10.6} {:>10.6} {:>10.6} {:>10.6}",
            "analytical",
            row.option_type,
            row.price,
            row.delta,
            row.gamma,
            row.vega,
            row.theta,
            row.rho
        )
    }));

    let b = &report.binomial;
    lines.push(String::new());
    lines.push(format!(
        "{:<12} {:<5} {:>12} {:>12}",
        "model", "type", "price", "+/- 95%"
    ));
    for (option_type, price) in [(OptionType::Call, b.call), (OptionType::Put, b.put)] {
        lines.push(format!(
            "{:<12} {:<5} {:>12.6} {:>12}",
            format!("binomial/{}", b.steps),
            option_type,
            price,
            "-"
        ));
    }

    match (&report.monte_carlo, &report.monte_carlo_unavailable) {
        (Some(mc), _) => {
            for (option_type, result) in [(OptionType::Call, mc.call), (OptionType::Put, mc.put)] {
                lines.push(format!(
                    "{:<12} {:<5} {:>12.6} {:>12.6}",
                    "monte carlo",
                    option_type,
                    result.price,
                    result.confidence_95()
                ));
            }
        }
        (None, reason) => lines.push(format!(
            "{:<12} unavailable: {}",
            "monte carlo",
            reason.as_deref().unwrap_or("not simulated")
        )),
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Run the price command
pub fn run(scenario: &Scenario, format: OutputFormat) -> Result<()> {
    info!(
        binomial_steps = scenario.models.binomial_steps,
        mc_paths = scenario.models.mc_paths,
        "Starting pricing"
    );

    let report = build_report(scenario)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print!("{}", render_table(&report)),
    }

    info!("Pricing complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Overrides, ScenarioFile};
    use approx::assert_relative_eq;

    fn scenario() -> Scenario {
        let overrides = Overrides {
            spot: Some(100.0),
            strike: Some(105.0),
            maturity_days: Some(30.0),
            rate: Some(0.01),
            volatility: Some(0.2),
            ..Default::default()
        };
        Scenario::resolve(ScenarioFile::default(), &overrides).unwrap()
    }

    #[test]
    fn test_report_values() {
        let report = build_report(&scenario()).unwrap();

        assert_eq!(report.analytical.len(), 2);
        assert_eq!(report.analytical[0].option_type, OptionType::Call);
        assert_relative_eq!(report.analytical[0].price, 0.6614232754984464, epsilon = 1e-12);
        assert_relative_eq!(report.analytical[1].price, 5.575157362236993, epsilon = 1e-12);

        assert_eq!(report.binomial.steps, 500);
        assert!((report.binomial.call - report.analytical[0].price).abs() < 1e-2);

        let mc = report.monte_carlo.as_ref().unwrap();
        assert_eq!(mc.paths, 1000);
        assert_eq!(mc.seed, 42);
        assert!(mc.call.std_error > 0.0);
        assert!(report.monte_carlo_unavailable.is_none());
    }

    #[test]
    fn test_report_reproducible() {
        assert_eq!(
            build_report(&scenario()).unwrap(),
            build_report(&scenario()).unwrap()
        );
    }

    #[test]
    fn test_fractional_days_skip_monte_carlo_only() {
        let mut scenario = scenario();
        scenario.market = scenario.market.with_maturity_days(30.5).unwrap();
        let report = build_report(&scenario).unwrap();

        assert!(report.monte_carlo.is_none());
        assert!(report
            .monte_carlo_unavailable
            .as_deref()
            .unwrap()
            .contains("30.5 days"));
        assert!(report.analytical[0].price > 0.0);
        assert!(report.binomial.call > 0.0);

        let table = render_table(&report);
        assert!(table.contains("analytical   call"));
        assert!(table.contains("monte carlo  unavailable: Invalid maturity of 30.5 days"));

        let value = serde_json::to_value(&report).unwrap();
        assert!(value["monte_carlo"].is_null());
        assert!(value["monte_carlo_unavailable"].is_string());
    }

    #[test]
    fn test_invalid_mc_settings_still_fail() {
        let mut scenario = scenario();
        scenario.models.mc_paths = 1001;
        scenario.models.mc_antithetic = true;
        assert!(matches!(
            build_report(&scenario),
            Err(crate::CliError::Simulation(_))
        ));
    }

    #[test]
    fn test_table_layout() {
        let table = render_table(&build_report(&scenario()).unwrap());
        assert!(table.contains("analytical   call"));
        assert!(table.contains("binomial/500"));
        assert!(table.contains("monte carlo  put"));
        assert!(table.contains("0.661423"));
        assert!(table.ends_with('\n'));
        assert!(!table.contains("unavailable"));
    }

    #[test]
    fn test_json_shape() {
        let report = build_report(&scenario()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();

        assert_eq!(value["market"]["strike"], 105.0);
        assert_eq!(value["analytical"][1]["option_type"], "put");
        assert_eq!(value["binomial"]["steps"], 500);
        assert!(value["monte_carlo"]["call"]["std_error"].as_f64().unwrap() > 0.0);
        assert!(value.get("monte_carlo_unavailable").is_none());
    }
}
