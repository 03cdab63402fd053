//! Simulate command implementation
//!
//! Runs the Monte Carlo simulation and exports the leading paths as CSV so
//! an external charting tool can draw them against the strike.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use pricer_pricing::mc::{MonteCarloPricer, PathChart};
use tracing::info;

use crate::config::Scenario;
use crate::{CliError, Result};

/// Write `chart` as CSV: one row per time step, one column per path, plus
/// a constant strike column.
pub fn write_chart_csv<W: Write>(chart: &PathChart, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec![chart.x_label.to_string()];
    header.extend((0..chart.series.len()).map(|j| format!("path_{}", j)));
    header.push("strike".to_string());
    wtr.write_record(&header)?;

    for step in 0..chart.n_steps() {
        let mut record = vec![step.to_string()];
        record.extend(chart.series.iter().map(|path| path[step].to_string()));
        record.push(chart.strike.to_string());
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Run the simulate command
pub fn run(scenario: &Scenario, export: &Path, plot_paths: usize) -> Result<()> {
    if plot_paths == 0 {
        return Err(CliError::InvalidArgument(
            "--plot-paths must be at least 1".to_string(),
        ));
    }

    let pricer = MonteCarloPricer::new(scenario.market, scenario.mc_config()?)?;
    let matrix = pricer.simulate_prices();
    let chart = PathChart::from_matrix(&matrix, plot_paths, scenario.market.strike());

    info!(
        rows = matrix.rows(),
        paths = chart.series.len(),
        export = %export.display(),
        "Exporting simulated paths"
    );
    write_chart_csv(&chart, File::create(export)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Overrides, ScenarioFile};

    fn scenario() -> Scenario {
        let overrides = Overrides {
            spot: Some(100.0),
            strike: Some(105.0),
            maturity_days: Some(30.0),
            rate: Some(0.01),
            volatility: Some(0.2),
            mc_paths: Some(50),
            ..Default::default()
        };
        Scenario::resolve(ScenarioFile::default(), &overrides).unwrap()
    }

    #[test]
    fn test_csv_layout() {
        let chart = PathChart {
            series: vec![vec![100.0, 101.5], vec![100.0, 98.25]],
            strike: 105.0,
            x_label: "time step",
            y_label: "simulated price",
        };
        let mut buffer = Vec::new();
        write_chart_csv(&chart, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "time step,path_0,path_1,strike");
        assert_eq!(lines[1], "0,100,100,105");
        assert_eq!(lines[2], "1,101.5,98.25,105");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paths.csv");
        run(&scenario(), &path, 5).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // header + 30 daily rows
        assert_eq!(lines.len(), 31);
        assert_eq!(lines[0].split(',').count(), 7);
        assert!(lines[1].starts_with("0,100,100,100,100,100,"));
    }

    #[test]
    fn test_plot_paths_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paths.csv");
        run(&scenario(), &path, 500).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let header = text.lines().next().unwrap();
        // 50 simulated paths plus step and strike columns
        assert_eq!(header.split(',').count(), 52);
    }

    #[test]
    fn test_zero_plot_paths_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paths.csv");
        match run(&scenario(), &path, 0).unwrap_err() {
            CliError::InvalidArgument(message) => assert!(message.contains("--plot-paths")),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
        assert!(!path.exists());
    }
}
