use crate::analytics::report_builder::AnalysisReportBuilder;
use crate::args::kind::AnalysisCommand;
use crate::configs::analyzer::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::loader::{load_generic_series, load_loss_events, load_window_samples};
use crate::plot::{open_charts, plot_chart, ChartType};
use crate::simulator::CongestionWindowSimulator;
use cwnd_report::data_source::DataSource;
use cwnd_report::loss_event::LossEvent;
use cwnd_report::report::AnalysisReport;
use cwnd_report::time_series::TimeSeries;
use std::path::PathBuf;
use tracing::{error, info, warn};

const CONGESTION_CHARTS: &[ChartType] = &[ChartType::Congestion, ChartType::Trend];
const SERIES_CHARTS: &[ChartType] = &[ChartType::Series];

pub struct AnalysisRunner {
    config: AnalyzerConfig,
    command: AnalysisCommand,
    identifier: String,
}

impl AnalysisRunner {
    pub fn new(config: AnalyzerConfig, command: AnalysisCommand, identifier: String) -> Self {
        Self {
            config,
            command,
            identifier,
        }
    }

    pub fn run(&self) -> Result<(), AnalyzerError> {
        let (report, charts) = match &self.command {
            AnalysisCommand::Cwnd(_) => (self.analyze_congestion_window(), CONGESTION_CHARTS),
            AnalysisCommand::Series(_) => (self.analyze_generic_series()?, SERIES_CHARTS),
        };
        info!("Analysis finished, printing summary");
        report.print_summary();

        self.save_outputs(&report, charts)
    }

    fn analyze_congestion_window(&self) -> AnalysisReport {
        let (source, samples) = self.load_or_simulate_samples();
        let loss_events = self.load_losses();
        AnalysisReportBuilder::build(
            source,
            samples,
            loss_events,
            &self.config.analysis,
            self.identifier.clone(),
        )
    }

    fn analyze_generic_series(&self) -> Result<AnalysisReport, AnalyzerError> {
        let input = &self.config.input;
        let samples = load_generic_series(&input.series_file, &input.skip_marker)
            .map_err(|e| {
                error!("Cannot read '{}': {e}", input.series_file.display());
                AnalyzerError::NoData(input.series_file.display().to_string())
            })?;

        if samples.is_empty() {
            error!(
                "No valid time/value rows found in '{}'",
                input.series_file.display()
            );
            return Err(AnalyzerError::NoData(
                input.series_file.display().to_string(),
            ));
        }

        Ok(AnalysisReportBuilder::build(
            DataSource::Generic,
            samples,
            Vec::new(),
            &self.config.analysis,
            self.identifier.clone(),
        ))
    }

    /// Falls back to the simulator when the trace is missing, unreadable or empty.
    fn load_or_simulate_samples(&self) -> (DataSource, TimeSeries) {
        let path = &self.config.input.cwnd_file;
        match load_window_samples(path) {
            Ok(samples) if !samples.is_empty() => {
                info!(
                    "Loaded {} window samples from '{}'",
                    samples.len(),
                    path.display()
                );
                return (DataSource::Measured, samples);
            }
            Ok(_) => warn!(
                "No valid rows in '{}', using simulated data",
                path.display()
            ),
            Err(e) => warn!(
                "Cannot read '{}' ({e}), using simulated data",
                path.display()
            ),
        }

        let seed = self.config.simulator.seed.unwrap_or_else(rand::random);
        info!("Simulating congestion window trace with seed {seed}");
        let samples = CongestionWindowSimulator::new(self.config.simulator.clone(), seed).generate();
        (DataSource::Simulated, samples)
    }

    fn load_losses(&self) -> Vec<LossEvent> {
        let path = &self.config.input.loss_file;
        match load_loss_events(path) {
            Ok(losses) => {
                info!("Loaded {} loss events from '{}'", losses.len(), path.display());
                losses
            }
            Err(e) => {
                warn!("Cannot read '{}' ({e}), assuming no losses", path.display());
                Vec::new()
            }
        }
    }

    fn save_outputs(
        &self,
        report: &AnalysisReport,
        charts: &[ChartType],
    ) -> Result<(), AnalyzerError> {
        let output = &self.config.output;
        if output.json_report {
            let path = report.dump_to_json(&output.directory)?;
            info!("Report written to: {}", path.display());
        }

        let mut written: Vec<PathBuf> = Vec::new();
        for chart in charts {
            let paths = plot_chart(report, output, &self.config.chart, *chart).map_err(|e| {
                error!("Failed to generate {chart:?} chart: {e}");
                e
            })?;
            written.extend(paths);
        }

        if output.open_charts {
            open_charts(&written);
        }
        Ok(())
    }
}
