use colored::{Color, ColoredString, Colorize};
use tracing::info;

use crate::{data_source::DataSource, report::AnalysisReport, summary::SummaryStats};

impl AnalysisReport {
    pub fn print_summary(&self) {
        let Some(summary) = &self.summary else {
            info!("{}", "No samples to summarize".yellow());
            return;
        };

        println!();
        let source_print = match self.source {
            DataSource::Generic => format!(
                "Source: {} data, {} samples",
                self.source, summary.data_points
            ),
            _ => format!(
                "Source: {} data, {} samples, {} loss events",
                self.source,
                summary.data_points,
                self.loss_events.len()
            ),
        }
        .blue();
        info!("{}", source_print);

        println!("{}", summary.formatted_string(self.source));
        println!();
    }
}

impl SummaryStats {
    pub fn formatted_string(&self, source: DataSource) -> ColoredString {
        let color = match source {
            DataSource::Measured => Color::Green,
            DataSource::Simulated => Color::Yellow,
            DataSource::Generic => Color::Cyan,
        };

        self.stats_lines(source)
            .iter()
            .map(|line| format!("   {line}"))
            .collect::<Vec<_>>()
            .join("\n")
            .color(color)
    }
}
