use crate::{data_source::DataSource, report::AnalysisReport, summary::SummaryStats};
use human_repr::HumanCount;

const STATS_HEADER: &str = "CONGESTION WINDOW STATISTICS";
const SERIES_STATS_HEADER: &str = "TIME SERIES STATISTICS";

impl SummaryStats {
    /// Lines shared by the console report and the in-chart statistics panel.
    pub fn stats_lines(&self, source: DataSource) -> Vec<String> {
        if source == DataSource::Generic {
            return self.series_stats_lines();
        }

        vec![
            STATS_HEADER.to_owned(),
            "=".repeat(30),
            format!("Max window:        {:.1} packets", self.max_value),
            format!("Mean window:       {:.1} packets", self.mean_value),
            format!("Std deviation:     {:.1} packets", self.std_dev_value),
            format!("Total losses:      {}", self.total_losses),
            format!("Loss events:       {}", self.reduction_events),
            format!("Loss rate:         {:.1}‰", self.loss_rate_per_mille),
            format!("Slow start steps:  {}", self.fast_growth_steps),
            format!("Cong. avoid steps: {}", self.linear_growth_steps),
            format!("Efficiency:        {:.1}%", self.efficiency_percent),
            format!("Total duration:    {:.1}s", self.total_time_secs),
            format!("Data points:       {}", self.data_points),
        ]
    }

    fn series_stats_lines(&self) -> Vec<String> {
        vec![
            SERIES_STATS_HEADER.to_owned(),
            "=".repeat(30),
            format!("Max value:         {:.3}", self.max_value),
            format!("Min value:         {:.3}", self.min_value),
            format!("Mean value:        {:.3}", self.mean_value),
            format!("Std deviation:     {:.3}", self.std_dev_value),
            format!("Rising steps:      {}", self.fast_growth_steps),
            format!("Unit steps:        {}", self.linear_growth_steps),
            format!("Falling steps:     {}", self.reduction_events),
            format!("Total duration:    {:.1}s", self.total_time_secs),
            format!("Data points:       {}", self.data_points),
        ]
    }
}

impl AnalysisReport {
    pub fn subtext(&self) -> String {
        let Some(summary) = &self.summary else {
            return format!("{} Data  •  No Samples", self.source);
        };

        if self.source == DataSource::Generic {
            return format!(
                "{} Data  •  {} Samples  •  {:.1}s\nMax: {:.3}  •  Min: {:.3}  •  Avg: {:.3}  •  Std Dev: {:.3}",
                self.source,
                summary.data_points.human_count_bare(),
                summary.total_time_secs,
                summary.max_value,
                summary.min_value,
                summary.mean_value,
                summary.std_dev_value,
            );
        }

        let data_text = format!(
            "{} Data  •  {} Samples  •  {} Losses  •  {:.1}s",
            self.source,
            summary.data_points.human_count_bare(),
            summary.total_losses,
            summary.total_time_secs,
        );
        let stats_text = format!(
            "Max: {:.1}  •  Min: {:.1}  •  Avg: {:.1}  •  Std Dev: {:.1}  •  Efficiency: {:.1}%  •  Loss Rate: {:.1}‰",
            summary.max_value,
            summary.min_value,
            summary.mean_value,
            summary.std_dev_value,
            summary.efficiency_percent,
            summary.loss_rate_per_mille,
        );

        format!("{data_text}\n{stats_text}")
    }
}
