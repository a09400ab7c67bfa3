mod error;
mod plotting;
mod prints;
mod types;
pub mod utils;

pub use error::ReportError;
pub use plotting::chart_kind::ChartKind;
pub use plotting::raster;
pub use plotting::style::ChartStyle;
pub use types::*;

use charming::{element::Symbol, Chart};
use plotting::chart::AnalysisChart;
use report::AnalysisReport;

/// Builds the interactive congestion window chart: the window trace and the loss markers.
pub fn create_congestion_chart(report: &AnalysisReport, style: &ChartStyle) -> Chart {
    let title = report.title(ChartKind::Congestion);
    let mut chart = AnalysisChart::new(&title, &report.subtext(), style.dark_html)
        .with_time_x_axis()
        .with_y_axis("Congestion Window [packets]")
        .add_time_series(
            "Congestion Window (cwnd)",
            report.samples.as_charming_points(),
            Some(style.window_color.as_str()),
            0.8,
        );

    if !report.loss_markers.is_empty() {
        chart = chart.add_scatter_series(
            &format!("Packet Losses ({})", report.loss_events.len()),
            report
                .loss_markers
                .iter()
                .map(|m| vec![m.time_s, m.value])
                .collect(),
            Symbol::Circle,
            &style.loss_color,
        );
    }

    chart.inner
}

/// Builds the interactive trend chart: the window trace, the polynomial fit and the moving average.
pub fn create_trend_chart(report: &AnalysisReport, style: &ChartStyle) -> Chart {
    let title = report.title(ChartKind::Trend);
    let mut chart = AnalysisChart::new(&title, &report.subtext(), style.dark_html)
        .with_time_x_axis()
        .with_y_axis("Congestion Window [packets]")
        .add_time_series(
            "Measured Window",
            report.samples.as_charming_points(),
            Some(style.window_color.as_str()),
            0.5,
        );

    if let Some(polynomial) = &report.trend.polynomial {
        chart = chart.add_time_series(
            &format!("Trend (poly deg {})", report.trend.polynomial_degree),
            polynomial.as_charming_points(),
            Some(style.trend_color.as_str()),
            1.0,
        );
    }

    if let Some(moving_average) = &report.trend.moving_average {
        chart = chart.add_time_series(
            &format!("Moving Average (n={})", report.trend.moving_average_window),
            moving_average.as_charming_points(),
            Some(style.moving_average_color.as_str()),
            1.0,
        );
    }

    if !report.loss_markers.is_empty() {
        chart = chart.add_scatter_series(
            "Losses",
            report
                .loss_markers
                .iter()
                .map(|m| vec![m.time_s, m.value])
                .collect(),
            Symbol::Circle,
            &style.loss_color,
        );
    }

    chart.inner
}

/// Builds the interactive chart for a generic time/value series.
pub fn create_series_chart(report: &AnalysisReport, style: &ChartStyle) -> Chart {
    let title = report.title(ChartKind::Series);
    AnalysisChart::new(&title, &report.subtext(), style.dark_html)
        .with_time_x_axis()
        .with_y_axis("Value")
        .add_time_series(
            "Value",
            report.samples.as_charming_points(),
            Some(style.window_color.as_str()),
            1.0,
        )
        .inner
}
