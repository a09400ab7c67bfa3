use super::{axis_range, bold_font, draw_placeholder, font, headroom};
use crate::error::ReportError;
use crate::plotting::chart_kind::ChartKind;
use crate::plotting::style::{hex_to_rgb, ChartStyle};
use crate::report::AnalysisReport;
use plotters::prelude::*;
use std::path::Path;

/// Single line chart with point markers for a generic time/value file.
pub fn render_series_chart(
    report: &AnalysisReport,
    style: &ChartStyle,
    path: &Path,
) -> Result<(), ReportError> {
    let root =
        BitMapBackend::new(path, (style.trend_width, style.trend_height / 2)).into_drawing_area();
    root.fill(&WHITE)?;

    let title = report.title(ChartKind::Series);
    let (Some(summary), Some((t_min, t_max))) = (&report.summary, report.samples.time_range())
    else {
        draw_placeholder(&root, &title, "No data", style)?;
        root.present()?;
        return Ok(());
    };

    let color = hex_to_rgb(&style.window_color)?;
    let y_lo = summary.min_value.min(0.0);
    let y_hi = headroom(summary.max_value).max(y_lo + 1.0);
    let mut chart = ChartBuilder::on(&root)
        .caption(&title, bold_font(style, style.title_font_size))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(axis_range(t_min, t_max), y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Value")
        .axis_desc_style(font(style, style.label_font_size))
        .label_style(font(style, style.font_size))
        .draw()?;

    chart.draw_series(
        LineSeries::new(report.samples.as_plot_points(), color.stroke_width(2)).point_size(4),
    )?;

    root.present()?;
    Ok(())
}
