use super::{axis_range, bold_font, draw_placeholder, font, headroom};
use crate::error::ReportError;
use crate::plotting::chart_kind::ChartKind;
use crate::plotting::style::{hex_to_rgb, ChartStyle};
use crate::report::AnalysisReport;
use crate::time_series::TimeSeries;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const MOVING_AVERAGE_TITLE: &str = "Moving Average";

/// Trend figure: polynomial fit over the window trace on top, moving average below.
pub fn render_trend_chart(
    report: &AnalysisReport,
    style: &ChartStyle,
    path: &Path,
) -> Result<(), ReportError> {
    let root =
        BitMapBackend::new(path, (style.trend_width, style.trend_height)).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly((2, 1));
    draw_trend_panel(&panels[0], report, style)?;
    draw_moving_average_panel(&panels[1], report, style)?;

    root.present()?;
    Ok(())
}

fn value_bounds<'a>(series: impl IntoIterator<Item = &'a TimeSeries>) -> (f64, f64) {
    series
        .into_iter()
        .flat_map(|s| s.values())
        .fold((0.0, 1.0), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

fn draw_trend_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    report: &AnalysisReport,
    style: &ChartStyle,
) -> Result<(), ReportError> {
    let title = report.title(ChartKind::Trend);
    let Some((t_min, t_max)) = report.samples.time_range() else {
        return draw_placeholder(area, &title, "No data", style);
    };

    let window_color = hex_to_rgb(&style.window_color)?;
    let trend_color = hex_to_rgb(&style.trend_color)?;
    let loss_color = hex_to_rgb(&style.loss_color)?;

    let (y_lo, y_hi) = value_bounds(
        std::iter::once(&report.samples).chain(report.trend.polynomial.as_ref()),
    );
    let mut chart = ChartBuilder::on(area)
        .caption(&title, bold_font(style, style.title_font_size))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(axis_range(t_min, t_max), y_lo..headroom(y_hi))?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Congestion Window")
        .axis_desc_style(font(style, style.label_font_size))
        .label_style(font(style, style.font_size))
        .light_line_style(&BLACK.mix(0.05))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            report.samples.as_plot_points(),
            window_color.mix(0.7).stroke_width(1),
        ))?
        .label("Measured Window")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], window_color.stroke_width(1))
        });

    if !report.loss_markers.is_empty() {
        chart
            .draw_series(
                report
                    .loss_markers
                    .iter()
                    .map(|m| Circle::new((m.time_s, m.value), 4, loss_color.filled())),
            )?
            .label("Losses")
            .legend(move |(x, y)| Circle::new((x + 10, y), 4, loss_color.filled()));
    }

    if let Some(polynomial) = &report.trend.polynomial {
        chart
            .draw_series(LineSeries::new(
                polynomial.as_plot_points(),
                trend_color.stroke_width(2),
            ))?
            .label(format!(
                "Trend (poly deg {})",
                report.trend.polynomial_degree
            ))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], trend_color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.9))
        .border_style(&BLACK)
        .label_font(font(style, style.font_size))
        .draw()?;

    Ok(())
}

fn draw_moving_average_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    report: &AnalysisReport,
    style: &ChartStyle,
) -> Result<(), ReportError> {
    let (Some(moving_average), Some((t_min, t_max))) = (
        report.trend.moving_average.as_ref(),
        report.samples.time_range(),
    ) else {
        return draw_placeholder(
            area,
            MOVING_AVERAGE_TITLE,
            "Insufficient data\nfor moving average",
            style,
        );
    };

    let window_color = hex_to_rgb(&style.window_color)?;
    let average_color = hex_to_rgb(&style.moving_average_color)?;

    let (y_lo, y_hi) = value_bounds([&report.samples, moving_average]);
    let mut chart = ChartBuilder::on(area)
        .caption(MOVING_AVERAGE_TITLE, bold_font(style, style.title_font_size))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(axis_range(t_min, t_max), y_lo..headroom(y_hi))?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Congestion Window")
        .axis_desc_style(font(style, style.label_font_size))
        .label_style(font(style, style.font_size))
        .light_line_style(&BLACK.mix(0.05))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            moving_average.as_plot_points(),
            average_color.stroke_width(2),
        ))?
        .label(format!(
            "Moving Average (n={})",
            report.trend.moving_average_window
        ))
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], average_color.stroke_width(2))
        });

    chart
        .draw_series(LineSeries::new(
            report.samples.as_plot_points(),
            window_color.mix(0.3).stroke_width(1),
        ))?
        .label("Measured Window")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], window_color.mix(0.3).stroke_width(1))
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.9))
        .border_style(&BLACK)
        .label_font(font(style, style.font_size))
        .draw()?;

    Ok(())
}
