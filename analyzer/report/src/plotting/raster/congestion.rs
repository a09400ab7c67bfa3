use super::{axis_range, bold_font, draw_placeholder, font, headroom};
use crate::error::ReportError;
use crate::plotting::chart_kind::ChartKind;
use crate::plotting::style::{hex_to_rgb, ChartStyle};
use crate::report::AnalysisReport;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const HISTOGRAM_TITLE: &str = "Window Distribution";

/// Main figure: window trace with loss markers and phase bands on top,
/// histogram and statistics panel below.
pub fn render_congestion_chart(
    report: &AnalysisReport,
    style: &ChartStyle,
    path: &Path,
) -> Result<(), ReportError> {
    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let (upper, lower) = root.split_vertically((style.height * 2 / 3) as i32);
    let (histogram_area, stats_area) = lower.split_horizontally((style.width / 2) as i32);

    draw_window_panel(&upper, report, style)?;
    draw_histogram_panel(&histogram_area, report, style)?;
    draw_stats_panel(&stats_area, report, style)?;

    root.present()?;
    Ok(())
}

fn draw_window_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    report: &AnalysisReport,
    style: &ChartStyle,
) -> Result<(), ReportError> {
    let title = report.title(ChartKind::Congestion);
    let (Some(summary), Some((t_min, t_max))) = (&report.summary, report.samples.time_range())
    else {
        return draw_placeholder(area, &title, "No data", style);
    };

    let window_color = hex_to_rgb(&style.window_color)?;
    let loss_color = hex_to_rgb(&style.loss_color)?;
    let slow_start_color = hex_to_rgb(&style.slow_start_color)?;
    let avoidance_color = hex_to_rgb(&style.congestion_avoidance_color)?;

    let y_top = headroom(summary.max_value).max(1.0);
    let mut chart = ChartBuilder::on(area)
        .caption(&title, bold_font(style, style.title_font_size))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(axis_range(t_min, t_max), 0f64..y_top)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Congestion Window (packets)")
        .axis_desc_style(bold_font(style, style.label_font_size))
        .label_style(font(style, style.font_size))
        .light_line_style(&BLACK.mix(0.05))
        .draw()?;

    if summary.max_value > 0.0 {
        let split = summary.phase_split_value;
        let band_opacity = style.band_opacity;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(t_min, 0.0), (t_max, split)],
                slow_start_color.mix(band_opacity).filled(),
            )))?
            .label("Slow Start")
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 20, y + 6)], slow_start_color.mix(0.4).filled())
            });
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(t_min, split), (t_max, summary.max_value)],
                avoidance_color.mix(band_opacity).filled(),
            )))?
            .label("Congestion Avoidance")
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 20, y + 6)], avoidance_color.mix(0.4).filled())
            });
    }

    chart
        .draw_series(LineSeries::new(
            report.samples.as_plot_points(),
            window_color.mix(0.8).stroke_width(3),
        ))?
        .label("Congestion Window (cwnd)")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], window_color.stroke_width(3))
        });

    if !report.loss_markers.is_empty() {
        chart
            .draw_series(
                report
                    .loss_markers
                    .iter()
                    .map(|m| Circle::new((m.time_s, m.value), 7, loss_color.filled())),
            )?
            .label(format!("Packet Losses ({})", report.loss_events.len()))
            .legend(move |(x, y)| Circle::new((x + 10, y), 6, loss_color.filled()));
        chart.draw_series(
            report
                .loss_markers
                .iter()
                .map(|m| Circle::new((m.time_s, m.value), 7, BLACK.stroke_width(1))),
        )?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.9))
        .border_style(&BLACK)
        .label_font(font(style, style.font_size))
        .draw()?;

    Ok(())
}

fn draw_histogram_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    report: &AnalysisReport,
    style: &ChartStyle,
) -> Result<(), ReportError> {
    let Some((lo, hi)) = report.histogram.range() else {
        return draw_placeholder(area, HISTOGRAM_TITLE, "No data", style);
    };

    let bar_color = hex_to_rgb(&style.histogram_color)?;
    let y_top = (report.histogram.max_count() as f64 * 1.1).max(1.0);
    let mut chart = ChartBuilder::on(area)
        .caption(HISTOGRAM_TITLE, bold_font(style, style.label_font_size))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(axis_range(lo, hi), 0f64..y_top)?;

    chart
        .configure_mesh()
        .x_desc("Congestion Window")
        .y_desc("Frequency")
        .axis_desc_style(bold_font(style, style.font_size))
        .label_style(font(style, style.font_size))
        .light_line_style(&BLACK.mix(0.05))
        .draw()?;

    chart.draw_series(report.histogram.bins.iter().map(|bin| {
        Rectangle::new(
            [(bin.start, 0.0), (bin.end, bin.count as f64)],
            bar_color.mix(0.7).filled(),
        )
    }))?;
    chart.draw_series(report.histogram.bins.iter().map(|bin| {
        Rectangle::new(
            [(bin.start, 0.0), (bin.end, bin.count as f64)],
            BLACK.stroke_width(1),
        )
    }))?;

    Ok(())
}

fn draw_stats_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    report: &AnalysisReport,
    style: &ChartStyle,
) -> Result<(), ReportError> {
    let lines = match &report.summary {
        Some(summary) => summary.stats_lines(report.source),
        None => vec![
            "No congestion window data available".to_owned(),
            "Using simulated data".to_owned(),
        ],
    };

    let box_color = hex_to_rgb(&style.stats_box_color)?;
    let (width, height) = area.dim_in_pixel();
    let line_height = (style.stats_font_size as f64 * 1.5).round() as i32;
    let box_bottom = (40 + line_height * lines.len() as i32).min(height as i32 - 10);
    let box_right = (width as i32 - 40).max(60);

    area.draw(&Rectangle::new(
        [(40, 20), (box_right, box_bottom)],
        box_color.mix(0.7).filled(),
    ))?;
    area.draw(&Rectangle::new(
        [(40, 20), (box_right, box_bottom)],
        BLACK.mix(0.4).stroke_width(1),
    ))?;

    let mono = FontDesc::new(
        FontFamily::Monospace,
        style.stats_font_size as f64,
        FontStyle::Normal,
    );
    for (i, line) in lines.iter().enumerate() {
        area.draw(&Text::new(
            line.as_str(),
            (56, 32 + i as i32 * line_height),
            mono.clone(),
        ))?;
    }

    Ok(())
}
