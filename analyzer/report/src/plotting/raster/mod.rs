//! PNG renderings of an [`AnalysisReport`](crate::report::AnalysisReport).
//!
//! Every function draws into a fresh bitmap and writes it to `path` once all
//! panels are drawn. Panels that lack data show a centered placeholder message
//! instead of failing the whole figure.

mod congestion;
mod series;
mod trend;

pub use congestion::render_congestion_chart;
pub use series::render_series_chart;
pub use trend::render_trend_chart;

use crate::error::ReportError;
use crate::plotting::style::ChartStyle;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;

const PLACEHOLDER_LINE_HEIGHT: i32 = 24;

fn font(style: &ChartStyle, size: u32) -> FontDesc<'_> {
    FontDesc::new(
        FontFamily::Name(&style.font_family),
        size as f64,
        FontStyle::Normal,
    )
}

fn bold_font(style: &ChartStyle, size: u32) -> FontDesc<'_> {
    FontDesc::new(
        FontFamily::Name(&style.font_family),
        size as f64,
        FontStyle::Bold,
    )
}

/// Axis range which stays drawable when all values are equal.
fn axis_range(lo: f64, hi: f64) -> Range<f64> {
    if (hi - lo).abs() < f64::EPSILON {
        (lo - 0.5)..(hi + 0.5)
    } else {
        lo..hi
    }
}

/// Upper axis bound with 10% space above `value`, kept finite.
fn headroom(value: f64) -> f64 {
    (value * 1.1).min(f64::MAX)
}

fn draw_placeholder<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    message: &str,
    style: &ChartStyle,
) -> Result<(), ReportError> {
    let area = area.titled(title, bold_font(style, style.label_font_size))?;
    let (width, height) = area.dim_in_pixel();
    let text_style = font(style, style.label_font_size)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    let lines: Vec<&str> = message.lines().collect();
    let first_y = height as i32 / 2 - (lines.len() as i32 - 1) * PLACEHOLDER_LINE_HEIGHT / 2;
    for (i, line) in lines.iter().enumerate() {
        area.draw(&Text::new(
            *line,
            (
                width as i32 / 2,
                first_y + i as i32 * PLACEHOLDER_LINE_HEIGHT,
            ),
            text_style.clone(),
        ))?;
    }
    Ok(())
}
