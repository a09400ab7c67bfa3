use crate::error::ReportError;
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

/// Visual settings for every rendered chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub trend_width: u32,
    pub trend_height: u32,
    pub font_family: String,
    pub font_size: u32,
    pub label_font_size: u32,
    pub title_font_size: u32,
    pub stats_font_size: u32,
    pub window_color: String,
    pub loss_color: String,
    pub histogram_color: String,
    pub slow_start_color: String,
    pub congestion_avoidance_color: String,
    pub trend_color: String,
    pub moving_average_color: String,
    pub stats_box_color: String,
    pub band_opacity: f64,
    pub dark_html: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1200,
            trend_width: 1400,
            trend_height: 1000,
            font_family: "DejaVu Sans".to_owned(),
            font_size: 12,
            label_font_size: 14,
            title_font_size: 18,
            stats_font_size: 15,
            window_color: "#2E86AB".to_owned(),
            loss_color: "#A23B72".to_owned(),
            histogram_color: "#4CB5AE".to_owned(),
            slow_start_color: "#008000".to_owned(),
            congestion_avoidance_color: "#FFA500".to_owned(),
            trend_color: "#FF0000".to_owned(),
            moving_average_color: "#008000".to_owned(),
            stats_box_color: "#ADD8E6".to_owned(),
            band_opacity: 0.1,
            dark_html: false,
        }
    }
}

impl ChartStyle {
    /// Checks that every color is a `#RRGGBB` string.
    pub fn validate(&self) -> Result<(), ReportError> {
        for color in [
            &self.window_color,
            &self.loss_color,
            &self.histogram_color,
            &self.slow_start_color,
            &self.congestion_avoidance_color,
            &self.trend_color,
            &self.moving_average_color,
            &self.stats_box_color,
        ] {
            hex_to_rgb(color)?;
        }
        Ok(())
    }
}

pub fn hex_to_rgb(hex: &str) -> Result<RGBColor, ReportError> {
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.is_ascii())
        .ok_or_else(|| ReportError::InvalidColor(hex.to_owned()))?;
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ReportError::InvalidColor(hex.to_owned()))
    };
    Ok(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
