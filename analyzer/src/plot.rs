use crate::configs::analyzer::OutputConfig;
use crate::error::AnalyzerError;
use charming::theme::Theme;
use charming::{Chart, HtmlRenderer};
use cwnd_report::report::AnalysisReport;
use cwnd_report::{raster, ChartKind, ChartStyle, ReportError};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;
use tracing::{info, warn};

type HtmlChartBuilder = fn(&AnalysisReport, &ChartStyle) -> Chart;
type RasterRenderer = fn(&AnalysisReport, &ChartStyle, &Path) -> Result<(), ReportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartType {
    Congestion,
    Trend,
    Series,
}

impl ChartType {
    fn kind(&self) -> ChartKind {
        match self {
            ChartType::Congestion => ChartKind::Congestion,
            ChartType::Trend => ChartKind::Trend,
            ChartType::Series => ChartKind::Series,
        }
    }

    fn file_stem<'a>(&self, output: &'a OutputConfig) -> &'a str {
        match self {
            ChartType::Congestion => &output.congestion_chart,
            ChartType::Trend => &output.trend_chart,
            ChartType::Series => &output.series_chart,
        }
    }

    fn dimensions(&self, style: &ChartStyle) -> (u32, u32) {
        match self {
            ChartType::Congestion => (style.width, style.height),
            ChartType::Trend => (style.trend_width, style.trend_height),
            ChartType::Series => (style.trend_width, style.trend_height / 2),
        }
    }

    fn create_chart(&self) -> HtmlChartBuilder {
        match self {
            ChartType::Congestion => cwnd_report::create_congestion_chart,
            ChartType::Trend => cwnd_report::create_trend_chart,
            ChartType::Series => cwnd_report::create_series_chart,
        }
    }

    fn render_raster(&self) -> RasterRenderer {
        match self {
            ChartType::Congestion => raster::render_congestion_chart,
            ChartType::Trend => raster::render_trend_chart,
            ChartType::Series => raster::render_series_chart,
        }
    }
}

/// Writes the PNG figure and, when enabled, the interactive HTML chart.
/// Returns the paths of the written files.
pub fn plot_chart(
    report: &AnalysisReport,
    output: &OutputConfig,
    style: &ChartStyle,
    chart_type: ChartType,
) -> Result<Vec<PathBuf>, AnalyzerError> {
    std::fs::create_dir_all(&output.directory)?;
    let stem = chart_type.file_stem(output);
    let mut written = Vec::with_capacity(2);

    let render_start = Instant::now();
    let png_path = output.directory.join(format!("{stem}.png"));
    (chart_type.render_raster())(report, style, &png_path)?;
    let render_time = render_start.elapsed();
    written.push(png_path.clone());

    let mut html_time = None;
    if output.html {
        let html_start = Instant::now();
        let chart = (chart_type.create_chart())(report, style);
        let html_path = output.directory.join(format!("{stem}.html"));
        let (width, height) = chart_type.dimensions(style);
        save_chart(&chart, &chart_type.kind().to_string(), &html_path, width, height, style.dark_html)?;
        html_time = Some(html_start.elapsed());
        written.push(html_path);
    }

    info!(
        "Generated {} chart at: {} ({} samples, raster render: {:.2?}, html render: {:.2?})",
        chart_type.kind(),
        png_path.display(),
        report.samples.len(),
        render_time,
        html_time.unwrap_or_default()
    );
    Ok(written)
}

fn save_chart(
    chart: &Chart,
    title: &str,
    path: &Path,
    width: u32,
    height: u32,
    dark: bool,
) -> Result<(), ReportError> {
    let theme = if dark { Theme::Dark } else { Theme::Default };
    let mut renderer = HtmlRenderer::new(title, width as u64, height as u64).theme(theme);
    renderer
        .save(chart, path)
        .map_err(|e| ReportError::Html(format!("Failed to save HTML chart: {e}")))
}

/// Interactive HTML charts when any were written, the PNG figures otherwise.
fn charts_to_open(paths: &[PathBuf]) -> Vec<&PathBuf> {
    let with_extension = |extension: &str| -> Vec<&PathBuf> {
        paths
            .iter()
            .filter(|p| p.extension().is_some_and(|ext| ext == extension))
            .collect()
    };

    let html = with_extension("html");
    if html.is_empty() {
        with_extension("png")
    } else {
        html
    }
}

/// Opens the charts with the platform opener. Failures are only logged.
pub fn open_charts(paths: &[PathBuf]) {
    let opener = if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    };

    for path in charts_to_open(paths) {
        match Command::new(opener).arg(path).spawn() {
            Ok(_) => info!("Opened {} with {opener}", path.display()),
            Err(e) => warn!("Cannot open {} with {opener}: {e}", path.display()),
        }
    }
}
