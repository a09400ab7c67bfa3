pub mod chart;
pub mod chart_kind;
pub mod raster;
pub mod style;
pub mod text;
