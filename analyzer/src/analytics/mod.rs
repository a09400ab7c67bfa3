pub mod metrics;
pub mod report_builder;
pub mod time_series;
