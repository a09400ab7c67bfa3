pub mod data_source;
pub mod histogram;
pub mod loss_event;
pub mod report;
pub mod summary;
pub mod time_series;
pub mod trend;
