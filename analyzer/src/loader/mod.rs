//! Readers for the trace files.
//!
//! Malformed rows are dropped without a trace; only file level failures are
//! reported, and it is up to the caller to decide whether they are fatal.

mod cwnd;
mod losses;
mod series;

pub use cwnd::load_window_samples;
pub use losses::load_loss_events;
pub use series::load_generic_series;

use csv::{ReaderBuilder, StringRecord, Trim};

/// Records after the header line. Rows may have any number of fields; blank
/// lines and undecodable rows are skipped.
fn csv_records(content: &str) -> impl Iterator<Item = StringRecord> + '_ {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes())
        .into_records()
        .filter_map(Result::ok)
}

