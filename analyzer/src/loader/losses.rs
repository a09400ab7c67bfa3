use super::csv_records;
use csv::StringRecord;
use cwnd_report::loss_event::LossEvent;
use std::path::Path;
use tracing::debug;

/// Reads a `time_ms[,packet_size]` CSV file of packet losses.
pub fn load_loss_events(path: &Path) -> std::io::Result<Vec<LossEvent>> {
    let content = std::fs::read_to_string(path)?;
    let events = parse_loss_events(&content);
    debug!(
        "Parsed {} loss events from '{}'",
        events.len(),
        path.display()
    );
    Ok(events)
}

fn parse_loss_events(content: &str) -> Vec<LossEvent> {
    csv_records(content).filter_map(|r| parse_row(&r)).collect()
}

fn parse_row(record: &StringRecord) -> Option<LossEvent> {
    let time_ms = record.get(0)?.parse::<f64>().ok().filter(|t| t.is_finite())?;
    let packet_size = record.get(1).and_then(|size| size.parse::<u32>().ok());
    Some(LossEvent::new(time_ms, packet_size))
}
