use influencer_core::{DashboardError, DashboardResult, TrackingRecord};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write tracking rows as CSV with a header row.
pub fn write_tracking<W: Write>(writer: W, records: &[TrackingRecord]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Export the (filtered) tracking table to `path`.
pub fn export_tracking(path: &Path, records: &[TrackingRecord]) -> DashboardResult<usize> {
    let file = std::fs::File::create(path)?;
    write_tracking(file, records).map_err(|e| DashboardError::csv(path, e))?;
    info!(path = %path.display(), rows = records.len(), "Tracking data exported");
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(influencer_id: u64, revenue: f64) -> TrackingRecord {
        TrackingRecord {
            influencer_id,
            source: "HKVitals".to_string(),
            product: "Fish Oil".to_string(),
            revenue,
            orders: 2,
        }
    }

    #[test]
    fn test_write_tracking_header_and_rows() {
        let mut buf = Vec::new();
        write_tracking(&mut buf, &[record(1, 499.5), record(2, 1200.0)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "influencer_id,source,product,revenue,orders");
        assert_eq!(lines[1], "1,HKVitals,Fish Oil,499.5,2");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_write_tracking_empty_has_no_rows() {
        let mut buf = Vec::new();
        write_tracking(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }
}
