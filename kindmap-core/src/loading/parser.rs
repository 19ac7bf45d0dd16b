use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;

use super::config::ModelConfig;
use super::raw_types::{FacilityRecord, FacilityRow, NetworkSnapshot};
use crate::Error;

fn open(path: &Path) -> Result<BufReader<File>, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    Ok(BufReader::new(file))
}

/// Reads a [`NetworkSnapshot`] from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a valid snapshot
pub fn read_snapshot(path: &Path) -> Result<NetworkSnapshot, Error> {
    let snapshot: NetworkSnapshot = serde_json::from_reader(open(path)?)?;
    debug!(
        "Snapshot {}: {} stations, {} orders, {} topology rows, {} transfers, {} congestion rows",
        path.display(),
        snapshot.stations.len(),
        snapshot.station_order.len(),
        snapshot.line_topology.len(),
        snapshot.transfers.len(),
        snapshot.congestion.len()
    );
    Ok(snapshot)
}

/// Reads a [`ModelConfig`] from a JSON file; missing fields take defaults
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed
pub fn read_config(path: &Path) -> Result<ModelConfig, Error> {
    Ok(serde_json::from_reader(open(path)?)?)
}

/// Reads facility rows from a CSV file.
///
/// `station_cd_list` holds one or more codes separated by `|`. Records that
/// fail to deserialize are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or has no readable header
pub fn read_facility_rows(path: &Path) -> Result<Vec<FacilityRow>, Error> {
    let mut reader = csv::Reader::from_reader(open(path)?);
    reader.headers()?;

    let mut skipped = 0usize;
    let rows: Vec<FacilityRow> = reader
        .deserialize::<FacilityRecord>()
        .filter_map(|record| match record {
            Ok(record) => Some(record.into_row()),
            Err(e) => {
                debug!("Skipping facility record: {e}");
                skipped += 1;
                None
            }
        })
        .collect();

    debug!(
        "Read {} facility rows from {} ({skipped} skipped)",
        rows.len(),
        path.display()
    );
    Ok(rows)
}
