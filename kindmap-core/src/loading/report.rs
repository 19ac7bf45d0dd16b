use std::fmt;

use serde::Serialize;

/// Rows kept and dropped by one bulk load.
///
/// Dropping never aborts a load; this only tells the caller how complete
/// the feed coverage was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub stations_loaded: usize,
    /// Station rows repeating an already registered code
    pub duplicate_stations: usize,

    pub order_rows_kept: usize,
    pub unknown_order_rows: usize,
    /// Repeated `(station, line)` rows; the later ordinal replaced the earlier
    pub duplicate_order_rows: usize,

    pub topology_rows_kept: usize,
    pub unknown_topology_rows: usize,
    /// Neighbour codes that did not resolve to a station
    pub dropped_neighbours: usize,

    pub transfers_resolved: usize,
    pub unknown_transfer_origins: usize,
    /// Rows with no same-named station on the destination line
    pub unresolved_transfers: usize,

    pub congestion_rows_kept: usize,
    pub unknown_congestion_rows: usize,
    pub unknown_directions: usize,
}

impl LoadReport {
    /// Total rows skipped across all inputs
    pub fn dropped_rows(&self) -> usize {
        self.duplicate_stations
            + self.unknown_order_rows
            + self.unknown_topology_rows
            + self.unknown_transfer_origins
            + self.unresolved_transfers
            + self.unknown_congestion_rows
            + self.unknown_directions
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} stations, {} orders, {} topology rows, {} transfers, {} congestion rows ({} rows dropped)",
            self.stations_loaded,
            self.order_rows_kept,
            self.topology_rows_kept,
            self.transfers_resolved,
            self.congestion_rows_kept,
            self.dropped_rows()
        )
    }
}
