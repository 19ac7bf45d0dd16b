use std::path::Path;

use log::{info, warn};

use super::config::ModelConfig;
use super::parser::read_snapshot;
use super::raw_types::NetworkSnapshot;
use super::report::LoadReport;
use crate::Error;
use crate::model::{
    AccessibilityScorer, CongestionTable, LineOrderIndex, LineTable, LineTopologyIndex,
    StationRegistry, TransferResolver, TransitNetwork,
};

/// Builds the network model from a snapshot of feed rows.
///
/// Rows that cannot be used (unknown station codes, transfers without a
/// same-named station on the destination line, unparseable directions) are
/// dropped and counted in the returned [`LoadReport`]; they never fail the
/// load. Accessibility scores start at zero and are filled in later with
/// [`TransitNetwork::update_scores`].
///
/// # Errors
///
/// Returns an error if the configuration is invalid
pub fn build_network(
    snapshot: &NetworkSnapshot,
    config: &ModelConfig,
) -> Result<(TransitNetwork, LoadReport), Error> {
    validate_config(config)?;

    let mut report = LoadReport::default();
    let mut lines = LineTable::new();

    let registry = StationRegistry::load(&snapshot.stations, &mut lines, &mut report);
    info!(
        "Registered {} stations on {} lines",
        registry.len(),
        lines.len()
    );
    if report.duplicate_stations > 0 {
        warn!(
            "{} station rows repeated an existing code and were ignored",
            report.duplicate_stations
        );
    }

    let line_order =
        LineOrderIndex::load(&snapshot.station_order, &registry, &mut lines, &mut report);
    info!("Indexed {} station orders", report.order_rows_kept);

    let topology =
        LineTopologyIndex::load(&snapshot.line_topology, &registry, &mut lines, &mut report);
    info!("Indexed line topology for {} station-lines", topology.len());

    let transfers =
        TransferResolver::load(&snapshot.transfers, &registry, &mut lines, &mut report);
    info!("Resolved {} transfers between lines", transfers.len());
    if report.unresolved_transfers > 0 {
        warn!(
            "{} of {} transfer rows have no same-named station on the destination line",
            report.unresolved_transfers,
            snapshot.transfers.len()
        );
    }

    let congestion = CongestionTable::load(
        &snapshot.congestion,
        &registry,
        &mut lines,
        config.default_congestion,
        &mut report,
    );
    info!("Loaded {} congestion rows", report.congestion_rows_kept);

    let scorer = AccessibilityScorer::new(registry.len(), config.facility_weights);

    let dropped = report.dropped_rows();
    if dropped > 0 {
        warn!("{dropped} input rows were dropped while building the network");
    }
    info!("Transit network created: {report}");

    let network = TransitNetwork {
        registry,
        lines,
        line_order,
        topology,
        transfers,
        congestion,
        scorer,
    };
    Ok((network, report))
}

/// Reads a JSON snapshot from `path` and builds the network from it
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the
/// configuration is invalid
pub fn create_network_from_file(
    path: &Path,
    config: &ModelConfig,
) -> Result<(TransitNetwork, LoadReport), Error> {
    info!("Reading network snapshot: {}", path.display());
    let snapshot = read_snapshot(path)?;
    build_network(&snapshot, config)
}

fn validate_config(config: &ModelConfig) -> Result<(), Error> {
    if !config.default_congestion.is_finite() || config.default_congestion < 0.0 {
        return Err(Error::InvalidData(format!(
            "default congestion must be a non-negative number, got {}",
            config.default_congestion
        )));
    }

    if !config.facility_weights.is_valid() {
        return Err(Error::InvalidData(
            "facility weights must be finite and non-negative".to_string(),
        ));
    }

    Ok(())
}
