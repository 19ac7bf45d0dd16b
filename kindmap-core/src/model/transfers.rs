//! Transfer edges between same-named stations on different lines.
//!
//! The feed declares transfers by line pair only ("at this station, from
//! line A to line B"), so the destination station is found by joining on
//! the station name: the station called the same as the origin whose home
//! line is the destination line.

use hashbrown::HashMap;
use log::trace;

use super::lines::LineTable;
use super::registry::StationRegistry;
use super::types::TransferEdge;
use crate::loading::{LoadReport, raw_types::TransferRow};
use crate::{LineId, StationId};

#[derive(Debug, Clone, Default)]
pub struct TransferResolver {
    edges: HashMap<(StationId, LineId, LineId), TransferEdge>,
}

impl TransferResolver {
    /// Resolves transfer rows against a populated registry.
    ///
    /// Rows whose origin is unknown or whose destination line has no
    /// same-named station are dropped. A later row for the same key
    /// replaces the earlier edge.
    pub(crate) fn load(
        rows: &[TransferRow],
        registry: &StationRegistry,
        lines: &mut LineTable,
        report: &mut LoadReport,
    ) -> Self {
        let mut edges = HashMap::with_capacity(rows.len());

        for row in rows {
            let Some(origin) = registry
                .lookup(&row.station_cd)
                .and_then(|id| registry.station(id))
            else {
                trace!("Transfer from unknown station {} skipped", row.station_cd);
                report.unknown_transfer_origins += 1;
                continue;
            };

            let Some(to_station) = find_target(registry, lines, &origin.name, &row.to_line) else {
                trace!(
                    "Transfer target missing: {} ({} -> {})",
                    origin.name, row.from_line, row.to_line
                );
                report.unresolved_transfers += 1;
                continue;
            };

            let from_line = lines.intern(&row.from_line);
            let to_line = lines.intern(&row.to_line);
            edges.insert(
                (origin.id, from_line, to_line),
                TransferEdge {
                    distance: row.distance,
                    to_station,
                },
            );
        }

        report.transfers_resolved = edges.len();
        TransferResolver { edges }
    }

    pub fn transfer(
        &self,
        from: StationId,
        from_line: LineId,
        to_line: LineId,
    ) -> Option<&TransferEdge> {
        self.edges.get(&(from, from_line, to_line))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// First station (by id) named `name` whose home line is `line`
fn find_target(
    registry: &StationRegistry,
    lines: &LineTable,
    name: &str,
    line: &str,
) -> Option<StationId> {
    // Home lines are interned at registration, so an unseen line name means no
    // station lives on that line.
    let line = lines.get(line)?;
    registry
        .stations_named(name)
        .iter()
        .copied()
        .find(|&candidate| registry.home_line(candidate) == Some(line))
}
