use hashbrown::HashMap;
use log::trace;

use super::lines::LineTable;
use super::registry::StationRegistry;
use super::types::{NO_NEXT_STATIONS, NextStations};
use crate::loading::{LoadReport, raw_types::TopologyRow};
use crate::{LineId, StationId};

/// Directional neighbours of each station on each of its lines
#[derive(Debug, Clone, Default)]
pub struct LineTopologyIndex {
    adjacency: HashMap<(StationId, LineId), NextStations>,
}

impl LineTopologyIndex {
    pub(crate) fn load(
        rows: &[TopologyRow],
        registry: &StationRegistry,
        lines: &mut LineTable,
        report: &mut LoadReport,
    ) -> Self {
        let mut adjacency = HashMap::with_capacity(rows.len());

        for row in rows {
            let Some(station) = registry.lookup(&row.station_cd) else {
                trace!("Topology row for unknown station {} skipped", row.station_cd);
                report.unknown_topology_rows += 1;
                continue;
            };
            let line = lines.intern(&row.line);

            let mut resolve = |codes: &[String]| -> Vec<StationId> {
                codes
                    .iter()
                    .filter_map(|code| {
                        let id = registry.lookup(code);
                        if id.is_none() {
                            trace!("Neighbour {code} of {} on {} dropped", row.station_cd, row.line);
                            report.dropped_neighbours += 1;
                        }
                        id
                    })
                    .collect()
            };
            let next = NextStations {
                up: resolve(&row.up),
                down: resolve(&row.down),
            };
            adjacency.insert((station, line), next);
        }

        report.topology_rows_kept = adjacency.len();
        LineTopologyIndex { adjacency }
    }

    /// Neighbours of `station` on `line`; empty when none are recorded
    pub fn next_stations(&self, station: StationId, line: LineId) -> &NextStations {
        self.adjacency
            .get(&(station, line))
            .unwrap_or(&NO_NEXT_STATIONS)
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
