//! Stop ordering per line, used to expand a multi-stop ride into the
//! stations it passes.

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use log::trace;

use super::lines::LineTable;
use super::registry::StationRegistry;
use crate::loading::{LoadReport, raw_types::OrderRow};
use crate::{LineId, StationId};

#[derive(Debug, Clone, Default)]
pub struct LineOrderIndex {
    orders: HashMap<(StationId, LineId), i32>,
    /// `(ordinal, station)` per line, ascending by ordinal. Indexed by `LineId`.
    sequences: Vec<Vec<(i32, StationId)>>,
}

impl LineOrderIndex {
    /// Absorbs order rows whose station is registered.
    ///
    /// A repeated `(station, line)` row replaces the earlier ordinal in both
    /// the ordinal map and the line sequence, so each station appears at
    /// most once per line.
    pub(crate) fn load(
        rows: &[OrderRow],
        registry: &StationRegistry,
        lines: &mut LineTable,
        report: &mut LoadReport,
    ) -> Self {
        // Position of each (station, line) in `entries`, for last-write-wins
        let mut slots: HashMap<(StationId, LineId), usize> = HashMap::with_capacity(rows.len());
        let mut entries: Vec<(LineId, i32, StationId)> = Vec::with_capacity(rows.len());

        for row in rows {
            let Some(station) = registry.lookup(&row.station_cd) else {
                trace!("Order row for unknown station {} skipped", row.station_cd);
                report.unknown_order_rows += 1;
                continue;
            };
            let line = lines.intern(&row.line);

            match slots.entry((station, line)) {
                Entry::Occupied(slot) => {
                    entries[*slot.get()].1 = row.order;
                    report.duplicate_order_rows += 1;
                }
                Entry::Vacant(slot) => {
                    slot.insert(entries.len());
                    entries.push((line, row.order, station));
                }
            }
        }

        let mut orders = HashMap::with_capacity(entries.len());
        let mut sequences = vec![Vec::new(); lines.len()];
        for (line, order, station) in entries {
            orders.insert((station, line), order);
            sequences[line].push((order, station));
        }
        // Stable, so equal ordinals keep feed order
        for sequence in &mut sequences {
            sequence.sort_by_key(|&(order, _)| order);
        }

        report.order_rows_kept = orders.len();
        LineOrderIndex { orders, sequences }
    }

    pub fn ordinal(&self, station: StationId, line: LineId) -> Option<i32> {
        self.orders.get(&(station, line)).copied()
    }

    /// `(ordinal, station)` pairs of `line`, ascending by ordinal
    pub fn sequence(&self, line: LineId) -> &[(i32, StationId)] {
        self.sequences.get(line).map(Vec::as_slice).unwrap_or_default()
    }

    /// Stations passed when riding `line` from `from` to `to`, excluding
    /// `from` and including `to`, in travel order.
    ///
    /// Falls back to `[to]` when either ordinal is unknown or nothing lies
    /// in the range.
    pub fn intermediate_stations(
        &self,
        from: StationId,
        to: StationId,
        line: LineId,
    ) -> Vec<StationId> {
        let (Some(from_order), Some(to_order)) = (self.ordinal(from, line), self.ordinal(to, line))
        else {
            return vec![to];
        };
        let sequence = self.sequence(line);

        let path: Vec<StationId> = if from_order < to_order {
            // from_order < ordinal <= to_order
            let start = sequence.partition_point(|&(order, _)| order <= from_order);
            let end = sequence.partition_point(|&(order, _)| order <= to_order);
            sequence[start..end].iter().map(|&(_, s)| s).collect()
        } else {
            // to_order <= ordinal < from_order, walked backwards
            let start = sequence.partition_point(|&(order, _)| order < to_order);
            let end = sequence.partition_point(|&(order, _)| order < from_order);
            sequence[start..end].iter().rev().map(|&(_, s)| s).collect()
        };

        if path.is_empty() { vec![to] } else { path }
    }
}
