use chrono::NaiveTime;

use super::accessibility::AccessibilityScorer;
use super::congestion::{CongestionTable, time_slot_label};
use super::line_order::LineOrderIndex;
use super::lines::LineTable;
use super::registry::StationRegistry;
use super::topology::LineTopologyIndex;
use super::transfers::TransferResolver;
use super::types::{
    AccessibilityScore, DisabilityType, Direction, NO_NEXT_STATIONS, NextStations, Station,
    TransferEdge,
};
use crate::loading::FacilityRow;
use crate::{Error, LineId, StationId};

/// The complete transit network model.
///
/// Built once by [`build_network`](crate::build_network). Every query takes
/// `&self` and, apart from the score accessors, touches only data that is
/// immutable after load, so the model can be shared across threads behind an
/// `Arc` while [`update_scores`](Self::update_scores) runs.
#[derive(Debug)]
pub struct TransitNetwork {
    pub(crate) registry: StationRegistry,
    pub(crate) lines: LineTable,
    pub(crate) line_order: LineOrderIndex,
    pub(crate) topology: LineTopologyIndex,
    pub(crate) transfers: TransferResolver,
    pub(crate) congestion: CongestionTable,
    pub(crate) scorer: AccessibilityScorer,
}

impl TransitNetwork {
    // Stations

    /// Station id for `code`
    ///
    /// # Errors
    ///
    /// Returns [`Error::StationNotFound`] if the code is not registered
    pub fn id(&self, code: &str) -> Result<StationId, Error> {
        self.registry.id(code)
    }

    /// Station code for `id`; empty string if out of range
    pub fn code(&self, id: StationId) -> &str {
        self.registry.code(id)
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.registry.station(id)
    }

    pub fn stations(&self) -> &[Station] {
        self.registry.stations()
    }

    /// Lines `id` belongs to (its home line only)
    pub fn lines(&self, id: StationId) -> &[String] {
        self.registry.lines(id)
    }

    /// Ids of all stations sharing `name`, ascending
    pub fn stations_named(&self, name: &str) -> &[StationId] {
        self.registry.stations_named(name)
    }

    pub fn station_count(&self) -> usize {
        self.registry.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_id(&self, line: &str) -> Option<LineId> {
        self.lines.get(line)
    }

    // Line structure

    /// Neighbours of `id` on `line` in both directions; empty if unknown
    pub fn next_stations(&self, id: StationId, line: &str) -> &NextStations {
        match self.lines.get(line) {
            Some(line) => self.topology.next_stations(id, line),
            None => &NO_NEXT_STATIONS,
        }
    }

    /// Stations passed riding `line` from `from` to `to`: `from` excluded,
    /// `to` included, in travel order. Falls back to `[to]`.
    pub fn intermediate_stations(&self, from: StationId, to: StationId, line: &str) -> Vec<StationId> {
        match self.lines.get(line) {
            Some(line) => self.line_order.intermediate_stations(from, to, line),
            None => vec![to],
        }
    }

    /// Position of `id` in the stop sequence of `line`
    pub fn ordinal(&self, id: StationId, line: &str) -> Option<i32> {
        self.line_order.ordinal(id, self.lines.get(line)?)
    }

    /// Transfer from `from` on `from_line` to the same-named station on `to_line`
    pub fn transfer(&self, from: StationId, from_line: &str, to_line: &str) -> Option<&TransferEdge> {
        let from_line = self.lines.get(from_line)?;
        let to_line = self.lines.get(to_line)?;
        self.transfers.transfer(from, from_line, to_line)
    }

    pub fn transfer_count(&self) -> usize {
        self.transfers.len()
    }

    // Congestion

    /// Load factor for a time-slot label, or the default (0.5) when missing
    pub fn congestion(
        &self,
        id: StationId,
        line: &str,
        direction: Direction,
        day: &str,
        slot: &str,
    ) -> f64 {
        match self.lines.get(line) {
            Some(line) => self.congestion.congestion(id, line, direction, day, slot),
            None => self.congestion.default_load(),
        }
    }

    /// Load factor for the half-hour slot containing `time`
    pub fn congestion_at(
        &self,
        id: StationId,
        line: &str,
        direction: Direction,
        day: &str,
        time: NaiveTime,
    ) -> f64 {
        self.congestion(id, line, direction, day, &time_slot_label(time))
    }

    // Accessibility

    /// Recomputes scores for the stations listed in `rows`, returning the
    /// number of station scores assigned. Safe to call while other threads
    /// read scores.
    pub fn update_scores(&self, rows: &[FacilityRow]) -> usize {
        let assigned = self.scorer.update(rows, &self.registry);
        log::debug!("Updated accessibility scores of {assigned} stations from {} rows", rows.len());
        assigned
    }

    /// Score vector of `id`, zeros if never updated or unknown
    pub fn score(&self, id: StationId) -> AccessibilityScore {
        self.scorer.score(id)
    }

    pub fn score_for(&self, id: StationId, kind: DisabilityType) -> f64 {
        self.score(id)[kind.index()]
    }

    /// Copy of all score vectors, indexed by station id
    pub fn scores(&self) -> Vec<AccessibilityScore> {
        self.scorer.snapshot()
    }
}
