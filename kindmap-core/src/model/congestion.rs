//! Time-of-day load factors per station, line, direction and day type

use chrono::{NaiveTime, Timelike, Weekday};
use hashbrown::HashMap;
use log::trace;

use super::lines::LineTable;
use super::registry::StationRegistry;
use super::types::Direction;
use crate::loading::{LoadReport, raw_types::CongestionRow};
use crate::{LineId, StationId};

/// Load factor per time-slot label
type SlotLoads = HashMap<Box<str>, f64>;

#[derive(Debug, Clone)]
pub struct CongestionTable {
    /// Day label -> slot loads, per (station, line, direction)
    entries: HashMap<(StationId, LineId, Direction), HashMap<Box<str>, SlotLoads>>,
    default_load: f64,
}

impl Default for CongestionTable {
    fn default() -> Self {
        CongestionTable {
            entries: HashMap::new(),
            default_load: crate::DEFAULT_CONGESTION,
        }
    }
}

impl CongestionTable {
    pub(crate) fn load(
        rows: &[CongestionRow],
        registry: &StationRegistry,
        lines: &mut LineTable,
        default_load: f64,
        report: &mut LoadReport,
    ) -> Self {
        let mut entries: HashMap<_, HashMap<Box<str>, SlotLoads>> = HashMap::new();

        for row in rows {
            let Some(station) = registry.lookup(&row.station_cd) else {
                trace!("Congestion row for unknown station {} skipped", row.station_cd);
                report.unknown_congestion_rows += 1;
                continue;
            };
            let Some(direction) = Direction::parse(&row.direction) else {
                trace!(
                    "Congestion row for {} has unknown direction '{}'",
                    row.station_cd, row.direction
                );
                report.unknown_directions += 1;
                continue;
            };
            let line = lines.intern(&row.line);

            let slots: SlotLoads = row
                .slots
                .iter()
                .map(|(label, &load)| (Box::from(label.as_str()), load))
                .collect();
            entries
                .entry((station, line, direction))
                .or_default()
                .insert(Box::from(row.day.as_str()), slots);
            report.congestion_rows_kept += 1;
        }

        CongestionTable {
            entries,
            default_load,
        }
    }

    /// Recorded load factor, or the default when the key or slot is missing
    pub fn congestion(
        &self,
        station: StationId,
        line: LineId,
        direction: Direction,
        day: &str,
        slot: &str,
    ) -> f64 {
        self.entries
            .get(&(station, line, direction))
            .and_then(|days| days.get(day))
            .and_then(|slots| slots.get(slot))
            .copied()
            .unwrap_or(self.default_load)
    }

    pub fn default_load(&self) -> f64 {
        self.default_load
    }
}

/// Half-hour slot label (`"HH:MM"`) containing `time`
pub fn time_slot_label(time: NaiveTime) -> String {
    let minute = if time.minute() < 30 { 0 } else { 30 };
    format!("{:02}:{:02}", time.hour(), minute)
}

/// Day label used by the congestion feed
pub fn day_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
        _ => "weekday",
    }
}
