//! Station registry: the only place station ids are minted

use geo::Point;
use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use log::trace;

use super::lines::LineTable;
use super::types::Station;
use crate::loading::{LoadReport, raw_types::StationRow};
use crate::{Error, LineId, StationId};

#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    /// Indexed by `StationId`
    stations: Vec<Station>,
    code_to_id: HashMap<String, StationId>,
    /// Home line of each station, interned
    home_lines: Vec<LineId>,
    /// Lines each station is a member of; seeded with its home line only
    station_lines: Vec<Vec<String>>,
    /// Same-named stations, ids ascending
    name_index: HashMap<String, Vec<StationId>>,
}

impl StationRegistry {
    /// Registers stations in row order. Rows repeating a known code are
    /// skipped entirely, the first occurrence wins.
    pub(crate) fn load(rows: &[StationRow], lines: &mut LineTable, report: &mut LoadReport) -> Self {
        let mut registry = StationRegistry {
            stations: Vec::with_capacity(rows.len()),
            code_to_id: HashMap::with_capacity(rows.len()),
            home_lines: Vec::with_capacity(rows.len()),
            station_lines: Vec::with_capacity(rows.len()),
            name_index: HashMap::new(),
        };

        for row in rows {
            let id = registry.stations.len();
            match registry.code_to_id.entry(row.station_cd.clone()) {
                Entry::Occupied(_) => {
                    trace!("Duplicate station code {} ignored", row.station_cd);
                    report.duplicate_stations += 1;
                    continue;
                }
                Entry::Vacant(entry) => {
                    entry.insert(id);
                }
            }

            registry.home_lines.push(lines.intern(&row.line));
            registry.station_lines.push(vec![row.line.clone()]);
            registry
                .name_index
                .entry(row.name.clone())
                .or_default()
                .push(id);
            registry.stations.push(Station {
                id,
                code: row.station_cd.clone(),
                name: row.name.clone(),
                line: row.line.clone(),
                geometry: Point::new(row.longitude, row.latitude),
            });
        }

        report.stations_loaded = registry.stations.len();
        registry
    }

    /// Station id for `code`
    ///
    /// # Errors
    ///
    /// Returns [`Error::StationNotFound`] if the code was never registered
    pub fn id(&self, code: &str) -> Result<StationId, Error> {
        self.lookup(code)
            .ok_or_else(|| Error::StationNotFound(code.to_owned()))
    }

    /// Non-failing form of [`id`](Self::id), used at the load boundary
    pub fn lookup(&self, code: &str) -> Option<StationId> {
        self.code_to_id.get(code).copied()
    }

    /// Station code for `id`, or an empty string when `id` is out of range
    pub fn code(&self, id: StationId) -> &str {
        self.stations
            .get(id)
            .map_or("", |station| station.code.as_str())
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id)
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn home_line(&self, id: StationId) -> Option<LineId> {
        self.home_lines.get(id).copied()
    }

    /// Lines the station is a member of. Same-named stations on other lines
    /// are reachable through transfer edges, not through this list.
    pub fn lines(&self, id: StationId) -> &[String] {
        self.station_lines.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Ids of every station called `name`, ascending
    pub fn stations_named(&self, name: &str) -> &[StationId] {
        self.name_index.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
