use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Station row; the first row per `station_cd` wins
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StationRow {
    pub station_cd: String,
    pub name: String,
    pub line: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Position of a station within a line's stop sequence
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OrderRow {
    pub station_cd: String,
    pub line: String,
    pub order: i32,
}

/// Neighbour codes of a station on one line
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TopologyRow {
    pub station_cd: String,
    pub line: String,
    pub up: Vec<String>,
    pub down: Vec<String>,
}

/// Declared transfer from `station_cd` on `from_line` to `to_line`.
///
/// The destination station is not named by the feed; it is the station
/// sharing the origin's name whose home line is `to_line`.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TransferRow {
    pub station_cd: String,
    pub from_line: String,
    pub to_line: String,
    pub distance: f64,
}

/// Load factors per time slot for one station, line, direction and day
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CongestionRow {
    pub station_cd: String,
    pub line: String,
    pub direction: String,
    pub day: String,
    pub slots: HashMap<String, f64>,
}

/// Facility counts shared by every station listed in `station_cd_list`
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct FacilityRow {
    pub station_cd_list: Vec<String>,
    pub charger_count: f64,
    pub elevator_count: f64,
    pub escalator_count: f64,
    pub lift_count: f64,
    pub movingwalk_count: f64,
    pub safe_platform_count: f64,
    pub sign_phone_count: f64,
    pub toilet_count: f64,
    pub helper_count: f64,
}

impl FacilityRow {
    /// Counts in [`FacilityWeights::as_array`](crate::model::FacilityWeights::as_array) order
    pub fn counts(&self) -> [f64; 9] {
        [
            self.charger_count,
            self.elevator_count,
            self.escalator_count,
            self.lift_count,
            self.movingwalk_count,
            self.safe_platform_count,
            self.sign_phone_count,
            self.toilet_count,
            self.helper_count,
        ]
    }
}

/// Flat CSV form of [`FacilityRow`]; codes in `station_cd_list` are `|`-separated
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub(crate) struct FacilityRecord {
    pub station_cd_list: String,
    pub charger_count: f64,
    pub elevator_count: f64,
    pub escalator_count: f64,
    pub lift_count: f64,
    pub movingwalk_count: f64,
    pub safe_platform_count: f64,
    pub sign_phone_count: f64,
    pub toilet_count: f64,
    pub helper_count: f64,
}

impl FacilityRecord {
    pub(crate) fn into_row(self) -> FacilityRow {
        FacilityRow {
            station_cd_list: self
                .station_cd_list
                .split('|')
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_owned)
                .collect(),
            charger_count: self.charger_count,
            elevator_count: self.elevator_count,
            escalator_count: self.escalator_count,
            lift_count: self.lift_count,
            movingwalk_count: self.movingwalk_count,
            safe_platform_count: self.safe_platform_count,
            sign_phone_count: self.sign_phone_count,
            toilet_count: self.toilet_count,
            helper_count: self.helper_count,
        }
    }
}

/// Everything the bulk load consumes, in feed order
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct NetworkSnapshot {
    pub stations: Vec<StationRow>,
    pub station_order: Vec<OrderRow>,
    pub line_topology: Vec<TopologyRow>,
    pub transfers: Vec<TransferRow>,
    pub congestion: Vec<CongestionRow>,
}
