//! Value types shared by the network indexes

use std::fmt;
use std::str::FromStr;

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::{Error, StationId};

/// Station as registered from the first row carrying its code
#[derive(Debug, Clone)]
pub struct Station {
    pub id: StationId,
    /// External station code
    pub code: String,
    pub name: String,
    /// Home line of the station row
    pub line: String,
    /// x = longitude, y = latitude
    pub geometry: Point<f64>,
}

impl Station {
    pub fn latitude(&self) -> f64 {
        self.geometry.y()
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.x()
    }
}

/// Direction of travel along a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Parses a feed direction label.
    ///
    /// Accepts `up`/`down` in any case and the Korean labels used by the
    /// congestion feed: 상행/하행, and 내선/외선 for the circular line.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("up") {
            return Some(Direction::Up);
        }
        if label.eq_ignore_ascii_case("down") {
            return Some(Direction::Down);
        }
        match label {
            "상행" | "내선" => Some(Direction::Up),
            "하행" | "외선" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::parse(s).ok_or_else(|| Error::InvalidData(format!("unknown direction '{s}'")))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

/// Immediate neighbours of a station on one line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NextStations {
    pub up: Vec<StationId>,
    pub down: Vec<StationId>,
}

impl NextStations {
    pub const fn empty() -> Self {
        NextStations {
            up: Vec::new(),
            down: Vec::new(),
        }
    }

    pub fn towards(&self, direction: Direction) -> &[StationId] {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }
}

/// Shared empty adjacency returned for unknown keys
pub(crate) static NO_NEXT_STATIONS: NextStations = NextStations::empty();

/// Walking connection to the same-named station on another line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferEdge {
    /// Walking distance in metres
    pub distance: f64,
    pub to_station: StationId,
}

/// Disability categories scored per station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisabilityType {
    /// Physical disability (wheelchair users)
    #[serde(rename = "PHY")]
    Physical,
    /// Visual impairment
    #[serde(rename = "VIS")]
    Visual,
    /// Hearing impairment
    #[serde(rename = "AUD")]
    Auditory,
    /// Elderly
    #[serde(rename = "ELD")]
    Elderly,
}

impl DisabilityType {
    pub const COUNT: usize = 4;

    pub const ALL: [DisabilityType; Self::COUNT] = [
        DisabilityType::Physical,
        DisabilityType::Visual,
        DisabilityType::Auditory,
        DisabilityType::Elderly,
    ];

    /// Position of this category in an [`AccessibilityScore`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> &'static str {
        match self {
            DisabilityType::Physical => "PHY",
            DisabilityType::Visual => "VIS",
            DisabilityType::Auditory => "AUD",
            DisabilityType::Elderly => "ELD",
        }
    }
}

impl FromStr for DisabilityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisabilityType::ALL
            .into_iter()
            .find(|kind| kind.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::InvalidData(format!(
                    "invalid disability type '{s}', must be one of: PHY, VIS, AUD, ELD"
                ))
            })
    }
}

impl fmt::Display for DisabilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Score per [`DisabilityType`], indexed by [`DisabilityType::index`]
pub type AccessibilityScore = [f64; DisabilityType::COUNT];
