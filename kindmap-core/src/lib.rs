//! In-memory transit network model for accessibility-aware route finding.
//!
//! The model is built once from a [`NetworkSnapshot`] of loosely structured
//! rows and then answers the structural queries a path search needs:
//! adjacency along a line, transfer edges between same-named stations,
//! congestion per time slot, stop sequences between two stations and
//! per-station accessibility scores.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;


pub use error::Error;
pub use loading::{
    LoadReport, ModelConfig, NetworkSnapshot, build_network, create_network_from_file,
};
pub use model::{
    AccessibilityScore, DisabilityType, Direction, NextStations, Station, TransferEdge,
    TransitNetwork,
};

/// Dense station index, `0..station_count()` in first-seen order
pub type StationId = usize;

/// Dense line index assigned by the model's line table
pub type LineId = usize;

/// Load factor reported when no congestion data exists for a key or slot
pub const DEFAULT_CONGESTION: f64 = 0.5;

/// Upper bound of every accessibility score
pub const MAX_ACCESSIBILITY_SCORE: f64 = 5.0;
