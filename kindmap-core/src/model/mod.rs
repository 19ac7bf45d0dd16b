//! Data model for the transit network
//!
//! Every index keys on dense [`StationId`](crate::StationId) and
//! [`LineId`](crate::LineId) values; station codes and line names are
//! translated only at the load boundary.

pub mod accessibility;
pub mod congestion;
pub mod line_order;
pub mod lines;
pub mod network;
pub mod registry;
pub mod topology;
pub mod transfers;
pub mod types;

pub use accessibility::{AccessibilityScorer, FacilityWeightTable, FacilityWeights, normalize_score};
pub use congestion::{CongestionTable, day_label, time_slot_label};
pub use line_order::LineOrderIndex;
pub use lines::LineTable;
pub use network::TransitNetwork;
pub use registry::StationRegistry;
pub use topology::LineTopologyIndex;
pub use transfers::TransferResolver;
pub use types::{AccessibilityScore, DisabilityType, Direction, NextStations, Station, TransferEdge};
