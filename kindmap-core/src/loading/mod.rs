//! This module is responsible for turning a snapshot of feed rows (stations,
//! line order and topology, transfers, congestion, facilities) into a
//! query-ready [`TransitNetwork`](crate::TransitNetwork).

mod builder;
mod config;
mod parser;
pub mod raw_types;
mod report;

pub use builder::{build_network, create_network_from_file};
pub use config::ModelConfig;
pub use parser::{read_config, read_facility_rows, read_snapshot};
pub use raw_types::{
    CongestionRow, FacilityRow, NetworkSnapshot, OrderRow, StationRow, TopologyRow, TransferRow,
};
pub use report::LoadReport;
