pub use crate::DEFAULT_CONGESTION;
pub use crate::MAX_ACCESSIBILITY_SCORE;

// Building the model
pub use crate::loading::{
    FacilityRow, LoadReport, ModelConfig, NetworkSnapshot, build_network,
    create_network_from_file, read_config, read_facility_rows, read_snapshot,
};

// Querying the model
pub use crate::model::{
    AccessibilityScore, DisabilityType, Direction, FacilityWeights, NextStations, Station,
    TransferEdge, TransitNetwork, day_label, time_slot_label,
};

pub use crate::Error;
pub use crate::LineId;
pub use crate::StationId;
