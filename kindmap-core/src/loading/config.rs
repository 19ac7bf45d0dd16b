use serde::{Deserialize, Serialize};

use crate::model::FacilityWeightTable;

/// Configuration for building a [`TransitNetwork`](crate::TransitNetwork)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Load factor returned for unrecorded congestion keys and slots
    pub default_congestion: f64,
    /// Facility weights per disability category
    pub facility_weights: FacilityWeightTable,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            default_congestion: crate::DEFAULT_CONGESTION,
            facility_weights: FacilityWeightTable::default(),
        }
    }
}
