//! Per-station accessibility scores computed from facility inventories.
//!
//! Each disability category weighs the nine facility counts differently.
//! The weighted sum is squashed into `[0, MAX_ACCESSIBILITY_SCORE]` by a
//! saturating exponential.
//!
//! Scores are the only part of the model that changes after load. Reads
//! and writes both go through one `RwLock`; a batch is computed before the
//! write lock is taken.

use std::sync::{PoisonError, RwLock};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::registry::StationRegistry;
use super::types::{AccessibilityScore, DisabilityType};
use crate::loading::FacilityRow;
use crate::{MAX_ACCESSIBILITY_SCORE, StationId};

/// Raw weighted sum at which a score reaches ~63% of the maximum
const SATURATION: f64 = 10.0;

/// Weight of each facility kind for one disability category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FacilityWeights {
    pub charger: f64,
    pub elevator: f64,
    pub escalator: f64,
    pub lift: f64,
    pub movingwalk: f64,
    pub safe_platform: f64,
    pub sign_phone: f64,
    pub toilet: f64,
    pub helper: f64,
}

impl FacilityWeights {
    /// Weights in [`FacilityRow::counts`] order
    pub fn as_array(&self) -> [f64; 9] {
        [
            self.charger,
            self.elevator,
            self.escalator,
            self.lift,
            self.movingwalk,
            self.safe_platform,
            self.sign_phone,
            self.toilet,
            self.helper,
        ]
    }

    /// Weighted facility sum of `row`
    pub fn raw_score(&self, row: &FacilityRow) -> f64 {
        self.as_array()
            .iter()
            .zip(row.counts())
            .map(|(weight, count)| weight * count)
            .sum()
    }
}

/// One weight vector per disability category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct FacilityWeightTable {
    pub phy: FacilityWeights,
    pub vis: FacilityWeights,
    pub aud: FacilityWeights,
    pub eld: FacilityWeights,
}

impl FacilityWeightTable {
    pub fn get(&self, kind: DisabilityType) -> &FacilityWeights {
        match kind {
            DisabilityType::Physical => &self.phy,
            DisabilityType::Visual => &self.vis,
            DisabilityType::Auditory => &self.aud,
            DisabilityType::Elderly => &self.eld,
        }
    }

    /// True if every weight is finite and non-negative
    pub fn is_valid(&self) -> bool {
        DisabilityType::ALL.iter().all(|&kind| {
            self.get(kind)
                .as_array()
                .iter()
                .all(|w| w.is_finite() && *w >= 0.0)
        })
    }
}

impl Default for FacilityWeightTable {
    fn default() -> Self {
        FacilityWeightTable {
            // Wheelchair users: step-free access first
            phy: FacilityWeights {
                charger: 1.0,
                elevator: 3.0,
                escalator: 0.0,
                lift: 2.5,
                movingwalk: 1.0,
                safe_platform: 1.0,
                sign_phone: 0.5,
                toilet: 1.5,
                helper: 2.0,
            },
            vis: FacilityWeights {
                charger: 0.0,
                elevator: 1.5,
                escalator: 1.0,
                lift: 0.5,
                movingwalk: 0.5,
                safe_platform: 3.0,
                sign_phone: 2.0,
                toilet: 1.0,
                helper: 2.5,
            },
            aud: FacilityWeights {
                charger: 0.0,
                elevator: 1.0,
                escalator: 1.0,
                lift: 0.5,
                movingwalk: 0.5,
                safe_platform: 2.0,
                sign_phone: 3.0,
                toilet: 1.0,
                helper: 1.5,
            },
            eld: FacilityWeights {
                charger: 0.5,
                elevator: 2.5,
                escalator: 2.0,
                lift: 1.0,
                movingwalk: 1.5,
                safe_platform: 1.0,
                sign_phone: 0.5,
                toilet: 2.0,
                helper: 1.5,
            },
        }
    }
}

/// Maps a raw weighted sum onto `[0, MAX_ACCESSIBILITY_SCORE]`.
///
/// Monotonic non-decreasing; negative sums score zero.
pub fn normalize_score(raw: f64) -> f64 {
    if !raw.is_finite() {
        return if raw == f64::INFINITY { MAX_ACCESSIBILITY_SCORE } else { 0.0 };
    }
    MAX_ACCESSIBILITY_SCORE * (1.0 - (-raw.max(0.0) / SATURATION).exp())
}

#[derive(Debug)]
pub struct AccessibilityScorer {
    /// Indexed by `StationId`, all zeros until first updated
    scores: RwLock<Vec<AccessibilityScore>>,
    weights: FacilityWeightTable,
}

impl AccessibilityScorer {
    pub fn new(station_count: usize, weights: FacilityWeightTable) -> Self {
        AccessibilityScorer {
            scores: RwLock::new(vec![[0.0; DisabilityType::COUNT]; station_count]),
            weights,
        }
    }

    /// Score vector for one facility row
    pub fn compute(&self, row: &FacilityRow) -> AccessibilityScore {
        DisabilityType::ALL.map(|kind| normalize_score(self.weights.get(kind).raw_score(row)))
    }

    /// Recomputes scores for every registered station listed in `rows` and
    /// returns how many assignments were made. Unknown codes are ignored;
    /// stations not listed keep their previous scores.
    pub(crate) fn update(&self, rows: &[FacilityRow], registry: &StationRegistry) -> usize {
        let computed: Vec<(AccessibilityScore, Vec<StationId>)> = rows
            .par_iter()
            .map(|row| {
                let stations = row
                    .station_cd_list
                    .iter()
                    .filter_map(|code| registry.lookup(code))
                    .collect();
                (self.compute(row), stations)
            })
            .collect();

        // Poisoning cannot leave a half-written score: each assignment is a
        // single array copy.
        let mut scores = self.scores.write().unwrap_or_else(PoisonError::into_inner);
        let mut assigned = 0;
        for (score, stations) in computed {
            for station in stations {
                if let Some(slot) = scores.get_mut(station) {
                    *slot = score;
                    assigned += 1;
                }
            }
        }
        assigned
    }

    /// Current scores of `station`; zeros for unknown ids
    pub fn score(&self, station: StationId) -> AccessibilityScore {
        let scores = self.scores.read().unwrap_or_else(PoisonError::into_inner);
        scores
            .get(station)
            .copied()
            .unwrap_or([0.0; DisabilityType::COUNT])
    }

    /// Consistent copy of the whole score table
    pub fn snapshot(&self) -> Vec<AccessibilityScore> {
        self.scores
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn weights(&self) -> &FacilityWeightTable {
        &self.weights
    }
}
