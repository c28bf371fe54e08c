//! Parameter types configuring the detector stages.
//!
//! This module groups knobs for candidate validation, the consensus and
//! proximity filters, the ring-search resolver and the least-squares fit.
//!
//! For tuning, start with the resolver's [`MatchTolerance`]; the other
//! defaults rarely need to move.

use serde::{Deserialize, Serialize};

/// Detector-wide parameters controlling the multi-stage pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridParams {
    pub candidates: CandidateParams,
    pub consensus: ConsensusParams,
    pub dedup: DedupParams,
    pub resolver: ResolverParams,
    pub fit: FitParams,
}

/// Contour validation.
///
/// - `min_area`: contours below this area (px²) are dropped outright.
/// - `max_epsilon`: simplification tolerances `0..=max_epsilon` are tried.
/// - `min_squareness`: lower bound on `area / side_length²`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateParams {
    pub min_area: f32,
    pub max_epsilon: u32,
    pub min_squareness: f32,
}

impl Default for CandidateParams {
    fn default() -> Self {
        Self {
            min_area: 200.0,
            max_epsilon: 9,
            min_squareness: 0.8,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusParams {
    /// Maximum `|side / mean - 1|` tolerated.
    pub max_relative_deviation: f32,
}

impl Default for ConsensusParams {
    fn default() -> Self {
        Self {
            max_relative_deviation: 0.3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupParams {
    /// Centers closer than this (px) describe the same cell.
    pub min_center_distance: f32,
}

impl Default for DedupParams {
    fn default() -> Self {
        Self {
            min_center_distance: 3.0,
        }
    }
}

/// Ring-search resolver configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverParams {
    /// Initial cell length as a multiple of the origin's side length.
    pub initial_length_scale: f32,
    /// Outermost ring searched around each anchor.
    pub max_ring: i32,
    pub tolerance: MatchTolerance,
}

impl Default for ResolverParams {
    fn default() -> Self {
        Self {
            initial_length_scale: 1.1,
            max_ring: 8,
            tolerance: MatchTolerance::default(),
        }
    }
}

/// Dual-threshold acceptance test for a box near an expected position.
///
/// With `L` the current length estimate and `d` the Euclidean norm of the
/// grid offset, a box at pixel error `e` is accepted when
/// `e < absolute·L` or `e < min(per_ring·d·L, ring_cap·L)`.
/// The second clause only matters for far offsets, where the expected
/// position accumulates the length error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchTolerance {
    pub absolute: f32,
    pub per_ring: f32,
    pub ring_cap: f32,
}

impl Default for MatchTolerance {
    fn default() -> Self {
        Self {
            absolute: 0.2,
            per_ring: 0.05,
            ring_cap: 0.35,
        }
    }
}

impl MatchTolerance {
    #[inline]
    pub fn accepts(&self, error: f32, length: f32, offset_norm: f32) -> bool {
        error < self.absolute * length
            || error < (self.per_ring * offset_norm * length).min(self.ring_cap * length)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitParams {
    /// Normal matrices with `|det|` at or below this are treated as singular.
    pub singular_eps: f32,
}

impl Default for FitParams {
    fn default() -> Self {
        Self { singular_eps: 1e-6 }
    }
}
