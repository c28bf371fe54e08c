use crate::candidates::{CandidateStats, ConsensusStats};
use crate::diagnostics::TimingBreakdown;
use crate::error::GridError;
use crate::grid::GridExtent;
use crate::types::GridCells;
use nalgebra::Matrix2;
use serde::Serialize;

/// Result produced by [`GridDetector::process_with_diagnostics`](crate::GridDetector).
///
/// Exactly one of `grid` and `error` is set.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridCells>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GridError>,
    pub trace: PipelineTrace,
}

impl DetectionReport {
    pub fn found(&self) -> bool {
        self.grid.is_some()
    }

    pub fn into_result(self) -> Result<GridCells, GridError> {
        match (self.grid, self.error) {
            (Some(grid), _) => Ok(grid),
            (None, Some(err)) => Err(err),
            (None, None) => Err(GridError::NoCandidates),
        }
    }
}

/// Stage-by-stage record of one run. Stages after the failing one are `None`.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub timings: TimingBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<CandidateStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consensus: Option<ConsensusStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedup: Option<DedupStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve: Option<ResolveStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<FitStage>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DedupStage {
    pub input: usize,
    pub kept: usize,
}

/// Topology resolution summary. On failure only the counters are meaningful.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveStage {
    pub anchors_tried: usize,
    pub matched: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<GridExtent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f32>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitStage {
    pub coefficients: Matrix2<f32>,
    pub rms_residual: f32,
}
