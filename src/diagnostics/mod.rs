//! Diagnostics data model returned by the detector.
//!
//! [`DetectionReport`] bundles the outcome of one run (cells or the error)
//! with a [`PipelineTrace`] that records what every stage saw and kept. All
//! reports serialize to camelCase JSON.

pub mod pipeline;
pub mod timing;

pub use crate::candidates::{CandidateStats, ConsensusStats};
pub use pipeline::{DedupStage, DetectionReport, FitStage, PipelineTrace, ResolveStage};
pub use timing::{StageTiming, TimingBreakdown};
