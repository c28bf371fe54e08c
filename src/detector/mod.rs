//! Grid detector turning traced contours into 81 cell regions.
//!
//! Overview
//! - Validates contours into square candidate boxes, re-approximating each
//!   contour at several tolerances.
//! - Drops boxes whose size disagrees with the set's mean side length, then
//!   collapses near-coincident boxes.
//! - Resolves grid topology by ring search around the first box, re-anchoring
//!   on newly matched boxes until a 9×9 span is covered.
//! - Fits a 2×2 linear map from grid offsets to pixel offsets and emits one
//!   square region per cell in row-major order.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and loaders.
//! - `pipeline` – the main [`GridDetector`] implementation.
//!
//! Every run is independent: the detector keeps no state between inputs.

pub mod params;
mod pipeline;

pub use params::{
    CandidateParams, ConsensusParams, DedupParams, FitParams, GridParams, MatchTolerance,
    ResolverParams,
};
pub use pipeline::GridDetector;
