//! Grid cell candidates: validation of raw contours and the size/proximity
//! filters applied before topology resolution.
//!
//! - [`boxes`] – the immutable [`GridBox`] descriptor.
//! - [`validator`] – contour → box conversion (minimum area, repeated
//!   polygon simplification, squareness gate).
//! - [`filters`] – consensus side-length filter and center-distance
//!   deduplication.

pub mod boxes;
pub mod filters;
pub mod validator;

pub use boxes::GridBox;
pub use filters::{consensus_filter, dedup_boxes, ConsensusStats};
pub use validator::{validate_contours, CandidateStats};
