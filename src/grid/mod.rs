//! Grid topology and geometry.
//!
//! - [`ring`]: offsets of the square rings searched around an anchor.
//! - [`resolver`]: assign integer grid coordinates to boxes by ring search
//!   with re-anchoring.
//! - [`affine`]: least-squares grid→pixel linear map.
//! - [`cells`]: emit the 81 cell regions from the fitted map.

pub mod affine;
pub mod cells;
pub mod resolver;
pub mod ring;

pub use affine::AffineFit;
pub use cells::emit_cells;
pub use resolver::{resolve_grid, BoxId, GridExtent, OffsetTable, Resolution};
pub use ring::ring_offsets;
