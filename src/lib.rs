#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod types;

// Stage building blocks, public for tools and tests.
pub mod candidates;
pub mod geometry;
pub mod grid;

// Downstream collaborator boundaries.
pub mod recognize;
pub mod solve;

// --- High-level re-exports -------------------------------------------------

pub use crate::candidates::GridBox;
pub use crate::detector::{GridDetector, GridParams};
pub use crate::diagnostics::{DetectionReport, PipelineTrace};
pub use crate::error::GridError;
pub use crate::types::{CellRegion, Contour, GridCells};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use sudoku_grid::prelude::*;
///
/// # fn main() {
/// let contours: Vec<Contour> = Vec::new();
/// let detector = GridDetector::new(GridParams::default());
/// match detector.process(&contours) {
///     Ok(grid) => println!("cell length {:.1}", grid.cell_length),
///     Err(err) => println!("no grid: {err}"),
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::recognize::{read_digits, DigitClassifier};
    pub use crate::solve::{BacktrackingSolver, DigitGrid, PuzzleSolver};
    pub use crate::{Contour, GridCells, GridDetector, GridError, GridParams};
}
