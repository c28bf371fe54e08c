//! Digit recognition boundary.
//!
//! The classifier itself (features, model, training) lives outside this
//! crate. It is loaded once and passed in by reference; nothing here keeps
//! process-wide state.

use crate::solve::DigitGrid;
use crate::types::{GridCells, CELL_COUNT};
use image::GrayImage;
use log::debug;

pub trait DigitClassifier {
    /// Digit `1..=9` shown in `cell`, or `0` for blank/unrecognised.
    fn classify(&self, cell: &GrayImage) -> u8;
}

impl<F> DigitClassifier for F
where
    F: Fn(&GrayImage) -> u8,
{
    fn classify(&self, cell: &GrayImage) -> u8 {
        self(cell)
    }
}

/// Crops every cell out of `image` and classifies it. Cells lying entirely
/// outside the image read as blank; partially visible cells are clamped.
pub fn read_digits<C: DigitClassifier + ?Sized>(
    image: &GrayImage,
    grid: &GridCells,
    classifier: &C,
) -> DigitGrid {
    let mut digits = [0u8; CELL_COUNT];
    let mut outside = 0usize;
    for cell in &grid.cells {
        let Some(slot) = digits.get_mut(cell.index) else {
            continue;
        };
        *slot = match cell.crop(image) {
            Some(patch) => classifier.classify(&patch).min(9),
            None => {
                outside += 1;
                0
            }
        };
    }
    debug!(
        "read_digits non_blank={} outside_image={}",
        digits.iter().filter(|&&d| d != 0).count(),
        outside
    );
    digits
}
