//! Cell emission: one square region per logical cell.

use super::affine::AffineFit;
use super::resolver::GridExtent;
use crate::types::{CellRegion, GridCoord, CELL_COUNT, GRID_DIM};
use image::{imageops, GrayImage};

/// Emits the 81 row-major regions. Logical cell `(col, row)` sits at grid
/// offset `extent.min() + (col, row)`; every region is a square of side
/// `2·r` with `r = round(length / 2)` centred on the projected point.
///
/// Regions are not clipped to any image.
pub fn emit_cells(fit: &AffineFit, extent: &GridExtent, length: f32) -> Vec<CellRegion> {
    let r = (length * 0.5).round() as i32;
    let base = extent.min();
    let mut cells = Vec::with_capacity(CELL_COUNT);
    for row in 0..GRID_DIM {
        for col in 0..GRID_DIM {
            let coord = GridCoord::new(base.x + col as i32, base.y + row as i32);
            let center = fit.project(coord);
            cells.push(CellRegion {
                index: row * GRID_DIM + col,
                col,
                row,
                center,
                x: center[0].round() as i32 - r,
                y: center[1].round() as i32 - r,
                size: 2 * r,
            });
        }
    }
    cells
}

impl CellRegion {
    /// Part of the region inside a `width × height` image, as
    /// `(x, y, w, h)`. `None` when they do not overlap.
    pub fn clamped(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        let x0 = self.x.max(0) as i64;
        let y0 = self.y.max(0) as i64;
        let x1 = (self.x as i64 + self.size as i64).min(width as i64);
        let y1 = (self.y as i64 + self.size as i64).min(height as i64);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32))
    }

    /// Copies the in-bounds part of the region out of `image`.
    pub fn crop(&self, image: &GrayImage) -> Option<GrayImage> {
        let (x, y, w, h) = self.clamped(image.width(), image.height())?;
        Some(imageops::crop_imm(image, x, y, w, h).to_image())
    }
}
