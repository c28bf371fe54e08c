use nalgebra::Matrix2;
use serde::{Deserialize, Serialize};

/// Number of cells along each side of the puzzle grid.
pub const GRID_DIM: usize = 9;
/// Total number of logical cells, indexed row-major.
pub const CELL_COUNT: usize = GRID_DIM * GRID_DIM;

/// Pixel-space point `[x, y]`.
pub type Point2 = [f32; 2];

/// Ordered polygon boundary as produced by a contour tracer.
pub type Contour = Vec<Point2>;

/// Integer grid offset of a box relative to the resolution origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub const ORIGIN: GridCoord = GridCoord { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Axis-aligned square covering one logical cell.
///
/// `x`/`y` is the top-left corner and `size` the side length, both in whole
/// pixels. The region may extend past the image; see
/// [`CellRegion::crop`] for the clamped variant.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRegion {
    /// Row-major index `row * 9 + col`.
    pub index: usize,
    pub col: usize,
    pub row: usize,
    /// Projected (sub-pixel) cell center.
    pub center: Point2,
    pub x: i32,
    pub y: i32,
    pub size: i32,
}

/// Successful reconstruction of the full 9×9 grid.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCells {
    /// Exactly [`CELL_COUNT`] regions in row-major order.
    pub cells: Vec<CellRegion>,
    /// Final cell-length estimate in pixels.
    pub cell_length: f32,
    /// Half-width `r` used for every region.
    pub half_width: i32,
    /// Grid-offset to pixel-offset map (rows: unit x, unit y).
    pub affine: Matrix2<f32>,
    /// Pixel center of the resolution origin box.
    pub origin_center: Point2,
    /// Offset of logical cell (0, 0) relative to the origin box.
    pub min_offset: GridCoord,
    /// Number of detected boxes that received a grid coordinate.
    pub matched_boxes: usize,
}

impl GridCells {
    pub fn cell(&self, col: usize, row: usize) -> Option<&CellRegion> {
        if col >= GRID_DIM || row >= GRID_DIM {
            return None;
        }
        self.cells.get(row * GRID_DIM + col)
    }
}
