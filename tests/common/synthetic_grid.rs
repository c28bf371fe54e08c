use sudoku_grid::types::{Contour, Point2};
use sudoku_grid::GridBox;

/// Axis-aligned synthetic grid: cell `(col, row)` is centred at
/// `origin + pitch·(col, row)` and drawn as a square of side `side`.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGrid {
    pub origin: Point2,
    pub pitch: f32,
    pub side: f32,
}

impl SyntheticGrid {
    pub fn new(origin: Point2, pitch: f32, side: f32) -> Self {
        assert!(side > 0.0 && side < pitch, "cells must not overlap");
        Self {
            origin,
            pitch,
            side,
        }
    }

    pub fn center(&self, col: i32, row: i32) -> Point2 {
        [
            self.origin[0] + self.pitch * col as f32,
            self.origin[1] + self.pitch * row as f32,
        ]
    }

    pub fn square_box(&self, col: i32, row: i32) -> GridBox {
        GridBox::square(self.center(col, row), self.side).expect("synthetic square is valid")
    }

    pub fn boxes(&self, cells: &[(i32, i32)]) -> Vec<GridBox> {
        cells.iter().map(|&(c, r)| self.square_box(c, r)).collect()
    }

    /// Dense pixel-stepped outline of one cell, as a tracer would return it.
    pub fn contour(&self, col: i32, row: i32) -> Contour {
        traced_rect(self.center(col, row), self.side, self.side)
    }

    pub fn contours(&self, cells: &[(i32, i32)]) -> Vec<Contour> {
        cells.iter().map(|&(c, r)| self.contour(c, r)).collect()
    }

    /// Center of `(col, row)` after rotating the lattice by `degrees` about
    /// the origin cell.
    pub fn rotated_center(&self, col: i32, row: i32, degrees: f32) -> Point2 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let (u, v) = (self.pitch * col as f32, self.pitch * row as f32);
        [
            self.origin[0] + u * cos - v * sin,
            self.origin[1] + u * sin + v * cos,
        ]
    }

    /// Rotated lattice whose detected centers are off by up to `amplitude`
    /// pixels per axis. The offsets follow a fixed pattern with the origin
    /// cell left exact. Returns the boxes and the true centers, both in
    /// `all_cells()` order.
    pub fn perturbed(&self, degrees: f32, amplitude: f32) -> (Vec<GridBox>, Vec<Point2>) {
        let mut boxes = Vec::with_capacity(81);
        let mut truth = Vec::with_capacity(81);
        for (c, r) in all_cells() {
            let t = self.rotated_center(c, r, degrees);
            let jx = ((c * 7 + r * 3 + 2) % 5 - 2) as f32 * amplitude * 0.5;
            let jy = ((c * 3 + r * 5 + 2) % 5 - 2) as f32 * amplitude * 0.5;
            let b = GridBox::square([t[0] + jx, t[1] + jy], self.side)
                .expect("synthetic square is valid");
            boxes.push(b);
            truth.push(t);
        }
        (boxes, truth)
    }
}

/// All 81 cells in row-major order, `(col, row)`.
pub fn all_cells() -> Vec<(i32, i32)> {
    (0..9).flat_map(|r| (0..9).map(move |c| (c, r))).collect()
}

/// `cells` without the listed entries, order preserved.
pub fn without(cells: &[(i32, i32)], removed: &[(i32, i32)]) -> Vec<(i32, i32)> {
    cells
        .iter()
        .copied()
        .filter(|c| !removed.contains(c))
        .collect()
}

/// `cells` reordered so that `first` leads; the rest keep their order.
pub fn starting_with(cells: &[(i32, i32)], first: (i32, i32)) -> Vec<(i32, i32)> {
    let mut out = vec![first];
    out.extend(cells.iter().copied().filter(|&c| c != first));
    out
}

/// Clockwise outline of a `w × h` rectangle with one vertex per pixel step,
/// starting at the top-left corner.
pub fn traced_rect(center: Point2, w: f32, h: f32) -> Contour {
    let (x0, y0) = (center[0] - w * 0.5, center[1] - h * 0.5);
    let (nw, nh) = (w.round() as i32, h.round() as i32);
    let mut pts = Vec::with_capacity(2 * (nw + nh) as usize);
    for i in 0..nw {
        pts.push([x0 + i as f32, y0]);
    }
    for i in 0..nh {
        pts.push([x0 + w, y0 + i as f32]);
    }
    for i in 0..nw {
        pts.push([x0 + w - i as f32, y0 + h]);
    }
    for i in 0..nh {
        pts.push([x0, y0 + h - i as f32]);
    }
    pts
}

pub fn assert_close(actual: Point2, expected: Point2, tol: f32, what: &str) {
    assert!(
        (actual[0] - expected[0]).abs() <= tol && (actual[1] - expected[1]).abs() <= tol,
        "{what}: got ({:.3}, {:.3}), expected ({:.3}, {:.3})",
        actual[0],
        actual[1],
        expected[0],
        expected[1]
    );
}
