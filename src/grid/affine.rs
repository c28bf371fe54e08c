//! Least-squares linear map from grid offsets to pixel offsets.
//!
//! With `M` the `n×2` matrix of grid offsets and `S` the `n×2` matrix of box
//! centers relative to the origin center, the coefficients are
//! `C = (MᵀM)⁻¹ MᵀS`. The fit has no intercept: the origin center plays that
//! role. Row vectors project as `p = [x y]·C + origin`.

use super::resolver::Resolution;
use crate::candidates::GridBox;
use crate::detector::params::FitParams;
use crate::error::GridError;
use crate::types::{GridCoord, Point2};
use nalgebra::{Matrix2, RowVector2};

#[derive(Clone, Debug, PartialEq)]
pub struct AffineFit {
    /// Row 0 is the pixel step of one cell along grid x, row 1 along grid y.
    pub coefficients: Matrix2<f32>,
    pub origin: Point2,
    /// RMS distance between fitted and observed centers of the samples.
    pub rms_residual: f32,
}

impl AffineFit {
    /// Fits the map to every assignment of a resolution.
    pub fn from_resolution(
        boxes: &[GridBox],
        resolution: &Resolution,
        params: &FitParams,
    ) -> Result<Self, GridError> {
        let origin = boxes
            .get(resolution.origin)
            .map(GridBox::center)
            .ok_or(GridError::NoCandidates)?;
        let samples: Vec<(GridCoord, Point2)> = resolution
            .offsets
            .iter()
            .filter_map(|(id, coord)| boxes.get(id).map(|b| (coord, b.center())))
            .collect();
        Self::from_samples(&samples, origin, params.singular_eps)
    }

    /// Fits the map to `(grid offset, pixel center)` pairs.
    pub fn from_samples(
        samples: &[(GridCoord, Point2)],
        origin: Point2,
        singular_eps: f32,
    ) -> Result<Self, GridError> {
        let mut mtm = Matrix2::<f32>::zeros();
        let mut mts = Matrix2::<f32>::zeros();
        for &(coord, center) in samples {
            let m = RowVector2::new(coord.x as f32, coord.y as f32);
            let s = RowVector2::new(center[0] - origin[0], center[1] - origin[1]);
            mtm += m.transpose() * m;
            mts += m.transpose() * s;
        }

        if mtm.determinant().abs() <= singular_eps {
            return Err(GridError::SingularFit);
        }
        let inv = mtm.try_inverse().ok_or(GridError::SingularFit)?;
        let coefficients = inv * mts;
        if coefficients.iter().any(|v| !v.is_finite()) {
            return Err(GridError::SingularFit);
        }

        let mut fit = Self {
            coefficients,
            origin,
            rms_residual: 0.0,
        };
        if !samples.is_empty() {
            let sum_sq: f32 = samples
                .iter()
                .map(|&(coord, center)| {
                    let p = fit.project(coord);
                    (p[0] - center[0]).powi(2) + (p[1] - center[1]).powi(2)
                })
                .sum();
            fit.rms_residual = (sum_sq / samples.len() as f32).sqrt();
        }
        Ok(fit)
    }

    /// Pixel offset of `coord` relative to the origin center.
    pub fn offset(&self, coord: GridCoord) -> Point2 {
        let p = RowVector2::new(coord.x as f32, coord.y as f32) * self.coefficients;
        [p[0], p[1]]
    }

    /// Pixel center of `coord`.
    pub fn project(&self, coord: GridCoord) -> Point2 {
        let d = self.offset(coord);
        [d[0] + self.origin[0], d[1] + self.origin[1]]
    }
}
