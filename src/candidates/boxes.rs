use crate::geometry::{polygon_area, polygon_centroid, polygon_perimeter};
use crate::types::Point2;
use serde::Serialize;

/// Default lower bound on `area / side_length²`.
pub const MIN_SQUARENESS: f32 = 0.8;

/// Validated near-square quadrilateral candidate for one grid cell.
///
/// Construction computes the derived measurements once; a box that is not
/// square enough is never built. Boxes are immutable and later stages only
/// discard them.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridBox {
    contour: [Point2; 4],
    center: Point2,
    side_length: f32,
    area: f32,
}

impl GridBox {
    /// Build a box from four ordered corners, rejecting it when
    /// `area / side_length²` falls below `min_squareness`.
    pub fn try_new(contour: [Point2; 4], min_squareness: f32) -> Option<Self> {
        let area = polygon_area(&contour);
        let side_length = polygon_perimeter(&contour) * 0.25;
        if !area.is_finite() || side_length <= 0.0 || !side_length.is_finite() {
            return None;
        }
        if area / (side_length * side_length) < min_squareness {
            return None;
        }
        Some(Self {
            contour,
            center: polygon_centroid(&contour),
            side_length,
            area,
        })
    }

    /// [`GridBox::try_new`] with the default squareness bound.
    pub fn from_quad(contour: [Point2; 4]) -> Option<Self> {
        Self::try_new(contour, MIN_SQUARENESS)
    }

    /// Axis-aligned square box, mostly useful for synthetic inputs.
    pub fn square(center: Point2, side: f32) -> Option<Self> {
        let h = side * 0.5;
        Self::from_quad([
            [center[0] - h, center[1] - h],
            [center[0] + h, center[1] - h],
            [center[0] + h, center[1] + h],
            [center[0] - h, center[1] + h],
        ])
    }

    pub fn contour(&self) -> &[Point2; 4] {
        &self.contour
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn side_length(&self) -> f32 {
        self.side_length
    }

    pub fn area(&self) -> f32 {
        self.area
    }

    pub fn squareness(&self) -> f32 {
        self.area / (self.side_length * self.side_length)
    }
}
