//! Contour → [`GridBox`] conversion.
//!
//! Every contour with enough area is re-approximated at integer tolerances
//! `0..=max_epsilon`; each tolerance applies the closed Douglas–Peucker pass
//! twice. Every attempt that lands on exactly four vertices and passes the
//! squareness gate yields a box, so one contour can produce several nearly
//! identical boxes. Collapsing them is left to [`dedup_boxes`](super::dedup_boxes).

use super::boxes::GridBox;
use crate::detector::params::CandidateParams;
use crate::geometry::{approx_poly_closed, polygon_area};
use crate::types::{Contour, Point2};
use log::debug;
use serde::Serialize;

/// Counters describing one validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateStats {
    pub contours: usize,
    pub too_small: usize,
    /// Contours that never simplified to a quadrilateral.
    pub not_quadrilateral: usize,
    /// Four-vertex attempts rejected by the squareness gate.
    pub not_square: usize,
    pub accepted: usize,
}

pub fn validate_contours(
    contours: &[Contour],
    params: &CandidateParams,
) -> (Vec<GridBox>, CandidateStats) {
    let mut stats = CandidateStats {
        contours: contours.len(),
        ..Default::default()
    };
    let mut boxes = Vec::new();

    for contour in contours {
        if polygon_area(contour) < params.min_area {
            stats.too_small += 1;
            continue;
        }

        let mut saw_quad = false;
        for epsilon in 0..=params.max_epsilon {
            let eps = epsilon as f32;
            let once = approx_poly_closed(contour, eps);
            let poly = approx_poly_closed(&once, eps);
            let Some(quad) = as_quad(&poly) else {
                continue;
            };
            saw_quad = true;
            match GridBox::try_new(quad, params.min_squareness) {
                Some(b) => boxes.push(b),
                None => stats.not_square += 1,
            }
        }
        if !saw_quad {
            stats.not_quadrilateral += 1;
        }
    }

    stats.accepted = boxes.len();
    debug!(
        "validate_contours contours={} too_small={} not_quad={} not_square={} accepted={}",
        stats.contours, stats.too_small, stats.not_quadrilateral, stats.not_square, stats.accepted
    );
    (boxes, stats)
}

fn as_quad(poly: &[Point2]) -> Option<[Point2; 4]> {
    match poly {
        [a, b, c, d] => Some([*a, *b, *c, *d]),
        _ => None,
    }
}
