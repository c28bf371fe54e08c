//! Planar polygon helpers used by candidate validation.
//!
//! All polygons are treated as closed: the last vertex connects back to the
//! first one. Measurements go through `geo`; simplification snaps vertices to
//! whole pixels and runs `imageproc`'s Douglas–Peucker on two open chains.

use crate::types::Point2;
use geo::{Area, Centroid, Coord, EuclideanLength, LineString, Polygon};
use imageproc::geometry::approximate_polygon_dp;
use imageproc::point::Point;

/// `approximate_polygon_dp` rejects a zero tolerance; on integer vertices
/// this bound drops exactly the collinear ones.
const MIN_DP_EPSILON: f64 = 1e-9;

/// Farthest-vertex jumps used to pick the chord a closed curve is cut along.
const CHORD_ITERATIONS: usize = 3;

#[inline]
pub fn distance(a: Point2, b: Point2) -> f32 {
    (a[0] - b[0]).hypot(a[1] - b[1])
}

fn to_polygon(points: &[Point2]) -> Polygon<f64> {
    let ring: Vec<Coord<f64>> = points
        .iter()
        .map(|p| Coord {
            x: f64::from(p[0]),
            y: f64::from(p[1]),
        })
        .collect();
    Polygon::new(LineString::from(ring), vec![])
}

pub fn polygon_area(points: &[Point2]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    to_polygon(points).unsigned_area() as f32
}

pub fn polygon_perimeter(points: &[Point2]) -> f32 {
    if points.len() < 2 {
        return 0.0;
    }
    to_polygon(points).exterior().euclidean_length() as f32
}

/// Area centroid of the polygon. Zero-area input falls back to the centroid
/// of its outline.
pub fn polygon_centroid(points: &[Point2]) -> Point2 {
    to_polygon(points)
        .centroid()
        .map_or([0.0, 0.0], |c| [c.x() as f32, c.y() as f32])
}

/// Douglas–Peucker simplification of a closed polygon.
///
/// The curve is cut along a chord found by jumping to the farthest vertex
/// three times, starting from vertex 1; the last jump gives the chord ends.
/// Both halves are simplified as open chains. A vertex survives when its
/// distance to the current chord is strictly greater than `epsilon`. A curve
/// whose vertices all lie within `epsilon` of each other collapses to one
/// point.
pub fn approx_poly_closed(points: &[Point2], epsilon: f32) -> Vec<Point2> {
    let pixels: Vec<Point<i32>> = points
        .iter()
        .map(|p| Point::new(p[0].round() as i32, p[1].round() as i32))
        .collect();
    if pixels.len() < 3 {
        return pixels.iter().map(to_point2).collect();
    }
    let (start, end) = match cut_chord(&pixels, epsilon) {
        Ok(chord) => chord,
        Err(anchor) => return vec![to_point2(&pixels[anchor])],
    };

    let eps = f64::from(epsilon).max(MIN_DP_EPSILON);
    let first = approximate_polygon_dp(&wrapped_chain(&pixels, start, end), eps, false);
    let second = approximate_polygon_dp(&wrapped_chain(&pixels, end, start), eps, false);

    // `second` starts at `end` and finishes at `start`, both already in `first`
    let tail = &second[1..second.len().saturating_sub(1)];
    first.iter().chain(tail).map(to_point2).collect()
}

fn to_point2(p: &Point<i32>) -> Point2 {
    [p.x as f32, p.y as f32]
}

/// Vertices `from..=to`, wrapping past the last one.
fn wrapped_chain(pixels: &[Point<i32>], from: usize, to: usize) -> Vec<Point<i32>> {
    let n = pixels.len();
    let len = (to + n - from) % n + 1;
    (0..len).map(|k| pixels[(from + k) % n]).collect()
}

/// Chord ends, or the last anchor when every vertex lies within `epsilon`
/// of it.
fn cut_chord(pixels: &[Point<i32>], epsilon: f32) -> Result<(usize, usize), usize> {
    let n = pixels.len();
    let eps_sq = f64::from(epsilon) * f64::from(epsilon);
    let mut anchor = 1 % n;
    let mut far = anchor;
    for _ in 0..CHORD_ITERATIONS {
        anchor = far;
        let a = pixels[anchor];
        let mut max_sq = 0i64;
        for j in 1..n {
            let idx = (anchor + j) % n;
            let dx = i64::from(pixels[idx].x - a.x);
            let dy = i64::from(pixels[idx].y - a.y);
            let d_sq = dx * dx + dy * dy;
            if d_sq > max_sq {
                max_sq = d_sq;
                far = idx;
            }
        }
        if max_sq as f64 <= eps_sq {
            return Err(anchor);
        }
    }
    Ok((anchor, far))
}
