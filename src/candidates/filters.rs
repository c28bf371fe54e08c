//! Size-consensus and proximity filters over validated boxes.
//!
//! True grid cells are near-uniform in size, so the mean side length of the
//! candidate set is a usable reference even when a minority of spurious
//! quadrilaterals are present.

use super::boxes::GridBox;
use crate::error::GridError;
use crate::geometry::distance;
use log::debug;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusStats {
    pub input: usize,
    pub kept: usize,
    pub mean_side_length: f32,
}

/// Removes boxes whose `|side / mean - 1|` exceeds `max_relative_deviation`.
///
/// An empty input (or a set where nobody agrees with the mean) leaves nothing
/// to calibrate against and is reported as [`GridError::NoCandidates`].
pub fn consensus_filter(
    boxes: Vec<GridBox>,
    max_relative_deviation: f32,
) -> Result<(Vec<GridBox>, ConsensusStats), GridError> {
    if boxes.is_empty() {
        return Err(GridError::NoCandidates);
    }
    let input = boxes.len();
    let mean = boxes.iter().map(GridBox::side_length).sum::<f32>() / input as f32;

    let kept: Vec<GridBox> = boxes
        .into_iter()
        .filter(|b| (b.side_length() / mean - 1.0).abs() <= max_relative_deviation)
        .collect();
    debug!(
        "consensus_filter input={} kept={} mean_side={:.2}",
        input,
        kept.len(),
        mean
    );
    if kept.is_empty() {
        return Err(GridError::NoCandidates);
    }
    let stats = ConsensusStats {
        input,
        kept: kept.len(),
        mean_side_length: mean,
    };
    Ok((kept, stats))
}

/// Collapses boxes whose centers lie closer than `min_center_distance`,
/// keeping the earlier box of each pair.
pub fn dedup_boxes(boxes: Vec<GridBox>, min_center_distance: f32) -> Vec<GridBox> {
    let input = boxes.len();
    let mut kept: Vec<GridBox> = Vec::with_capacity(boxes.len());
    for b in boxes {
        let duplicate = kept
            .iter()
            .any(|k| distance(k.center(), b.center()) < min_center_distance);
        if !duplicate {
            kept.push(b);
        }
    }
    debug!("dedup_boxes input={} kept={}", input, kept.len());
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(x: f32, y: f32, side: f32) -> GridBox {
        GridBox::square([x, y], side).expect("valid square")
    }

    #[test]
    fn consensus_drops_oversized_box() {
        let mut boxes: Vec<GridBox> = (0..10).map(|i| sq(50.0 * i as f32, 0.0, 45.0)).collect();
        boxes.push(sq(300.0, 300.0, 135.0));
        let (kept, stats) = consensus_filter(boxes, 0.3).expect("majority survives");
        assert_eq!(kept.len(), 10);
        assert_eq!(stats.input, 11);
        assert!(kept.iter().all(|b| b.side_length() < 100.0));
        assert!((stats.mean_side_length - (45.0 * 10.0 + 135.0) / 11.0).abs() < 1e-3);
    }

    #[test]
    fn consensus_on_empty_set_fails() {
        assert_eq!(
            consensus_filter(Vec::new(), 0.3).unwrap_err(),
            GridError::NoCandidates
        );
    }

    #[test]
    fn consensus_with_no_agreement_fails() {
        let boxes = vec![sq(0.0, 0.0, 20.0), sq(200.0, 0.0, 100.0)];
        assert_eq!(
            consensus_filter(boxes, 0.3).unwrap_err(),
            GridError::NoCandidates
        );
    }

    #[test]
    fn dedup_keeps_first_of_close_pair() {
        let boxes = vec![
            sq(10.0, 10.0, 40.0),
            sq(11.0, 10.0, 41.0),
            sq(60.0, 10.0, 40.0),
        ];
        let kept = dedup_boxes(boxes, 3.0);
        assert_eq!(kept.len(), 2);
        assert!((kept[0].side_length() - 40.0).abs() < 1e-4);
        assert!((kept[1].center()[0] - 60.0).abs() < 1e-4);
    }

    #[test]
    fn dedup_leaves_distinct_boxes() {
        let boxes = vec![sq(0.0, 0.0, 40.0), sq(3.5, 0.0, 40.0)];
        assert_eq!(dedup_boxes(boxes, 3.0).len(), 2);
    }
}
