//! Detector pipeline orchestrating end-to-end grid reconstruction.
//!
//! Typical usage:
//! ```no_run
//! use sudoku_grid::{GridDetector, GridParams};
//! use sudoku_grid::types::Contour;
//!
//! # fn example(contours: Vec<Contour>) {
//! let detector = GridDetector::new(GridParams::default());
//! let report = detector.process_with_diagnostics(&contours);
//! if let Some(grid) = &report.grid {
//!     println!("cell length: {:.1}px", grid.cell_length);
//! }
//! # }
//! ```

// Stages
// - Candidates: contour → square boxes (`candidates::validate_contours`).
// - Consensus: drop boxes far from the mean side length.
// - Dedup: collapse boxes with near-coincident centers.
// - Resolve: ring search + re-anchoring (`grid::resolve_grid`).
// - Fit: least-squares grid → pixel map (`grid::AffineFit`).
// - Cells: 81 row-major regions (`grid::emit_cells`).

use super::params::GridParams;
use crate::candidates::{consensus_filter, dedup_boxes, validate_contours, GridBox};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{DedupStage, DetectionReport, FitStage, PipelineTrace, ResolveStage};
use crate::error::GridError;
use crate::grid::{emit_cells, resolve_grid, AffineFit};
use crate::types::{Contour, GridCells};
use log::debug;
use std::time::Instant;

/// Stateless grid detector; one instance can serve any number of frames.
#[derive(Clone, Debug, Default)]
pub struct GridDetector {
    params: GridParams,
}

impl GridDetector {
    pub fn new(params: GridParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &GridParams {
        &self.params
    }

    pub fn set_params(&mut self, params: GridParams) {
        self.params = params;
    }

    /// Reconstructs the grid from traced contours.
    pub fn process(&self, contours: &[Contour]) -> Result<GridCells, GridError> {
        self.process_with_diagnostics(contours).into_result()
    }

    /// Runs the pipeline on already validated boxes, skipping contour
    /// simplification. Box order matters: the first box is the origin.
    pub fn process_boxes(&self, boxes: Vec<GridBox>) -> Result<GridCells, GridError> {
        let mut trace = PipelineTrace::default();
        self.run_boxes(boxes, &mut trace)
    }

    /// Full pipeline plus a per-stage trace, for tooling and debugging.
    pub fn process_with_diagnostics(&self, contours: &[Contour]) -> DetectionReport {
        let total_start = Instant::now();
        debug!("GridDetector::process start contours={}", contours.len());

        let mut trace = PipelineTrace::default();
        let (boxes, stats) = trace
            .timings
            .time("candidates", || validate_contours(contours, &self.params.candidates));
        trace.candidates = Some(stats);

        let outcome = self.run_boxes(boxes, &mut trace);
        trace.timings.total_ms = elapsed_ms(total_start);

        match outcome {
            Ok(grid) => {
                debug!(
                    "GridDetector::process found length={:.2} matched={} total_ms={:.3}",
                    grid.cell_length, grid.matched_boxes, trace.timings.total_ms
                );
                DetectionReport {
                    grid: Some(grid),
                    error: None,
                    trace,
                }
            }
            Err(err) => {
                debug!(
                    "GridDetector::process failed: {err} total_ms={:.3}",
                    trace.timings.total_ms
                );
                DetectionReport {
                    grid: None,
                    error: Some(err),
                    trace,
                }
            }
        }
    }

    fn run_boxes(
        &self,
        boxes: Vec<GridBox>,
        trace: &mut PipelineTrace,
    ) -> Result<GridCells, GridError> {
        let params = &self.params;

        let (boxes, consensus) = trace.timings.time("consensus", || {
            consensus_filter(boxes, params.consensus.max_relative_deviation)
        })?;
        trace.consensus = Some(consensus);

        let input = boxes.len();
        let boxes = trace
            .timings
            .time("dedup", || dedup_boxes(boxes, params.dedup.min_center_distance));
        trace.dedup = Some(DedupStage {
            input,
            kept: boxes.len(),
        });

        let resolved = trace
            .timings
            .time("resolve", || resolve_grid(&boxes, &params.resolver));
        let resolution = match resolved {
            Ok(res) => res,
            Err(err) => {
                if let GridError::TopologyUnresolved {
                    matched,
                    anchors_tried,
                } = err
                {
                    trace.resolve = Some(ResolveStage {
                        anchors_tried,
                        matched,
                        extent: None,
                        length: None,
                    });
                }
                return Err(err);
            }
        };
        let extent = resolution.offsets.extent();
        trace.resolve = Some(ResolveStage {
            anchors_tried: resolution.anchors_tried,
            matched: resolution.offsets.len(),
            extent: Some(extent),
            length: Some(resolution.length),
        });

        let fit = trace.timings.time("fit", || {
            AffineFit::from_resolution(&boxes, &resolution, &params.fit)
        })?;
        trace.fit = Some(FitStage {
            coefficients: fit.coefficients,
            rms_residual: fit.rms_residual,
        });

        let cells = trace
            .timings
            .time("cells", || emit_cells(&fit, &extent, resolution.length));
        let half_width = cells.first().map_or(0, |c| c.size / 2);
        Ok(GridCells {
            cells,
            cell_length: resolution.length,
            half_width,
            affine: fit.coefficients,
            origin_center: fit.origin,
            min_offset: extent.min(),
            matched_boxes: resolution.offsets.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_contour(cx: f32, cy: f32, side: f32) -> Contour {
        let h = side * 0.5;
        vec![
            [cx - h, cy - h],
            [cx + h, cy - h],
            [cx + h, cy + h],
            [cx - h, cy + h],
        ]
    }

    #[test]
    fn empty_input_reports_no_candidates() {
        let report = GridDetector::default().process_with_diagnostics(&[]);
        assert!(!report.found());
        assert_eq!(report.error, Some(GridError::NoCandidates));
        assert_eq!(report.trace.candidates.as_ref().map(|c| c.contours), Some(0));
        assert!(report.trace.resolve.is_none());
    }

    #[test]
    fn full_grid_fills_every_trace_stage() {
        let contours: Vec<Contour> = (0..9)
            .flat_map(|r| {
                (0..9).map(move |c| {
                    square_contour(60.0 + 50.0 * c as f32, 40.0 + 50.0 * r as f32, 44.0)
                })
            })
            .collect();
        let report = GridDetector::default().process_with_diagnostics(&contours);
        let trace = &report.trace;
        // Every tolerance yields the same quad: 10 boxes per contour.
        assert_eq!(trace.candidates.as_ref().map(|c| c.accepted), Some(810));
        assert_eq!(trace.dedup.as_ref().map(|d| d.kept), Some(81));
        assert!(trace.fit.is_some());
        let labels: Vec<&str> = trace.timings.stages.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["candidates", "consensus", "dedup", "resolve", "fit", "cells"]);

        let grid = report.into_result().expect("grid");
        assert_eq!(grid.cells.len(), 81);
        assert_eq!(grid.half_width, 25);
        assert_eq!(grid.min_offset, crate::types::GridCoord::ORIGIN);
        let c = &grid.cells[80];
        assert!((c.center[0] - 460.0).abs() < 1e-2 && (c.center[1] - 440.0).abs() < 1e-2);
    }
}
