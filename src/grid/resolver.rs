//! Grid topology resolution by ring search with re-anchoring.
//!
//! Overview
//! - The first box is the origin and receives coordinate `(0, 0)`. The cell
//!   length estimate starts at `initial_length_scale × origin.side_length`.
//! - An anchor sweep visits rings `1..=max_ring` around the anchor. For every
//!   offset whose absolute coordinate is still free, the expected pixel
//!   position `anchor.center + (dx, dy) · length` is compared against all
//!   unassigned boxes; the closest one passing [`MatchTolerance`] takes the
//!   coordinate and the length is re-estimated as
//!   `|box.center - anchor.center| / |(dx, dy)|`.
//! - After each sweep the extent of assigned coordinates is checked. A 9×9
//!   span is success.
//! - Otherwise the boxes matched by the sweep become anchor candidates on a
//!   LIFO worklist (most recently matched first), sharing the offset table and
//!   the length estimate. A box is never an anchor twice, so the number of
//!   sweeps is bounded by the number of boxes.
//!
//! Boxes are addressed by [`BoxId`], their index in the slice handed to
//! [`resolve_grid`]; the table is keyed by that handle rather than by value.
//!
//! [`MatchTolerance`]: crate::detector::params::MatchTolerance

use super::ring::ring_offsets;
use crate::candidates::GridBox;
use crate::detector::params::ResolverParams;
use crate::error::GridError;
use crate::geometry::distance;
use crate::types::{GridCoord, GRID_DIM};
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// Stable handle of a box: its index in the resolved slice.
pub type BoxId = usize;

const FULL_SPAN: i32 = GRID_DIM as i32 - 1;

/// Bounding range of assigned grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridExtent {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl GridExtent {
    fn at(coord: GridCoord) -> Self {
        Self {
            min_x: coord.x,
            max_x: coord.x,
            min_y: coord.y,
            max_y: coord.y,
        }
    }

    fn include(&mut self, coord: GridCoord) {
        self.min_x = self.min_x.min(coord.x);
        self.max_x = self.max_x.max(coord.x);
        self.min_y = self.min_y.min(coord.y);
        self.max_y = self.max_y.max(coord.y);
    }

    pub fn span_x(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn span_y(&self) -> i32 {
        self.max_y - self.min_y
    }

    /// Exactly a 9×9 span.
    pub fn is_full_grid(&self) -> bool {
        self.span_x() == FULL_SPAN && self.span_y() == FULL_SPAN
    }

    /// Extents only grow, so a span past 9 can never become a full grid.
    pub fn overflows(&self) -> bool {
        self.span_x() > FULL_SPAN || self.span_y() > FULL_SPAN
    }

    pub fn min(&self) -> GridCoord {
        GridCoord::new(self.min_x, self.min_y)
    }
}

/// Box → coordinate assignments. Keys are unique and never revised.
#[derive(Clone, Debug)]
pub struct OffsetTable {
    by_box: Vec<Option<GridCoord>>,
    by_coord: HashMap<GridCoord, BoxId>,
    order: Vec<BoxId>,
    extent: GridExtent,
}

impl OffsetTable {
    fn new(box_count: usize, origin: BoxId) -> Self {
        let mut table = Self {
            by_box: vec![None; box_count],
            by_coord: HashMap::new(),
            order: Vec::new(),
            extent: GridExtent::at(GridCoord::ORIGIN),
        };
        table.assign(origin, GridCoord::ORIGIN);
        table
    }

    fn assign(&mut self, id: BoxId, coord: GridCoord) {
        self.by_box[id] = Some(coord);
        self.by_coord.insert(coord, id);
        self.order.push(id);
        self.extent.include(coord);
    }

    pub fn coord_of(&self, id: BoxId) -> Option<GridCoord> {
        self.by_box.get(id).copied().flatten()
    }

    pub fn box_at(&self, coord: GridCoord) -> Option<BoxId> {
        self.by_coord.get(&coord).copied()
    }

    pub fn is_assigned(&self, id: BoxId) -> bool {
        self.coord_of(id).is_some()
    }

    /// Assignments in the order they were made, origin first.
    pub fn iter(&self) -> impl Iterator<Item = (BoxId, GridCoord)> + '_ {
        self.order
            .iter()
            .filter_map(move |&id| self.coord_of(id).map(|c| (id, c)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn extent(&self) -> GridExtent {
        self.extent
    }
}

/// Outcome of a successful resolution.
#[derive(Clone, Debug)]
pub struct Resolution {
    pub origin: BoxId,
    pub offsets: OffsetTable,
    /// Final cell-length estimate in pixels.
    pub length: f32,
    pub anchors_tried: usize,
}

/// Assigns grid coordinates to `boxes`, using `boxes[0]` as the origin.
pub fn resolve_grid(boxes: &[GridBox], params: &ResolverParams) -> Result<Resolution, GridError> {
    let origin: BoxId = 0;
    let Some(origin_box) = boxes.first() else {
        return Err(GridError::NoCandidates);
    };

    let mut resolver = Resolver {
        boxes,
        params,
        rings: (1..=params.max_ring).map(ring_offsets).collect(),
        offsets: OffsetTable::new(boxes.len(), origin),
        length: origin_box.side_length() * params.initial_length_scale,
    };
    debug!(
        "resolve_grid boxes={} origin_center=({:.1},{:.1}) length0={:.2}",
        boxes.len(),
        origin_box.center()[0],
        origin_box.center()[1],
        resolver.length
    );

    let mut worklist: Vec<BoxId> = vec![origin];
    let mut anchors_tried = 0usize;
    while let Some(anchor) = worklist.pop() {
        anchors_tried += 1;
        let matched = resolver.sweep(anchor);
        let extent = resolver.offsets.extent();
        debug!(
            "anchor #{} box={} matched={} total={} extent=x[{},{}] y[{},{}] length={:.2}",
            anchors_tried,
            anchor,
            matched.len(),
            resolver.offsets.len(),
            extent.min_x,
            extent.max_x,
            extent.min_y,
            extent.max_y,
            resolver.length
        );
        if extent.is_full_grid() {
            return Ok(Resolution {
                origin,
                offsets: resolver.offsets,
                length: resolver.length,
                anchors_tried,
            });
        }
        if extent.overflows() {
            debug!("resolve_grid extent exceeds a 9x9 span; giving up");
            break;
        }
        worklist.extend(matched);
    }

    Err(GridError::TopologyUnresolved {
        matched: resolver.offsets.len(),
        anchors_tried,
    })
}

struct Resolver<'a> {
    boxes: &'a [GridBox],
    params: &'a ResolverParams,
    rings: Vec<Vec<(i32, i32)>>,
    offsets: OffsetTable,
    length: f32,
}

impl Resolver<'_> {
    /// One full ring sweep around `anchor`; returns boxes matched, in order.
    fn sweep(&mut self, anchor: BoxId) -> Vec<BoxId> {
        let mut matched = Vec::new();
        let Some(anchor_coord) = self.offsets.coord_of(anchor) else {
            return matched;
        };
        let anchor_center = self.boxes[anchor].center();

        for ring in &self.rings {
            for &(dx, dy) in ring {
                let target = anchor_coord.offset(dx, dy);
                if self.offsets.box_at(target).is_some() {
                    continue;
                }
                let offset_norm = (dx as f32).hypot(dy as f32);
                let expected = [
                    anchor_center[0] + dx as f32 * self.length,
                    anchor_center[1] + dy as f32 * self.length,
                ];
                let Some(id) = self.closest_candidate(expected, offset_norm) else {
                    continue;
                };
                self.offsets.assign(id, target);
                matched.push(id);
                self.length = distance(self.boxes[id].center(), anchor_center) / offset_norm;
            }
        }
        matched
    }

    fn closest_candidate(&self, expected: [f32; 2], offset_norm: f32) -> Option<BoxId> {
        let tolerance = &self.params.tolerance;
        let mut best: Option<(BoxId, f32)> = None;
        for (id, b) in self.boxes.iter().enumerate() {
            if self.offsets.is_assigned(id) {
                continue;
            }
            let error = distance(b.center(), expected);
            if !tolerance.accepts(error, self.length, offset_norm) {
                continue;
            }
            if best.map_or(true, |(_, e)| error < e) {
                best = Some((id, error));
            }
        }
        best.map(|(id, _)| id)
    }
}
