#![forbid(unsafe_code)]

use crate::view::{Surface, ViewState};
use planforge_core::geom::{Bounds, Rect, rect};
use planforge_core::layout::{self, LayoutParams, PlacedRoom};
use planforge_core::model::{FloorPlanDocument, Room};

/// Breathing room inside the fitted bounding box.
const MARGIN_FACTOR: f64 = 0.9;
const PADDING_PX: f64 = 40.0;
const COMPACT_PADDING_PX: f64 = 16.0;

/// Derived render state for one floor: the filtered rooms, their resolved
/// placements, and the meters→pixels mapping for the current surface and
/// view. Rebuilt from scratch on every draw and thrown away afterwards.
#[derive(Debug, Clone)]
pub struct FloorLayout {
    pub rooms: Vec<Room>,
    pub placed: Vec<PlacedRoom>,
    /// Bounding box over the placements, in meters.
    pub bounds: Bounds,
    pub px_per_m: f64,
    origin_x: f64,
    origin_y: f64,
}

impl FloorLayout {
    /// Meter coordinates to surface pixels.
    pub fn to_px(&self, mx: f64, my: f64) -> (f64, f64) {
        (
            self.origin_x + mx * self.px_per_m,
            self.origin_y + my * self.px_per_m,
        )
    }

    /// On-screen rectangle for one placement.
    pub fn room_rect_px(&self, p: &PlacedRoom) -> Rect {
        let (x, y) = self.to_px(p.x, p.y);
        rect(x, y, p.width * self.px_per_m, p.depth * self.px_per_m)
    }
}

/// Filters the document to one floor, resolves placements, and fits the
/// result to the surface. Returns `None` when the floor has no rooms.
pub fn layout_floor(
    doc: &FloorPlanDocument,
    state: &ViewState,
    surface: Surface,
) -> Option<FloorLayout> {
    let rooms: Vec<Room> = doc.rooms_on(state.floor).cloned().collect();
    if rooms.is_empty() {
        return None;
    }
    if layout::needs_layout(&rooms) {
        tracing::debug!(
            floor = state.floor,
            rooms = rooms.len(),
            "no trusted coordinates; shelf-packing floor"
        );
    }
    let placed = layout::resolve(&rooms, &LayoutParams::default());

    let mut bounds = Bounds::empty();
    for p in &placed {
        bounds.include_rect(p.x, p.y, p.width, p.depth);
    }
    // Degenerate documents (all rooms zero-sized) still get a usable mapping.
    let bw = if bounds.width() > 0.0 { bounds.width() } else { 1.0 };
    let bh = if bounds.height() > 0.0 { bounds.height() } else { 1.0 };

    let w = surface.width as f64;
    let h = surface.height as f64;
    let pad = if surface.is_compact() {
        COMPACT_PADDING_PX
    } else {
        PADDING_PX
    };
    let avail_w = (w - 2.0 * pad).max(1.0);
    let avail_h = (h - 2.0 * pad).max(1.0);

    let px_per_m = (avail_w / bw).min(avail_h / bh) * state.zoom * MARGIN_FACTOR;
    let origin_x = (w - bw * px_per_m) / 2.0 - bounds.min_x * px_per_m + state.pan_x;
    let origin_y = (h - bh * px_per_m) / 2.0 - bounds.min_y * px_per_m + state.pan_y;

    Some(FloorLayout {
        rooms,
        placed,
        bounds,
        px_per_m,
        origin_x,
        origin_y,
    })
}
