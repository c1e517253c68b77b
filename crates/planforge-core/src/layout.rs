#![forbid(unsafe_code)]

use crate::model::Room;

/// Default shelf width in meters. Fixed regardless of document size; the
/// resolver is a stable fallback for geometry-less upstream data, not a
/// layout optimizer.
pub const MAX_ROW_WIDTH_M: f64 = 15.0;

/// Inter-room spacing in meters.
pub const ROOM_GAP_M: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub max_row_width: f64,
    pub gap: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            max_row_width: MAX_ROW_WIDTH_M,
            gap: ROOM_GAP_M,
        }
    }
}

/// A room with its origin resolved, in input order. Derived render state;
/// rebuilt on every draw and never written back to the document.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRoom {
    /// Index into the room slice this placement was resolved from.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub depth: f64,
    /// Display area (explicit `area` when present, else `width * depth`).
    pub area: f64,
}

/// True when any room lacks a coordinate. Partial coordinate sets are not
/// trusted: one missing value re-lays-out the whole floor.
pub fn needs_layout(rooms: &[Room]) -> bool {
    rooms.iter().any(|r| !r.has_position())
}

/// Resolves an origin for every room.
///
/// When every room already has `x` and `y` the externally authored layout is
/// passed through verbatim. Otherwise all rooms are shelf-packed
/// left-to-right, top-to-bottom, in input order, single pass, no
/// backtracking. The first room on a row is never wrapped even when wider
/// than the shelf, so oversized rooms cannot loop.
pub fn resolve(rooms: &[Room], params: &LayoutParams) -> Vec<PlacedRoom> {
    if !needs_layout(rooms) {
        return rooms
            .iter()
            .enumerate()
            .map(|(index, r)| PlacedRoom {
                index,
                x: r.x.unwrap_or(0.0),
                y: r.y.unwrap_or(0.0),
                width: r.width,
                depth: r.depth,
                area: r.display_area(),
            })
            .collect();
    }

    let mut out = Vec::with_capacity(rooms.len());
    let mut cur_x = 0.0_f64;
    let mut cur_y = 0.0_f64;
    let mut row_height = 0.0_f64;

    for (index, room) in rooms.iter().enumerate() {
        let width = if room.width.is_finite() { room.width.max(0.0) } else { 0.0 };
        let depth = if room.depth.is_finite() { room.depth.max(0.0) } else { 0.0 };

        if cur_x + width > params.max_row_width && cur_x > 0.0 {
            cur_x = 0.0;
            cur_y += row_height + params.gap;
            row_height = 0.0;
        }

        out.push(PlacedRoom {
            index,
            x: cur_x,
            y: cur_y,
            width,
            depth,
            area: room.display_area(),
        });

        cur_x += width + params.gap;
        row_height = row_height.max(depth);
    }

    out
}
