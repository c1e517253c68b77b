#![forbid(unsafe_code)]

use crate::svg::render_floor_svg;
use crate::text::{DeterministicTextMeasurer, TextMeasurer};
use planforge_core::FloorPlanDocument;
use std::sync::Arc;

pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 3.0;
/// Wheel/button zoom step; three steps in from 1.0 lands on 1.728.
pub const ZOOM_STEP: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceMode {
    /// Reduced-detail preview: dark background, no grid, no furniture,
    /// no scale bar/title block.
    Compact,
    Interactive,
}

/// Fixed-size drawing surface. The rendered SVG carries these exact pixel
/// dimensions, so rasterizing at scale 1.0 reproduces the surface contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
    pub mode: SurfaceMode,
}

impl Surface {
    pub fn compact() -> Self {
        Self {
            width: 420,
            height: 320,
            mode: SurfaceMode::Compact,
        }
    }

    pub fn interactive() -> Self {
        Self {
            width: 900,
            height: 640,
            mode: SurfaceMode::Interactive,
        }
    }

    pub fn is_compact(&self) -> bool {
        self.mode == SurfaceMode::Compact
    }
}

/// Externally-owned view state: zoom, pan, floor selection and the
/// visibility toggles. Zoom is clamped to `[ZOOM_MIN, ZOOM_MAX]` on every
/// change; pan is in surface pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub floor: i32,
    pub show_furniture: bool,
    pub show_grid: bool,
    pub show_dimensions: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            floor: 0,
            show_furniture: true,
            show_grid: true,
            show_dimensions: false,
        }
    }
}

impl ViewState {
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = if zoom.is_finite() {
            zoom.clamp(ZOOM_MIN, ZOOM_MAX)
        } else {
            1.0
        };
    }

    /// Zoom back to 1.0 and drop any pan offset.
    pub fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Accumulates a pointer-drag delta in surface pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }
}

/// Owns a document plus view state and re-renders on demand. Interaction is
/// single-threaded and cooperative: the owner mutates state through the
/// setters below, then calls [`Viewport::redraw`]. Every call is a full,
/// idempotent re-render; nothing is cached between calls.
pub struct Viewport {
    document: FloorPlanDocument,
    surface: Surface,
    state: ViewState,
    measurer: Arc<dyn TextMeasurer + Send + Sync>,
}

impl Viewport {
    pub fn new(document: FloorPlanDocument, surface: Surface) -> Self {
        Self {
            document,
            surface,
            state: ViewState::default(),
            measurer: Arc::new(DeterministicTextMeasurer::default()),
        }
    }

    pub fn with_measurer(mut self, measurer: Arc<dyn TextMeasurer + Send + Sync>) -> Self {
        self.measurer = measurer;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn set_document(&mut self, document: FloorPlanDocument) {
        self.document = document;
    }

    pub fn zoom_in(&mut self) {
        self.state.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.state.zoom_out();
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.state.set_zoom(zoom);
    }

    pub fn reset_view(&mut self) {
        self.state.reset_view();
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.state.pan_by(dx, dy);
    }

    pub fn set_floor(&mut self, floor: i32) {
        self.state.floor = floor;
    }

    pub fn set_show_furniture(&mut self, on: bool) {
        self.state.show_furniture = on;
    }

    pub fn set_show_grid(&mut self, on: bool) {
        self.state.show_grid = on;
    }

    pub fn set_show_dimensions(&mut self, on: bool) {
        self.state.show_dimensions = on;
    }

    /// Full re-render of the current floor with the current view state.
    pub fn redraw(&self) -> String {
        render_floor_svg(
            &self.document,
            &self.state,
            self.surface,
            self.measurer.as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_stays_clamped_for_any_sequence() {
        let mut v = ViewState::default();
        for _ in 0..50 {
            v.zoom_in();
            assert!(v.zoom >= ZOOM_MIN && v.zoom <= ZOOM_MAX);
        }
        assert_eq!(v.zoom, ZOOM_MAX);
        for _ in 0..80 {
            v.zoom_out();
            assert!(v.zoom >= ZOOM_MIN && v.zoom <= ZOOM_MAX);
        }
        assert_eq!(v.zoom, ZOOM_MIN);
        v.set_zoom(f64::NAN);
        assert_eq!(v.zoom, 1.0);
        v.set_zoom(100.0);
        assert_eq!(v.zoom, ZOOM_MAX);
    }

    #[test]
    fn three_zoom_in_steps_reach_1_728() {
        let mut v = ViewState::default();
        v.zoom_in();
        v.zoom_in();
        v.zoom_in();
        assert!((v.zoom - 1.728).abs() < 1e-9);
    }

    #[test]
    fn reset_view_restores_zoom_and_pan() {
        let mut v = ViewState::default();
        v.zoom_in();
        v.pan_by(40.0, -12.5);
        v.pan_by(2.0, 2.0);
        assert_eq!((v.pan_x, v.pan_y), (42.0, -10.5));
        v.reset_view();
        assert_eq!(v.zoom, 1.0);
        assert_eq!((v.pan_x, v.pan_y), (0.0, 0.0));
    }
}
