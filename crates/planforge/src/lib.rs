#![forbid(unsafe_code)]

//! `planforge` is a headless floor-plan rendering engine.
//!
//! It consumes a floor-plan document produced by an upstream generator,
//! resolves a deterministic room layout, styles rooms by semantic type, and
//! draws an annotated architectural diagram. The document is treated as
//! read-only input; the engine never fetches data, persists anything, or
//! validates business rules beyond basic geometry.
//!
//! # Features
//!
//! - `render`: enable layout + SVG rendering (`planforge::render`)
//! - `raster`: enable PNG/JPG output via pure-Rust SVG rasterization

pub use planforge_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use planforge_render::furniture::draw_furniture;
    pub use planforge_render::svg::floor_label;
    pub use planforge_render::text::{DeterministicTextMeasurer, TextMeasurer, TextStyle};
    pub use planforge_render::view::{
        Surface, SurfaceMode, ViewState, Viewport, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP,
    };
    pub use planforge_render::{FloorLayout, layout_floor, render_floor_svg};

    #[cfg(feature = "raster")]
    pub mod raster;

    /// One-shot SVG render with the default deterministic text measurer.
    pub fn render_svg(
        doc: &planforge_core::FloorPlanDocument,
        state: &ViewState,
        surface: Surface,
    ) -> String {
        render_floor_svg(doc, state, surface, &DeterministicTextMeasurer::default())
    }
}
