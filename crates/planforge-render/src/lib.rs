#![forbid(unsafe_code)]

//! Headless floor-plan rendering.
//!
//! The pipeline is a pure function of its inputs: a read-only
//! [`FloorPlanDocument`](planforge_core::FloorPlanDocument), a
//! [`ViewState`](view::ViewState) and a [`Surface`](view::Surface) in, one
//! SVG string out. There is no error path: the engine degrades (neutral
//! styles, skipped furniture/labels, placeholder messages) instead of
//! failing, so rendering is infallible by design.

pub mod furniture;
pub mod model;
pub mod svg;
pub mod text;
pub mod view;

pub use model::{FloorLayout, layout_floor};
pub use svg::render_floor_svg;
pub use text::{DeterministicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};
pub use view::{Surface, SurfaceMode, ViewState, Viewport};
