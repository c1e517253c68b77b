#![forbid(unsafe_code)]

//! Floor-plan document model + deterministic leaf logic (headless).
//!
//! Design goals:
//! - tolerate upstream documents with any optional field absent
//! - deterministic, testable outputs (same input, same placement)
//! - degrade instead of fail: unknown room types get neutral styling,
//!   degenerate geometry renders degenerately rather than erroring

pub mod error;
pub mod geom;
pub mod layout;
pub mod model;
pub mod style;

pub use error::{Error, Result};
pub use layout::{LayoutParams, PlacedRoom};
pub use model::{FloorPlanDocument, PlanSummary, Room};
pub use style::{FurnitureKind, RoomStyle};

#[cfg(test)]
mod tests;
