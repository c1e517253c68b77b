#![forbid(unsafe_code)]

use crate::Result;
use serde::Deserialize;

/// One rectangular space on a floor.
///
/// Room types are free-form strings produced by an upstream generator; they
/// are deliberately not an enum (compound or unseen values like
/// `"kitchen_dining"` must survive deserialization untouched).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Room {
    #[serde(rename = "type")]
    pub room_type: String,
    pub name: String,
    /// Meters. Must be positive for meaningful output; zero/negative values
    /// render degenerately instead of erroring.
    pub width: f64,
    /// Meters.
    pub depth: f64,
    /// Authoritative for display when present (irregular rooms); geometry
    /// always uses `width * depth`.
    #[serde(default)]
    pub area: Option<f64>,
    /// Top-left origin in meters. Positions are only trusted when every room
    /// on the floor has both coordinates.
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub floor: i32,
    /// Free-text features, shown only in tabular views outside this engine.
    #[serde(default)]
    pub features: Vec<String>,
}

impl Room {
    /// The area figure shown in labels and summaries.
    pub fn display_area(&self) -> f64 {
        self.area.unwrap_or(self.width * self.depth)
    }

    pub fn has_position(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }

    /// Rooms with non-finite or non-positive dimensions still get placed and
    /// filled, but furniture and labels are skipped for them.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.depth.is_finite() && self.width > 0.0 && self.depth > 0.0)
    }
}

/// Aggregate figures for the title block and side panels. All optional;
/// upstream may omit the whole block.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct PlanSummary {
    #[serde(default, alias = "totalArea")]
    pub total_area: Option<f64>,
    #[serde(default, alias = "livingArea")]
    pub living_area: Option<f64>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
}

/// One renderable plan, typically deserialized from the JSON blob stored
/// alongside a generated floor plan. Read-only input: every draw derives a
/// fresh positioned-room list and never mutates the document.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct FloorPlanDocument {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default, alias = "totalArea")]
    pub total_area: Option<f64>,
    #[serde(default)]
    pub summary: Option<PlanSummary>,
    #[serde(default, alias = "designName")]
    pub design_name: Option<String>,
    #[serde(default, alias = "variantName")]
    pub variant_name: Option<String>,
}

impl FloorPlanDocument {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Display title for the title block: design name, then variant name.
    pub fn display_name(&self) -> Option<&str> {
        self.design_name
            .as_deref()
            .or(self.variant_name.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Sorted distinct floor indices present in the document.
    pub fn floors(&self) -> Vec<i32> {
        let mut floors: Vec<i32> = self.rooms.iter().map(|r| r.floor).collect();
        floors.sort_unstable();
        floors.dedup();
        floors
    }

    pub fn rooms_on(&self, floor: i32) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(move |r| r.floor == floor)
    }

    /// Sum of display areas for one floor (title block figure).
    pub fn floor_area(&self, floor: i32) -> f64 {
        self.rooms_on(floor)
            .map(Room::display_area)
            .filter(|a| a.is_finite())
            .sum()
    }
}
