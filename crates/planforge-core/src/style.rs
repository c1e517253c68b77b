#![forbid(unsafe_code)]

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Fill/stroke colors for one room type, plus the fill used on the dark
/// compact-preview background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub dark_fill: &'static str,
}

/// Neutral fallback for room types the table has never seen.
pub const DEFAULT_STYLE: RoomStyle = RoomStyle {
    fill: "#f5f5f5",
    stroke: "#9e9e9e",
    dark_fill: "#2f3146",
};

const fn style(fill: &'static str, stroke: &'static str, dark_fill: &'static str) -> RoomStyle {
    RoomStyle {
        fill,
        stroke,
        dark_fill,
    }
}

fn style_table() -> &'static FxHashMap<&'static str, RoomStyle> {
    static TABLE: OnceLock<FxHashMap<&'static str, RoomStyle>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let entries: &[(&str, RoomStyle)] = &[
            ("bedroom", style("#e3f2fd", "#1976d2", "#24364d")),
            ("master_bedroom", style("#e1f0fb", "#1565c0", "#223449")),
            ("living", style("#fff3e0", "#f57c00", "#4a3828")),
            ("lounge", style("#fff3e0", "#f57c00", "#4a3828")),
            ("family", style("#fff8e1", "#ef6c00", "#473627")),
            ("dining", style("#fce4ec", "#c2185b", "#46283a")),
            ("meals", style("#fce4ec", "#c2185b", "#46283a")),
            ("kitchen", style("#e8f5e9", "#388e3c", "#27402e")),
            ("kitchenette", style("#e8f5e9", "#388e3c", "#27402e")),
            ("bathroom", style("#e0f7fa", "#0097a7", "#1f3e44")),
            ("ensuite", style("#e0f7fa", "#00838f", "#1d3a40")),
            ("wc", style("#e0f4f7", "#0097a7", "#1f3e44")),
            ("powder", style("#e0f4f7", "#0097a7", "#1f3e44")),
            ("garage", style("#eceff1", "#546e7a", "#2b3136")),
            ("carport", style("#eceff1", "#546e7a", "#2b3136")),
            ("laundry", style("#ede7f6", "#512da8", "#2e2a45")),
            ("office", style("#fffde7", "#f9a825", "#44402a")),
            ("study", style("#fffde7", "#f9a825", "#44402a")),
            ("hallway", style("#fafafa", "#757575", "#33343f")),
            ("hall", style("#fafafa", "#757575", "#33343f")),
            ("entry", style("#fafafa", "#757575", "#33343f")),
            ("corridor", style("#fafafa", "#757575", "#33343f")),
            ("wardrobe", style("#efebe9", "#6d4c41", "#3a322e")),
            ("walk_in_robe", style("#efebe9", "#6d4c41", "#3a322e")),
            ("pantry", style("#f1f8e9", "#689f38", "#303d28")),
            ("balcony", style("#e0f2f1", "#00796b", "#243d3a")),
            ("alfresco", style("#e0f2f1", "#00796b", "#243d3a")),
            ("deck", style("#e0f2f1", "#00796b", "#243d3a")),
            ("porch", style("#e0f2f1", "#00796b", "#243d3a")),
            ("storage", style("#f3e5f5", "#7b1fa2", "#3a2a41")),
            ("store", style("#f3e5f5", "#7b1fa2", "#3a2a41")),
            ("stairs", style("#eeeeee", "#616161", "#2d2d38")),
        ];
        entries.iter().copied().collect()
    })
}

/// Canonical form used for lookups and predicate matching: lower-cased, with
/// whitespace/hyphen/underscore runs collapsed to a single `_`.
pub fn normalize_type(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;
    for ch in raw.trim().chars() {
        if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_sep = !out.is_empty();
            continue;
        }
        if pending_sep {
            out.push('_');
            pending_sep = false;
        }
        out.extend(ch.to_lowercase());
    }
    out
}

/// Total lookup: exact normalized match, then the first token before `_`
/// (so `"kitchen_dining"` finds `"kitchen"` when the compound is absent),
/// then the neutral default. Upstream types are an open set; styling must
/// degrade to "good enough" rather than fail.
pub fn style_for(room_type: &str) -> RoomStyle {
    let table = style_table();
    let normalized = normalize_type(room_type);
    if let Some(s) = table.get(normalized.as_str()) {
        return *s;
    }
    let head = normalized.split('_').next().unwrap_or_default();
    if let Some(s) = table.get(head) {
        return *s;
    }
    DEFAULT_STYLE
}

/// Which furniture schematic a room gets. Purely symbolic; see the render
/// crate's routines for the shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FurnitureKind {
    Bed,
    Living,
    Dining,
    Kitchen,
    Bathroom,
    Garage,
    Laundry,
    Office,
    Wardrobe,
    Pantry,
}

// Tested in order against the normalized type, then the normalized name;
// first match wins. Dining before Kitchen so "kitchen_dining" draws a table.
const FURNITURE_PREDICATES: &[(&[&str], FurnitureKind)] = &[
    (&["bed"], FurnitureKind::Bed),
    (
        &["living", "lounge", "family", "rumpus", "media"],
        FurnitureKind::Living,
    ),
    (&["dining", "meals"], FurnitureKind::Dining),
    (&["kitchen"], FurnitureKind::Kitchen),
    (
        &["bath", "ensuite", "wc", "powder", "toilet"],
        FurnitureKind::Bathroom,
    ),
    (&["garage", "carport"], FurnitureKind::Garage),
    (&["laundry"], FurnitureKind::Laundry),
    (&["office", "study"], FurnitureKind::Office),
    (&["wardrobe", "walk_in", "robe"], FurnitureKind::Wardrobe),
    (&["pantry", "larder"], FurnitureKind::Pantry),
];

/// Ordered substring match over type and display name; `None` means the room
/// draws no furniture, which is a deliberate no-op for unrecognized spaces.
pub fn furniture_kind(room_type: &str, name: &str) -> Option<FurnitureKind> {
    let ty = normalize_type(room_type);
    let nm = normalize_type(name);
    for (needles, kind) in FURNITURE_PREDICATES {
        if needles.iter().any(|n| ty.contains(n) || nm.contains(n)) {
            return Some(*kind);
        }
    }
    None
}
