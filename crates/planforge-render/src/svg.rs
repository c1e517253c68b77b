#![forbid(unsafe_code)]

//! The render pipeline: one floor of a document, drawn into an SVG string
//! sized exactly to the surface. Draw order is background, grid, rooms
//! (fills, walls, furniture, labels) in input order, then the non-compact
//! chrome (scale bar, north indicator, title block). Later rooms draw over
//! earlier ones on overlap; the packer avoids overlap but nothing prevents
//! externally authored layouts from overlapping.

use crate::furniture;
use crate::model::{FloorLayout, layout_floor};
use crate::text::{TextMeasurer, TextStyle, truncate_to_width};
use crate::view::{Surface, ViewState};
use planforge_core::model::FloorPlanDocument;
use planforge_core::style::{furniture_kind, style_for};
use std::fmt::Write as _;

const BG_LIGHT: &str = "#ffffff";
const BG_DARK: &str = "#1a1a2e";
const GRID_STROKE: &str = "#e0e0e0";
const CHROME_COLOR: &str = "#546e7a";
const LABEL_LIGHT: &str = "#37474f";
const LABEL_DARK: &str = "#e8e8f0";

/// Minimum on-screen room dimension (px) for furniture.
const FURNITURE_MIN_PX: f64 = 28.0;
/// Minimum for the full name label.
const LABEL_FULL_MIN_PX: f64 = 46.0;
/// Minimum for the area-only figure; below this nothing is drawn.
const LABEL_AREA_MIN_PX: f64 = 24.0;

const SCALE_BAR_METERS: f64 = 5.0;

pub(crate) fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut r = (v * 100.0).round() / 100.0;
    if r == 0.0 {
        r = r.abs(); // collapse -0 to 0
    }
    let mut b = ryu_js::Buffer::new();
    b.format_finite(r).to_string()
}

pub(crate) fn escape_xml_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `"Ground Floor"`, `"Level 1"`, `"Basement 1"`.
pub fn floor_label(floor: i32) -> String {
    match floor {
        0 => "Ground Floor".to_string(),
        f if f > 0 => format!("Level {f}"),
        f => format!("Basement {}", -f),
    }
}

fn text_el(
    out: &mut String,
    x: f64,
    y: f64,
    content: &str,
    style: &TextStyle,
    fill: &str,
    anchor: &str,
) {
    let family = style
        .font_family
        .as_deref()
        .unwrap_or("Helvetica, Arial, sans-serif");
    let weight_attr = match style.font_weight.as_deref() {
        Some(w) => format!(r#" font-weight="{w}""#),
        None => String::new(),
    };
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" fill="{fill}" font-family="{family}" font-size="{}" text-anchor="{anchor}" dominant-baseline="central"{weight_attr}>{}</text>"#,
        fmt_num(x),
        fmt_num(y),
        fmt_num(style.font_size),
        escape_xml_text(content),
    );
}

/// Draws one floor of `doc` and returns the SVG document.
///
/// Pure function of its inputs; repeated calls with the same inputs yield
/// identical output. Never panics on degenerate documents: an empty room
/// list produces only the background fill, a floor with no rooms produces a
/// placeholder message.
pub fn render_floor_svg(
    doc: &FloorPlanDocument,
    state: &ViewState,
    surface: Surface,
    measurer: &dyn TextMeasurer,
) -> String {
    tracing::debug!(
        floor = state.floor,
        zoom = state.zoom,
        rooms = doc.rooms.len(),
        compact = surface.is_compact(),
        "rendering floor plan"
    );

    let w = surface.width as f64;
    let h = surface.height as f64;
    let compact = surface.is_compact();
    let bg = if compact { BG_DARK } else { BG_LIGHT };

    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{1}" viewBox="0 0 {0} {1}">"#,
        surface.width, surface.height,
    );
    let _ = write!(out, r#"<rect width="{w}" height="{h}" fill="{bg}"/>"#,);

    if doc.rooms.is_empty() {
        out.push_str("</svg>\n");
        return out;
    }

    let Some(layout) = layout_floor(doc, state, surface) else {
        let fill = if compact { LABEL_DARK } else { LABEL_LIGHT };
        text_el(
            &mut out,
            w / 2.0,
            h / 2.0,
            "No rooms on this floor",
            &TextStyle::sized(13.0),
            fill,
            "middle",
        );
        out.push_str("</svg>\n");
        return out;
    };

    if state.show_grid && !compact {
        draw_grid(&mut out, &layout);
    }

    for (room, placed) in layout.rooms.iter().zip(&layout.placed) {
        let rect = layout.room_rect_px(placed);
        let style = style_for(&room.room_type);
        let fill = if compact { style.dark_fill } else { style.fill };
        let stroke_width = (1.5 * state.zoom).max(0.8);
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}" stroke="{}" stroke-width="{}"/>"#,
            fmt_num(rect.origin.x),
            fmt_num(rect.origin.y),
            fmt_num(rect.size.width.max(0.0)),
            fmt_num(rect.size.height.max(0.0)),
            style.stroke,
            fmt_num(stroke_width),
        );

        if room.is_degenerate() {
            continue;
        }
        let min_px = rect.size.width.min(rect.size.height);

        if state.show_furniture && !compact && min_px >= FURNITURE_MIN_PX {
            if let Some(kind) = furniture_kind(&room.room_type, &room.name) {
                furniture::draw_furniture(&mut out, kind, room, rect, layout.px_per_m);
            }
        }

        draw_room_label(&mut out, room, placed, rect, min_px, state, compact, measurer);
    }

    if !compact {
        draw_scale_bar(&mut out, &layout, h);
        draw_north_indicator(&mut out, w);
        draw_title_block(&mut out, doc, state);
    }

    out.push_str("</svg>\n");
    out
}

#[allow(clippy::too_many_arguments)]
fn draw_room_label(
    out: &mut String,
    room: &planforge_core::model::Room,
    placed: &planforge_core::layout::PlacedRoom,
    rect: planforge_core::geom::Rect,
    min_px: f64,
    state: &ViewState,
    compact: bool,
    measurer: &dyn TextMeasurer,
) {
    if min_px < LABEL_AREA_MIN_PX {
        return;
    }
    let fill = if compact { LABEL_DARK } else { LABEL_LIGHT };
    let cx = rect.origin.x + rect.size.width / 2.0;
    let cy = rect.origin.y + rect.size.height / 2.0;
    let area_text = format!("{} m²", fmt_num(placed.area));

    if min_px < LABEL_FULL_MIN_PX {
        text_el(out, cx, cy, &area_text, &TextStyle::sized(9.0), fill, "middle");
        return;
    }

    let name_style = TextStyle::bold(if compact { 10.0 } else { 12.0 });
    let name = truncate_to_width(
        &room.name.to_uppercase(),
        &name_style,
        rect.size.width - 10.0,
        measurer,
    );

    if state.show_dimensions {
        let dims = format!("{} × {} m", fmt_num(room.width), fmt_num(room.depth));
        let small = TextStyle::sized(9.5);
        text_el(out, cx, cy - 12.0, &name, &name_style, fill, "middle");
        text_el(out, cx, cy + 2.0, &dims, &small, fill, "middle");
        text_el(out, cx, cy + 14.0, &area_text, &small, fill, "middle");
    } else {
        text_el(out, cx, cy, &name, &name_style, fill, "middle");
    }
}

/// Upper bound on grid lines per axis; the extent comes from authored room
/// coordinates, which the document does not bound.
const GRID_MAX_LINES: f64 = 1000.0;

/// 1 m grid across the bounding box extent. The step widens past
/// [`GRID_MAX_LINES`] so output size stays bounded by the budget, not by
/// whatever coordinates the document carries.
fn draw_grid(out: &mut String, layout: &FloorLayout) {
    let b = &layout.bounds;
    if b.is_empty() {
        return;
    }
    let x0 = b.min_x.floor();
    let x1 = b.max_x.ceil();
    let y0 = b.min_y.floor();
    let y1 = b.max_y.ceil();
    let extent = (x1 - x0).max(y1 - y0);
    let step = (extent / GRID_MAX_LINES).ceil().max(1.0);

    let mut x = x0;
    while x <= x1 {
        let (px0, py0) = layout.to_px(x, y0);
        let (_, py1) = layout.to_px(x, y1);
        let _ = write!(
            out,
            r#"<line x1="{0}" y1="{1}" x2="{0}" y2="{2}" stroke="{GRID_STROKE}" stroke-width="0.5"/>"#,
            fmt_num(px0),
            fmt_num(py0),
            fmt_num(py1),
        );
        x += step;
    }
    let mut y = y0;
    while y <= y1 {
        let (px0, py0) = layout.to_px(x0, y);
        let (px1, _) = layout.to_px(x1, y);
        let _ = write!(
            out,
            r#"<line x1="{0}" y1="{2}" x2="{1}" y2="{2}" stroke="{GRID_STROKE}" stroke-width="0.5"/>"#,
            fmt_num(px0),
            fmt_num(px1),
            fmt_num(py0),
        );
        y += step;
    }
}

/// Bar calibrated to five meters at the current scale, bottom-left.
fn draw_scale_bar(out: &mut String, layout: &FloorLayout, surface_h: f64) {
    let len = SCALE_BAR_METERS * layout.px_per_m;
    if !(len.is_finite() && len > 0.0) {
        return;
    }
    let x0 = 24.0;
    let y0 = surface_h - 28.0;
    let _ = write!(
        out,
        r#"<line x1="{0}" y1="{1}" x2="{2}" y2="{1}" stroke="{CHROME_COLOR}" stroke-width="1.5"/>"#,
        fmt_num(x0),
        fmt_num(y0),
        fmt_num(x0 + len),
    );
    for x in [x0, x0 + len] {
        let _ = write!(
            out,
            r#"<line x1="{0}" y1="{1}" x2="{0}" y2="{2}" stroke="{CHROME_COLOR}" stroke-width="1.5"/>"#,
            fmt_num(x),
            fmt_num(y0 - 4.0),
            fmt_num(y0 + 4.0),
        );
    }
    text_el(
        out,
        x0 + len / 2.0,
        y0 - 10.0,
        "5 m",
        &TextStyle::sized(10.0),
        CHROME_COLOR,
        "middle",
    );
}

/// Circle + arrow + `N`, top-right.
fn draw_north_indicator(out: &mut String, surface_w: f64) {
    let cx = surface_w - 36.0;
    let cy = 36.0;
    let r = 16.0;
    let _ = write!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{CHROME_COLOR}" stroke-width="1.5"/>"#,
        fmt_num(cx),
        fmt_num(cy),
        fmt_num(r),
    );
    let _ = write!(
        out,
        r#"<line x1="{0}" y1="{1}" x2="{0}" y2="{2}" stroke="{CHROME_COLOR}" stroke-width="1.5"/>"#,
        fmt_num(cx),
        fmt_num(cy + 8.0),
        fmt_num(cy - 6.0),
    );
    let _ = write!(
        out,
        r#"<polygon points="{},{} {},{} {},{}" fill="{CHROME_COLOR}"/>"#,
        fmt_num(cx - 4.0),
        fmt_num(cy - 5.0),
        fmt_num(cx + 4.0),
        fmt_num(cy - 5.0),
        fmt_num(cx),
        fmt_num(cy - 12.0),
    );
    text_el(
        out,
        cx,
        cy + r + 9.0,
        "N",
        &TextStyle::bold(10.0),
        CHROME_COLOR,
        "middle",
    );
}

/// Display name, floor label and the current floor's total area, top-left.
fn draw_title_block(out: &mut String, doc: &FloorPlanDocument, state: &ViewState) {
    let title = doc.display_name().unwrap_or("Floor Plan");
    text_el(
        out,
        24.0,
        24.0,
        title,
        &TextStyle::bold(14.0),
        LABEL_LIGHT,
        "start",
    );
    let area = doc.floor_area(state.floor);
    let subtitle = format!("{} · {} m²", floor_label(state.floor), fmt_num(area));
    text_el(
        out,
        24.0,
        42.0,
        &subtitle,
        &TextStyle::sized(11.0),
        CHROME_COLOR,
        "start",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::DeterministicTextMeasurer;

    fn doc(json: &str) -> FloorPlanDocument {
        FloorPlanDocument::from_json_str(json).unwrap()
    }

    fn render(doc: &FloorPlanDocument, state: &ViewState, surface: Surface) -> String {
        render_floor_svg(doc, state, surface, &DeterministicTextMeasurer::default())
    }

    const TWO_ROOMS: &str = r#"{
        "design_name": "Aurora 24",
        "rooms": [
            { "type": "bedroom", "name": "Bedroom 1", "width": 4.0, "depth": 3.0 },
            { "type": "kitchen", "name": "Kitchen", "width": 5.0, "depth": 4.0 }
        ]
    }"#;

    #[test]
    fn empty_document_renders_only_the_background() {
        let svg = render(
            &FloorPlanDocument::default(),
            &ViewState::default(),
            Surface::interactive(),
        );
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>\n"));
        // One rect: the background fill. No text, no rooms.
        assert_eq!(svg.matches("<rect").count(), 1);
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn unpopulated_floor_gets_a_placeholder_message() {
        let state = ViewState {
            floor: 2,
            ..ViewState::default()
        };
        let svg = render(&doc(TWO_ROOMS), &state, Surface::interactive());
        assert!(svg.contains("No rooms on this floor"));
    }

    #[test]
    fn rooms_render_with_their_resolved_styles() {
        let svg = render(&doc(TWO_ROOMS), &ViewState::default(), Surface::interactive());
        assert!(svg.contains(r##"fill="#e3f2fd""##), "bedroom fill missing");
        assert!(svg.contains(r##"fill="#e8f5e9""##), "kitchen fill missing");
        assert!(svg.contains("BEDROOM 1"));
        assert!(svg.contains("KITCHEN"));
    }

    #[test]
    fn interactive_mode_draws_grid_and_chrome() {
        let svg = render(&doc(TWO_ROOMS), &ViewState::default(), Surface::interactive());
        assert!(svg.contains(GRID_STROKE), "grid missing");
        assert!(svg.contains("5 m"), "scale bar missing");
        assert!(svg.contains(">N</text>"), "north indicator missing");
        assert!(svg.contains("Aurora 24"), "title block missing");
        assert!(svg.contains("Ground Floor"));
    }

    #[test]
    fn compact_mode_drops_grid_furniture_and_chrome() {
        let svg = render(&doc(TWO_ROOMS), &ViewState::default(), Surface::compact());
        assert!(svg.contains(BG_DARK));
        assert!(!svg.contains(GRID_STROKE));
        assert!(!svg.contains("stroke-dasharray"));
        assert!(!svg.contains("5 m"));
        assert!(!svg.contains("Aurora 24"));
        // Room fills switch to the dark variants.
        assert!(svg.contains(r##"fill="#24364d""##));
    }

    #[test]
    fn toggles_remove_grid_and_furniture() {
        let state = ViewState {
            show_grid: false,
            show_furniture: false,
            ..ViewState::default()
        };
        let svg = render(&doc(TWO_ROOMS), &state, Surface::interactive());
        assert!(!svg.contains(GRID_STROKE));
        // The kitchen would otherwise draw a sink circle.
        assert!(!svg.contains("<circle cx") || svg.matches("<circle").count() == 1);
    }

    #[test]
    fn dimensions_toggle_adds_secondary_label_lines() {
        let state = ViewState {
            show_dimensions: true,
            ..ViewState::default()
        };
        let svg = render(&doc(TWO_ROOMS), &state, Surface::interactive());
        assert!(svg.contains("4 × 3 m"));
        assert!(svg.contains("12 m²"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let d = doc(TWO_ROOMS);
        let state = ViewState {
            zoom: 1.44,
            pan_x: 18.0,
            pan_y: -6.0,
            show_dimensions: true,
            ..ViewState::default()
        };
        let a = render(&d, &state, Surface::interactive());
        let b = render(&d, &state, Surface::interactive());
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_types_fall_back_to_neutral_styling_without_furniture() {
        let svg = render(
            &doc(
                r#"{ "rooms": [ { "type": "unknown_exotic_room", "name": "Mystery", "width": 3.0, "depth": 3.0 } ] }"#,
            ),
            &ViewState::default(),
            Surface::interactive(),
        );
        assert!(svg.contains(r##"fill="#f5f5f5""##));
        // No furniture primitives beyond the room rect + chrome.
        assert!(!svg.contains("stroke-dasharray"));
    }

    #[test]
    fn degenerate_rooms_render_without_labels_or_panic() {
        let svg = render(
            &doc(
                r#"{ "rooms": [ { "type": "bedroom", "name": "Broken", "width": 0.0, "depth": -2.0 } ] }"#,
            ),
            &ViewState::default(),
            Surface::interactive(),
        );
        assert!(!svg.contains("BROKEN"));
    }

    #[test]
    fn svg_is_sized_to_the_surface() {
        let svg = render(&doc(TWO_ROOMS), &ViewState::default(), Surface::compact());
        assert!(svg.contains(r#"width="420" height="320""#));
        assert!(svg.contains(r#"viewBox="0 0 420 320""#));
    }

    #[test]
    fn floor_labels_cover_ground_levels_and_basements() {
        assert_eq!(floor_label(0), "Ground Floor");
        assert_eq!(floor_label(1), "Level 1");
        assert_eq!(floor_label(2), "Level 2");
        assert_eq!(floor_label(-1), "Basement 1");
    }

    #[test]
    fn labels_degrade_by_on_screen_room_size() {
        // 20 × 14 anchors the scale at 36 px/m on the interactive surface, so
        // the 1 × 1 room lands between the area-only and full-label
        // thresholds and the 0.5 × 0.5 room falls below both.
        let svg = render(
            &doc(
                r#"{ "rooms": [
                    { "type": "living", "name": "Hall", "width": 20.0, "depth": 14.0, "x": 0.0, "y": 0.0 },
                    { "type": "store", "name": "Nook", "width": 1.0, "depth": 1.0, "x": 2.0, "y": 2.0 },
                    { "type": "store", "name": "Chute", "width": 0.5, "depth": 0.5, "x": 5.0, "y": 5.0 }
                ] }"#,
            ),
            &ViewState::default(),
            Surface::interactive(),
        );
        assert!(svg.contains("HALL"), "full label missing");
        assert!(svg.contains(">1 m²<"), "area-only figure missing");
        assert!(!svg.contains("NOOK"), "area-only room must not show its name");
        assert!(!svg.contains(">0.25 m²<"), "sub-threshold room must be unlabeled");
        assert!(!svg.contains("CHUTE"));
    }

    #[test]
    fn grid_line_count_is_bounded_for_distant_coordinates() {
        // Positioned coordinates are authored data; a far-flung room must
        // widen the grid step instead of inflating the output.
        let svg = render(
            &doc(
                r#"{ "rooms": [
                    { "type": "bedroom", "name": "Bedroom", "width": 4.0, "depth": 3.0, "x": 0.0, "y": 0.0 },
                    { "type": "kitchen", "name": "Kitchen", "width": 4.0, "depth": 3.0, "x": 1000000.0, "y": 0.0 }
                ] }"#,
            ),
            &ViewState::default(),
            Surface::interactive(),
        );
        assert!(
            svg.matches("<line").count() <= 1100,
            "grid emitted too many lines"
        );
    }
}
