#![forbid(unsafe_code)]

//! Schematic furniture, one routine per [`FurnitureKind`]. The shapes are
//! symbolic architectural conventions, not physical models: fixed real-world
//! proportions in meters, clamped to the room's on-screen rectangle so
//! nothing draws outside the walls.

use crate::svg::fmt_num;
use planforge_core::geom::Rect;
use planforge_core::model::Room;
use planforge_core::style::{FurnitureKind, normalize_type};
use std::fmt::Write as _;

const FURNITURE_STROKE: &str = "#78909c";
const DASH: &str = "4 3";

pub fn draw_furniture(out: &mut String, kind: FurnitureKind, room: &Room, rect: Rect, m: f64) {
    let (x, y) = (rect.origin.x, rect.origin.y);
    let (w, h) = (rect.size.width, rect.size.height);
    if !(w > 0.0 && h > 0.0 && m > 0.0) {
        return;
    }
    match kind {
        FurnitureKind::Bed => bed(out, x, y, w, h, m),
        FurnitureKind::Living => living(out, x, y, w, h, m),
        FurnitureKind::Dining => dining(out, x, y, w, h, m),
        FurnitureKind::Kitchen => kitchen(out, x, y, w, h, m, room),
        FurnitureKind::Bathroom => bathroom(out, x, y, w, h, m),
        FurnitureKind::Garage => garage(out, x, y, w, h, m, room),
        FurnitureKind::Laundry => laundry(out, x, y, w, h, m),
        FurnitureKind::Office => office(out, x, y, w, h, m),
        FurnitureKind::Wardrobe => wardrobe(out, x, y, w, h, m),
        FurnitureKind::Pantry => pantry(out, x, y, w, h, m),
    }
}

fn inset_for(w: f64, h: f64, m: f64) -> f64 {
    (0.25 * m).min(w * 0.08).min(h * 0.08)
}

fn outline(out: &mut String, x: f64, y: f64, w: f64, h: f64, dashed: bool) {
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    let dash = if dashed {
        format!(r#" stroke-dasharray="{DASH}""#)
    } else {
        String::new()
    };
    let _ = write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{FURNITURE_STROKE}" stroke-width="1"{dash}/>"#,
        fmt_num(x),
        fmt_num(y),
        fmt_num(w),
        fmt_num(h),
    );
}

fn circle(out: &mut String, cx: f64, cy: f64, r: f64) {
    if r <= 0.0 {
        return;
    }
    let _ = write!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{FURNITURE_STROKE}" stroke-width="1"/>"#,
        fmt_num(cx),
        fmt_num(cy),
        fmt_num(r),
    );
}

fn ellipse(out: &mut String, cx: f64, cy: f64, rx: f64, ry: f64) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let _ = write!(
        out,
        r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="none" stroke="{FURNITURE_STROKE}" stroke-width="1"/>"#,
        fmt_num(cx),
        fmt_num(cy),
        fmt_num(rx),
        fmt_num(ry),
    );
}

fn seg(out: &mut String, x1: f64, y1: f64, x2: f64, y2: f64) {
    let _ = write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{FURNITURE_STROKE}" stroke-width="1"/>"#,
        fmt_num(x1),
        fmt_num(y1),
        fmt_num(x2),
        fmt_num(y2),
    );
}

/// Bed against the top wall, two pillow outlines at the head.
fn bed(out: &mut String, x: f64, y: f64, w: f64, h: f64, m: f64) {
    let inset = inset_for(w, h, m);
    let bw = (1.6 * m).min(w * 0.6);
    let bl = (2.1 * m).min(h * 0.75);
    let bx = x + inset;
    let by = y + inset;
    outline(out, bx, by, bw, bl, false);

    let pw = bw * 0.42;
    let ph = (0.45 * m).min(bl * 0.22);
    outline(out, bx + bw * 0.05, by + bl * 0.05, pw, ph, false);
    outline(out, bx + bw * 0.53, by + bl * 0.05, pw, ph, false);
    // Fold line across the foot of the bed.
    seg(out, bx, by + bl * 0.72, bx + bw, by + bl * 0.72);
}

/// Sofa along the bottom wall facing a media unit on the top wall.
fn living(out: &mut String, x: f64, y: f64, w: f64, h: f64, m: f64) {
    let inset = inset_for(w, h, m);
    let sw = (2.3 * m).min(w * 0.7);
    let sh = (0.9 * m).min(h * 0.3);
    let sx = x + (w - sw) / 2.0;
    let sy = y + h - inset - sh;
    outline(out, sx, sy, sw, sh, false);
    // Seat/back split.
    seg(out, sx, sy + sh * 0.6, sx + sw, sy + sh * 0.6);

    let mw = (1.5 * m).min(w * 0.5);
    let mh = (0.45 * m).min(h * 0.15);
    outline(out, x + (w - mw) / 2.0, y + inset, mw, mh, false);
}

/// Centered table with one chair on each long side.
fn dining(out: &mut String, x: f64, y: f64, w: f64, h: f64, m: f64) {
    let tw = (1.8 * m).min(w * 0.5);
    let th = (1.0 * m).min(h * 0.4);
    let tx = x + (w - tw) / 2.0;
    let ty = y + (h - th) / 2.0;
    outline(out, tx, ty, tw, th, false);

    let cs = (0.45 * m).min(w * 0.12).min(h * 0.12);
    let gap = cs * 0.2;
    let cy = ty + (th - cs) / 2.0;
    outline(out, (tx - gap - cs).max(x), cy, cs, cs, false);
    outline(out, (tx + tw + gap).min(x + w - cs), cy, cs, cs, false);
}

/// Counter strip along the top wall with a sink; island when the room is
/// large enough to walk around one.
fn kitchen(out: &mut String, x: f64, y: f64, w: f64, h: f64, m: f64, room: &Room) {
    let inset = inset_for(w, h, m);
    let cd = (0.65 * m).min(h * 0.35);
    let cw = w - 2.0 * inset;
    outline(out, x + inset, y + inset, cw, cd, false);

    let r = (0.18 * m).min(cd * 0.35);
    circle(out, x + inset + cw * 0.2, y + inset + cd / 2.0, r);

    if room.width >= 3.2 && room.depth >= 3.0 {
        let iw = (1.8 * m).min(w * 0.45);
        let ih = (0.9 * m).min(h * 0.25);
        outline(out, x + (w - iw) / 2.0, y + h * 0.55, iw, ih, false);
    }
}

/// Toilet, vanity with basin, dashed shower enclosure.
fn bathroom(out: &mut String, x: f64, y: f64, w: f64, h: f64, m: f64) {
    let inset = inset_for(w, h, m);

    let s = (0.9 * m).min(w * 0.4).min(h * 0.4);
    outline(out, x + inset, y + inset, s, s, true);

    let rx = (0.2 * m).min(w * 0.12);
    let ry = (0.27 * m).min(h * 0.15);
    let tcx = x + w - inset - rx * 1.6;
    let tcy = y + inset + ry * 2.2;
    // Cistern behind the pan.
    outline(out, tcx - rx, y + inset, rx * 2.0, ry * 0.8, false);
    ellipse(out, tcx, tcy, rx, ry);

    let vw = (0.9 * m).min(w * 0.5);
    let vh = (0.5 * m).min(h * 0.25);
    let vx = x + inset;
    let vy = y + h - inset - vh;
    outline(out, vx, vy, vw, vh, false);
    circle(out, vx + vw / 2.0, vy + vh / 2.0, (vw.min(vh) * 0.3).max(0.0));
}

/// One or two dashed car outlines, two when the room reads as a double.
fn garage(out: &mut String, x: f64, y: f64, w: f64, h: f64, m: f64, room: &Room) {
    let double = room.width >= 5.0 || normalize_type(&room.name).contains("double");
    let count = if double { 2 } else { 1 };

    let share = if count == 2 { 0.38 } else { 0.6 };
    let cw = (1.7 * m).min(w * share);
    let cl = (4.5 * m).min(h * 0.8);
    let cy = y + (h - cl) / 2.0;
    if count == 2 {
        let slack = (w - 2.0 * cw) / 3.0;
        outline(out, x + slack, cy, cw, cl, true);
        outline(out, x + slack * 2.0 + cw, cy, cw, cl, true);
    } else {
        outline(out, x + (w - cw) / 2.0, cy, cw, cl, true);
    }
}

/// Washer and dryer squares against the top wall, door circles inside.
fn laundry(out: &mut String, x: f64, y: f64, w: f64, h: f64, m: f64) {
    let inset = inset_for(w, h, m);
    let s = (0.6 * m).min(w * 0.35).min(h * 0.35);
    let gap = s * 0.15;
    for i in 0..2 {
        let bx = x + inset + (s + gap) * i as f64;
        if bx + s > x + w - inset {
            break;
        }
        outline(out, bx, y + inset, s, s, false);
        circle(out, bx + s / 2.0, y + inset + s / 2.0, s * 0.3);
    }
}

/// Desk against the top wall with a chair pulled out below it.
fn office(out: &mut String, x: f64, y: f64, w: f64, h: f64, m: f64) {
    let inset = inset_for(w, h, m);
    let dw = (1.4 * m).min(w * 0.6);
    let dh = (0.7 * m).min(h * 0.3);
    let dx = x + (w - dw) / 2.0;
    outline(out, dx, y + inset, dw, dh, false);

    let cs = (0.5 * m).min(w * 0.2).min(h * 0.2);
    outline(
        out,
        x + (w - cs) / 2.0,
        (y + inset + dh + cs * 0.2).min(y + h - inset - cs),
        cs,
        cs,
        false,
    );
}

/// Hanging rail along the room's long axis.
fn wardrobe(out: &mut String, x: f64, y: f64, w: f64, h: f64, m: f64) {
    let inset = inset_for(w, h, m);
    if w >= h {
        seg(out, x + inset, y + h / 2.0, x + w - inset, y + h / 2.0);
    } else {
        seg(out, x + w / 2.0, y + inset, x + w / 2.0, y + h - inset);
    }
}

/// Shelf lines across the width.
fn pantry(out: &mut String, x: f64, y: f64, w: f64, h: f64, m: f64) {
    let inset = inset_for(w, h, m);
    for frac in [0.3, 0.5, 0.7] {
        seg(out, x + inset, y + h * frac, x + w - inset, y + h * frac);
    }
}
