#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: Option<String>,
    pub font_size: f64,
    pub font_weight: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 12.0,
            font_weight: None,
        }
    }
}

impl TextStyle {
    pub fn sized(font_size: f64) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }

    pub fn bold(font_size: f64) -> Self {
        Self {
            font_size,
            font_weight: Some("600".to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

/// Label measurement seam. The default implementation is a deterministic
/// character-cell estimate; an embedder with real font metrics can supply its
/// own to tighten label fitting.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

#[derive(Debug, Clone, Default)]
pub struct DeterministicTextMeasurer {
    pub char_width_factor: f64,
    pub line_height_factor: f64,
}

impl TextMeasurer for DeterministicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let char_width_factor = if self.char_width_factor == 0.0 {
            0.6
        } else {
            self.char_width_factor
        };
        let line_height_factor = if self.line_height_factor == 0.0 {
            1.2
        } else {
            self.line_height_factor
        };

        let font_size = style.font_size.max(1.0);
        let cells = UnicodeWidthStr::width(text);
        TextMetrics {
            width: cells as f64 * font_size * char_width_factor,
            height: font_size * line_height_factor,
        }
    }
}

/// Trims `text` until it fits `max_width`, appending an ellipsis when
/// anything was cut. Room names are arbitrary upstream strings and routinely
/// longer than the rooms they label.
pub fn truncate_to_width(
    text: &str,
    style: &TextStyle,
    max_width: f64,
    measurer: &dyn TextMeasurer,
) -> String {
    if measurer.measure(text, style).width <= max_width {
        return text.to_string();
    }
    let mut chars: Vec<char> = text.chars().collect();
    while chars.len() > 1 {
        chars.pop();
        let mut candidate: String = chars.iter().collect();
        candidate.push('…');
        if measurer.measure(&candidate, style).width <= max_width {
            return candidate;
        }
    }
    "…".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_measure_scales_with_length_and_size() {
        let m = DeterministicTextMeasurer::default();
        let small = m.measure("KITCHEN", &TextStyle::sized(10.0));
        let large = m.measure("KITCHEN", &TextStyle::sized(20.0));
        assert!(large.width > small.width);
        let longer = m.measure("KITCHEN DINING", &TextStyle::sized(10.0));
        assert!(longer.width > small.width);
    }

    #[test]
    fn truncate_keeps_short_text_untouched() {
        let m = DeterministicTextMeasurer::default();
        let s = truncate_to_width("WC", &TextStyle::sized(12.0), 200.0, &m);
        assert_eq!(s, "WC");
    }

    #[test]
    fn truncate_cuts_and_marks_long_text() {
        let m = DeterministicTextMeasurer::default();
        let style = TextStyle::sized(12.0);
        let s = truncate_to_width("MASTER BEDROOM WITH RETREAT", &style, 60.0, &m);
        assert!(s.ends_with('…'));
        assert!(m.measure(&s, &style).width <= 60.0);
    }
}
