use crate::error::{RulerError, RulerResult};
use crate::render::Color;

/// Style contract for the overlay render frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub ruler_line_color: Color,
    pub ruler_line_stroke_width: f64,
    pub preview_line_color: Color,
    pub preview_line_stroke_width: f64,
    pub label_color: Color,
    pub label_font_size_px: f64,
    /// Horizontal gap between the displayed image's right edge and labels.
    pub label_gap_px: f64,
    /// Labels sit this far above their ruler line.
    pub label_raise_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            ruler_line_color: Color::rgb(0.9, 0.35, 0.35),
            ruler_line_stroke_width: 1.0,
            preview_line_color: Color::rgba(0.9, 0.35, 0.35, 0.5),
            preview_line_stroke_width: 1.0,
            label_color: Color::rgb(0.85, 0.85, 0.85),
            label_font_size_px: 12.0,
            label_gap_px: 10.0,
            label_raise_px: 15.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> RulerResult<Self> {
        for (value, name) in [
            (self.ruler_line_stroke_width, "ruler_line_stroke_width"),
            (self.preview_line_stroke_width, "preview_line_stroke_width"),
            (self.label_font_size_px, "label_font_size_px"),
            (self.label_gap_px, "label_gap_px"),
            (self.label_raise_px, "label_raise_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RulerError::InvalidData(format!(
                    "render style `{name}` must be finite and > 0"
                )));
            }
        }
        self.ruler_line_color.validate()?;
        self.preview_line_color.validate()?;
        self.label_color.validate()?;
        Ok(self)
    }
}
