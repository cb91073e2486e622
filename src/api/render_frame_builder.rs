use crate::core::{FitScale, Ruler};
use crate::error::RulerResult;
use crate::interaction::PreviewState;
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::RenderStyle;
use super::label_format::ruler_overlay_label;

/// Builds the overlay scene: one full-width line and one label per ruler,
/// plus the hover preview line when visible.
pub(super) fn build_render_frame(
    fit: FitScale,
    rulers: &[Ruler],
    preview: PreviewState,
    style: RenderStyle,
) -> RulerResult<RenderFrame> {
    let width = fit.displayed_width();
    let mut frame = RenderFrame::new(width, fit.displayed_height());

    for ruler in rulers {
        let display_y = fit.image_to_display(f64::from(ruler.y))?;
        frame = frame
            .with_line(LinePrimitive::new(
                0.0,
                display_y,
                width,
                display_y,
                style.ruler_line_stroke_width,
                style.ruler_line_color,
            ))
            .with_text(TextPrimitive::new(
                ruler_overlay_label(ruler),
                width + style.label_gap_px,
                display_y - style.label_raise_px,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Left,
            ));
    }

    if preview.visible {
        frame = frame.with_line(LinePrimitive::new(
            0.0,
            preview.display_y,
            width,
            preview.display_y,
            style.preview_line_stroke_width,
            style.preview_line_color,
        ));
    }

    Ok(frame)
}
