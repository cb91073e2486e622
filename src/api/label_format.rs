//! Textual formatting for overlay labels, the ruler list, and the image
//! info panel.

use crate::core::{FitScale, ImageSize, Ruler};

/// Overlay label drawn next to a ruler line.
#[must_use]
pub fn ruler_overlay_label(ruler: &Ruler) -> String {
    format!(
        "y: {}px, h: {}px, {:.3}%",
        ruler.y, ruler.height, ruler.percentage
    )
}

/// One entry of the textual ruler list (1-based index).
#[must_use]
pub fn ruler_list_entry(index: usize, ruler: &Ruler) -> String {
    format!(
        "Ruler {}: y: {}px, h: {}px, {:.3}%",
        index + 1,
        ruler.y,
        ruler.height,
        ruler.percentage
    )
}

/// Summary of the loaded image and current fit, shown by hosts in an info
/// panel.
#[must_use]
pub fn image_info_summary(image: ImageSize, fit: FitScale, ruler_count: usize) -> String {
    format!(
        "Original: {} x {}px, Displayed: {} x {}px, Scale: {:.1}%, Rulers: {}",
        image.width,
        image.height,
        fit.displayed_width().round(),
        fit.displayed_height().round(),
        fit.scale() * 100.0,
        ruler_count
    )
}
