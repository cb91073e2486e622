use serde::{Deserialize, Serialize};

/// Public hover preview state exposed to host applications.
///
/// The preview line is visible only while the pointer maps inside the
/// loaded image's vertical extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviewState {
    pub visible: bool,
    /// Pointer position in display space.
    pub display_y: f64,
    /// Mapped image-space position; `None` when out of bounds.
    pub image_y: Option<f64>,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            visible: false,
            display_y: 0.0,
            image_y: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    cursor_y: f64,
    preview: PreviewState,
}

impl PointerState {
    #[must_use]
    pub fn cursor_y(self) -> f64 {
        self.cursor_y
    }

    #[must_use]
    pub fn preview(self) -> PreviewState {
        self.preview
    }

    /// Records a pointer position and its image-space mapping.
    ///
    /// `image_y` carries the mapped coordinate when the pointer is inside
    /// the image; `None` hides the preview line.
    pub fn on_pointer_move(&mut self, display_y: f64, image_y: Option<f64>) {
        self.cursor_y = display_y;
        self.preview = PreviewState {
            visible: image_y.is_some(),
            display_y,
            image_y,
        };
    }

    pub fn on_pointer_leave(&mut self) {
        self.preview = PreviewState {
            visible: false,
            display_y: self.preview.display_y,
            image_y: None,
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
