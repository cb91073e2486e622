use serde::{Deserialize, Serialize};

/// Natural (undisplayed) image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Whether an image-space Y coordinate lies within `[0, height]`.
    #[must_use]
    pub fn contains_y(self, image_y: f64) -> bool {
        image_y.is_finite() && image_y >= 0.0 && image_y <= f64::from(self.height)
    }
}

/// Display area available to the image, in display-space pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerBounds {
    pub max_width: f64,
    pub max_height: f64,
}

impl ContainerBounds {
    #[must_use]
    pub fn new(max_width: f64, max_height: f64) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.max_width.is_finite()
            && self.max_height.is_finite()
            && self.max_width > 0.0
            && self.max_height > 0.0
    }
}
