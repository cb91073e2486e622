use serde::{Deserialize, Serialize};

use crate::core::types::{ContainerBounds, ImageSize};
use crate::error::{RulerError, RulerResult};

/// Clamp range applied to the computed fit scale.
///
/// Small images are never shrunk below `min_scale` and may intentionally
/// overflow the container; generous bounds never push the scale above
/// `max_scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitScaleTuning {
    #[serde(default = "default_min_scale")]
    pub min_scale: f64,
    #[serde(default = "default_max_scale")]
    pub max_scale: f64,
}

fn default_min_scale() -> f64 {
    0.5
}

fn default_max_scale() -> f64 {
    2.0
}

impl Default for FitScaleTuning {
    fn default() -> Self {
        Self {
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
        }
    }
}

impl FitScaleTuning {
    pub fn validate(self) -> RulerResult<Self> {
        if !self.min_scale.is_finite() || !self.max_scale.is_finite() {
            return Err(RulerError::InvalidData(
                "scale tuning must be finite".to_owned(),
            ));
        }
        if self.min_scale <= 0.0 || self.max_scale < self.min_scale {
            return Err(RulerError::InvalidData(
                "scale tuning requires 0 < min_scale <= max_scale".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Uniform aspect-preserving display scale for one image within one
/// container, with bidirectional display/image coordinate mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitScale {
    scale: f64,
    offset_y: f64,
    displayed_width: f64,
    displayed_height: f64,
}

impl FitScale {
    /// Computes the fit for `image` within `bounds`.
    ///
    /// The raw fit is `min(bounds.max_width / image.width,
    /// bounds.max_height / image.height)`, clamped to the tuning range.
    pub fn compute(
        image: ImageSize,
        bounds: ContainerBounds,
        tuning: FitScaleTuning,
    ) -> RulerResult<Self> {
        if !image.is_valid() {
            return Err(RulerError::InvalidImage {
                width: image.width,
                height: image.height,
            });
        }
        if !bounds.is_valid() {
            return Err(RulerError::InvalidBounds {
                width: bounds.max_width,
                height: bounds.max_height,
            });
        }
        let tuning = tuning.validate()?;

        let scale_x = bounds.max_width / f64::from(image.width);
        let scale_y = bounds.max_height / f64::from(image.height);
        let scale = scale_x
            .min(scale_y)
            .clamp(tuning.min_scale, tuning.max_scale);

        Ok(Self {
            scale,
            // No panning yet; mappings already honor the offset.
            offset_y: 0.0,
            displayed_width: f64::from(image.width) * scale,
            displayed_height: f64::from(image.height) * scale,
        })
    }

    #[must_use]
    pub fn scale(self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn offset_y(self) -> f64 {
        self.offset_y
    }

    #[must_use]
    pub fn displayed_width(self) -> f64 {
        self.displayed_width
    }

    #[must_use]
    pub fn displayed_height(self) -> f64 {
        self.displayed_height
    }

    pub fn display_to_image(self, display_y: f64) -> RulerResult<f64> {
        if !display_y.is_finite() {
            return Err(RulerError::InvalidData(
                "display coordinate must be finite".to_owned(),
            ));
        }
        Ok((display_y - self.offset_y) / self.scale)
    }

    pub fn image_to_display(self, image_y: f64) -> RulerResult<f64> {
        if !image_y.is_finite() {
            return Err(RulerError::InvalidData(
                "image coordinate must be finite".to_owned(),
            ));
        }
        Ok(image_y * self.scale + self.offset_y)
    }
}
