use crate::error::{RulerError, RulerResult};
use crate::render::{LinePrimitive, TextPrimitive};

/// Backend-agnostic overlay scene for one draw pass.
///
/// The surface covers the displayed image; labels may extend past its right
/// edge into the host's label gutter.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub surface_width: f64,
    pub surface_height: f64,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(surface_width: f64, surface_height: f64) -> Self {
        Self {
            surface_width,
            surface_height,
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> RulerResult<()> {
        if !self.surface_width.is_finite()
            || !self.surface_height.is_finite()
            || self.surface_width <= 0.0
            || self.surface_height <= 0.0
        {
            return Err(RulerError::InvalidData(format!(
                "render surface must be finite and positive: width={}, height={}",
                self.surface_width, self.surface_height
            )));
        }

        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.texts.is_empty()
    }
}
