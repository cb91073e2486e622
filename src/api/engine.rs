use tracing::{debug, warn};

use crate::core::{
    ContainerBounds, FitScale, FitScaleTuning, ImageSize, PlacementOutcome, Ruler, RulerLedger,
    RulerLedgerTuning,
};
use crate::decode::ImageDecoder;
use crate::error::{RulerError, RulerResult};
use crate::interaction::PointerState;
use crate::render::Renderer;

use super::render_frame_builder::build_render_frame;
use super::{
    EngineSnapshot, InvalidationLevel, InvalidationTopic, PendingInvalidation, RenderStyle,
    RulerEngineConfig,
};

/// Result of one click command.
///
/// Only `Placed` mutates the ledger; the rest are normal no-op conditions,
/// not errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    Placed(Ruler),
    DuplicateIgnored,
    OutOfBounds,
    NoImage,
}

/// Main orchestration facade consumed by host applications.
///
/// `RulerEngine` coordinates the fit scale, the ruler ledger, hover state,
/// and renderer calls. All commands are synchronous; each one either
/// succeeds immediately or is a no-op.
pub struct RulerEngine<R: Renderer> {
    renderer: R,
    bounds: ContainerBounds,
    fit_tuning: FitScaleTuning,
    style: RenderStyle,
    image: Option<ImageSize>,
    fit: Option<FitScale>,
    ledger: RulerLedger,
    pointer: PointerState,
    pending: PendingInvalidation,
}

impl<R: Renderer> RulerEngine<R> {
    pub fn new(renderer: R, config: RulerEngineConfig) -> RulerResult<Self> {
        let config = config.validate()?;

        Ok(Self {
            renderer,
            bounds: config.bounds,
            fit_tuning: config.fit_tuning,
            style: RenderStyle::default(),
            image: None,
            fit: None,
            ledger: RulerLedger::new(config.ledger_tuning),
            pointer: PointerState::default(),
            pending: PendingInvalidation::default(),
        })
    }

    /// Loads a decoded image, superseding all prior session state.
    ///
    /// The ledger is cleared and the fit scale recomputed; a rejected image
    /// leaves the previous session untouched.
    pub fn load_image(&mut self, image: ImageSize) -> RulerResult<()> {
        if !image.is_valid() {
            warn!(
                width = image.width,
                height = image.height,
                "rejected image with empty dimensions"
            );
            return Err(RulerError::InvalidImage {
                width: image.width,
                height: image.height,
            });
        }

        let fit = FitScale::compute(image, self.bounds, self.fit_tuning)?;
        self.image = Some(image);
        self.fit = Some(fit);
        self.ledger.clear();
        self.pointer.reset();
        self.pending
            .merge(InvalidationLevel::Full, InvalidationTopic::Viewport);
        self.pending
            .merge(InvalidationLevel::Full, InvalidationTopic::Ledger);
        debug!(
            width = image.width,
            height = image.height,
            scale = fit.scale(),
            "image loaded"
        );
        Ok(())
    }

    /// Runs the host decoder seam and loads the probed image.
    ///
    /// A decode failure surfaces as `UnsupportedFileType` with no state
    /// change.
    pub fn load_image_bytes<D: ImageDecoder>(
        &mut self,
        decoder: &D,
        bytes: &[u8],
    ) -> RulerResult<ImageSize> {
        let image = decoder.probe(bytes)?;
        self.load_image(image)?;
        Ok(image)
    }

    /// Recomputes the fit scale for new container bounds.
    ///
    /// The ledger is untouched: rulers live in image space.
    pub fn resize(&mut self, bounds: ContainerBounds) -> RulerResult<()> {
        if !bounds.is_valid() {
            return Err(RulerError::InvalidBounds {
                width: bounds.max_width,
                height: bounds.max_height,
            });
        }

        self.bounds = bounds;
        if let Some(image) = self.image {
            self.fit = Some(FitScale::compute(image, bounds, self.fit_tuning)?);
            self.pending
                .merge(InvalidationLevel::Full, InvalidationTopic::Viewport);
        }
        Ok(())
    }

    /// Read-only display-to-image query used for hover previews.
    ///
    /// `None` when no image is loaded or the position maps outside the
    /// image.
    #[must_use]
    pub fn probe_pointer(&self, display_y: f64) -> Option<f64> {
        let image = self.image?;
        let fit = self.fit?;
        let image_y = fit.display_to_image(display_y).ok()?;
        image.contains_y(image_y).then_some(image_y)
    }

    pub fn pointer_move(&mut self, display_y: f64) {
        let image_y = self.probe_pointer(display_y);
        self.pointer.on_pointer_move(display_y, image_y);
        self.pending
            .merge(InvalidationLevel::Cursor, InvalidationTopic::Cursor);
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.on_pointer_leave();
        self.pending
            .merge(InvalidationLevel::Cursor, InvalidationTopic::Cursor);
    }

    /// Converts a display-space click to image space and attempts a
    /// placement.
    ///
    /// The in-bounds image-space position is rounded to the nearest integer
    /// pixel before it reaches the ledger.
    pub fn click(&mut self, display_y: f64) -> RulerResult<ClickOutcome> {
        let (Some(image), Some(fit)) = (self.image, self.fit) else {
            return Ok(ClickOutcome::NoImage);
        };

        let image_y = fit.display_to_image(display_y)?;
        if !image.contains_y(image_y) {
            return Ok(ClickOutcome::OutOfBounds);
        }

        let rounded = image_y.round() as u32;
        match self.ledger.place(rounded, image.height)? {
            PlacementOutcome::Placed(ruler) => {
                self.pending
                    .merge(InvalidationLevel::Full, InvalidationTopic::Ledger);
                debug!(
                    y = ruler.y,
                    height = ruler.height,
                    percentage = ruler.percentage,
                    "ruler placed"
                );
                Ok(ClickOutcome::Placed(ruler))
            }
            PlacementOutcome::DuplicateIgnored => Ok(ClickOutcome::DuplicateIgnored),
        }
    }

    /// Removes the last-placed ruler; `None` on an empty ledger.
    pub fn undo_last(&mut self) -> Option<Ruler> {
        let removed = self.ledger.undo_last();
        if let Some(ruler) = removed {
            self.pending
                .merge(InvalidationLevel::Full, InvalidationTopic::Ledger);
            debug!(y = ruler.y, "ruler removed");
        }
        removed
    }

    pub fn clear_rulers(&mut self) {
        if !self.ledger.is_empty() {
            self.ledger.clear();
            self.pending
                .merge(InvalidationLevel::Full, InvalidationTopic::Ledger);
            debug!("ledger cleared");
        }
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.ledger.is_empty()
    }

    #[must_use]
    pub fn can_clear(&self) -> bool {
        !self.ledger.is_empty()
    }

    #[must_use]
    pub fn rulers(&self) -> &[Ruler] {
        self.ledger.rulers()
    }

    #[must_use]
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    #[must_use]
    pub fn image(&self) -> Option<ImageSize> {
        self.image
    }

    #[must_use]
    pub fn fit_scale(&self) -> Option<FitScale> {
        self.fit
    }

    #[must_use]
    pub fn bounds(&self) -> ContainerBounds {
        self.bounds
    }

    #[must_use]
    pub fn ledger_tuning(&self) -> RulerLedgerTuning {
        self.ledger.tuning()
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> RulerResult<()> {
        self.style = style.validate()?;
        self.pending
            .merge(InvalidationLevel::Full, InvalidationTopic::Style);
        Ok(())
    }

    #[must_use]
    pub fn pending_invalidation(&self) -> PendingInvalidation {
        self.pending
    }

    /// Hands the accumulated repaint request to a host-driven scheduler.
    pub fn take_invalidation(&mut self) -> PendingInvalidation {
        self.pending.take()
    }

    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            image: self.image,
            bounds: self.bounds,
            fit: self.fit,
            rulers: self.ledger.rulers().to_vec(),
            preview: self.pointer.preview(),
        }
    }

    /// Builds the overlay frame and hands it to the renderer.
    ///
    /// Skipped while nothing is invalidated; a no-op (still clearing the
    /// pending request) when no image is loaded.
    pub fn render(&mut self) -> RulerResult<()> {
        if self.pending.is_clean() {
            return Ok(());
        }

        if let Some(fit) = self.fit {
            let frame =
                build_render_frame(fit, self.ledger.rulers(), self.pointer.preview(), self.style)?;
            self.renderer.render(&frame)?;
        }
        self.pending.take();
        Ok(())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
