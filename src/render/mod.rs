mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, TextHAlign, TextPrimitive};

use crate::error::RulerResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from measurement and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> RulerResult<()>;
}
