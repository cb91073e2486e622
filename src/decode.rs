//! Host image-decoding seam.
//!
//! Raw decoding stays with the host environment (a browser, a desktop
//! toolkit, the `image` crate). The engine only needs natural dimensions,
//! and the guarantee that a rejected input mutates nothing.

use crate::core::ImageSize;
use crate::error::RulerResult;

/// Contract implemented by host image decoders.
///
/// `probe` returns the natural dimensions of the encoded image, or
/// `RulerError::UnsupportedFileType` for non-image input.
pub trait ImageDecoder {
    fn probe(&self, bytes: &[u8]) -> RulerResult<ImageSize>;
}
