use serde::{Deserialize, Serialize};

use crate::core::{ContainerBounds, FitScale, ImageSize, Ruler};
use crate::interaction::PreviewState;

/// Serializable deterministic state snapshot used by observers, regression
/// tests, and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub image: Option<ImageSize>,
    pub bounds: ContainerBounds,
    pub fit: Option<FitScale>,
    pub rulers: Vec<Ruler>,
    pub preview: PreviewState,
}

impl EngineSnapshot {
    #[must_use]
    pub fn ruler_count(&self) -> usize {
        self.rulers.len()
    }
}
