use serde::{Deserialize, Serialize};

use crate::core::{ContainerBounds, FitScaleTuning, RulerLedgerTuning};
use crate::error::{RulerError, RulerResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load their
/// measurement setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RulerEngineConfig {
    pub bounds: ContainerBounds,
    #[serde(default)]
    pub fit_tuning: FitScaleTuning,
    #[serde(default)]
    pub ledger_tuning: RulerLedgerTuning,
}

impl RulerEngineConfig {
    /// Creates a config with default tunings.
    #[must_use]
    pub fn new(bounds: ContainerBounds) -> Self {
        Self {
            bounds,
            fit_tuning: FitScaleTuning::default(),
            ledger_tuning: RulerLedgerTuning::default(),
        }
    }

    /// Sets the fit-scale clamp range.
    #[must_use]
    pub fn with_fit_tuning(mut self, tuning: FitScaleTuning) -> Self {
        self.fit_tuning = tuning;
        self
    }

    /// Sets the duplicate suppression tolerance.
    #[must_use]
    pub fn with_ledger_tuning(mut self, tuning: RulerLedgerTuning) -> Self {
        self.ledger_tuning = tuning;
        self
    }

    pub fn validate(self) -> RulerResult<Self> {
        if !self.bounds.is_valid() {
            return Err(RulerError::InvalidBounds {
                width: self.bounds.max_width,
                height: self.bounds.max_height,
            });
        }
        self.fit_tuning.validate()?;
        self.ledger_tuning.validate()?;
        Ok(self)
    }
}
