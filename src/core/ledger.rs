use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::percent_of_height;
use crate::error::{RulerError, RulerResult};

/// One placed horizontal marker, stored in image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ruler {
    /// Vertical position in image-space pixels, within `[0, image height]`.
    pub y: u32,
    /// Distance from the previous ruler (or the image top for the first).
    ///
    /// Placement is not required to be monotonic: a ruler placed above the
    /// previous one records a negative height.
    pub height: i64,
    /// `height` as a percentage of the image's total height.
    pub percentage: f64,
}

/// Tuning for near-duplicate suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulerLedgerTuning {
    /// Placements closer than this to an existing ruler are ignored.
    #[serde(default = "default_duplicate_tolerance_px")]
    pub duplicate_tolerance_px: u32,
}

fn default_duplicate_tolerance_px() -> u32 {
    3
}

impl Default for RulerLedgerTuning {
    fn default() -> Self {
        Self {
            duplicate_tolerance_px: default_duplicate_tolerance_px(),
        }
    }
}

impl RulerLedgerTuning {
    pub fn validate(self) -> RulerResult<Self> {
        if self.duplicate_tolerance_px == 0 {
            return Err(RulerError::InvalidData(
                "duplicate tolerance must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Result of one placement attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementOutcome {
    Placed(Ruler),
    /// An existing ruler was within the duplicate tolerance; nothing changed.
    DuplicateIgnored,
}

/// Append-ordered sequence of placed rulers.
///
/// Each ruler's `height`/`percentage` are derived once, at insertion time,
/// from the ruler that was last at that moment. Only undo-from-end removal
/// exists, so earlier derivations never go stale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RulerLedger {
    rulers: SmallVec<[Ruler; 8]>,
    tuning: RulerLedgerTuning,
}

impl RulerLedger {
    #[must_use]
    pub fn new(tuning: RulerLedgerTuning) -> Self {
        Self {
            rulers: SmallVec::new(),
            tuning,
        }
    }

    #[must_use]
    pub fn tuning(&self) -> RulerLedgerTuning {
        self.tuning
    }

    #[must_use]
    pub fn rulers(&self) -> &[Ruler] {
        &self.rulers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rulers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rulers.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<Ruler> {
        self.rulers.last().copied()
    }

    /// Appends a ruler at `image_y`, deriving height and percentage from the
    /// current last ruler.
    ///
    /// Returns `DuplicateIgnored` without modifying the ledger when any
    /// existing ruler lies within the duplicate tolerance.
    pub fn place(&mut self, image_y: u32, image_height: u32) -> RulerResult<PlacementOutcome> {
        if image_height == 0 {
            return Err(RulerError::InvalidData(
                "image height must be > 0".to_owned(),
            ));
        }
        if image_y > image_height {
            return Err(RulerError::InvalidData(format!(
                "ruler position {image_y} exceeds image height {image_height}"
            )));
        }

        let tolerance = self.tuning.duplicate_tolerance_px;
        if self.rulers.iter().any(|r| r.y.abs_diff(image_y) < tolerance) {
            return Ok(PlacementOutcome::DuplicateIgnored);
        }

        let previous_y = self.rulers.last().map_or(0, |r| r.y);
        let height = i64::from(image_y) - i64::from(previous_y);
        let percentage = percent_of_height(height as f64, f64::from(image_height))?;

        let ruler = Ruler {
            y: image_y,
            height,
            percentage,
        };
        self.rulers.push(ruler);
        Ok(PlacementOutcome::Placed(ruler))
    }

    /// Removes and returns the last-placed ruler; `None` on an empty ledger.
    pub fn undo_last(&mut self) -> Option<Ruler> {
        self.rulers.pop()
    }

    pub fn clear(&mut self) {
        self.rulers.clear();
    }
}
