use serde::{Deserialize, Serialize};

/// Ordered repaint classes for one pending redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    /// Only the hover preview line moved.
    Cursor,
    /// Ledger, viewport, or style state changed.
    Full,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }
}

/// Domain-oriented invalidation topic used to classify repaint requests.
///
/// Hosts use topics to decide which sinks to refresh: `Ledger` drives the
/// textual ruler list as well as the overlay, `Cursor` only the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidationTopic {
    Cursor,
    Ledger,
    Viewport,
    Style,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::Cursor => 1 << 0,
            Self::Ledger => 1 << 1,
            Self::Viewport => 1 << 2,
            Self::Style => 1 << 3,
        }
    }
}

/// Bitmask of invalidation topics for selective redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationTopics {
    bits: u8,
}

impl InvalidationTopics {
    const ALL_BITS: u8 = InvalidationTopic::Cursor.bit()
        | InvalidationTopic::Ledger.bit()
        | InvalidationTopic::Viewport.bit()
        | InvalidationTopic::Style.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    #[must_use]
    pub const fn from_topic(topic: InvalidationTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn with_topic(self, topic: InvalidationTopic) -> Self {
        Self {
            bits: self.bits | topic.bit(),
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains_topic(self, topic: InvalidationTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }
}

/// Accumulated repaint request consumed by `render()` or taken by a host
/// scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PendingInvalidation {
    pub level: InvalidationLevel,
    pub topics: InvalidationTopics,
}

impl PendingInvalidation {
    pub fn merge(&mut self, level: InvalidationLevel, topic: InvalidationTopic) {
        self.level = self.level.max(level);
        self.topics = self.topics.with_topic(topic);
    }

    /// Returns the accumulated request and resets to the clean state.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    #[must_use]
    pub fn is_clean(self) -> bool {
        self.level == InvalidationLevel::None && self.topics.is_none()
    }
}
