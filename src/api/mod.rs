mod engine;
mod engine_config;
mod engine_snapshot;
mod invalidation;
pub mod label_format;
mod render_frame_builder;
mod render_style;

pub use engine::{ClickOutcome, RulerEngine};
pub use engine_config::RulerEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use invalidation::{
    InvalidationLevel, InvalidationTopic, InvalidationTopics, PendingInvalidation,
};
pub use render_style::RenderStyle;
