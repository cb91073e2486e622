pub mod fit_scale;
pub mod ledger;
pub mod primitives;
pub mod types;

pub use fit_scale::{FitScale, FitScaleTuning};
pub use ledger::{PlacementOutcome, Ruler, RulerLedger, RulerLedgerTuning};
pub use types::{ContainerBounds, ImageSize};
