mod action;
pub mod environment;
mod snapshot;
mod space;

pub use action::Action;
pub use environment::Environment;
pub use snapshot::Snapshot;
pub use space::{ActionSpace, ObservationSpace};
