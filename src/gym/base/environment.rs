use super::{Action, ActionSpace, ObservationSpace, Snapshot};

/// Interface consumed by a generic training loop.
pub trait Environment {
    type ActionType: Action;
    type Observation: Clone + std::fmt::Debug;

    fn set_action_space(&self) -> ActionSpace;

    fn observation_space(&self) -> ObservationSpace;

    fn reset(&mut self) -> Self::Observation;

    /// Raw action ids outside the action space are accepted and ignored by the transition.
    fn step(&mut self, action: usize) -> Snapshot<Self>;
}
