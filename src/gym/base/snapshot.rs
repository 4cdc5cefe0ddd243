use crate::types::StepInfo;

use super::Environment;

/// Everything a single `step` hands back to the caller.
pub struct Snapshot<E: Environment + ?Sized> {
    pub observation: E::Observation,
    pub reward: f64,
    pub done: bool,
    pub info: StepInfo,
}

impl<E: Environment + ?Sized> Snapshot<E> {
    pub fn new(observation: E::Observation, reward: f64, done: bool, info: StepInfo) -> Self {
        Self {
            observation,
            reward,
            done,
            info,
        }
    }
}
