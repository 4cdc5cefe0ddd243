use enum_map::EnumMap;

use crate::{gym::Actions, types::StepInfo};

/// Per-step info of one episode, one column per info field.
#[derive(Debug, Clone, Default)]
pub struct EpisodeHistory {
    pub tick: Vec<usize>,
    pub total_reward: Vec<f64>,
    pub total_profit: Vec<f64>,
    pub position: Vec<f64>,
    pub rewards: Vec<f64>,
    pub actions: EnumMap<Actions, usize>,
    /// Raw action ids outside the action space
    pub ignored_actions: usize,
}

impl EpisodeHistory {
    pub fn record_info(&mut self, info: &StepInfo, reward: f64) {
        self.tick.push(info.tick);
        self.total_reward.push(info.total_reward);
        self.total_profit.push(info.total_profit);
        self.position.push(info.position);
        self.rewards.push(reward);
    }

    pub fn record_action(&mut self, action: usize) {
        match Actions::try_from(action) {
            Ok(action) => self.actions[action] += 1,
            Err(_) => self.ignored_actions += 1,
        }
    }

    pub fn len(&self) -> usize {
        self.tick.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tick.is_empty()
    }

    pub fn final_profit(&self) -> Option<f64> {
        self.total_profit.last().copied()
    }

    pub fn cumulative_reward(&self) -> f64 {
        self.total_reward.last().copied().unwrap_or(0.0)
    }
}
