use crate::{
    config::RewardConfig,
    constants::reward::{BASE_FACTOR, ENTER_TRADE, IDLE, INVALID_ACTION},
    gym::Actions,
    types::Positions,
};

use super::FiveActionEnv;

/// Reward hook evaluated once per step, before the position transition.
pub trait RewardFn: Sized {
    fn calculate_reward(&self, env: &FiveActionEnv<Self>, action: usize) -> f64;
}

/// Rewards entries, punishes idling and invalid actions, pays out the
/// trade's pnl on a matching exit scaled by how long it was held.
#[derive(Debug, Clone, Default)]
pub struct DefaultReward {
    pub config: RewardConfig,
}

impl DefaultReward {
    pub fn new(config: RewardConfig) -> Self {
        Self { config }
    }
}

impl RewardFn for DefaultReward {
    fn calculate_reward(&self, env: &FiveActionEnv<Self>, action: usize) -> f64 {
        if !env.is_valid(action) {
            return INVALID_ACTION;
        }
        let Ok(action) = Actions::try_from(action) else {
            return 0.0;
        };

        let position = env.base.position;
        let pnl = env.base.get_unrealized_profit();

        if action.is_enter() && position == Positions::Neutral {
            return ENTER_TRADE;
        }
        if action == Actions::Neutral && position == Positions::Neutral {
            return IDLE;
        }

        let max_trade_duration = self.config.max_trade_duration_candles.max(1) as f64;
        let trade_duration = env.get_trade_duration() as f64;

        let mut factor = BASE_FACTOR;
        if trade_duration <= max_trade_duration {
            factor *= 1.5;
        } else {
            factor *= 0.5;
        }

        if position.is_open() && action == Actions::Neutral {
            return -trade_duration / max_trade_duration;
        }

        let closes_position = matches!(
            (action, position),
            (Actions::LongExit, Positions::Long) | (Actions::ShortExit, Positions::Short)
        );
        if closes_position {
            if pnl > self.config.profit_aim * self.config.rr {
                factor *= self.config.win_reward_factor;
            }
            return pnl * factor;
        }

        0.0
    }
}
