use crate::{constants::env::STATE_COLUMNS, data::FeatureFrame};

use super::{FiveActionEnv, RewardFn};

impl<R: RewardFn> FiveActionEnv<R> {
    /// The trailing window of feature rows ending just before the current tick,
    /// with the trade state broadcast over every row.
    pub fn get_observation(&self) -> FeatureFrame {
        let base = &self.base;
        let tick = base.current_tick;

        let state = [
            base.get_unrealized_profit(),
            base.position.value(),
            self.get_trade_duration() as f64,
        ];

        let columns: Vec<(&str, f64)> = STATE_COLUMNS.iter().copied().zip(state).collect();

        base.signal_features
            .slice_rows(tick - base.window_size, tick)
            .append_columns(&columns)
    }
}
