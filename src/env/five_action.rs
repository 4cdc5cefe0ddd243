use ndarray::Array1;
use tracing::{debug, warn};

use crate::{
    config::EnvConfig,
    constants::env::STATE_COLUMNS,
    data::{Candle, FeatureFrame},
    error::Result,
    gym::{
        base::{ActionSpace, Environment, ObservationSpace, Snapshot},
        Actions,
    },
    history::EpisodeHistory,
    types::{Positions, StepInfo, TradeRecord, TradeType},
};

use super::{BaseEnv, DefaultReward, RewardFn};

/// Five-action, single-position trading environment:
/// neutral, enter long, exit long, enter short, exit short.
#[derive(Debug, Clone)]
pub struct FiveActionEnv<R: RewardFn = DefaultReward> {
    pub base: BaseEnv,
    reward_fn: R,
    action_space: ActionSpace,
}

impl FiveActionEnv<DefaultReward> {
    pub fn new(signal_features: FeatureFrame, prices: Vec<Candle>, config: EnvConfig) -> Result<Self> {
        let reward_fn = DefaultReward::new(config.reward.clone());
        Self::with_reward(signal_features, prices, config, reward_fn)
    }
}

impl<R: RewardFn> FiveActionEnv<R> {
    pub fn with_reward(
        signal_features: FeatureFrame,
        prices: Vec<Candle>,
        config: EnvConfig,
        reward_fn: R,
    ) -> Result<Self> {
        let base = BaseEnv::new(signal_features, prices, &config)?;

        let mut env = Self {
            base,
            reward_fn,
            action_space: ActionSpace::Discrete(0),
        };
        Self::set_action_space(&mut env);
        Ok(env)
    }

    pub fn set_action_space(&mut self) -> ActionSpace {
        self.action_space = ActionSpace::Discrete(Actions::COUNT);
        self.action_space
    }

    pub fn action_space(&self) -> ActionSpace {
        self.action_space
    }

    pub fn observation_space(&self) -> ObservationSpace {
        ObservationSpace {
            shape: (
                self.base.window_size,
                self.base.signal_features.width() + STATE_COLUMNS.len(),
            ),
            low: -1.0,
            high: 1.0,
        }
    }

    pub fn reset(&mut self) -> FeatureFrame {
        let base = &mut self.base;
        base.done = false;

        let padding = if base.starting_point {
            base.start_tick
        } else {
            base.window_size
        };

        base.current_tick = base.start_tick;
        base.last_trade_tick = None;
        base.position = Positions::Neutral;
        base.position_history = vec![None; padding];
        base.position_history.push(Some(base.position));

        base.total_reward = 0.0;
        base.total_profit = 1.0;
        base.total_unrealized_profit = 1.0;
        base.history = EpisodeHistory::default();
        base.trade_history.clear();
        base.portfolio_log_returns = Array1::zeros(base.prices.len());

        self.get_observation()
    }

    /// Advance one tick with `action`. Ids outside the action space are
    /// logged and otherwise ignored by the transition.
    pub fn step(&mut self, action: usize) -> (FeatureFrame, f64, bool, StepInfo) {
        self.base.done = false;
        self.base.current_tick += 1;

        if self.base.current_tick == self.base.end_tick {
            self.base.done = true;
        }

        self.base.update_portfolio_log_returns();
        self.base.update_unrealized_total_profit();

        let step_reward = self.reward_fn.calculate_reward(self, action);
        self.base.total_reward += step_reward;
        self.base.history.record_action(action);

        if self.is_tradesignal(action) {
            self.apply_trade_signal(action);
        }

        if self.base.total_profit < self.base.max_drawdown
            || self.base.total_unrealized_profit < self.base.max_drawdown
        {
            self.base.done = true;
        }

        self.base.position_history.push(Some(self.base.position));

        let info = StepInfo {
            tick: self.base.current_tick,
            total_reward: self.base.total_reward,
            total_profit: self.base.total_profit,
            position: self.base.position.value(),
        };

        let observation = self.get_observation();
        self.base.update_history(&info, step_reward);

        if self.base.done {
            debug!(
                env = %self.base.id,
                tick = info.tick,
                total_profit = info.total_profit,
                total_reward = info.total_reward,
                trades = self.base.trade_history.len(),
                "episode done"
            );
        }

        (observation, step_reward, self.base.done, info)
    }

    fn apply_trade_signal(&mut self, action: usize) {
        let base = &mut self.base;

        let trade_type = match Actions::try_from(action) {
            Ok(Actions::Neutral) => {
                base.position = Positions::Neutral;
                base.last_trade_tick = None;
                TradeType::Neutral
            }
            Ok(Actions::LongEnter) => {
                base.position = Positions::Long;
                base.last_trade_tick = Some(base.current_tick);
                TradeType::Long
            }
            Ok(Actions::ShortEnter) => {
                base.position = Positions::Short;
                base.last_trade_tick = Some(base.current_tick);
                TradeType::Short
            }
            Ok(Actions::LongExit | Actions::ShortExit) => {
                base.update_total_profit();
                base.position = Positions::Neutral;
                base.last_trade_tick = None;
                TradeType::Neutral
            }
            Err(unknown) => {
                warn!(env = %base.id, action = unknown, tick = base.current_tick, "case not defined");
                return;
            }
        };

        base.trade_history.push(TradeRecord {
            price: base.current_price(),
            index: base.current_tick,
            trade_type,
        });
    }

    pub fn get_trade_duration(&self) -> usize {
        match self.base.last_trade_tick {
            Some(last_trade_tick) => self.base.current_tick - last_trade_tick,
            None => 0,
        }
    }

    /// Whether `action` moves the position from where it currently is.
    /// Unknown ids count as signals and are dropped later by the transition.
    pub fn is_tradesignal(&self, action: usize) -> bool {
        let Ok(action) = Actions::try_from(action) else {
            return true;
        };

        !matches!(
            (action, self.base.position),
            (Actions::Neutral, Positions::Neutral)
                | (Actions::Neutral, Positions::Short)
                | (Actions::Neutral, Positions::Long)
                | (Actions::ShortEnter, Positions::Short)
                | (Actions::ShortEnter, Positions::Long)
                | (Actions::ShortExit, Positions::Long)
                | (Actions::ShortExit, Positions::Neutral)
                | (Actions::LongEnter, Positions::Long)
                | (Actions::LongEnter, Positions::Short)
                | (Actions::LongExit, Positions::Short)
                | (Actions::LongExit, Positions::Neutral)
        )
    }

    /// Exits need any open position, entries need a flat one.
    /// Either exit counts as valid from either side, unlike `is_tradesignal`.
    pub fn is_valid(&self, action: usize) -> bool {
        match Actions::try_from(action) {
            Ok(action) if action.is_exit() => self.base.position.is_open(),
            Ok(action) if action.is_enter() => self.base.position == Positions::Neutral,
            _ => true,
        }
    }

    pub fn position(&self) -> Positions {
        self.base.position
    }

    pub fn trade_history(&self) -> &[TradeRecord] {
        &self.base.trade_history
    }
}

impl<R: RewardFn> Environment for FiveActionEnv<R> {
    type ActionType = Actions;
    type Observation = FeatureFrame;

    fn set_action_space(&self) -> ActionSpace {
        ActionSpace::Discrete(Actions::COUNT)
    }

    fn observation_space(&self) -> ObservationSpace {
        FiveActionEnv::observation_space(self)
    }

    fn reset(&mut self) -> FeatureFrame {
        FiveActionEnv::reset(self)
    }

    fn step(&mut self, action: usize) -> Snapshot<Self> {
        let (observation, reward, done, info) = FiveActionEnv::step(self, action);
        Snapshot::new(observation, reward, done, info)
    }
}
