use ndarray::{s, Array1, ArrayView1};
use uuid::Uuid;

use crate::{
    config::EnvConfig,
    data::{Candle, FeatureFrame},
    error::{EnvError, Result},
    history::EpisodeHistory,
    types::{Positions, StepInfo, TradeRecord},
    utils::mean_over_std,
};

/// Tick bookkeeping, price/feature series and profit accounting shared by
/// trading environments. The action semantics live on top of it.
#[derive(Debug, Clone)]
pub struct BaseEnv {
    pub id: Uuid,
    pub signal_features: FeatureFrame,
    pub prices: Vec<Candle>,
    pub window_size: usize,
    pub starting_point: bool,
    pub start_tick: usize,
    pub end_tick: usize,
    pub current_tick: usize,
    pub last_trade_tick: Option<usize>,
    pub position: Positions,
    pub position_history: Vec<Option<Positions>>,
    pub total_reward: f64,
    pub total_profit: f64,
    pub total_unrealized_profit: f64,
    pub trade_history: Vec<TradeRecord>,
    pub history: EpisodeHistory,
    pub portfolio_log_returns: Array1<f64>,
    pub fee: f64,
    pub max_drawdown: f64,
    pub compound_trades: bool,
    pub done: bool,
}

impl BaseEnv {
    pub fn new(signal_features: FeatureFrame, prices: Vec<Candle>, config: &EnvConfig) -> Result<Self> {
        if prices.is_empty() {
            return Err(EnvError::EmptyPrices);
        }
        signal_features.validate()?;
        if signal_features.len() != prices.len() {
            return Err(EnvError::LengthMismatch {
                features: signal_features.len(),
                prices: prices.len(),
            });
        }
        if config.window_size == 0 {
            return Err(EnvError::ZeroWindow);
        }
        if prices.len() <= config.window_size + 1 {
            return Err(EnvError::SeriesTooShort {
                ticks: prices.len(),
                window_size: config.window_size,
            });
        }

        let start_tick = config.window_size;
        let end_tick = prices.len() - 1;
        let ticks = prices.len();

        Ok(Self {
            id: Uuid::new_v4(),
            signal_features,
            prices,
            window_size: config.window_size,
            starting_point: config.starting_point,
            start_tick,
            end_tick,
            current_tick: start_tick,
            last_trade_tick: None,
            position: Positions::Neutral,
            position_history: vec![None],
            total_reward: 0.0,
            total_profit: 1.0,
            total_unrealized_profit: 1.0,
            trade_history: Vec::new(),
            history: EpisodeHistory::default(),
            portfolio_log_returns: Array1::zeros(ticks),
            fee: config.fee,
            max_drawdown: config.max_drawdown(),
            compound_trades: config.compound_trades,
            done: false,
        })
    }

    fn open_at(&self, tick: usize) -> f64 {
        self.prices[tick].open
    }

    pub fn current_price(&self) -> f64 {
        self.open_at(self.current_tick)
    }

    pub fn add_entry_fee(&self, price: f64) -> f64 {
        price * (1.0 + self.fee)
    }

    pub fn add_exit_fee(&self, price: f64) -> f64 {
        price / (1.0 + self.fee)
    }

    /// Fee-adjusted fractional profit of the open trade at the current tick.
    pub fn get_unrealized_profit(&self) -> f64 {
        let Some(last_trade_tick) = self.last_trade_tick else {
            return 0.0;
        };

        match self.position {
            Positions::Neutral => 0.0,
            Positions::Short => {
                let current_price = self.add_entry_fee(self.current_price());
                let last_trade_price = self.add_exit_fee(self.open_at(last_trade_tick));
                (last_trade_price - current_price) / last_trade_price
            }
            Positions::Long => {
                let current_price = self.add_exit_fee(self.current_price());
                let last_trade_price = self.add_entry_fee(self.open_at(last_trade_tick));
                (current_price - last_trade_price) / last_trade_price
            }
        }
    }

    fn apply_pnl(&self, pnl: f64) -> f64 {
        if self.compound_trades {
            self.total_profit * (1.0 + pnl)
        } else {
            self.total_profit + pnl
        }
    }

    /// Only moves while a position is open, otherwise keeps the last value.
    pub fn update_unrealized_total_profit(&mut self) {
        if self.position.is_open() {
            self.total_unrealized_profit = self.apply_pnl(self.get_unrealized_profit());
        }
    }

    pub fn update_total_profit(&mut self) {
        self.total_profit = self.apply_pnl(self.get_unrealized_profit());
    }

    /// Tick-to-tick log return of the held position, charging the fee on the
    /// first tick of a trade.
    pub fn most_recent_return(&self) -> f64 {
        if !self.position.is_open() {
            return 0.0;
        }

        let current_price = self.current_price();
        let previous_tick = self.current_tick - 1;
        let mut previous_price = self.open_at(previous_tick);
        let previous_position = self.position_history.get(previous_tick).copied().flatten();

        match self.position {
            Positions::Long => {
                if matches!(previous_position, Some(Positions::Short | Positions::Neutral)) {
                    previous_price = self.add_entry_fee(previous_price);
                }
                current_price.ln() - previous_price.ln()
            }
            Positions::Short => {
                if matches!(previous_position, Some(Positions::Long | Positions::Neutral)) {
                    previous_price = self.add_exit_fee(previous_price);
                }
                previous_price.ln() - current_price.ln()
            }
            Positions::Neutral => 0.0,
        }
    }

    pub fn update_portfolio_log_returns(&mut self) {
        let tick = self.current_tick;
        self.portfolio_log_returns[tick] = self.most_recent_return();
    }

    pub fn get_portfolio_log_returns(&self) -> ArrayView1<'_, f64> {
        self.portfolio_log_returns.slice(s![1..self.current_tick + 1])
    }

    pub fn get_sharpe_ratio(&self) -> f64 {
        let returns = self.get_portfolio_log_returns().to_vec();
        mean_over_std(&returns)
    }

    pub fn update_history(&mut self, info: &StepInfo, reward: f64) {
        self.history.record_info(info, reward);
    }
}
