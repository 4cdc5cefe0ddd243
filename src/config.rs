use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{env, reward},
    error::Result,
};

/// Knobs for a single environment instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    pub window_size: usize,
    /// Pad the position history up to the start tick instead of the window size
    pub starting_point: bool,
    pub fee: f64,
    pub max_training_drawdown_pct: f64,
    /// Compound profit multiplicatively (unlimited stake) instead of summing
    pub compound_trades: bool,
    pub reward: RewardConfig,
    pub seed: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            window_size: env::WINDOW_SIZE,
            starting_point: true,
            fee: env::FEE,
            max_training_drawdown_pct: env::MAX_TRAINING_DRAWDOWN_PCT,
            compound_trades: true,
            reward: RewardConfig::default(),
            seed: 1,
        }
    }
}

impl EnvConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn max_drawdown(&self) -> f64 {
        1.0 - self.max_training_drawdown_pct
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Risk/reward ratio
    pub rr: f64,
    pub profit_aim: f64,
    pub win_reward_factor: f64,
    pub max_trade_duration_candles: usize,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            rr: reward::RR,
            profit_aim: reward::PROFIT_AIM,
            win_reward_factor: reward::WIN_REWARD_FACTOR,
            max_trade_duration_candles: reward::MAX_TRADE_DURATION_CANDLES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EnvConfig::from_json_str(
            r#"{ "window_size": 4, "reward": { "profit_aim": 0.05 } }"#,
        )
        .unwrap();

        assert_eq!(config.window_size, 4);
        assert_eq!(config.fee, env::FEE);
        assert_eq!(config.reward.profit_aim, 0.05);
        assert_eq!(config.reward.rr, reward::RR);
        assert!(config.compound_trades);
    }

    #[test]
    fn drawdown_threshold_is_complement_of_pct() {
        let config = EnvConfig {
            max_training_drawdown_pct: 0.75,
            ..Default::default()
        };
        assert!((config.max_drawdown() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(EnvConfig::from_json_str("{ window_size: }").is_err());
    }
}
