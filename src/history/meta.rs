use std::path::Path;

use crate::{charts::simple_chart, history::EpisodeHistory, utils::create_folder_if_not_exists};

/// One entry per finished episode.
#[derive(Default, Debug)]
pub struct MetaHistory {
    pub final_profit: Vec<f64>,
    pub cumulative_reward: Vec<f64>,
    pub trades: Vec<f64>,
    pub sharpe: Vec<f64>,
}

impl MetaHistory {
    pub fn record(&mut self, history: &EpisodeHistory, trades: usize, sharpe: f64) {
        self.final_profit.push(history.final_profit().unwrap_or(1.0));
        self.cumulative_reward.push(history.cumulative_reward());
        self.trades.push(trades as f64);
        self.sharpe.push(sharpe);
    }

    pub fn len(&self) -> usize {
        self.final_profit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.final_profit.is_empty()
    }

    pub fn avg_final_profit(&self) -> f64 {
        if self.final_profit.is_empty() {
            return 0.0;
        }
        self.final_profit.iter().sum::<f64>() / self.final_profit.len() as f64
    }

    pub fn chart(&self, dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
        create_folder_if_not_exists(dir)?;
        if self.is_empty() {
            return Ok(());
        }

        simple_chart(dir, "final_profit", &self.final_profit)?;
        simple_chart(dir, "cum_reward", &self.cumulative_reward)?;
        simple_chart(dir, "trades", &self.trades)?;
        simple_chart(dir, "sharpe", &self.sharpe)?;
        Ok(())
    }
}
