use std::{error::Error, path::Path};

use hashbrown::HashMap;

use crate::{
    charts::{position_chart, simple_chart},
    types::Positions,
    utils::create_folder_if_not_exists,
};

use super::{FiveActionEnv, RewardFn};

impl<R: RewardFn> FiveActionEnv<R> {
    /// Write the price/position chart plus profit and reward curves of the
    /// current episode into `dir`.
    pub fn render_all(&self, dir: &Path) -> Result<(), Box<dyn Error>> {
        create_folder_if_not_exists(dir)?;

        let opens: Vec<f64> = self.base.prices.iter().map(|candle| candle.open).collect();

        let mut long_ticks = HashMap::new();
        let mut short_ticks = HashMap::new();

        for (tick, position) in self.base.position_history.iter().enumerate() {
            let Some(price) = opens.get(tick) else {
                break;
            };
            match position {
                Some(Positions::Long) => {
                    long_ticks.insert(tick, *price);
                }
                Some(Positions::Short) => {
                    short_ticks.insert(tick, *price);
                }
                _ => {}
            }
        }

        position_chart(dir, &opens, &long_ticks, &short_ticks)?;
        simple_chart(dir, "total_profit", &self.base.history.total_profit)?;
        simple_chart(dir, "rewards", &self.base.history.rewards)?;

        Ok(())
    }
}
