use std::{fs, path::Path};

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    constants::synthetic::{MAX_MOVE, START_PRICE},
    data::frame::FeatureFrame,
    error::Result,
    utils::create_folder_if_not_exists,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub date: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Prices plus the precomputed features aligned to them, as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub candles: Vec<Candle>,
    pub features: FeatureFrame,
}

impl Dataset {
    pub fn from_candles(candles: Vec<Candle>) -> Self {
        let features = FeatureFrame::from_candles(&candles);
        Self { candles, features }
    }
}

pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let file = fs::read(path)?;
    let dataset: Dataset = postcard::from_bytes(&file)?;
    Ok(dataset)
}

pub fn save_dataset(path: impl AsRef<Path>, dataset: &Dataset) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        create_folder_if_not_exists(parent)?;
    }

    let encoded = postcard::to_allocvec(dataset)?;
    fs::write(path, encoded)?;

    info!(path = %path.display(), candles = dataset.candles.len(), "wrote dataset");
    Ok(())
}

/// Seeded random walk of 5 minute candles.
pub fn synthetic_candles(ticks: usize, seed: u64) -> Vec<Candle> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap_or(DateTime::UNIX_EPOCH);

    let mut candles = Vec::with_capacity(ticks);
    let mut price = START_PRICE;

    for tick in 0..ticks {
        let open = price;
        let close = (open * (1.0 + rng.gen_range(-MAX_MOVE..MAX_MOVE))).max(1.0);
        let high = open.max(close) * (1.0 + rng.gen_range(0.0..MAX_MOVE / 2.0));
        let low = open.min(close) * (1.0 - rng.gen_range(0.0..MAX_MOVE / 2.0));

        candles.push(Candle {
            date: start + Duration::minutes(5 * tick as i64),
            open,
            high,
            low,
            close,
            volume: rng.gen_range(100.0..10_000.0),
        });

        price = close;
    }

    candles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_series_is_deterministic_per_seed() {
        let a = synthetic_candles(50, 7);
        let b = synthetic_candles(50, 7);
        let c = synthetic_candles(50, 8);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 50);
    }

    #[test]
    fn synthetic_candles_are_well_formed() {
        let candles = synthetic_candles(200, 3);

        for pair in candles.windows(2) {
            assert_eq!(pair[1].open, pair[0].close);
            assert!(pair[1].date > pair[0].date);
        }
        for candle in &candles {
            assert!(candle.high >= candle.open.max(candle.close));
            assert!(candle.low <= candle.open.min(candle.close));
            assert!(candle.open >= 1.0);
        }
    }

    #[test]
    fn dataset_survives_a_file_round_trip() {
        let dataset = Dataset::from_candles(synthetic_candles(20, 11));
        let path = std::env::temp_dir().join(format!("trading_gym_{}.bin", uuid::Uuid::new_v4()));

        save_dataset(&path, &dataset).unwrap();
        let loaded = load_dataset(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, dataset);
    }

    #[test]
    fn missing_dataset_is_an_io_error() {
        let result = load_dataset("/definitely/not/here.bin");
        assert!(matches!(result, Err(crate::error::EnvError::Io(_))));
    }
}
