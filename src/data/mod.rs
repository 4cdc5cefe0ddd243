pub mod frame;
pub mod historical;

pub use frame::FeatureFrame;
pub use historical::{load_dataset, save_dataset, synthetic_candles, Candle, Dataset};
