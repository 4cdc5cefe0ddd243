pub const TICKER: &str = "SYNTH";

pub mod env {
    pub const WINDOW_SIZE: usize = 10;
    /// Round-trip fee applied on entry and exit prices
    pub const FEE: f64 = 0.0015;
    /// Episode ends once profit falls below `1 - MAX_TRAINING_DRAWDOWN_PCT`
    pub const MAX_TRAINING_DRAWDOWN_PCT: f64 = 0.8;
    pub const STATE_COLUMNS: [&str; 3] = ["current_profit_pct", "position", "trade_duration"];
}

pub mod reward {
    pub const RR: f64 = 1.0;
    pub const PROFIT_AIM: f64 = 0.025;
    pub const WIN_REWARD_FACTOR: f64 = 2.0;
    pub const MAX_TRADE_DURATION_CANDLES: usize = 300;
    pub const INVALID_ACTION: f64 = -2.0;
    pub const ENTER_TRADE: f64 = 25.0;
    pub const IDLE: f64 = -1.0;
    pub const BASE_FACTOR: f64 = 100.0;
}

pub mod files {
    pub const DATA_PATH: &str = "data";
    pub const TRAINING_PATH: &str = "training";
}

pub mod synthetic {
    pub const TICKS: usize = 2_000;
    pub const START_PRICE: f64 = 100.0;
    /// Max absolute percent move per tick
    pub const MAX_MOVE: f64 = 0.02;
}

pub const CHART_IMAGE_FORMAT: &str = "png";
