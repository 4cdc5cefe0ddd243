use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("price series is empty")]
    EmptyPrices,

    #[error("feature rows ({features}) do not match price rows ({prices})")]
    LengthMismatch { features: usize, prices: usize },

    #[error("window size must be at least 1")]
    ZeroWindow,

    #[error("{ticks} ticks cannot fit a window of {window_size} plus one step")]
    SeriesTooShort { ticks: usize, window_size: usize },

    #[error("frame shape mismatch: {0}")]
    FrameShape(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset decode error: {0}")]
    Postcard(#[from] postcard::Error),

    #[error("config error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EnvError>;
