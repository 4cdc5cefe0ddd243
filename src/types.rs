use serde::{Deserialize, Serialize};

/// Directional exposure held by the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Positions {
    Short,
    Long,
    #[default]
    Neutral,
}

impl Positions {
    /// Numeric code fed to the observation and the step info.
    pub fn value(&self) -> f64 {
        match self {
            Positions::Short => 0.0,
            Positions::Long => 1.0,
            Positions::Neutral => 0.5,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Positions::Long | Positions::Short)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeType {
    Neutral,
    Long,
    Short,
}

impl TradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::Neutral => "neutral",
            TradeType::Long => "long",
            TradeType::Short => "short",
        }
    }
}

impl std::fmt::Display for TradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A realized transition. Never mutated once pushed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub price: f64,
    pub index: usize,
    pub trade_type: TradeType,
}

/// Returned alongside every step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {
    pub tick: usize,
    pub total_reward: f64,
    pub total_profit: f64,
    pub position: f64,
}
