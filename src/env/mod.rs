mod base;
mod five_action;
mod obs;
mod render;
mod reward;


pub use base::BaseEnv;
pub use five_action::FiveActionEnv;
pub use reward::{DefaultReward, RewardFn};
