pub mod general;
mod theme;

pub use general::{position_chart, simple_chart};

pub const CHART_DIMS: (u32, u32) = (2560, 800);
