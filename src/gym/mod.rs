pub mod actions;
pub mod base;

pub use actions::Actions;
