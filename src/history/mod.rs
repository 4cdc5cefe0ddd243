pub mod episode;
pub mod meta;

pub use episode::EpisodeHistory;
pub use meta::MetaHistory;
