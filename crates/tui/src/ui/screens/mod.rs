pub mod stats;
pub mod tracker;
