//! Named shard presets.

pub mod data;

pub use data::*;
