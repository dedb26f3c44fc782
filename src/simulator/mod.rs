//! Summon session runner.
//!
//! Opens the requested shards in a fixed order, seeding each pool's mercy
//! counters from the mercy file, and tallies outcomes and tournament points.

mod config;
mod report;
mod runner;

pub use config::SummonConfig;
pub use report::{PointsTally, PoolResults, SummonReport};
pub use runner::{run_pool, run_summons, run_with_mercy};
