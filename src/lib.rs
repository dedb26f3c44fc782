//! Shard summon simulator.
//!
//! Draws from weighted-rarity shard pools with mercy (pity) escalation and
//! tallies tournament points.

pub mod core;
pub mod error;
pub mod shards;
pub mod simulator;
pub mod summon;
pub mod utils;

pub use error::{ConfigError, MercyError, SimError};
pub use shards::ShardKind;
pub use simulator::{run_summons, SummonConfig, SummonReport};
pub use summon::{DrawOutcome, MercyMode, Pool, Rarity};
