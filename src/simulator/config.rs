//! Summon session configuration.

use std::path::PathBuf;

use crate::core::constants::DEFAULT_MERCY_FILE;
use crate::shards::ShardKind;
use crate::summon::MercyMode;

/// Configuration for one summon session.
#[derive(Debug, Clone)]
pub struct SummonConfig {
    /// Number of each shard type to open
    pub sacred_shards: u32,
    pub ancient_shards: u32,
    pub void_shards: u32,
    pub mystery_shards: u32,

    /// Whether a 2x event is running
    pub double_chance: bool,

    /// Where persisted mercy counters live
    pub mercy_path: PathBuf,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    pub mercy_mode: MercyMode,

    /// Write updated counters back to `mercy_path` after the session
    pub save_mercy: bool,
}

impl Default for SummonConfig {
    fn default() -> Self {
        Self {
            sacred_shards: 0,
            ancient_shards: 0,
            void_shards: 0,
            mystery_shards: 0,
            double_chance: false,
            mercy_path: PathBuf::from(DEFAULT_MERCY_FILE),
            seed: None,
            mercy_mode: MercyMode::ResetOnly,
            save_mercy: false,
        }
    }
}

impl SummonConfig {
    /// Quick config for opening a single shard type
    pub fn single(kind: ShardKind, count: u32) -> Self {
        let mut config = Self::default();
        config.set_count(kind, count);
        config
    }

    pub fn count(&self, kind: ShardKind) -> u32 {
        match kind {
            ShardKind::Sacred => self.sacred_shards,
            ShardKind::Ancient => self.ancient_shards,
            ShardKind::Void => self.void_shards,
            ShardKind::Mystery => self.mystery_shards,
        }
    }

    pub fn set_count(&mut self, kind: ShardKind, count: u32) {
        match kind {
            ShardKind::Sacred => self.sacred_shards = count,
            ShardKind::Ancient => self.ancient_shards = count,
            ShardKind::Void => self.void_shards = count,
            ShardKind::Mystery => self.mystery_shards = count,
        }
    }

    /// Shards to open, in run order, skipping those with a zero count.
    pub fn plan(&self) -> Vec<(ShardKind, u32)> {
        ShardKind::ALL
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
            .filter(|&(_, count)| count > 0)
            .collect()
    }

    pub fn total_draws(&self) -> u64 {
        ShardKind::ALL
            .into_iter()
            .map(|kind| u64::from(self.count(kind)))
            .sum()
    }
}
