//! Shard rarity tables, mercy rules and tournament point values.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::summon::{MercyRule, Pool, Rarity, RollInterval, Tier};

/// The shard types that can be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShardKind {
    Sacred,
    Ancient,
    Void,
    Mystery,
}

impl ShardKind {
    /// Run order for a summon session.
    pub const ALL: [ShardKind; 4] = [
        ShardKind::Sacred,
        ShardKind::Ancient,
        ShardKind::Void,
        ShardKind::Mystery,
    ];

    /// Pool name, also the key in the mercy file.
    pub fn name(&self) -> &'static str {
        match self {
            ShardKind::Sacred => "SacredShard",
            ShardKind::Ancient => "AncientShard",
            ShardKind::Void => "VoidShard",
            ShardKind::Mystery => "MysteryShard",
        }
    }

    /// Mystery shards are unaffected by 2x events.
    pub fn doublable(&self) -> bool {
        !matches!(self, ShardKind::Mystery)
    }

    pub fn tiers(&self) -> Vec<Tier> {
        match self {
            ShardKind::Sacred => sacred_tiers(),
            ShardKind::Ancient => ancient_tiers([500, 250, 10]),
            // Same odds as Ancient, better tournament payout
            ShardKind::Void => ancient_tiers([650, 350, 50]),
            ShardKind::Mystery => mystery_tiers(),
        }
    }

    /// Build a fresh pool with zeroed mercy counters.
    pub fn pool(&self) -> Result<Pool, ConfigError> {
        Pool::new(self.name(), self.tiers(), self.doublable())
    }
}

fn sacred_tiers() -> Vec<Tier> {
    vec![
        // 6% legendary, +2% per shard past 12 without one
        Tier::new(Rarity::Legendary, RollInterval::new(1, 60), MercyRule::new(12, 20), 500),
        Tier::new(Rarity::Epic, RollInterval::new(61, 1000), MercyRule::DISABLED, 250),
    ]
}

fn ancient_tiers(points: [u64; 3]) -> Vec<Tier> {
    let [legendary, epic, rare] = points;
    vec![
        // 0.5% legendary, +5% per shard past 200
        Tier::new(Rarity::Legendary, RollInterval::new(1, 5), MercyRule::new(200, 50), legendary),
        // 7.5% epic, +2% per shard past 20
        Tier::new(Rarity::Epic, RollInterval::new(6, 80), MercyRule::new(20, 20), epic),
        Tier::new(Rarity::Rare, RollInterval::new(81, 1000), MercyRule::DISABLED, rare),
    ]
}

fn mystery_tiers() -> Vec<Tier> {
    vec![
        Tier::new(Rarity::Legendary, RollInterval::EMPTY, MercyRule::DISABLED, 500),
        Tier::new(Rarity::Epic, RollInterval::EMPTY, MercyRule::DISABLED, 250),
        Tier::new(Rarity::Rare, RollInterval::new(987, 1000), MercyRule::DISABLED, 10),
        Tier::new(Rarity::Uncommon, RollInterval::new(743, 986), MercyRule::DISABLED, 1),
        Tier::new(Rarity::Common, RollInterval::new(1, 742), MercyRule::DISABLED, 1),
    ]
}
