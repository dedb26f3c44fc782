//! Error types for pool construction, mercy persistence and simulation runs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A pool's rarity table failed construction-time validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("pool {pool} has no tiers")]
    EmptyTable { pool: String },

    #[error("pool {pool} defines tier {tier} more than once")]
    DuplicateTier { pool: String, tier: &'static str },

    #[error("pool {pool}: tier {tier} has invalid interval [{min}, {max}]")]
    InvalidInterval {
        pool: String,
        tier: &'static str,
        min: u32,
        max: u32,
    },

    #[error("pool {pool}: tiers {first} and {second} overlap at roll {roll}")]
    Overlap {
        pool: String,
        first: &'static str,
        second: &'static str,
        roll: u32,
    },

    #[error("pool {pool}: rolls {from}..={to} are not covered by any tier")]
    Gap { pool: String, from: u32, to: u32 },
}

/// Loading, applying or saving persisted mercy counters failed.
#[derive(Debug, Error)]
pub enum MercyError {
    #[error("failed to access mercy file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("mercy file {} is malformed", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("mercy file has no entry for pool {pool}")]
    MissingPool { pool: String },

    #[error("mercy entry for pool {pool} names unknown tier {tier}")]
    UnknownTier { pool: String, tier: String },
}

/// Anything that can abort a summon run.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Mercy(#[from] MercyError),
}
