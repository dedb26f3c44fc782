//! JSON persistence for mercy counters.
//!
//! File layout: `{ "<PoolName>": { "<TierName>": <counter>, ... }, ... }`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::info;

use crate::error::MercyError;
use crate::summon::Pool;

/// Per-pool mercy counters keyed by tier name.
pub type MercyBook = BTreeMap<String, BTreeMap<String, u32>>;

/// Load the mercy file. Missing or malformed files are errors: the engine
/// refuses to draw without a known mercy state.
pub fn load_mercy_file(path: &Path) -> Result<MercyBook, MercyError> {
    let json = fs::read_to_string(path).map_err(|source| MercyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let book: MercyBook = serde_json::from_str(&json).map_err(|source| MercyError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded mercy for {} pool(s) from {}", book.len(), path.display());
    Ok(book)
}

/// Save mercy counters as pretty-printed JSON.
pub fn save_mercy_file(path: &Path, book: &MercyBook) -> Result<(), MercyError> {
    let json = serde_json::to_string_pretty(book).map_err(|source| MercyError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| MercyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Saved mercy for {} pool(s) to {}", book.len(), path.display());
    Ok(())
}

/// Seed a pool's counters from its entry in the book.
pub fn apply_mercy(pool: &mut Pool, book: &MercyBook) -> Result<(), MercyError> {
    let entry = book.get(pool.name()).ok_or_else(|| MercyError::MissingPool {
        pool: pool.name().to_string(),
    })?;
    pool.load_mercy(entry)
}

/// Write a pool's current counters back into the book.
pub fn record_mercy(pool: &Pool, book: &mut MercyBook) {
    book.insert(pool.name().to_string(), pool.mercy_snapshot());
}
