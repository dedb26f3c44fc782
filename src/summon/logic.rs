//! Draw engine: mercy-adjusted weighted-rarity rolls and mercy counter updates.

use std::collections::BTreeMap;

use log::{debug, warn};
use rand::Rng;

use super::types::*;
use crate::core::constants::{DOUBLING_FACTOR, ROLL_MAX, ROLL_MIN};
use crate::error::{ConfigError, MercyError};

impl Pool {
    /// Build a pool from its tier table, failing fast on a malformed table.
    ///
    /// Non-empty intervals must lie inside the roll domain, must not overlap
    /// and together must cover every roll from `ROLL_MIN` to `ROLL_MAX`.
    /// Table order is free: the draw checks tiers in the order given.
    pub fn new(name: impl Into<String>, tiers: Vec<Tier>, doublable: bool) -> Result<Self, ConfigError> {
        let name = name.into();
        validate_table(&name, &tiers)?;
        let mercy_counters = vec![0; tiers.len()];
        Ok(Self {
            name,
            tiers,
            mercy_counters,
            doublable,
            mercy_mode: MercyMode::default(),
        })
    }

    /// Overwrite mercy counters from a persisted `tier name -> counter` entry.
    /// Tiers missing from the entry start at zero.
    pub fn load_mercy(&mut self, entry: &BTreeMap<String, u32>) -> Result<(), MercyError> {
        let mut counters = vec![0; self.tiers.len()];
        for (tier_name, &value) in entry {
            let idx = Rarity::from_name(tier_name)
                .and_then(|rarity| self.tier_index(rarity))
                .ok_or_else(|| MercyError::UnknownTier {
                    pool: self.name.clone(),
                    tier: tier_name.clone(),
                })?;
            counters[idx] = value;
        }
        self.mercy_counters = counters;
        Ok(())
    }

    /// Current counters keyed by tier name, in the persisted layout.
    pub fn mercy_snapshot(&self) -> BTreeMap<String, u32> {
        self.tiers
            .iter()
            .zip(&self.mercy_counters)
            .map(|(tier, &count)| (tier.rarity.name().to_string(), count))
            .collect()
    }
}

fn validate_table(pool: &str, tiers: &[Tier]) -> Result<(), ConfigError> {
    if tiers.is_empty() {
        return Err(ConfigError::EmptyTable {
            pool: pool.to_string(),
        });
    }

    for (i, tier) in tiers.iter().enumerate() {
        if tiers[..i].iter().any(|t| t.rarity == tier.rarity) {
            return Err(ConfigError::DuplicateTier {
                pool: pool.to_string(),
                tier: tier.rarity.name(),
            });
        }
        if !tier.interval.is_empty() && !tier.interval.is_well_formed() {
            return Err(ConfigError::InvalidInterval {
                pool: pool.to_string(),
                tier: tier.rarity.name(),
                min: tier.interval.min,
                max: tier.interval.max,
            });
        }
    }

    let mut active: Vec<&Tier> = tiers.iter().filter(|t| !t.interval.is_empty()).collect();
    active.sort_by_key(|t| t.interval.min);

    let mut next = ROLL_MIN;
    let mut previous: Option<&Tier> = None;
    for tier in active {
        let RollInterval { min, max } = tier.interval;
        if min > next {
            return Err(ConfigError::Gap {
                pool: pool.to_string(),
                from: next,
                to: min - 1,
            });
        }
        if min < next {
            // Sorted by min, so an early start can only collide with the previous tier.
            let first = previous.map_or("?", |p| p.rarity.name());
            return Err(ConfigError::Overlap {
                pool: pool.to_string(),
                first,
                second: tier.rarity.name(),
                roll: min,
            });
        }
        next = max + 1;
        previous = Some(tier);
    }

    if next <= ROLL_MAX {
        return Err(ConfigError::Gap {
            pool: pool.to_string(),
            from: next,
            to: ROLL_MAX,
        });
    }
    Ok(())
}

/// Highest roll that still resolves to tier `idx` given the current mercy
/// counter and whether a doubling event applies to this pool.
pub fn effective_upper_bound(pool: &Pool, idx: usize, doubling_active: bool) -> u64 {
    let Some(tier) = pool.tiers.get(idx) else {
        return 0;
    };
    let base = u64::from(tier.interval.max);
    let ceiling = if doubling_active && pool.doublable {
        base * u64::from(DOUBLING_FACTOR)
    } else {
        base
    };
    ceiling + tier.mercy.bonus(pool.mercy_counter(idx))
}

/// Map a roll onto the first tier (in table order) whose effective interval
/// contains it, then update mercy counters.
///
/// A boosted rare tier can claim rolls nominally owned by a more common tier
/// listed after it.
pub fn resolve_roll(pool: &mut Pool, roll: u32, doubling_active: bool) -> DrawOutcome {
    let matched = (0..pool.tiers.len()).find(|&idx| {
        let min = pool.tiers[idx].interval.min;
        min <= roll && u64::from(roll) <= effective_upper_bound(pool, idx, doubling_active)
    });

    let outcome = match matched {
        Some(idx) => DrawOutcome::Tier(idx),
        None => DrawOutcome::Undefined,
    };
    apply_mercy_update(pool, outcome);
    outcome
}

fn apply_mercy_update(pool: &mut Pool, outcome: DrawOutcome) {
    let matched = outcome.tier_index();
    if pool.mercy_mode == MercyMode::Accumulate {
        for (idx, counter) in pool.mercy_counters.iter_mut().enumerate() {
            if Some(idx) != matched {
                *counter = counter.saturating_add(1);
            }
        }
    }
    if let Some(idx) = matched {
        pool.reset_mercy(idx);
    }
}

/// Uniform roll over the fixed domain.
pub fn roll(rng: &mut impl Rng) -> u32 {
    rng.gen_range(ROLL_MIN..=ROLL_MAX)
}

/// Perform one summon.
pub fn single_draw(pool: &mut Pool, doubling_active: bool, rng: &mut impl Rng) -> DrawOutcome {
    let value = roll(rng);
    let outcome = resolve_roll(pool, value, doubling_active);
    match outcome {
        DrawOutcome::Tier(idx) => {
            debug!("{}: roll {} -> {}", pool.name, value, pool.tiers[idx].rarity.name());
        }
        DrawOutcome::Undefined => {
            warn!("{}: roll {} matched no tier", pool.name, value);
        }
    }
    outcome
}

/// Perform `count` summons in order; each draw sees the mercy updates of the
/// draws before it.
pub fn batch_draw(pool: &mut Pool, count: u32, doubling_active: bool, rng: &mut impl Rng) -> Vec<DrawOutcome> {
    (0..count)
        .map(|_| single_draw(pool, doubling_active, rng))
        .collect()
}
