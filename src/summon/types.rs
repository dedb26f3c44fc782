use serde::{Deserialize, Serialize};

use crate::core::constants::{ROLL_MAX, ROLL_MIN};

/// Rarity tiers, rarest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Legendary,
    Epic,
    Rare,
    Uncommon,
    Common,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Legendary,
        Rarity::Epic,
        Rarity::Rare,
        Rarity::Uncommon,
        Rarity::Common,
    ];

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Legendary => "Legendary",
            Rarity::Epic => "Epic",
            Rarity::Rare => "Rare",
            Rarity::Uncommon => "Uncommon",
            Rarity::Common => "Common",
        }
    }

    pub fn from_name(name: &str) -> Option<Rarity> {
        Rarity::ALL.into_iter().find(|r| r.name() == name)
    }
}

/// Inclusive roll interval `[min, max]` over the roll domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollInterval {
    pub min: u32,
    pub max: u32,
}

impl RollInterval {
    /// A tier that never matches without mercy.
    pub const EMPTY: RollInterval = RollInterval { min: 0, max: 0 };

    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min == 0 && self.max == 0
    }

    /// True when the interval lies inside the roll domain with `min <= max`.
    pub fn is_well_formed(&self) -> bool {
        ROLL_MIN <= self.min && self.min <= self.max && self.max <= ROLL_MAX
    }

    pub fn contains(&self, roll: u32) -> bool {
        self.min <= roll && roll <= self.max
    }
}

/// Mercy escalation for one tier: once the counter exceeds `threshold`,
/// every further miss widens the tier's ceiling by `bonus_per_excess`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MercyRule {
    pub threshold: u32,
    pub bonus_per_excess: u32,
}

impl MercyRule {
    pub const DISABLED: MercyRule = MercyRule {
        threshold: 0,
        bonus_per_excess: 0,
    };

    pub const fn new(threshold: u32, bonus_per_excess: u32) -> Self {
        Self {
            threshold,
            bonus_per_excess,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.threshold == 0 && self.bonus_per_excess == 0
    }

    pub fn has_mercy(&self, counter: u32) -> bool {
        counter > self.threshold
    }

    /// Extra roll space granted at the given counter value.
    pub fn bonus(&self, counter: u32) -> u64 {
        if !self.has_mercy(counter) {
            return 0;
        }
        u64::from(counter - self.threshold) * u64::from(self.bonus_per_excess)
    }
}

/// One row of a pool's rarity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub rarity: Rarity,
    pub interval: RollInterval,
    pub mercy: MercyRule,
    /// Tournament points awarded when this tier is drawn.
    pub points: u64,
}

impl Tier {
    pub const fn new(rarity: Rarity, interval: RollInterval, mercy: MercyRule, points: u64) -> Self {
        Self {
            rarity,
            interval,
            mercy,
            points,
        }
    }
}

/// Result of a single draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawOutcome {
    /// Index into the pool's tier table.
    Tier(usize),
    /// No tier matched the roll.
    Undefined,
}

impl DrawOutcome {
    pub fn tier_index(&self) -> Option<usize> {
        match self {
            DrawOutcome::Tier(idx) => Some(*idx),
            DrawOutcome::Undefined => None,
        }
    }
}

/// How mercy counters move after a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MercyMode {
    /// Only the matched tier resets; counters otherwise stay at their loaded values.
    #[default]
    ResetOnly,
    /// The matched tier resets and every other tier counts one more miss.
    Accumulate,
}

/// A named draw source with its own rarity table and mercy state.
///
/// Built through `Pool::new`, which rejects tables that overlap or leave
/// part of the roll domain uncovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pub(crate) name: String,
    pub(crate) tiers: Vec<Tier>,
    pub(crate) mercy_counters: Vec<u32>,
    pub(crate) doublable: bool,
    pub(crate) mercy_mode: MercyMode,
}

impl Pool {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn tier(&self, idx: usize) -> Option<&Tier> {
        self.tiers.get(idx)
    }

    pub fn doublable(&self) -> bool {
        self.doublable
    }

    pub fn mercy_mode(&self) -> MercyMode {
        self.mercy_mode
    }

    pub fn with_mercy_mode(mut self, mode: MercyMode) -> Self {
        self.mercy_mode = mode;
        self
    }

    pub fn mercy_counters(&self) -> &[u32] {
        &self.mercy_counters
    }

    pub fn mercy_counter(&self, idx: usize) -> u32 {
        self.mercy_counters.get(idx).copied().unwrap_or(0)
    }

    pub fn set_mercy_counter(&mut self, idx: usize, value: u32) {
        if let Some(counter) = self.mercy_counters.get_mut(idx) {
            *counter = value;
        }
    }

    pub fn reset_mercy(&mut self, idx: usize) {
        self.set_mercy_counter(idx, 0);
    }

    /// Index of the tier with the given rarity, if the pool has one.
    pub fn tier_index(&self, rarity: Rarity) -> Option<usize> {
        self.tiers.iter().position(|t| t.rarity == rarity)
    }

    /// Points for an outcome; an undefined draw is worth nothing.
    pub fn points_for(&self, outcome: DrawOutcome) -> u64 {
        outcome
            .tier_index()
            .and_then(|idx| self.tiers.get(idx))
            .map_or(0, |t| t.points)
    }
}
