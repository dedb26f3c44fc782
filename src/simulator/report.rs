//! Summon session results and report generation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::summon::{DrawOutcome, Pool, Rarity};

/// Running tournament point total for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsTally {
    total: u64,
}

impl PointsTally {
    pub fn add(&mut self, points: u64) {
        self.total += points;
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

/// Outcome counts for one pool's batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolResults {
    pub pool: String,
    pub draws: u32,
    /// Every tier of the pool, rarest first.
    pub counts: BTreeMap<Rarity, u32>,
    /// Draws that matched no tier.
    pub undefined: u32,
    pub points: u64,
}

impl PoolResults {
    pub fn from_outcomes(pool: &Pool, outcomes: &[DrawOutcome]) -> Self {
        let mut counts: BTreeMap<Rarity, u32> =
            pool.tiers().iter().map(|t| (t.rarity, 0)).collect();
        let mut undefined = 0;
        let mut points = 0;

        for &outcome in outcomes {
            match outcome.tier_index().and_then(|idx| pool.tier(idx)) {
                Some(tier) => *counts.entry(tier.rarity).or_insert(0) += 1,
                None => undefined += 1,
            }
            points += pool.points_for(outcome);
        }

        Self {
            pool: pool.name().to_string(),
            draws: outcomes.len() as u32,
            counts,
            undefined,
            points,
        }
    }

    pub fn count(&self, rarity: Rarity) -> u32 {
        self.counts.get(&rarity).copied().unwrap_or(0)
    }
}

/// Results of a whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummonReport {
    pub double_chance: bool,
    pub pools: Vec<PoolResults>,
    pub total_points: u64,
}

impl SummonReport {
    pub fn new(double_chance: bool, pools: Vec<PoolResults>, tally: PointsTally) -> Self {
        Self {
            double_chance,
            pools,
            total_points: tally.total(),
        }
    }

    pub fn pool(&self, name: &str) -> Option<&PoolResults> {
        self.pools.iter().find(|p| p.pool == name)
    }

    pub fn total_undefined(&self) -> u32 {
        self.pools.iter().map(|p| p.undefined).sum()
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        if self.double_chance {
            report.push_str("2X summoning rate\n\n");
        }

        for pool in &self.pools {
            report.push_str(&format!("{} results:\n", pool.pool));
            for (rarity, count) in &pool.counts {
                if *count > 0 {
                    report.push_str(&format!("\t {}: {}\n", rarity.name(), count));
                }
            }
            if pool.undefined > 0 {
                report.push_str(&format!("\t Undefined: {}\n", pool.undefined));
            }
        }

        report.push('\n');
        report.push_str(&format!("Tournament Points Earned: {}\n", self.total_points));
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
