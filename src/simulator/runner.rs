//! Runs a summon session against the draw engine.

use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::SummonConfig;
use super::report::{PointsTally, PoolResults, SummonReport};
use crate::error::SimError;
use crate::summon::{batch_draw, Pool};
use crate::utils::persistence::{apply_mercy, load_mercy_file, record_mercy, save_mercy_file, MercyBook};

/// Run the full session and return a report.
///
/// The mercy file is only read when at least one shard is opened.
pub fn run_summons(config: &SummonConfig) -> Result<SummonReport, SimError> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    if config.total_draws() == 0 {
        return Ok(SummonReport::new(config.double_chance, Vec::new(), PointsTally::default()));
    }

    let mut book = load_mercy_file(&config.mercy_path)?;
    let report = run_with_mercy(config, &mut book, &mut rng)?;

    if config.save_mercy {
        save_mercy_file(&config.mercy_path, &book)?;
    }
    Ok(report)
}

/// Run every planned pool against an already loaded mercy book. Each pool's
/// counters after its batch are written back into `book`.
pub fn run_with_mercy(
    config: &SummonConfig,
    book: &mut MercyBook,
    rng: &mut impl Rng,
) -> Result<SummonReport, SimError> {
    let mut tally = PointsTally::default();
    let mut pools = Vec::new();

    for (kind, count) in config.plan() {
        let mut pool = kind.pool()?.with_mercy_mode(config.mercy_mode);
        apply_mercy(&mut pool, book)?;
        pools.push(run_pool(&mut pool, count, config.double_chance, &mut tally, rng));
        record_mercy(&pool, book);
    }

    Ok(SummonReport::new(config.double_chance, pools, tally))
}

/// Draw `count` times from one pool and add its points to `tally`.
pub fn run_pool(
    pool: &mut Pool,
    count: u32,
    doubling_active: bool,
    tally: &mut PointsTally,
    rng: &mut impl Rng,
) -> PoolResults {
    info!(
        "Opening {} x {} (mercy {:?}, 2x {})",
        count,
        pool.name(),
        pool.mercy_counters(),
        doubling_active && pool.doublable()
    );
    let outcomes = batch_draw(pool, count, doubling_active, rng);
    let results = PoolResults::from_outcomes(pool, &outcomes);
    tally.add(results.points);
    results
}
