//! Integration test: Mercy File -> Summon Session -> Report
//!
//! Runs whole sessions through `run_summons`, including mercy loading,
//! the optional save hook and point tallying.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shard_sim::error::{MercyError, SimError};
use shard_sim::shards::ShardKind;
use shard_sim::simulator::{run_pool, run_summons, run_with_mercy, PointsTally, SummonConfig};
use shard_sim::summon::{resolve_roll, MercyMode, Rarity};
use shard_sim::utils::persistence::{load_mercy_file, MercyBook};

fn temp_mercy_file(name: &str, json: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "shard_sim_it_{}_{}.json",
        name,
        std::process::id()
    ));
    fs::write(&path, json).expect("write temp mercy file");
    path
}

const ALL_ZERO: &str = r#"{
    "SacredShard": { "Legendary": 0, "Epic": 0 },
    "AncientShard": { "Legendary": 0, "Epic": 0, "Rare": 0 },
    "VoidShard": { "Legendary": 0, "Epic": 0, "Rare": 0 },
    "MysteryShard": { "Legendary": 0, "Epic": 0, "Rare": 0, "Uncommon": 0, "Common": 0 }
}"#;

// =========================================================================
// Session runs
// =========================================================================

#[test]
fn test_session_reports_every_requested_pool() {
    let path = temp_mercy_file("session", ALL_ZERO);
    let config = SummonConfig {
        sacred_shards: 3,
        ancient_shards: 4,
        void_shards: 5,
        mystery_shards: 6,
        mercy_path: path.clone(),
        seed: Some(42),
        ..Default::default()
    };

    let report = run_summons(&config).expect("session should run");
    let names: Vec<&str> = report.pools.iter().map(|p| p.pool.as_str()).collect();
    assert_eq!(names, ["SacredShard", "AncientShard", "VoidShard", "MysteryShard"]);

    for (pool, expected) in report.pools.iter().zip([3, 4, 5, 6]) {
        assert_eq!(pool.draws, expected);
        let counted: u32 = pool.counts.values().sum();
        assert_eq!(counted + pool.undefined, expected);
    }
    let sum: u64 = report.pools.iter().map(|p| p.points).sum();
    assert_eq!(report.total_points, sum);

    fs::remove_file(path).ok();
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let path = temp_mercy_file("seeded", ALL_ZERO);
    let config = SummonConfig {
        ancient_shards: 50,
        mystery_shards: 50,
        mercy_path: path.clone(),
        seed: Some(7),
        ..Default::default()
    };
    let first = run_summons(&config).unwrap();
    let second = run_summons(&config).unwrap();
    assert_eq!(first, second);

    fs::remove_file(path).ok();
}

#[test]
fn test_unrequested_pools_need_no_mercy_entry() {
    let path = temp_mercy_file("partial", r#"{ "MysteryShard": {} }"#);
    let config = SummonConfig {
        mystery_shards: 10,
        mercy_path: path.clone(),
        seed: Some(1),
        ..Default::default()
    };
    let report = run_summons(&config).expect("only mystery is opened");
    assert_eq!(report.pools.len(), 1);

    fs::remove_file(path).ok();
}

#[test]
fn test_zero_draws_produce_empty_report() {
    let config = SummonConfig {
        mercy_path: PathBuf::from("/nonexistent/dir/mercy.json"),
        ..Default::default()
    };
    let report = run_summons(&config).unwrap();
    assert!(report.pools.is_empty());
    assert_eq!(report.total_points, 0);
    assert!(report.to_text().contains("Tournament Points Earned: 0"));
}

// =========================================================================
// Mercy file errors are fatal
// =========================================================================

#[test]
fn test_missing_mercy_file_aborts_session() {
    let config = SummonConfig {
        sacred_shards: 1,
        mercy_path: PathBuf::from("/nonexistent/dir/mercy.json"),
        ..Default::default()
    };
    let err = run_summons(&config).unwrap_err();
    assert!(matches!(err, SimError::Mercy(MercyError::Io { .. })));
}

#[test]
fn test_malformed_mercy_file_aborts_session() {
    let path = temp_mercy_file("broken", "not json at all");
    let config = SummonConfig {
        sacred_shards: 1,
        mercy_path: path.clone(),
        ..Default::default()
    };
    let err = run_summons(&config).unwrap_err();
    assert!(matches!(err, SimError::Mercy(MercyError::Malformed { .. })));

    fs::remove_file(path).ok();
}

#[test]
fn test_missing_pool_entry_aborts_session() {
    let path = temp_mercy_file("no_sacred", r#"{ "AncientShard": {} }"#);
    let config = SummonConfig {
        sacred_shards: 1,
        mercy_path: path.clone(),
        ..Default::default()
    };
    let err = run_summons(&config).unwrap_err();
    assert!(matches!(
        err,
        SimError::Mercy(MercyError::MissingPool { ref pool }) if pool == "SacredShard"
    ));

    fs::remove_file(path).ok();
}

// =========================================================================
// Save hook
// =========================================================================

#[test]
fn test_mercy_file_untouched_without_save_flag() {
    let json = r#"{ "SacredShard": { "Legendary": 500 } }"#;
    let path = temp_mercy_file("no_save", json);
    let config = SummonConfig {
        sacred_shards: 5,
        mercy_path: path.clone(),
        seed: Some(3),
        ..Default::default()
    };
    let report = run_summons(&config).unwrap();
    // Mercy far past the threshold guarantees the first draw is Legendary
    assert!(report.pools[0].count(Rarity::Legendary) >= 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), json);

    fs::remove_file(path).ok();
}

#[test]
fn test_save_flag_writes_reset_counters_back() {
    let path = temp_mercy_file("save", r#"{ "SacredShard": { "Legendary": 500, "Epic": 0 } }"#);
    let config = SummonConfig {
        sacred_shards: 1,
        mercy_path: path.clone(),
        seed: Some(5),
        save_mercy: true,
        ..Default::default()
    };
    run_summons(&config).unwrap();

    let saved = load_mercy_file(&path).unwrap();
    assert_eq!(saved["SacredShard"]["Legendary"], 0);

    fs::remove_file(path).ok();
}

#[test]
fn test_accumulate_mode_saves_miss_counts() {
    let path = temp_mercy_file("accumulate", r#"{ "MysteryShard": {} }"#);
    let config = SummonConfig {
        mystery_shards: 10,
        mercy_path: path.clone(),
        seed: Some(8),
        save_mercy: true,
        mercy_mode: MercyMode::Accumulate,
        ..Default::default()
    };
    run_summons(&config).unwrap();

    let saved = load_mercy_file(&path).unwrap();
    // Legendary and Epic can never hit in a mystery shard
    assert_eq!(saved["MysteryShard"]["Legendary"], 10);
    assert_eq!(saved["MysteryShard"]["Epic"], 10);

    fs::remove_file(path).ok();
}

// =========================================================================
// Points
// =========================================================================

#[test]
fn test_points_for_sacred_legendary_plus_mystery_common() {
    let mut sacred = ShardKind::Sacred.pool().unwrap();
    let mut mystery = ShardKind::Mystery.pool().unwrap();
    let mut tally = PointsTally::default();

    let legendary = resolve_roll(&mut sacred, 1, false);
    tally.add(sacred.points_for(legendary));
    let common = resolve_roll(&mut mystery, 1, false);
    tally.add(mystery.points_for(common));

    assert_eq!(tally.total(), 501);
}

#[test]
fn test_void_pays_more_than_ancient() {
    let mut book: MercyBook = BTreeMap::new();
    book.insert("AncientShard".to_string(), BTreeMap::new());
    book.insert("VoidShard".to_string(), BTreeMap::new());

    let config = SummonConfig {
        ancient_shards: 200,
        void_shards: 200,
        ..Default::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let report = run_with_mercy(&config, &mut book, &mut rng).unwrap();

    let ancient = report.pool("AncientShard").unwrap();
    let void = report.pool("VoidShard").unwrap();
    // Same odds, higher payout per tier
    assert!(void.points > ancient.points);
}

#[test]
fn test_run_pool_zero_count_is_empty() {
    let mut pool = ShardKind::Ancient.pool().unwrap();
    let mut tally = PointsTally::default();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let results = run_pool(&mut pool, 0, true, &mut tally, &mut rng);
    assert_eq!(results.draws, 0);
    assert!(results.counts.values().all(|&c| c == 0));
    assert_eq!(tally.total(), 0);
}
