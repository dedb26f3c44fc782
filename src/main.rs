//! Shard summon simulator CLI.
//!
//! Usage:
//!   cargo run -- [OPTIONS]
//!
//! Examples:
//!   cargo run -- -s 10                  # Open 10 sacred shards
//!   cargo run -- -a 30 -v 10 -d         # Ancients and voids during a 2x event
//!   cargo run -- -m 100 --seed 42       # Reproducible mystery run

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use shard_sim::core::constants::{DEFAULT_MERCY_FILE, REPORT_FILE_PREFIX};
use shard_sim::simulator::{run_summons, SummonConfig};
use shard_sim::summon::MercyMode;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
struct Args {
    /// Indicate a 2x event is going on
    #[arg(short = 'd', long)]
    double_chance: bool,

    /// Amount of mystery shards to open
    #[arg(short = 'm', long, default_value_t = 0)]
    mystery_shards: u32,

    /// Amount of ancient shards to open
    #[arg(short = 'a', long, default_value_t = 0)]
    ancient_shards: u32,

    /// Amount of void shards to open
    #[arg(short = 'v', long, default_value_t = 0)]
    void_shards: u32,

    /// Amount of sacred shards to open
    #[arg(short = 's', long, default_value_t = 0)]
    sacred_shards: u32,

    /// Path to the mercy counter file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MERCY_FILE)]
    mercy_file: PathBuf,

    /// Random seed (optional)
    #[arg(long)]
    seed: Option<u64>,

    /// Count every miss toward mercy during the session
    #[arg(long)]
    accumulate_mercy: bool,

    /// Write updated mercy counters back to the mercy file
    #[arg(long)]
    save_mercy: bool,

    /// Also save the report as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn to_config(&self) -> SummonConfig {
        SummonConfig {
            sacred_shards: self.sacred_shards,
            ancient_shards: self.ancient_shards,
            void_shards: self.void_shards,
            mystery_shards: self.mystery_shards,
            double_chance: self.double_chance,
            mercy_path: self.mercy_file.clone(),
            seed: self.seed,
            mercy_mode: if self.accumulate_mercy {
                MercyMode::Accumulate
            } else {
                MercyMode::ResetOnly
            },
            save_mercy: self.save_mercy,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let config = args.to_config();

    let report = run_summons(&config)?;
    print!("{}", report.to_text());

    if report.total_undefined() > 0 {
        eprintln!(
            "warning: {} draw(s) matched no tier",
            report.total_undefined()
        );
    }

    if args.json {
        let filename = format!(
            "{}_{}.json",
            REPORT_FILE_PREFIX,
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())
            .with_context(|| format!("failed to write JSON report to {filename}"))?;
        info!("JSON report saved to {}", filename);
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}
