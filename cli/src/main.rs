//! Command line front end for the race engine
//!
//! Drives a full session — roster, schedule, race — while observing the
//! engine's shared session state, then prints the final results.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use engine::{RaceConfig, RaceEngine, RaceTiming, RoundResult};

/// Horse race simulator
#[derive(Parser)]
#[command(name = "race")]
#[command(about = "Generates a roster, schedules six rounds, and races them to completion")]
pub struct Args {
    /// Seed for all random draws (omit for a different race every run)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Pause before each round starts, in milliseconds
    #[arg(long, default_value = "1000")]
    pub pre_round_ms: u64,

    /// Length of each round's observation window, in milliseconds
    #[arg(long, default_value = "2000")]
    pub round_ms: u64,

    /// Pause between rounds, in milliseconds
    #[arg(long, default_value = "1500")]
    pub between_ms: u64,

    /// Emit the final results as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let timing = RaceTiming {
        pre_round_delay: Duration::from_millis(args.pre_round_ms),
        round_duration: Duration::from_millis(args.round_ms),
        between_rounds_delay: Duration::from_millis(args.between_ms),
    };
    let engine = RaceEngine::from_seed(RaceConfig::default(), timing, args.seed);

    let horses = engine.generate_roster().await.context("roster generation failed")?;
    for horse in &horses {
        info!(
            id = horse.id,
            name = %horse.name,
            color = %horse.color_name,
            condition = horse.condition,
            "horse ready"
        );
    }

    let schedule = engine.build_schedule().await.context("schedule build failed")?;
    for round in &schedule {
        info!(round = round.number, distance = round.distance, "round scheduled");
    }

    // watch the shared state while the race is in flight
    let state = engine.state_handle();
    let observer = tokio::spawn(async move {
        let mut last_announced = 0u32;
        loop {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let snapshot = state.lock().await.clone();
            if let Some(round) = snapshot.current_round() {
                if snapshot.round_in_progress() && round.number > last_announced {
                    last_announced = round.number;
                    info!(round = round.number, "round underway");
                }
            }
            if !snapshot.is_racing() && !snapshot.results().is_empty() {
                break;
            }
        }
    });

    engine.run_race().await.context("race run failed")?;
    observer.await.ok();

    let results = engine.snapshot().await.results().to_vec();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&results);
    }

    Ok(())
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("engine={log_level},race={log_level}")))
        .with_target(false)
        .init();
}

fn print_results(results: &[RoundResult]) {
    for result in results {
        println!();
        println!("Round {} — {}m", result.round, result.distance);
        for entry in &result.entries {
            println!(
                "  {:2}. {:<10} ({:<16}) {:7.2}s",
                entry.position, entry.horse.name, entry.horse.color_name, entry.time
            );
        }
        println!("  Winner: {}", result.winner.name);
    }
}
