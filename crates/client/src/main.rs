//! Headless skirmish runner.
//!
//! Loads content, spawns the squad and one enemy wave, then steps the arena
//! until the round is decided or the step limit runs out.
//!
//! ```bash
//! SKIRMISH_ROUND=2 SKIRMISH_SEED=7 RUST_LOG=runtime=debug cargo run -p skirmish-client
//! ```
mod config;

use std::path::{Path, PathBuf};

use anyhow::Result;
use config::ClientConfig;
use game_content::ContentFactory;
use game_core::{GameError, Team};
use runtime::{Arena, ArenaEvent, RoundResult};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = setup_logging(config.log_dir.as_deref())?;

    let factory = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };
    tracing::info!(data_dir = %factory.data_dir().display(), "loading content");
    let content = factory.load_all()?;

    let mut arena = Arena::new(content.config, content.arena, config.seed);
    let spawned = arena
        .spawn_round(&content.units, &content.waves, config.round)
        .inspect_err(|e| {
            tracing::error!(
                code = e.error_code(),
                severity = e.severity().as_str(),
                error = %e,
                "round setup failed"
            );
        })?;
    tracing::info!(
        round = config.round,
        seed = config.seed,
        units = spawned.len(),
        "round started"
    );

    let mut result = None;
    let mut attacks = 0;
    let mut deaths = 0;
    for _ in 0..config.max_ticks {
        let report = arena.step(config.tick_seconds);
        attacks += report.attacks();
        deaths += report.deaths().count();

        for event in &report.events {
            if let ArenaEvent::Died { unit } = event {
                tracing::debug!(tick = report.tick, %unit, "unit died");
            }
        }

        if report.result.is_some() {
            result = report.result;
            break;
        }
    }

    let clock = arena.clock();
    let outcome = match result {
        Some(RoundResult::Win) => "win",
        Some(RoundResult::Lose) => "lose",
        None => "undecided",
    };
    tracing::info!(outcome, ticks = clock.tick, elapsed = clock.elapsed, "run finished");

    println!("result:    {outcome}");
    println!("ticks:     {} ({:.2}s)", clock.tick, clock.elapsed);
    println!("attacks:   {attacks}");
    println!("deaths:    {deaths}");
    println!(
        "survivors: {} player, {} enemy",
        arena.living(Team::Player).count(),
        arena.living(Team::Enemies).count()
    );

    Ok(())
}

/// Setup logging to stderr and to a log file in [`log_directory`].
///
/// The returned guard must stay alive for the file writer to flush.
fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_directory(log_dir) {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let file_appender = tracing_appender::rolling::never(&dir, "skirmish.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Log file directory: the configured one, else the platform cache directory.
///
/// `None` only when no home directory can be determined; logs then go to
/// stderr alone.
fn log_directory(configured: Option<&Path>) -> Option<PathBuf> {
    configured.map(Path::to_path_buf).or_else(|| {
        directories::ProjectDirs::from("", "", "skirmish")
            .map(|dirs| dirs.cache_dir().join("logs"))
    })
}
