//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings for one headless skirmish run.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Content directory; the bundled content is used when unset.
    pub data_dir: Option<PathBuf>,
    /// Index of the enemy wave to fight.
    pub round: usize,
    /// Upper bound on simulation steps before the run is abandoned.
    pub max_ticks: u64,
    /// Simulated seconds per step.
    pub tick_seconds: f32,
    pub seed: u64,
    /// Directory for the log file; the platform cache directory when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            round: 0,
            max_ticks: 6_000,
            tick_seconds: 0.05,
            seed: 0,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_DATA_DIR` - Content directory (default: bundled content)
    /// - `SKIRMISH_ROUND` - Enemy wave index (default: 0)
    /// - `SKIRMISH_MAX_TICKS` - Step limit (default: 6000)
    /// - `SKIRMISH_TICK_SECONDS` - Seconds per step (default: 0.05)
    /// - `SKIRMISH_SEED` - Random seed (default: 0)
    /// - `SKIRMISH_LOG_DIR` - Log file directory (default: platform cache)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("SKIRMISH_DATA_DIR").ok().map(PathBuf::from);

        if let Some(round) = read_env::<usize>("SKIRMISH_ROUND") {
            config.round = round;
        }

        if let Some(max_ticks) = read_env::<u64>("SKIRMISH_MAX_TICKS") {
            config.max_ticks = max_ticks.max(1);
        }

        // Non-positive or non-finite step lengths keep the default
        if let Some(seconds) = read_env::<f32>("SKIRMISH_TICK_SECONDS")
            && seconds.is_finite()
            && seconds > 0.0
        {
            config.tick_seconds = seconds;
        }

        if let Some(seed) = read_env::<u64>("SKIRMISH_SEED") {
            config.seed = seed;
        }

        config.log_dir = env::var("SKIRMISH_LOG_DIR").ok().map(PathBuf::from);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
