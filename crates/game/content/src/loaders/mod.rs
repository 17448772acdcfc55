//! Content loaders for reading skirmish data from files.
//!
//! Each loader turns one RON/TOML file into game-core types;
//! [`ContentFactory`] knows where the files live.

pub mod arena;
pub mod config;
pub mod factory;
pub mod units;
pub mod waves;

pub use arena::ArenaLoader;
pub use config::ConfigLoader;
pub use factory::{Content, ContentFactory};
pub use units::UnitLoader;
pub use waves::WaveLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
