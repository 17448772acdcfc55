//! Content factory for loading a complete skirmish from data files.

use std::path::{Path, PathBuf};

use game_core::{ArenaLayout, EnemyWaves, GameConfig};

use crate::UnitCatalog;
use crate::loaders::{ArenaLoader, ConfigLoader, LoadResult, UnitLoader, WaveLoader};

/// Everything a round needs, loaded together.
#[derive(Clone, Debug)]
pub struct Content {
    pub config: GameConfig,
    pub units: UnitCatalog,
    pub waves: EnemyWaves,
    pub arena: ArenaLayout,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── units.ron
/// ├── waves.ron
/// └── arena.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory for the data bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load game configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load unit archetypes from `units.ron`.
    pub fn load_units(&self) -> LoadResult<UnitCatalog> {
        let path = self.data_dir.join("units.ron");
        UnitLoader::load(&path)
    }

    /// Load enemy waves from `waves.ron`.
    pub fn load_waves(&self) -> LoadResult<EnemyWaves> {
        let path = self.data_dir.join("waves.ron");
        WaveLoader::load(&path)
    }

    /// Load the arena layout from `arena.ron`.
    pub fn load_arena(&self) -> LoadResult<ArenaLayout> {
        let path = self.data_dir.join("arena.ron");
        ArenaLoader::load(&path)
    }

    /// Load every content file and check that waves and spawns only name
    /// known units.
    pub fn load_all(&self) -> LoadResult<Content> {
        let content = Content {
            config: self.load_config()?,
            units: self.load_units()?,
            waves: self.load_waves()?,
            arena: self.load_arena()?,
        };

        let named = content
            .arena
            .players
            .iter()
            .map(|spawn| spawn.unit.as_str())
            .chain(
                content
                    .waves
                    .iter()
                    .flat_map(|wave| wave.units.iter().map(String::as_str)),
            );
        for name in named {
            if content.units.get(name).is_none() {
                anyhow::bail!(
                    "Unknown unit `{}` referenced in {}",
                    name,
                    self.data_dir.display()
                );
            }
        }

        Ok(content)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
