//! Arena layout loader.

use std::path::Path;

use game_core::ArenaLayout;

use crate::loaders::{LoadResult, read_file};

/// Loader for arena layouts from RON files.
pub struct ArenaLoader;

impl ArenaLoader {
    /// Load an arena layout from a RON file.
    ///
    /// Every spawn position must be reachable.
    pub fn load(path: &Path) -> LoadResult<ArenaLayout> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ArenaLayout> {
        let layout: ArenaLayout = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse arena RON: {}", e))?;

        let spawns = layout
            .players
            .iter()
            .map(|spawn| spawn.position)
            .chain(layout.enemy_spawns.iter().copied());
        for position in spawns {
            if !layout.is_reachable(position) {
                anyhow::bail!("Spawn position {:?} is outside the navigable area", position);
            }
        }

        Ok(layout)
    }
}
