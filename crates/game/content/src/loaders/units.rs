//! Unit archetype loader.

use std::path::Path;

use game_core::UnitData;
use serde::{Deserialize, Serialize};

use crate::UnitCatalog;
use crate::loaders::{LoadResult, read_file};

/// Unit roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitRoster {
    pub units: Vec<UnitData>,
}

/// Loader for unit archetypes from RON files.
pub struct UnitLoader;

impl UnitLoader {
    /// Load unit templates from a RON file.
    ///
    /// Parameters are clamped into their legal ranges.
    pub fn load(path: &Path) -> LoadResult<UnitCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<UnitCatalog> {
        let roster: UnitRoster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit roster RON: {}", e))?;

        Ok(UnitCatalog::new(roster.units))
    }
}
