//! Enemy wave loader.

use std::path::Path;

use game_core::{EnemyWave, EnemyWaves};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Wave list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveList {
    pub waves: Vec<EnemyWave>,
}

/// Loader for enemy waves from RON files.
pub struct WaveLoader;

impl WaveLoader {
    pub fn load(path: &Path) -> LoadResult<EnemyWaves> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EnemyWaves> {
        let list: WaveList = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse wave list RON: {}", e))?;

        Ok(EnemyWaves::new(list.waves))
    }
}
