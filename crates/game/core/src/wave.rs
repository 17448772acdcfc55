//! Enemy wave composition.

/// Archetype names spawned together in one round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyWave {
    pub units: Vec<String>,
}

impl EnemyWave {
    pub fn new<I, S>(units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            units: units.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered list of waves, one per round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EnemyWaves {
    waves: Vec<EnemyWave>,
}

impl EnemyWaves {
    pub fn new(waves: Vec<EnemyWave>) -> Self {
        Self { waves }
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnemyWave> {
        self.waves.iter()
    }

    /// Wave for round `index`.
    ///
    /// Rounds past the last authored wave replay the last one. Returns `None`
    /// only when no waves are defined.
    pub fn wave(&self, index: usize) -> Option<&EnemyWave> {
        let last = self.waves.len().checked_sub(1)?;
        self.waves.get(index.min(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_beyond_last_wave_replay_it() {
        let waves = EnemyWaves::new(vec![
            EnemyWave::new(["grunt"]),
            EnemyWave::new(["grunt", "archer"]),
        ]);

        assert_eq!(waves.wave(0).map(|w| w.units.len()), Some(1));
        assert_eq!(waves.wave(1).map(|w| w.units.len()), Some(2));
        assert_eq!(waves.wave(7), waves.wave(1));
    }

    #[test]
    fn no_waves_means_no_wave() {
        assert_eq!(EnemyWaves::default().wave(0), None);
    }
}
