//! Read-only world snapshot handed to trees.

use game_core::{ArenaLayout, GameConfig, Landmark, Team, Unit, UnitView, Vec3};

use crate::providers::ai::{Agent, WorldContext};

/// Living units and landmarks as they stood when the snapshot was taken.
///
/// The arena captures a fresh snapshot before each unit's tick, so a unit
/// sees the effects of units that acted earlier in the same step.
#[derive(Clone, Debug)]
pub struct WorldSnapshot {
    units: Vec<UnitView>,
    finish_area: Option<Vec3>,
    almost_dead_divider: f32,
}

impl WorldSnapshot {
    pub fn capture(units: &[Unit], layout: &ArenaLayout, config: &GameConfig) -> Self {
        Self {
            units: units
                .iter()
                .filter(|unit| unit.is_alive())
                .map(Unit::view)
                .collect(),
            finish_area: layout.finish_area.map(|area| area.center),
            almost_dead_divider: config.almost_dead_divider,
        }
    }
}

impl WorldContext for WorldSnapshot {
    fn living_units(&self, team: Team) -> Vec<UnitView> {
        self.units
            .iter()
            .filter(|unit| unit.team == team)
            .copied()
            .collect()
    }

    fn landmark(&self, landmark: Landmark) -> Option<Vec3> {
        match landmark {
            Landmark::FinishArea => self.finish_area,
        }
    }

    fn skill_target_for(&self, agent: &dyn Agent) -> Option<UnitView> {
        let skill = agent.skill()?;
        let allies = self.living_units(agent.team());
        skill.select_target(&allies, self.almost_dead_divider)
    }
}
