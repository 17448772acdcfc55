//! Notifications produced by one arena step.

use game_core::UnitId;

use super::RoundResult;

/// Something that happened during a step, in the order it happened.
#[derive(Clone, Debug, PartialEq)]
pub enum ArenaEvent {
    Attacked {
        attacker: UnitId,
        target: Option<UnitId>,
        damage: u32,
        critical: bool,
    },
    Missed { attacker: UnitId, target: Option<UnitId> },
    SkillUsed {
        caster: UnitId,
        target: Option<UnitId>,
        amount: u32,
    },
    Died { unit: UnitId },
    RoundEnded(RoundResult),
}

/// Outcome of [`Arena::step`](super::Arena::step).
#[derive(Clone, Debug, PartialEq)]
pub struct StepReport {
    /// Index of the step just taken.
    pub tick: u64,
    /// Seconds since the round started, after this step.
    pub elapsed: f32,
    pub events: Vec<ArenaEvent>,
    /// Round result, once decided. Stays set on later steps.
    pub result: Option<RoundResult>,
}

impl StepReport {
    pub fn deaths(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.events.iter().filter_map(|event| match event {
            ArenaEvent::Died { unit } => Some(*unit),
            _ => None,
        })
    }

    pub fn attacks(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, ArenaEvent::Attacked { .. } | ArenaEvent::Missed { .. }))
            .count()
    }
}
