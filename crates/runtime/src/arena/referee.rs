//! Round win/lose judgement.

use game_core::{Circle, Team, Unit};

/// How a round ended, from the player team's point of view.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RoundResult {
    Win,
    Lose,
}

/// Decides the round once and sticks to the first decision.
///
/// - `Lose` once every player unit that took part is dead
/// - `Win` once a living player unit stands in the finish area
#[derive(Clone, Debug, Default)]
pub struct Referee {
    finish_area: Option<Circle>,
    result: Option<RoundResult>,
}

impl Referee {
    pub fn new(finish_area: Option<Circle>) -> Self {
        Self {
            finish_area,
            result: None,
        }
    }

    pub fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Judges the current unit state. Returns a result only on the call that
    /// first decides it.
    pub fn judge(&mut self, units: &[Unit]) -> Option<RoundResult> {
        if self.result.is_some() {
            return None;
        }

        let mut players = units.iter().filter(|unit| unit.team == Team::Player).peekable();
        if players.peek().is_none() {
            return None;
        }

        let mut alive = players.filter(|unit| unit.is_alive()).peekable();
        let decided = if alive.peek().is_none() {
            Some(RoundResult::Lose)
        } else {
            let finish_area = self.finish_area?;
            alive
                .any(|unit| finish_area.contains(unit.position))
                .then_some(RoundResult::Win)
        };

        self.result = decided;
        decided
    }
}
