//! Unit skills cast once the power pool is full.

use crate::error::UnitError;
use crate::unit::{Unit, UnitView};

/// A special ability owned by a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Skill {
    /// Restores `amount` health to an almost-dead ally.
    Heal { amount: u32 },
}

impl Skill {
    pub const HEAL_AMOUNT_MIN: u32 = 1;

    #[must_use]
    pub fn sanitized(self) -> Self {
        match self {
            Skill::Heal { amount } => Skill::Heal {
                amount: amount.max(Self::HEAL_AMOUNT_MIN),
            },
        }
    }

    /// Picks the unit this skill should be cast on, if any.
    ///
    /// `allies` is the caster's own team. Heal prefers the most wounded
    /// almost-dead ally; ties keep enumeration order.
    pub fn select_target(&self, allies: &[UnitView], almost_dead_divider: f32) -> Option<UnitView> {
        match self {
            Skill::Heal { .. } => allies
                .iter()
                .filter(|ally| ally.is_alive() && ally.is_almost_dead(almost_dead_divider))
                .min_by_key(|ally| ally.health)
                .copied(),
        }
    }

    /// Applies the skill's effect to `target`. Returns the magnitude applied.
    pub fn apply(&self, target: &mut Unit) -> Result<u32, UnitError> {
        match self {
            Skill::Heal { amount } => target.heal(i32::try_from(*amount).unwrap_or(i32::MAX)),
        }
    }
}
