//! Identifiers and small enums shared by every crate.

use std::fmt;

/// Unique identifier of a unit in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Unit faction (allegiance).
///
/// Faction drives targeting: trees are parameterized by the team they treat
/// as hostile.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Team {
    /// Units controlled on behalf of the player.
    Player,
    /// Wave-spawned opponents.
    Enemies,
}

impl Team {
    /// The team this one fights against.
    pub const fn opponent(self) -> Self {
        match self {
            Team::Player => Team::Enemies,
            Team::Enemies => Team::Player,
        }
    }
}

/// Named fixed world points usable as movement targets.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Landmark {
    /// Goal region the player team advances toward.
    FinishArea,
}

/// Behavior tree archetype assigned to a unit.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BehaviorKind {
    /// Seek and attack the nearest player unit, else idle.
    #[default]
    Enemy,
    /// Cast skills, fight, retreat when threatened, advance to the finish.
    Player,
}
