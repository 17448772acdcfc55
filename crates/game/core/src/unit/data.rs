use super::UnitParameters;
use crate::skill::Skill;
use crate::types::BehaviorKind;

/// Content template a unit is spawned from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitData {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameters: UnitParameters,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skill: Option<Skill>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub behavior: BehaviorKind,
}

impl UnitData {
    pub fn new(name: impl Into<String>, parameters: UnitParameters) -> Self {
        Self {
            name: name.into(),
            parameters,
            skill: None,
            behavior: BehaviorKind::default(),
        }
    }

    /// Brings parameters and skill values into their legal ranges.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            parameters: self.parameters.sanitized(),
            skill: self.skill.map(Skill::sanitized),
            ..self
        }
    }
}
