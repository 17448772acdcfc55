//! Errors surfaced by the arena and the agent capabilities.
//!
//! Behavior tree nodes never see these directly: a leaf that hits one logs it
//! and reports `Failure`.

use game_core::{ErrorSeverity, GameError, UnitError, UnitId, Vec3};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("unit {0} is not in the arena")]
    UnknownUnit(UnitId),

    #[error("no unit template named `{0}`")]
    UnknownTemplate(String),

    #[error("cannot spawn `{unit}` at unreachable position {position:?}")]
    UnreachableSpawn { unit: String, position: Vec3 },

    #[error("unit {0} has no target")]
    NoTarget(UnitId),

    #[error("unit {0} has no skill")]
    NoSkill(UnitId),

    #[error(transparent)]
    Unit(#[from] UnitError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownTemplate(_) | Self::UnreachableSpawn { .. } => ErrorSeverity::Fatal,
            Self::UnknownUnit(_) | Self::NoTarget(_) | Self::NoSkill(_) => {
                ErrorSeverity::Validation
            }
            Self::Unit(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownUnit(_) => "RUNTIME_UNKNOWN_UNIT",
            Self::UnknownTemplate(_) => "RUNTIME_UNKNOWN_TEMPLATE",
            Self::UnreachableSpawn { .. } => "RUNTIME_UNREACHABLE_SPAWN",
            Self::NoTarget(_) => "RUNTIME_NO_TARGET",
            Self::NoSkill(_) => "RUNTIME_NO_SKILL",
            Self::Unit(e) => e.error_code(),
        }
    }
}
