//! Common error infrastructure for game-core.
//!
//! Only caller contract violations are errors here. A unit that finds nothing
//! to do is not an error; the AI layer expresses that as a `Failure` status.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each concern has its own error type with specific variants
//! - **Reject, don't clamp**: Invalid magnitudes are refused; clamping happens
//!   only where a game rule defines it (health ceiling, minimum damage)
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: negative damage, negative heal
    Validation,

    /// Fatal error - configuration cannot be used at all.
    ///
    /// Examples: non-positive fear distance, zero rotation speed
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common interface of game-core errors.
pub trait GameError: std::error::Error {
    fn severity(&self) -> ErrorSeverity;

    /// Stable machine-readable code for logs.
    fn error_code(&self) -> &'static str;
}

/// Rejected operations on a unit or target.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum UnitError {
    /// Damage must be a finite, non-negative amount.
    #[error("damage must be finite and non-negative, got {0}")]
    InvalidDamage(f32),

    /// Healing must be non-negative.
    #[error("heal amount must be non-negative, got {0}")]
    NegativeHeal(i32),
}

impl GameError for UnitError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            UnitError::InvalidDamage(_) => "UNIT_INVALID_DAMAGE",
            UnitError::NegativeHeal(_) => "UNIT_NEGATIVE_HEAL",
        }
    }
}

/// Invalid [`GameConfig`](crate::GameConfig) values.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("config field `{field}` must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::NotPositive { .. } => "CONFIG_NOT_POSITIVE",
        }
    }
}
