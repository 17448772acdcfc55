//! Targets: anything with a position that can be approached or struck.

use crate::error::UnitError;
use crate::math::Vec3;
use crate::types::UnitId;

/// Uniform capability over units and static world points.
pub trait Target {
    fn position(&self) -> Vec3;

    fn is_alive(&self) -> bool;

    /// Applies `damage` hit points of damage.
    ///
    /// Negative or non-finite amounts are rejected.
    fn apply_damage(&mut self, damage: f32) -> Result<(), UnitError>;
}

/// An immutable, always-alive world point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointTarget {
    position: Vec3,
}

impl PointTarget {
    pub const fn new(position: Vec3) -> Self {
        Self { position }
    }
}

impl Target for PointTarget {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn is_alive(&self) -> bool {
        true
    }

    fn apply_damage(&mut self, damage: f32) -> Result<(), UnitError> {
        // Points absorb valid damage without effect.
        validate_damage(damage).map(|_| ())
    }
}

/// Non-owning reference to a target held by an agent or an action.
///
/// A unit reference goes stale when the unit dies; holders must re-check
/// aliveness before acting on it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetRef {
    Unit(UnitId),
    Point(PointTarget),
}

impl TargetRef {
    pub const fn point(position: Vec3) -> Self {
        TargetRef::Point(PointTarget::new(position))
    }

    pub fn unit_id(&self) -> Option<UnitId> {
        match self {
            TargetRef::Unit(id) => Some(*id),
            TargetRef::Point(_) => None,
        }
    }
}

impl From<UnitId> for TargetRef {
    fn from(id: UnitId) -> Self {
        TargetRef::Unit(id)
    }
}

impl From<PointTarget> for TargetRef {
    fn from(point: PointTarget) -> Self {
        TargetRef::Point(point)
    }
}

pub(crate) fn validate_damage(damage: f32) -> Result<f32, UnitError> {
    if damage.is_finite() && damage >= 0.0 {
        Ok(damage)
    } else {
        Err(UnitError::InvalidDamage(damage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_target_is_always_alive_and_ignores_damage() {
        let mut point = PointTarget::new(Vec3::ground(1.0, 2.0));
        assert!(point.is_alive());
        assert_eq!(point.apply_damage(100.0), Ok(()));
        assert!(point.is_alive());
        assert_eq!(point.position(), Vec3::ground(1.0, 2.0));
    }

    #[test]
    fn point_target_rejects_negative_damage() {
        let mut point = PointTarget::new(Vec3::ZERO);
        assert_eq!(point.apply_damage(-1.0), Err(UnitError::InvalidDamage(-1.0)));
    }
}
