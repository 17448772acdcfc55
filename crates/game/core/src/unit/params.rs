//! Unit combat and movement parameters.

/// Tunable per-archetype parameters of a unit.
///
/// Authored in content files; [`UnitParameters::sanitized`] brings every
/// field into its legal range.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UnitParameters {
    /// Damage dealt per landed attack.
    pub attack: f32,
    /// Fraction of incoming damage absorbed by armor, in `[0, 1]`.
    pub defence: f32,
    pub health_max: u32,
    /// Movement speed in world units per second; also scales turn rate.
    pub speed: f32,
    /// Attack recharge gained per second (a full recharge is `1.0`).
    pub attack_speed: f32,
    pub attack_range: f32,
    /// Power needed to cast the unit's skill.
    pub power_max: u32,
    /// Probability in `[0, 1]` that an attack misses.
    pub chance_to_miss: f32,
    /// Probability in `[0, 1]` that a landed attack deals double damage.
    pub chance_to_critical: f32,
}

impl UnitParameters {
    pub const ATTACK_MIN: f32 = 0.0;
    pub const DEFENCE_MIN: f32 = 0.0;
    pub const DEFENCE_MAX: f32 = 1.0;
    pub const HEALTH_MIN: u32 = 1;
    pub const SPEED_MIN: f32 = 0.0;
    pub const ATTACK_SPEED_MIN: f32 = 0.0;
    pub const ATTACK_RANGE_MIN: f32 = 0.0;
    pub const CHANCE_MIN: f32 = 0.0;
    pub const CHANCE_MAX: f32 = 1.0;

    /// Clamps every field into its legal range.
    ///
    /// Non-finite values collapse to the field's minimum.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            attack: at_least(self.attack, Self::ATTACK_MIN),
            defence: within(self.defence, Self::DEFENCE_MIN, Self::DEFENCE_MAX),
            health_max: self.health_max.max(Self::HEALTH_MIN),
            speed: at_least(self.speed, Self::SPEED_MIN),
            attack_speed: at_least(self.attack_speed, Self::ATTACK_SPEED_MIN),
            attack_range: at_least(self.attack_range, Self::ATTACK_RANGE_MIN),
            power_max: self.power_max,
            chance_to_miss: within(self.chance_to_miss, Self::CHANCE_MIN, Self::CHANCE_MAX),
            chance_to_critical: within(
                self.chance_to_critical,
                Self::CHANCE_MIN,
                Self::CHANCE_MAX,
            ),
        }
    }

    /// Ranged units need a clear line of sight to strike.
    pub fn is_ranged(&self, melee_attack_range_max: f32) -> bool {
        self.attack_range > melee_attack_range_max
    }
}

impl Default for UnitParameters {
    fn default() -> Self {
        Self {
            attack: 10.0,
            defence: 0.0,
            health_max: 100,
            speed: 3.5,
            attack_speed: 1.0,
            attack_range: 1.5,
            power_max: 5,
            chance_to_miss: 0.0,
            chance_to_critical: 0.0,
        }
    }
}

fn at_least(value: f32, min: f32) -> f32 {
    if value.is_finite() { value.max(min) } else { min }
}

fn within(value: f32, min: f32, max: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_clamps_out_of_range_values() {
        let params = UnitParameters {
            attack: -5.0,
            defence: 1.5,
            health_max: 0,
            speed: f32::NAN,
            chance_to_miss: -0.2,
            chance_to_critical: 2.0,
            ..UnitParameters::default()
        }
        .sanitized();

        assert_eq!(params.attack, 0.0);
        assert_eq!(params.defence, 1.0);
        assert_eq!(params.health_max, 1);
        assert_eq!(params.speed, 0.0);
        assert_eq!(params.chance_to_miss, 0.0);
        assert_eq!(params.chance_to_critical, 1.0);
    }

    #[test]
    fn ranged_means_beyond_melee_threshold() {
        let mut params = UnitParameters::default();
        params.attack_range = 2.0;
        assert!(!params.is_ranged(2.0));
        params.attack_range = 6.0;
        assert!(params.is_ranged(2.0));
    }
}
