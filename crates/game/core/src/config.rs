use crate::error::ConfigError;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Radius within which a unit notices threats and runs from them.
    pub fear_distance: f32,
    /// Units whose attack range exceeds this are ranged and need line of sight.
    pub melee_attack_range_max: f32,
    /// Turn rate factor applied on top of unit speed.
    pub rotation_speed_multiplier: f32,
    /// A unit faces its target once the heading error is within this angle.
    pub facing_tolerance_degrees: f32,
    /// A unit is "almost dead" below `health_max / almost_dead_divider`.
    pub almost_dead_divider: f32,
    /// Collision radius of a unit, used for line-of-sight hits.
    pub unit_radius: f32,
    /// How long the player archetype keeps running to safety, in seconds.
    pub flee_duration: f32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FEAR_DISTANCE: f32 = 4.0;
    pub const DEFAULT_MELEE_ATTACK_RANGE_MAX: f32 = 2.0;
    pub const DEFAULT_ROTATION_SPEED_MULTIPLIER: f32 = 2.0;
    pub const DEFAULT_FACING_TOLERANCE_DEGREES: f32 = 10.0;
    pub const DEFAULT_ALMOST_DEAD_DIVIDER: f32 = 3.0;
    pub const DEFAULT_UNIT_RADIUS: f32 = 0.5;
    pub const DEFAULT_FLEE_DURATION: f32 = 0.5;

    pub fn new() -> Self {
        Self {
            fear_distance: Self::DEFAULT_FEAR_DISTANCE,
            melee_attack_range_max: Self::DEFAULT_MELEE_ATTACK_RANGE_MAX,
            rotation_speed_multiplier: Self::DEFAULT_ROTATION_SPEED_MULTIPLIER,
            facing_tolerance_degrees: Self::DEFAULT_FACING_TOLERANCE_DEGREES,
            almost_dead_divider: Self::DEFAULT_ALMOST_DEAD_DIVIDER,
            unit_radius: Self::DEFAULT_UNIT_RADIUS,
            flee_duration: Self::DEFAULT_FLEE_DURATION,
        }
    }

    pub fn with_flee_duration(mut self, flee_duration: f32) -> Self {
        self.flee_duration = flee_duration;
        self
    }

    pub fn with_fear_distance(mut self, fear_distance: f32) -> Self {
        self.fear_distance = fear_distance;
        self
    }

    /// Facing tolerance in radians.
    pub fn facing_tolerance(&self) -> f32 {
        self.facing_tolerance_degrees.to_radians()
    }

    /// Checks that every tunable is positive and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("fear_distance", self.fear_distance),
            ("melee_attack_range_max", self.melee_attack_range_max),
            ("rotation_speed_multiplier", self.rotation_speed_multiplier),
            ("facing_tolerance_degrees", self.facing_tolerance_degrees),
            ("almost_dead_divider", self.almost_dead_divider),
            ("unit_radius", self.unit_radius),
            ("flee_duration", self.flee_duration),
        ];

        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
