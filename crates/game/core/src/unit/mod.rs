//! Unit state and combat rules.
//!
//! A [`Unit`] is plain data plus the pure rules that change it: damage after
//! armor, healing, power gain and attack recharge. Anything that needs the
//! rest of the world (movement, line of sight, choosing whom to hit) lives in
//! the runtime.

mod data;
mod params;

pub use data::UnitData;
pub use params::UnitParameters;

use crate::error::UnitError;
use crate::math::Vec3;
use crate::skill::Skill;
use crate::target::{Target, TargetRef, validate_damage};
use crate::types::{BehaviorKind, Team, UnitId};

/// A simulated combatant.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub team: Team,
    pub behavior: BehaviorKind,
    pub parameters: UnitParameters,
    pub skill: Option<Skill>,

    pub position: Vec3,
    /// Ground-plane heading in radians (see [`Vec3::yaw`]).
    pub heading: f32,
    /// Navigation goal; `None` when stopped.
    pub destination: Option<Vec3>,
    pub target: Option<TargetRef>,

    health: u32,
    power: u32,
    attack_recharge: f32,
}

impl Unit {
    pub const ATTACK_RECHARGE_MIN: f32 = 0.0;
    pub const ATTACK_RECHARGE_FULL: f32 = 1.0;
    pub const DAMAGE_TAKEN_MIN: u32 = 1;
    pub const POWER_MIN: u32 = 0;

    /// Creates a unit at full health with an empty power pool and a full
    /// attack recharge.
    pub fn new(id: UnitId, name: impl Into<String>, team: Team, parameters: UnitParameters) -> Self {
        Self {
            id,
            name: name.into(),
            team,
            behavior: BehaviorKind::default(),
            health: parameters.health_max,
            parameters,
            skill: None,
            position: Vec3::ZERO,
            heading: 0.0,
            destination: None,
            target: None,
            power: Self::POWER_MIN,
            attack_recharge: Self::ATTACK_RECHARGE_FULL,
        }
    }

    /// Creates a unit from a content template.
    pub fn spawn(id: UnitId, data: &UnitData, team: Team, position: Vec3) -> Self {
        let mut unit = Self::new(id, data.name.clone(), team, data.parameters.clone())
            .with_behavior(data.behavior)
            .at(position);
        unit.skill = data.skill;
        unit
    }

    pub fn with_behavior(mut self, behavior: BehaviorKind) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skill = Some(skill);
        self
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn facing(mut self, heading: f32) -> Self {
        self.heading = heading;
        self
    }

    /// Sets current health, capped at the maximum.
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health.min(self.parameters.health_max);
        self
    }

    /// Sets current power, capped at the maximum.
    pub fn with_power(mut self, power: u32) -> Self {
        self.power = power.min(self.parameters.power_max);
        self
    }

    pub fn with_attack_recharge(mut self, recharge: f32) -> Self {
        self.attack_recharge = recharge.clamp(Self::ATTACK_RECHARGE_MIN, Self::ATTACK_RECHARGE_FULL);
        self
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn attack_recharge(&self) -> f32 {
        self.attack_recharge
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_ready_to_attack(&self) -> bool {
        self.attack_recharge >= Self::ATTACK_RECHARGE_FULL
    }

    pub fn is_ready_to_use_power(&self) -> bool {
        self.power == self.parameters.power_max
    }

    pub fn is_almost_dead(&self, divider: f32) -> bool {
        is_almost_dead(self.health, self.parameters.health_max, divider)
    }

    /// Applies armor-reduced damage.
    ///
    /// Returns the hit points actually removed. Dead units take nothing.
    /// Every hit taken by a living unit charges its power by one.
    pub fn take_damage(&mut self, damage: f32) -> Result<u32, UnitError> {
        let damage = validate_damage(damage)?;
        if !self.is_alive() {
            return Ok(0);
        }

        let dealt = self.damage_after_armor(damage);
        self.health = self.health.saturating_sub(dealt);
        self.gain_power();
        Ok(dealt)
    }

    /// Restores health up to the maximum. Returns the hit points restored.
    pub fn heal(&mut self, amount: i32) -> Result<u32, UnitError> {
        let amount = u32::try_from(amount).map_err(|_| UnitError::NegativeHeal(amount))?;
        if !self.is_alive() {
            return Ok(0);
        }

        let before = self.health;
        self.health = self
            .health
            .saturating_add(amount)
            .min(self.parameters.health_max);
        Ok(self.health - before)
    }

    /// Adds one power point, capped at the maximum.
    pub fn gain_power(&mut self) {
        self.power = (self.power + 1).min(self.parameters.power_max);
    }

    pub fn reset_power(&mut self) {
        self.power = Self::POWER_MIN;
    }

    /// Empties the attack recharge after striking.
    pub fn spend_attack(&mut self) {
        self.attack_recharge = Self::ATTACK_RECHARGE_MIN;
    }

    /// Refills the attack recharge by `attack_speed * dt`.
    pub fn recharge_attack(&mut self, dt: f32) {
        if self.attack_recharge < Self::ATTACK_RECHARGE_FULL {
            self.attack_recharge = (self.attack_recharge + self.parameters.attack_speed * dt)
                .min(Self::ATTACK_RECHARGE_FULL);
        }
    }

    /// Read-only summary used by world snapshots.
    pub fn view(&self) -> UnitView {
        UnitView {
            id: self.id,
            team: self.team,
            position: self.position,
            health: self.health,
            health_max: self.parameters.health_max,
            attack_range: self.parameters.attack_range,
        }
    }

    fn damage_after_armor(&self, damage: f32) -> u32 {
        let reduced = if self.parameters.defence > 0.0 {
            damage - damage * self.parameters.defence
        } else {
            damage
        };
        // `as` truncates toward zero, matching whole hit points.
        (reduced as u32).max(Self::DAMAGE_TAKEN_MIN)
    }
}

impl Target for Unit {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn is_alive(&self) -> bool {
        Unit::is_alive(self)
    }

    fn apply_damage(&mut self, damage: f32) -> Result<(), UnitError> {
        self.take_damage(damage).map(|_| ())
    }
}

/// Snapshot of the parts of a unit other agents may look at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitView {
    pub id: UnitId,
    pub team: Team,
    pub position: Vec3,
    pub health: u32,
    pub health_max: u32,
    pub attack_range: f32,
}

impl UnitView {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_almost_dead(&self, divider: f32) -> bool {
        is_almost_dead(self.health, self.health_max, divider)
    }

    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.position.distance(point)
    }
}

fn is_almost_dead(health: u32, health_max: u32, divider: f32) -> bool {
    (health as f32) < health_max as f32 / divider
}
