//! [`Agent`] implementation over an arena unit.

use game_core::{
    ArenaLayout, GameConfig, Skill, Target, TargetRef, Team, Unit, UnitId, UnitParameters, Vec3,
    angle_delta,
};
use rand::{Rng, rngs::StdRng};

use super::event::ArenaEvent;
use super::sight::{Hit, first_hit};
use crate::error::{Result, RuntimeError};
use crate::providers::ai::Agent;

/// Mutable handle on one unit of the arena for the duration of its tick.
pub struct UnitAgent<'a> {
    units: &'a mut [Unit],
    index: usize,
    layout: &'a ArenaLayout,
    config: &'a GameConfig,
    rng: &'a mut StdRng,
    events: &'a mut Vec<ArenaEvent>,
    dt: f32,
}

impl<'a> UnitAgent<'a> {
    pub fn new(
        units: &'a mut [Unit],
        index: usize,
        layout: &'a ArenaLayout,
        config: &'a GameConfig,
        rng: &'a mut StdRng,
        events: &'a mut Vec<ArenaEvent>,
        dt: f32,
    ) -> Self {
        Self {
            units,
            index,
            layout,
            config,
            rng,
            events,
            dt,
        }
    }

    fn unit(&self) -> &Unit {
        &self.units[self.index]
    }

    fn unit_mut(&mut self) -> &mut Unit {
        &mut self.units[self.index]
    }

    fn find(&self, id: UnitId) -> Option<usize> {
        self.units.iter().position(|unit| unit.id == id)
    }

    /// Position and aliveness of a target, if it still exists.
    fn resolve(&self, target: TargetRef) -> Option<(Vec3, bool)> {
        match target {
            TargetRef::Unit(id) => self
                .find(id)
                .map(|i| (self.units[i].position, self.units[i].is_alive())),
            TargetRef::Point(point) => Some((point.position(), point.is_alive())),
        }
    }

    fn is_self(&self, target: TargetRef) -> bool {
        target.unit_id() == Some(self.unit().id)
    }

    /// Applies damage to a target and reports a kill.
    fn strike(&mut self, target: TargetRef, damage: f32) -> Result<u32> {
        match target {
            TargetRef::Unit(id) => {
                let index = self.find(id).ok_or(RuntimeError::UnknownUnit(id))?;
                let victim = &mut self.units[index];
                let dealt = victim.take_damage(damage)?;
                if dealt > 0 && !victim.is_alive() {
                    tracing::info!(unit = %id, name = %victim.name, "unit died");
                    self.events.push(ArenaEvent::Died { unit: id });
                }
                Ok(dealt)
            }
            TargetRef::Point(mut point) => {
                point.apply_damage(damage)?;
                Ok(0)
            }
        }
    }
}

impl Agent for UnitAgent<'_> {
    fn id(&self) -> UnitId {
        self.unit().id
    }

    fn team(&self) -> Team {
        self.unit().team
    }

    fn position(&self) -> Vec3 {
        self.unit().position
    }

    fn parameters(&self) -> &UnitParameters {
        &self.unit().parameters
    }

    fn fear_distance(&self) -> f32 {
        self.config.fear_distance
    }

    fn skill(&self) -> Option<Skill> {
        self.unit().skill
    }

    fn is_ready_to_attack(&self) -> bool {
        self.unit().is_ready_to_attack()
    }

    fn is_ready_to_use_power(&self) -> bool {
        self.unit().is_ready_to_use_power()
    }

    fn target(&self) -> Option<TargetRef> {
        self.unit().target
    }

    fn set_target(&mut self, target: TargetRef) {
        self.unit_mut().target = Some(target);
    }

    fn clear_target(&mut self) {
        let unit = self.unit_mut();
        unit.target = None;
        unit.destination = None;
    }

    fn move_to_target(&mut self) {
        if !self.unit().is_alive() {
            return;
        }
        let destination = self
            .unit()
            .target
            .and_then(|target| self.resolve(target))
            .map(|(position, _)| position);
        if destination.is_some() {
            self.unit_mut().destination = destination;
        }
    }

    fn look_at_target(&mut self) -> bool {
        let Some(target) = self.unit().target else {
            return true;
        };
        if self.is_self(target) {
            return true;
        }

        self.unit_mut().destination = None;

        let Some((target_position, _)) = self.resolve(target) else {
            return true;
        };
        let to_target = (target_position - self.position()).with_y(0.0);
        if to_target.is_zero() {
            return true;
        }

        let tolerance = self.config.facing_tolerance();
        let turn_rate = self.config.rotation_speed_multiplier;
        let dt = self.dt;
        let unit = self.unit_mut();
        let delta = angle_delta(unit.heading, to_target.yaw());
        let facing = delta.abs() <= tolerance;
        if !facing {
            // Slerp toward the target; the factor saturates at a full turn.
            let factor = (unit.parameters.speed * turn_rate * dt).clamp(0.0, 1.0);
            unit.heading += delta * factor;
        }
        facing
    }

    fn can_attack_target(&self) -> bool {
        let Some(target) = self.unit().target else {
            return false;
        };
        match self.resolve(target) {
            Some((_, true)) => {}
            _ => return false,
        }
        if self.is_self(target)
            || !self
                .unit()
                .parameters
                .is_ranged(self.config.melee_attack_range_max)
        {
            return true;
        }

        let Some((target_position, _)) = self.resolve(target) else {
            return false;
        };
        let shooter = self.unit();
        match first_hit(
            shooter.position,
            target_position,
            shooter.id,
            &*self.units,
            self.layout,
            self.config.unit_radius,
        ) {
            None => true,
            Some(Hit::Unit(id)) => target.unit_id() == Some(id),
            Some(Hit::Obstacle) => false,
        }
    }

    fn attack_target(&mut self) -> Result<()> {
        let attacker = self.unit().id;
        let target = self.unit().target.ok_or(RuntimeError::NoTarget(attacker))?;
        if !self.unit().is_ready_to_attack() {
            tracing::debug!(unit = %attacker, "attack not recharged");
            return Ok(());
        }

        let parameters = self.unit().parameters.clone();
        self.unit_mut().spend_attack();

        if self.rng.random::<f32>() < parameters.chance_to_miss {
            tracing::debug!(unit = %attacker, "attack missed");
            self.events.push(ArenaEvent::Missed {
                attacker,
                target: target.unit_id(),
            });
            return Ok(());
        }

        let critical = self.rng.random::<f32>() < parameters.chance_to_critical;
        let damage = if critical {
            parameters.attack * 2.0
        } else {
            parameters.attack
        };

        let dealt = self.strike(target, damage)?;
        self.unit_mut().gain_power();
        tracing::debug!(unit = %attacker, ?target, dealt, critical, "attack landed");
        self.events.push(ArenaEvent::Attacked {
            attacker,
            target: target.unit_id(),
            damage: dealt,
            critical,
        });
        Ok(())
    }

    fn use_skill_on_target(&mut self) -> Result<()> {
        let caster = self.unit().id;
        let target = self.unit().target.ok_or(RuntimeError::NoTarget(caster))?;
        let skill = self.unit().skill.ok_or(RuntimeError::NoSkill(caster))?;
        if !self.unit().is_ready_to_use_power() {
            tracing::debug!(unit = %caster, "power not charged");
            return Ok(());
        }

        let amount = match target {
            TargetRef::Unit(id) => {
                let index = self.find(id).ok_or(RuntimeError::UnknownUnit(id))?;
                skill.apply(&mut self.units[index])?
            }
            // Skills only affect units.
            TargetRef::Point(_) => 0,
        };
        self.unit_mut().reset_power();

        tracing::info!(unit = %caster, ?skill, ?target, amount, "skill used");
        self.events.push(ArenaEvent::SkillUsed {
            caster,
            target: target.unit_id(),
            amount,
        });
        Ok(())
    }

    fn is_reachable(&self, point: Vec3) -> bool {
        self.layout.is_reachable(point)
    }
}
