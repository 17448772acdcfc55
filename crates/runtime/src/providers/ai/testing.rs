//! Scriptable agent and world used by node tests.

use game_core::{Landmark, Skill, Team, TargetRef, UnitId, UnitParameters, UnitView, Vec3};

use super::{Agent, WorldContext};
use crate::error::{Result, RuntimeError};

/// Everything a node asked the agent to do, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    SetTarget(TargetRef),
    ClearTarget,
    MoveToTarget,
    LookAt,
    Attack,
    UseSkill,
}

pub struct FakeAgent {
    id: UnitId,
    team: Team,
    position: Vec3,
    parameters: UnitParameters,
    fear_distance: f32,
    skill: Option<Skill>,
    attack_ready: bool,
    power_ready: bool,
    can_attack: bool,
    reachable: bool,
    turns_needed: u32,
    turns_taken: u32,
    target: Option<TargetRef>,
    commands: Vec<Command>,
}

impl FakeAgent {
    pub fn player() -> Self {
        Self {
            id: UnitId(1),
            team: Team::Player,
            position: Vec3::ZERO,
            parameters: UnitParameters::default(),
            fear_distance: 4.0,
            skill: None,
            attack_ready: true,
            power_ready: false,
            can_attack: true,
            reachable: true,
            turns_needed: 0,
            turns_taken: 0,
            target: None,
            commands: Vec::new(),
        }
    }

    pub fn with_attack_range(mut self, range: f32) -> Self {
        self.parameters.attack_range = range;
        self
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skill = Some(skill);
        self
    }

    pub fn with_power_ready(mut self, ready: bool) -> Self {
        self.power_ready = ready;
        self
    }

    pub fn with_attack_ready(mut self, ready: bool) -> Self {
        self.attack_ready = ready;
        self
    }

    pub fn with_fear_distance(mut self, fear_distance: f32) -> Self {
        self.fear_distance = fear_distance;
        self
    }

    /// Number of `look_at_target` calls that report "not facing yet".
    pub fn with_turns_needed(mut self, turns: u32) -> Self {
        self.turns_needed = turns;
        self
    }

    pub fn with_reachable(mut self, reachable: bool) -> Self {
        self.reachable = reachable;
        self
    }

    pub fn set_can_attack(&mut self, can_attack: bool) {
        self.can_attack = can_attack;
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn count(&self, command: &Command) -> usize {
        self.commands.iter().filter(|c| *c == command).count()
    }
}

impl Agent for FakeAgent {
    fn id(&self) -> UnitId {
        self.id
    }

    fn team(&self) -> Team {
        self.team
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn parameters(&self) -> &UnitParameters {
        &self.parameters
    }

    fn fear_distance(&self) -> f32 {
        self.fear_distance
    }

    fn skill(&self) -> Option<Skill> {
        self.skill
    }

    fn is_ready_to_attack(&self) -> bool {
        self.attack_ready
    }

    fn is_ready_to_use_power(&self) -> bool {
        self.power_ready
    }

    fn target(&self) -> Option<TargetRef> {
        self.target
    }

    fn set_target(&mut self, target: TargetRef) {
        self.target = Some(target);
        self.commands.push(Command::SetTarget(target));
    }

    fn clear_target(&mut self) {
        self.target = None;
        self.commands.push(Command::ClearTarget);
    }

    fn move_to_target(&mut self) {
        self.commands.push(Command::MoveToTarget);
    }

    fn look_at_target(&mut self) -> bool {
        self.commands.push(Command::LookAt);
        let facing = self.turns_taken >= self.turns_needed;
        self.turns_taken += 1;
        facing
    }

    fn can_attack_target(&self) -> bool {
        self.target.is_some() && self.can_attack
    }

    fn attack_target(&mut self) -> Result<()> {
        self.target.ok_or(RuntimeError::NoTarget(self.id))?;
        if !self.attack_ready {
            return Ok(());
        }
        self.attack_ready = false;
        self.commands.push(Command::Attack);
        Ok(())
    }

    fn use_skill_on_target(&mut self) -> Result<()> {
        self.skill.ok_or(RuntimeError::NoSkill(self.id))?;
        self.power_ready = false;
        self.commands.push(Command::UseSkill);
        Ok(())
    }

    fn is_reachable(&self, _point: Vec3) -> bool {
        self.reachable
    }
}

#[derive(Default)]
pub struct FakeWorld {
    units: Vec<UnitView>,
    finish_area: Option<Vec3>,
    skill_target: Option<UnitId>,
}

impl FakeWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a unit with `health` out of 30 and a melee range of 1.5.
    pub fn add_unit(&mut self, team: Team, position: Vec3, health: u32) -> UnitId {
        let id = UnitId(100 + self.units.len() as u32);
        self.units.push(UnitView {
            id,
            team,
            position,
            health,
            health_max: 30,
            attack_range: 1.5,
        });
        id
    }

    pub fn set_attack_range(&mut self, id: UnitId, range: f32) {
        if let Some(unit) = self.units.iter_mut().find(|u| u.id == id) {
            unit.attack_range = range;
        }
    }

    pub fn kill(&mut self, id: UnitId) {
        if let Some(unit) = self.units.iter_mut().find(|u| u.id == id) {
            unit.health = 0;
        }
    }

    pub fn set_finish_area(&mut self, position: Vec3) {
        self.finish_area = Some(position);
    }

    pub fn set_skill_target(&mut self, id: UnitId) {
        self.skill_target = Some(id);
    }
}

impl WorldContext for FakeWorld {
    fn living_units(&self, team: Team) -> Vec<UnitView> {
        self.units
            .iter()
            .filter(|u| u.team == team && u.is_alive())
            .copied()
            .collect()
    }

    fn landmark(&self, landmark: Landmark) -> Option<Vec3> {
        match landmark {
            Landmark::FinishArea => self.finish_area,
        }
    }

    fn skill_target_for(&self, agent: &dyn Agent) -> Option<UnitView> {
        agent.skill()?;
        let id = self.skill_target?;
        self.units.iter().find(|u| u.id == id && u.is_alive()).copied()
    }
}
