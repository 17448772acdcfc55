//! Condition nodes for AI behavior trees.
//!
//! Conditions inspect the agent and the world and return `Success` or
//! `Failure`. They take shared references only, so they cannot change state
//! and never return `Running`.

use game_core::Team;

use crate::providers::ai::{Agent, WorldContext};

/// State-free predicates used by the archetype trees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    /// A living unit of the team lies within the agent's attack range.
    IsCloseToAttackUnit(Team),
    /// A living unit of the team has the agent within *its own* attack range.
    IsCloseToGetScared(Team),
    /// The agent's attack recharge is full.
    IsReadyToAttack,
    /// The agent has a skill and a full power pool.
    IsReadyToUsePower,
    /// The skill-target query yields a target.
    IsSkillTargetExist,
    /// The skill target exists and lies within the agent's attack range.
    IsCloseToSkillTarget,
}

impl Condition {
    pub fn check(&self, agent: &dyn Agent, world: &dyn WorldContext) -> bool {
        let position = agent.position();
        let attack_range = agent.parameters().attack_range;

        match *self {
            Condition::IsCloseToAttackUnit(team) => world
                .living_units(team)
                .iter()
                .any(|unit| unit.distance_to(position) <= attack_range),
            Condition::IsCloseToGetScared(team) => world
                .living_units(team)
                .iter()
                .any(|unit| unit.distance_to(position) <= unit.attack_range),
            Condition::IsReadyToAttack => agent.is_ready_to_attack(),
            Condition::IsReadyToUsePower => {
                agent.skill().is_some() && agent.is_ready_to_use_power()
            }
            Condition::IsSkillTargetExist => world.skill_target_for(agent).is_some(),
            Condition::IsCloseToSkillTarget => world
                .skill_target_for(agent)
                .is_some_and(|target| target.distance_to(position) <= attack_range),
        }
    }
}
