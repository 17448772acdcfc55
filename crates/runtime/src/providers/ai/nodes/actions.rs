//! Action nodes for AI behavior trees.
//!
//! Actions drive the agent and may span several ticks. Whatever an action
//! latches while `Running` lives in its own record and is cleared again
//! before it returns `Success` or `Failure`.

use behavior_tree::Status;
use game_core::{GameError, Landmark, Team, TargetRef, UnitId, UnitView, Vec3};

use crate::providers::ai::{Agent, AiContext, WorldContext};

/// Stateful leaves used by the archetype trees.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Attack(Attack),
    UseSkill(UseSkill),
    MoveTo(MoveTo),
    MoveToSafety(MoveToSafety),
    DoNothing,
}

impl Action {
    pub fn run(&mut self, ctx: &mut AiContext<'_>) -> Status {
        match self {
            Action::Attack(attack) => attack.run(ctx),
            Action::UseSkill(use_skill) => use_skill.run(ctx),
            Action::MoveTo(move_to) => move_to.run(ctx),
            Action::MoveToSafety(flee) => flee.run(ctx),
            Action::DoNothing => do_nothing(ctx),
        }
    }
}

/// Strikes the closest unit of a team within attack range.
///
/// Nearest wins; equal distances go to the lower health, then to enumeration
/// order. The target stays latched while the agent turns and is re-validated
/// on every tick. Once facing, the leaf commits: an agent whose attack is
/// still recharging swings at nothing and the leaf still succeeds.
#[derive(Clone, Debug, PartialEq)]
pub struct Attack {
    team: Team,
    latched: Option<UnitId>,
}

impl Attack {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            latched: None,
        }
    }

    pub fn latched(&self) -> Option<UnitId> {
        self.latched
    }

    fn run(&mut self, ctx: &mut AiContext<'_>) -> Status {
        if self.latched.is_none() {
            let candidates = ctx.world.living_units(self.team);
            let Some(target) = closest_in_range(&*ctx.agent, candidates) else {
                return Status::Failure;
            };

            tracing::debug!(unit = %ctx.agent.id(), target = %target.id, "attack target selected");
            ctx.agent.set_target(TargetRef::Unit(target.id));
            self.latched = Some(target.id);
        }

        if !ctx.agent.can_attack_target() {
            tracing::debug!(unit = %ctx.agent.id(), "attack target lost");
            self.latched = None;
            return Status::Failure;
        }

        if !ctx.agent.look_at_target() {
            return Status::Running;
        }

        self.latched = None;
        match ctx.agent.attack_target() {
            Ok(()) => Status::Success,
            Err(error) => {
                tracing::warn!(
                    unit = %ctx.agent.id(),
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    %error,
                    "attack rejected"
                );
                Status::Failure
            }
        }
    }
}

/// Casts the agent's skill on the skill target.
///
/// The target must be within attack range when selected; afterwards the cast
/// is re-validated every tick and also requires a full power pool.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UseSkill {
    latched: Option<UnitId>,
}

impl UseSkill {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latched(&self) -> Option<UnitId> {
        self.latched
    }

    fn run(&mut self, ctx: &mut AiContext<'_>) -> Status {
        if self.latched.is_none() {
            let position = ctx.agent.position();
            let range = ctx.agent.parameters().attack_range;
            let Some(target) = ctx
                .world
                .skill_target_for(&*ctx.agent)
                .filter(|target| target.distance_to(position) <= range)
            else {
                return Status::Failure;
            };

            tracing::debug!(unit = %ctx.agent.id(), target = %target.id, "skill target selected");
            ctx.agent.set_target(TargetRef::Unit(target.id));
            self.latched = Some(target.id);
        }

        if !ctx.agent.can_attack_target() || !ctx.agent.is_ready_to_use_power() {
            self.latched = None;
            return Status::Failure;
        }

        if !ctx.agent.look_at_target() {
            return Status::Running;
        }

        self.latched = None;
        match ctx.agent.use_skill_on_target() {
            Ok(()) => Status::Success,
            Err(error) => {
                tracing::warn!(
                    unit = %ctx.agent.id(),
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    %error,
                    "skill rejected"
                );
                Status::Failure
            }
        }
    }
}

/// Where a [`MoveTo`] heads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveStrategy {
    /// Nearest living unit of the team, regardless of range.
    ClosestUnit(Team),
    Landmark(Landmark),
    SkillTarget,
}

/// Issues one movement command toward a resolved target.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveTo {
    strategy: MoveStrategy,
}

impl MoveTo {
    pub fn new(strategy: MoveStrategy) -> Self {
        Self { strategy }
    }

    pub fn closest_unit(team: Team) -> Self {
        Self::new(MoveStrategy::ClosestUnit(team))
    }

    pub fn finish_area() -> Self {
        Self::new(MoveStrategy::Landmark(Landmark::FinishArea))
    }

    pub fn skill_target() -> Self {
        Self::new(MoveStrategy::SkillTarget)
    }

    pub fn strategy(&self) -> MoveStrategy {
        self.strategy
    }

    fn run(&mut self, ctx: &mut AiContext<'_>) -> Status {
        let Some(target) = self.resolve(&*ctx.agent, ctx.world) else {
            return Status::Failure;
        };

        ctx.agent.set_target(target);
        ctx.agent.move_to_target();
        Status::Success
    }

    fn resolve(&self, agent: &dyn Agent, world: &dyn WorldContext) -> Option<TargetRef> {
        match self.strategy {
            MoveStrategy::ClosestUnit(team) => {
                let position = agent.position();
                world
                    .living_units(team)
                    .into_iter()
                    .min_by(|a, b| a.distance_to(position).total_cmp(&b.distance_to(position)))
                    .map(|unit| TargetRef::Unit(unit.id))
            }
            MoveStrategy::Landmark(landmark) => world.landmark(landmark).map(TargetRef::point),
            MoveStrategy::SkillTarget => world
                .skill_target_for(agent)
                .map(|unit| TargetRef::Unit(unit.id)),
        }
    }
}

/// Runs directly away from nearby threats for a fixed time.
///
/// Threats are living units of `team` within the agent's fear distance. The
/// flee direction is the normalized sum of ground-plane unit vectors pointing
/// away from each threat; the destination lies one fear distance along it.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveToSafety {
    team: Team,
    duration: f32,
    started_at: Option<f32>,
}

impl MoveToSafety {
    pub fn new(team: Team, duration: f32) -> Self {
        Self {
            team,
            duration,
            started_at: None,
        }
    }

    pub fn started_at(&self) -> Option<f32> {
        self.started_at
    }

    fn run(&mut self, ctx: &mut AiContext<'_>) -> Status {
        let started_at = match self.started_at {
            Some(started_at) => started_at,
            None => {
                let threats = ctx.world.living_units(self.team);
                let Some(destination) = safety_point(&*ctx.agent, &threats) else {
                    return Status::Failure;
                };

                tracing::debug!(unit = %ctx.agent.id(), ?destination, "fleeing");
                ctx.agent.set_target(TargetRef::point(destination));
                self.started_at = Some(ctx.clock.elapsed);
                ctx.clock.elapsed
            }
        };

        if ctx.clock.elapsed - started_at < self.duration {
            ctx.agent.move_to_target();
            Status::Running
        } else {
            self.started_at = None;
            Status::Success
        }
    }
}

/// Drops the current target and does nothing else.
fn do_nothing(ctx: &mut AiContext<'_>) -> Status {
    ctx.agent.clear_target();
    Status::Success
}

fn closest_in_range(agent: &dyn Agent, candidates: Vec<UnitView>) -> Option<UnitView> {
    let position = agent.position();
    let range = agent.parameters().attack_range;

    // `min_by` keeps the first of equal elements.
    candidates
        .into_iter()
        .filter(|unit| unit.distance_to(position) <= range)
        .min_by(|a, b| {
            a.distance_to(position)
                .total_cmp(&b.distance_to(position))
                .then(a.health.cmp(&b.health))
        })
}

/// Flee destination, or `None` when there is nothing to flee from or the point
/// cannot be reached.
pub fn safety_point(agent: &dyn Agent, threats: &[UnitView]) -> Option<Vec3> {
    let position = agent.position();
    let fear_distance = agent.fear_distance();

    let direction = threats
        .iter()
        .filter(|threat| threat.distance_to(position) <= fear_distance)
        .map(|threat| (position - threat.position.with_y(position.y)).normalized())
        .reduce(|sum, away| sum + away)?
        .normalized();

    // Opposing threats cancel out; the agent then holds its ground.
    let destination = position + direction * fear_distance;
    agent.is_reachable(destination).then_some(destination)
}

#[cfg(test)]
mod tests {
    use behavior_tree::Behavior;
    use game_core::Skill;

    use super::*;
    use crate::providers::ai::testing::{Command, FakeAgent, FakeWorld};
    use crate::providers::ai::{Clock, Leaf};

    fn tick(leaf: &mut Leaf, agent: &mut FakeAgent, world: &FakeWorld, elapsed: f32) -> Status {
        let mut ctx = AiContext::new(agent, world, Clock::new(0, elapsed, 0.1));
        leaf.tick(&mut ctx)
    }

    #[test]
    fn attack_prefers_nearest_then_weakest_then_first() {
        let mut world = FakeWorld::new();
        world.add_unit(Team::Enemies, Vec3::ground(0.0, 1.5), 5);
        let healthy = world.add_unit(Team::Enemies, Vec3::ground(1.0, 0.0), 20);
        let weak = world.add_unit(Team::Enemies, Vec3::ground(-1.0, 0.0), 10);
        world.add_unit(Team::Enemies, Vec3::ground(0.0, -1.0), 10);
        let mut agent = FakeAgent::player().with_attack_range(2.0);

        let mut leaf = Leaf::from(Attack::new(Team::Enemies));
        assert_eq!(tick(&mut leaf, &mut agent, &world, 0.0), Status::Success);
        assert_eq!(agent.commands()[0], Command::SetTarget(TargetRef::Unit(weak)));
        assert_ne!(agent.commands()[0], Command::SetTarget(TargetRef::Unit(healthy)));
    }

    #[test]
    fn attack_fails_without_targets_in_range() {
        let mut world = FakeWorld::new();
        world.add_unit(Team::Enemies, Vec3::ground(5.0, 0.0), 5);
        let mut agent = FakeAgent::player().with_attack_range(2.0);

        let mut leaf = Leaf::from(Attack::new(Team::Enemies));
        assert_eq!(tick(&mut leaf, &mut agent, &world, 0.0), Status::Failure);
        assert!(agent.commands().is_empty());
    }

    #[test]
    fn attack_turns_then_strikes_once() {
        let mut world = FakeWorld::new();
        let enemy = world.add_unit(Team::Enemies, Vec3::ground(0.0, 2.0), 5);
        let mut agent = FakeAgent::player()
            .with_attack_range(2.0)
            .with_turns_needed(2);

        let mut leaf = Leaf::from(Attack::new(Team::Enemies));
        assert_eq!(tick(&mut leaf, &mut agent, &world, 0.0), Status::Running);
        assert_eq!(tick(&mut leaf, &mut agent, &world, 0.1), Status::Running);
        assert_eq!(tick(&mut leaf, &mut agent, &world, 0.2), Status::Success);

        assert_eq!(agent.count(&Command::SetTarget(TargetRef::Unit(enemy))), 1);
        assert_eq!(agent.count(&Command::Attack), 1);
        let Leaf::Action(Action::Attack(attack)) = &leaf else {
            panic!("expected attack leaf");
        };
        assert_eq!(attack.latched(), None);
    }

    #[test]
    fn attack_commits_once_facing_even_while_recharging() {
        let mut world = FakeWorld::new();
        world.add_unit(Team::Enemies, Vec3::ground(0.0, 1.0), 5);
        let mut agent = FakeAgent::player().with_attack_ready(false);

        let mut leaf = Leaf::from(Attack::new(Team::Enemies));
        assert_eq!(tick(&mut leaf, &mut agent, &world, 0.0), Status::Success);
        assert_eq!(agent.count(&Command::Attack), 0);

        let Leaf::Action(Action::Attack(attack)) = &leaf else {
            panic!("expected attack leaf");
        };
        assert_eq!(attack.latched(), None);
    }

    #[test]
    fn attack_drops_latch_when_target_lost() {
        let mut world = FakeWorld::new();
        world.add_unit(Team::Enemies, Vec3::ground(0.0, 1.0), 5);
        let mut agent = FakeAgent::player().with_turns_needed(5);

        let mut leaf = Leaf::from(Attack::new(Team::Enemies));
        assert_eq!(tick(&mut leaf, &mut agent, &world, 0.0), Status::Running);
        agent.set_can_attack(false);
        assert_eq!(tick(&mut leaf, &mut agent, &world, 0.1), Status::Failure);
        assert_eq!(agent.count(&Command::Attack), 0);

        let Leaf::Action(Action::Attack(attack)) = &leaf else {
            panic!("expected attack leaf");
        };
        assert_eq!(attack.latched(), None);
    }

    #[test]
    fn use_skill_requires_target_in_range() {
        let mut world = FakeWorld::new();
        let ally = world.add_unit(Team::Player, Vec3::ground(0.0, 5.0), 2);
        world.set_skill_target(ally);
        let mut agent = FakeAgent::player()
            .with_attack_range(3.0)
            .with_skill(Skill::Heal { amount: 5 })
            .with_power_ready(true);

        let mut leaf = Leaf::from(UseSkill::new());
        assert_eq!(tick(&mut leaf, &mut agent, &world, 0.0), Status::Failure);

        let mut agent = agent.with_attack_range(6.0);
        assert_eq!(tick(&mut leaf, &mut agent, &world, 0.0), Status::Success);
        assert_eq!(agent.count(&Command::UseSkill), 1);
    }

    #[test]
    fn use_skill_fails_once_power_is_gone() {
        let mut world = FakeWorld::new();
        let ally = world.add_unit(Team::Player, Vec3::ground(0.0, 1.0), 2);
        world.set_skill_target(ally);
        let mut agent = FakeAgent::player()
            .with_skill(Skill::Heal { amount: 5 })
            .with_power_ready(false);

        let mut leaf = Leaf::from(UseSkill::new());
        assert_eq!(tick(&mut leaf, &mut agent, &world, 0.0), Status::Failure);
        assert_eq!(agent.count(&Command::UseSkill), 0);
    }

    #[test]
    fn move_to_issues_one_command() {
        let mut world = FakeWorld::new();
        world.set_finish_area(Vec3::ground(0.0, 20.0));
        let mut agent = FakeAgent::player();

        let mut leaf = Leaf::from(MoveTo::finish_area());
        assert_eq!(tick(&mut leaf, &mut agent, &world, 0.0), Status::Success);
        assert_eq!(
            agent.commands(),
            &[
                Command::SetTarget(TargetRef::point(Vec3::ground(0.0, 20.0))),
                Command::MoveToTarget,
            ]
        );
    }

    #[test]
    fn move_to_fails_without_destination() {
        let world = FakeWorld::new();
        let mut agent = FakeAgent::player();

        for strategy in [
            MoveStrategy::ClosestUnit(Team::Enemies),
            MoveStrategy::Landmark(Landmark::FinishArea),
            MoveStrategy::SkillTarget,
        ] {
            let mut leaf = Leaf::from(MoveTo::new(strategy));
            assert_eq!(tick(&mut leaf, &mut agent, &world, 0.0), Status::Failure);
        }
        assert!(agent.commands().is_empty());
    }

    #[test]
    fn move_to_closest_unit_ignores_range() {
        let mut world = FakeWorld::new();
        world.add_unit(Team::Enemies, Vec3::ground(0.0, 30.0), 5);
        let near = world.add_unit(Team::Enemies, Vec3::ground(0.0, 20.0), 5);
        let mut agent = FakeAgent::player();

        let mut leaf = Leaf::from(MoveTo::closest_unit(Team::Enemies));
        assert_eq!(tick(&mut leaf, &mut agent, &world, 0.0), Status::Success);
        assert_eq!(agent.commands()[0], Command::SetTarget(TargetRef::Unit(near)));
    }

    #[test]
    fn flee_from_northern_threat_heads_south() {
        let mut world = FakeWorld::new();
        world.add_unit(Team::Enemies, Vec3::new(0.0, 3.0, 2.0), 10);
        let mut agent = FakeAgent::player().with_fear_distance(4.0);

        let mut leaf = Leaf::from(MoveToSafety::new(Team::Enemies, 0.5));
        assert_eq!(tick(&mut leaf, &mut agent, &world, 1.0), Status::Running);

        let Command::SetTarget(TargetRef::Point(point)) = agent.commands()[0] else {
            panic!("expected a point target");
        };
        let destination = game_core::Target::position(&point);
        assert!(destination.distance(Vec3::ground(0.0, -4.0)) < 1e-4);
    }

    #[test]
    fn flee_runs_for_its_duration_then_resets() {
        let mut world = FakeWorld::new();
        world.add_unit(Team::Enemies, Vec3::ground(1.0, 0.0), 10);
        let mut agent = FakeAgent::player();

        let mut leaf = Leaf::from(MoveToSafety::new(Team::Enemies, 0.5));
        assert_eq!(tick(&mut leaf, &mut agent, &world, 2.0), Status::Running);
        assert_eq!(tick(&mut leaf, &mut agent, &world, 2.3), Status::Running);
        assert_eq!(tick(&mut leaf, &mut agent, &world, 2.5), Status::Success);
        assert_eq!(agent.count(&Command::MoveToTarget), 2);

        let Leaf::Action(Action::MoveToSafety(flee)) = &leaf else {
            panic!("expected flee leaf");
        };
        assert_eq!(flee.started_at(), None);
    }

    #[test]
    fn flee_fails_when_unthreatened_or_unreachable() {
        let mut world = FakeWorld::new();
        world.add_unit(Team::Enemies, Vec3::ground(10.0, 0.0), 10);
        let mut agent = FakeAgent::player();
        let mut leaf = Leaf::from(MoveToSafety::new(Team::Enemies, 0.5));
        assert_eq!(tick(&mut leaf, &mut agent, &world, 0.0), Status::Failure);

        let mut world = FakeWorld::new();
        world.add_unit(Team::Enemies, Vec3::ground(1.0, 0.0), 10);
        let mut agent = FakeAgent::player().with_reachable(false);
        assert_eq!(tick(&mut leaf, &mut agent, &world, 0.0), Status::Failure);
    }

    #[test]
    fn flee_between_opposing_threats_holds_position() {
        let mut world = FakeWorld::new();
        world.add_unit(Team::Enemies, Vec3::ground(1.0, 0.0), 10);
        world.add_unit(Team::Enemies, Vec3::ground(-1.0, 0.0), 10);
        let mut agent = FakeAgent::player();

        let mut leaf = Leaf::from(MoveToSafety::new(Team::Enemies, 0.5));
        assert_eq!(tick(&mut leaf, &mut agent, &world, 0.0), Status::Running);
        assert_eq!(agent.commands()[0], Command::SetTarget(TargetRef::point(Vec3::ZERO)));
        assert_eq!(tick(&mut leaf, &mut agent, &world, 0.5), Status::Success);
    }

    #[test]
    fn do_nothing_clears_target() {
        let world = FakeWorld::new();
        let mut agent = FakeAgent::player();
        agent.set_target(TargetRef::point(Vec3::ZERO));

        let mut leaf = Leaf::from(Action::DoNothing);
        assert_eq!(tick(&mut leaf, &mut agent, &world, 0.0), Status::Success);
        assert_eq!(agent.target(), None);
    }
}
