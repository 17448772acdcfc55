//! Capabilities a behavior tree acts through.
//!
//! Trees never touch simulation state directly. Each tick they receive an
//! [`AiContext`] bundling:
//!
//! - the controlled [`Agent`], the only thing a leaf may mutate
//! - a read-only [`WorldContext`] snapshot, valid for this one tick
//! - the simulation [`Clock`]
//!
//! Any engine that implements the two traits can host the trees; the
//! [`Arena`](crate::arena::Arena) is the reference host.

use game_core::{Landmark, Skill, Team, TargetRef, UnitId, UnitParameters, UnitView, Vec3};

use crate::error::Result;

/// Simulation time as seen by one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Clock {
    /// Number of completed steps before this one.
    pub tick: u64,
    /// Seconds since the round started.
    pub elapsed: f32,
    /// Seconds covered by this step.
    pub dt: f32,
}

impl Clock {
    pub fn new(tick: u64, elapsed: f32, dt: f32) -> Self {
        Self { tick, elapsed, dt }
    }
}

/// Read-only view of the world consulted by conditions and actions.
pub trait WorldContext {
    /// Living units of `team`, in stable enumeration order.
    fn living_units(&self, team: Team) -> Vec<UnitView>;

    /// Position of a named landmark, if the arena has one.
    fn landmark(&self, landmark: Landmark) -> Option<Vec3>;

    /// Unit the agent's skill should be cast on, if any.
    fn skill_target_for(&self, agent: &dyn Agent) -> Option<UnitView>;
}

/// The unit a tree controls.
///
/// Commands take effect on the agent's own unit; movement is carried out by
/// the host after the tick.
pub trait Agent {
    fn id(&self) -> UnitId;

    fn team(&self) -> Team;

    fn position(&self) -> Vec3;

    fn parameters(&self) -> &UnitParameters;

    /// Radius within which threats make this agent flee.
    fn fear_distance(&self) -> f32;

    fn skill(&self) -> Option<Skill>;

    fn is_ready_to_attack(&self) -> bool;

    fn is_ready_to_use_power(&self) -> bool;

    fn target(&self) -> Option<TargetRef>;

    fn set_target(&mut self, target: TargetRef);

    /// Drops the target and stops moving.
    fn clear_target(&mut self);

    /// Sets the navigation destination to the current target's position.
    fn move_to_target(&mut self);

    /// Stops and turns one step toward the target.
    ///
    /// Returns `true` if the agent already faced the target within tolerance
    /// at the start of the call.
    fn look_at_target(&mut self) -> bool;

    /// Target is alive and, for ranged agents, the first thing along the line
    /// of fire.
    fn can_attack_target(&self) -> bool;

    /// Strikes the current target once, rolling for miss and critical hits.
    fn attack_target(&mut self) -> Result<()>;

    /// Casts the skill on the current target and empties the power pool.
    fn use_skill_on_target(&mut self) -> Result<()>;

    /// Whether navigation can reach `point`.
    fn is_reachable(&self, point: Vec3) -> bool;
}

/// Per-tick blackboard handed to every node.
///
/// # Lifetime
///
/// The `'a` lifetime ties the context to the agent and snapshot borrowed for
/// the duration of a single tick.
pub struct AiContext<'a> {
    pub agent: &'a mut dyn Agent,
    pub world: &'a dyn WorldContext,
    pub clock: Clock,
}

impl<'a> AiContext<'a> {
    pub fn new(agent: &'a mut dyn Agent, world: &'a dyn WorldContext, clock: Clock) -> Self {
        Self {
            agent,
            world,
            clock,
        }
    }
}
