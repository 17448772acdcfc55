//! Per-unit behavior tree handle.

use behavior_tree::{Behavior, Root, Status};
use game_core::{BehaviorKind, GameConfig};

use super::nodes::Leaf;
use super::{Agent, AiContext, Clock, WorldContext, presets};

/// A tree owned by exactly one agent, tagged with its archetype.
///
/// Running memory lives inside the tree, so two agents must never share one.
#[derive(Clone, Debug)]
pub struct BehaviorTree {
    kind: BehaviorKind,
    root: Root<Leaf>,
}

impl BehaviorTree {
    pub fn new(kind: BehaviorKind, root: Root<Leaf>) -> Self {
        Self { kind, root }
    }

    /// Fresh tree for an archetype.
    pub fn for_kind(kind: BehaviorKind, config: &GameConfig) -> Self {
        Self::new(kind, presets::build(kind, config))
    }

    pub fn kind(&self) -> BehaviorKind {
        self.kind
    }

    pub fn root(&self) -> &Root<Leaf> {
        &self.root
    }

    /// Evaluates the tree once for this tick.
    pub fn run(&mut self, agent: &mut dyn Agent, world: &dyn WorldContext, clock: Clock) -> Status {
        let id = agent.id();
        let mut ctx = AiContext::new(agent, world, clock);
        let status = self.root.tick(&mut ctx);

        tracing::trace!(
            unit = %id,
            kind = %self.kind,
            ?status,
            path = ?self.root.running_path(),
            "tree ticked"
        );
        status
    }
}
