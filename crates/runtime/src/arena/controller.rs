//! What drives a unit each step.

use behavior_tree::Status;

use crate::providers::ai::{Agent, BehaviorTree, Clock, WorldContext};

/// Per-unit controller. Replacing it discards the old tree and any running
/// state inside it.
#[derive(Clone, Debug)]
pub enum Controller {
    Tree(BehaviorTree),
    /// End-of-round controller: stand still.
    Celebrate,
}

impl Controller {
    pub fn run(&mut self, agent: &mut dyn Agent, world: &dyn WorldContext, clock: Clock) -> Status {
        match self {
            Controller::Tree(tree) => tree.run(agent, world, clock),
            Controller::Celebrate => {
                agent.clear_target();
                Status::Success
            }
        }
    }

    pub fn tree(&self) -> Option<&BehaviorTree> {
        match self {
            Controller::Tree(tree) => Some(tree),
            Controller::Celebrate => None,
        }
    }

    pub fn is_celebrating(&self) -> bool {
        matches!(self, Controller::Celebrate)
    }
}
