//! Behavior-tree AI for arena units.
//!
//! Decisions are made by per-unit behavior trees:
//!
//! 1. **Context**: [`Agent`] and [`WorldContext`] are the only capabilities a
//!    tree can use; [`AiContext`] bundles them for one tick
//! 2. **Nodes**: [`nodes::Condition`] and [`nodes::Action`] leaves wrapped in
//!    the closed [`nodes::Leaf`] enum
//! 3. **Presets**: complete archetype trees built from a
//!    [`BehaviorKind`](game_core::BehaviorKind)
//! 4. **Tree**: [`BehaviorTree`] owns one root and runs it once per tick

pub mod context;
pub mod nodes;
pub mod presets;
pub mod tree;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{Agent, AiContext, Clock, WorldContext};
pub use nodes::Leaf;
pub use tree::BehaviorTree;
