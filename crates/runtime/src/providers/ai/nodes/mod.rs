//! Leaf nodes for AI behavior trees.
//!
//! - [`conditions`]: pure checks that return `Success` or `Failure`
//! - [`actions`]: stateful commands that may stay `Running` across ticks
//!
//! Both are wrapped in the closed [`Leaf`] enum, the leaf type of every
//! runtime tree.

pub mod actions;
pub mod conditions;

pub use actions::{Action, Attack, MoveStrategy, MoveTo, MoveToSafety, UseSkill, safety_point};
pub use conditions::Condition;

use behavior_tree::{Behavior, Status};

use crate::providers::ai::AiContext;

#[derive(Clone, Debug, PartialEq)]
pub enum Leaf {
    Condition(Condition),
    Action(Action),
}

impl<'a> Behavior<AiContext<'a>> for Leaf {
    fn tick(&mut self, ctx: &mut AiContext<'a>) -> Status {
        match self {
            Leaf::Condition(condition) => {
                Status::from_check(condition.check(&*ctx.agent, ctx.world))
            }
            Leaf::Action(action) => action.run(ctx),
        }
    }
}

impl From<Condition> for Leaf {
    fn from(condition: Condition) -> Self {
        Leaf::Condition(condition)
    }
}

impl From<Action> for Leaf {
    fn from(action: Action) -> Self {
        Leaf::Action(action)
    }
}

macro_rules! action_leaf {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Leaf {
                fn from(action: $variant) -> Self {
                    Leaf::Action(Action::$variant(action))
                }
            }
        )*
    };
}

action_leaf!(Attack, UseSkill, MoveTo, MoveToSafety);
