//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for everything that can be ticked: leaves supplied by the
//! embedding crate, the [`Node`](crate::Node) variants built on top of them,
//! and the [`Root`](crate::Root). The trait is generic over a context type
//! `C`, allowing nodes to reach the controlled agent and the world.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
///
/// Nodes take `&mut self` because resumable nodes keep state between ticks:
/// composites remember their running child, actions remember latched targets
/// or timers.
pub trait Behavior<C> {
    /// Evaluate this behavior node against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the per-tick context. Nodes read the
    ///   world through it and issue commands to the agent.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Running` if the behavior must be ticked again next tick
    fn tick(&mut self, ctx: &mut C) -> Status;
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to be used as a leaf type, which is
/// handy in tests and for ad-hoc leaves.
impl<C, B> Behavior<C> for Box<B>
where
    B: Behavior<C> + ?Sized,
{
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
