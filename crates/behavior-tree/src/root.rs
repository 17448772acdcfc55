//! Tree entry point.

use crate::{Behavior, Composite, Status};

/// Single entry point of a behavior tree.
///
/// A root holds exactly one composite; a root without a child cannot be
/// expressed. It forwards every tick and keeps no memory of its own.
#[derive(Debug, Clone)]
pub struct Root<L> {
    child: Composite<L>,
}

impl<L> Root<L> {
    pub fn new(child: Composite<L>) -> Self {
        Self { child }
    }

    pub fn child(&self) -> &Composite<L> {
        &self.child
    }

    /// Child indices from the root composite down to the suspended node.
    ///
    /// Empty when nothing is running.
    pub fn running_path(&self) -> Vec<usize> {
        let mut path = Vec::new();
        self.child.collect_running_path(&mut path);
        path
    }

    /// Returns `true` if some node below the root is mid-execution.
    pub fn is_running(&self) -> bool {
        self.child.running_child().is_some()
    }
}

impl<C, L: Behavior<C>> Behavior<C> for Root<L> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        self.child.tick(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Node;

    struct Countdown(u32);

    impl Behavior<()> for Countdown {
        fn tick(&mut self, _ctx: &mut ()) -> Status {
            if self.0 == 0 {
                return Status::Success;
            }
            self.0 -= 1;
            Status::Running
        }
    }

    #[test]
    fn root_forwards_to_child() {
        let mut root = Root::new(Composite::sequence(vec![Node::Leaf(Countdown(2))]));

        assert_eq!(root.tick(&mut ()), Status::Running);
        assert!(root.is_running());
        assert_eq!(root.running_path(), vec![0]);
        assert_eq!(root.tick(&mut ()), Status::Running);
        assert_eq!(root.tick(&mut ()), Status::Success);
        assert!(!root.is_running());
        assert!(root.running_path().is_empty());
    }
}
