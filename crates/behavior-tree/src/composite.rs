//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating
//! decision trees: sequences (AND logic) and selectors (OR logic), both
//! with *running memory*.
//!
//! # Running Memory
//!
//! When a child returns [`Status::Running`], the composite remembers that
//! child. On the next tick the remembered child is re-invoked **first and
//! alone**: earlier siblings are not re-evaluated, and when the child finishes
//! its terminal status is returned as-is, without falling through to later
//! siblings in that same tick. This is what lets multi-tick actions (turning
//! toward a target, a timed retreat) resume exactly where they left off.

use crate::{Behavior, Status};

/// A node of a behavior tree.
///
/// The variant set is closed: a node is either a leaf supplied by the
/// embedding crate (`L`) or one of the two composites defined here.
#[derive(Debug, Clone)]
pub enum Node<L> {
    /// Domain leaf (condition or action).
    Leaf(L),
    /// Selector or sequence over child nodes.
    Composite(Composite<L>),
}

impl<L> Node<L> {
    /// Returns the composite inside this node, if any.
    pub fn as_composite(&self) -> Option<&Composite<L>> {
        match self {
            Node::Leaf(_) => None,
            Node::Composite(composite) => Some(composite),
        }
    }

    /// Appends the chain of remembered child indices below this node.
    fn collect_running_path(&self, path: &mut Vec<usize>) {
        if let Node::Composite(composite) = self {
            composite.collect_running_path(path);
        }
    }
}

impl<C, L: Behavior<C>> Behavior<C> for Node<L> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        match self {
            Node::Leaf(leaf) => leaf.tick(ctx),
            Node::Composite(composite) => composite.tick(ctx),
        }
    }
}

impl<L> From<Composite<L>> for Node<L> {
    fn from(composite: Composite<L>) -> Self {
        Node::Composite(composite)
    }
}

/// Combination rule of a [`Composite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositeKind {
    /// Executes children until one succeeds.
    ///
    /// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
    /// - If a child returns `Failure`, the selector **continues** to the next child
    /// - If all children return `Failure`, the selector returns `Failure`
    ///
    /// This is analogous to a short-circuited logical OR (||) operation.
    Selector,

    /// Executes children until one fails.
    ///
    /// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
    /// - If a child returns `Success`, the sequence **continues** to the next child
    /// - If all children return `Success`, the sequence returns `Success`
    ///
    /// This is analogous to a short-circuited logical AND (&&) operation.
    Sequence,
}

/// An ordered, immutable list of children plus the remembered running child.
///
/// In both kinds, a child returning `Running` becomes the remembered child and
/// halts evaluation for the tick.
#[derive(Debug, Clone)]
pub struct Composite<L> {
    kind: CompositeKind,
    children: Vec<Node<L>>,
    /// Index into `children` of the child that last returned `Running`.
    running: Option<usize>,
}

impl<L> Composite<L> {
    /// Creates a new composite of the given kind.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A composite with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(kind: CompositeKind, children: Vec<Node<L>>) -> Self {
        assert!(
            !children.is_empty(),
            "{kind:?} must have at least one child"
        );
        Self {
            kind,
            children,
            running: None,
        }
    }

    /// Creates a new selector with the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn selector(children: Vec<Node<L>>) -> Self {
        Self::new(CompositeKind::Selector, children)
    }

    /// Creates a new sequence with the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn sequence(children: Vec<Node<L>>) -> Self {
        Self::new(CompositeKind::Sequence, children)
    }

    pub fn kind(&self) -> CompositeKind {
        self.kind
    }

    pub fn children(&self) -> &[Node<L>] {
        &self.children
    }

    /// Index of the remembered running child, if any.
    pub fn running_child(&self) -> Option<usize> {
        self.running
    }

    pub(crate) fn collect_running_path(&self, path: &mut Vec<usize>) {
        if let Some(index) = self.running {
            path.push(index);
            self.children[index].collect_running_path(path);
        }
    }

    fn tick_selector<C>(&mut self, ctx: &mut C) -> Status
    where
        L: Behavior<C>,
    {
        for (index, child) in self.children.iter_mut().enumerate() {
            match child.tick(ctx) {
                Status::Success => return Status::Success, // Short-circuit
                Status::Running => {
                    self.running = Some(index);
                    return Status::Running;
                }
                Status::Failure => continue, // Try next child
            }
        }
        // All children failed
        Status::Failure
    }

    fn tick_sequence<C>(&mut self, ctx: &mut C) -> Status
    where
        L: Behavior<C>,
    {
        for (index, child) in self.children.iter_mut().enumerate() {
            match child.tick(ctx) {
                Status::Success => continue, // Move to next child
                Status::Running => {
                    self.running = Some(index);
                    return Status::Running;
                }
                Status::Failure => return Status::Failure, // Short-circuit
            }
        }
        // All children succeeded
        Status::Success
    }
}

impl<C, L: Behavior<C>> Behavior<C> for Composite<L> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        // An already running child takes priority over everything else.
        if let Some(index) = self.running {
            let status = self.children[index].tick(ctx);
            if status.is_terminal() {
                self.running = None;
            }
            return status;
        }

        match self.kind {
            CompositeKind::Selector => self.tick_selector(ctx),
            CompositeKind::Sequence => self.tick_sequence(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    #[derive(Default)]
    struct TestContext {
        log: Vec<&'static str>,
    }

    /// Leaf that replays a script of outcomes, then repeats `fallback`.
    struct Scripted {
        name: &'static str,
        script: VecDeque<Status>,
        fallback: Status,
    }

    impl Scripted {
        fn node(name: &'static str, script: &[Status], fallback: Status) -> Node<Scripted> {
            Node::Leaf(Self {
                name,
                script: script.iter().copied().collect(),
                fallback,
            })
        }

        fn always(name: &'static str, status: Status) -> Node<Scripted> {
            Self::node(name, &[], status)
        }
    }

    impl Behavior<TestContext> for Scripted {
        fn tick(&mut self, ctx: &mut TestContext) -> Status {
            ctx.log.push(self.name);
            self.script.pop_front().unwrap_or(self.fallback)
        }
    }

    use Status::{Failure, Running, Success};

    #[test]
    fn sequence_all_success() {
        let mut seq = Composite::sequence(vec![
            Scripted::always("a", Success),
            Scripted::always("b", Success),
        ]);

        let mut ctx = TestContext::default();
        assert_eq!(seq.tick(&mut ctx), Success);
        assert_eq!(ctx.log, vec!["a", "b"]);
        assert_eq!(seq.running_child(), None);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Composite::sequence(vec![
            Scripted::always("a", Success),
            Scripted::always("b", Failure),
            Scripted::always("c", Success), // Should not execute
        ]);

        let mut ctx = TestContext::default();
        assert_eq!(seq.tick(&mut ctx), Failure);
        assert_eq!(ctx.log, vec!["a", "b"]);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let mut sel = Composite::selector(vec![
            Scripted::always("a", Failure),
            Scripted::always("b", Success),
            Scripted::always("c", Success), // Should not execute
        ]);

        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx), Success);
        assert_eq!(ctx.log, vec!["a", "b"]);
        assert_eq!(sel.running_child(), None);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let mut sel = Composite::selector(vec![
            Scripted::always("a", Failure),
            Scripted::always("b", Failure),
        ]);

        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx), Failure);
        assert_eq!(sel.running_child(), None);
    }

    #[test]
    fn selector_resumes_running_child_without_reevaluating_earlier_siblings() {
        let mut sel = Composite::selector(vec![
            Scripted::node("guard", &[Failure], Success),
            Scripted::node("walk", &[Running, Running], Success),
            Scripted::always("idle", Success),
        ]);

        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx), Running);
        assert_eq!(sel.running_child(), Some(1));

        // "guard" would now succeed, but the running child comes first.
        assert_eq!(sel.tick(&mut ctx), Running);
        assert_eq!(sel.tick(&mut ctx), Success);
        assert_eq!(sel.running_child(), None);
        assert_eq!(ctx.log, vec!["guard", "walk", "walk", "walk"]);

        // Memory cleared: normal left-to-right evaluation again.
        assert_eq!(sel.tick(&mut ctx), Success);
        assert_eq!(ctx.log.last(), Some(&"guard"));
    }

    #[test]
    fn selector_returns_resumed_failure_without_falling_through() {
        let mut sel = Composite::selector(vec![
            Scripted::node("attack", &[Running], Failure),
            Scripted::always("idle", Success),
        ]);

        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx), Running);
        assert_eq!(sel.tick(&mut ctx), Failure);
        assert_eq!(ctx.log, vec!["attack", "attack"]);
        assert_eq!(sel.running_child(), None);
    }

    #[test]
    fn sequence_resumed_success_is_returned_without_advancing() {
        let mut seq = Composite::sequence(vec![
            Scripted::always("check", Success),
            Scripted::node("flee", &[Running], Success),
            Scripted::always("after", Success),
        ]);

        let mut ctx = TestContext::default();
        assert_eq!(seq.tick(&mut ctx), Running);
        assert_eq!(seq.running_child(), Some(1));
        assert_eq!(seq.tick(&mut ctx), Success);
        assert_eq!(ctx.log, vec!["check", "flee", "flee"]);
    }

    #[test]
    fn nested_running_memory_forms_a_single_path() {
        let inner = Composite::sequence(vec![
            Scripted::always("cond", Success),
            Scripted::node("act", &[Running], Success),
        ]);
        let mut outer = Composite::selector(vec![
            Scripted::always("first", Failure),
            inner.into(),
        ]);

        let mut ctx = TestContext::default();
        assert_eq!(outer.tick(&mut ctx), Running);

        let mut path = Vec::new();
        outer.collect_running_path(&mut path);
        assert_eq!(path, vec![1, 1]);

        assert_eq!(outer.tick(&mut ctx), Success);
        path.clear();
        outer.collect_running_path(&mut path);
        assert!(path.is_empty());
        assert_eq!(ctx.log, vec!["first", "cond", "act", "act"]);
    }

    #[test]
    #[should_panic(expected = "Selector must have at least one child")]
    fn empty_selector_is_rejected() {
        let _ = Composite::<Scripted>::selector(Vec::new());
    }
}
