//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose
//! `Node::Composite(Composite::sequence(vec![...]))`, you can use shorter
//! functions like `sequence(vec![...])`.

use crate::{Composite, Node, Root};

/// Creates a sequence node.
///
/// Shorthand for `Node::Composite(Composite::sequence(children))`.
#[inline]
pub fn sequence<L>(children: Vec<Node<L>>) -> Node<L> {
    Node::Composite(Composite::sequence(children))
}

/// Creates a selector node.
///
/// Shorthand for `Node::Composite(Composite::selector(children))`.
#[inline]
pub fn selector<L>(children: Vec<Node<L>>) -> Node<L> {
    Node::Composite(Composite::selector(children))
}

/// Wraps a domain leaf into a node.
#[inline]
pub fn leaf<L>(leaf: impl Into<L>) -> Node<L> {
    Node::Leaf(leaf.into())
}

/// Creates a root over a top-level selector.
#[inline]
pub fn root_selector<L>(children: Vec<Node<L>>) -> Root<L> {
    Root::new(Composite::selector(children))
}

/// Creates a root over a top-level sequence.
#[inline]
pub fn root_sequence<L>(children: Vec<Node<L>>) -> Root<L> {
    Root::new(Composite::sequence(children))
}
