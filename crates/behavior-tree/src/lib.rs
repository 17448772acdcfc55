//! Lightweight behavior tree library for real-time agents.
//!
//! This library provides a minimal, deterministic behavior tree implementation
//! designed to be ticked once per simulation step without ever blocking.
//!
//! - **Resumable**: Nodes may return `Running` and are resumed on the next tick
//! - **Explicit memory**: Composites remember their running child; leaves keep
//!   their own small state records
//! - **Closed node set**: A [`Node`] is a domain leaf or a [`Composite`]
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for everything that can be ticked
//! - [`Status`]: Success, Failure or Running
//! - Composite nodes: selector and sequence ([`CompositeKind`])
//! - [`Root`]: Single entry point wrapping one composite
//!
//! # Ordering
//!
//! A composite always resumes its remembered running child before considering
//! any other child; otherwise siblings are evaluated strictly left to right.

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod root;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Composite, CompositeKind, Node};
pub use root::Root;
pub use status::Status;
