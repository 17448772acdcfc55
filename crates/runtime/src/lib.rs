//! Runtime for the skirmish arena.
//!
//! This crate turns game-core units into autonomous agents driven by
//! behavior trees, and hosts them in a reference simulation.
//!
//! Modules are organized by responsibility:
//! - [`providers`] hosts the AI: context capabilities, leaf nodes, archetype
//!   presets and the per-unit [`BehaviorTree`]
//! - [`arena`] implements the capabilities over real units and exposes the
//!   single-step [`Arena`] loop
//! - [`error`] defines the runtime error type
pub mod arena;
pub mod error;
pub mod providers;

pub use arena::{Arena, ArenaEvent, Controller, RoundResult, StepReport};
pub use error::{Result, RuntimeError};
pub use providers::ai::{Agent, AiContext, BehaviorTree, Clock, WorldContext};
