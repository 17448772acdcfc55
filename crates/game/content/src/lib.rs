//! Data-driven content definitions and loaders.
//!
//! This crate houses static skirmish content and provides loaders for RON/TOML
//! data files:
//! - Unit archetypes (data-driven via RON)
//! - Enemy waves (data-driven via RON)
//! - Arena layout (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! All loaders use game-core types directly with serde for RON/TOML
//! deserialization.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::UnitCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{ArenaLoader, ConfigLoader, Content, ContentFactory, UnitLoader, WaveLoader};
