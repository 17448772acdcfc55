//! Domain types and combat rules for the skirmish arena.
//!
//! `game-core` owns the pure parts of the game: units and their parameters,
//! skills, targets, arena layout and tunable configuration. It performs no
//! I/O and knows nothing about behavior trees; the runtime builds decisions on
//! top of these types.
pub mod config;
pub mod error;
pub mod layout;
pub mod math;
pub mod skill;
pub mod target;
pub mod types;
pub mod unit;
pub mod wave;

pub use config::GameConfig;
pub use error::{ConfigError, ErrorSeverity, GameError, UnitError};
pub use layout::{ArenaLayout, Bounds, Circle, Spawn};
pub use math::{Vec3, angle_delta};
pub use skill::Skill;
pub use target::{PointTarget, Target, TargetRef};
pub use types::{BehaviorKind, Landmark, Team, UnitId};
pub use unit::{Unit, UnitData, UnitParameters, UnitView};
pub use wave::{EnemyWave, EnemyWaves};
