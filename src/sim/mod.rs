//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `step()` per display frame, delta clamped
//! - Seeded RNG only (level seed for placement, session seed for gameplay)
//! - Stable iteration order over entity vectors
//! - No rendering or platform dependencies

pub mod camera;
pub mod dig;
pub mod encounter;
pub mod enemy;
pub mod geom;
pub mod input;
pub mod level;
pub mod physics;
pub mod player;
pub mod rng;
pub mod session;
pub mod spawner;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use dig::{Bone, BoneState, DigField, DigParticle, DigSpot, ParticlePool, generate_dig_spots};
pub use encounter::resolve_encounters;
pub use enemy::{Enemy, EnemyKind, EnemyPhase, StompOutcome, update_enemy};
pub use geom::Rect;
pub use input::FrameInput;
pub use level::{Level, LevelError, SpawnPoint, builtin_levels};
pub use physics::{Body, clamp_delta, probe_grounded, resolve_horizontal, resolve_vertical};
pub use player::{Player, PlayerAction, update_player};
pub use rng::{SeededSequence, fold_seed};
pub use session::{LevelStats, Session, SessionPhase};
pub use spawner::Spawner;
pub use state::{GameEvent, GameState};
pub use tick::step;
