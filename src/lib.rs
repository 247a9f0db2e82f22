//! Bonedigger - simulation core for a 2D dig-and-collect platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, enemies, dig spots, session)
//! - `consts`: Game tuning constants
//!
//! Rendering, audio, and raw input capture live in the host; the crate
//! exposes a single `step()` entry point plus read access to all per-frame
//! state and a drainable event queue.

pub mod sim;

pub use sim::{FrameInput, GameEvent, GameState, Level, SessionPhase, step};

/// Game tuning constants
pub mod consts {
    /// Upper bound on a caller-supplied frame delta (seconds).
    /// Long stalls are clamped to this so fast movers cannot tunnel.
    pub const MAX_DELTA: f32 = 1.0 / 30.0;
    /// Inset for overlap tests; prevents resolution jitter from
    /// exact-edge contact. Exact tests (pickups, hazards) pass 0 instead.
    pub const SKIN: f32 = 0.1;

    /// Viewport dimensions (pixels)
    pub const VIEW_WIDTH: f32 = 960.0;
    pub const VIEW_HEIGHT: f32 = 540.0;

    /// Player body
    pub const PLAYER_WIDTH: f32 = 34.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Horizontal speed cap (px/s)
    pub const PLAYER_MAX_SPEED: f32 = 230.0;
    pub const GROUND_ACCEL: f32 = 2400.0;
    pub const AIR_ACCEL: f32 = 1500.0;
    pub const GROUND_FRICTION: f32 = 2800.0;
    pub const AIR_FRICTION: f32 = 450.0;
    /// Launch speed of a jump (applied as negative vy; y grows downward)
    pub const JUMP_SPEED: f32 = 560.0;
    /// vy multiplier when jump is released mid-ascent (short hop)
    pub const SHORT_HOP_MULTIPLIER: f32 = 0.45;
    pub const GRAVITY: f32 = 1500.0;
    pub const TERMINAL_VELOCITY: f32 = 900.0;
    /// Grace window after walking off a ledge during which a jump still fires
    pub const COYOTE_TIME: f32 = 0.12;
    /// Grace window before landing during which an early press still fires
    pub const JUMP_BUFFER: f32 = 0.12;
    /// Ledge lips up to this height are climbed instead of stopping the player
    pub const STEP_UP_HEIGHT: f32 = 6.0;

    /// Session
    pub const MAX_HEARTS: u8 = 3;
    pub const INVINCIBILITY_TIME: f32 = 1.5;
    /// How long the "gate is locked" hint stays raised after touching the gate
    pub const GATE_HINT_TIME: f32 = 2.0;

    /// Tunable margin on the previous-frame bottom-vs-top stomp test; a
    /// heuristic, not a hard guarantee at very high fall speeds.
    pub const STOMP_TOLERANCE: f32 = 4.0;
    /// Upward bounce after a stomp, as a fraction of JUMP_SPEED
    pub const STOMP_BOUNCE: f32 = 0.55;
    pub const KNOCKBACK_X: f32 = 260.0;
    pub const KNOCKBACK_Y: f32 = 320.0;

    /// Enemies
    pub const MAX_ENEMIES: usize = 4;
    /// Scale-in duration; enemies cannot hurt the player while spawning
    pub const ENEMY_SPAWN_IN_TIME: f32 = 0.5;
    pub const ENEMY_HIT_STUN: f32 = 0.3;
    pub const WAVE_INTERVAL_MIN: f32 = 6.0;
    pub const WAVE_INTERVAL_MAX: f32 = 12.0;
    pub const RESPAWN_DELAY_MIN: f32 = 3.0;
    pub const RESPAWN_DELAY_MAX: f32 = 6.0;
    /// Delay before retrying a respawn that found no valid candidate
    pub const RESPAWN_RETRY_DELAY: f32 = 1.0;
    /// Minimum horizontal distance between a spawn candidate and the player
    pub const SPAWN_PLAYER_CLEARANCE: f32 = 200.0;
    /// Minimum horizontal distance between a spawn candidate and alive enemies
    pub const SPAWN_ENEMY_SPACING: f32 = 96.0;

    /// Dig spots
    pub const DIG_SPOT_WIDTH: f32 = 36.0;
    pub const DIG_SPOT_HEIGHT: f32 = 14.0;
    pub const DIG_SPOT_MIN: u32 = 3;
    pub const DIG_SPOT_MAX: u32 = 6;
    /// Placement attempt budget; generation accepts fewer spots than the
    /// target rather than looping forever
    pub const DIG_PLACEMENT_TRIES: u32 = 48;
    pub const DIG_MIN_START_DIST: f32 = 160.0;
    pub const DIG_MIN_SPAWN_DIST: f32 = 96.0;
    pub const DIG_SPOT_SPACING: f32 = 72.0;
    pub const DIG_BONE_CHANCE: f32 = 0.6;
    /// Seconds the player is locked in the digging action
    pub const DIG_DURATION: f32 = 0.8;

    /// Bone pop arc
    pub const BONE_WIDTH: f32 = 20.0;
    pub const BONE_HEIGHT: f32 = 12.0;
    /// Height above the spot the pop apex must rise past
    pub const BONE_POP_HEIGHT: f32 = 46.0;
    /// The settled bone rests this far below the pop apex target
    pub const BONE_SETTLE_DROP: f32 = 10.0;
    /// Gravity used for the whole pop arc (independent of player gravity)
    pub const BONE_GRAVITY: f32 = 900.0;

    /// Dig particles
    pub const MAX_DIG_PARTICLES: usize = 64;
    pub const DIG_BURST_COUNT: usize = 6;
    pub const DIG_PARTICLE_LIFETIME: f32 = 0.5;
    pub const DIG_PARTICLE_GRAVITY: f32 = 600.0;
}
