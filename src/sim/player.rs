//! Player state and per-frame movement
//!
//! Jump forgiveness is the timing-sensitive part: an early press is
//! buffered for a short window, and a late press after walking off a ledge
//! is honored within the coyote window. Both windows are invalidated the
//! moment a jump fires so one press can never produce two jumps.

use glam::Vec2;

use crate::consts::*;
use super::geom::Rect;
use super::input::FrameInput;
use super::physics::{
    Body, accelerate, apply_gravity, probe_grounded, resolve_horizontal, resolve_vertical,
};
use super::state::GameEvent;

/// What the player is currently doing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerAction {
    Normal,
    /// Locked in place excavating `spot` until the timer runs out
    Digging { spot: usize, timer: f32 },
}

#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    /// Facing direction, ±1
    pub facing: f32,
    pub action: PlayerAction,
    /// Bottom edge at the start of this frame; the encounter resolver uses
    /// it to tell a top-down stomp from a side graze
    pub prev_bottom: f32,
    /// Seconds of jump-press buffer remaining
    pub jump_buffer: f32,
    /// Seconds of post-ledge jump grace remaining
    pub coyote: f32,
    /// True from jump launch until landing (or until the short hop fires);
    /// only this ascent is eligible for the short-hop cut
    jump_active: bool,
}

impl Player {
    pub fn new(start: Vec2) -> Self {
        let rect = Rect::new(start.x, start.y, PLAYER_WIDTH, PLAYER_HEIGHT);
        Self {
            body: Body::new(rect),
            facing: 1.0,
            action: PlayerAction::Normal,
            prev_bottom: rect.bottom(),
            jump_buffer: 0.0,
            coyote: 0.0,
            jump_active: false,
        }
    }

    pub fn is_digging(&self) -> bool {
        matches!(self.action, PlayerAction::Digging { .. })
    }

    /// Apply an externally imposed vertical launch (stomp bounce,
    /// knockback). Launches keep their full speed: they are not jumps and
    /// never take the short-hop cut.
    pub fn launch(&mut self, vy: f32) {
        self.body.vel.y = vy;
        self.body.grounded = false;
        self.jump_active = false;
    }
}

/// Advance the player one frame: input windows, jump, gravity, and the
/// axis-separated resolve against level geometry.
pub fn update_player(
    player: &mut Player,
    input: &FrameInput,
    platforms: &[Rect],
    level_width: f32,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    player.prev_bottom = player.body.rect.bottom();

    // Jump buffer: refreshed by a press, otherwise ticking down
    if input.jump_pressed {
        player.jump_buffer = JUMP_BUFFER;
    } else {
        player.jump_buffer = (player.jump_buffer - dt).max(0.0);
    }

    // Coyote window: full while grounded, ticking down in the air
    if player.body.grounded {
        player.coyote = COYOTE_TIME;
        player.jump_active = false;
    } else {
        player.coyote = (player.coyote - dt).max(0.0);
    }

    let digging = player.is_digging();

    // Horizontal control (frozen while digging)
    let dir = if digging { 0.0 } else { input.direction() };
    player.body.vel.x = accelerate(
        player.body.vel.x,
        dir,
        player.body.grounded,
        PLAYER_MAX_SPEED,
        dt,
    );
    if dir != 0.0 {
        player.facing = dir;
    }

    // Jump fires when the buffer coincides with ground contact or coyote
    if !digging && player.jump_buffer > 0.0 && (player.body.grounded || player.coyote > 0.0) {
        player.body.vel.y = -JUMP_SPEED;
        player.body.grounded = false;
        player.jump_buffer = 0.0;
        player.coyote = 0.0;
        player.jump_active = true;
        events.push(GameEvent::Jump);
    }

    // Variable jump height: release while ascending cuts the jump short,
    // at most once per jump. Only jump ascents are eligible; stomp bounces
    // and knockback keep their full launch speed.
    if player.jump_active && !input.jump_held && player.body.vel.y < 0.0 {
        player.body.vel.y *= SHORT_HOP_MULTIPLIER;
        player.jump_active = false;
    }

    apply_gravity(&mut player.body.vel, dt);

    resolve_horizontal(&mut player.body, platforms, dt, STEP_UP_HEIGHT);
    resolve_vertical(&mut player.body, platforms, dt);
    player.body.grounded = probe_grounded(&player.body.rect, platforms);

    // Player always stays within level horizontal bounds
    player.body.rect.x = player
        .body
        .rect
        .x
        .clamp(0.0, level_width - player.body.rect.w);
}
