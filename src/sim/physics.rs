//! Movement integration and collision resolution
//!
//! Axis-separated move-and-resolve against static rectangles: integrate one
//! axis, snap out of any platform the move entered, zero that velocity
//! component. The player additionally gets a small step-up allowance so
//! shallow ledge lips do not stop a grounded run.

use glam::Vec2;

use crate::consts::*;
use super::geom::Rect;

/// Clamp a caller-supplied frame delta so long stalls cannot tunnel
#[inline]
pub fn clamp_delta(delta: f32) -> f32 {
    delta.clamp(0.0, MAX_DELTA)
}

/// A moving rectangle shared by the player and enemies
#[derive(Debug, Clone)]
pub struct Body {
    pub rect: Rect,
    pub vel: Vec2,
    pub grounded: bool,
}

impl Body {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            vel: Vec2::ZERO,
            grounded: false,
        }
    }
}

/// Horizontal acceleration toward `dir`, or friction toward rest
pub fn accelerate(vx: f32, dir: f32, grounded: bool, max_speed: f32, dt: f32) -> f32 {
    if dir != 0.0 {
        let accel = if grounded { GROUND_ACCEL } else { AIR_ACCEL };
        (vx + dir * accel * dt).clamp(-max_speed, max_speed)
    } else {
        let friction = if grounded { GROUND_FRICTION } else { AIR_FRICTION };
        let drop = friction * dt;
        if vx.abs() <= drop { 0.0 } else { vx - vx.signum() * drop }
    }
}

/// Integrate gravity, clamped to terminal velocity
#[inline]
pub fn apply_gravity(vel: &mut Vec2, dt: f32) {
    vel.y = (vel.y + GRAVITY * dt).min(TERMINAL_VELOCITY);
}

/// Integrate `vx * dt` and resolve against platforms.
///
/// A grounded body moving into a wall first probes the same rectangle
/// raised by `step_up`; if the probe is clear the body climbs instead of
/// stopping. Pass `step_up = 0.0` to disable (enemies).
///
/// Returns whether a wall stopped the body.
pub fn resolve_horizontal(body: &mut Body, platforms: &[Rect], dt: f32, step_up: f32) -> bool {
    body.rect.x += body.vel.x * dt;
    let mut hit_wall = false;
    for platform in platforms {
        if !body.rect.overlaps(platform, SKIN) {
            continue;
        }
        if step_up > 0.0 && body.grounded {
            let probe = Rect {
                y: body.rect.y - step_up,
                ..body.rect
            };
            if !platforms.iter().any(|p| probe.overlaps(p, SKIN)) {
                body.rect.y -= step_up;
                continue;
            }
        }
        if body.vel.x > 0.0 {
            body.rect.x = platform.x - body.rect.w + SKIN;
        } else if body.vel.x < 0.0 {
            body.rect.x = platform.right() - SKIN;
        }
        body.vel.x = 0.0;
        hit_wall = true;
    }
    hit_wall
}

/// Integrate `vy * dt` and resolve against platforms.
///
/// Landing on a top edge sets `grounded`. Returns whether anything was hit.
pub fn resolve_vertical(body: &mut Body, platforms: &[Rect], dt: f32) -> bool {
    body.rect.y += body.vel.y * dt;
    let mut hit = false;
    for platform in platforms {
        if !body.rect.overlaps(platform, SKIN) {
            continue;
        }
        if body.vel.y > 0.0 {
            body.rect.y = platform.y - body.rect.h + SKIN;
            body.grounded = true;
        } else if body.vel.y < 0.0 {
            body.rect.y = platform.bottom() - SKIN;
        }
        body.vel.y = 0.0;
        hit = true;
    }
    hit
}

/// Probe one unit below the rectangle for ground contact
pub fn probe_grounded(rect: &Rect, platforms: &[Rect]) -> bool {
    let probe = Rect {
        y: rect.y + 1.0,
        ..*rect
    };
    platforms.iter().any(|p| probe.overlaps(p, SKIN))
}
