//! Enemy kinds and the patrol state machine
//!
//! Each kind is a tagged variant with a pure kind-to-stats mapping; there
//! is no per-kind behavior type, just data. An enemy scales in, patrols at
//! a constant signed speed, reverses at ledges and walls, and takes stomps
//! through a short hit-stun. The armored kind soaks one extra stomp and
//! reports a cracked visual state at its last hit point.

use crate::consts::*;
use super::geom::Rect;
use super::physics::{
    Body, apply_gravity, probe_grounded, resolve_horizontal, resolve_vertical,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Light,
    Fast,
    Armored,
}

/// Per-kind tuning
#[derive(Debug, Clone, Copy)]
pub struct EnemyStats {
    pub speed: f32,
    pub hit_points: u8,
    pub width: f32,
    pub height: f32,
}

impl EnemyKind {
    pub const fn stats(self) -> EnemyStats {
        match self {
            EnemyKind::Light => EnemyStats {
                speed: 45.0,
                hit_points: 1,
                width: 30.0,
                height: 26.0,
            },
            EnemyKind::Fast => EnemyStats {
                speed: 95.0,
                hit_points: 1,
                width: 26.0,
                height: 22.0,
            },
            EnemyKind::Armored => EnemyStats {
                speed: 28.0,
                hit_points: 2,
                width: 38.0,
                height: 32.0,
            },
        }
    }

    /// Relative weight for random kind draws; lighter kinds are commoner
    pub const fn spawn_weight(self) -> u32 {
        match self {
            EnemyKind::Light => 4,
            EnemyKind::Fast => 3,
            EnemyKind::Armored => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyPhase {
    /// Brief scale-in; cannot damage the player yet
    Spawning { timer: f32 },
    Patrolling,
    /// Post-stomp stun; cannot act or damage the player
    Stunned { timer: f32 },
}

/// Result of a stomp landing on an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StompOutcome {
    Damaged,
    Killed,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub body: Body,
    pub facing: f32,
    pub hit_points: u8,
    pub phase: EnemyPhase,
    pub alive: bool,
}

impl Enemy {
    /// Spawn with the bottom edge on `ground_y`, centered on `x`
    pub fn spawn(kind: EnemyKind, x: f32, ground_y: f32) -> Self {
        let stats = kind.stats();
        let rect = Rect::new(
            x - stats.width / 2.0,
            ground_y - stats.height,
            stats.width,
            stats.height,
        );
        Self {
            kind,
            body: Body::new(rect),
            facing: -1.0,
            hit_points: stats.hit_points,
            phase: EnemyPhase::Spawning {
                timer: ENEMY_SPAWN_IN_TIME,
            },
            alive: true,
        }
    }

    /// False while spawning in or hit-stunned
    pub fn can_damage_player(&self) -> bool {
        self.alive && matches!(self.phase, EnemyPhase::Patrolling)
    }

    /// Armored variant reduced to its last hit point
    pub fn cracked(&self) -> bool {
        self.kind == EnemyKind::Armored && self.alive && self.hit_points == 1
    }

    /// Apply one stomp: decrement hit points and either stun or kill
    pub fn apply_stomp(&mut self) -> StompOutcome {
        self.hit_points = self.hit_points.saturating_sub(1);
        if self.hit_points == 0 {
            self.alive = false;
            StompOutcome::Killed
        } else {
            self.phase = EnemyPhase::Stunned {
                timer: ENEMY_HIT_STUN,
            };
            StompOutcome::Damaged
        }
    }
}

/// Advance one enemy one frame
pub fn update_enemy(enemy: &mut Enemy, platforms: &[Rect], dt: f32) {
    match enemy.phase {
        EnemyPhase::Spawning { timer } => {
            let timer = timer - dt;
            enemy.phase = if timer <= 0.0 {
                EnemyPhase::Patrolling
            } else {
                EnemyPhase::Spawning { timer }
            };
            // Settle onto the ground while scaling in
            settle(enemy, platforms, dt);
        }
        EnemyPhase::Stunned { timer } => {
            let timer = timer - dt;
            enemy.phase = if timer <= 0.0 {
                EnemyPhase::Patrolling
            } else {
                EnemyPhase::Stunned { timer }
            };
            settle(enemy, platforms, dt);
        }
        EnemyPhase::Patrolling => {
            let stats = enemy.kind.stats();
            enemy.body.vel.x = enemy.facing * stats.speed;

            // No step-up allowance for enemies
            let hit_wall = resolve_horizontal(&mut enemy.body, platforms, dt, 0.0);

            apply_gravity(&mut enemy.body.vel, dt);
            resolve_vertical(&mut enemy.body, platforms, dt);
            enemy.body.grounded = probe_grounded(&enemy.body.rect, platforms);

            if hit_wall {
                enemy.facing = -enemy.facing;
            } else if enemy.body.grounded && !ground_ahead(enemy, platforms) {
                enemy.facing = -enemy.facing;
            }
        }
    }
}

/// Gravity and vertical resolve only; used while spawn/stun freezes patrol
fn settle(enemy: &mut Enemy, platforms: &[Rect], dt: f32) {
    enemy.body.vel.x = 0.0;
    apply_gravity(&mut enemy.body.vel, dt);
    resolve_vertical(&mut enemy.body, platforms, dt);
    enemy.body.grounded = probe_grounded(&enemy.body.rect, platforms);
}

/// Forward-and-down probe at the leading edge; false at a ledge
fn ground_ahead(enemy: &Enemy, platforms: &[Rect]) -> bool {
    let rect = &enemy.body.rect;
    let probe_x = if enemy.facing > 0.0 {
        rect.right() + 2.0
    } else {
        rect.left() - 2.0
    };
    let probe = Rect::new(probe_x - 1.0, rect.bottom() + 1.0, 2.0, 6.0);
    platforms.iter().any(|p| probe.overlaps(p, 0.0))
}
