//! Enemy spawner: timed waves and killed-enemy respawns
//!
//! Candidate spawn points are visited in random order; a candidate must be
//! clear of the player, clear of other enemies, free of platform overlap,
//! and have ground directly beneath it. Attempts that find no valid
//! candidate fail silently; respawn attempts come back after a short fixed
//! delay instead of being dropped.

use rand::Rng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;

use crate::consts::*;
use super::enemy::{Enemy, EnemyKind};
use super::geom::Rect;
use super::level::Level;
use super::physics::probe_grounded;

#[derive(Debug, Clone)]
pub struct Spawner {
    /// Countdown to the next wave spawn
    wave_timer: f32,
    /// Pending respawn countdowns, one per killed enemy
    respawns: Vec<f32>,
}

impl Spawner {
    pub fn new(rng: &mut Pcg32) -> Self {
        Self {
            wave_timer: rng.random_range(WAVE_INTERVAL_MIN..WAVE_INTERVAL_MAX),
            respawns: Vec::new(),
        }
    }

    /// Queue a randomized respawn delay for a killed enemy
    pub fn queue_respawn(&mut self, rng: &mut Pcg32) {
        let delay = rng.random_range(RESPAWN_DELAY_MIN..RESPAWN_DELAY_MAX);
        log::debug!("respawn queued in {delay:.1}s");
        self.respawns.push(delay);
    }

    pub fn pending_respawns(&self) -> usize {
        self.respawns.len()
    }

    /// Advance wave and respawn timers, spawning where they elapse
    pub fn update(
        &mut self,
        dt: f32,
        level: &Level,
        player_rect: &Rect,
        enemies: &mut Vec<Enemy>,
        rng: &mut Pcg32,
    ) {
        self.wave_timer -= dt;
        if self.wave_timer <= 0.0 {
            self.wave_timer = rng.random_range(WAVE_INTERVAL_MIN..WAVE_INTERVAL_MAX);
            if enemies.len() < MAX_ENEMIES {
                // Silent failure is fine for waves; the timer comes around
                try_spawn(level, player_rect, enemies, rng);
            }
        }

        let mut index = 0;
        while index < self.respawns.len() {
            self.respawns[index] -= dt;
            if self.respawns[index] > 0.0 {
                index += 1;
                continue;
            }
            if enemies.len() < MAX_ENEMIES && try_spawn(level, player_rect, enemies, rng) {
                self.respawns.swap_remove(index);
            } else {
                // No valid candidate right now; retry shortly
                self.respawns[index] = RESPAWN_RETRY_DELAY;
                index += 1;
            }
        }
    }
}

/// Weighted draw over enemy kinds
fn draw_kind(rng: &mut Pcg32) -> EnemyKind {
    const KINDS: [EnemyKind; 3] = [EnemyKind::Light, EnemyKind::Fast, EnemyKind::Armored];
    let total: u32 = KINDS.iter().map(|k| k.spawn_weight()).sum();
    let mut roll = rng.random_range(0..total);
    for kind in KINDS {
        let weight = kind.spawn_weight();
        if roll < weight {
            return kind;
        }
        roll -= weight;
    }
    EnemyKind::Light
}

/// Visit candidates in shuffled order; place the first that satisfies all
/// constraints. Returns whether an enemy was placed.
fn try_spawn(
    level: &Level,
    player_rect: &Rect,
    enemies: &mut Vec<Enemy>,
    rng: &mut Pcg32,
) -> bool {
    let kind = draw_kind(rng);
    let mut order: Vec<usize> = (0..level.spawn_points.len()).collect();
    order.shuffle(rng);

    for index in order {
        let point = level.spawn_points[index];

        if (point.x - player_rect.center_x()).abs() < SPAWN_PLAYER_CLEARANCE {
            continue;
        }
        if enemies
            .iter()
            .any(|e| (e.body.rect.center_x() - point.x).abs() < SPAWN_ENEMY_SPACING)
        {
            continue;
        }

        let candidate = Enemy::spawn(kind, point.x, point.ground_y);
        if level
            .platforms
            .iter()
            .any(|p| candidate.body.rect.overlaps(p, 0.0))
        {
            continue;
        }
        if !probe_grounded(&candidate.body.rect, &level.platforms) {
            continue;
        }

        log::debug!("spawned {kind:?} at x={}", point.x);
        enemies.push(candidate);
        return true;
    }

    false
}
