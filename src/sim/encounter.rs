//! Player-enemy encounter resolution
//!
//! An overlap is either a stomp or a hazard hit, never both. The stomp
//! test wants a clean top-down pass-through this frame: falling, bottom
//! edge above the enemy's top last frame (within tolerance), at or past it
//! now. Only the first overlapping enemy is resolved per frame so a single
//! overlap cannot be double-processed.

use rand_pcg::Pcg32;

use crate::consts::*;
use super::enemy::{Enemy, StompOutcome};
use super::player::Player;
use super::session::Session;
use super::spawner::Spawner;
use super::state::GameEvent;

/// Resolve at most one player-enemy overlap, then drop dead enemies.
pub fn resolve_encounters(
    player: &mut Player,
    enemies: &mut Vec<Enemy>,
    session: &mut Session,
    spawner: &mut Spawner,
    rng: &mut Pcg32,
    events: &mut Vec<GameEvent>,
) {
    for enemy in enemies.iter_mut() {
        if !enemy.can_damage_player() {
            continue;
        }
        if !player.body.rect.overlaps(&enemy.body.rect, 0.0) {
            continue;
        }

        let enemy_top = enemy.body.rect.top();
        let falling = player.body.vel.y > 0.0;
        let was_above = player.prev_bottom <= enemy_top + STOMP_TOLERANCE;
        let now_past = player.body.rect.bottom() >= enemy_top;

        if falling && was_above && now_past {
            let outcome = enemy.apply_stomp();
            player.launch(-JUMP_SPEED * STOMP_BOUNCE);
            let killed = outcome == StompOutcome::Killed;
            log::debug!(
                "stomp on {:?}: {}",
                enemy.kind,
                if killed { "killed" } else { "damaged" }
            );
            events.push(GameEvent::Stomp {
                kind: enemy.kind,
                killed,
            });
            if killed {
                spawner.queue_respawn(rng);
            }
        } else if !session.is_invincible() {
            let hearts_left = session.take_damage();
            // Knocked back away from the enemy's center
            let dir = if player.body.rect.center_x() < enemy.body.rect.center_x() {
                -1.0
            } else {
                1.0
            };
            player.body.vel.x = dir * KNOCKBACK_X;
            player.launch(-KNOCKBACK_Y);
            log::debug!("hazard hit, {hearts_left} hearts left");
            events.push(GameEvent::PlayerHit { hearts_left });
        }

        // First match wins
        break;
    }

    enemies.retain(|e| e.alive);
}
