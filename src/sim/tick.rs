//! Per-frame orchestration
//!
//! One `step()` per display frame. The session phase gates all work;
//! non-playing frames only clear the input's edge flags. Order within a
//! frame: player, spawner, enemies, encounters, dig system, goal/gate,
//! camera.

use crate::consts::*;
use super::dig;
use super::encounter::resolve_encounters;
use super::enemy::update_enemy;
use super::input::FrameInput;
use super::physics::clamp_delta;
use super::player::update_player;
use super::session::SessionPhase;
use super::state::{GameEvent, GameState};

/// Advance the simulation by one frame
pub fn step(state: &mut GameState, input: &mut FrameInput, delta: f32) {
    let dt = clamp_delta(delta);

    if state.session.phase != SessionPhase::Playing {
        input.end_frame();
        return;
    }

    state.session.tick(dt);

    let GameState {
        session,
        player,
        enemies,
        spawner,
        dig,
        camera,
        levels,
        rng,
        events,
    } = state;
    let level = &levels[session.level_index];

    // Dig starts consume the edge-triggered press
    if input.dig_pressed {
        dig::try_start_dig(player, dig);
    }

    update_player(player, input, &level.platforms, level.width, dt, events);
    dig::update_dig(player, dig, dt, events);

    spawner.update(dt, level, &player.body.rect, enemies, rng);
    for enemy in enemies.iter_mut() {
        update_enemy(enemy, &level.platforms, dt);
    }

    resolve_encounters(player, enemies, session, spawner, rng, events);
    if session.hearts == 0 && session.phase == SessionPhase::Playing {
        session.phase = SessionPhase::GameOver;
        log::info!("game over after {:.1}s", session.elapsed);
        events.push(GameEvent::GameOver);
    }

    dig::update_bones(dig, &player.body.rect, session, dt, events);
    dig.particles.update(dt);

    // Goal item pickup unlocks the gate (exact overlap, no skin)
    if !session.has_goal_item && player.body.rect.overlaps(&level.goal_item, 0.0) {
        session.has_goal_item = true;
        log::info!("goal item collected");
        events.push(GameEvent::GoalItemCollected);
        events.push(GameEvent::GateUnlocked);
    }

    // Exit gate: complete with the item, hint without it
    if session.phase == SessionPhase::Playing
        && player.body.rect.overlaps(&level.gate, 0.0)
    {
        if session.has_goal_item {
            session.phase = SessionPhase::LevelComplete;
            let has_next = session.level_index + 1 < levels.len();
            let stats = session.stats(&level.name, has_next);
            log::info!(
                "level '{}' complete: {} bones, {} hearts, {:.1}s",
                level.name,
                stats.bones,
                stats.hearts,
                stats.elapsed_secs
            );
            events.push(GameEvent::LevelComplete(stats));
        } else {
            session.gate_hint = GATE_HINT_TIME;
        }
    }

    camera.update(player.body.rect.center_x(), level.width);

    input.end_frame();
}
