//! End-to-end scenario tests over the public simulation API

use glam::Vec2;

use bonedigger::consts::*;
use bonedigger::sim::{
    BoneState, Enemy, EnemyKind, EnemyPhase, FrameInput, GameEvent, GameState, Player, Rect,
    SessionPhase, Spawner, builtin_levels, resolve_encounters, step, update_enemy, update_player,
};
use rand::SeedableRng;
use rand_pcg::Pcg32;

const DT: f32 = 0.01;

fn flat_platforms() -> Vec<Rect> {
    vec![Rect::new(0.0, 500.0, 2000.0, 40.0)]
}

/// Settle a player onto the ground so its grounded flag and coyote window
/// are populated
fn settled_player() -> (Player, Vec<Rect>) {
    let platforms = flat_platforms();
    let mut player = Player::new(Vec2::new(100.0, 460.0));
    let mut events = Vec::new();
    let input = FrameInput::default();
    for _ in 0..3 {
        update_player(&mut player, &input, &platforms, 2000.0, DT, &mut events);
    }
    assert!(player.body.grounded);
    (player, platforms)
}

fn send_airborne(player: &mut Player) {
    player.body.rect.y -= 120.0;
    player.body.grounded = false;
    player.body.vel.y = 0.0;
}

#[test]
fn coyote_jump_within_window() {
    let (mut player, platforms) = settled_player();
    send_airborne(&mut player);

    let mut events = Vec::new();
    let neutral = FrameInput::default();
    // 100 ms after leaving the ground
    for _ in 0..10 {
        update_player(&mut player, &neutral, &platforms, 2000.0, DT, &mut events);
    }
    assert!(player.body.vel.y > 0.0);

    let press = FrameInput {
        jump_pressed: true,
        jump_held: true,
        ..FrameInput::default()
    };
    update_player(&mut player, &press, &platforms, 2000.0, DT, &mut events);
    assert!(events.contains(&GameEvent::Jump));
    assert!(player.body.vel.y < 0.0);
}

#[test]
fn coyote_jump_expired_at_150ms() {
    let (mut player, platforms) = settled_player();
    send_airborne(&mut player);

    let mut events = Vec::new();
    let neutral = FrameInput::default();
    // 150 ms after leaving the ground
    for _ in 0..15 {
        update_player(&mut player, &neutral, &platforms, 2000.0, DT, &mut events);
    }

    let press = FrameInput {
        jump_pressed: true,
        jump_held: true,
        ..FrameInput::default()
    };
    update_player(&mut player, &press, &platforms, 2000.0, DT, &mut events);
    assert!(!events.contains(&GameEvent::Jump));
    assert!(player.body.vel.y > 0.0);
}

#[test]
fn armored_enemy_takes_two_stomps() {
    let platforms = vec![Rect::new(400.0, 300.0, 400.0, 40.0)];
    let mut enemy = Enemy::spawn(EnemyKind::Armored, 600.0, 300.0);
    enemy.phase = EnemyPhase::Patrolling;
    let mut enemies = vec![enemy];
    let mut session = bonedigger::sim::Session::new(0);
    let mut rng = Pcg32::seed_from_u64(9);
    let mut spawner = Spawner::new(&mut rng);
    let mut events = Vec::new();

    let mut player = Player::new(Vec2::new(580.0, 200.0));
    let place_stomp = |player: &mut Player, enemies: &[Enemy]| {
        let top = enemies[0].body.rect.top();
        player.body.rect.x = enemies[0].body.rect.x;
        player.body.rect.y = top - player.body.rect.h + 2.0;
        player.prev_bottom = top - 6.0;
        player.body.vel.y = 300.0;
    };

    // First stomp: damaged, cracked, stunned
    place_stomp(&mut player, &enemies);
    resolve_encounters(
        &mut player, &mut enemies, &mut session, &mut spawner, &mut rng, &mut events,
    );
    assert_eq!(enemies.len(), 1);
    assert!(enemies[0].cracked());
    assert!(matches!(enemies[0].phase, EnemyPhase::Stunned { .. }));
    assert!(matches!(
        events.as_slice(),
        [GameEvent::Stomp { killed: false, .. }]
    ));

    // Stun wears off
    for _ in 0..((ENEMY_HIT_STUN / DT) as usize + 2) {
        update_enemy(&mut enemies[0], &platforms, DT);
    }
    assert_eq!(enemies[0].phase, EnemyPhase::Patrolling);

    // Second stomp: killed, respawn queued
    events.clear();
    place_stomp(&mut player, &enemies);
    resolve_encounters(
        &mut player, &mut enemies, &mut session, &mut spawner, &mut rng, &mut events,
    );
    assert!(enemies.is_empty());
    assert!(matches!(
        events.as_slice(),
        [GameEvent::Stomp { killed: true, .. }]
    ));
    assert_eq!(spawner.pending_respawns(), 1);
    assert_eq!(session.hearts, MAX_HEARTS);
}

#[test]
fn zero_hearts_triggers_game_over_once() {
    let mut state = GameState::new(builtin_levels(), 5);
    state.session.hearts = 1;

    // Park a patrolling enemy on top of the player
    let player_rect = state.player.body.rect;
    let mut enemy = Enemy::spawn(EnemyKind::Light, player_rect.center_x(), player_rect.bottom());
    enemy.phase = EnemyPhase::Patrolling;
    state.enemies.push(enemy);

    let mut input = FrameInput::default();
    let mut game_overs = 0;
    for _ in 0..30 {
        step(&mut state, &mut input, DT);
        game_overs += state
            .drain_events()
            .iter()
            .filter(|e| **e == GameEvent::GameOver)
            .count();
    }
    assert_eq!(state.session.hearts, 0);
    assert_eq!(state.session.phase, SessionPhase::GameOver);
    assert_eq!(game_overs, 1);
}

#[test]
fn dig_bone_pop_settle_collect() {
    let mut state = GameState::new(builtin_levels(), 5);
    let spot_index = 0;
    state.dig.spots[spot_index].has_bone = true;
    let spot_rect = state.dig.spots[spot_index].rect;

    // Stand the player on the spot (spot bottom sits on the ground top)
    state.player.body.rect.x = spot_rect.x;
    state.player.body.rect.y = spot_rect.bottom() - state.player.body.rect.h;
    let mut input = FrameInput::default();
    for _ in 0..3 {
        step(&mut state, &mut input, DT);
    }
    assert!(state.player.body.grounded);

    input.dig_pressed = true;
    step(&mut state, &mut input, DT);
    assert!(state.player.is_digging());

    // Ride out the dig and the pop arc
    let mut events = Vec::new();
    for _ in 0..300 {
        step(&mut state, &mut input, DT);
        events.extend(state.drain_events());
        if state
            .dig
            .bones
            .first()
            .is_some_and(|b| b.state == BoneState::Idle)
        {
            break;
        }
    }
    assert!(events.contains(&GameEvent::DigComplete { found_bone: true }));
    assert!(state.dig.spots[spot_index].dug);
    let bone = state.dig.bones.first().expect("bone should exist");
    assert_eq!(bone.state, BoneState::Idle);
    // Settled above the spot, below the pop apex target
    assert!(bone.rect.y < spot_rect.y);

    // Collect by overlap
    state.player.body.rect.x = state.dig.bones[0].rect.x;
    state.player.body.rect.y = state.dig.bones[0].rect.y;
    step(&mut state, &mut input, DT);
    let events = state.drain_events();
    assert!(events.contains(&GameEvent::BoneCollected));
    assert!(state.dig.bones.is_empty());
    assert_eq!(state.session.bones, 1);
}

#[test]
fn gate_hints_without_item_then_completes_with_it() {
    let mut state = GameState::new(builtin_levels(), 5);
    let gate = state.level().gate;

    // Touch the gate empty-handed
    state.player.body.rect.x = gate.x;
    state.player.body.rect.y = gate.y + gate.h - state.player.body.rect.h;
    let mut input = FrameInput::default();
    step(&mut state, &mut input, DT);
    assert!(state.session.gate_hint > 0.0);
    assert_eq!(state.session.phase, SessionPhase::Playing);
    assert!(state.drain_events().is_empty());

    // Grab the goal item
    let item = state.level().goal_item;
    state.player.body.rect.x = item.x;
    state.player.body.rect.y = item.y;
    step(&mut state, &mut input, DT);
    let events = state.drain_events();
    assert!(events.contains(&GameEvent::GoalItemCollected));
    assert!(events.contains(&GameEvent::GateUnlocked));
    assert!(state.session.has_goal_item);

    // Return to the gate
    state.player.body.rect.x = gate.x;
    state.player.body.rect.y = gate.y + gate.h - state.player.body.rect.h;
    step(&mut state, &mut input, DT);
    let events = state.drain_events();
    let complete = events.iter().find_map(|e| match e {
        GameEvent::LevelComplete(stats) => Some(stats.clone()),
        _ => None,
    });
    let stats = complete.expect("level complete event");
    assert_eq!(state.session.phase, SessionPhase::LevelComplete);
    assert_eq!(stats.level_name, state.level().name);
    assert!(stats.has_next_level);
    assert_eq!(stats.hearts, MAX_HEARTS);
}

#[test]
fn final_level_ends_in_demo_complete() {
    let mut state = GameState::new(builtin_levels(), 5);
    let last = state.levels.len() - 1;
    state.load_level(last);
    state.session.has_goal_item = true;

    let gate = state.level().gate;
    state.player.body.rect.x = gate.x;
    state.player.body.rect.y = gate.y + gate.h - state.player.body.rect.h;
    let mut input = FrameInput::default();
    step(&mut state, &mut input, DT);
    assert_eq!(state.session.phase, SessionPhase::LevelComplete);
    let events = state.drain_events();
    assert!(matches!(
        events.as_slice(),
        [GameEvent::LevelComplete(stats)] if !stats.has_next_level
    ));

    // Requesting the next level past the last one
    state.advance_level();
    assert_eq!(state.session.phase, SessionPhase::DemoComplete);
    let events = state.drain_events();
    assert!(matches!(events.as_slice(), [GameEvent::DemoComplete(_)]));
}
