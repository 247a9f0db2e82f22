//! Bonedigger headless demo runner
//!
//! Steps the simulation with a scripted input pattern at a fixed timestep
//! and logs drained events. Useful for smoke-testing the core without a
//! renderer; run with RUST_LOG=debug for spawn/placement detail.

use bonedigger::sim::{FrameInput, GameEvent, GameState, SessionPhase, builtin_levels, step};

const DT: f32 = 1.0 / 60.0;
const MAX_FRAMES: u32 = 60 * 120; // two minutes of simulated time

fn main() {
    env_logger::init();

    let mut state = GameState::new(builtin_levels(), 0xD1_66E5);
    let mut input = FrameInput::default();

    for frame in 0..MAX_FRAMES {
        // Scripted run: head right, hop periodically, try a dig now and then
        input.right = true;
        if frame % 90 == 0 {
            input.jump_pressed = true;
            input.jump_held = true;
        }
        if frame % 90 == 40 {
            input.jump_held = false;
        }
        if frame % 240 == 120 {
            input.dig_pressed = true;
        }

        step(&mut state, &mut input, DT);

        for event in state.drain_events() {
            match &event {
                GameEvent::LevelComplete(stats) => {
                    log::info!(
                        "completed '{}' with {} bones in {:.1}s",
                        stats.level_name,
                        stats.bones,
                        stats.elapsed_secs
                    );
                    state.advance_level();
                }
                GameEvent::DemoComplete(stats) => {
                    log::info!("demo finished on '{}'", stats.level_name);
                }
                GameEvent::GameOver => {
                    log::info!("out of hearts, restarting");
                    state.restart_level();
                }
                other => log::debug!("event: {other:?}"),
            }
        }

        if state.session.phase == SessionPhase::DemoComplete {
            break;
        }
    }

    log::info!(
        "stopped in phase {:?} at {:.1}s",
        state.session.phase,
        state.session.elapsed
    );
}
