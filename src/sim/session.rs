//! Session lifecycle: hearts, progress, win/lose
//!
//! Phase transitions are monotonic until an explicit level load; loading a
//! level is the only way out of the terminal phases.

use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Active gameplay
    Playing,
    /// Hearts ran out
    GameOver,
    /// Gate reached while holding the goal item
    LevelComplete,
    /// Completed the last level; terminal
    DemoComplete,
}

/// Stats payload handed to the host at level completion
#[derive(Debug, Clone, PartialEq)]
pub struct LevelStats {
    pub bones: u32,
    pub hearts: u8,
    pub elapsed_secs: f32,
    pub level_name: String,
    pub has_next_level: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub hearts: u8,
    pub bones: u32,
    pub elapsed: f32,
    pub level_index: usize,
    pub phase: SessionPhase,
    /// Post-hit damage immunity remaining (seconds)
    pub invincibility: f32,
    /// Whether the player currently holds the level's goal item
    pub has_goal_item: bool,
    /// Transient "gate is locked" hint, seconds remaining
    pub gate_hint: f32,
}

impl Session {
    pub fn new(level_index: usize) -> Self {
        Self {
            hearts: MAX_HEARTS,
            bones: 0,
            elapsed: 0.0,
            level_index,
            phase: SessionPhase::Playing,
            invincibility: 0.0,
            has_goal_item: false,
            gate_hint: 0.0,
        }
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility > 0.0
    }

    /// Decrement one heart (never below zero); returns hearts remaining
    pub fn take_damage(&mut self) -> u8 {
        self.hearts = self.hearts.saturating_sub(1);
        self.invincibility = INVINCIBILITY_TIME;
        self.hearts
    }

    /// Advance per-frame session timers
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
        self.invincibility = (self.invincibility - dt).max(0.0);
        self.gate_hint = (self.gate_hint - dt).max(0.0);
    }

    pub fn stats(&self, level_name: &str, has_next_level: bool) -> LevelStats {
        LevelStats {
            bones: self.bones,
            hearts: self.hearts,
            elapsed_secs: self.elapsed,
            level_name: level_name.to_owned(),
            has_next_level,
        }
    }
}
