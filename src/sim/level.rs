//! Immutable level data
//!
//! A level is a pile of rectangles plus a seed string; nothing here mutates
//! after load. Levels can be parsed from JSON (the only fallible path in
//! the crate, surfaced once at load time) or taken from the builtin demo
//! campaign.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;

/// A candidate enemy spawn location: x position on top of ground_y
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: f32,
    pub ground_y: f32,
}

/// Static level definition, immutable for the level's duration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    /// Pixel dimensions of the whole level
    pub width: f32,
    pub height: f32,
    /// All solid geometry, including the ground
    pub platforms: Vec<Rect>,
    /// The main ground platform dig spots rest on
    pub ground: Rect,
    pub spawn_points: Vec<SpawnPoint>,
    /// The level's unique goal item; holding it unlocks the gate
    pub goal_item: Rect,
    /// Exit gate
    pub gate: Rect,
    pub player_start: Vec2,
    /// Seed string for dig-spot and decoration placement
    pub seed: String,
}

/// Level construction failure; fatal, raised once at load
#[derive(Debug)]
pub enum LevelError {
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Parse(err) => write!(f, "level parse error: {err}"),
            LevelError::Invalid(reason) => write!(f, "invalid level: {reason}"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Parse(err) => Some(err),
            LevelError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(err: serde_json::Error) -> Self {
        LevelError::Parse(err)
    }
}

impl Level {
    /// Parse and validate a level from JSON
    pub fn from_json(json: &str) -> Result<Level, LevelError> {
        let level: Level = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    fn validate(&self) -> Result<(), LevelError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(LevelError::Invalid("non-positive dimensions"));
        }
        if self.platforms.is_empty() {
            return Err(LevelError::Invalid("no platforms"));
        }
        if !self.platforms.iter().any(|p| *p == self.ground) {
            return Err(LevelError::Invalid("ground missing from platform list"));
        }
        if self.player_start.x < 0.0
            || self.player_start.x >= self.width
            || self.player_start.y < 0.0
            || self.player_start.y >= self.height
        {
            return Err(LevelError::Invalid("player start outside level bounds"));
        }
        Ok(())
    }
}

/// The builtin demo campaign used by the binary and tests
pub fn builtin_levels() -> Vec<Level> {
    let meadow_ground = Rect::new(0.0, 500.0, 2800.0, 40.0);
    let meadow = Level {
        name: "Sunny Meadow".into(),
        width: 2800.0,
        height: 540.0,
        platforms: vec![
            meadow_ground,
            Rect::new(620.0, 420.0, 160.0, 18.0),
            Rect::new(1050.0, 360.0, 140.0, 18.0),
            Rect::new(1480.0, 430.0, 180.0, 18.0),
            Rect::new(2050.0, 390.0, 150.0, 18.0),
        ],
        ground: meadow_ground,
        spawn_points: vec![
            SpawnPoint { x: 520.0, ground_y: 500.0 },
            SpawnPoint { x: 980.0, ground_y: 500.0 },
            SpawnPoint { x: 1420.0, ground_y: 500.0 },
            SpawnPoint { x: 1900.0, ground_y: 500.0 },
            SpawnPoint { x: 2350.0, ground_y: 500.0 },
        ],
        goal_item: Rect::new(2090.0, 350.0, 26.0, 26.0),
        gate: Rect::new(2700.0, 420.0, 40.0, 80.0),
        player_start: Vec2::new(60.0, 460.0),
        seed: "sunny-meadow".into(),
    };

    let quarry_ground = Rect::new(0.0, 500.0, 3400.0, 40.0);
    let quarry = Level {
        name: "Old Quarry".into(),
        width: 3400.0,
        height: 540.0,
        platforms: vec![
            quarry_ground,
            Rect::new(480.0, 440.0, 120.0, 18.0),
            Rect::new(760.0, 380.0, 120.0, 18.0),
            Rect::new(1040.0, 320.0, 120.0, 18.0),
            Rect::new(1600.0, 410.0, 200.0, 18.0),
            Rect::new(2200.0, 360.0, 140.0, 18.0),
            Rect::new(2750.0, 300.0, 130.0, 18.0),
        ],
        ground: quarry_ground,
        spawn_points: vec![
            SpawnPoint { x: 600.0, ground_y: 500.0 },
            SpawnPoint { x: 1200.0, ground_y: 500.0 },
            SpawnPoint { x: 1750.0, ground_y: 500.0 },
            SpawnPoint { x: 2300.0, ground_y: 500.0 },
            SpawnPoint { x: 2900.0, ground_y: 500.0 },
            SpawnPoint { x: 3150.0, ground_y: 500.0 },
        ],
        goal_item: Rect::new(2795.0, 260.0, 26.0, 26.0),
        gate: Rect::new(3300.0, 420.0, 40.0, 80.0),
        player_start: Vec2::new(60.0, 460.0),
        seed: "old-quarry".into(),
    };

    vec![meadow, quarry]
}
