//! Game state aggregate and event queue
//!
//! `GameState` owns every piece of mutable simulation state; it is mutated
//! only inside the single `step()` pass per frame. Discrete happenings are
//! queued as `GameEvent`s and drained by the host (audio, UI) after each
//! frame — fire-and-forget, nothing is returned to the core.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::camera::Camera;
use super::dig::DigField;
use super::enemy::{Enemy, EnemyKind};
use super::level::Level;
use super::player::Player;
use super::session::{LevelStats, Session, SessionPhase};
use super::spawner::Spawner;

/// Discrete event notifications for the host
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Jump,
    Stomp { kind: EnemyKind, killed: bool },
    PlayerHit { hearts_left: u8 },
    DigComplete { found_bone: bool },
    BoneCollected,
    GoalItemCollected,
    GateUnlocked,
    LevelComplete(LevelStats),
    GameOver,
    DemoComplete(LevelStats),
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub session: Session,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub spawner: Spawner,
    pub dig: DigField,
    pub camera: Camera,
    /// The campaign; the session's level index points into this
    pub levels: Vec<Level>,
    /// Gameplay RNG (wave timing, respawn jitter, candidate shuffles);
    /// distinct from the level-seeded placement sequence
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Build a fresh state over a non-empty campaign.
    ///
    /// # Panics
    /// Panics when `levels` is empty; a missing campaign is a setup bug,
    /// not a runtime condition.
    pub fn new(levels: Vec<Level>, session_seed: u64) -> Self {
        assert!(!levels.is_empty(), "campaign needs at least one level");
        let mut rng = Pcg32::seed_from_u64(session_seed);
        let spawner = Spawner::new(&mut rng);
        let player = Player::new(levels[0].player_start);
        let dig = DigField::generate(&levels[0]);
        let mut state = Self {
            session: Session::new(0),
            player,
            enemies: Vec::new(),
            spawner,
            dig,
            camera: Camera::default(),
            levels,
            rng,
            events: Vec::new(),
        };
        state
            .camera
            .update(state.player.body.rect.center_x(), state.levels[0].width);
        log::info!("session started on '{}'", state.levels[0].name);
        state
    }

    /// The level the session is currently on
    pub fn level(&self) -> &Level {
        &self.levels[self.session.level_index]
    }

    /// Reset everything to a level's defaults. This is the only way out of
    /// the game-over / level-complete / demo-complete phases.
    pub fn load_level(&mut self, index: usize) {
        log::info!("loading level {index} '{}'", self.levels[index].name);
        self.session = Session::new(index);
        self.player = Player::new(self.levels[index].player_start);
        self.enemies.clear();
        self.spawner = Spawner::new(&mut self.rng);
        self.dig = DigField::generate(&self.levels[index]);
        self.camera = Camera::default();
        self.camera
            .update(self.player.body.rect.center_x(), self.levels[index].width);
    }

    /// Restart the current level
    pub fn restart_level(&mut self) {
        self.load_level(self.session.level_index);
    }

    /// Move on after a level completion; past the last level this lands in
    /// the terminal demo-complete phase instead.
    pub fn advance_level(&mut self) {
        let next = self.session.level_index + 1;
        if next < self.levels.len() {
            self.load_level(next);
        } else {
            let name = self.level().name.clone();
            let stats = self.session.stats(&name, false);
            self.session.phase = SessionPhase::DemoComplete;
            log::info!("demo complete");
            self.events.push(GameEvent::DemoComplete(stats));
        }
    }

    /// Take this frame's queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
