//! Dig spots, bones, and dig particles
//!
//! Spot placement is driven entirely by the level's seeded sequence so a
//! layout is reproducible across sessions and replays. Placement is
//! constraint-checked with a bounded try budget; running out of tries
//! yields fewer spots than the target rather than looping.
//!
//! Particles live in a fixed-slot arena with a free list: stable indices,
//! no compaction, and oldest-first eviction once the cap is hit, so memory
//! stays bounded no matter how often the player digs.

use glam::Vec2;

use crate::consts::*;
use super::geom::Rect;
use super::level::Level;
use super::player::{Player, PlayerAction};
use super::rng::SeededSequence;
use super::session::Session;
use super::state::GameEvent;

/// A procedurally placed patch of diggable ground
#[derive(Debug, Clone, PartialEq)]
pub struct DigSpot {
    pub rect: Rect,
    /// Flips to true exactly once
    pub dug: bool,
    pub has_bone: bool,
    /// Derived from the spot's own coordinates; keeps decoration stable
    pub decor_seed: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoneState {
    /// Ballistic pop arc out of the ground
    Popping,
    /// Settled and collectable
    Idle,
}

/// An excavated collectible
#[derive(Debug, Clone)]
pub struct Bone {
    pub rect: Rect,
    pub vy: f32,
    pub state: BoneState,
    /// Resting y once the arc comes back down
    pub settle_y: f32,
    pub active: bool,
}

impl Bone {
    /// Launch a bone out of a dig spot. The launch speed is chosen so the
    /// apex passes BONE_POP_HEIGHT above the spot; the settle point sits
    /// BONE_SETTLE_DROP below the apex target.
    pub fn pop(spot: &Rect) -> Self {
        let start_y = spot.y - BONE_HEIGHT;
        let apex_target = start_y - BONE_POP_HEIGHT;
        // Rise BONE_SETTLE_DROP past the target so the fall back to the
        // settle height reads as an ease-down
        let rise = BONE_POP_HEIGHT + BONE_SETTLE_DROP;
        let launch = (2.0 * BONE_GRAVITY * rise).sqrt();
        Self {
            rect: Rect::new(
                spot.center_x() - BONE_WIDTH / 2.0,
                start_y,
                BONE_WIDTH,
                BONE_HEIGHT,
            ),
            vy: -launch,
            state: BoneState::Popping,
            settle_y: apex_target + BONE_SETTLE_DROP,
            active: true,
        }
    }
}

/// A decorative dirt particle
#[derive(Debug, Clone)]
pub struct DigParticle {
    pub rect: Rect,
    pub vel: Vec2,
    /// Seconds remaining; monotonically decreasing
    pub life: f32,
    pub total_life: f32,
    /// Spawn order, used for oldest-first eviction
    seq: u64,
}

/// Fixed-capacity particle arena: slot reuse via free list, oldest evicted
/// when full.
#[derive(Debug, Clone)]
pub struct ParticlePool {
    slots: Vec<Option<DigParticle>>,
    free: Vec<usize>,
    next_seq: u64,
}

impl ParticlePool {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            free: (0..capacity).rev().collect(),
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &DigParticle> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }

    /// Insert a particle, evicting the oldest live one if the pool is full
    pub fn spawn(&mut self, rect: Rect, vel: Vec2, life: f32) {
        let slot = match self.free.pop() {
            Some(index) => index,
            None => self.oldest_slot(),
        };
        self.slots[slot] = Some(DigParticle {
            rect,
            vel,
            life,
            total_life: life,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    fn oldest_slot(&self) -> usize {
        let mut best = 0;
        let mut best_seq = u64::MAX;
        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(particle) = slot {
                if particle.seq < best_seq {
                    best_seq = particle.seq;
                    best = index;
                }
            }
        }
        best
    }

    /// Integrate motion and lifetimes; expired slots return to the free list
    pub fn update(&mut self, dt: f32) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(particle) = slot {
                particle.rect.x += particle.vel.x * dt;
                particle.rect.y += particle.vel.y * dt;
                particle.vel.y += DIG_PARTICLE_GRAVITY * dt;
                particle.life -= dt;
                if particle.life <= 0.0 {
                    *slot = None;
                    self.free.push(index);
                }
            }
        }
    }
}

/// All dig-system state for the current level
#[derive(Debug, Clone)]
pub struct DigField {
    pub spots: Vec<DigSpot>,
    pub bones: Vec<Bone>,
    pub particles: ParticlePool,
}

impl DigField {
    /// Generate the field for a level from its seed string
    pub fn generate(level: &Level) -> Self {
        let spots = generate_dig_spots(level);
        log::debug!("placed {} dig spots for '{}'", spots.len(), level.name);
        Self {
            spots,
            bones: Vec::new(),
            particles: ParticlePool::with_capacity(MAX_DIG_PARTICLES),
        }
    }
}

/// Fold a spot's coordinates into a stable decoration seed
fn decor_seed(x: f32, y: f32) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in x.to_bits().to_le_bytes().iter().chain(&y.to_bits().to_le_bytes()) {
        hash ^= u32::from(*byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}

/// Seeded constrained placement; deterministic for a given level seed
pub fn generate_dig_spots(level: &Level) -> Vec<DigSpot> {
    let mut sequence = SeededSequence::new(&level.seed);
    let span = (DIG_SPOT_MAX - DIG_SPOT_MIN + 1) as f32;
    let target = DIG_SPOT_MIN + (sequence.next_unit() * span) as u32;
    let target = target.min(DIG_SPOT_MAX) as usize;

    let margin = DIG_SPOT_WIDTH;
    let ground = level.ground;
    let mut spots: Vec<DigSpot> = Vec::with_capacity(target);

    for _ in 0..DIG_PLACEMENT_TRIES {
        if spots.len() >= target {
            break;
        }
        let center_x = sequence.next_range(ground.left() + margin, ground.right() - margin);
        let rect = Rect::new(
            center_x - DIG_SPOT_WIDTH / 2.0,
            ground.y - DIG_SPOT_HEIGHT,
            DIG_SPOT_WIDTH,
            DIG_SPOT_HEIGHT,
        );

        if (center_x - level.player_start.x).abs() < DIG_MIN_START_DIST {
            continue;
        }
        if level
            .spawn_points
            .iter()
            .any(|point| (point.x - center_x).abs() < DIG_MIN_SPAWN_DIST)
        {
            continue;
        }
        if spots
            .iter()
            .any(|spot| (spot.rect.center_x() - center_x).abs() < DIG_SPOT_SPACING)
        {
            continue;
        }
        // Must rest on the main ground and stay clear of elevated platforms
        if !super::physics::probe_grounded(&rect, std::slice::from_ref(&ground)) {
            continue;
        }
        if level
            .platforms
            .iter()
            .filter(|p| **p != ground)
            .any(|p| rect.overlaps(p, 0.0))
        {
            continue;
        }

        let has_bone = sequence.next_unit() < DIG_BONE_CHANCE;
        spots.push(DigSpot {
            rect,
            dug: false,
            has_bone,
            decor_seed: decor_seed(rect.x, rect.y),
        });
    }

    spots
}

/// Start digging if the player is grounded on an undug spot.
/// Returns whether the action started.
pub fn try_start_dig(player: &mut Player, field: &DigField) -> bool {
    if !player.body.grounded || player.is_digging() {
        return false;
    }
    let overlapping = field.spots.iter().position(|spot| {
        !spot.dug && player.body.rect.overlaps(&spot.rect, 0.0)
    });
    if let Some(spot) = overlapping {
        player.action = PlayerAction::Digging {
            spot,
            timer: DIG_DURATION,
        };
        true
    } else {
        false
    }
}

/// Advance an in-progress dig; on completion flip the spot and spawn its
/// contents (a bone, or a decorative burst for an empty spot).
pub fn update_dig(player: &mut Player, field: &mut DigField, dt: f32, events: &mut Vec<GameEvent>) {
    let PlayerAction::Digging { spot, timer } = player.action else {
        return;
    };
    let timer = timer - dt;
    if timer > 0.0 {
        player.action = PlayerAction::Digging { spot, timer };
        return;
    }
    player.action = PlayerAction::Normal;

    let Some(spot) = field.spots.get_mut(spot) else {
        return;
    };
    spot.dug = true;
    let found_bone = spot.has_bone;
    if found_bone {
        field.bones.push(Bone::pop(&spot.rect));
    } else {
        burst(&mut field.particles, &spot.rect, spot.decor_seed);
    }
    events.push(GameEvent::DigComplete { found_bone });
}

/// Deterministic dirt burst from an excavated spot
fn burst(pool: &mut ParticlePool, spot: &Rect, seed: u32) {
    for index in 0..DIG_BURST_COUNT {
        let hash = seed
            .wrapping_mul(2_654_435_761)
            .wrapping_add(index as u32 * 7919);
        let spread = ((hash % 1000) as f32 / 1000.0 - 0.5) * 2.0;
        let speed = 60.0 + ((hash >> 10) % 80) as f32;
        let rect = Rect::new(spot.center_x() - 2.0, spot.y - 4.0, 4.0, 4.0);
        let vel = Vec2::new(spread * speed, -(90.0 + ((hash >> 18) % 70) as f32));
        pool.spawn(rect, vel, DIG_PARTICLE_LIFETIME);
    }
}

/// Advance bone arcs and collect idle bones the player touches
pub fn update_bones(
    field: &mut DigField,
    player_rect: &Rect,
    session: &mut Session,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    for bone in &mut field.bones {
        match bone.state {
            BoneState::Popping => {
                bone.rect.y += bone.vy * dt;
                bone.vy += BONE_GRAVITY * dt;
                // Descending through the settle height ends the arc
                if bone.vy > 0.0 && bone.rect.y >= bone.settle_y {
                    bone.rect.y = bone.settle_y;
                    bone.vy = 0.0;
                    bone.state = BoneState::Idle;
                }
            }
            BoneState::Idle => {
                if bone.active && player_rect.overlaps(&bone.rect, 0.0) {
                    bone.active = false;
                    session.bones += 1;
                    events.push(GameEvent::BoneCollected);
                }
            }
        }
    }
    field.bones.retain(|bone| bone.active);
}
