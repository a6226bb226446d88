use glam::Vec2;
use rand::Rng;

use crate::config::Params;
use crate::resources::GameRng;

/// Behavioral state of one enemy drone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyState {
    #[default]
    Seek,
    Dodge,
    Aggressive,
    Stagger,
}

/// Enemy tier, derived purely from the wave it spawned in. Tiers change
/// speed, size and movement pattern - never durability.
pub fn tier_for_wave(wave: u32) -> u8 {
    match wave {
        0..=2 => 1,
        3..=5 => 2,
        6..=8 => 3,
        _ => 4,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TierProps {
    pub radius_mult: f32,
    pub speed_mult: f32,
}

pub fn tier_props(tier: u8) -> TierProps {
    match tier {
        1 => TierProps {
            radius_mult: 1.0,
            speed_mult: 1.0,
        },
        2 => TierProps {
            radius_mult: 1.2,
            speed_mult: 1.3,
        },
        3 => TierProps {
            radius_mult: 1.1,
            speed_mult: 1.65,
        },
        _ => TierProps {
            radius_mult: 1.5,
            speed_mult: 2.1,
        },
    }
}

/// Enemy drone component.
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
    pub tier: u8,
    pub wave: u32,
    pub health: i32,
    pub alive: bool,
}

impl Enemy {
    pub fn new(wave: u32, pos: Vec2, base_radius: f32) -> Self {
        let tier = tier_for_wave(wave);
        Self {
            pos,
            radius: base_radius * tier_props(tier).radius_mult,
            tier,
            wave,
            // Every drone dies to a single hit; tier never adds durability.
            health: 1,
            alive: true,
        }
    }

    /// Apply damage. Returns true if this killed the enemy.
    pub fn hit(&mut self, damage: i32) -> bool {
        self.health -= damage;
        if self.health <= 0 {
            self.alive = false;
            return true;
        }
        false
    }
}

/// Per-enemy steering state machine, owned by the enemy entity.
///
/// Zig-zag parameters are randomized once at spawn so Aggressive drones on
/// late waves weave out of phase with each other.
#[derive(Debug, Clone, Copy)]
pub struct Ai {
    pub state: EnemyState,
    pub base_speed: f32,
    pub wave: u32,

    // Dodge
    pub cursor_close_timer: f32,
    pub dodge_timer: f32,
    pub dodge_dir: Vec2,

    // Stagger
    pub stagger_timer: f32,

    // Aggressive zig-zag
    pub zz_timer: f32,
    pub zz_phase: f32,
    pub zz_frequency: f32,
    pub zz_amplitude: f32,
}

impl Ai {
    pub fn new(base_speed: f32, wave: u32, rng: &mut GameRng) -> Self {
        Self {
            state: EnemyState::Seek,
            base_speed,
            wave,
            cursor_close_timer: 0.0,
            dodge_timer: 0.0,
            dodge_dir: Vec2::ZERO,
            stagger_timer: 0.0,
            zz_timer: 0.0,
            zz_phase: rng.0.gen_range(0.0..std::f32::consts::TAU),
            zz_frequency: rng.0.gen_range(2.0..4.0),
            zz_amplitude: rng.0.gen_range(40.0..80.0),
        }
    }

    /// Taking a hit staggers the drone from any state. Repeat hits reset
    /// the timer rather than stacking.
    pub fn trigger_stagger(&mut self) {
        self.stagger_timer = Params::STAGGER_DURATION;
    }
}
