use glam::Vec2;
use vision_core::Gesture;

use crate::config::Params;

/// Simulation time for one tick.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,
    pub now: f32,
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.016, now: 0.0 }
    }
}

/// Seedable random source threaded through construction and stepping so
/// runs (and tests) are reproducible.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(0xC0DE)
    }
}

/// Control signal for one tick, produced by the gesture pipeline.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    pub gesture: Gesture,
    pub cursor: Vec2,
    pub hand_visible: bool,
}

impl FrameInput {
    /// No hand this tick: gesture drops to None, cursor stays wherever the
    /// smoother froze it.
    pub fn absent(cursor: Vec2) -> Self {
        Self {
            gesture: Gesture::None,
            cursor,
            hand_visible: false,
        }
    }
}

/// Session score.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award_kill(&mut self, difficulty_level: u32) {
        self.points += Params::KILL_SCORE * difficulty_level;
    }
}

/// Wave progression and spawn bookkeeping.
#[derive(Debug, Clone, Copy)]
pub struct WaveState {
    pub wave: u32,
    pub total_kills: u32,
    pub kills_this_wave: u32,
    pub kills_to_advance: u32,
    pub spawn_timer: f32,
    pub next_spawn_in: f32,
}

impl WaveState {
    pub fn new() -> Self {
        Self {
            wave: 1,
            total_kills: 0,
            kills_this_wave: 0,
            kills_to_advance: Params::KILLS_TO_ADVANCE,
            spawn_timer: 0.0,
            next_spawn_in: Params::ENEMY_SPAWN_INTERVAL,
        }
    }

    /// Count a kill. Returns the new wave number when this kill advanced
    /// the wave. The advance threshold grows 25% per wave, truncated.
    pub fn register_kill(&mut self) -> Option<u32> {
        self.total_kills += 1;
        self.kills_this_wave += 1;
        if self.kills_this_wave >= self.kills_to_advance {
            self.wave += 1;
            self.kills_this_wave = 0;
            self.kills_to_advance =
                (self.kills_to_advance as f32 * Params::WAVE_KILL_GROWTH) as u32;
            return Some(self.wave);
        }
        None
    }
}

impl Default for WaveState {
    fn default() -> Self {
        Self::new()
    }
}

/// Discrete events from one tick, consumed by the audio/visual
/// collaborators. Cleared at the start of every tick.
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub shot_fired: bool,
    /// Bullet impact points (enemy hit).
    pub hits: Vec<Vec2>,
    /// Enemy death positions.
    pub kills: Vec<Vec2>,
    pub player_damaged: bool,
    /// An enemy reached the core but the shield absorbed the damage.
    pub shield_blocked: bool,
    pub shield_on: bool,
    pub shield_off: bool,
    pub reload_started: bool,
    pub reload_finished: bool,
    /// New wave number when the wave advanced this tick.
    pub wave_changed: Option<u32>,
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.shot_fired = false;
        self.hits.clear();
        self.kills.clear();
        self.player_damaged = false;
        self.shield_blocked = false;
        self.shield_on = false;
        self.shield_off = false;
        self.reload_started = false;
        self.reload_finished = false;
        self.wave_changed = None;
        self.game_over = false;
    }
}

/// Soundtrack intensity hint for the audio collaborator, derived from the
/// wave counter. The core never plays audio itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicIntensity {
    Ambient,
    Medium,
    Intense,
}

pub fn music_for_wave(wave: u32) -> MusicIntensity {
    match wave {
        0..=3 => MusicIntensity::Ambient,
        4..=7 => MusicIntensity::Medium,
        _ => MusicIntensity::Intense,
    }
}
