use hecs::World;
use vision_core::Gesture;

use crate::analytics::Analytics;
use crate::bullets::BulletPool;
use crate::config::{Config, Params};
use crate::difficulty::DifficultyController;
use crate::particles::ParticleSystem;
use crate::player::Player;
use crate::resources::{music_for_wave, Events, FrameInput, GameRng, MusicIntensity, Score, Time, WaveState};
use crate::shake::CameraShake;

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Menu,
    Calibration,
    Playing,
    GameOver,
}

/// Actions that move the session between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// A hand was seen on the menu (or the player opted to start).
    Start,
    CalibrationDone,
    CoreBreached,
    Restart,
}

/// One full play session: the ECS world plus every resource `step()`
/// needs, behind a small lifecycle state machine.
pub struct Session {
    pub state: SessionState,
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub player: Player,
    pub waves: WaveState,
    pub difficulty: DifficultyController,
    pub bullets: BulletPool,
    pub particles: ParticleSystem,
    pub shake: CameraShake,
    pub analytics: Analytics,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    calibration_timer: f32,
}

impl Session {
    pub fn new(config: Config, seed: u64) -> Self {
        let bullets = BulletPool::new(&config);
        let particles = ParticleSystem::new(config.max_particles);
        Self {
            state: SessionState::Menu,
            world: World::new(),
            time: Time::new(0.0, 0.0),
            config,
            player: Player::new(),
            waves: WaveState::new(),
            difficulty: DifficultyController::new(),
            bullets,
            particles,
            shake: CameraShake::new(),
            analytics: Analytics::new(),
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            calibration_timer: Params::CALIBRATION_TIME,
        }
    }

    /// Attempt a lifecycle transition. Invalid pairs are rejected without
    /// changing state; returns whether the transition happened.
    pub fn apply(&mut self, action: SessionAction) -> bool {
        let next = match (self.state, action) {
            (SessionState::Menu, SessionAction::Start) => Some(SessionState::Calibration),
            (SessionState::Calibration, SessionAction::CalibrationDone) => {
                Some(SessionState::Playing)
            }
            (SessionState::Playing, SessionAction::CoreBreached) => Some(SessionState::GameOver),
            (SessionState::GameOver, SessionAction::Restart) => Some(SessionState::Calibration),
            _ => None,
        };

        let Some(next) = next else {
            return false;
        };

        match next {
            SessionState::Calibration => {
                self.calibration_timer = Params::CALIBRATION_TIME;
                if action == SessionAction::Restart {
                    self.reset_playfield();
                }
            }
            SessionState::Playing | SessionState::GameOver | SessionState::Menu => {}
        }
        self.state = next;
        true
    }

    /// Drive the session one frame. Only the `Playing` state runs the
    /// simulation; the others just watch for their exit condition.
    pub fn advance(&mut self, dt: f32, input: &FrameInput) {
        match self.state {
            SessionState::Menu => {
                // Any confirmed gesture on a visible hand starts the session.
                if input.hand_visible && input.gesture != Gesture::None {
                    self.apply(SessionAction::Start);
                }
            }
            SessionState::Calibration => {
                self.calibration_timer -= dt;
                if self.calibration_timer <= 0.0 {
                    self.apply(SessionAction::CalibrationDone);
                }
            }
            SessionState::Playing => {
                self.time.dt = dt;
                crate::step(
                    &mut self.world,
                    &mut self.time,
                    &self.config,
                    input,
                    &mut self.player,
                    &mut self.waves,
                    &mut self.difficulty,
                    &mut self.bullets,
                    &mut self.particles,
                    &mut self.shake,
                    &mut self.analytics,
                    &mut self.score,
                    &mut self.events,
                    &mut self.rng,
                );
                if self.events.game_over {
                    self.apply(SessionAction::CoreBreached);
                }
            }
            SessionState::GameOver => {}
        }
    }

    /// Soundtrack hint for the audio collaborator.
    pub fn music(&self) -> MusicIntensity {
        music_for_wave(self.waves.wave)
    }

    pub fn is_playing(&self) -> bool {
        self.state == SessionState::Playing
    }

    /// Fresh play-field for a rematch; the vision pipeline and RNG stream
    /// carry over untouched.
    fn reset_playfield(&mut self) {
        self.world.clear();
        self.time = Time::new(0.0, 0.0);
        self.player = Player::new();
        self.waves = WaveState::new();
        self.difficulty = DifficultyController::new();
        self.bullets.clear();
        self.particles.clear();
        self.shake.clear();
        self.analytics = Analytics::new();
        self.score = Score::new();
        self.events.clear();
    }
}
