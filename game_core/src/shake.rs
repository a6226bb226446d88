use glam::Vec2;
use rand::Rng;

use crate::config::Params;
use crate::resources::GameRng;

#[derive(Debug, Clone, Copy)]
struct Shake {
    amplitude: f32,
    duration: f32,
    elapsed: f32,
    freq: f32,
    phase_x: f32,
    phase_y: f32,
}

/// Screen-shake channel for the renderer: shot and impact events queue
/// decaying sine offsets that blend additively. The simulation itself never
/// reads the offset back.
#[derive(Debug, Clone, Default)]
pub struct CameraShake {
    shakes: Vec<Shake>,
}

impl CameraShake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Muzzle kick.
    pub fn small(&mut self, rng: &mut GameRng) {
        self.add(
            Params::SHAKE_SMALL_AMPLITUDE,
            Params::SHAKE_SMALL_DURATION,
            rng,
        );
    }

    /// Explosion or core damage.
    pub fn big(&mut self, rng: &mut GameRng) {
        self.add(Params::SHAKE_BIG_AMPLITUDE, Params::SHAKE_BIG_DURATION, rng);
    }

    pub fn update(&mut self, dt: f32) {
        for shake in &mut self.shakes {
            shake.elapsed += dt;
        }
        self.shakes.retain(|s| s.elapsed < s.duration);
    }

    /// Current pixel offset; zero when idle.
    pub fn offset(&self) -> Vec2 {
        let mut out = Vec2::ZERO;
        for s in &self.shakes {
            let t = s.elapsed / s.duration;
            let decay = (1.0 - t) * (1.0 - t);
            let amp = s.amplitude * decay;
            out.x += amp * (s.elapsed * s.freq + s.phase_x).sin();
            out.y += amp * (s.elapsed * s.freq * 1.3 + s.phase_y).sin();
        }
        out
    }

    pub fn clear(&mut self) {
        self.shakes.clear();
    }

    fn add(&mut self, amplitude: f32, duration: f32, rng: &mut GameRng) {
        self.shakes.push(Shake {
            amplitude,
            duration,
            elapsed: 0.0,
            freq: rng.0.gen_range(30.0..50.0),
            phase_x: rng.0.gen_range(0.0..std::f32::consts::TAU),
            phase_y: rng.0.gen_range(0.0..std::f32::consts::TAU),
        });
    }
}
