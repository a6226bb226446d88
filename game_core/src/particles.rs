use glam::Vec2;
use rand::Rng;

use crate::resources::GameRng;

/// Downward drift applied to every particle, px/s².
const PARTICLE_GRAVITY: f32 = 60.0;

/// One pooled particle. Purely cosmetic - the simulation never reads these
/// back.
#[derive(Debug, Clone, Copy, Default)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
    pub max_life: f32,
    pub color: (u8, u8, u8),
    pub size: f32,
    pub active: bool,
}

impl Particle {
    fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.vel.y += PARTICLE_GRAVITY * dt;
        self.life -= dt;
        if self.life <= 0.0 {
            self.active = false;
        }
    }
}

/// Fixed-capacity effect pool with a round-robin write cursor: emission
/// always succeeds, overwriting whatever sits in the next slot.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    pool: Vec<Particle>,
    cursor: usize,
}

impl ParticleSystem {
    pub fn new(capacity: usize) -> Self {
        Self {
            pool: vec![Particle::default(); capacity],
            cursor: 0,
        }
    }

    /// Cyan sparks where a bullet struck a drone.
    pub fn emit_bullet_impact(&mut self, at: Vec2, rng: &mut GameRng) {
        for _ in 0..8 {
            let angle = rng.0.gen_range(0.0..std::f32::consts::TAU);
            let speed = rng.0.gen_range(60.0..200.0);
            self.spawn(
                at,
                Vec2::from_angle(angle) * speed,
                rng.0.gen_range(0.2..0.5),
                (0, rng.0.gen_range(180..=255), rng.0.gen_range(200..=255)),
                rng.0.gen_range(2.0..4.0),
            );
        }
    }

    /// Orange burst for a destroyed drone.
    pub fn emit_explosion(&mut self, at: Vec2, rng: &mut GameRng) {
        for _ in 0..30 {
            let angle = rng.0.gen_range(0.0..std::f32::consts::TAU);
            let speed = rng.0.gen_range(80.0..350.0);
            self.spawn(
                at,
                Vec2::from_angle(angle) * speed,
                rng.0.gen_range(0.4..1.0),
                (rng.0.gen_range(200..=255), rng.0.gen_range(60..=150), 0),
                rng.0.gen_range(3.0..7.0),
            );
        }
    }

    /// Blue ripple when the shield absorbs a contact.
    pub fn emit_shield_hit(&mut self, at: Vec2, rng: &mut GameRng) {
        for _ in 0..12 {
            let angle = rng.0.gen_range(0.0..std::f32::consts::TAU);
            let speed = rng.0.gen_range(50.0..150.0);
            self.spawn(
                at,
                Vec2::from_angle(angle) * speed,
                rng.0.gen_range(0.2..0.6),
                (60, 140, rng.0.gen_range(220..=255)),
                rng.0.gen_range(2.0..5.0),
            );
        }
    }

    pub fn update(&mut self, dt: f32) {
        for particle in self.pool.iter_mut().filter(|p| p.active) {
            particle.update(dt);
        }
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Particle> {
        self.pool.iter().filter(|p| p.active)
    }

    pub fn active_count(&self) -> usize {
        self.pool.iter().filter(|p| p.active).count()
    }

    pub fn clear(&mut self) {
        for particle in &mut self.pool {
            particle.active = false;
        }
        self.cursor = 0;
    }

    fn spawn(&mut self, pos: Vec2, vel: Vec2, life: f32, color: (u8, u8, u8), size: f32) {
        self.pool[self.cursor] = Particle {
            pos,
            vel,
            life,
            max_life: life,
            color,
            size,
            active: true,
        };
        self.cursor = (self.cursor + 1) % self.pool.len();
    }
}
