use glam::Vec2;
use rand::Rng;

use crate::config::Config;
use crate::resources::GameRng;

/// Trail history length per bullet.
pub const TRAIL_LEN: usize = 6;

/// One poolable projectile slot.
#[derive(Debug, Clone, Copy)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: f32,
    pub radius: f32,
    pub active: bool,
    trail: [Vec2; TRAIL_LEN],
    trail_head: usize,
    trail_len: usize,
}

impl Bullet {
    fn idle(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            age: 0.0,
            radius,
            active: false,
            trail: [Vec2::ZERO; TRAIL_LEN],
            trail_head: 0,
            trail_len: 0,
        }
    }

    fn spawn(&mut self, origin: Vec2, target: Vec2, config: &Config, rng: &mut GameRng) {
        let to_target = target - origin;
        let dir = if to_target.length_squared() < 1e-6 {
            Vec2::X
        } else {
            to_target.normalize()
        };

        // Small random angular spread around the aim direction.
        let spread = config.bullet_spread_deg.to_radians();
        let jitter = rng.0.gen_range(-spread..=spread);
        let dir = Vec2::from_angle(jitter).rotate(dir);

        self.pos = origin;
        self.vel = dir * config.bullet_speed;
        self.age = 0.0;
        self.active = true;
        self.trail_head = 0;
        self.trail_len = 0;
    }

    fn update(&mut self, dt: f32, lifetime: f32) {
        self.push_trail(self.pos);
        self.pos += self.vel * dt;
        self.age += dt;
        if self.age >= lifetime {
            self.active = false;
        }
    }

    fn push_trail(&mut self, p: Vec2) {
        self.trail[self.trail_head] = p;
        self.trail_head = (self.trail_head + 1) % TRAIL_LEN;
        self.trail_len = (self.trail_len + 1).min(TRAIL_LEN);
    }

    /// Trail positions, oldest first, for the renderer.
    pub fn trail(&self) -> impl Iterator<Item = Vec2> + '_ {
        let start = (self.trail_head + TRAIL_LEN - self.trail_len) % TRAIL_LEN;
        (0..self.trail_len).map(move |i| self.trail[(start + i) % TRAIL_LEN])
    }
}

/// Fixed-capacity projectile pool. Nothing allocates per frame: firing
/// claims the first free slot, and a full pool simply refuses the shot.
#[derive(Debug, Clone)]
pub struct BulletPool {
    slots: Vec<Bullet>,
}

impl BulletPool {
    pub fn new(config: &Config) -> Self {
        Self {
            slots: vec![Bullet::idle(config.bullet_radius); config.bullet_pool_size],
        }
    }

    /// Fire toward `target` from `origin`. Returns false (and changes
    /// nothing) when every slot is live.
    pub fn fire(&mut self, origin: Vec2, target: Vec2, config: &Config, rng: &mut GameRng) -> bool {
        match self.slots.iter_mut().find(|b| !b.active) {
            Some(slot) => {
                slot.spawn(origin, target, config, rng);
                true
            }
            None => false,
        }
    }

    pub fn update(&mut self, dt: f32, config: &Config) {
        for bullet in self.slots.iter_mut().filter(|b| b.active) {
            bullet.update(dt, config.bullet_lifetime);
        }
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut Bullet> {
        self.slots.iter_mut().filter(|b| b.active)
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Bullet> {
        self.slots.iter().filter(|b| b.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|b| b.active).count()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        for bullet in &mut self.slots {
            bullet.active = false;
        }
    }
}
