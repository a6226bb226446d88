use glam::Vec2;

/// Simulation tuning parameters.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen (pixel space shared with the cursor pipeline)
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    // Player / core
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    pub const PLAYER_MAX_AMMO: u32 = 15;
    pub const CORE_RADIUS: f32 = 30.0;
    pub const ORBIT_RADIUS: f32 = 90.0; // gun orbits this far from the core
    pub const GUN_LENGTH: f32 = 28.0; // barrel length, muzzle offset
    pub const RELOAD_TIME: f32 = 1.5;
    pub const SHIELD_DURATION: f32 = 3.0;
    pub const SHIELD_COOLDOWN: f32 = 5.0;
    pub const SHOOT_COOLDOWN: f32 = 0.2;
    pub const RECOIL_MIN: f32 = 2.0;
    pub const RECOIL_MAX: f32 = 5.0;
    pub const RECOIL_RECOVER: f32 = 0.12;
    pub const ENEMY_CONTACT_DAMAGE: i32 = 10;

    // Bullets
    pub const BULLET_SPEED: f32 = 900.0;
    pub const BULLET_LIFETIME: f32 = 1.2;
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const BULLET_SPREAD_DEG: f32 = 2.0; // ± angular spread
    pub const BULLET_POOL_SIZE: usize = 80;

    // Enemies
    pub const ENEMY_BASE_SPEED: f32 = 120.0;
    pub const ENEMY_RADIUS: f32 = 18.0;
    pub const ENEMY_SPAWN_INTERVAL: f32 = 2.0;
    pub const ENEMY_SPAWN_MARGIN: f32 = 40.0; // spawn this far outside an edge
    pub const DODGE_THRESHOLD: f32 = 50.0; // cursor proximity (px)
    pub const DODGE_TRIGGER_TIME: f32 = 0.7; // continuous proximity before dodging
    pub const DODGE_DURATION: f32 = 0.5;
    pub const STAGGER_DURATION: f32 = 0.1;
    pub const STAGGER_FACTOR: f32 = 0.7; // speed multiplier while staggered
    pub const AGGRESSIVE_WAVE: u32 = 5; // dodge exits to Aggressive from this wave on

    // Waves
    pub const KILLS_TO_ADVANCE: u32 = 6;
    pub const WAVE_KILL_GROWTH: f32 = 1.25;

    // Scoring
    pub const KILL_SCORE: u32 = 100; // multiplied by difficulty level

    // Difficulty
    pub const DIFFICULTY_MIN: u32 = 1;
    pub const DIFFICULTY_MAX: u32 = 10;
    pub const DIFFICULTY_EVAL_INTERVAL: f32 = 10.0;
    pub const DIFFICULTY_SPEED_STEP: f32 = 0.12;
    pub const DIFFICULTY_HEALTH_STEP: f32 = 0.15;
    pub const DIFFICULTY_SPAWN_STEP: f32 = 0.12;
    pub const SPAWN_INTERVAL_FLOOR: f32 = 0.5;
    pub const ACCURACY_RAISE: f32 = 0.70;
    pub const ACCURACY_LOWER: f32 = 0.40;
    pub const DAMAGE_RAISE_LIMIT: f32 = 10.0;

    // Particles
    pub const MAX_PARTICLES: usize = 300;

    // Camera shake
    pub const SHAKE_SMALL_AMPLITUDE: f32 = 2.0;
    pub const SHAKE_SMALL_DURATION: f32 = 0.10;
    pub const SHAKE_BIG_AMPLITUDE: f32 = 6.0;
    pub const SHAKE_BIG_DURATION: f32 = 0.25;

    // Session
    pub const CALIBRATION_TIME: f32 = 3.0;

    // Physics
    pub const MAX_DT: f32 = 0.05; // clamp to avoid runaway steps after a stall
}

/// Runtime configuration, defaulting to `Params`. The headless runner can
/// overlay tuning-file values on top.
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub core_radius: f32,
    pub orbit_radius: f32,
    pub gun_length: f32,
    pub bullet_speed: f32,
    pub bullet_lifetime: f32,
    pub bullet_radius: f32,
    pub bullet_spread_deg: f32,
    pub bullet_pool_size: usize,
    pub enemy_base_speed: f32,
    pub enemy_radius: f32,
    pub enemy_spawn_interval: f32,
    pub enemy_contact_damage: i32,
    pub reload_time: f32,
    pub shield_duration: f32,
    pub shield_cooldown: f32,
    pub shoot_cooldown: f32,
    pub max_particles: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            core_radius: Params::CORE_RADIUS,
            orbit_radius: Params::ORBIT_RADIUS,
            gun_length: Params::GUN_LENGTH,
            bullet_speed: Params::BULLET_SPEED,
            bullet_lifetime: Params::BULLET_LIFETIME,
            bullet_radius: Params::BULLET_RADIUS,
            bullet_spread_deg: Params::BULLET_SPREAD_DEG,
            bullet_pool_size: Params::BULLET_POOL_SIZE,
            enemy_base_speed: Params::ENEMY_BASE_SPEED,
            enemy_radius: Params::ENEMY_RADIUS,
            enemy_spawn_interval: Params::ENEMY_SPAWN_INTERVAL,
            enemy_contact_damage: Params::ENEMY_CONTACT_DAMAGE,
            reload_time: Params::RELOAD_TIME,
            shield_duration: Params::SHIELD_DURATION,
            shield_cooldown: Params::SHIELD_COOLDOWN,
            shoot_cooldown: Params::SHOOT_COOLDOWN,
            max_particles: Params::MAX_PARTICLES,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// The defended core sits at screen center.
    pub fn core_pos(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }
}
