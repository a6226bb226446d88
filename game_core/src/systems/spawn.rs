use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::components::{tier_for_wave, tier_props};
use crate::config::{Config, Params};
use crate::difficulty::DifficultyController;
use crate::resources::{GameRng, Time, WaveState};

/// Pick a point just outside one of the four screen edges.
pub fn random_edge_spawn(config: &Config, rng: &mut GameRng) -> Vec2 {
    let margin = Params::ENEMY_SPAWN_MARGIN;
    match rng.0.gen_range(0..4u8) {
        0 => Vec2::new(rng.0.gen_range(0.0..config.screen_width), -margin),
        1 => Vec2::new(
            rng.0.gen_range(0.0..config.screen_width),
            config.screen_height + margin,
        ),
        2 => Vec2::new(-margin, rng.0.gen_range(0.0..config.screen_height)),
        _ => Vec2::new(
            config.screen_width + margin,
            rng.0.gen_range(0.0..config.screen_height),
        ),
    }
}

/// Advance the spawn clock; at each randomized interval one drone enters
/// from a screen edge. Returns the spawned entity so the caller can record
/// telemetry.
pub fn spawn_enemies(
    world: &mut World,
    time: &Time,
    waves: &mut WaveState,
    difficulty: &DifficultyController,
    config: &Config,
    rng: &mut GameRng,
) -> Option<hecs::Entity> {
    waves.spawn_timer += time.dt;
    if waves.spawn_timer < waves.next_spawn_in {
        return None;
    }
    waves.spawn_timer = 0.0;

    // Difficulty squeezes the base interval; jitter adds up to one second.
    let base = difficulty.spawn_interval(config.enemy_spawn_interval);
    waves.next_spawn_in = rng.0.gen_range(base..base + 1.0);

    let pos = random_edge_spawn(config, rng);
    let tier = tier_for_wave(waves.wave);
    let speed = config.enemy_base_speed * difficulty.speed_multiplier() * tier_props(tier).speed_mult;
    Some(crate::spawn_enemy(world, waves.wave, pos, speed, config, rng))
}
