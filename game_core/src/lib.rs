//! Deterministic core-defense simulation.
//!
//! One `step()` call is one tick: the confirmed gesture and smoothed cursor
//! come in, entity state advances, and an `Events` record of everything the
//! audio/visual collaborators need comes out. All randomness flows through
//! a seedable [`GameRng`], so identical inputs replay identically.

pub mod analytics;
pub mod bullets;
pub mod components;
pub mod config;
pub mod difficulty;
pub mod particles;
pub mod player;
pub mod resources;
pub mod session;
pub mod shake;
pub mod systems;

pub use analytics::*;
pub use bullets::*;
pub use components::*;
pub use config::*;
pub use difficulty::*;
pub use particles::*;
pub use player::*;
pub use resources::*;
pub use session::*;
pub use shake::*;

use glam::Vec2;
use hecs::World;
use systems::*;
use vision_core::Gesture;

/// Advance the simulation by one tick.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    input: &FrameInput,
    player: &mut Player,
    waves: &mut WaveState,
    difficulty: &mut DifficultyController,
    bullets: &mut BulletPool,
    particles: &mut ParticleSystem,
    shake: &mut CameraShake,
    analytics: &mut Analytics,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clamp dt so a stalled frame cannot catapult the simulation.
    let dt = time.dt.min(Params::MAX_DT);
    let tick = Time::new(dt, time.now);

    events.clear();

    // Gesture → actions. A held open palm fires every tick the cooldown
    // and ammo allow; a fist raises the shield.
    if input.hand_visible {
        match input.gesture {
            Gesture::Shoot if player.can_shoot() => {
                // A full pool refuses the shot and the round is kept.
                if bullets.fire(player.gun_tip(config), input.cursor, config, rng) {
                    player.consume_ammo(config, rng);
                    events.shot_fired = true;
                    shake.small(rng);
                    analytics.record_shot();
                    difficulty.record_shot();
                }
            }
            Gesture::Shield if !player.shield_active => {
                if player.activate_shield(config) {
                    events.shield_on = true;
                }
            }
            _ => {}
        }
    }

    player.update(dt, input.cursor, config, events);
    bullets.update(dt, config);
    difficulty.update(dt);
    shake.update(dt);
    particles.update(dt);
    analytics.update(dt, difficulty.level);

    if spawn_enemies(world, &tick, waves, difficulty, config, rng).is_some() {
        analytics.record_enemy_spawn(tick.now);
    }
    advance_enemies(world, &tick, config.core_pos(), input.cursor, rng);

    for hit in resolve_bullet_hits(world, bullets) {
        events.hits.push(hit.point);
        particles.emit_bullet_impact(hit.point, rng);
        analytics.record_hit();
        difficulty.record_hit();
        if hit.killed {
            events.kills.push(hit.enemy_pos);
            particles.emit_explosion(hit.enemy_pos, rng);
            shake.big(rng);
            analytics.record_kill(tick.now);
            score.award_kill(difficulty.level);
            if let Some(wave) = waves.register_kill() {
                events.wave_changed = Some(wave);
            }
        }
    }

    for contact in resolve_core_contacts(world, config) {
        if player.take_damage(config.enemy_contact_damage) {
            events.player_damaged = true;
            shake.big(rng);
            difficulty.record_damage(config.enemy_contact_damage as f32);
        } else {
            events.shield_blocked = true;
            particles.emit_shield_hit(contact.enemy_pos, rng);
            shake.small(rng);
        }
    }

    if player.alive && player.health <= 0 {
        player.health = 0;
        player.alive = false;
    }
    if !player.alive {
        events.game_over = true;
    }

    prune_dead(world);

    time.now += dt;
}

/// Spawn one enemy entity (drone + its steering state machine).
pub fn spawn_enemy(
    world: &mut World,
    wave: u32,
    pos: Vec2,
    speed: f32,
    config: &Config,
    rng: &mut GameRng,
) -> hecs::Entity {
    world.spawn((
        Enemy::new(wave, pos, config.enemy_radius),
        Ai::new(speed, wave, rng),
    ))
}
