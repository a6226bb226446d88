use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::components::{Ai, Enemy, EnemyState};
use crate::config::Params;
use crate::resources::{GameRng, Time};

/// Run one steering tick for a single drone: state transitions first, then
/// the velocity for this frame.
///
/// Ordering matters and mirrors the transition table:
/// - an armed stagger timer forces `Stagger` and suppresses dodge entry,
///   though the cursor-proximity clock keeps accumulating underneath;
/// - the tick after stagger expires returns to `Seek`, and an
///   already-saturated proximity clock may start a dodge immediately;
/// - dodge expiry exits to `Seek` before wave 5 and `Aggressive` from
///   wave 5 on.
pub fn steer(
    ai: &mut Ai,
    dt: f32,
    pos: Vec2,
    target: Vec2,
    cursor: Vec2,
    rng: &mut GameRng,
) -> Vec2 {
    ai.zz_timer += dt;

    if ai.stagger_timer > 0.0 {
        ai.stagger_timer -= dt;
        ai.state = EnemyState::Stagger;
    } else if ai.state == EnemyState::Stagger {
        ai.state = EnemyState::Seek;
    }

    // Cursor proximity must be continuous: any far frame resets the clock.
    if cursor.distance(pos) < Params::DODGE_THRESHOLD {
        ai.cursor_close_timer += dt;
    } else {
        ai.cursor_close_timer = 0.0;
    }

    if matches!(ai.state, EnemyState::Seek | EnemyState::Aggressive)
        && ai.cursor_close_timer >= Params::DODGE_TRIGGER_TIME
    {
        start_dodge(ai, pos, target, rng);
    }

    if ai.state == EnemyState::Dodge {
        ai.dodge_timer -= dt;
        if ai.dodge_timer <= 0.0 {
            ai.state = if ai.wave < Params::AGGRESSIVE_WAVE {
                EnemyState::Seek
            } else {
                EnemyState::Aggressive
            };
        }
    }

    velocity(ai, pos, target)
}

fn start_dodge(ai: &mut Ai, pos: Vec2, target: Vec2, rng: &mut GameRng) {
    let to_target = target - pos;
    let perp = if to_target.length_squared() < 1e-6 {
        Vec2::X
    } else {
        let n = to_target.normalize().perp();
        if rng.0.gen_bool(0.5) {
            -n
        } else {
            n
        }
    };
    ai.dodge_dir = perp;
    ai.dodge_timer = Params::DODGE_DURATION;
    ai.state = EnemyState::Dodge;
    ai.cursor_close_timer = 0.0;
}

fn velocity(ai: &Ai, pos: Vec2, target: Vec2) -> Vec2 {
    let mut speed = ai.base_speed;
    if ai.state == EnemyState::Stagger {
        speed *= Params::STAGGER_FACTOR;
    }

    if ai.state == EnemyState::Dodge {
        return ai.dodge_dir * speed;
    }

    let to_target = target - pos;
    if to_target.length_squared() < 1e-6 {
        // Already on top of the target; nothing sane to normalize.
        return Vec2::ZERO;
    }
    let dir = to_target.normalize();

    if ai.state == EnemyState::Aggressive && ai.wave >= Params::AGGRESSIVE_WAVE {
        let weave = (ai.zz_timer * ai.zz_frequency + ai.zz_phase).sin();
        let blended = dir * speed + dir.perp() * weave * ai.zz_amplitude;
        if blended.length_squared() > 0.0 {
            return blended.normalize() * speed;
        }
        return blended;
    }

    dir * speed
}

/// Steer every live drone and integrate its position.
pub fn advance_enemies(world: &mut World, time: &Time, core: Vec2, cursor: Vec2, rng: &mut GameRng) {
    for (_entity, (enemy, ai)) in world.query_mut::<(&mut Enemy, &mut Ai)>() {
        if !enemy.alive {
            continue;
        }
        let vel = steer(ai, time.dt, enemy.pos, core, cursor, rng);
        enemy.pos += vel * time.dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.016;

    fn ai_on_wave(wave: u32) -> (Ai, GameRng) {
        let mut rng = GameRng::new(9);
        let ai = Ai::new(Params::ENEMY_BASE_SPEED, wave, &mut rng);
        (ai, rng)
    }

    /// Tick until just past the dodge trigger time with the cursor parked
    /// on the drone.
    fn hold_cursor_close(ai: &mut Ai, pos: Vec2, target: Vec2, rng: &mut GameRng) {
        let ticks = (Params::DODGE_TRIGGER_TIME / DT).ceil() as usize + 1;
        for _ in 0..ticks {
            steer(ai, DT, pos, target, pos, rng);
        }
    }

    #[test]
    fn test_seek_moves_straight_at_target() {
        let (mut ai, mut rng) = ai_on_wave(1);
        let pos = Vec2::new(0.0, 0.0);
        let target = Vec2::new(100.0, 0.0);
        let far_cursor = Vec2::new(0.0, 500.0);
        let vel = steer(&mut ai, DT, pos, target, far_cursor, &mut rng);
        assert_eq!(ai.state, EnemyState::Seek);
        assert!((vel.x - Params::ENEMY_BASE_SPEED).abs() < 1e-3);
        assert!(vel.y.abs() < 1e-3);
    }

    #[test]
    fn test_sustained_cursor_proximity_triggers_dodge() {
        let (mut ai, mut rng) = ai_on_wave(1);
        let pos = Vec2::new(200.0, 200.0);
        let target = Vec2::new(640.0, 360.0);
        hold_cursor_close(&mut ai, pos, target, &mut rng);
        assert_eq!(ai.state, EnemyState::Dodge);

        // Dodge motion is perpendicular to the seek direction.
        let vel = steer(&mut ai, DT, pos, target, pos, &mut rng);
        let seek_dir = (target - pos).normalize();
        assert!(
            vel.normalize().dot(seek_dir).abs() < 1e-3,
            "dodge velocity is perpendicular to the target line"
        );
    }

    #[test]
    fn test_brief_proximity_does_not_trigger_dodge() {
        let (mut ai, mut rng) = ai_on_wave(1);
        let pos = Vec2::new(200.0, 200.0);
        let target = Vec2::new(640.0, 360.0);
        // Close, then far, then close: the clock resets in between.
        for _ in 0..20 {
            steer(&mut ai, DT, pos, target, pos, &mut rng);
        }
        steer(&mut ai, DT, pos, target, Vec2::new(1000.0, 1000.0), &mut rng);
        for _ in 0..20 {
            steer(&mut ai, DT, pos, target, pos, &mut rng);
        }
        assert_eq!(ai.state, EnemyState::Seek, "proximity must be continuous");
    }

    #[test]
    fn test_dodge_returns_to_seek_on_early_waves() {
        let (mut ai, mut rng) = ai_on_wave(1);
        let pos = Vec2::new(200.0, 200.0);
        let target = Vec2::new(640.0, 360.0);
        hold_cursor_close(&mut ai, pos, target, &mut rng);
        assert_eq!(ai.state, EnemyState::Dodge);

        // Run the dodge out with the cursor far away.
        let far = Vec2::new(1200.0, 700.0);
        for _ in 0..((Params::DODGE_DURATION / DT).ceil() as usize + 1) {
            steer(&mut ai, DT, pos, target, far, &mut rng);
        }
        assert_eq!(ai.state, EnemyState::Seek, "wave < 5 exits dodge to Seek");
    }

    #[test]
    fn test_dodge_exits_to_aggressive_on_late_waves() {
        let (mut ai, mut rng) = ai_on_wave(5);
        let pos = Vec2::new(200.0, 200.0);
        let target = Vec2::new(640.0, 360.0);
        hold_cursor_close(&mut ai, pos, target, &mut rng);
        let far = Vec2::new(1200.0, 700.0);
        for _ in 0..((Params::DODGE_DURATION / DT).ceil() as usize + 1) {
            steer(&mut ai, DT, pos, target, far, &mut rng);
        }
        assert_eq!(ai.state, EnemyState::Aggressive);

        // Aggressive speed stays at base despite the zig-zag blend.
        let vel = steer(&mut ai, DT, pos, target, far, &mut rng);
        assert!((vel.length() - Params::ENEMY_BASE_SPEED).abs() < 1e-2);
    }

    #[test]
    fn test_hit_staggers_from_any_state() {
        for wave in [1, 6] {
            let (mut ai, mut rng) = ai_on_wave(wave);
            let pos = Vec2::new(200.0, 200.0);
            let target = Vec2::new(640.0, 360.0);
            hold_cursor_close(&mut ai, pos, target, &mut rng);
            assert_eq!(ai.state, EnemyState::Dodge);

            ai.trigger_stagger();
            let far = Vec2::new(1200.0, 700.0);
            let vel = steer(&mut ai, DT, pos, target, far, &mut rng);
            assert_eq!(ai.state, EnemyState::Stagger, "wave {wave}");
            assert!(
                (vel.length() - Params::ENEMY_BASE_SPEED * Params::STAGGER_FACTOR).abs() < 1e-2,
                "staggered drones slow by the stagger factor"
            );
        }
    }

    #[test]
    fn test_stagger_expires_back_to_seek() {
        let (mut ai, mut rng) = ai_on_wave(1);
        let pos = Vec2::new(200.0, 200.0);
        let target = Vec2::new(640.0, 360.0);
        let far = Vec2::new(1200.0, 700.0);
        ai.trigger_stagger();
        let ticks = (Params::STAGGER_DURATION / DT).ceil() as usize + 2;
        for _ in 0..ticks {
            steer(&mut ai, DT, pos, target, far, &mut rng);
        }
        assert_eq!(ai.state, EnemyState::Seek);
    }

    #[test]
    fn test_repeat_hits_reset_stagger_timer() {
        let (mut ai, _rng) = ai_on_wave(1);
        ai.trigger_stagger();
        ai.stagger_timer = 0.02; // nearly expired
        ai.trigger_stagger();
        assert_eq!(
            ai.stagger_timer,
            Params::STAGGER_DURATION,
            "timer resets, it does not stack"
        );
    }

    #[test]
    fn test_stagger_suppresses_dodge_but_proximity_accumulates() {
        let (mut ai, mut rng) = ai_on_wave(1);
        let pos = Vec2::new(200.0, 200.0);
        let target = Vec2::new(640.0, 360.0);

        // Long stagger with the cursor parked on the drone the whole time.
        ai.stagger_timer = 1.0;
        let ticks = (1.0 / DT) as usize;
        for _ in 0..ticks {
            steer(&mut ai, DT, pos, target, pos, &mut rng);
            assert_ne!(ai.state, EnemyState::Dodge, "no dodge while staggered");
        }
        assert!(
            ai.cursor_close_timer >= Params::DODGE_TRIGGER_TIME,
            "the proximity clock kept running"
        );

        // Once stagger fully expires the saturated clock dodges immediately.
        let mut dodged = false;
        for _ in 0..3 {
            steer(&mut ai, DT, pos, target, pos, &mut rng);
            if ai.state == EnemyState::Dodge {
                dodged = true;
                break;
            }
        }
        assert!(dodged, "dodge can start right after stagger ends");
    }

    #[test]
    fn test_zero_length_to_target_yields_zero_velocity() {
        let (mut ai, mut rng) = ai_on_wave(1);
        let pos = Vec2::new(640.0, 360.0);
        let far = Vec2::new(0.0, 0.0);
        let vel = steer(&mut ai, DT, pos, pos, far, &mut rng);
        assert_eq!(vel, Vec2::ZERO, "no division by a near-zero vector length");
    }

    #[test]
    fn test_advance_enemies_moves_toward_core() {
        let mut world = World::new();
        let mut rng = GameRng::new(11);
        let core = Vec2::new(640.0, 360.0);
        let start = Vec2::new(0.0, 360.0);
        let enemy = Enemy::new(1, start, Params::ENEMY_RADIUS);
        let ai = Ai::new(Params::ENEMY_BASE_SPEED, 1, &mut rng);
        world.spawn((enemy, ai));

        let time = Time::new(0.1, 0.1);
        advance_enemies(&mut world, &time, core, Vec2::new(1200.0, 0.0), &mut rng);

        for (_e, enemy) in world.query::<&Enemy>().iter() {
            assert!(enemy.pos.x > start.x, "drone closed in on the core");
        }
    }
}
