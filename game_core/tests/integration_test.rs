//! End-to-end: synthetic hand landmarks through the gesture pipeline into
//! the simulation, one tick at a time.

use game_core::*;
use glam::{Vec2, Vec3};
use vision_core::{
    CursorSmoother, Gesture, HandLandmarks, TwoHandEngine, CONFIRM_FRAMES, INDEX_PIP, INDEX_TIP,
    LANDMARK_COUNT, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP, RING_PIP, RING_TIP, WRIST,
};

const DT: f32 = 1.0 / 60.0;

/// Build a hand at `at` (normalized coords) posed as the given gesture.
fn hand_posed(gesture: Gesture, at: Vec2) -> HandLandmarks {
    let fingers = match gesture {
        Gesture::Shoot => [true, true, true, true],
        Gesture::Shield => [false, false, false, false],
        Gesture::Aim => [true, false, false, false],
        Gesture::None => [true, true, false, false],
    };
    let mut points = [Vec3::new(at.x, at.y, 0.0); LANDMARK_COUNT];
    points[WRIST] = Vec3::new(at.x, (at.y + 0.2).min(1.0), 0.0);
    let pairs = [
        (INDEX_TIP, INDEX_PIP),
        (MIDDLE_TIP, MIDDLE_PIP),
        (RING_TIP, RING_PIP),
        (PINKY_TIP, PINKY_PIP),
    ];
    for (finger, (tip, pip)) in pairs.iter().enumerate() {
        points[*pip] = Vec3::new(at.x, at.y + 0.05, 0.0);
        let tip_y = if fingers[finger] {
            at.y
        } else {
            at.y + 0.1
        };
        points[*tip] = Vec3::new(at.x, tip_y, 0.0);
    }
    HandLandmarks::new(points)
}

struct Harness {
    engine: TwoHandEngine,
    smoother: CursorSmoother,
    world: hecs::World,
    time: Time,
    config: Config,
    player: Player,
    waves: WaveState,
    difficulty: DifficultyController,
    bullets: BulletPool,
    particles: ParticleSystem,
    shake: CameraShake,
    analytics: Analytics,
    score: Score,
    events: Events,
    rng: GameRng,
}

impl Harness {
    fn new(seed: u64) -> Self {
        let config = Config::new();
        Self {
            engine: TwoHandEngine::new(),
            smoother: CursorSmoother::new(config.screen_width, config.screen_height),
            world: hecs::World::new(),
            time: Time::new(DT, 0.0),
            player: Player::new(),
            waves: WaveState::new(),
            difficulty: DifficultyController::new(),
            bullets: BulletPool::new(&config),
            particles: ParticleSystem::new(config.max_particles),
            shake: CameraShake::new(),
            analytics: Analytics::new(),
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            config,
        }
    }

    /// One frame: tracker output through the gesture pipeline, then a
    /// simulation tick.
    fn tick(&mut self, hand: Option<&HandLandmarks>) {
        let (gesture, aim) = self.engine.update([hand, None]);
        let cursor = match aim {
            Some(aim) => self.smoother.update(aim),
            None => self.smoother.position(), // aim freezes
        };
        let input = FrameInput {
            gesture,
            cursor,
            hand_visible: hand.is_some(),
        };
        self.time.dt = DT;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &input,
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
    }

    fn live_enemies(&self) -> usize {
        self.world
            .query::<&Enemy>()
            .iter()
            .filter(|(_e, enemy)| enemy.alive)
            .count()
    }
}

#[test]
fn test_shoot_gesture_produces_exactly_one_bullet_and_kills() {
    let mut harness = Harness::new(7);

    // Wave 1, one drone approaching from the right along the gun line.
    let enemy_pos = harness.config.core_pos() + Vec2::new(300.0, 0.0);
    spawn_enemy(
        &mut harness.world,
        1,
        enemy_pos,
        0.0, // parked: this test pins the geometry, not the chase
        &harness.config,
        &mut harness.rng,
    );

    // Open palm aimed at the drone. The first two frames only build the
    // debounce run - nothing may fire.
    let aim_norm = Vec2::new(
        enemy_pos.x / harness.config.screen_width,
        enemy_pos.y / harness.config.screen_height,
    );
    let palm = hand_posed(Gesture::Shoot, aim_norm);
    for _ in 0..CONFIRM_FRAMES - 1 {
        harness.tick(Some(&palm));
        assert_eq!(
            harness.bullets.active_count(),
            0,
            "unconfirmed gesture must not fire"
        );
    }

    // Third frame confirms Shoot: exactly one bullet leaves the muzzle.
    harness.tick(Some(&palm));
    assert_eq!(harness.bullets.active_count(), 1);
    assert!(harness.events.shot_fired);
    assert_eq!(harness.player.ammo, Params::PLAYER_MAX_AMMO - 1);

    // Keep the palm open until the bullet crosses the drone.
    let mut killed_tick_events = None;
    for _ in 0..60 {
        harness.tick(Some(&palm));
        if !harness.events.kills.is_empty() {
            killed_tick_events = Some((
                harness.events.kills.len(),
                harness.waves.total_kills,
                harness.live_enemies(),
            ));
            break;
        }
    }

    let (kills_in_tick, total_kills, live_after) =
        killed_tick_events.expect("bullet should reach the drone well within a second");
    assert_eq!(kills_in_tick, 1);
    assert_eq!(total_kills, 1, "kill counted in the same tick as the hit");
    assert_eq!(live_after, 0, "drone removed in the same tick");
    assert_eq!(harness.score.points, Params::KILL_SCORE, "level-1 kill score");
    assert_eq!(harness.analytics.total_kills, 1);
}

#[test]
fn test_fist_raises_shield_and_blocks_contact_damage() {
    let mut harness = Harness::new(11);

    let fist = hand_posed(Gesture::Shield, Vec2::new(0.5, 0.5));
    for _ in 0..CONFIRM_FRAMES {
        harness.tick(Some(&fist));
    }
    assert!(harness.player.shield_active, "confirmed fist raises the shield");

    // A drone dropped on the core is consumed, but the shield eats the hit.
    spawn_enemy(
        &mut harness.world,
        1,
        harness.config.core_pos(),
        harness.config.enemy_base_speed,
        &harness.config,
        &mut harness.rng,
    );
    harness.tick(Some(&fist));

    assert_eq!(harness.player.health, Params::PLAYER_MAX_HEALTH);
    assert!(harness.events.shield_blocked);
    assert!(!harness.events.player_damaged);
    assert_eq!(
        harness.live_enemies(),
        0,
        "shielded contact still consumes the drone"
    );
}

#[test]
fn test_hand_dropout_freezes_cursor_and_never_panics() {
    let mut harness = Harness::new(13);

    let palm = hand_posed(Gesture::Shoot, Vec2::new(0.8, 0.3));
    for _ in 0..10 {
        harness.tick(Some(&palm));
    }
    let frozen = harness.smoother.position();

    // Tracker drops out for a long stretch: the sim must keep running,
    // spawning and advancing drones, with the cursor frozen in place.
    for _ in 0..600 {
        harness.tick(None);
        assert_eq!(harness.smoother.position(), frozen, "aim freezes");
    }
    assert!(
        harness.analytics.survival_time > 9.0,
        "ten seconds simulated without input"
    );

    // Flickering tracker output is equally safe.
    for i in 0..120 {
        let hand = if i % 3 == 0 { Some(&palm) } else { None };
        harness.tick(hand);
    }
}

#[test]
fn test_unattended_session_eventually_breaches_the_core() {
    let config = Config::new();
    let mut session = Session::new(config, 23);
    session.apply(SessionAction::Start);
    session.apply(SessionAction::CalibrationDone);
    assert!(session.is_playing());

    // Nobody defends: drones spawn, march in, and grind the core down.
    let input = FrameInput::absent(session.config.core_pos());
    for _ in 0..36_000 {
        session.advance(DT, &input);
        if session.state == SessionState::GameOver {
            break;
        }
    }
    assert_eq!(
        session.state,
        SessionState::GameOver,
        "an undefended core falls within ten simulated minutes"
    );
    assert!(!session.player.alive);
    let summary = session.analytics.summary();
    assert_eq!(summary.total_shots, 0);
    assert!(summary.survival_time > 0.0);
}
