use anyhow::Result;
use glam::{Vec2, Vec3};
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};

use game_core::{
    Config, Enemy, FrameInput, MusicIntensity, Session, SessionState,
};
use vision_core::{
    CursorSmoother, Gesture, HandLandmarks, TwoHandEngine, INDEX_PIP, INDEX_TIP, LANDMARK_COUNT,
    MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP, RING_PIP, RING_TIP, WRIST,
};

const DT: f32 = 1.0 / 60.0;

/// Raise the shield when a drone closes within this distance of the core.
const PANIC_DISTANCE: f32 = 120.0;

/// Build a synthetic hand posed as `gesture`, index tip at `at`
/// (normalized image coordinates).
fn posed_hand(gesture: Gesture, at: Vec2) -> HandLandmarks {
    let fingers = match gesture {
        Gesture::Shoot => [true, true, true, true],
        Gesture::Shield => [false, false, false, false],
        Gesture::Aim => [true, false, false, false],
        Gesture::None => [false, true, true, false],
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
        let tip_y = if fingers[finger] { at.y } else { at.y + 0.1 };
        points[*tip] = Vec3::new(at.x, tip_y, 0.0);
    }
    HandLandmarks::new(points)
}

/// Scripted stand-in for a human in front of the camera: tracks the most
/// threatening drone, panic-shields when one slips through, and loses
/// tracking now and then the way real webcam sessions do.
struct Pilot {
    rng: rand::rngs::StdRng,
    dropout_until: u32,
    next_dropout: u32,
}

impl Pilot {
    fn new(seed: u64) -> Self {
        Self {
            rng: rand::rngs::StdRng::seed_from_u64(seed),
            dropout_until: 0,
            next_dropout: 900,
        }
    }

    fn frame(&mut self, tick: u32, session: &Session) -> Option<HandLandmarks> {
        // Scheduled tracking dropouts, roughly every 10-20 seconds.
        if tick >= self.next_dropout {
            self.dropout_until = tick + self.rng.gen_range(20..60);
            self.next_dropout = tick + self.rng.gen_range(600..1200);
        }
        if tick < self.dropout_until {
            return None;
        }

        match session.state {
            SessionState::Menu => Some(posed_hand(Gesture::Aim, Vec2::new(0.5, 0.4))),
            SessionState::Calibration => {
                // Sweep the cursor while the countdown runs.
                let angle = tick as f32 * 0.05;
                let at = Vec2::new(0.5 + 0.3 * angle.cos(), 0.5 + 0.3 * angle.sin());
                Some(posed_hand(Gesture::Aim, at))
            }
            SessionState::Playing => Some(self.playing_pose(session)),
            SessionState::GameOver => None,
        }
    }

    fn playing_pose(&mut self, session: &Session) -> HandLandmarks {
        let core = session.config.core_pos();
        let mut nearest: Option<(f32, Vec2)> = None;
        for (_e, enemy) in session.world.query::<&Enemy>().iter() {
            if !enemy.alive {
                continue;
            }
            let dist = enemy.pos.distance(core);
            if nearest.map_or(true, |(best, _)| dist < best) {
                nearest = Some((dist, enemy.pos));
            }
        }

        let shield_ready =
            !session.player.shield_active && session.player.shield_cooldown <= 0.0;

        match nearest {
            Some((dist, _)) if dist < PANIC_DISTANCE && shield_ready => {
                posed_hand(Gesture::Shield, Vec2::new(0.5, 0.5))
            }
            Some((_, pos)) => {
                // Aim at the drone with a little human wobble.
                let jitter = Vec2::new(
                    self.rng.gen_range(-0.008..0.008),
                    self.rng.gen_range(-0.008..0.008),
                );
                let at = Vec2::new(
                    pos.x / session.config.screen_width,
                    pos.y / session.config.screen_height,
                ) + jitter;
                posed_hand(Gesture::Shoot, at.clamp(Vec2::ZERO, Vec2::ONE))
            }
            None => posed_hand(Gesture::Aim, Vec2::new(0.5, 0.35)),
        }
    }
}

/// Run one headless session to game over (or the tick budget) and print
/// the analytics report.
pub fn run_session(config: Config, seed: u64, ticks: u32) -> Result<()> {
    info!("session start: seed={seed}, budget={ticks} ticks");

    let mut session = Session::new(config.clone(), seed);
    let mut engine = TwoHandEngine::new();
    let mut smoother = CursorSmoother::new(config.screen_width, config.screen_height);
    let mut pilot = Pilot::new(seed ^ 0x9E37_79B9);

    let mut hand_was_visible = false;
    let mut music = MusicIntensity::Ambient;

    for tick in 0..ticks {
        let hand = pilot.frame(tick, &session);
        let (gesture, aim) = engine.update([hand.as_ref(), None]);
        let cursor = match aim {
            Some(aim) => smoother.update(aim),
            None => smoother.position(), // aim freezes while tracking is lost
        };

        let visible = hand.is_some();
        if visible != hand_was_visible {
            if visible {
                debug!("tick {tick}: hand reacquired");
            } else {
                warn!("tick {tick}: hand lost, aim frozen at {cursor:?}");
            }
            hand_was_visible = visible;
        }

        let input = FrameInput {
            gesture,
            cursor,
            hand_visible: visible,
        };
        session.advance(DT, &input);

        let events = &session.events;
        if events.shot_fired {
            debug!("tick {tick}: shot fired ({} rounds left)", session.player.ammo);
        }
        for kill in &events.kills {
            info!("tick {tick}: drone destroyed at {kill:?}, score {}", session.score.points);
        }
        if events.player_damaged {
            info!(
                "tick {tick}: core hit, {} health remaining",
                session.player.health
            );
        }
        if events.shield_blocked {
            info!("tick {tick}: shield absorbed a contact");
        }
        if events.reload_started {
            debug!("tick {tick}: reloading");
        }
        if let Some(wave) = events.wave_changed {
            info!(
                "tick {tick}: wave {wave} begins (difficulty {})",
                session.difficulty.level
            );
        }
        let now_playing = session.music();
        if now_playing != music {
            info!("tick {tick}: music intensity -> {now_playing:?}");
            music = now_playing;
        }

        if session.state == SessionState::GameOver {
            info!("tick {tick}: core breached");
            break;
        }
    }

    let summary = session.analytics.summary();
    println!("── session report ──────────────────────────");
    println!("state            {:?}", session.state);
    println!("wave reached     {}", session.waves.wave);
    println!("score            {}", session.score.points);
    println!("kills            {}", summary.total_kills);
    println!(
        "accuracy         {}% ({}/{} shots)",
        summary.accuracy_pct, summary.total_hits, summary.total_shots
    );
    println!("avg reaction     {} ms", summary.avg_reaction_ms);
    println!("difficulty       {}", summary.difficulty);
    println!("survival time    {:.1}s", summary.survival_time);
    Ok(())
}
