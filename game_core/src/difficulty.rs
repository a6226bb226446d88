use crate::config::Params;

/// Adaptive difficulty: a 1–10 level re-evaluated from a rolling
/// performance window every `DIFFICULTY_EVAL_INTERVAL` seconds of
/// simulation time.
///
/// Good play (accuracy above 70% with little damage taken) pushes the level
/// up; poor accuracy pulls it down. The level feeds enemy speed and the
/// spawn interval; the health multiplier is derived alongside them but
/// unused while every drone carries a single hit point.
#[derive(Debug, Clone, Copy)]
pub struct DifficultyController {
    pub level: u32,
    eval_timer: f32,
    shots_window: u32,
    hits_window: u32,
    damage_window: f32,
}

impl DifficultyController {
    pub fn new() -> Self {
        Self {
            level: Params::DIFFICULTY_MIN,
            eval_timer: 0.0,
            shots_window: 0,
            hits_window: 0,
            damage_window: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.eval_timer += dt;
        if self.eval_timer >= Params::DIFFICULTY_EVAL_INTERVAL {
            self.eval_timer -= Params::DIFFICULTY_EVAL_INTERVAL;
            self.evaluate();
        }
    }

    pub fn record_shot(&mut self) {
        self.shots_window += 1;
    }

    pub fn record_hit(&mut self) {
        self.hits_window += 1;
    }

    pub fn record_damage(&mut self, amount: f32) {
        self.damage_window += amount;
    }

    pub fn speed_multiplier(&self) -> f32 {
        1.0 + (self.level - 1) as f32 * Params::DIFFICULTY_SPEED_STEP
    }

    /// Derived but inert while enemies are one-shot kills.
    pub fn health_multiplier(&self) -> f32 {
        1.0 + (self.level - 1) as f32 * Params::DIFFICULTY_HEALTH_STEP
    }

    pub fn spawn_interval(&self, base: f32) -> f32 {
        let reduction = (self.level - 1) as f32 * Params::DIFFICULTY_SPAWN_STEP;
        (base - reduction).max(Params::SPAWN_INTERVAL_FLOOR)
    }

    fn evaluate(&mut self) {
        // Neutral accuracy when the window saw no shots at all.
        let accuracy = if self.shots_window > 0 {
            self.hits_window as f32 / self.shots_window as f32
        } else {
            0.5
        };

        if accuracy > Params::ACCURACY_RAISE && self.damage_window < Params::DAMAGE_RAISE_LIMIT {
            self.level = (self.level + 1).min(Params::DIFFICULTY_MAX);
        } else if accuracy < Params::ACCURACY_LOWER {
            self.level = (self.level - 1).max(Params::DIFFICULTY_MIN);
        }

        self.shots_window = 0;
        self.hits_window = 0;
        self.damage_window = 0.0;
    }
}

impl Default for DifficultyController {
    fn default() -> Self {
        Self::new()
    }
}
