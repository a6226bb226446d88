/// In-memory session telemetry: shot/hit/kill totals, survival time, and
/// spawn-to-kill reaction sampling. Nothing here touches disk.
#[derive(Debug, Clone, Default)]
pub struct Analytics {
    pub total_shots: u32,
    pub total_hits: u32,
    pub total_kills: u32,
    pub survival_time: f32,
    pub current_difficulty: u32,
    pub reaction_times: Vec<f32>,
    last_enemy_spawn: Option<f32>,
}

impl Analytics {
    pub fn new() -> Self {
        Self {
            current_difficulty: 1,
            ..Self::default()
        }
    }

    pub fn record_shot(&mut self) {
        self.total_shots += 1;
    }

    pub fn record_hit(&mut self) {
        self.total_hits += 1;
    }

    /// Marks the most recent spawn; the next kill samples the elapsed time
    /// as a reaction measurement.
    pub fn record_enemy_spawn(&mut self, now: f32) {
        self.last_enemy_spawn = Some(now);
    }

    pub fn record_kill(&mut self, now: f32) {
        self.total_kills += 1;
        if let Some(spawned_at) = self.last_enemy_spawn.take() {
            self.reaction_times.push(now - spawned_at);
        }
    }

    pub fn update(&mut self, dt: f32, difficulty: u32) {
        self.survival_time += dt;
        self.current_difficulty = difficulty;
    }

    pub fn accuracy(&self) -> f32 {
        if self.total_shots == 0 {
            return 0.0;
        }
        self.total_hits as f32 / self.total_shots as f32
    }

    pub fn accuracy_pct(&self) -> u32 {
        (self.accuracy() * 100.0) as u32
    }

    pub fn avg_reaction_ms(&self) -> u32 {
        if self.reaction_times.is_empty() {
            return 0;
        }
        let avg = self.reaction_times.iter().sum::<f32>() / self.reaction_times.len() as f32;
        (avg * 1000.0) as u32
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total_shots: self.total_shots,
            total_hits: self.total_hits,
            total_kills: self.total_kills,
            accuracy_pct: self.accuracy_pct(),
            survival_time: self.survival_time,
            avg_reaction_ms: self.avg_reaction_ms(),
            difficulty: self.current_difficulty,
        }
    }
}

/// Game-over report snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total_shots: u32,
    pub total_hits: u32,
    pub total_kills: u32,
    pub accuracy_pct: u32,
    pub survival_time: f32,
    pub avg_reaction_ms: u32,
    pub difficulty: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_zero_without_shots() {
        let analytics = Analytics::new();
        assert_eq!(analytics.accuracy(), 0.0);
        assert_eq!(analytics.accuracy_pct(), 0);
    }

    #[test]
    fn test_accuracy_percentage() {
        let mut analytics = Analytics::new();
        for _ in 0..8 {
            analytics.record_shot();
        }
        for _ in 0..6 {
            analytics.record_hit();
        }
        assert_eq!(analytics.accuracy_pct(), 75);
    }

    #[test]
    fn test_reaction_time_sampled_spawn_to_kill() {
        let mut analytics = Analytics::new();
        analytics.record_enemy_spawn(10.0);
        analytics.record_kill(10.4);
        assert_eq!(analytics.avg_reaction_ms(), 400);

        // A kill without a fresh spawn mark adds no sample.
        analytics.record_kill(11.0);
        assert_eq!(analytics.reaction_times.len(), 1);
        assert_eq!(analytics.total_kills, 2);
    }

    #[test]
    fn test_survival_time_accumulates() {
        let mut analytics = Analytics::new();
        for _ in 0..10 {
            analytics.update(0.1, 3);
        }
        assert!((analytics.survival_time - 1.0).abs() < 1e-5);
        assert_eq!(analytics.current_difficulty, 3);
    }

    #[test]
    fn test_summary_snapshot() {
        let mut analytics = Analytics::new();
        analytics.record_shot();
        analytics.record_hit();
        analytics.update(2.5, 4);
        let summary = analytics.summary();
        assert_eq!(summary.total_shots, 1);
        assert_eq!(summary.accuracy_pct, 100);
        assert_eq!(summary.difficulty, 4);
    }
}
