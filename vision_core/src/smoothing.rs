use glam::Vec2;

/// EMA weight for new samples; lower is smoother, higher is snappier.
pub const SMOOTHING_ALPHA: f32 = 0.35;
/// Minimum movement (pixels) before the committed cursor moves at all.
pub const CURSOR_DEADZONE: f32 = 5.0;

/// Maps normalized aim points to a stable screen-space cursor.
///
/// Three stages per update: exponential smoothing, dead-zone suppression of
/// micro-jitter, and a hard clamp to screen bounds. The smoother is only
/// fed while a hand is visible, so the cursor freezes in place (rather than
/// drifting back to center) whenever tracking drops out.
#[derive(Debug, Clone, Copy)]
pub struct CursorSmoother {
    alpha: f32,
    deadzone: f32,
    width: f32,
    height: f32,
    smoothed: Vec2,
}

impl CursorSmoother {
    /// Cursor starts at screen center.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            alpha: SMOOTHING_ALPHA,
            deadzone: CURSOR_DEADZONE,
            width,
            height,
            smoothed: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Feed a normalized [0,1] aim point; returns the committed cursor in
    /// screen pixels.
    pub fn update(&mut self, norm: Vec2) -> Vec2 {
        let raw = Vec2::new(norm.x * self.width, norm.y * self.height);
        let candidate = raw * self.alpha + self.smoothed * (1.0 - self.alpha);

        // Sub-deadzone movement is discarded entirely.
        if candidate.distance(self.smoothed) > self.deadzone {
            self.smoothed = candidate;
        }
        self.position()
    }

    /// Last committed position, clamped, without consuming a new sample.
    pub fn position(&self) -> Vec2 {
        Vec2::new(
            self.smoothed.x.clamp(0.0, self.width - 1.0),
            self.smoothed.y.clamp(0.0, self.height - 1.0),
        )
    }

    /// Hard-reset to a screen position (defaults to center).
    pub fn reset(&mut self, pos: Option<Vec2>) {
        self.smoothed = pos.unwrap_or(Vec2::new(self.width / 2.0, self.height / 2.0));
    }
}
