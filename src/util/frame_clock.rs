use web_time::Instant;

/// Measures elapsed time between render ticks for the per-frame update,
/// with a smoothed FPS readout.
///
/// Hosts that already track frame timing can pass their own elapsed
/// milliseconds instead; this exists so the controller never reaches for
/// platform clocks itself.
pub struct FrameClock {
    /// Last tick timestamp.
    last_tick: Instant,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a clock ticking from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Milliseconds elapsed since the previous tick. Call once per frame
    /// and feed the result to the controller's update.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;

        let dt_ms = elapsed.as_secs_f32() * 1000.0;
        if dt_ms > 0.0 {
            let instant_fps = 1000.0 / dt_ms;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        dt_ms
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_is_non_negative_and_advances() {
        let mut clock = FrameClock::new();
        let dt = clock.tick();
        assert!(dt >= 0.0);
        let dt = clock.tick();
        assert!(dt >= 0.0);
        assert!(clock.fps() > 0.0);
    }
}
