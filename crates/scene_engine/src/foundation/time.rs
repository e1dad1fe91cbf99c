//! Time management utilities

use std::time::Instant;

/// Wall-clock frame timer used by the engine's real-time loop
pub struct FrameClock {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a new clock
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the clock (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.delta_time = elapsed.as_secs_f32();
        self.total_time += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Total elapsed time since clock creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Number of frames measured so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Average FPS since clock creation
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

/// Simulated time of a single scene
///
/// Advances only when the scene is stepped, so scene timers stand still while
/// the scene is paused or not current. Time is accumulated in `f64` so a
/// long-running scene keeps counting small frame deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SceneClock {
    elapsed: f64,
    frame_count: u64,
}

impl SceneClock {
    /// Create a clock at time zero
    pub const fn new() -> Self {
        Self {
            elapsed: 0.0,
            frame_count: 0,
        }
    }

    /// Advance by one frame of `delta_time` seconds; negative deltas count as zero
    pub fn advance(&mut self, delta_time: f32) {
        self.elapsed += f64::from(delta_time.max(0.0));
        self.frame_count += 1;
    }

    /// Seconds of scene time elapsed
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Frames stepped
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
