//! Scene timers
//!
//! A [`SceneTimer`] counts down against the owning scene's clock rather than
//! wall time, so it stands still whenever the scene is not being stepped.

/// Countdown measured in scene seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTimer {
    /// Scene time when the timer was (re)started
    pub started_at: f64,
    /// Seconds until the timer expires
    pub duration: f32,
}

impl SceneTimer {
    /// Start a timer at scene time `now` lasting `duration` seconds
    pub fn new(now: f64, duration: f32) -> Self {
        Self {
            started_at: now,
            duration,
        }
    }

    /// Scene time at which the timer expires
    pub fn target(&self) -> f64 {
        self.started_at + f64::from(self.duration)
    }

    /// Signed time past the target: negative while running, zero or more once expired
    pub fn delta(&self, now: f64) -> f64 {
        now - self.target()
    }

    /// Whether the timer has expired at scene time `now`
    pub fn is_expired(&self, now: f64) -> bool {
        self.delta(now) >= 0.0
    }

    /// Seconds left before expiry, never negative
    pub fn remaining(&self, now: f64) -> f64 {
        (-self.delta(now)).max(0.0)
    }

    /// Restart the countdown from `now` with the same duration
    pub fn reset(&mut self, now: f64) {
        self.started_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_timer_not_expired() {
        let timer = SceneTimer::new(0.0, 5.0);
        assert!(!timer.is_expired(2.0));
        assert_relative_eq!(timer.delta(2.0), -3.0);
    }

    #[test]
    fn test_timer_expires_exactly_at_target() {
        let timer = SceneTimer::new(1.0, 2.0);
        assert!(timer.is_expired(3.0));
        assert!(timer.is_expired(6.0));
    }

    #[test]
    fn test_zero_and_negative_duration_expire_immediately() {
        assert!(SceneTimer::new(4.0, 0.0).is_expired(4.0));
        assert!(SceneTimer::new(4.0, -1.0).is_expired(4.0));
    }

    #[test]
    fn test_remaining_time() {
        let timer = SceneTimer::new(0.0, 10.0);
        assert_relative_eq!(timer.remaining(3.0), 7.0);
        assert_relative_eq!(timer.remaining(12.0), 0.0);
    }

    #[test]
    fn test_short_timer_late_in_a_long_scene() {
        let start = 1.0e6;
        let timer = SceneTimer::new(start, 1.0 / 60.0);
        assert!(!timer.is_expired(start));
        assert!(timer.is_expired(start + f64::from(1.0_f32 / 60.0)));
    }

    #[test]
    fn test_reset_restarts_countdown() {
        let mut timer = SceneTimer::new(0.0, 1.0);
        timer.reset(5.0);
        assert!(!timer.is_expired(5.5));
        assert!(timer.is_expired(6.0));
    }
}
