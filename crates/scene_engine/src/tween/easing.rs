//! Easing curves

use crate::foundation::math::constants::{HALF_PI, PI};

/// Easing curve applied to a tween's normalized progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed
    #[default]
    Linear,
    /// Accelerate from zero
    QuadraticIn,
    /// Decelerate to zero
    QuadraticOut,
    /// Accelerate then decelerate
    QuadraticInOut,
    /// Cubic acceleration
    CubicIn,
    /// Cubic deceleration
    CubicOut,
    /// Cubic acceleration then deceleration
    CubicInOut,
    /// Sinusoidal acceleration
    SineIn,
    /// Sinusoidal deceleration
    SineOut,
    /// Sinusoidal acceleration then deceleration
    SineInOut,
    /// Overshoot the end value slightly, then settle
    BackOut,
}

impl Easing {
    /// Map progress `t` in `0.0..=1.0` to eased progress
    ///
    /// Input is clamped; every curve maps 0 to 0 and 1 to 1.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => t * (2.0 - t),
            Self::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 * t - 2.0;
                    0.5 * u * u * u + 1.0
                }
            }
            Self::SineIn => 1.0 - (t * HALF_PI).cos(),
            Self::SineOut => (t * HALF_PI).sin(),
            Self::SineInOut => 0.5 * (1.0 - (PI * t).cos()),
            Self::BackOut => {
                const OVERSHOOT: f32 = 1.701_58;
                let u = t - 1.0;
                u * u * ((OVERSHOOT + 1.0) * u + OVERSHOOT) + 1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ALL: [Easing; 11] = [
        Easing::Linear,
        Easing::QuadraticIn,
        Easing::QuadraticOut,
        Easing::QuadraticInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::BackOut,
    ];

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in ALL {
            assert_abs_diff_eq!(easing.apply(0.0), 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(easing.apply(1.0), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_abs_diff_eq!(Easing::QuadraticIn.apply(2.0), 1.0);
        assert_abs_diff_eq!(Easing::QuadraticIn.apply(-1.0), 0.0);
    }

    #[test]
    fn test_in_out_curves_hit_midpoint() {
        assert_abs_diff_eq!(Easing::QuadraticInOut.apply(0.5), 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(Easing::SineInOut.apply(0.5), 0.5, epsilon = 1e-5);
        assert!(Easing::QuadraticIn.apply(0.5) < 0.5);
        assert!(Easing::QuadraticOut.apply(0.5) > 0.5);
    }

    #[test]
    fn test_back_out_overshoots() {
        assert!(Easing::BackOut.apply(0.8) > 1.0);
    }
}
