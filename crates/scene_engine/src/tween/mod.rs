//! Property tweens
//!
//! A [`Tween`] animates one or more numeric properties of a stage node from
//! their current values to end values over a duration. Start values are
//! captured on the first step after the delay, so a tween created now picks up
//! whatever the node looks like when it actually starts.

mod easing;

pub use easing::Easing;

use crate::foundation::collections::{NodeKey, TweenId};
use crate::foundation::math::lerp;
use crate::stage::Stage;
use std::fmt;

/// Animatable property of a [`DisplayObject`](crate::stage::DisplayObject)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenProperty {
    /// Horizontal position
    X,
    /// Vertical position
    Y,
    /// Horizontal scale
    ScaleX,
    /// Vertical scale
    ScaleY,
    /// Rotation in radians
    Rotation,
    /// Opacity
    Alpha,
}

/// Callback run when a tween completes
pub type CompleteCallback = Box<dyn FnOnce(&mut Stage)>;

/// Optional tween parameters
pub struct TweenSettings {
    /// Seconds to wait before the tween starts moving
    pub delay: f32,

    /// Easing curve
    pub easing: Easing,

    /// Extra passes after the first one
    pub repeat: u32,

    /// Alternate direction on every repeat
    pub yoyo: bool,

    /// Runs once when the tween completes or is stopped with completion
    pub on_complete: Option<CompleteCallback>,
}

impl Default for TweenSettings {
    fn default() -> Self {
        Self {
            delay: 0.0,
            easing: Easing::Linear,
            repeat: 0,
            yoyo: false,
            on_complete: None,
        }
    }
}

impl fmt::Debug for TweenSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweenSettings")
            .field("delay", &self.delay)
            .field("easing", &self.easing)
            .field("repeat", &self.repeat)
            .field("yoyo", &self.yoyo)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl TweenSettings {
    /// Set the start delay
    pub fn with_delay(mut self, seconds: f32) -> Self {
        self.delay = seconds;
        self
    }

    /// Set the easing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Repeat the tween `count` extra times
    pub fn with_repeat(mut self, count: u32) -> Self {
        self.repeat = count;
        self
    }

    /// Alternate direction on each repeat
    pub fn with_yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    /// Run `callback` when the tween completes
    pub fn on_complete(mut self, callback: impl FnOnce(&mut Stage) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }
}

#[derive(Debug, Clone, Copy)]
struct Channel {
    property: TweenProperty,
    start: f32,
    end: f32,
}

/// An animation of stage node properties
pub struct Tween {
    id: TweenId,
    target: NodeKey,
    channels: Vec<Channel>,
    started: bool,
    duration: f32,
    elapsed: f32,
    delay_remaining: f32,
    easing: Easing,
    repeats_left: u32,
    yoyo: bool,
    reversed: bool,
    paused: bool,
    complete: bool,
    on_complete: Option<CompleteCallback>,
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("id", &self.id)
            .field("target", &self.target)
            .field("channels", &self.channels)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .field("paused", &self.paused)
            .field("complete", &self.complete)
            .finish_non_exhaustive()
    }
}

impl Tween {
    /// Create a tween of `target` towards `props` over `duration` seconds
    pub fn new(
        id: TweenId,
        target: NodeKey,
        props: &[(TweenProperty, f32)],
        duration: f32,
        settings: TweenSettings,
    ) -> Self {
        let channels = props
            .iter()
            .map(|&(property, end)| Channel { property, start: end, end })
            .collect();

        Self {
            id,
            target,
            channels,
            started: false,
            duration: duration.max(0.0),
            elapsed: 0.0,
            delay_remaining: settings.delay.max(0.0),
            easing: settings.easing,
            repeats_left: settings.repeat,
            yoyo: settings.yoyo,
            reversed: false,
            paused: false,
            complete: false,
            on_complete: settings.on_complete,
        }
    }

    /// Handle of this tween
    pub const fn id(&self) -> TweenId {
        self.id
    }

    /// Node this tween animates
    pub const fn target(&self) -> NodeKey {
        self.target
    }

    /// Whether the tween has finished or was stopped
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Whether the tween is paused
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Normalized progress of the current pass
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            if self.started { 1.0 } else { 0.0 }
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// Advance the tween by `delta_time` seconds, writing the new values to `stage`
    pub fn update(&mut self, delta_time: f32, stage: &mut Stage) {
        if self.complete || self.paused {
            return;
        }

        let mut delta_time = delta_time.max(0.0);
        if self.delay_remaining > 0.0 {
            self.delay_remaining -= delta_time;
            if self.delay_remaining > 0.0 {
                return;
            }
            delta_time = -self.delay_remaining;
            self.delay_remaining = 0.0;
        }

        let Some(object) = stage.get_mut(self.target) else {
            log::debug!("{} lost its target node, completing", self.id);
            self.complete = true;
            return;
        };

        if !self.started {
            for channel in &mut self.channels {
                channel.start = object.property(channel.property);
            }
            self.started = true;
        }

        self.elapsed += delta_time;
        let t = self.progress();
        let eased = self.easing.apply(if self.reversed { 1.0 - t } else { t });
        for channel in &self.channels {
            object.set_property(channel.property, lerp(channel.start, channel.end, eased));
        }

        if t >= 1.0 {
            if self.repeats_left > 0 {
                self.repeats_left -= 1;
                self.elapsed = (self.elapsed - self.duration).max(0.0);
                if self.yoyo {
                    self.reversed = !self.reversed;
                }
            } else {
                self.finish(stage);
            }
        }
    }

    /// Stop the tween
    ///
    /// With `do_complete` the target jumps to the values it would have ended on
    /// after every remaining pass, and the completion callback runs. For a yoyo
    /// tween that can be the start values. Either way the tween is complete
    /// afterwards.
    pub fn stop(&mut self, do_complete: bool, stage: &mut Stage) {
        if self.complete {
            return;
        }
        if do_complete {
            if let Some(object) = stage.get_mut(self.target) {
                if !self.started {
                    for channel in &mut self.channels {
                        channel.start = object.property(channel.property);
                    }
                    self.started = true;
                }
                let ends_reversed = self.reversed ^ (self.yoyo && self.repeats_left % 2 == 1);
                for channel in &self.channels {
                    let value = if ends_reversed { channel.start } else { channel.end };
                    object.set_property(channel.property, value);
                }
            }
            self.finish(stage);
        } else {
            self.complete = true;
        }
    }

    /// Pause the tween
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume a paused tween
    pub fn resume(&mut self) {
        self.paused = false;
    }

    fn finish(&mut self, stage: &mut Stage) {
        self.complete = true;
        if let Some(callback) = self.on_complete.take() {
            callback(stage);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::collections::IdAllocator;
    use crate::stage::DisplayObject;
    use approx::assert_relative_eq;

    fn setup() -> (Stage, NodeKey, IdAllocator) {
        let mut stage = Stage::new();
        let node = stage.add_child(DisplayObject::at(0.0, 0.0));
        (stage, node, IdAllocator::new())
    }

    fn x_of(stage: &Stage, node: NodeKey) -> f32 {
        stage.get(node).map_or(f32::NAN, |o| o.position.x)
    }

    #[test]
    fn test_linear_progress() {
        let (mut stage, node, mut ids) = setup();
        let mut tween = Tween::new(ids.tween(), node, &[(TweenProperty::X, 100.0)], 2.0, TweenSettings::default());

        tween.update(0.5, &mut stage);
        assert_relative_eq!(x_of(&stage, node), 25.0);

        tween.update(1.5, &mut stage);
        assert_relative_eq!(x_of(&stage, node), 100.0);
        assert!(tween.is_complete());
    }

    #[test]
    fn test_start_values_captured_after_delay() {
        let (mut stage, node, mut ids) = setup();
        let settings = TweenSettings::default().with_delay(1.0);
        let mut tween = Tween::new(ids.tween(), node, &[(TweenProperty::X, 20.0)], 1.0, settings);

        tween.update(0.5, &mut stage);
        assert_relative_eq!(x_of(&stage, node), 0.0);

        // Moved by someone else before the tween starts
        if let Some(object) = stage.get_mut(node) {
            object.position.x = 10.0;
        }

        // 0.5s finishes the delay, the remaining 0.5s is animation time
        tween.update(1.0, &mut stage);
        assert_relative_eq!(x_of(&stage, node), 15.0);
    }

    #[test]
    fn test_pause_and_resume() {
        let (mut stage, node, mut ids) = setup();
        let mut tween = Tween::new(ids.tween(), node, &[(TweenProperty::X, 10.0)], 1.0, TweenSettings::default());

        tween.pause();
        tween.update(0.5, &mut stage);
        assert_relative_eq!(x_of(&stage, node), 0.0);

        tween.resume();
        tween.update(0.5, &mut stage);
        assert_relative_eq!(x_of(&stage, node), 5.0);
    }

    #[test]
    fn test_stop_with_completion_jumps_to_end() {
        let (mut stage, node, mut ids) = setup();
        let settings = TweenSettings::default().on_complete(|stage| {
            stage.set_interactive(false);
        });
        let mut tween = Tween::new(ids.tween(), node, &[(TweenProperty::Alpha, 0.0)], 1.0, settings);

        tween.stop(true, &mut stage);
        assert!(tween.is_complete());
        assert_relative_eq!(stage.get(node).map_or(1.0, |o| o.alpha), 0.0);
        assert!(!stage.is_interactive());
    }

    #[test]
    fn test_stop_without_completion_keeps_values() {
        let (mut stage, node, mut ids) = setup();
        let mut tween = Tween::new(ids.tween(), node, &[(TweenProperty::X, 10.0)], 1.0, TweenSettings::default());

        tween.update(0.5, &mut stage);
        tween.stop(false, &mut stage);
        tween.update(0.5, &mut stage);
        assert!(tween.is_complete());
        assert_relative_eq!(x_of(&stage, node), 5.0);
    }

    #[test]
    fn test_yoyo_repeat_returns_to_start() {
        let (mut stage, node, mut ids) = setup();
        let settings = TweenSettings::default().with_repeat(1).with_yoyo(true);
        let mut tween = Tween::new(ids.tween(), node, &[(TweenProperty::X, 10.0)], 1.0, settings);

        tween.update(1.0, &mut stage);
        assert_relative_eq!(x_of(&stage, node), 10.0);
        assert!(!tween.is_complete());

        tween.update(0.5, &mut stage);
        assert_relative_eq!(x_of(&stage, node), 5.0);

        tween.update(0.5, &mut stage);
        assert_relative_eq!(x_of(&stage, node), 0.0);
        assert!(tween.is_complete());
    }

    #[test]
    fn test_stop_on_reversed_pass_lands_on_start() {
        let (mut stage, node, mut ids) = setup();
        let settings = TweenSettings::default().with_repeat(1).with_yoyo(true);
        let mut tween = Tween::new(ids.tween(), node, &[(TweenProperty::X, 10.0)], 1.0, settings);

        tween.update(1.0, &mut stage);
        tween.update(0.25, &mut stage);
        assert_relative_eq!(x_of(&stage, node), 7.5);

        tween.stop(true, &mut stage);
        assert!(tween.is_complete());
        assert_relative_eq!(x_of(&stage, node), 0.0);
    }

    #[test]
    fn test_stop_before_yoyo_plays_out_lands_on_final_pass() {
        let (mut stage, node, mut ids) = setup();
        let settings = TweenSettings::default().with_repeat(2).with_yoyo(true);
        let mut tween = Tween::new(ids.tween(), node, &[(TweenProperty::X, 10.0)], 1.0, settings);

        // Three passes: out, back, out again
        tween.stop(true, &mut stage);
        assert_relative_eq!(x_of(&stage, node), 10.0);
    }

    #[test]
    fn test_repeat_carries_overshoot_into_next_pass() {
        let (mut stage, node, mut ids) = setup();
        let settings = TweenSettings::default().with_repeat(1);
        let mut tween = Tween::new(ids.tween(), node, &[(TweenProperty::X, 10.0)], 1.0, settings);

        tween.update(1.25, &mut stage);
        assert_relative_eq!(x_of(&stage, node), 10.0);
        assert!(!tween.is_complete());

        tween.update(0.25, &mut stage);
        assert_relative_eq!(x_of(&stage, node), 5.0);

        tween.update(0.5, &mut stage);
        assert!(tween.is_complete());
    }

    #[test]
    fn test_missing_target_completes() {
        let (mut stage, node, mut ids) = setup();
        let mut tween = Tween::new(ids.tween(), node, &[(TweenProperty::X, 10.0)], 1.0, TweenSettings::default());
        stage.remove_child(node);

        tween.update(0.1, &mut stage);
        assert!(tween.is_complete());
    }

    #[test]
    fn test_zero_duration_finishes_on_first_update() {
        let (mut stage, node, mut ids) = setup();
        let mut tween = Tween::new(ids.tween(), node, &[(TweenProperty::Y, 7.0)], 0.0, TweenSettings::default());

        tween.update(0.0, &mut stage);
        assert!(tween.is_complete());
        assert_relative_eq!(stage.get(node).map_or(0.0, |o| o.position.y), 7.0);
    }
}
