//! Sprite behaviour hooks
//!
//! Sprites are game objects that want a callback every frame. The scene owns
//! them as trait objects; the drawable part of a sprite lives on the
//! [`Stage`] and is usually referenced through a [`NodeKey`](crate::foundation::collections::NodeKey).

use crate::stage::Stage;

/// Per-frame behaviour owned by a scene
pub trait Sprite {
    /// Advance the sprite by `delta_time` seconds
    fn update(&mut self, stage: &mut Stage, delta_time: f32);
}

impl<F> Sprite for F
where
    F: FnMut(&mut Stage, f32),
{
    fn update(&mut self, stage: &mut Stage, delta_time: f32) {
        self(stage, delta_time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::DisplayObject;

    #[test]
    fn test_closures_are_sprites() {
        let mut stage = Stage::new();
        let node = stage.add_child(DisplayObject::at(0.0, 0.0));
        let mut drift = move |stage: &mut Stage, dt: f32| {
            if let Some(object) = stage.get_mut(node) {
                object.position.x += 10.0 * dt;
            }
        };

        Sprite::update(&mut drift, &mut stage, 0.5);
        assert!(stage.get(node).is_some_and(|o| (o.position.x - 5.0).abs() < f32::EPSILON));
    }
}
