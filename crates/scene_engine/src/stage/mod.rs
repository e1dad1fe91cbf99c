//! Stage - the display list a scene hands to the renderer
//!
//! The stage owns every [`DisplayObject`] of the current scene together with
//! the background colour and the interactive flag. Nodes are addressed by
//! generational [`NodeKey`]s so tweens and sprites can hold on to a node
//! without borrowing it; a key of a removed node simply stops resolving.

use crate::foundation::collections::{NodeKey, NodeMap};
use crate::foundation::math::{Color, Vec2};
use crate::tween::TweenProperty;

/// A drawable node on the stage
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayObject {
    /// Position in stage pixels
    pub position: Vec2,

    /// Scale factors
    pub scale: Vec2,

    /// Rotation in radians
    pub rotation: f32,

    /// Opacity, `0.0` (transparent) to `1.0` (opaque)
    pub alpha: f32,

    /// Whether the renderer should draw this node
    pub visible: bool,

    /// Texture the renderer draws for this node, if any
    pub texture: Option<String>,
}

impl Default for DisplayObject {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            scale: Vec2::new(1.0, 1.0),
            rotation: 0.0,
            alpha: 1.0,
            visible: true,
            texture: None,
        }
    }
}

impl DisplayObject {
    /// Create a node at the given position
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            ..Default::default()
        }
    }

    /// Create a node drawing `texture` at the given position
    pub fn textured(texture: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            texture: Some(texture.into()),
            ..Self::at(x, y)
        }
    }

    /// Read an animatable property
    pub fn property(&self, property: TweenProperty) -> f32 {
        match property {
            TweenProperty::X => self.position.x,
            TweenProperty::Y => self.position.y,
            TweenProperty::ScaleX => self.scale.x,
            TweenProperty::ScaleY => self.scale.y,
            TweenProperty::Rotation => self.rotation,
            TweenProperty::Alpha => self.alpha,
        }
    }

    /// Write an animatable property
    pub fn set_property(&mut self, property: TweenProperty, value: f32) {
        match property {
            TweenProperty::X => self.position.x = value,
            TweenProperty::Y => self.position.y = value,
            TweenProperty::ScaleX => self.scale.x = value,
            TweenProperty::ScaleY => self.scale.y = value,
            TweenProperty::Rotation => self.rotation = value,
            TweenProperty::Alpha => self.alpha = value.clamp(0.0, 1.0),
        }
    }
}

/// Root display container of a scene
#[derive(Debug, Clone)]
pub struct Stage {
    nodes: NodeMap<DisplayObject>,
    /// Draw order, back to front
    order: Vec<NodeKey>,
    background_color: Color,
    interactive: bool,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage {
    /// Create an empty, interactive stage with a black background
    pub fn new() -> Self {
        Self {
            nodes: NodeMap::with_key(),
            order: Vec::new(),
            background_color: Color::BLACK,
            interactive: true,
        }
    }

    /// Add a node on top of every existing node
    pub fn add_child(&mut self, object: DisplayObject) -> NodeKey {
        let key = self.nodes.insert(object);
        self.order.push(key);
        key
    }

    /// Remove a node, returning it if it was still on the stage
    pub fn remove_child(&mut self, key: NodeKey) -> Option<DisplayObject> {
        let object = self.nodes.remove(key)?;
        self.order.retain(|k| *k != key);
        Some(object)
    }

    /// Remove every node, last added first
    pub fn clear(&mut self) {
        while let Some(key) = self.order.pop() {
            self.nodes.remove(key);
        }
    }

    /// Look up a node
    pub fn get(&self, key: NodeKey) -> Option<&DisplayObject> {
        self.nodes.get(key)
    }

    /// Look up a node mutably
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut DisplayObject> {
        self.nodes.get_mut(key)
    }

    /// Whether `key` still refers to a node on this stage
    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Nodes in draw order, back to front
    pub fn children(&self) -> impl Iterator<Item = (NodeKey, &DisplayObject)> + '_ {
        self.order
            .iter()
            .filter_map(move |key| self.nodes.get(*key).map(|object| (*key, object)))
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the stage has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Colour the renderer clears to before drawing
    pub const fn background_color(&self) -> Color {
        self.background_color
    }

    /// Set the clear colour
    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    /// Whether pointer input reaches the scene
    pub const fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Enable or disable pointer input
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_children_in_draw_order() {
        let mut stage = Stage::new();
        let a = stage.add_child(DisplayObject::at(1.0, 0.0));
        let b = stage.add_child(DisplayObject::at(2.0, 0.0));
        let c = stage.add_child(DisplayObject::at(3.0, 0.0));

        stage.remove_child(b);

        let keys: Vec<_> = stage.children().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![a, c]);
        assert_eq!(stage.len(), 2);
    }

    #[test]
    fn test_removed_key_stops_resolving() {
        let mut stage = Stage::new();
        let key = stage.add_child(DisplayObject::default());
        assert!(stage.remove_child(key).is_some());
        assert!(stage.remove_child(key).is_none());
        assert!(!stage.contains(key));
    }

    #[test]
    fn test_clear_empties_stage() {
        let mut stage = Stage::new();
        stage.add_child(DisplayObject::default());
        stage.add_child(DisplayObject::textured("ship.png", 5.0, 5.0));
        stage.clear();
        assert!(stage.is_empty());
        assert_eq!(stage.children().count(), 0);
    }

    #[test]
    fn test_property_access() {
        let mut object = DisplayObject::at(4.0, 8.0);
        assert_relative_eq!(object.property(TweenProperty::Y), 8.0);

        object.set_property(TweenProperty::ScaleX, 2.0);
        object.set_property(TweenProperty::Alpha, 3.0);
        assert_relative_eq!(object.scale.x, 2.0);
        assert_relative_eq!(object.alpha, 1.0);
    }
}
