//! # Scene Engine
//!
//! Per-screen scene container for a 2D game engine.
//!
//! ## Features
//!
//! - **Scenes**: one container per screen owning sprites, timers and tweens
//! - **Stage**: a keyed display list handed to any [`Renderer`](render::Renderer)
//! - **Tweens**: eased property animation with delay, repeat and yoyo
//! - **Timers**: callbacks on scene time, frozen while the game is paused
//! - **Input**: mouse and touch events routed to per-scene pointer callbacks
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = Engine::new(EngineConfig::default(), NullRenderer, AudioSystem::new())?;
//!
//!     let mut scene = engine.create_scene();
//!     let ship = scene.stage_mut().add_child(DisplayObject::textured("ship.png", 0.0, 240.0));
//!     scene.add_tween(ship, &[(TweenProperty::X, 640.0)], 2.0, TweenSettings::default());
//!     scene.add_timer(2.0, |scene| scene.stage_mut().clear());
//!
//!     engine.set_scene(scene);
//!     engine.run_frames(180)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod stage;
pub mod tween;
pub mod timer;
pub mod sprite;
pub mod input;
pub mod audio;
pub mod render;
pub mod physics;
pub mod scene;

mod engine;

pub use engine::{Engine, EngineConfig, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Engine, EngineConfig, EngineError,
        audio::{AudioSystem, SoundControl},
        config::{Config, ConfigError},
        foundation::{
            collections::{NodeKey, SpriteId, TimerId, TweenId},
            math::{Color, Vec2},
        },
        input::{InputSource, InteractionData, PointerHandler, PointerKind, StageInput},
        physics::PhysicsWorld,
        render::{NullRenderer, RenderError, Renderer},
        scene::{Scene, SceneConfig, SceneError, SceneStats},
        sprite::Sprite,
        stage::{DisplayObject, Stage},
        tween::{Easing, Tween, TweenProperty, TweenSettings},
    };
}
