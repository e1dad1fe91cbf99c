//! Core engine implementation
//!
//! The engine plays the host role around scenes: it owns the renderer and the
//! sound output, keeps the current scene, switches scenes between frames and
//! turns wall-clock frames into scene steps.

use crate::{
    audio::SoundControl,
    config::{Config, ConfigError},
    foundation::time::FrameClock,
    input::StageInput,
    render::Renderer,
    scene::{Scene, SceneConfig, SceneError},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main engine struct
pub struct Engine<R: Renderer, A: SoundControl> {
    renderer: R,
    audio: A,
    scene: Option<Scene>,
    /// Scene waiting to replace the current one at the start of the next tick
    pending_scene: Option<Scene>,
    clock: FrameClock,
    config: EngineConfig,
    paused: bool,
    running: bool,
    frames: u64,
}

impl<R: Renderer, A: SoundControl> Engine<R, A> {
    /// Create a new engine instance
    pub fn new(config: EngineConfig, renderer: R, audio: A) -> Result<Self, EngineError> {
        config.validate()?;
        log::info!("Initializing engine...");

        Ok(Self {
            renderer,
            audio,
            scene: None,
            pending_scene: None,
            clock: FrameClock::new(),
            paused: config.start_paused,
            config,
            running: true,
            frames: 0,
        })
    }

    /// Queue `scene` to become current at the start of the next tick
    ///
    /// Queuing again before that tick replaces the queued scene.
    pub fn set_scene(&mut self, scene: Scene) {
        log::debug!("Scene '{}' queued", scene.name());
        if let Some(replaced) = self.pending_scene.replace(scene) {
            log::debug!("Dropping queued scene '{}'", replaced.name());
        }
    }

    /// Create a scene from the engine's default scene settings
    pub fn create_scene(&self) -> Scene {
        Scene::new(self.config.scene.clone())
    }

    fn swap_pending_scene(&mut self) {
        if let Some(mut next) = self.pending_scene.take() {
            if let Some(previous) = self.scene.take() {
                log::info!("Leaving scene '{}'", previous.name());
            }
            log::info!("Entering scene '{}'", next.name());
            if self.paused {
                next.pause(&mut self.audio);
            }
            self.scene = Some(next);
        }
    }

    /// Advance one frame of `delta_time` seconds
    ///
    /// Returns `Ok(false)` when nothing was stepped (paused, or no scene yet).
    pub fn tick(&mut self, delta_time: f32) -> Result<bool, EngineError> {
        self.swap_pending_scene();

        if self.paused {
            return Ok(false);
        }
        let Some(scene) = self.scene.as_mut() else {
            return Ok(false);
        };

        let delta_time = delta_time.clamp(0.0, self.config.max_frame_delta);
        scene.run(delta_time, &mut self.renderer)?;
        self.frames += 1;
        Ok(true)
    }

    /// Run the real-time loop for at most `max_frames` frames, or until [`Engine::quit`]
    pub fn run_frames(&mut self, max_frames: u64) -> Result<u64, EngineError> {
        log::info!("Starting main loop...");
        let mut stepped = 0;
        while self.running && stepped < max_frames {
            self.clock.update();
            self.tick(self.clock.delta_time())?;
            stepped += 1;
        }
        log::info!(
            "Main loop finished after {} frames ({:.1} fps average)",
            stepped,
            self.clock.average_fps()
        );
        Ok(stepped)
    }

    /// Pause the game; the current scene mutes sound and stops being stepped
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        if let Some(scene) = self.scene.as_mut() {
            scene.pause(&mut self.audio);
        }
    }

    /// Resume after [`Engine::pause`]
    pub fn unpause(&mut self) {
        if !self.paused {
            return;
        }
        self.paused = false;
        if let Some(scene) = self.scene.as_mut() {
            scene.unpause(&mut self.audio);
        }
    }

    /// Whether the engine is paused
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Forward a stage event to the current scene
    ///
    /// Input is dropped while paused or before a scene is current.
    pub fn handle_input(&mut self, input: &StageInput) -> bool {
        if self.paused {
            return false;
        }
        self.scene.as_mut().is_some_and(|scene| scene.handle_input(input))
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the main loop should keep going
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Frames stepped so far
    pub const fn frame_count(&self) -> u64 {
        self.frames
    }

    /// The current scene
    pub const fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Mutable access to the current scene
    pub fn scene_mut(&mut self) -> Option<&mut Scene> {
        self.scene.as_mut()
    }

    /// The renderer
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The sound output
    pub const fn audio(&self) -> &A {
        &self.audio
    }

    /// Engine configuration
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Settings for scenes created through [`Engine::create_scene`]
    pub scene: SceneConfig,

    /// Longest frame step in seconds; longer frames are clamped so a stall
    /// does not teleport everything
    pub max_frame_delta: f32,

    /// Start in the paused state
    pub start_paused: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scene: SceneConfig::default(),
            max_frame_delta: 0.1,
            start_paused: false,
        }
    }
}

impl EngineConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_frame_delta.is_finite() && self.max_frame_delta > 0.0) {
            return Err(ConfigError::Invalid {
                field: "max_frame_delta",
                reason: format!("must be a positive number of seconds, got {}", self.max_frame_delta),
            });
        }
        Ok(())
    }
}

impl Config for EngineConfig {}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error raised while running the current scene
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}
