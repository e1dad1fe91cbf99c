//! The scene container

use super::{SceneConfig, SceneStats};
use crate::audio::SoundControl;
use crate::foundation::collections::{IdAllocator, NodeKey, SpriteId, TimerId, TweenId};
use crate::foundation::time::SceneClock;
use crate::input::{PointerHandler, StageInput};
use crate::physics::PhysicsWorld;
use crate::render::{RenderError, Renderer};
use crate::sprite::Sprite;
use crate::stage::Stage;
use crate::timer::SceneTimer;
use crate::tween::{Tween, TweenProperty, TweenSettings};
use thiserror::Error;

/// Callback run when a scene timer expires
pub type TimerCallback = Box<dyn FnOnce(&mut Scene)>;

struct SpriteSlot {
    id: SpriteId,
    sprite: Box<dyn Sprite>,
}

struct ScheduledTimer {
    id: TimerId,
    timer: SceneTimer,
    callback: TimerCallback,
}

/// Scene-level errors
#[derive(Error, Debug)]
pub enum SceneError {
    /// The renderer failed to draw the stage
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}

/// One screen of the game
///
/// Owns the stage and three unordered collections (sprites, timers, tweens)
/// and steps them once per frame through [`Scene::run`].
pub struct Scene {
    config: SceneConfig,
    stage: Stage,
    sprites: Vec<SpriteSlot>,
    timers: Vec<ScheduledTimer>,
    /// Expired timers of the batch being fired that have not run yet
    firing: Vec<TimerId>,
    tweens: Vec<Tween>,
    world: Option<Box<dyn PhysicsWorld>>,
    pointer_handler: Option<Box<dyn PointerHandler>>,
    clock: SceneClock,
    ids: IdAllocator,
    paused: bool,
    timers_fired: u64,
    tweens_completed: u64,
}

impl Scene {
    /// Create a scene on a fresh stage
    pub fn new(config: SceneConfig) -> Self {
        Self::with_stage(config, Stage::new())
    }

    /// Create a scene reusing `stage`
    ///
    /// Whatever the previous scene left on the stage is removed, then the
    /// background colour and interactive flag are taken from `config`.
    pub fn with_stage(config: SceneConfig, mut stage: Stage) -> Self {
        stage.clear();
        stage.set_background_color(config.clear_color);
        stage.set_interactive(config.interactive);

        log::debug!(
            "Scene '{}' entered (clear color {:#08x}, interactive: {})",
            config.name,
            config.clear_color.0,
            config.interactive
        );

        Self {
            config,
            stage,
            sprites: Vec::new(),
            timers: Vec::new(),
            firing: Vec::new(),
            tweens: Vec::new(),
            world: None,
            pointer_handler: None,
            clock: SceneClock::new(),
            ids: IdAllocator::new(),
            paused: false,
            timers_fired: 0,
            tweens_completed: 0,
        }
    }

    /// Configuration the scene was created with
    pub const fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Scene name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// The scene's display container
    pub const fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Mutable access to the display container
    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    /// Seconds of scene time elapsed
    pub const fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Attach a physics world stepped at the start of every update
    pub fn set_world(&mut self, world: impl PhysicsWorld + 'static) {
        self.world = Some(Box::new(world));
    }

    /// Detach the physics world
    pub fn take_world(&mut self) -> Option<Box<dyn PhysicsWorld>> {
        self.world.take()
    }

    /// Install the pointer callbacks
    pub fn set_pointer_handler(&mut self, handler: impl PointerHandler + 'static) {
        self.pointer_handler = Some(Box::new(handler));
    }

    // ------------------------------------------------------------------
    // Sprites
    // ------------------------------------------------------------------

    /// Add a sprite updated every frame
    pub fn add_sprite(&mut self, sprite: impl Sprite + 'static) -> SpriteId {
        let id = self.ids.sprite();
        self.sprites.push(SpriteSlot {
            id,
            sprite: Box::new(sprite),
        });
        id
    }

    /// Remove a sprite, handing it back
    pub fn remove_sprite(&mut self, id: SpriteId) -> Option<Box<dyn Sprite>> {
        let index = self.sprites.iter().position(|slot| slot.id == id)?;
        Some(self.sprites.remove(index).sprite)
    }

    /// Number of sprites
    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    // ------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------

    /// Run `callback` once `seconds` of scene time have passed
    ///
    /// Zero or negative times fire on the next update.
    pub fn add_timer(&mut self, seconds: f32, callback: impl FnOnce(&mut Self) + 'static) -> TimerId {
        let id = self.ids.timer();
        self.timers.push(ScheduledTimer {
            id,
            timer: SceneTimer::new(self.clock.elapsed(), seconds),
            callback: Box::new(callback),
        });
        log::trace!("{} scheduled in {}s on '{}'", id, seconds, self.config.name);
        id
    }

    /// Cancel a pending timer; `false` if it already fired or never existed
    ///
    /// A timer due in the same frame as the callback cancelling it is still
    /// pending, so it is cancelled rather than fired.
    pub fn remove_timer(&mut self, id: TimerId) -> bool {
        if let Some(position) = self.firing.iter().position(|&pending| pending == id) {
            self.firing.swap_remove(position);
            return true;
        }
        let before = self.timers.len();
        self.timers.retain(|scheduled| scheduled.id != id);
        self.timers.len() != before
    }

    /// Look up a pending timer
    pub fn timer(&self, id: TimerId) -> Option<&SceneTimer> {
        self.timers
            .iter()
            .find(|scheduled| scheduled.id == id)
            .map(|scheduled| &scheduled.timer)
    }

    /// Number of pending timers
    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    // ------------------------------------------------------------------
    // Tweens
    // ------------------------------------------------------------------

    /// Animate `props` of node `target` over `duration` seconds
    pub fn add_tween(
        &mut self,
        target: NodeKey,
        props: &[(TweenProperty, f32)],
        duration: f32,
        settings: TweenSettings,
    ) -> TweenId {
        let id = self.ids.tween();
        if !self.stage.contains(target) {
            log::warn!("{} targets a node that is not on the stage of '{}'", id, self.config.name);
        }
        self.tweens.push(Tween::new(id, target, props, duration, settings));
        id
    }

    /// First tween animating `target`, in insertion order
    pub fn get_tween(&self, target: NodeKey) -> Option<&Tween> {
        self.tweens.iter().find(|tween| tween.target() == target)
    }

    /// Mutable variant of [`Scene::get_tween`]
    pub fn get_tween_mut(&mut self, target: NodeKey) -> Option<&mut Tween> {
        self.tweens.iter_mut().find(|tween| tween.target() == target)
    }

    /// Look up a tween by handle
    pub fn tween(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.iter().find(|tween| tween.id() == id)
    }

    /// Number of tracked tweens
    pub fn tween_count(&self) -> usize {
        self.tweens.len()
    }

    /// Stop the tweens of `target`, or every tween when `target` is `None`
    ///
    /// Stopped tweens are swept on the next [`Scene::update_tweens`].
    pub fn stop_tweens(&mut self, target: Option<NodeKey>, do_complete: bool) {
        let stage = &mut self.stage;
        for tween in self.tweens.iter_mut().filter(|tween| matches_target(tween, target)) {
            tween.stop(do_complete, stage);
        }
    }

    /// Pause the tweens of `target`, or every tween when `target` is `None`
    pub fn pause_tweens(&mut self, target: Option<NodeKey>) {
        for tween in self.tweens.iter_mut().filter(|tween| matches_target(tween, target)) {
            tween.pause();
        }
    }

    /// Resume the tweens of `target`, or every tween when `target` is `None`
    pub fn resume_tweens(&mut self, target: Option<NodeKey>) {
        for tween in self.tweens.iter_mut().filter(|tween| matches_target(tween, target)) {
            tween.resume();
        }
    }

    // ------------------------------------------------------------------
    // Frame
    // ------------------------------------------------------------------

    /// Step the tweens, last added first, dropping those that completed
    pub fn update_tweens(&mut self, delta_time: f32) {
        for index in (0..self.tweens.len()).rev() {
            self.tweens[index].update(delta_time, &mut self.stage);
            if self.tweens[index].is_complete() {
                self.tweens.remove(index);
                self.tweens_completed += 1;
            }
        }
    }

    /// Step the scene: physics world, then timers, then sprites
    pub fn update(&mut self, delta_time: f32) {
        self.clock.advance(delta_time);

        if let Some(world) = self.world.as_mut() {
            world.update(delta_time);
        }

        self.fire_timers();

        for slot in self.sprites.iter_mut().rev() {
            slot.sprite.update(&mut self.stage, delta_time);
        }
    }

    /// Pull every expired timer out of the list, then run their callbacks
    ///
    /// Timers scheduled by a callback are not looked at until the next frame.
    /// A callback may cancel a later timer of the same batch through
    /// [`Scene::remove_timer`].
    fn fire_timers(&mut self) {
        let now = self.clock.elapsed();
        let mut expired = Vec::new();
        for index in (0..self.timers.len()).rev() {
            if self.timers[index].timer.is_expired(now) {
                expired.push(self.timers.remove(index));
            }
        }
        self.firing = expired.iter().map(|scheduled| scheduled.id).collect();

        for scheduled in expired {
            let Some(position) = self.firing.iter().position(|&pending| pending == scheduled.id) else {
                log::trace!("{} cancelled before firing on '{}'", scheduled.id, self.config.name);
                continue;
            };
            self.firing.swap_remove(position);
            log::trace!("{} fired on '{}'", scheduled.id, self.config.name);
            self.timers_fired += 1;
            (scheduled.callback)(self);
        }
    }

    /// Hand the stage to `renderer`
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), SceneError> {
        renderer.render(&self.stage)?;
        Ok(())
    }

    /// One full frame: tweens, update, render
    pub fn run<R: Renderer + ?Sized>(&mut self, delta_time: f32, renderer: &mut R) -> Result<(), SceneError> {
        self.update_tweens(delta_time);
        self.update(delta_time);
        self.render(renderer)
    }

    // ------------------------------------------------------------------
    // Pause / input
    // ------------------------------------------------------------------

    /// Called when the game is paused: mutes all sound
    pub fn pause(&mut self, sound: &mut dyn SoundControl) {
        self.paused = true;
        sound.mute_all();
        log::info!("Scene '{}' paused", self.config.name);
    }

    /// Called when the game resumes: unmutes all sound
    pub fn unpause(&mut self, sound: &mut dyn SoundControl) {
        self.paused = false;
        sound.unmute_all();
        log::info!("Scene '{}' resumed", self.config.name);
    }

    /// Whether [`Scene::pause`] was called without a matching unpause
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Route a raw stage event to the pointer callbacks
    ///
    /// Returns `false` when the event was dropped, either because the stage is
    /// not interactive or because no pointer handler is installed.
    pub fn handle_input(&mut self, input: &StageInput) -> bool {
        if !self.stage.is_interactive() {
            log::trace!("Ignoring {:?} on non-interactive scene '{}'", input.source, self.config.name);
            return false;
        }
        let Some(handler) = self.pointer_handler.as_mut() else {
            log::trace!("No pointer handler on '{}' for {:?}", self.config.name, input.source);
            return false;
        };
        handler.dispatch(&mut self.stage, input);
        true
    }

    /// Snapshot of the scene's counters
    pub fn stats(&self) -> SceneStats {
        SceneStats {
            frame_count: self.clock.frame_count(),
            elapsed: self.clock.elapsed(),
            sprite_count: self.sprites.len(),
            timer_count: self.timers.len(),
            tween_count: self.tweens.len(),
            node_count: self.stage.len(),
            timers_fired: self.timers_fired,
            tweens_completed: self.tweens_completed,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

fn matches_target(tween: &Tween, target: Option<NodeKey>) -> bool {
    target.map_or(true, |key| tween.target() == key)
}
