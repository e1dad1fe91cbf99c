//! Asteroid field demo
//!
//! Runs a scene headless for a few seconds: asteroids drift across the stage,
//! fade in through tweens, and a repeating timer keeps spawning new ones. A
//! logging renderer reports what would be drawn.
//!
//! Pass a `.toml` or `.ron` engine config path as the first argument to
//! override the defaults.

use rand::Rng;
use scene_engine::foundation::logging;
use scene_engine::prelude::*;

const FIELD_WIDTH: f32 = 800.0;
const FIELD_HEIGHT: f32 = 600.0;
const SPAWN_INTERVAL: f32 = 0.5;
const FRAMES: u32 = 240;
const FRAME_DELTA: f32 = 1.0 / 60.0;

/// Renderer that logs a summary every `every` frames
struct LogRenderer {
    frame: u64,
    every: u64,
}

impl Renderer for LogRenderer {
    fn render(&mut self, stage: &Stage) -> Result<(), RenderError> {
        self.frame += 1;
        if self.frame % self.every == 0 {
            let visible = stage.children().filter(|(_, o)| o.visible && o.alpha > 0.0).count();
            log::info!(
                "frame {:>4}: {} nodes, {} visible, clear #{:06x}",
                self.frame,
                stage.len(),
                visible,
                stage.background_color().0
            );
        }
        Ok(())
    }
}

/// Moves one asteroid in a straight line, wrapping at the field edges
struct Drifter {
    node: NodeKey,
    velocity: Vec2,
}

impl Sprite for Drifter {
    fn update(&mut self, stage: &mut Stage, delta_time: f32) {
        if let Some(object) = stage.get_mut(self.node) {
            object.position += self.velocity * delta_time;
            object.position.x = object.position.x.rem_euclid(FIELD_WIDTH);
            object.position.y = object.position.y.rem_euclid(FIELD_HEIGHT);
        }
    }
}

/// Clicking drops a half-size marker where the pointer is
struct MarkerDropper;

impl PointerHandler for MarkerDropper {
    fn click(&mut self, stage: &mut Stage, data: &InteractionData) {
        let mut marker = DisplayObject::textured("marker.png", data.position.x, data.position.y);
        marker.scale = Vec2::new(0.5, 0.5);
        stage.add_child(marker);
        log::debug!("marker dropped at ({:.0}, {:.0})", data.position.x, data.position.y);
    }
}

fn spawn_asteroid(scene: &mut Scene) {
    let mut rng = rand::thread_rng();
    let mut asteroid = DisplayObject::textured(
        "asteroid.png",
        rng.gen_range(0.0..FIELD_WIDTH),
        rng.gen_range(0.0..FIELD_HEIGHT),
    );
    asteroid.alpha = 0.0;
    let node = scene.stage_mut().add_child(asteroid);

    let velocity = Vec2::new(rng.gen_range(-60.0..60.0), rng.gen_range(-60.0..60.0));
    scene.add_sprite(Drifter { node, velocity });

    let spin = rng.gen_range(-3.0..3.0);
    scene.add_tween(
        node,
        &[(TweenProperty::Alpha, 1.0), (TweenProperty::Rotation, spin)],
        0.75,
        TweenSettings::default().with_easing(Easing::QuadraticOut),
    );
}

fn schedule_spawns(scene: &mut Scene) {
    scene.add_timer(SPAWN_INTERVAL, |scene| {
        spawn_asteroid(scene);
        schedule_spawns(scene);
    });
}

fn build_scene(config: SceneConfig) -> Scene {
    let mut scene = Scene::new(config);
    scene.set_pointer_handler(MarkerDropper);

    for _ in 0..4 {
        spawn_asteroid(&mut scene);
    }
    schedule_spawns(&mut scene);

    let title = scene
        .stage_mut()
        .add_child(DisplayObject::textured("title.png", FIELD_WIDTH / 2.0, -40.0));
    scene.add_tween(
        title,
        &[(TweenProperty::Y, 80.0)],
        1.0,
        TweenSettings::default()
            .with_delay(0.25)
            .with_easing(Easing::BackOut)
            .on_complete(move |stage| {
                if let Some(object) = stage.get_mut(title) {
                    object.scale = Vec2::new(1.2, 1.2);
                }
            }),
    );

    scene
}

fn step(engine: &mut Engine<LogRenderer, AudioSystem>, frames: u32) -> Result<(), EngineError> {
    for _ in 0..frames {
        engine.tick(FRAME_DELTA)?;
    }
    Ok(())
}

fn load_config() -> Result<EngineConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading engine config from {path}");
            EngineConfig::load_from_file(path)
        }
        None => Ok(EngineConfig {
            scene: SceneConfig::named("asteroid-field").with_clear_color(0x0B_0B1E),
            ..Default::default()
        }),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_filter(log::LevelFilter::Info);

    let config = load_config()?;
    let renderer = LogRenderer { frame: 0, every: 30 };
    let mut engine = Engine::new(config, renderer, AudioSystem::new())?;

    let scene = build_scene(engine.config().scene.clone());
    engine.set_scene(scene);

    // Let the field fill up, then simulate a tap in the middle of it
    step(&mut engine, FRAMES / 2)?;
    engine.handle_input(&StageInput::new(
        InputSource::Click,
        InteractionData::mouse(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),
    ));

    engine.pause();
    step(&mut engine, 10)?;
    engine.unpause();
    step(&mut engine, FRAMES / 2)?;

    if let Some(scene) = engine.scene() {
        let stats = scene.stats();
        log::info!(
            "done: {:.2}s scene time, {} sprites, {} timers fired, {} tweens completed",
            stats.elapsed,
            stats.sprite_count,
            stats.timers_fired,
            stats.tweens_completed
        );
    }
    Ok(())
}
