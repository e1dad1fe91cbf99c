//! Scene management
//!
//! A [`Scene`] is the container for one screen of the game. It owns the
//! screen's display list, sprites, timers and tweens, and steps them one frame
//! at a time:
//!
//! ```text
//! run(dt)
//!   ├─ update_tweens(dt)   tweens, last to first; finished ones dropped
//!   ├─ update(dt)
//!   │    ├─ world.update(dt)
//!   │    ├─ timers          last to first; expired ones fire and are dropped
//!   │    └─ sprites         last to first
//!   └─ render(renderer)
//! ```

mod config;
mod container;
mod stats;


pub use config::SceneConfig;
pub use container::{Scene, SceneError, TimerCallback};
pub use stats::SceneStats;
