//! Per-scene counters

/// Snapshot of a scene's bookkeeping
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SceneStats {
    /// Frames stepped through `update`
    pub frame_count: u64,

    /// Scene time in seconds
    pub elapsed: f64,

    /// Sprites currently owned
    pub sprite_count: usize,

    /// Timers still pending
    pub timer_count: usize,

    /// Tweens still tracked, including stopped ones not yet swept
    pub tween_count: usize,

    /// Nodes on the stage
    pub node_count: usize,

    /// Timers fired since the scene was created
    pub timers_fired: u64,

    /// Tweens swept after completing
    pub tweens_completed: u64,
}
