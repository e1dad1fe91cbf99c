//! Physics world seam

/// Physics simulation stepped by a scene before its timers and sprites
pub trait PhysicsWorld {
    /// Step the simulation by `delta_time` seconds
    fn update(&mut self, delta_time: f32);
}
