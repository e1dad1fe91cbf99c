//! Audio control used by scene pause/unpause

/// Global sound switch
pub trait SoundControl {
    /// Silence every playing and future sound
    fn mute_all(&mut self);

    /// Restore sound output
    fn unmute_all(&mut self);

    /// Whether output is currently muted
    fn is_muted(&self) -> bool;
}

/// Audio system tracking the muted state
///
/// Stands in for a real mixer; it records state so pause/unpause can be
/// observed by the host and by tests.
#[derive(Debug, Default)]
pub struct AudioSystem {
    muted: bool,
    mute_count: u32,
}

impl AudioSystem {
    /// Create a new, unmuted audio system
    pub fn new() -> Self {
        Self::default()
    }

    /// Times `mute_all` switched output off
    pub const fn mute_count(&self) -> u32 {
        self.mute_count
    }
}

impl SoundControl for AudioSystem {
    fn mute_all(&mut self) {
        if !self.muted {
            log::debug!("Muting all sounds");
            self.muted = true;
            self.mute_count += 1;
        }
    }

    fn unmute_all(&mut self) {
        if self.muted {
            log::debug!("Unmuting all sounds");
            self.muted = false;
        }
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}
