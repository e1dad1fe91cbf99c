//! Handle types for scene-owned collections

use std::fmt;

slotmap::new_key_type! {
    /// Generational key for a node on a [`Stage`](crate::stage::Stage)
    pub struct NodeKey;
}

pub use slotmap::SlotMap;

/// Map from stage node keys to values
pub type NodeMap<T> = SlotMap<NodeKey, T>;

macro_rules! sequential_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u64);

        impl $name {
            /// Raw numeric value of this id
            pub const fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

sequential_id!(
    /// Handle to a sprite owned by a scene
    SpriteId,
    "sprite"
);
sequential_id!(
    /// Handle to a timer scheduled on a scene
    TimerId,
    "timer"
);
sequential_id!(
    /// Handle to a tween running on a scene
    TweenId,
    "tween"
);

/// Monotonic id source shared by a scene's collections
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Create a new allocator starting at zero
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    fn bump(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Allocate a sprite id
    pub fn sprite(&mut self) -> SpriteId {
        SpriteId(self.bump())
    }

    /// Allocate a timer id
    pub fn timer(&mut self) -> TimerId {
        TimerId(self.bump())
    }

    /// Allocate a tween id
    pub fn tween(&mut self) -> TweenId {
        TweenId(self.bump())
    }
}
