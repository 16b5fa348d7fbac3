use std::collections::HashMap;

/// Keys the game observes. A crate-local identifier rather than a host
/// scancode, so the core carries no library-specific key table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    ArrowUp,
    ArrowDown,
    Escape,
}

/// Snapshot of which keys are currently held down
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashMap<Key, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the most recent transition for `key`; last write wins,
    /// no debouncing.
    pub fn set_key(&mut self, key: Key, pressed: bool) {
        self.held.insert(key, pressed);
    }

    /// Pure lookup; false for any key never set.
    pub fn is_pressed(&self, key: Key) -> bool {
        self.held.get(&key).copied().unwrap_or(false)
    }
}
