use std::collections::HashSet;
use std::fmt;

use crate::CellCoord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Escape,
    Char(char),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space => f.write_str("space"),
            Self::Escape => f.write_str("esc"),
            Self::Char(c) => write!(f, "{c}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

/// Everything the host knows about the user's input at the start of a frame
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Pointer position in grid coordinates. May lie outside the grid.
    pub cursor: (CellCoord, CellCoord),

    /// Mouse buttons held down
    pub buttons: HashSet<MouseButton>,

    /// Keys held down
    pub keys: HashSet<Key>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cursor(mut self, x: CellCoord, y: CellCoord) -> Self {
        self.cursor = (x, y);
        self
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.buttons.insert(button);
        self
    }

    pub fn with_key(mut self, key: Key) -> Self {
        self.keys.insert(key);
        self
    }

    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}
