use std::time::Duration;

use crate::GridSize;
use crate::events::Key;

/// Which keys do what
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    /// Released to flip between running and paused
    pub toggle: Key,

    /// Held to clear the grid
    pub clear: Key,

    /// Leaves the shell. Ctrl-C always does too.
    pub quit: Key,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            toggle: Key::Space,
            clear: Key::Escape,
            quit: Key::Char('q'),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Grid width in cells
    pub width: GridSize,

    /// Grid height in cells
    pub height: GridSize,

    /// Terminal title
    pub title: String,

    /// A simulation step is taken once every this many frames while running
    pub frames_per_step: u32,

    /// Host frames per second
    pub frame_rate: u32,

    pub bindings: Bindings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 40,
            height: 30,
            title: String::from("golife"),
            frames_per_step: 11,
            frame_rate: 60,
            bindings: Bindings::default(),
        }
    }
}

impl Config {
    /// How long one host frame lasts
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}
