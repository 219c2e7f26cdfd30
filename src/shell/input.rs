use std::collections::HashSet;

use crossterm::event::Event as CtEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton as CtMouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use crate::events::InputSnapshot;
use crate::events::Key;
use crate::events::MouseButton;
use crate::shell::screen::Viewport;

/// Folds terminal events into "what is held down right now".
///
/// Terminals that report key releases give real held state: a key is down from its press to
/// its release. Everywhere else a key is only seen as pressed, so it counts as down for the
/// frame its press arrived in and up on the next one.
pub struct InputTracker {
    /// Last known pointer column and row, in terminal cells
    pointer: (u16, u16),

    buttons: HashSet<MouseButton>,

    keys: HashSet<Key>,

    /// Whether the terminal reports key releases
    releases: bool,

    quit_key: Key,
    quit: bool,

    resized: Option<(u16, u16)>,
}

impl InputTracker {
    pub fn new(releases: bool, quit_key: Key) -> Self {
        Self {
            pointer: (0, 0),
            buttons: HashSet::new(),
            keys: HashSet::new(),
            releases,
            quit_key,
            quit: false,
            resized: None,
        }
    }

    pub fn handle(&mut self, event: &CtEvent) {
        match event {
            CtEvent::Key(key_event) => self.handle_key(key_event),
            CtEvent::Mouse(mouse_event) => self.handle_mouse(mouse_event),
            CtEvent::Resize(cols, rows) => self.resized = Some((*cols, *rows)),

            // Releases that happen while unfocused never reach us
            CtEvent::FocusLost => {
                self.keys.clear();
                self.buttons.clear();
            }
            _ => {}
        }
    }

    /// The input state for this frame, with the pointer mapped to grid coordinates
    pub fn snapshot(&self, viewport: &Viewport) -> InputSnapshot {
        let (column, row) = self.pointer;

        InputSnapshot {
            cursor: viewport.to_grid(column, row),
            buttons: self.buttons.clone(),
            keys: self.keys.clone(),
        }
    }

    /// Call once the frame's snapshot has been consumed
    pub fn end_frame(&mut self) {
        if !self.releases {
            self.keys.clear();
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// The new terminal size, if it changed since the last call
    pub fn take_resize(&mut self) -> Option<(u16, u16)> {
        self.resized.take()
    }

    fn handle_key(&mut self, key_event: &KeyEvent) {
        if let KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } = key_event
        {
            self.quit = true;
            return;
        }

        let Some(key) = convert_key(key_event.code) else {
            return;
        };

        match key_event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if key == self.quit_key {
                    self.quit = true;
                }

                self.keys.insert(key);
            }
            KeyEventKind::Release => {
                self.keys.remove(&key);
            }
        }
    }

    fn handle_mouse(&mut self, mouse_event: &MouseEvent) {
        self.pointer = (mouse_event.column, mouse_event.row);

        match mouse_event.kind {
            MouseEventKind::Down(button) | MouseEventKind::Drag(button) => {
                if let Some(button) = convert_button(button) {
                    self.buttons.insert(button);
                }
            }
            MouseEventKind::Up(button) => {
                if let Some(button) = convert_button(button) {
                    self.buttons.remove(&button);
                }
            }
            _ => {}
        }
    }
}

fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

fn convert_button(button: CtMouseButton) -> Option<MouseButton> {
    match button {
        CtMouseButton::Left => Some(MouseButton::Left),
        CtMouseButton::Right => Some(MouseButton::Right),
        CtMouseButton::Middle => None,
    }
}
