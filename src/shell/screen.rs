use std::io;
use std::io::Stdout;
use std::io::Write;

use crossterm::cursor;
use crossterm::event::DisableFocusChange;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableFocusChange;
use crossterm::event::EnableMouseCapture;
use crossterm::event::KeyboardEnhancementFlags;
use crossterm::event::PopKeyboardEnhancementFlags;
use crossterm::event::PushKeyboardEnhancementFlags;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;

use crate::CellCoord;
use crate::GridSize;
use crate::surface::Color;
use crate::surface::Framebuffer;

/// Terminal columns per grid cell. Terminal cells are roughly twice as tall as they are wide,
/// so two columns make a square.
pub const CELL_COLUMNS: u16 = 2;

/// The terminal's size, and how grid pixels map onto it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub columns: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Grid coordinates of a terminal cell
    pub fn to_grid(&self, column: u16, row: u16) -> (CellCoord, CellCoord) {
        (
            CellCoord::from(column / CELL_COLUMNS),
            CellCoord::from(row),
        )
    }

    /// Whether a `w` by `h` grid plus the help line fits on screen
    pub fn fits(&self, w: GridSize, h: GridSize) -> bool {
        u32::from(w) * u32::from(CELL_COLUMNS) <= u32::from(self.columns)
            && u32::from(h) < u32::from(self.rows)
    }
}

/// Owns the terminal while the shell runs, and gives it back on drop
pub struct Screen {
    out: Stdout,

    /// Whether key release events were requested
    enhanced: bool,
}

impl Screen {
    pub fn enter(title: &str) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);

        // From here on, dropping the screen undoes whatever was set up
        let mut screen = Self {
            out: io::stdout(),
            enhanced,
        };

        setup(&mut screen.out, title, enhanced)?;

        Ok(screen)
    }

    /// Whether the terminal will tell us when keys are released
    pub fn reports_releases(&self) -> bool {
        self.enhanced
    }

    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, terminal::Clear(terminal::ClearType::All))
    }

    pub fn present(&mut self, fb: &Framebuffer, viewport: &Viewport, help: &str) -> io::Result<()> {
        present(&mut self.out, fb, viewport, help)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = teardown(&mut self.out, self.enhanced);
        let _ = terminal::disable_raw_mode();
    }
}

/// Switch to the alternate screen and turn on everything the shell reads: mouse events, focus
/// changes, and key releases when `enhanced`
fn setup<W: Write>(out: &mut W, title: &str, enhanced: bool) -> io::Result<()> {
    execute!(
        out,
        terminal::EnterAlternateScreen,
        terminal::SetTitle(title),
        cursor::Hide,
        EnableMouseCapture,
        EnableFocusChange,
    )?;

    if enhanced {
        execute!(
            out,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                    | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
            )
        )?;
    }

    Ok(())
}

/// Undo [`setup`], in reverse order
fn teardown<W: Write>(out: &mut W, enhanced: bool) -> io::Result<()> {
    if enhanced {
        execute!(out, PopKeyboardEnhancementFlags)?;
    }

    execute!(
        out,
        DisableFocusChange,
        DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen,
    )
}

/// Draw `fb` at the top left of the terminal, followed by a line of `help`. Whatever does not
/// fit in `viewport` is clipped.
pub fn present<W: Write>(
    out: &mut W,
    fb: &Framebuffer,
    viewport: &Viewport,
    help: &str,
) -> io::Result<()> {
    let visible_cols = fb.width().min(viewport.columns / CELL_COLUMNS);
    let visible_rows = fb.height().min(viewport.rows.saturating_sub(1));

    // Only switch colors when they actually change
    let mut last: Option<Color> = None;

    for y in 0..visible_rows {
        queue!(out, cursor::MoveTo(0, y))?;

        for &px in &fb.row(y)[..visible_cols as usize] {
            if last != Some(px) {
                queue!(out, style::SetBackgroundColor(to_term_color(px)))?;
                last = Some(px);
            }

            queue!(out, style::Print("  "))?;
        }
    }

    queue!(out, style::ResetColor)?;

    if visible_rows < viewport.rows {
        let help: String = help.chars().take(viewport.columns as usize).collect();

        queue!(
            out,
            cursor::MoveTo(0, visible_rows),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::Print(help),
        )?;
    }

    out.flush()
}

fn to_term_color(c: Color) -> style::Color {
    style::Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}
