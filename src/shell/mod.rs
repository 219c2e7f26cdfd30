//! A terminal host for an [`App`].
//!
//! The shell owns the terminal, the frame clock and the framebuffer. Once per frame it hands the
//! app a snapshot of the input, then asks it to draw, then puts the result on screen.

use std::io;
use std::time::Instant;

use crossterm::event;
use thiserror::Error;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::GridSize;
use crate::config::Config;
use crate::events::InputSnapshot;
use crate::surface::Framebuffer;
use crate::surface::Surface;

pub mod input;
pub mod screen;

use self::input::InputTracker;
use self::screen::CELL_COLUMNS;
use self::screen::Screen;
use self::screen::Viewport;

/// Callbacks the shell drives, once per frame, in order.
pub trait App {
    /// Advance the app by one frame
    fn update(&mut self, input: &InputSnapshot) -> anyhow::Result<()>;

    /// Paint the current state. Called after every `update`.
    fn draw(&self, surface: &mut dyn Surface);

    /// Size of the surface the app draws on, given the size of the terminal
    fn layout(&self, outside_width: u16, outside_height: u16) -> (GridSize, GridSize);
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Failed to initialize terminal: {0}")]
    Init(#[source] io::Error),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Update failed: {0:#}")]
    Update(anyhow::Error),
}

/// Run `app` until the user quits
pub fn run<A: App>(app: &mut A, config: &Config) -> Result<(), ShellError> {
    let mut screen = Screen::enter(&config.title).map_err(ShellError::Init)?;
    let (columns, rows) = crossterm::terminal::size().map_err(ShellError::Init)?;

    let mut viewport = Viewport::new(columns, rows);
    let (w, h) = app.layout(columns, rows);
    let mut fb = Framebuffer::new(w, h);
    let mut clipped = !check_fit(&viewport, w, h);

    if !screen.reports_releases() {
        info!("terminal does not report key releases, keys count as tapped");
    }

    let mut tracker = InputTracker::new(screen.reports_releases(), config.bindings.quit);
    let frame_time = config.frame_time();
    let help = format!(
        "{}: run/pause  {}: clear  {}: quit",
        config.bindings.toggle, config.bindings.clear, config.bindings.quit
    );

    info!(w, h, ?frame_time, "starting");

    loop {
        let deadline = Instant::now() + frame_time;

        // Poll events for as long as the frame lasts
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if !event::poll(left)? {
                break;
            }

            tracker.handle(&event::read()?);
        }

        if tracker.quit_requested() {
            break;
        }

        if let Some((columns, rows)) = tracker.take_resize() {
            debug!(columns, rows, "terminal resized");

            viewport = Viewport::new(columns, rows);
            clipped |= !check_fit(&viewport, w, h);
            screen.clear()?;
        }

        app.update(&tracker.snapshot(&viewport))
            .map_err(ShellError::Update)?;
        tracker.end_frame();

        app.draw(&mut fb);
        screen.present(&fb, &viewport, &help)?;
    }

    // stderr shares the terminal, so warnings wait until it is handed back
    drop(screen);
    if clipped {
        warn!(w, h, "the terminal was too small at some point, the grid was clipped");
    }

    info!("exiting");

    Ok(())
}

/// Whether a `w` by `h` grid fits in `viewport`
fn check_fit(viewport: &Viewport, w: GridSize, h: GridSize) -> bool {
    let fits = viewport.fits(w, h);

    if !fits {
        info!(
            columns = viewport.columns,
            rows = viewport.rows,
            need_columns = u32::from(w) * u32::from(CELL_COLUMNS),
            need_rows = u32::from(h) + 1,
            "terminal too small, the grid will be clipped"
        );
    }

    fits
}

#[cfg(test)]
mod tests {
    use super::Viewport;
    use super::check_fit;

    #[test]
    fn fit_check() {
        assert!(check_fit(&Viewport::new(80, 31), 40, 30));
        assert!(!check_fit(&Viewport::new(80, 30), 40, 30));
        assert!(!check_fit(&Viewport::new(20, 40), 40, 30));
    }
}
