use tracing::debug;
use tracing::trace;

use crate::CellCoord;
use crate::GridSize;
use crate::cadence::Cadence;
use crate::config::Bindings;
use crate::config::Config;
use crate::edge::Edge;
use crate::edge::EdgeDetector;
use crate::events::InputSnapshot;
use crate::events::MouseButton;
use crate::grid::GenId;
use crate::grid::Grid;
use crate::rule_set::B3S23;
use crate::shell::App;
use crate::surface::Color;
use crate::surface::Surface;

pub const ACTIVE_BACKGROUND: Color = Color::grey(255);
pub const PAUSED_BACKGROUND: Color = Color::grey(240);
pub const FOREGROUND: Color = Color::BLACK;

/// The interactive simulation: a grid, the buffer currently on display, and the run/pause
/// state machine driving it.
pub struct Game {
    grid: Grid,

    /// The generation being displayed and edited
    current: GenId,

    running: bool,

    /// Paces simulation steps while running
    cadence: Cadence,

    /// Latch on the run/pause key. Only its release flips `running`.
    toggle: EdgeDetector,

    bindings: Bindings,

    /// Number of steps taken so far
    steps: u64,
}

impl Game {
    /// A paused game on an empty grid
    pub fn new(config: &Config) -> Self {
        Self {
            grid: Grid::new(config.width, config.height, B3S23),
            current: GenId::default(),
            running: false,
            cadence: Cadence::new(config.frames_per_step),
            toggle: EdgeDetector::new(),
            bindings: config.bindings.clone(),
            steps: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The generation on display
    pub fn current(&self) -> GenId {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Set a cell of the generation on display
    pub fn set_cell(&mut self, x: CellCoord, y: CellCoord, alive: bool) {
        self.grid.set(self.current, x, y, alive);
    }

    fn step(&mut self) {
        self.current = self.grid.advance(self.current);
        self.steps += 1;

        trace!(
            steps = self.steps,
            population = self.grid.generation(self.current).population(),
            "advanced"
        );
    }
}

impl App for Game {
    fn update(&mut self, input: &InputSnapshot) -> anyhow::Result<()> {
        let (x, y) = input.cursor;

        if input.is_mouse_button_pressed(MouseButton::Left) {
            self.grid.set(self.current, x, y, true);
        } else if input.is_mouse_button_pressed(MouseButton::Right) {
            self.grid.set(self.current, x, y, false);
        }

        let toggle_down = input.is_key_pressed(self.bindings.toggle);
        if let Some(Edge::Released) = self.toggle.sample(toggle_down) {
            self.running = !self.running;
            debug!(running = self.running, "toggled simulation");
        }

        if input.is_key_pressed(self.bindings.clear) {
            self.grid.reset(self.current);
            trace!("cleared grid");
        }

        if self.running && self.cadence.is_due() {
            self.step();
        }

        self.cadence.tick();

        Ok(())
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let background = if self.running {
            ACTIVE_BACKGROUND
        } else {
            PAUSED_BACKGROUND
        };

        surface.fill(background);

        for (x, y) in self.grid.generation(self.current).live_cells() {
            surface.set(x, y, FOREGROUND);
        }
    }

    fn layout(&self, _outside_width: u16, _outside_height: u16) -> (GridSize, GridSize) {
        (self.grid.width(), self.grid.height())
    }
}

#[cfg(test)]
mod tests {
    use super::Game;
    use super::PAUSED_BACKGROUND;
    use crate::config::Config;
    use crate::events::InputSnapshot;
    use crate::events::Key;
    use crate::events::MouseButton;
    use crate::shell::App;
    use crate::surface::Framebuffer;

    fn game() -> Game {
        Game::new(&Config::default())
    }

    fn idle() -> InputSnapshot {
        InputSnapshot::new()
    }

    fn space() -> InputSnapshot {
        InputSnapshot::new().with_key(Key::Space)
    }

    fn seed_blinker(game: &mut Game) {
        for x in 4..7 {
            game.set_cell(x, 5, true);
        }
    }

    fn is_horizontal(game: &Game) -> bool {
        (4..7).all(|x| game.grid.get(game.current, x, 5))
    }

    #[test]
    fn starts_paused() {
        let game = game();

        assert!(!game.is_running());
        assert_eq!(game.cadence.frame(), 0);
        assert_eq!(game.grid.generation(game.current).population(), 0);
    }

    #[test]
    fn left_draws_right_erases() {
        let mut game = game();

        let draw = InputSnapshot::new()
            .with_cursor(7, 8)
            .with_button(MouseButton::Left);
        game.update(&draw).unwrap();
        assert!(game.grid.get(game.current, 7, 8));

        let erase = InputSnapshot::new()
            .with_cursor(7, 8)
            .with_button(MouseButton::Right);
        game.update(&erase).unwrap();
        assert!(!game.grid.get(game.current, 7, 8));
    }

    #[test]
    fn left_wins_over_right() {
        let mut game = game();

        let both = InputSnapshot::new()
            .with_cursor(2, 3)
            .with_button(MouseButton::Left)
            .with_button(MouseButton::Right);
        game.update(&both).unwrap();

        assert!(game.grid.get(game.current, 2, 3));
    }

    #[test]
    fn pointer_outside_grid_is_ignored() {
        let mut game = game();

        for (x, y) in [(-1, 0), (40, 0), (0, 30), (-5, -5)] {
            let draw = InputSnapshot::new()
                .with_cursor(x, y)
                .with_button(MouseButton::Left);
            game.update(&draw).unwrap();
        }

        assert_eq!(game.grid.generation(game.current).population(), 0);
    }

    #[test]
    fn held_toggle_flips_once() {
        let mut game = game();

        for _ in 0..30 {
            game.update(&space()).unwrap();
            assert!(!game.is_running());
        }

        game.update(&idle()).unwrap();
        assert!(game.is_running());

        for _ in 0..5 {
            game.update(&idle()).unwrap();
        }
        assert!(game.is_running());
    }

    #[test]
    fn two_taps_flip_twice() {
        let mut game = game();

        let mut flips = 0;
        let mut last = game.is_running();
        for input in [space(), idle(), space(), idle()] {
            game.update(&input).unwrap();

            if game.is_running() != last {
                flips += 1;
                last = game.is_running();
            }
        }

        assert_eq!(flips, 2);
        assert!(!game.is_running());
    }

    #[test]
    fn clear_resets_current() {
        let mut game = game();
        seed_blinker(&mut game);

        let clear = InputSnapshot::new().with_key(Key::Escape);
        game.update(&clear).unwrap();
        assert_eq!(game.grid.generation(game.current).population(), 0);

        // Still harmless while held
        game.update(&clear).unwrap();
        assert_eq!(game.grid.generation(game.current).population(), 0);
    }

    #[test]
    fn paused_never_steps() {
        let mut game = game();
        seed_blinker(&mut game);

        for _ in 0..50 {
            game.update(&idle()).unwrap();
        }

        assert_eq!(game.steps(), 0);
        assert!(is_horizontal(&game));
    }

    #[test]
    fn steps_once_every_eleven_updates() {
        let mut game = game();
        seed_blinker(&mut game);
        game.running = true;

        let mut changed_on = Vec::new();
        let mut was_horizontal = is_horizontal(&game);
        for i in 0..33 {
            game.update(&idle()).unwrap();

            if is_horizontal(&game) != was_horizontal {
                changed_on.push(i);
                was_horizontal = !was_horizontal;
            }
        }

        assert_eq!(changed_on, vec![0, 11, 22]);
        assert_eq!(game.steps(), 3);
    }

    #[test]
    fn cadence_keeps_counting_while_paused() {
        let mut game = game();
        seed_blinker(&mut game);

        // Press on frame 0, release on frame 1. The counter reads 1 when running starts, so
        // the first step lands on frame 11.
        game.update(&space()).unwrap();
        game.update(&idle()).unwrap();
        assert!(game.is_running());

        for _ in 2..11 {
            game.update(&idle()).unwrap();
        }
        assert_eq!(game.steps(), 0);

        game.update(&idle()).unwrap();
        assert_eq!(game.steps(), 1);
        assert!(!is_horizontal(&game));
    }

    #[test]
    fn draw_paused() {
        let mut game = game();
        seed_blinker(&mut game);

        let mut fb = Framebuffer::new(40, 30);
        game.draw(&mut fb);

        assert_eq!(fb.pixel(0, 0), Some(PAUSED_BACKGROUND));
        assert_eq!(fb.pixel(5, 5), Some(super::FOREGROUND));
    }

    #[test]
    fn layout_is_grid_size() {
        let game = game();

        assert_eq!(game.layout(800, 600), (40, 30));
        assert_eq!(game.layout(1, 1), (40, 30));
    }
}
