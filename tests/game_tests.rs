use golife::config::Config;
use golife::events::InputSnapshot;
use golife::events::Key;
use golife::events::MouseButton;
use golife::game::ACTIVE_BACKGROUND;
use golife::game::FOREGROUND;
use golife::game::Game;
use golife::game::PAUSED_BACKGROUND;
use golife::shell::App;
use golife::surface::Color;
use golife::surface::Framebuffer;

fn small_game() -> Game {
    let config = Config {
        width: 7,
        height: 5,
        ..Config::default()
    };

    Game::new(&config)
}

/// `#` for live cells, `.` for the active background, `,` for the paused one
fn render(game: &Game) -> String {
    let (w, h) = game.layout(0, 0);
    let mut fb = Framebuffer::new(w, h);
    game.draw(&mut fb);

    fb.rows()
        .map(|row| {
            row.iter()
                .map(|&c| shade(c))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn shade(c: Color) -> char {
    match c {
        FOREGROUND => '#',
        ACTIVE_BACKGROUND => '.',
        PAUSED_BACKGROUND => ',',
        _ => '?',
    }
}

fn click(x: i32, y: i32) -> InputSnapshot {
    InputSnapshot::new()
        .with_cursor(x, y)
        .with_button(MouseButton::Left)
}

#[test]
fn draw_blinker_and_run() -> anyhow::Result<()> {
    let mut game = small_game();

    for x in 2..5 {
        game.update(&click(x, 2))?;
    }

    insta::assert_snapshot!(render(&game), @r"
    ,,,,,,,
    ,,,,,,,
    ,,###,,
    ,,,,,,,
    ,,,,,,,
    ");

    // Tap space: pressed on one frame, released on the next
    game.update(&InputSnapshot::new().with_key(Key::Space))?;
    game.update(&InputSnapshot::new())?;
    assert!(game.is_running());

    // Still the counter's first lap, no step yet
    insta::assert_snapshot!(render(&game), @r"
    .......
    .......
    ..###..
    .......
    .......
    ");

    // 3 clicks and 2 key frames took the counter to 5, it wraps to 0 seven updates later
    for _ in 0..6 {
        game.update(&InputSnapshot::new())?;
    }
    assert_eq!(game.steps(), 0);

    game.update(&InputSnapshot::new())?;
    assert_eq!(game.steps(), 1);

    insta::assert_snapshot!(render(&game), @r"
    .......
    ...#...
    ...#...
    ...#...
    .......
    ");

    Ok(())
}

#[test]
fn erase_and_clear() -> anyhow::Result<()> {
    let mut game = small_game();

    for (x, y) in [(0, 0), (6, 4), (3, 2)] {
        game.update(&click(x, y))?;
    }

    let erase = InputSnapshot::new()
        .with_cursor(6, 4)
        .with_button(MouseButton::Right);
    game.update(&erase)?;

    insta::assert_snapshot!(render(&game), @r"
    #,,,,,,
    ,,,,,,,
    ,,,#,,,
    ,,,,,,,
    ,,,,,,,
    ");

    game.update(&InputSnapshot::new().with_key(Key::Escape))?;
    assert_eq!(game.grid().generation(game.current()).population(), 0);

    Ok(())
}

#[test]
fn block_survives_running() -> anyhow::Result<()> {
    let mut game = small_game();

    for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
        game.set_cell(x, y, true);
    }

    game.update(&InputSnapshot::new().with_key(Key::Space))?;
    for _ in 0..60 {
        game.update(&InputSnapshot::new())?;
    }

    assert!(game.steps() >= 5);
    insta::assert_snapshot!(render(&game), @r"
    .......
    .##....
    .##....
    .......
    .......
    ");

    Ok(())
}
