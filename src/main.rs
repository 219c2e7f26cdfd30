use std::process;

use tracing::error;
use tracing_subscriber::EnvFilter;

use golife::config::Config;
use golife::game::Game;
use golife::shell;

fn main() {
    // Logs go to stderr, redirect it to keep them off the grid
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::default();
    let mut game = Game::new(&config);

    if let Err(e) = shell::run(&mut game, &config) {
        error!("{e}");
        eprintln!("golife: {e}");
        process::exit(1);
    }
}
