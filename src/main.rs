use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use maze_game::app::{self, Outcome};
use maze_game::maze::{generate, time_seed};
use maze_game::ui::render_text;
use maze_game::{Config, Game};

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(&config)?;

    let seed = config.seed.unwrap_or_else(time_seed);
    let grid = generate(config.width, config.height, Some(seed))
        .with_context(|| format!("cannot build a {}x{} maze", config.width, config.height))?;
    info!(width = config.width, height = config.height, seed, "maze ready");

    if config.print {
        print!("{}", render_text(&grid, None));
        return Ok(());
    }

    let mut game = Game::new(grid, seed);
    if app::run(&mut game)? == Outcome::Won {
        println!("You reached the end! ({} moves, seed {})", game.moves, seed);
    }
    Ok(())
}

fn init_tracing(config: &Config) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env());
    let _ = match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    Ok(())
}
