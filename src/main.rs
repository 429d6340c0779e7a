use anyhow::Context;
use log::info;
use simplelog::{Config, WriteLogger};
use std::fs::File;
use wrapsnake::{clock, consts, game, input, render};

fn main() -> anyhow::Result<()> {
    // The terminal is in raw mode while playing, so logs go to a file.
    WriteLogger::init(
        consts::LOG_LEVEL,
        Config::default(),
        File::create(consts::LOG_FILE).context("failed to create log file")?,
    )
    .context("failed to initialize logger")?;

    info!(
        "starting on a {}x{} board at {} ticks per second",
        consts::GRID_WIDTH,
        consts::GRID_HEIGHT,
        consts::TICKS_PER_SECOND
    );

    let mut screen = render::Terminal::new().context("failed to set up terminal")?;
    let mut game = game::Game::new();
    game.run(
        &mut screen,
        &mut input::Keyboard,
        &mut clock::FixedRate::new(consts::tick_period()),
    )?;
    drop(screen);

    println!("Thanks for playing! Final score: {}", game.score());
    Ok(())
}
