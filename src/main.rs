mod input;
mod renderer;
mod terminal;

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use env_logger::{Env, Target};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use input::{command_from_key, Command};
use model::{Board, Game, GameState};
use renderer::TerminalRenderer;
use terminal::Terminal;

#[derive(Debug, Parser)]
#[command(author, version, about = "Sliding tile puzzle in the terminal")]
struct Cli {
    /// Seed for tile placement (random if omitted)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Board width and height
    #[arg(long, value_name = "N", default_value_t = 4)]
    size: usize,

    /// Write logs (filtered by RUST_LOG, default info) to this file; off if omitted
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

const MAX_SIZE: usize = 16;

/// Logs never go to the terminal, which is busy drawing the board.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => return Ok(()),
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn check_size(size: usize) -> Result<()> {
    ensure!(
        (2..=MAX_SIZE).contains(&size),
        "board size must be between 2 and {}, got {}",
        MAX_SIZE,
        size
    );
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    check_size(cli.size)?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let board = Board::with_size(cli.size, rng);
    let mut game = Game::new(board, TerminalRenderer::new(cli.size));

    let mut terminal = Terminal::enter()?;
    terminal.draw(game.listener())?;
    loop {
        let key = match event::read()? {
            Event::Key(key) => key,
            Event::Resize(..) => {
                terminal.draw(game.listener())?;
                continue;
            }
            _ => continue,
        };
        let command = match command_from_key(key) {
            Some(command) => command,
            None => continue,
        };
        debug!("{:?} in state {:?}", command, game.state());
        match command {
            Command::Swipe(side) => {
                game.play(side);
            }
            Command::Continue => {
                if game.continue_playing() {
                    game.listener_mut().clear_status();
                }
            }
            Command::Reset => game.reset(),
            Command::Quit => break,
        }
        terminal.draw(game.listener())?;
    }

    if game.state() != GameState::Active {
        info!("finished in state {:?}", game.state());
    }
    info!("final score {}", game.score());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;
    run(cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_bounds() {
        assert!(check_size(1).is_err());
        assert!(check_size(2).is_ok());
        assert!(check_size(4).is_ok());
        assert!(check_size(MAX_SIZE).is_ok());
        assert!(check_size(100_000).is_err());
    }

    #[test]
    fn parses_arguments() {
        let cli = Cli::try_parse_from(["game2048", "--seed", "7", "--size", "5"]).unwrap();
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.size, 5);
        assert_eq!(cli.log_file, None);

        let cli = Cli::try_parse_from(["game2048"]).unwrap();
        assert_eq!(cli.size, 4);
    }

    #[test]
    fn logs_go_to_file() {
        init_logging(None).unwrap();
        let path = std::env::temp_dir().join(format!("game2048-{}.log", std::process::id()));
        init_logging(Some(&path)).unwrap();
        log::error!("log file check");
        log::logger().flush();
        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(written.contains("log file check"));
    }
}
