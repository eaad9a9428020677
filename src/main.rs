//! Terminal Tetris runner.
//!
//! Parses flags, sets up optional file logging, then hands the terminal to a
//! single game session.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::info;

use tty_tetris::core::{GameConfig, GameState, RandomPieces};
use tty_tetris::input::TerminalInput;
use tty_tetris::session::{run, SessionOutcome};
use tty_tetris::term::{TerminalDisplay, MAX_BOARD_SIZE};
use tty_tetris::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, SPAWN_COL, WIN_SCORE};

#[derive(Parser, Debug)]
#[command(name = "tty-tetris", version, about = "Falling-block puzzle game for the terminal")]
struct Args {
    /// Seed for the piece sequence; random when omitted
    #[arg(long, env = "TTY_TETRIS_SEED")]
    seed: Option<u64>,

    /// Board height in rows
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: usize,

    /// Board width in columns
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: usize,

    /// Score that wins the game
    #[arg(long, default_value_t = WIN_SCORE)]
    win_score: u32,

    /// Write logs here; the terminal itself is never logged to
    #[arg(long, env = "TTY_TETRIS_LOG_FILE")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let min_width = usize::try_from(SPAWN_COL)? + 4;
        let (max_height, max_width) = MAX_BOARD_SIZE;
        ensure!(
            (2..=max_height).contains(&self.height),
            "--height must be between 2 and {max_height}, got {}",
            self.height
        );
        ensure!(
            (min_width..=max_width).contains(&self.width),
            "--width must be between {min_width} and {max_width}, got {}",
            self.width
        );
        ensure!(self.win_score > 0, "--win-score must be positive");

        Ok(GameConfig::default()
            .with_dimensions(self.height, self.width)
            .with_win_score(self.win_score))
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to install logger")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = args.game_config()?;
    let source = match args.seed {
        Some(seed) => RandomPieces::from_seed(seed),
        None => RandomPieces::from_entropy(),
    };
    let mut state = GameState::with_source(config, source);
    info!(
        "starting {}x{} game, target {}, seed {:?}",
        config.height, config.width, config.win_score, args.seed
    );

    let mut display = TerminalDisplay::default();
    let mut input = TerminalInput::new();
    display.enter()?;

    let result = run(&mut state, &mut display, &mut input);

    // Always try to restore terminal state.
    let restored = display.exit();
    let outcome = result.context("game session failed")?;
    restored?;

    match outcome {
        SessionOutcome::Won => println!("You won with {} points.", state.score()),
        SessionOutcome::Lost => println!("Game over with {} points.", state.score()),
        SessionOutcome::Quit => {}
    }
    Ok(())
}
