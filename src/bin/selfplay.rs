//! Engine-vs-engine self-play
//!
//! Plays the selector against itself from the start position (or `--fen`)
//! until the game ends or the move cap is reached. Exits with status 1 on the
//! move cap so scripted runs can flag games that never finish.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chess_opponent::{
    Difficulty, EngineConfig, MoveSelector, OpeningBook, RulesEngine, ShakmatyPosition,
    TerminalStatus,
};

#[derive(Parser, Debug)]
#[command(name = "selfplay", version, about = "Play the chess engine against itself")]
struct Cli {
    /// Starting position (defaults to the standard start)
    #[arg(long)]
    fen: Option<String>,

    /// Difficulty preset; overridden field by field by the flags below
    #[arg(long, default_value = "hard", value_enum)]
    difficulty: CliDifficulty,

    /// JSON engine config file, used instead of the preset
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth in plies
    #[arg(long)]
    depth: Option<u8>,

    /// Seed for book and tie-break randomness
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Never consult the opening book
    #[arg(long)]
    no_book: bool,

    /// Stop after this many moves (plies)
    #[arg(long, default_value = "200")]
    max_moves: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliDifficulty {
    Easy,
    Medium,
    Hard,
}

impl From<CliDifficulty> for Difficulty {
    fn from(cli: CliDifficulty) -> Self {
        match cli {
            CliDifficulty::Easy => Difficulty::Easy,
            CliDifficulty::Medium => Difficulty::Medium,
            CliDifficulty::Hard => Difficulty::Hard,
        }
    }
}

fn build_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load engine config from {}", path.display()))?,
        None => Difficulty::from(cli.difficulty).config(),
    };
    if let Some(depth) = cli.depth {
        config.depth = depth;
    }
    if cli.no_book {
        config.use_book = false;
    }
    config.validate().context("Invalid engine settings")?;
    Ok(config)
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let mut position = match &cli.fen {
        Some(fen) => ShakmatyPosition::from_fen(fen).context("Failed to parse --fen")?,
        None => ShakmatyPosition::new(),
    };
    let mut selector = MoveSelector::seeded(config, OpeningBook::standard(), cli.seed);

    match &cli.config {
        Some(path) => info!("[SELFPLAY] Engine config from {}", path.display()),
        None => info!(
            "[SELFPLAY] Difficulty: {}",
            Difficulty::from(cli.difficulty).description()
        ),
    }
    info!(
        "[SELFPLAY] Depth {}, book {} ({} positions)",
        selector.config().depth,
        if selector.config().use_book { "on" } else { "off" },
        selector.book().len()
    );
    info!("[SELFPLAY] Starting from {}", position.fen());

    let mut move_count = 0;
    let mut status = position.terminal_status()?;
    while !status.is_terminal() && move_count < cli.max_moves {
        let side = position.side_to_move();
        let Some(choice) = selector
            .choose(&mut position)
            .context("Engine failed to choose a move")?
        else {
            info!("[SELFPLAY] No move found for {}", side);
            break;
        };

        move_count += 1;
        info!("[SELFPLAY] {}. {} plays {}", move_count, side, choice.notation);
        position
            .apply_move(&choice.mv)
            .with_context(|| format!("Rules engine rejected {}", choice.notation))?;
        status = position.terminal_status()?;
    }

    println!("Total moves: {}", move_count);
    println!("Final FEN: {}", position.fen());
    match status {
        TerminalStatus::Checkmate { winner } => println!("Result: Checkmate! Winner: {}", winner),
        TerminalStatus::Stalemate => println!("Result: Draw (stalemate)"),
        TerminalStatus::Draw(kind) => println!("Result: Draw ({:?})", kind),
        TerminalStatus::Ongoing => println!("Result: Unfinished / max moves reached"),
    }

    if !status.is_terminal() && move_count >= cli.max_moves {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
