//! Two-player tic-tac-toe with move history, running scores and saved games.
//!
//! The core ([`board`], [`game`], [`render`]) is pure and does no I/O.
//! Shells drive it: the terminal binary behind the `terminal` feature,
//! and the leptos browser app behind the `client` feature. Both hand the
//! state to a [`save::Persistence`] after every transition that changes it.
pub mod board;
pub mod game;
pub mod render;
pub mod save;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "terminal")]
pub mod terminal;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Cell index into a board, row-major, 0 through 8.
pub type Index = usize;
/// Rounds won by a player across resets.
pub type Score = u32;

// ============================================================================
// BOARD GEOMETRY
// ============================================================================
/// Cells per side.
pub const SIDE: usize = 3;
/// Cells per board.
pub const CELLS: usize = SIDE * SIDE;
/// Every winning triple, in the order the win detector checks them:
/// rows, then columns, then the two diagonals.
pub const LINES: [[Index; SIDE]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

// ============================================================================
// PLAYERS & PERSISTENCE
// ============================================================================
/// Display name of the player holding X until renamed.
pub const PLAYER_1_NAME: &str = "Player 1";
/// Display name of the player holding O until renamed.
pub const PLAYER_2_NAME: &str = "Player 2";
/// Key of the single saved-game record in any store.
pub const STORAGE_KEY: &str = "ticTacToeGame";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file. The terminal
/// only gets WARN and above so interactive prompts stay readable.
#[cfg(feature = "terminal")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
