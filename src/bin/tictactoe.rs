//! Terminal Binary
//!
//! Two players share one terminal. The game is saved to
//! `<dir>/ticTacToeGame.json` after every move.
//!
//! Options: --dir, --fresh

use tictactoe::*;

fn main() -> anyhow::Result<()> {
    log()?;
    terminal::Session::run()
}
