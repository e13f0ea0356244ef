use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "Two-player tic-tac-toe with saved scores", long_about = None)]
pub struct Args {
    #[arg(long, default_value = ".", help = "Directory holding the saved game")]
    pub dir: PathBuf,
    #[arg(long, help = "Delete any saved game before starting")]
    pub fresh: bool,
}
