use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "one-piece-rename")]
#[command(
    author,
    version,
    about = "Renames filenames by converting the episode number of One Piece episodes"
)]
pub struct Cli {
    /// Files to rename
    #[arg(required = true, value_name = "FILENAME")]
    pub paths: Vec<PathBuf>,

    /// JSON season table to use instead of the built-in one
    #[arg(short, long, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
