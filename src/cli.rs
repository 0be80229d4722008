use clap::Parser;
use std::path::PathBuf;

/// Strip leading numeric prefixes from `.json` file names and lowercase them
#[derive(Parser, Debug)]
#[command(name = "jup", version)]
pub struct Args {
    /// Directory to process (defaults to the current directory)
    pub dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
