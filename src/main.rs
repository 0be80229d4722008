mod cli;

use clap::Parser;
use cli::Args;
use eyre::Result;
use json_unprefix::{Renamer, fs};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    // stdout is reserved for the rename report lines.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let dir = fs::resolve_target_dir(args.dir)?;
    let stdout = std::io::stdout();
    Renamer::new(&dir).run(&mut stdout.lock())?;

    Ok(())
}
