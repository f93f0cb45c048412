use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;
mod audio;
mod config;
mod library;
mod runtime;
mod ui;

#[derive(Parser)]
#[command(name = "reprise", version, about = "A small terminal music player")]
struct Cli {
    /// Directory containing the audio files to play.
    #[arg(long, value_name = "DIR")]
    path: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = runtime::load_settings();

    if let Err(err) = runtime::run(&cli.path, &settings) {
        eprintln!("reprise: {err}");
        std::process::exit(1);
    }
}
