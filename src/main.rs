use anyhow::Result;
use clap::Parser;
use std::io;
use tube_player::command::repl;
use tube_player::model::Library;
use tube_player::picker::RandomPicker;
use tube_player::VideoPlayer;

#[derive(Parser, Debug)]
#[command(name = "tube-player")]
#[command(about = "Command-driven video catalog and playlist console", long_about = None)]
struct Args {
    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let library = Library::demo();
    log::info!("Catalog loaded: {} videos", library.len());

    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    let mut player = VideoPlayer::new(library, RandomPicker::new(), stdin, stdout);
    repl::run(&mut player)
}
