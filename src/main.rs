use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stickyboard::cli::{run_session, Cli, SessionOptions};
use stickyboard::{Board, BoardConfig, Result};

/// Initialize tracing on stderr so stdout only carries the board.
fn init_tracing(config: &BoardConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_filter().to_string()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> Result<BoardConfig> {
    let mut config = match &cli.config {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.json {
        config.json = true;
    }
    Ok(config)
}

fn run(cli: Cli, config: BoardConfig) -> Result<()> {
    let mut board = Board::from_seed(config.seed);
    let stdout = io::stdout();
    let stderr = io::stderr();

    match &cli.script {
        Some(path) => {
            tracing::info!(script = %path.display(), "reading gestures from script");
            let input = BufReader::new(File::open(path)?);
            let options = SessionOptions::from_config(&config, false);
            run_session(&mut board, input, &mut stdout.lock(), &mut stderr.lock(), &options)
        }
        None => {
            let interactive = atty::is(atty::Stream::Stdin);
            let options = SessionOptions::from_config(&config, interactive);
            run_session(
                &mut board,
                io::stdin().lock(),
                &mut stdout.lock(),
                &mut stderr.lock(),
                &options,
            )
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    init_tracing(&config);

    if let Err(e) = run(cli, config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
