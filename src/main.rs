use clap::Parser;
use log::error;
use std::process::ExitCode;

use stockmeta::cli::{run, Cli};

fn main() -> ExitCode {
    // Quiet by default; RUST_LOG=debug shows what the formatter dropped
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();

    match run(cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
