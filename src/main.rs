use std::env;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

use seqdist::Pipeline;

fn main() -> ExitCode {

    // logs go to stderr, stdout only carries the matrix report
    tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();

    let args: Vec<String> = env::args().collect();
    match Pipeline::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
