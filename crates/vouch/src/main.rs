use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

mod cli;
mod report;

#[tokio::main]
async fn main() {
    // Logs go to stderr so a `--json` report stays a single clean stdout line.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    std::process::exit(cli.execute().await);
}
