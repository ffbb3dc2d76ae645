// src/main.rs

use clap::Parser;

use runherd::cli::CliArgs;
use runherd::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.log_level)?;

    runherd::run(args).await
}
