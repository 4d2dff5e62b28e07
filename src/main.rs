mod cli;
mod config;
mod error;
mod output;
mod pipeline;
mod prediction;
mod report;
mod sample;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    output::print_banner();

    let cli = Cli::parse();
    info!("Starting PipeSage - CI/CD Failure Prediction Tool");
    cli.execute()?;

    Ok(())
}
