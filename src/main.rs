mod actions;
mod args;
mod clients;
mod config;
mod error;
mod logging;
mod logic;
mod models;
mod utils;

use std::process::ExitCode;

use args::Args;
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    logging::init_tracing("info")?;
    let args = Args::parse();

    match logic::start(args).await {
        Ok(rows) => {
            info!(rows, "export finished");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(error = %e, "export failed");
            actions::set_failed(&e.to_string());
            Ok(ExitCode::FAILURE)
        }
    }
}
