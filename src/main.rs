#![allow(clippy::enum_variant_names)]

use std::process::ExitCode;

use clap::Parser as _;
use snafu::Report;
use tracing::debug;

use crate::{application::Application, cli::Cli};

mod application;
mod cli;
mod ext;
mod materializer;
mod output;
mod parser;
mod source;
mod tree;

#[compio::main]
async fn main() -> ExitCode {
    let cli_args = Cli::parse();
    setup_tracing(&cli_args);
    output::init_colors();
    debug!("Parsed CLI arguments: {cli_args:?}");

    match Application::run(cli_args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let code = error.exit_code();
            eprintln!("{}", Report::from_error(error));
            ExitCode::from(code)
        }
    }
}

fn setup_tracing(cli_args: &Cli) {
    if let Some(level) = cli_args.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .without_time()
            .compact()
            .init();
    }
}
