use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod error;
mod services;
mod telemetry;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    match commands::handle_evaluate(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "screening failed");
            services::output::print_error(&error::error_message(&err));
            ExitCode::FAILURE
        }
    }
}
