use crate::cli::Cli;
use crate::services::{config, evaluator, input, output};
use tracing::{debug, info};

pub fn handle_evaluate(cli: &Cli) -> anyhow::Result<()> {
    let raw = input::read_input(cli.input.as_deref())?;
    debug!(bytes = raw.len(), "read proposal");

    let description = input::parse_description(&raw)?;
    let rules = config::load_config(cli.config.as_deref())?;
    let evaluation = evaluator::evaluate_project(&description, &rules);
    info!(
        novelty = ?evaluation.novelty,
        feasibility = ?evaluation.feasibility,
        passed = evaluation.passed_initial_screening,
        "proposal evaluated"
    );

    output::print_evaluation(&evaluation, cli.pretty)
}
