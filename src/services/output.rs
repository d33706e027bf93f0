use crate::domain::models::{ErrorOut, Evaluation};
use std::io::Write;

pub fn render_evaluation(evaluation: &Evaluation, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(evaluation)
    } else {
        serde_json::to_string(evaluation)
    }
}

pub fn print_evaluation(evaluation: &Evaluation, pretty: bool) -> anyhow::Result<()> {
    let line = render_evaluation(evaluation, pretty)?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}

/// Writes the error record to stderr. Last stop for every failure, so write
/// errors are dropped.
pub fn print_error(message: &str) {
    let record = ErrorOut {
        error: message.to_string(),
    };
    if let Ok(line) = serde_json::to_string(&record) {
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }
}
