/// Failures the screener reports as `{"error": ...}` on stderr.
///
/// The `Display` text of each variant is the exact `error` message callers see.
#[derive(thiserror::Error, Debug)]
pub enum ScreenError {
    #[error("No input received")]
    NoInput,
    #[error("Invalid JSON input")]
    InvalidJson,
    #[error("input must be a JSON object")]
    NotAnObject,
    #[error("description must be a string")]
    DescriptionNotText,
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(String),
}

/// Message for the stderr error record: the first `ScreenError` in the chain,
/// otherwise whatever the outermost error says.
pub fn error_message(err: &anyhow::Error) -> String {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ScreenError>())
        .map(ToString::to_string)
        .unwrap_or_else(|| err.to_string())
}
