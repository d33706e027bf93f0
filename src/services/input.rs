use crate::error::ScreenError;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

/// Reads the whole proposal document. `None` or `-` means stdin.
pub fn read_input(path: Option<&Path>) -> Result<String, ScreenError> {
    match path {
        Some(p) if p != Path::new("-") => Ok(std::fs::read_to_string(p)?),
        _ => {
            let mut raw = String::new();
            std::io::stdin().lock().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

/// Only `description` is materialized; every other value is skipped unparsed,
/// so extra keys never fail on numbers outside the `f64` range.
#[derive(Deserialize)]
struct Submission {
    #[serde(default, deserialize_with = "text")]
    description: Option<String>,
}

// Present keys must hold a string; `null` is not one.
fn text<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    String::deserialize(de).map(Some)
}

/// Pulls `description` out of the raw document.
///
/// Empty text and malformed JSON have dedicated errors. Anything else that is
/// not an object with an optional string `description` is rejected too; a
/// missing key yields an empty description.
pub fn parse_description(raw: &str) -> Result<String, ScreenError> {
    if raw.is_empty() {
        return Err(ScreenError::NoInput);
    }
    serde_json::from_str::<IgnoredAny>(raw).map_err(|_| ScreenError::InvalidJson)?;
    // Well-formed at this point, so a leading `{` means the document is an object.
    if !raw.trim_start().starts_with('{') {
        return Err(ScreenError::NotAnObject);
    }
    let submission: Submission =
        serde_json::from_str(raw).map_err(|_| ScreenError::DescriptionNotText)?;
    Ok(submission.description.unwrap_or_default())
}
