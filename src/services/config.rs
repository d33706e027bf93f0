use crate::domain::constants::DEFAULT_CONFIG_PATH;
use crate::domain::models::{ScreeningConfig, ScreeningFile};
use crate::error::ScreenError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads screening rules.
///
/// An explicit path must exist and parse. Without one, the per-user file under
/// `$HOME` is used when present; otherwise the built-in defaults apply.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<ScreeningConfig> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => {
                debug!("no screening config found, using defaults");
                return Ok(ScreeningConfig::default());
            }
        },
    };

    debug!(path = %path.display(), "loading screening config");
    let raw = std::fs::read_to_string(&path)
        .map_err(|e| ScreenError::Config(format!("{}: {}", path.display(), e)))?;
    Ok(parse_config(&raw)
        .map_err(|e| ScreenError::Config(format!("{}: {}", path.display(), e)))?)
}

/// The confidence ends up in JSON, which has no NaN or infinity.
pub fn parse_config(raw: &str) -> Result<ScreeningConfig, String> {
    let file: ScreeningFile = toml::from_str(raw).map_err(|e| e.to_string())?;
    let cfg = file.screening;
    if !cfg.genuineness_confidence.is_finite() {
        return Err(format!(
            "genuineness_confidence must be a finite number, got {}",
            cfg.genuineness_confidence
        ));
    }
    Ok(cfg)
}

fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(DEFAULT_CONFIG_PATH))
}
