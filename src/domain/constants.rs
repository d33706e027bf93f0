pub const NOVELTY_KEYWORD: &str = "new";
pub const FEASIBILITY_KEYWORD: &str = "prototype";

pub const GENUINENESS_CONFIDENCE: f64 = 0.85;
pub const SUGGESTED_BUDGET: u64 = 10_000;
pub const PASSED_INITIAL_SCREENING: bool = true;

/// Relative to `$HOME`.
pub const DEFAULT_CONFIG_PATH: &str = ".config/screener/screening.toml";
