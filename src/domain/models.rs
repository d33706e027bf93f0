use crate::domain::constants::{
    FEASIBILITY_KEYWORD, GENUINENESS_CONFIDENCE, NOVELTY_KEYWORD, PASSED_INITIAL_SCREENING,
    SUGGESTED_BUDGET,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Novelty {
    High,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Feasibility {
    High,
    Medium,
}

/// Result record written to stdout on success.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub novelty: Novelty,
    pub feasibility: Feasibility,
    pub genuineness_confidence: f64,
    pub suggested_budget: u64,
    pub passed_initial_screening: bool,
}

/// Error record written to stderr on any failure.
#[derive(Debug, Serialize)]
pub struct ErrorOut {
    pub error: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ScreeningFile {
    #[serde(default)]
    pub screening: ScreeningConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScreeningConfig {
    pub novelty_keyword: String,
    pub feasibility_keyword: String,
    pub genuineness_confidence: f64,
    pub suggested_budget: u64,
    pub passed_initial_screening: bool,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            novelty_keyword: NOVELTY_KEYWORD.to_string(),
            feasibility_keyword: FEASIBILITY_KEYWORD.to_string(),
            genuineness_confidence: GENUINENESS_CONFIDENCE,
            suggested_budget: SUGGESTED_BUDGET,
            passed_initial_screening: PASSED_INITIAL_SCREENING,
        }
    }
}
