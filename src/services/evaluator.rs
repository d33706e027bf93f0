//! Keyword placeholder for proposal scoring.
//!
//! Two independent, case-insensitive substring checks decide `novelty` and
//! `feasibility`; the remaining fields come straight from the config.

use crate::domain::models::{Evaluation, Feasibility, Novelty, ScreeningConfig};

pub fn evaluate_project(description: &str, config: &ScreeningConfig) -> Evaluation {
    let text = description.to_lowercase();

    let novelty = if mentions(&text, &config.novelty_keyword) {
        Novelty::High
    } else {
        Novelty::Low
    };
    let feasibility = if mentions(&text, &config.feasibility_keyword) {
        Feasibility::High
    } else {
        Feasibility::Medium
    };

    Evaluation {
        novelty,
        feasibility,
        genuineness_confidence: config.genuineness_confidence,
        suggested_budget: config.suggested_budget,
        passed_initial_screening: config.passed_initial_screening,
    }
}

// `text` is already lowercased.
fn mentions(text: &str, keyword: &str) -> bool {
    text.contains(&keyword.to_lowercase())
}
