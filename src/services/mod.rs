//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `evaluator.rs` — keyword scoring (pure).
//! - `input.rs` — reading the proposal and extracting `description`.
//! - `config.rs` — screening rules from TOML, with built-in defaults.
//! - `output.rs` — stdout/stderr JSON writers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod evaluator;
pub mod input;
pub mod output;
