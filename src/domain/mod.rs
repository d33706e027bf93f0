//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — input/output records and the screening config.
//! - `constants.rs` — built-in screening defaults and error messages.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no stdin/stdout or filesystem side effects.
//!
//! ## Compatibility note
//! `Evaluation` and `ErrorOut` are the process's output contract. Field order is
//! part of it. Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
