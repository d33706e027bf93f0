//! Command handler layer.
//!
//! Parses nothing itself: takes the clap `Cli`, wires services together and
//! owns the stdout side of the contract. Failures bubble up to `main`, which
//! turns them into the stderr error record.

pub mod evaluate;

pub use evaluate::handle_evaluate;
