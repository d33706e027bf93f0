use clap::Parser;
use std::path::PathBuf;

/// With no flags: proposal JSON on stdin, evaluation JSON on stdout.
#[derive(Parser, Debug)]
#[command(
    name = "screener",
    version,
    about = "Placeholder screening for project proposals"
)]
pub struct Cli {
    #[arg(
        long,
        value_name = "FILE",
        help = "Read the proposal JSON from a file instead of stdin (`-` for stdin)"
    )]
    pub input: Option<PathBuf>,
    #[arg(
        long,
        value_name = "FILE",
        env = "SCREENER_CONFIG",
        help = "Screening rules (TOML); defaults to ~/.config/screener/screening.toml if present"
    )]
    pub config: Option<PathBuf>,
    #[arg(long, help = "Pretty-print the evaluation JSON")]
    pub pretty: bool,
    #[arg(
        short,
        long,
        help = "Write debug logs to stderr (interleaved with the error record)"
    )]
    pub verbose: bool,
}
