//! Command-line options.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "user_roster",
    version,
    about = "Add users, filter them, and watch a flat and a grouped list update"
)]
pub struct Cli {
    /// Name to enter into the add-user form at startup (repeatable).
    #[arg(long = "seed", value_name = "NAME")]
    pub seed: Vec<String>,

    /// Filter to enter and apply at startup.
    #[arg(long = "filter", value_name = "TEXT")]
    pub filter: Option<String>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long = "log-level", value_name = "DIRECTIVE", default_value = "warn")]
    pub log_level: String,

    /// Capacity of the input event queue.
    #[arg(long = "queue-depth", value_name = "N", default_value_t = 32)]
    pub queue_depth: usize,
}
