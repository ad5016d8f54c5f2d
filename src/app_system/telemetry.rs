use tracing_subscriber::EnvFilter;

/// Configure tracing once for the process.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (from `--log-level`)
/// applies. Logs go to stderr so they never interleave with the rendered lists.
///
/// ```bash
/// RUST_LOG=debug user_roster          # store and view activity
/// RUST_LOG=user_roster::store=debug user_roster
/// ```
pub fn setup_tracing(default_directive: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
