//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr and stay separate from the console dialogue.

use tracing_subscriber::EnvFilter;

pub fn filter_for(verbose: bool) -> &'static str {
    if verbose {
        "svcreg=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_tracing(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_for(verbose)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
