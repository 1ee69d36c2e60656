//! Diagnostic logging on stderr, kept apart from the report on stdout.

use tracing_subscriber::EnvFilter;

/// Filter directive for the number of `-v` flags given.
pub fn directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive(verbose)))
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}
