//! Logging setup for CGI processes.
//!
//! stdout belongs to the HTTP response, so everything goes to stderr, which
//! CGI servers collect into their error log.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (default `warn`).
pub const LOG_ENV: &str = "CGI_PROBE_LOG";

/// Initialize tracing for a CGI process.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
