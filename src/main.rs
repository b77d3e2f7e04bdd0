//! BL front-end CLI entry point

use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG controls verbosity; default to info when unset or malformed.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    bl::cli::run();
}
