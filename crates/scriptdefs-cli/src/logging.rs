use tracing_subscriber::{EnvFilter, fmt};

/// Initialize stderr logging.
///
/// `RUST_LOG` overrides the filter chosen from `-v` count.
pub fn init(verbose: u8, color: bool) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(color)
        .with_writer(std::io::stderr)
        .init();
}
