//! Log output for the command-line host

const FORMAT_VAR: &str = "TWEETSTORM_LOG_FORMAT";

pub fn logs_are_json() -> bool {
    matches!(std::env::var(FORMAT_VAR).as_deref(), Ok("json"))
}

/// Install a stderr subscriber filtered by `RUST_LOG` (default `info`).
/// `TWEETSTORM_LOG_FORMAT=json` switches to one JSON object per line.
pub fn init_tracing() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let builder = tracing_subscriber::registry().with(filter);

    if logs_are_json() {
        let _ = builder.with(fmt_layer.json().flatten_event(true)).try_init();
    } else {
        let _ = builder.with(fmt_layer.compact()).try_init();
    }
}
