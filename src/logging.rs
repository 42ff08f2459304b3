//! Logging init: stderr by default, a daily rolling file when `LOG_DIR` is set.

use std::env;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,linkform=info";

/// Installs the global subscriber. Keep the guard alive until exit or
/// buffered lines are lost.
pub fn init() -> WorkerGuard {
    let (writer, guard) = match env::var("LOG_DIR") {
        Ok(dir) => tracing_appender::non_blocking(tracing_appender::rolling::daily(
            dir,
            "linkform.log",
        )),
        Err(_) => tracing_appender::non_blocking(std::io::stderr()),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false);

    if env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }

    guard
}
