/// Logging setup for the `log` facade, backed by `env_logger` on stderr.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v`:
/// none = warn, `-v` = info, `-vv` = debug, `-vvv` = trace.
use env_logger::{Builder, Env};

/// Filter used when `RUST_LOG` is not set.
#[must_use]
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global logger. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let _ = Builder::from_env(Env::default().default_filter_or(default_filter(verbosity)))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
