//! Picks the tracing level for a run of the CLI.

pub(crate) const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Returns the level to log at, and a warning to emit once logging is up.
///
/// `--verbose` forces DEBUG. Otherwise `env_val` (the name of the variable
/// that was set, and its value) is parsed case-insensitively as one of
/// `error`, `warn`, `info`, `debug`, `trace` or `verbose` (an alias for
/// `debug`). Anything else falls back to [`DEFAULT_LOG_LEVEL`] with a
/// warning.
pub(crate) fn choose(
    verbose: bool,
    env_val: Option<(&str, &str)>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }
    let Some((var_name, value)) = env_val else {
        return (DEFAULT_LOG_LEVEL, None);
    };

    let value = value.trim();
    let level = match value.to_ascii_lowercase().as_str() {
        "error" => tracing::Level::ERROR,
        "warn" => tracing::Level::WARN,
        "info" => tracing::Level::INFO,
        "debug" | "verbose" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => return (
            DEFAULT_LOG_LEVEL,
            Some(format!(
                "Ignoring `{var_name}={value}`: expected one of error, warn, \
                info, debug, trace or verbose. Logging at `{DEFAULT_LOG_LEVEL}`."
            )),
        ),
    };
    (level, None)
}
