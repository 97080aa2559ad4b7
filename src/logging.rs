//! Logging setup for generator binaries.
//!
//! The library itself only emits `tracing` events (cache misses at
//! `trace`, cache resets and configuration loading at `debug`). Binaries
//! that want to see them can call [`init`] once at startup, which installs
//! a `tracing-subscriber` when the `tracing-subscriber` feature is on.
//!
//! # Environment Variables
//!
//! - `STRMANGLE_DEBUG=true|1|yes` - Enable debug logging
//! - `STRMANGLE_LOG_LEVEL=trace|debug|info|warn|error` - Set a specific level
//! - `STRMANGLE_LOG_FORMAT=json|pretty|compact` - Output format (default: json)
//!
//! ```rust,no_run
//! strmangle::logging::init();
//! ```

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

const DEBUG_VAR: &str = "STRMANGLE_DEBUG";
const LEVEL_VAR: &str = "STRMANGLE_LOG_LEVEL";
const FORMAT_VAR: &str = "STRMANGLE_LOG_FORMAT";

/// Check if debug logging is enabled via `STRMANGLE_DEBUG`.
pub fn is_debug_enabled() -> bool {
    parse_debug(env::var(DEBUG_VAR).ok().as_deref())
}

/// The log level from `STRMANGLE_LOG_LEVEL`.
///
/// Defaults to "debug" if `STRMANGLE_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    parse_level(env::var(LEVEL_VAR).ok().as_deref(), is_debug_enabled())
}

/// The output format from `STRMANGLE_LOG_FORMAT`.
pub fn get_log_format() -> &'static str {
    parse_format(env::var(FORMAT_VAR).ok().as_deref())
}

/// Initialize logging from the environment.
///
/// Subsequent calls are no-ops. Nothing is installed unless
/// `STRMANGLE_DEBUG` or `STRMANGLE_LOG_LEVEL` is set.
pub fn init() {
    if !is_debug_enabled() && env::var(LEVEL_VAR).is_err() {
        return;
    }
    install(get_log_level());
}

/// Initialize logging at an explicit level, ignoring the environment.
pub fn init_with_level(level: &str) {
    install(parse_level(Some(level), false));
}

fn install(level: &'static str) {
    INIT.call_once(|| {
        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let filter = EnvFilter::try_new(format!(
                "strmangle={level},strmangle_case={level},strmangle_sql={level}"
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            let format = get_log_format();
            let registry = tracing_subscriber::registry().with(filter);
            let installed = match format {
                "json" => registry.with(fmt::layer().json()).try_init(),
                "compact" => registry.with(fmt::layer().compact()).try_init(),
                _ => registry.with(fmt::layer().pretty()).try_init(),
            };

            if installed.is_ok() {
                tracing::info!(level, format, "strmangle logging initialized");
            }
        }

        #[cfg(not(feature = "tracing-subscriber"))]
        {
            let _ = level;
        }
    });
}

fn parse_debug(value: Option<&str>) -> bool {
    value.is_some_and(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
}

fn parse_level(value: Option<&str>, debug: bool) -> &'static str {
    let fallback = if debug { "debug" } else { "warn" };
    match value.map(str::to_lowercase).as_deref() {
        Some("trace") => "trace",
        Some("debug") => "debug",
        Some("info") => "info",
        Some("warn") => "warn",
        Some("error") => "error",
        _ => fallback,
    }
}

fn parse_format(value: Option<&str>) -> &'static str {
    match value.map(str::to_lowercase).as_deref() {
        Some("pretty") => "pretty",
        Some("compact") => "compact",
        _ => "json",
    }
}
