//! The `log` module provides initialisation and configuration of the application's logging system.
//!
//! All log output goes to stderr, leaving stdout for the compiler's own messages. Colours are
//! applied only when stderr is a terminal. The log level can be raised through the
//! `NULLC_LOG_LEVEL` environment variable; an unrecognised value is ignored.
use anyhow::{Context, Result, bail};
use chrono::Local;
use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record};
use std::env;
use std::fmt::{Arguments, Display};
use std::io::IsTerminal;
use std::sync::OnceLock;

/// Whether a logger was installed by [`init`]. Unset until the first call.
static LOGGER_INIT: OnceLock<bool> = OnceLock::new();

/// The default log level for the program.
///
/// Used as a fallback if the user hasn't specified a valid level with the `NULLC_LOG_LEVEL`
/// environment variable.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// The environment variable used to override the log level
const LOG_LEVEL_ENV_VAR: &str = "NULLC_LOG_LEVEL";

/// Whether the program logger has been initialised
pub fn is_logger_initialised() -> bool {
    LOGGER_INIT.get().copied().unwrap_or(false)
}

/// Convert a user-supplied log level name to a [`LevelFilter`]
fn parse_log_level(log_level: &str) -> Result<LevelFilter> {
    let level = match log_level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        unknown => bail!("Unknown log level: {unknown}"),
    };

    Ok(level)
}

/// Choose the log level from the user's requested value, if any.
///
/// Missing or unrecognised values give [`DEFAULT_LOG_LEVEL`].
fn resolve_log_level(requested: Option<&str>) -> LevelFilter {
    requested
        .and_then(|level| parse_log_level(level).ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Initialise the program logger using the `fern` logging library with colourised output.
///
/// The level is taken from the `NULLC_LOG_LEVEL` environment variable, falling back to `warn`.
/// Possible log level options are:
///
/// * `off`
/// * `error`
/// * `warn`
/// * `info`
/// * `debug`
/// * `trace`
///
/// The logger is global, so only the first call has any effect. An error is returned only if
/// another logger had already been installed.
pub fn init() -> Result<()> {
    let requested = env::var(LOG_LEVEL_ENV_VAR).ok();
    let log_level = resolve_log_level(requested.as_deref());

    let mut outcome = Ok(());
    LOGGER_INIT.get_or_init(|| {
        outcome = create_dispatch(log_level)
            .apply()
            .context("Another logger has already been installed");
        outcome.is_ok()
    });

    outcome
}

/// Configure the logger to write to stderr at the given level
fn create_dispatch(log_level: LevelFilter) -> Dispatch {
    // Set up colours for log levels
    let colours = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::Magenta);

    // Automatically apply colours only if the output is a terminal
    let use_colour = std::io::stderr().is_terminal();

    Dispatch::new()
        .format(move |out, message, record| {
            write_log_colour(out, message, record, use_colour, &colours);
        })
        .level(log_level)
        .chain(std::io::stderr())
}

/// Write to the log in the format we want for nullc
fn write_log<T: Display>(out: FormatCallback, level: T, target: &str, message: &Arguments) {
    let timestamp = Local::now().format("%H:%M:%S");

    out.finish(format_args!("[{timestamp} {level} {target}] {message}"));
}

/// Write to the log with optional colours
fn write_log_colour(
    out: FormatCallback,
    message: &Arguments,
    record: &Record,
    use_colour: bool,
    colours: &ColoredLevelConfig,
) {
    if use_colour {
        write_log(out, colours.color(record.level()), record.target(), message);
    } else {
        write_log(out, record.level(), record.target(), message);
    }
}
