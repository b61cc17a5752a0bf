use crate::error::{Result as ServerErrorResult, ServerError};

use hub_config::LogLevel;

use std::fmt::Display;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Where log lines go and how levels are rendered.
enum Sink {
    File(PathBuf),
    Terminal { colors: Option<ColoredLevelConfig> },
}

/// Install the global fern dispatcher.
///
/// With a `log_file` lines are appended to that file without colors,
/// otherwise they go to stdout, colored when `colored` is set.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level = log_level.filter();
    let sink = match log_file {
        Some(path) => Sink::File(path),
        None => Sink::Terminal {
            colors: colored.then(level_colors),
        },
    };

    let output = match &sink {
        Sink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::Logger {
                    message: format!("Cannot open log file {}: {e}", path.display()),
                })?;
            Dispatch::new()
                .format(|out, message, record| write_line(out, record.level(), message, record))
                .chain(file)
        }
        Sink::Terminal { colors: Some(colors) } => {
            let colors = *colors;
            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, colors.color(record.level()), message, record)
                })
                .chain(std::io::stdout())
        }
        Sink::Terminal { colors: None } => Dispatch::new()
            .format(|out, message, record| write_line(out, record.level(), message, record))
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level)
        // statement logging from sqlx drowns everything else at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Logger already installed: {e}"),
        })?;

    match sink {
        Sink::File(path) => info!("Logging at {level} to {}", path.display()),
        Sink::Terminal { .. } => info!("Logging at {level} to stdout"),
    }

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// `[<rfc3339> - <LEVEL>] <message> [<file>:<line>]`
fn write_line(
    out: FormatCallback<'_>,
    level: impl Display,
    message: &std::fmt::Arguments<'_>,
    record: &Record<'_>,
) {
    out.finish(format_args!(
        "[{} - {level}] {message} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}
