//! Tracing initialization.
//! Builds a subscriber with EnvFilter, supports compact or JSON formats, and optional file logging.
//!
//! Behavior:
//! - Log level is driven by LogLevel (no RUST_LOG override here).
//! - Console logs go to stderr; stdout is reserved for the status lines.
//! - If `log_file` is provided and passes safety checks, a non-blocking file layer is added.
//! - File logging is refused if any ancestor of the file path is a symlink.

use anyhow::Result;
use chrono::Local;
use organize_scripts::output as out;
use organize_scripts::platform::open_log_file_secure_append;
use organize_scripts::{LogLevel, path_has_symlink_ancestor};
use std::fmt as stdfmt;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tsfmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%d/%m/%y %H:%M:%S"))
    }
}

fn to_level_filter(lvl: LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::INFO,
        LogLevel::Info => LevelFilter::DEBUG,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

fn env_filter_for(lvl: LogLevel) -> EnvFilter {
    let directive = match to_level_filter(lvl) {
        LevelFilter::ERROR => "error",
        LevelFilter::WARN => "warn",
        LevelFilter::DEBUG => "debug",
        LevelFilter::TRACE => "trace",
        _ => "info",
    };
    EnvFilter::new(directive)
}

/// Open a non-blocking file writer, or explain on stderr why not.
fn maybe_open_non_blocking_writer(path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    match path_has_symlink_ancestor(path) {
        Ok(true) => {
            out::print_warn(&format!(
                "Refusing file logging: an ancestor of {} is a symlink",
                path.display()
            ));
            return None;
        }
        Err(e) => {
            out::print_warn(&format!(
                "Cannot check log path {} for symlinks: {e}",
                path.display()
            ));
            return None;
        }
        Ok(false) => {}
    }

    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    match open_log_file_secure_append(path) {
        Ok(file) => Some(tracing_appender::non_blocking(file)),
        Err(e) => {
            out::print_warn(&format!("Failed to {e}"));
            None
        }
    }
}

/// Initialize tracing. Returns the file appender's WorkerGuard when file
/// logging is active; hold it until the run ends so logs are flushed.
pub fn init_tracing(lvl: LogLevel, log_file: Option<&Path>, json: bool) -> Result<Option<WorkerGuard>> {
    let env_filter = env_filter_for(lvl);
    let file = log_file.and_then(|p| {
        let w = maybe_open_non_blocking_writer(p);
        if w.is_none() {
            out::print_warn(&format!(
                "File logging to '{}' not enabled; logging to stderr only.",
                p.display()
            ));
        }
        w
    });

    match (file, json) {
        (Some((writer, guard)), true) => {
            let stderr_layer = tsfmt::layer()
                .event_format(tsfmt::format().json())
                .with_timer(LocalHumanTime)
                .with_target(true)
                .with_ansi(atty::is(atty::Stream::Stderr))
                .with_writer(std::io::stderr);
            let file_layer = tsfmt::layer()
                .event_format(tsfmt::format().json())
                .with_timer(LocalHumanTime)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer);
            registry().with(env_filter).with(stderr_layer).with(file_layer).try_init()?;
            Ok(Some(guard))
        }
        (Some((writer, guard)), false) => {
            let stderr_layer = tsfmt::layer()
                .with_timer(LocalHumanTime)
                .with_target(false)
                .compact()
                .with_ansi(atty::is(atty::Stream::Stderr))
                .with_writer(std::io::stderr);
            let file_layer = tsfmt::layer()
                .with_timer(LocalHumanTime)
                .with_target(true)
                .with_ansi(false)
                .compact()
                .with_writer(writer);
            registry().with(env_filter).with(stderr_layer).with(file_layer).try_init()?;
            Ok(Some(guard))
        }
        (None, true) => {
            let stderr_layer = tsfmt::layer()
                .event_format(tsfmt::format().json())
                .with_timer(LocalHumanTime)
                .with_target(true)
                .with_ansi(atty::is(atty::Stream::Stderr))
                .with_writer(std::io::stderr);
            registry().with(env_filter).with(stderr_layer).try_init()?;
            Ok(None)
        }
        (None, false) => {
            let stderr_layer = tsfmt::layer()
                .with_timer(LocalHumanTime)
                .with_target(false)
                .compact()
                .with_ansi(atty::is(atty::Stream::Stderr))
                .with_writer(std::io::stderr);
            registry().with(env_filter).with(stderr_layer).try_init()?;
            Ok(None)
        }
    }
}
