use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::process;

use log::{LevelFilter, Log, Metadata, Record};

pub(crate) static LOG_LEVEL_ENV: &str = "SYSTEMD_LOG_LEVEL";

static LOGGER: StderrLogger = StderrLogger;

/// Writes every message as its own line to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record);

        // If we can't log, there's nobody left to tell
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{line}");
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

fn format_line(record: &Record) -> String {
    format!("unit-paths[{}]: {}", process::id(), record.args())
}

/// Nothing is logged until the level is raised with `log::set_max_level()`.
pub(crate) fn init() -> Result<(), log::SetLoggerError> {
    log::set_logger(&LOGGER)
}

/// Parses Systemd's log level names and numbers
/// see https://www.freedesktop.org/software/systemd/man/latest/systemd.html#%24SYSTEMD_LOG_LEVEL
pub(crate) fn parse_log_level(s: &str) -> Option<LevelFilter> {
    let level = match s.trim() {
        "emerg" | "0" | "alert" | "1" | "crit" | "2" | "err" | "3" => LevelFilter::Error,
        "warning" | "4" => LevelFilter::Warn,
        "notice" | "5" | "info" | "6" => LevelFilter::Info,
        "debug" | "7" => LevelFilter::Debug,
        _ => return None,
    };

    Some(level)
}

/// `-v` wins over $SYSTEMD_LOG_LEVEL. An invalid level is returned as error.
pub(crate) fn log_level(verbose: bool, env_level: Option<&OsStr>) -> Result<LevelFilter, OsString> {
    if verbose {
        return Ok(LevelFilter::Debug);
    }

    match env_level {
        None => Ok(LevelFilter::Info),
        Some(value) => value
            .to_str()
            .and_then(parse_log_level)
            .ok_or_else(|| value.to_owned()),
    }
}
