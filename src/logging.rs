//! File logger for the terminal runner.
//!
//! The runner owns the alternate screen, so log records go to a file instead
//! of stderr. Logging stays off unless `SHEEP_CRUSH_LOG_PATH` is set.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        // A poisoned lock or a failed write just drops the record.
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "{} {:<5} {}: {}",
                millis,
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Parse a level name; unknown names fall back to `info`.
pub fn parse_level(s: &str) -> LevelFilter {
    s.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Install the file logger if `SHEEP_CRUSH_LOG_PATH` is set.
///
/// The level comes from `SHEEP_CRUSH_LOG` (default `info`).
/// Returns whether a logger was installed.
pub fn init_from_env() -> Result<bool> {
    let Ok(path) = std::env::var("SHEEP_CRUSH_LOG_PATH") else {
        return Ok(false);
    };
    let level = std::env::var("SHEEP_CRUSH_LOG")
        .map(|s| parse_level(&s))
        .unwrap_or(LevelFilter::Info);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path))?;

    log::set_boxed_logger(Box::new(FileLogger {
        level,
        file: Mutex::new(file),
    }))
    .context("installing logger")?;
    log::set_max_level(level);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("TRACE"), LevelFilter::Trace);
        assert_eq!(parse_level(" warn "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }

    #[test]
    fn logger_installs_once_from_env() {
        let path = std::env::temp_dir().join(format!("sheep-crush-{}.log", std::process::id()));
        std::env::set_var("SHEEP_CRUSH_LOG_PATH", &path);
        std::env::set_var("SHEEP_CRUSH_LOG", "debug");

        assert!(init_from_env().unwrap());
        assert_eq!(log::max_level(), LevelFilter::Debug);
        log::info!("logger ready");
        log::logger().flush();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("INFO"));
        assert!(written.contains("logger ready"));

        // A second install is refused by the log facade.
        assert!(init_from_env().is_err());
        let _ = std::fs::remove_file(&path);
    }
}
