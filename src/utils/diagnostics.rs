//! Stderr backend for the `log` facade.
//!
//! Lines are written as `info string <time> <level> <target>: <message>` so
//! they read like the engine's other diagnostic output and never mix with
//! the console's stdout replies.

use std::io::{self, Write};

use chrono::Utc;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

struct DiagnosticsLogger;

static LOGGER: DiagnosticsLogger = DiagnosticsLogger;

impl Log for DiagnosticsLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        let _ = writeln!(io::stderr().lock(), "{line}");
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

fn format_line(record: &Record) -> String {
    format!(
        "info string {} {:<5} {}: {}",
        Utc::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Installs the backend once per process. `verbose` enables debug output.
pub fn init(verbose: bool) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    Ok(())
}
