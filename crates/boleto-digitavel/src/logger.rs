//! Stderr logger for the CLI and examples.
//!
//! Rejected scans are logged at debug level with their originating module,
//! so the output format is `LEVEL target: message`. The logger itself is
//! stateless; filtering goes through the `log` crate's global max level.

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

struct CliLogger;

static LOGGER: CliLogger = CliLogger;

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let _ = writeln!(
            std::io::stderr().lock(),
            "{:<5} {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the stderr logger and set the global level filter.
///
/// The level is applied even when a logger is already installed, so a second
/// call still tightens or relaxes filtering; only the install itself errors.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_max_level(level);
    log::set_logger(&LOGGER)
}

/// Install a `tracing` subscriber driven by `RUST_LOG`, defaulting to `info`.
///
/// With `json` set, events are emitted as flattened JSON objects for log
/// shippers; otherwise the human-readable formatter is used.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if json {
        let _ = builder.json().flatten_event(true).finish().try_init();
    } else {
        let _ = builder.finish().try_init();
    }
}
