#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Writes records to stderr. Stdout carries the boards, the prompts and the
/// JSON printed by `sim`, so log lines must never interleave with it.
struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Install the stderr logger with a level taken from `SEABATTLE_LOG`
/// (`error`, `warn`, `info`, `debug`, `trace` or `off`). Defaults to `warn`
/// if the variable is not set or invalid, which keeps shot-by-shot `debug!`
/// and per-sinking `info!` records out of an interactive game.
pub fn init_logging() {
    let level = env::var("SEABATTLE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_taken_from_environment() {
        env::set_var("SEABATTLE_LOG", "debug");
        init_logging();
        assert_eq!(log::max_level(), LevelFilter::Debug);
        assert!(log::log_enabled!(log::Level::Debug));
        assert!(!log::log_enabled!(log::Level::Trace));
    }
}
