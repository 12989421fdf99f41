use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

// Custom logger structure
#[derive(Debug)]
struct ArenaLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

/// Pulls the number following `marker` out of a message, e.g. "Robot 3" -> 3.
fn number_after(message: &str, marker: &str) -> Option<u32> {
    let start = message.find(marker)? + marker.len();
    let digits: String = message[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

impl log::Log for ArenaLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Debug topics only pass when listed in the filter
        if let Some(filters) = &self.debug_filters {
            if metadata.level() >= log::Level::Debug {
                return filters.iter().any(|f| metadata.target().starts_with(f.as_str()));
            }
        }
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level_color = match record.level() {
            log::Level::Error => "\x1B[31m", // Red
            log::Level::Warn => "\x1B[33m",  // Yellow
            log::Level::Info => "\x1B[32m",  // Green
            log::Level::Debug => "\x1B[36m", // Cyan
            log::Level::Trace => "\x1B[35m", // Magenta
        };
        let reset = "\x1B[0m";
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        let message = record.args().to_string();

        // Context prefix from "Robot N" / "Round N" patterns, unless the topic macros added one
        let mut context = String::new();
        if !message.starts_with('[') {
            if let Some(id) = number_after(&message, "Robot ") {
                context.push_str(&format!("[R{:02}]", id));
            }
            if let Some(round) = number_after(&message, "Round ") {
                context.push_str(&format!("[T{:03}]", round));
            }
            if !context.is_empty() {
                context.push(' ');
            }
        }

        let output = format!(
            "{timestamp} {level_color}{level:5}{reset} {context}{target}: {message}",
            level = record.level(),
            target = record.target(),
        );

        // Grid snapshots own stdout; diagnostics go to stderr
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}", output);
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: OnceLock<ArenaLogger> = OnceLock::new();

/// Installs the arena logger. `debug_filter` is a comma-separated list of topics
/// (round, radar, move, weapon) that restricts debug output.
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    let debug_filters = debug_filter.map(|filter_str| {
        filter_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<HashSet<String>>()
    });

    let logger = LOGGER.get_or_init(|| ArenaLogger {
        level,
        debug_filters,
    });
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

// Helper macros for specific debug topics
#[macro_export]
macro_rules! debug_round {
    ($round:expr, $($arg:tt)*) => {
        log::debug!(target: "round", "[T{:03}] {}", $round, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_radar {
    ($robot_id:expr, $round:expr, $($arg:tt)*) => {
        log::debug!(target: "radar", "[R{:02}][T{:03}] {}", $robot_id, $round, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_move {
    ($robot_id:expr, $round:expr, $($arg:tt)*) => {
        log::debug!(target: "move", "[R{:02}][T{:03}] {}", $robot_id, $round, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_weapon {
    ($robot_id:expr, $round:expr, $($arg:tt)*) => {
        log::debug!(target: "weapon", "[R{:02}][T{:03}] {}", $robot_id, $round, format_args!($($arg)*))
    };
}
