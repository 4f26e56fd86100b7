use std::fmt;

/// ANSI sequence that ends every colored segment.
pub const RESET: &str = "\x1b[0m";

/// Severity tag attached to every record.
///
/// Variants are listed in declaration order. Nothing in this crate filters on
/// that order; it only exists so levels can be sorted for display.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Notice,
    Warning,
    Error,
    Critical,
    Alert,
    Emergency,
    /// Emitted by scope timers.
    Profile,
}

impl Level {
    pub const ALL: [Level; 10] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Notice,
        Level::Warning,
        Level::Error,
        Level::Critical,
        Level::Alert,
        Level::Emergency,
        Level::Profile,
    ];

    /// Fixed-width (9 column) label used in the level segment of a line.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Level::Trace => "  TRACE  ",
            Level::Debug => "  DEBUG  ",
            Level::Info => "  INFO   ",
            Level::Notice => " NOTICE  ",
            Level::Warning => " WARNING ",
            Level::Error => "  ERROR  ",
            Level::Critical => "CRITICAL ",
            Level::Alert => "  ALERT  ",
            Level::Emergency => "EMERGENCY",
            Level::Profile => "PROFILING",
        }
    }

    /// ANSI color escape wrapped around the label.
    #[inline]
    pub const fn color(self) -> &'static str {
        match self {
            Level::Trace => "\x1b[1;37m",
            Level::Debug => "\x1b[1;34m",
            Level::Info => "\x1b[1;32m",
            Level::Notice => "\x1b[1;36m",
            Level::Warning => "\x1b[1;33m",
            Level::Error => "\x1b[1;31m",
            Level::Critical => "\x1b[1;35m",
            Level::Alert => "\x1b[1;41m",
            Level::Emergency => "\x1b[1;41;97m",
            Level::Profile => "\x1b[1;36m",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Notice => "notice",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Critical => "critical",
            Level::Alert => "alert",
            Level::Emergency => "emergency",
            Level::Profile => "profile",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Trace,
        }
    }
}
