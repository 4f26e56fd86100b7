//! Leveled, colorized stderr logging and scope timing.
//!
//! Every log call produces one line of the form
//!
//! ```text
//! [HH:MM:SS.mmm][  LEVEL  ][category] message
//! ```
//!
//! with the level label wrapped in an ANSI color. The line is written when the
//! [`Record`] holding it is dropped, normally at the end of the statement.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`level`] | `Level`, labels and colors |
//! | [`record`] | `Record` and per-level entry points |
//! | [`scope`] | `ScopeTimer` |
//! | [`time`] | `Timestamp`, millisecond conversion |
//! | [`sink`] | stderr output and `capture` |
//! | [`logging`] | `log` facade bridge |
//!
//! # Stripping
//!
//! Logging is compiled in when debug assertions are on or the
//! `release-logging` feature is set, and compiled out whenever the `strip`
//! feature is set. Compiled out, the macros expand to dead code and
//! `Record`/`ScopeTimer` become inert.
//!
//! # Quick start
//!
//! ```rust
//! fn load(path: &str) {
//!     scopelog::trace_scope!("load");
//!     scopelog::info!(category: "io", "reading ", path);
//! }
//!
//! load("assets/map.bin");
//! ```

pub mod error;
pub mod level;
pub mod logging;
mod macros;
pub mod record;
pub mod scope;
pub mod sink;
pub mod time;

pub use error::LoggingError;
pub use level::Level;
pub use logging::{init_logging, LoggingConfig};
pub use record::Record;
pub use scope::ScopeTimer;
