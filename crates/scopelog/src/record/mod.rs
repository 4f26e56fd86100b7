//! Record emitter.
//!
//! A [`Record`] is one log line under construction. It is created by
//! [`Record::begin`] (or one of the per-level shorthands below), filled with
//! [`Record::append`] and written when dropped:
//!
//! ```text
//! [13:05:07.042][  INFO   ][net] connected to 10.0.0.1:8080
//! ```
//!
//! The level segment is wrapped in its ANSI color and the line ends with a
//! reset sequence. No terminal capability detection is done.

#[cfg(scopelog_enabled)]
mod live;
#[cfg(not(scopelog_enabled))]
mod noop;

#[cfg(scopelog_enabled)]
pub use live::Record;
#[cfg(not(scopelog_enabled))]
pub use noop::Record;

use crate::level::Level;

macro_rules! entry_points {
    ($($(#[$meta:meta])* $name:ident => $level:ident;)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(category: &str) -> Record {
                Record::begin(Level::$level, category)
            }
        )*
    };
}

entry_points! {
    trace => Trace;
    debug => Debug;
    info => Info;
    notice => Notice;
    warning => Warning;
    error => Error;
    critical => Critical;
    alert => Alert;
    emergency => Emergency;
    /// Same level scope timers emit at.
    profiling => Profile;
}
