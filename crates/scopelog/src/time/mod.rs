//! Time helpers shared by records and scope timers.
//!
//! Records are stamped with local wall-clock time; scope timers measure with the
//! monotonic clock. The two never mix.

mod stamp;

pub use stamp::{millis, Timestamp};
