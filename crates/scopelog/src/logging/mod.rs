//! Bridge from the `log` facade.
//!
//! Installing the bridge routes `log::info!` and friends, from this
//! application or any dependency, into [`Record`](crate::Record). The record's
//! target becomes the category segment.

mod init;

pub use init::{init_logging, LoggingConfig};
