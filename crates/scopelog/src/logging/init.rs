use std::fmt::Write as _;
use std::sync::OnceLock;

use env_filter::{Builder, Filter};
use log::{Log, Metadata};

use crate::error::LoggingError;
use crate::level::Level;
use crate::record::Record;

/// Bridge configuration.
///
/// `filter` follows the `env_logger` directive syntax (e.g. "info", "warn",
/// "net=debug,warn"). It only applies to records arriving through `log`; the
/// crate's own macros are never filtered.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { filter: Some(filter.into()) }
    }

    fn build_filter(&self) -> Filter {
        let mut builder = Builder::new();
        match &self.filter {
            Some(directives) => {
                builder.parse(directives);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }
        builder.build()
    }
}

struct Bridge {
    filter: Filter,
}

impl Log for Bridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.filter.enabled(metadata)
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.filter.matches(record) {
            return;
        }
        let mut line = Record::begin(Level::from(record.level()), record.target());
        let _ = write!(line, "{}", record.args());
    }

    fn flush(&self) {}
}

static INSTALLED: OnceLock<Result<(), LoggingError>> = OnceLock::new();

/// Installs the `log` bridge once.
///
/// The first call tries to install the bridge and fails if another `log`
/// backend is already set. Later calls ignore `config` and return the outcome
/// of that first attempt.
pub fn init_logging(config: LoggingConfig) -> Result<(), LoggingError> {
    *INSTALLED.get_or_init(|| {
        let filter = config.build_filter();
        let max_level = filter.filter();
        let result = log::set_boxed_logger(Box::new(Bridge { filter }))
            .map(|()| log::set_max_level(max_level))
            .map_err(|_| LoggingError::AlreadyInstalled);

        if result.is_ok() {
            log::debug!(target: "scopelog", "log bridge installed at {max_level}");
        }
        result
    })
}
