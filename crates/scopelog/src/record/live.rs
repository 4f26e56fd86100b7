use std::fmt::{self, Write as _};

use crate::level::{Level, RESET};
use crate::sink;
use crate::time::Timestamp;

/// One in-progress log line.
///
/// The line prefix (timestamp, level, category) is rendered when the record
/// begins. Appended values accumulate after it, and the finished line is
/// written to the sink exactly once when the record is dropped.
pub struct Record {
    level: Level,
    line: String,
    body_start: usize,
}

impl Record {
    /// Starts a record at `level`. An empty `category` omits the category
    /// segment.
    pub fn begin(level: Level, category: &str) -> Self {
        let mut line = String::with_capacity(64);
        // Writing into a String cannot fail.
        let _ = write!(
            line,
            "[{}][{}{}{RESET}]",
            Timestamp::now(),
            level.color(),
            level.label()
        );
        if !category.is_empty() {
            line.push('[');
            line.push_str(category);
            line.push(']');
        }
        line.push(' ');
        let body_start = line.len();

        Self { level, line, body_start }
    }

    /// Appends the `Display` rendering of `value`, with no separator.
    pub fn append(&mut self, value: impl fmt::Display) -> &mut Self {
        let _ = write!(self.line, "{value}");
        self
    }

    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Text appended so far.
    #[inline]
    pub fn message(&self) -> &str {
        &self.line[self.body_start..]
    }
}

impl fmt::Write for Record {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.line.push_str(s);
        Ok(())
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("level", &self.level)
            .field("message", &self.message())
            .finish()
    }
}

impl Drop for Record {
    fn drop(&mut self) {
        self.line.push_str(RESET);
        self.line.push('\n');
        sink::write_line(&self.line);
    }
}
