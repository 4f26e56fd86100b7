use std::fmt;

use crate::level::Level;

/// Stripped record: keeps only its level, takes no timestamp and writes
/// nothing.
#[derive(Debug)]
pub struct Record {
    level: Level,
}

impl Record {
    #[inline(always)]
    pub fn begin(level: Level, _category: &str) -> Self {
        Self { level }
    }

    #[inline(always)]
    pub fn append(&mut self, _value: impl fmt::Display) -> &mut Self {
        self
    }

    #[inline(always)]
    pub fn level(&self) -> Level {
        self.level
    }

    #[inline(always)]
    pub fn message(&self) -> &str {
        ""
    }
}

impl fmt::Write for Record {
    #[inline(always)]
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Ok(())
    }
}
