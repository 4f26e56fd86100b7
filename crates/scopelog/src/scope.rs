//! Scope timer.
//!
//! A [`ScopeTimer`] logs a `START` line when created and a `FINISH` line with
//! the elapsed time when dropped. If the drop happens while the thread is
//! unwinding from a panic, the second line says `EXCEPTION!` instead. The panic
//! itself is left alone.
//!
//! Nested timers are independent; nesting only shows through the order of the
//! emitted lines.

use std::borrow::Cow;
#[cfg(scopelog_enabled)]
use std::time::Instant;
use std::time::Duration;

#[cfg(scopelog_enabled)]
use crate::level::Level;
#[cfg(scopelog_enabled)]
use crate::record::Record;
#[cfg(scopelog_enabled)]
use crate::time::millis;

/// Times the region it lives in. Move-only; moving it does not restart it.
#[cfg(scopelog_enabled)]
#[derive(Debug)]
pub struct ScopeTimer {
    tag: Cow<'static, str>,
    file: &'static str,
    line: u32,
    start: Instant,
}

#[cfg(scopelog_enabled)]
impl ScopeTimer {
    /// Starts a timer located at the caller.
    #[track_caller]
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        let location = std::panic::Location::caller();
        Self::at(tag, location.file(), location.line())
    }

    /// Starts a timer with an explicit source location.
    pub fn at(tag: impl Into<Cow<'static, str>>, file: &'static str, line: u32) -> Self {
        let timer = Self {
            tag: tag.into(),
            file,
            line,
            start: Instant::now(),
        };
        Record::begin(Level::Profile, "")
            .append("START ")
            .append(&timer.tag)
            .append(" @ ")
            .append(timer.file)
            .append(':')
            .append(timer.line);
        timer
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Time since the timer started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(scopelog_enabled)]
impl Drop for ScopeTimer {
    fn drop(&mut self) {
        let elapsed = millis(self.start.elapsed());
        let outcome = if std::thread::panicking() {
            "EXCEPTION!"
        } else {
            "FINISH"
        };
        Record::begin(Level::Profile, "").append(format_args!(
            "{outcome} {} ({elapsed:.3}ms) @ {}:{}",
            self.tag, self.file, self.line
        ));
    }
}

/// Stripped timer: zero-sized, reads no clock and writes nothing.
#[cfg(not(scopelog_enabled))]
#[derive(Debug)]
pub struct ScopeTimer {
    _private: (),
}

#[cfg(not(scopelog_enabled))]
impl ScopeTimer {
    #[inline(always)]
    pub fn new(_tag: impl Into<Cow<'static, str>>) -> Self {
        Self { _private: () }
    }

    #[inline(always)]
    pub fn at(_tag: impl Into<Cow<'static, str>>, _file: &'static str, _line: u32) -> Self {
        Self { _private: () }
    }

    #[inline(always)]
    pub fn tag(&self) -> &str {
        ""
    }

    #[inline(always)]
    pub fn file(&self) -> &'static str {
        ""
    }

    #[inline(always)]
    pub fn line(&self) -> u32 {
        0
    }

    #[inline(always)]
    pub fn elapsed(&self) -> Duration {
        Duration::ZERO
    }
}

/// Strips the helper suffix from a `type_name` of a nested `fn f()` so that
/// only the enclosing function path remains, closures included.
#[doc(hidden)]
pub fn enclosing_function(type_name: &'static str) -> &'static str {
    let mut name = type_name.strip_suffix("::f").unwrap_or(type_name);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

#[cfg(all(test, scopelog_enabled))]
mod tests {
    use super::*;
    use crate::sink::capture;

    fn messages(out: &str) -> Vec<String> {
        out.lines()
            .map(|line| {
                assert!(line.contains(Level::Profile.label()), "{line:?}");
                let body = line.split_once("] ").map(|(_, b)| b).unwrap_or("");
                body.trim_end_matches(crate::level::RESET).to_owned()
            })
            .collect()
    }

    /// Pulls `X` out of `... (Xms) ...`.
    fn elapsed_ms(message: &str) -> f64 {
        let open = message.find('(').unwrap();
        let close = message.find("ms)").unwrap();
        message[open + 1..close].parse().unwrap()
    }

    #[test]
    fn zero_length_scope_emits_start_and_finish() {
        let ((), out) = capture(|| {
            let _timer = ScopeTimer::at("load", "src/app.rs", 12);
        });
        let messages = messages(&out);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], "START load @ src/app.rs:12");
        assert!(messages[1].starts_with("FINISH load ("), "{:?}", messages[1]);
        assert!(messages[1].ends_with("ms) @ src/app.rs:12"));
        assert!(elapsed_ms(&messages[1]) >= 0.0);
    }

    #[test]
    fn elapsed_has_three_decimals() {
        let ((), out) = capture(|| {
            let _timer = ScopeTimer::at("x", "a.rs", 1);
        });
        let finish = &messages(&out)[1];
        let open = finish.find('(').unwrap();
        let close = finish.find("ms)").unwrap();
        let digits = &finish[open + 1..close];
        let (_, frac) = digits.split_once('.').unwrap();
        assert_eq!(frac.len(), 3);
    }

    #[test]
    fn elapsed_tracks_wall_clock() {
        let ((), out) = capture(|| {
            let _timer = ScopeTimer::at("sleep", "a.rs", 1);
            std::thread::sleep(Duration::from_millis(20));
        });
        assert!(elapsed_ms(&messages(&out)[1]) >= 20.0);
    }

    #[test]
    fn elapsed_grows_while_running() {
        let ((), _) = capture(|| {
            let timer = ScopeTimer::at("wait", "a.rs", 1);
            std::thread::sleep(Duration::from_millis(5));
            let first = timer.elapsed();
            assert!(first >= Duration::from_millis(5));
            assert!(timer.elapsed() >= first);
        });
    }

    #[test]
    fn new_captures_call_site() {
        let ((), out) = capture(|| {
            let timer = ScopeTimer::new("here");
            assert_eq!(timer.file(), file!());
            assert_eq!(timer.line(), line!() - 2);
            assert_eq!(timer.tag(), "here");
        });
        let start = &messages(&out)[0];
        assert!(start.starts_with(&format!("START here @ {}:", file!())));
    }

    #[test]
    fn panic_reports_exception() {
        let ((), out) = capture(|| {
            let result = std::panic::catch_unwind(|| {
                let _timer = ScopeTimer::at("risky", "lib.rs", 40);
                if true {
                    panic!("boom");
                }
            });
            assert!(result.is_err());
        });
        let messages = messages(&out);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], "START risky @ lib.rs:40");
        assert!(messages[1].starts_with("EXCEPTION! risky ("));
        assert!(messages[1].ends_with("ms) @ lib.rs:40"));
    }

    #[test]
    fn error_return_is_a_normal_finish() {
        fn fallible() -> Result<(), &'static str> {
            let _timer = ScopeTimer::at("fallible", "lib.rs", 1);
            Err("nope")
        }

        let (result, out) = capture(fallible);
        assert!(result.is_err());
        assert!(messages(&out)[1].starts_with("FINISH fallible"));
    }

    #[test]
    fn moving_does_not_restart() {
        fn make() -> ScopeTimer {
            ScopeTimer::at("moved", "lib.rs", 7)
        }

        let ((), out) = capture(|| {
            let timer = make();
            let held = vec![timer];
            drop(held);
        });
        let messages = messages(&out);
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("START moved"));
        assert!(messages[1].starts_with("FINISH moved"));
    }

    #[test]
    fn nested_scopes_are_independent() {
        let ((), out) = capture(|| {
            let _outer = ScopeTimer::at("outer", "lib.rs", 1);
            {
                let _inner = ScopeTimer::at("inner", "lib.rs", 2);
            }
        });
        let messages = messages(&out);
        assert_eq!(messages.len(), 4);
        assert!(messages[0].starts_with("START outer"));
        assert!(messages[1].starts_with("START inner"));
        assert!(messages[2].starts_with("FINISH inner"));
        assert!(messages[3].starts_with("FINISH outer"));
    }

    #[test]
    fn owned_tag() {
        let ((), out) = capture(|| {
            let _timer = ScopeTimer::at(format!("job-{}", 3), "lib.rs", 1);
        });
        assert_eq!(messages(&out)[0], "START job-3 @ lib.rs:1");
    }

    #[test]
    fn enclosing_function_strips_helpers() {
        assert_eq!(enclosing_function("app::load::f"), "app::load");
        assert_eq!(enclosing_function("app::run::{{closure}}::f"), "app::run");
        assert_eq!(enclosing_function("plain"), "plain");
    }
}
