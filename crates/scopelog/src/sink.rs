//! Process-wide diagnostic stream.
//!
//! Finished lines go to stderr. A thread can temporarily redirect its own
//! lines into a string with [`capture`]; other threads are unaffected.
//!
//! Writing from a thread-local destructor is safe as far as this module goes,
//! but a record still stamps itself with `chrono::Local::now()`, which reads
//! thread-local timezone state of its own and may panic at that point.

use std::cell::RefCell;
use std::io::{self, Write};

thread_local! {
    static CAPTURE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Writes one finished line, `line` must already end with `\n`.
///
/// Write errors are dropped: this runs from `Drop` and may run while
/// unwinding, where a second panic would abort.
#[cfg_attr(not(scopelog_enabled), allow(dead_code))]
pub(crate) fn write_line(line: &str) {
    // The capture slot may already be gone when called from another
    // thread-local's destructor; the line then goes to stderr.
    let captured = CAPTURE
        .try_with(|cell| match cell.borrow_mut().as_mut() {
            Some(buf) => {
                buf.push_str(line);
                true
            }
            None => false,
        })
        .unwrap_or(false);

    if !captured {
        let _ = io::stderr().lock().write_all(line.as_bytes());
    }
}

/// Runs `f` and returns its result together with every line emitted on this
/// thread while it ran.
///
/// Captures nest: an inner capture takes its lines and the outer one resumes
/// afterwards. Routing is restored even if `f` panics.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, String) {
    struct Restore(Option<Option<String>>);

    impl Drop for Restore {
        fn drop(&mut self) {
            if let Some(previous) = self.0.take() {
                CAPTURE.with(|cell| *cell.borrow_mut() = previous);
            }
        }
    }

    let previous = CAPTURE.with(|cell| cell.borrow_mut().replace(String::new()));
    let mut restore = Restore(Some(previous));

    let out = f();

    let captured = CAPTURE.with(|cell| cell.borrow_mut().take()).unwrap_or_default();
    if let Some(previous) = restore.0.take() {
        CAPTURE.with(|cell| *cell.borrow_mut() = previous);
    }

    (out, captured)
}
