//! Logging macros.
//!
//! Every level macro takes a list of values that are appended in order, with an
//! optional leading `category: expr`:
//!
//! ```rust
//! scopelog::info!("loaded ", 3, " files");
//! scopelog::warning!(category: "net", "retrying in ", 250, "ms");
//! ```
//!
//! When logging is stripped the arguments are still type-checked but sit in
//! dead code, so they are never evaluated.

#[doc(hidden)]
#[cfg(scopelog_enabled)]
#[macro_export]
macro_rules! __emit {
    ($level:ident, $category:expr $(, $value:expr)*) => {{
        $crate::Record::begin($crate::Level::$level, $category)
            $(.append(&$value))*;
    }};
}

#[doc(hidden)]
#[cfg(not(scopelog_enabled))]
#[macro_export]
macro_rules! __emit {
    ($level:ident, $category:expr $(, $value:expr)*) => {{
        if false {
            let _: &str = $category;
            $( let _ = &$value; )*
        }
    }};
}

#[macro_export]
macro_rules! trace {
    (category: $category:expr $(, $value:expr)* $(,)?) => {
        $crate::__emit!(Trace, $category $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::__emit!(Trace, "" $(, $value)*)
    };
}

#[macro_export]
macro_rules! debug {
    (category: $category:expr $(, $value:expr)* $(,)?) => {
        $crate::__emit!(Debug, $category $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::__emit!(Debug, "" $(, $value)*)
    };
}

#[macro_export]
macro_rules! info {
    (category: $category:expr $(, $value:expr)* $(,)?) => {
        $crate::__emit!(Info, $category $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::__emit!(Info, "" $(, $value)*)
    };
}

#[macro_export]
macro_rules! notice {
    (category: $category:expr $(, $value:expr)* $(,)?) => {
        $crate::__emit!(Notice, $category $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::__emit!(Notice, "" $(, $value)*)
    };
}

#[macro_export]
macro_rules! warning {
    (category: $category:expr $(, $value:expr)* $(,)?) => {
        $crate::__emit!(Warning, $category $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::__emit!(Warning, "" $(, $value)*)
    };
}

#[macro_export]
macro_rules! error {
    (category: $category:expr $(, $value:expr)* $(,)?) => {
        $crate::__emit!(Error, $category $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::__emit!(Error, "" $(, $value)*)
    };
}

#[macro_export]
macro_rules! critical {
    (category: $category:expr $(, $value:expr)* $(,)?) => {
        $crate::__emit!(Critical, $category $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::__emit!(Critical, "" $(, $value)*)
    };
}

#[macro_export]
macro_rules! alert {
    (category: $category:expr $(, $value:expr)* $(,)?) => {
        $crate::__emit!(Alert, $category $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::__emit!(Alert, "" $(, $value)*)
    };
}

#[macro_export]
macro_rules! emergency {
    (category: $category:expr $(, $value:expr)* $(,)?) => {
        $crate::__emit!(Emergency, $category $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::__emit!(Emergency, "" $(, $value)*)
    };
}

#[macro_export]
macro_rules! profiling {
    (category: $category:expr $(, $value:expr)* $(,)?) => {
        $crate::__emit!(Profile, $category $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::__emit!(Profile, "" $(, $value)*)
    };
}

/// Times the rest of the enclosing block.
///
/// `trace_scope!("tag")` uses the given tag; `trace_scope!()` uses the path of
/// the enclosing function. File and line are taken from the invocation.
#[cfg(scopelog_enabled)]
#[macro_export]
macro_rules! trace_scope {
    () => {
        let _scope_timer = $crate::ScopeTimer::at(
            $crate::scope::enclosing_function({
                fn f() {}
                fn type_name_of<T>(_: T) -> &'static str {
                    ::core::any::type_name::<T>()
                }
                type_name_of(f)
            }),
            file!(),
            line!(),
        );
    };
    ($tag:expr $(,)?) => {
        let _scope_timer = $crate::ScopeTimer::at($tag, file!(), line!());
    };
}

#[cfg(not(scopelog_enabled))]
#[macro_export]
macro_rules! trace_scope {
    () => {};
    ($tag:expr $(,)?) => {
        if false {
            let _ = &$tag;
        }
    };
}


#[cfg(all(test, not(scopelog_enabled)))]
mod stripped_tests {
    use crate::sink::capture;
    use crate::{Record, ScopeTimer};

    #[test]
    fn macros_write_nothing() {
        let ((), out) = capture(|| {
            crate::info!("x", 1);
            crate::error!(category: "c", "y");
            crate::trace_scope!("t");
            crate::trace_scope!();
        });
        assert!(out.is_empty());
    }

    #[test]
    fn arguments_not_evaluated() {
        let mut calls = 0;
        let mut bump = || {
            calls += 1;
            calls
        };
        crate::info!("n=", bump());
        assert_eq!(calls, 0);
    }

    #[test]
    fn guards_are_free() {
        assert_eq!(std::mem::size_of::<ScopeTimer>(), 0);
        let ((), out) = capture(|| {
            Record::begin(crate::Level::Info, "cat").append("dropped");
            let timer = ScopeTimer::new("t");
            assert_eq!(timer.elapsed(), std::time::Duration::ZERO);
        });
        assert!(out.is_empty());
    }
}
