//! Macros for error creation and handling
//!
//! The raise location recorded by these macros is the macro invocation site.

/// Create an error of the given [`ErrorKind`](crate::ErrorKind) variant
///
/// `err!(NotFound)` uses the kind's message, `err!(Validation, "bad {}", x)`
/// replaces it with a formatted one.
#[macro_export]
macro_rules! err {
    ($kind:ident) => {
        $crate::error::Error::new($crate::error::ErrorKind::$kind)
    };
    ($kind:ident, $msg:expr) => {
        $crate::error::Error::with_message($crate::error::ErrorKind::$kind, $msg)
    };
    ($kind:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::Error::with_message($crate::error::ErrorKind::$kind, format!($fmt, $($arg)*))
    };
}

/// Macro for bailing out with an error
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::err!($($arg)*).into())
    };
}

/// Macro for ensuring a condition holds
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::bail!($($arg)*);
        }
    };
}
