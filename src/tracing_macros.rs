//! Internal `trace!` shim.
//!
//! Forwards to `tracing::trace!` when the `tracing` feature is enabled and
//! compiles to nothing otherwise, so call sites never need cfg attributes.

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {
        if false {
            let _ = format_args!($($arg)*);
        }
    };
}

pub(crate) use trace;
