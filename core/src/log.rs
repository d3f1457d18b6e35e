//! Conditional logging shims.
//!
//! With the `log` feature enabled these forward to the [`log`] crate. Without
//! it they expand to nothing, so the engine carries no logging cost.

#[cfg(feature = "log")]
macro_rules! debug {
    ($($t:tt)*) => {
        ::log::debug!($($t)*)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($t:tt)*) => {};
}
#[allow(unused_imports)]
pub(crate) use debug;

#[cfg(feature = "log")]
macro_rules! trace {
    ($($t:tt)*) => {
        ::log::trace!($($t)*)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($t:tt)*) => {};
}
#[allow(unused_imports)]
pub(crate) use trace;

#[cfg(feature = "log")]
macro_rules! warning {
    ($($t:tt)*) => {
        ::log::warn!($($t)*)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! warning {
    ($($t:tt)*) => {};
}
#[allow(unused_imports)]
pub(crate) use warning as warn;
