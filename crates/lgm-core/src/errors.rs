//! Error types for lgm-rs.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum.  Preconditions are
//! checked with the [`ensure!`](crate::ensure) macro, which fails fast with
//! [`Error::InvalidArgument`] before any work is done.

use thiserror::Error;

/// The top-level error type used throughout lgm-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid argument or violated precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Index out of range.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The size of the container.
        size: usize,
    },

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout lgm-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check a precondition.
///
/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lgm_core::{ensure, errors::Error};
/// fn positive(x: f64) -> lgm_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Fail immediately.
///
/// Returns `Err(Error::Runtime(...))`.
///
/// # Example
/// ```
/// use lgm_core::{fail, errors::Error};
/// fn always_err() -> lgm_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
