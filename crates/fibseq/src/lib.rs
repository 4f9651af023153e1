#![no_std]
#![forbid(unsafe_code)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_assignments, unused_variables))
))]
#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Fibonacci numbers, computed the slow way and the fast way.
//!
//! Two independent entry points compute `F(n)` where `F(0) = 0`, `F(1) = 1`
//! and `F(n) = F(n - 1) + F(n - 2)`:
//!
//! * [`recursive_fibonacci`] uses direct double recursion (`O(φⁿ)`).
//! * [`tail_recursive_fibonacci`] carries an accumulator through a loop (`O(n)` time, `O(1)` space).
//!
//! A compile-time table ([`FIBONACCI_TABLE`]) holds every value that fits in a `u64`.
//!
//! ## Errors
//! Indices are taken as `i64`. Negative indices are rejected with [`Error::Domain`]
//! and indices above [`MAX_INDEX`] with [`Error::Overflow`], before any work is done.
//!
//! ```rust
//! use fibseq::{recursive_fibonacci, tail_recursive_fibonacci, Error};
//!
//! assert_eq!(recursive_fibonacci(10), Ok(55));
//! assert_eq!(tail_recursive_fibonacci(20), Ok(6765));
//! assert_eq!(tail_recursive_fibonacci(-1), Err(Error::Domain { n: -1 }));
//! ```
//!
//! ## Features
//! - **`log`** (default)\
//!   Emits [`log`](https://docs.rs/log) records from the entry points.

// log for logging (optional).
#[cfg(feature = "log")]
#[allow(clippy::single_component_path_imports, unused_imports)]
use log;

// noop fallback if logging is disabled.
#[cfg(not(feature = "log"))]
#[allow(unused_imports, unused_macros)]
pub(crate) mod log {
    macro_rules! debug    ( ($($tt:tt)*) => {{}} );
    macro_rules! trace    ( ($($tt:tt)*) => {{}} );
    pub(crate) use debug;
    pub(crate) use trace;
}

mod algorithm;
mod error;
mod recursive;
mod table;
mod tail;

pub use algorithm::Algorithm;
pub use error::*;
pub use recursive::recursive_fibonacci;
pub use table::{FIBONACCI_TABLE, const_fibonacci, table_fibonacci};
pub use tail::tail_recursive_fibonacci;

/// The largest index whose Fibonacci number fits in a `u64`
///
/// `F(93) = 12200160415121876738`, `F(94)` exceeds [`u64::MAX`].
pub const MAX_INDEX: u32 = 93;

/// Check that `n` is a supported index and narrow it
pub(crate) fn check_index(n: i64) -> Result<u32> {
    if n < 0 {
        log::debug!("rejecting negative index {n}");
        return Err(Error::Domain { n });
    }

    match u32::try_from(n) {
        Ok(idx) if idx <= MAX_INDEX => Ok(idx),
        _ => {
            log::debug!("rejecting index {n}, F(n) does not fit in u64");
            Err(Error::Overflow { n, max: MAX_INDEX })
        }
    }
}
