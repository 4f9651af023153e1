use crate::{Result, check_index, log};

/// Compute `F(n)` by direct double recursion
///
/// This is the naive baseline: every call branches into two, so the running time
/// grows with `φⁿ` and nothing is memoized.
///
/// # Errors
/// Returns [`Error::Domain`](crate::Error::Domain) for negative `n` and
/// [`Error::Overflow`](crate::Error::Overflow) for `n > MAX_INDEX`.
///
/// ```rust
/// assert_eq!(fibseq::recursive_fibonacci(15), Ok(610));
/// ```
pub fn recursive_fibonacci(n: i64) -> Result<u64> {
    let n = check_index(n)?;
    log::trace!("recursive_fibonacci({n})");
    Ok(naive(n))
}

fn naive(n: u32) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => naive(n - 2) + naive(n - 1),
    }
}
