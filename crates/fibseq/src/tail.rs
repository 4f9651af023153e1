use crate::{Result, check_index, log};

/// Compute `F(n)` by accumulating the last two terms
///
/// The accumulator form is tail recursive, but Rust does not guarantee tail calls,
/// so the window `(first, second)` is advanced in a loop instead. `O(n)` time and
/// constant stack depth.
///
/// # Errors
/// Returns [`Error::Domain`](crate::Error::Domain) for negative `n` and
/// [`Error::Overflow`](crate::Error::Overflow) for `n > MAX_INDEX`.
///
/// ```rust
/// assert_eq!(fibseq::tail_recursive_fibonacci(93), Ok(12200160415121876738));
/// ```
pub fn tail_recursive_fibonacci(n: i64) -> Result<u64> {
    let n = check_index(n)?;
    log::trace!("tail_recursive_fibonacci({n})");

    Ok(match n {
        0 => 0,
        1 => 1,
        _ => accumulate(n, 0, 1),
    })
}

/// `first` and `second` hold `F(k - 2)` and `F(k - 1)` while `n` counts down to 2.
fn accumulate(mut n: u32, mut first: u64, mut second: u64) -> u64 {
    debug_assert!(n >= 2, "accumulate is only reachable for n >= 2");

    loop {
        let result = first + second;
        if n == 2 {
            return result;
        }

        n -= 1;
        first = second;
        second = result;
    }
}
