use crate::{MAX_INDEX, Result, check_index, log};

const TABLE_LEN: usize = MAX_INDEX as usize + 1;

/// Every Fibonacci number that fits in a `u64`, indexed by `n`
///
/// Filled in at compile time from the recurrence, so `FIBONACCI_TABLE[n] == F(n)`
/// for `0 <= n <= MAX_INDEX`.
pub const FIBONACCI_TABLE: [u64; TABLE_LEN] = {
    let mut table = [0; TABLE_LEN];
    table[1] = 1;

    let mut n = 2;
    while n < TABLE_LEN {
        table[n] = table[n - 2] + table[n - 1];
        n += 1;
    }
    table
};

/// Compute `F(n)` in a const context
///
/// Returns `None` if the result does not fit in a `u64`.
///
/// ```rust
/// const F20: Option<u64> = fibseq::const_fibonacci(20);
/// assert_eq!(F20, Some(6765));
/// assert_eq!(fibseq::const_fibonacci(94), None);
/// ```
pub const fn const_fibonacci(n: u32) -> Option<u64> {
    let (mut first, mut second) = (0u64, 1u64);
    let mut i = 0;
    while i < n {
        let next = match first.checked_add(second) {
            Some(next) => next,
            // F(n + 1) overflowing is fine as long as F(n) itself fits
            None if i + 1 == n => return Some(second),
            None => return None,
        };
        first = second;
        second = next;
        i += 1;
    }
    Some(first)
}

/// Look up `F(n)` in [`FIBONACCI_TABLE`]
///
/// # Errors
/// Same as [`tail_recursive_fibonacci`](crate::tail_recursive_fibonacci).
pub fn table_fibonacci(n: i64) -> Result<u64> {
    let n = check_index(n)?;
    log::trace!("table_fibonacci({n})");
    Ok(FIBONACCI_TABLE[n as usize])
}
