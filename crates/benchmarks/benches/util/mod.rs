#![allow(dead_code)]

use eyre::Result;
use fibseq::Algorithm;

pub fn run(algorithm: Algorithm, n: i64) -> u64 {
    algorithm.compute(n).expect("compute")
}

/// Compute every supported value once, so a broken algorithm fails before it is timed.
pub fn verify(algorithm: Algorithm, max: i64) -> Result<()> {
    for n in 0..=max {
        let value = algorithm.compute(n)?;
        let expected = run_native(n as u32);
        if value != expected {
            return Err(eyre::eyre!("{algorithm}: F({n}) = {value}, expected {expected}"));
        }
    }
    Ok(())
}

/// Unchecked loop without the index guard, the baseline for the accumulator algorithms
pub fn run_native(n: u32) -> u64 {
    if n == 0 {
        return 0;
    }

    let mut last = 0;
    let mut curr = 1;
    for _i in 1..n {
        let sum = last + curr;
        last = curr;
        curr = sum;
    }
    curr
}

/// Unchecked double recursion, the baseline for [`Algorithm::Recursive`]
pub fn run_native_recursive(n: u32) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    run_native_recursive(n - 1) + run_native_recursive(n - 2)
}
