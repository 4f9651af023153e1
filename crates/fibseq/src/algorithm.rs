use core::fmt::Display;

use crate::{Result, recursive_fibonacci, table_fibonacci, tail_recursive_fibonacci};

/// A strategy for computing Fibonacci numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Naive double recursion, see [`recursive_fibonacci`]
    Recursive,
    /// Accumulator loop, see [`tail_recursive_fibonacci`]
    TailRecursive,
    /// Compile-time table lookup, see [`table_fibonacci`]
    Table,
}

impl Algorithm {
    /// All available algorithms
    pub const ALL: [Algorithm; 3] = [Self::Recursive, Self::TailRecursive, Self::Table];

    /// Compute `F(n)` with this algorithm
    pub fn compute(self, n: i64) -> Result<u64> {
        match self {
            Self::Recursive => recursive_fibonacci(n),
            Self::TailRecursive => tail_recursive_fibonacci(n),
            Self::Table => table_fibonacci(n),
        }
    }

    /// Get the name of the algorithm
    pub fn name(&self) -> &'static str {
        match self {
            Self::Recursive => "recursive",
            Self::TailRecursive => "tail-recursive",
            Self::Table => "table",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
