use core::fmt::Display;

/// Errors that can occur when computing a Fibonacci number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The index is negative, no Fibonacci number is defined for it
    Domain {
        /// The rejected index
        n: i64,
    },

    /// The Fibonacci number at this index does not fit in a `u64`
    Overflow {
        /// The rejected index
        n: i64,
        /// The largest supported index
        max: u32,
    },
}

impl Error {
    /// Get the message of the error
    pub fn message(&self) -> &'static str {
        match self {
            Self::Domain { .. } => "index out of domain",
            Self::Overflow { .. } => "result overflows u64",
        }
    }

    /// The index that caused the error
    pub fn index(&self) -> i64 {
        match self {
            Self::Domain { n } | Self::Overflow { n, .. } => *n,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Domain { n } => write!(f, "index out of domain: n={n}, expected n >= 0"),
            Self::Overflow { n, max } => write!(f, "result overflows u64: n={n}, max={max}"),
        }
    }
}

impl core::error::Error for Error {}

/// A wrapper around [`core::result::Result`] for fibseq operations
pub type Result<T, E = Error> = core::result::Result<T, E>;
