//! Error type for arbitrary-precision arithmetic

use core::fmt;

/// Errors surfaced by fallible big-integer operations
///
/// Preconditions that indicate caller bugs rather than untrusted input
/// (subtracting a larger value, indexing past a buffer) panic instead; see
/// the individual operation docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Division or reduction by zero
    DivisionByZero,
    /// A digit was outside the alphabet of the requested radix
    InvalidDigit {
        /// The offending character
        character: char,
        /// The radix it was parsed under
        radix: u32,
    },
    /// Radix outside the supported 2..=36 range
    InvalidRadix {
        /// The rejected radix
        radix: u32,
    },
}

/// Result type for big-integer operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero => write!(f, "division by zero"),
            Error::InvalidDigit { character, radix } => {
                write!(f, "invalid digit {:?} for radix {}", character, radix)
            }
            Error::InvalidRadix { radix } => {
                write!(f, "radix {} is outside the supported range 2..=36", radix)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
