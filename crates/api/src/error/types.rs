//! Error type definitions for cryptographic operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        /// Operation or algorithm that rejected the key
        context: &'static str,
        /// Detailed message (std only)
        #[cfg(feature = "std")]
        message: String,
    },

    /// Decryption error
    DecryptionFailed {
        /// Operation that failed
        context: &'static str,
        /// Detailed message (std only)
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid ciphertext error
    InvalidCiphertext {
        /// Operation that rejected the ciphertext
        context: &'static str,
        /// Detailed message (std only)
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        /// Operation that observed the length mismatch
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Operation that rejected the parameter
        context: &'static str,
        /// Detailed message (std only)
        #[cfg(feature = "std")]
        message: String,
    },

    /// Authentication failed error
    AuthenticationFailed {
        /// Algorithm that failed verification
        context: &'static str,
        /// Detailed message (std only)
        #[cfg(feature = "std")]
        message: String,
    },

    /// Arithmetic precondition violated (for example division by zero)
    ArithmeticError {
        /// Operation that failed
        context: &'static str,
        /// Detailed message (std only)
        #[cfg(feature = "std")]
        message: String,
    },

    /// Not implemented error
    NotImplemented {
        /// Name of the missing feature
        feature: &'static str,
    },

    /// Other error
    Other {
        /// Error source
        context: &'static str,
        /// Detailed message (std only)
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { .. } => Self::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::DecryptionFailed { .. } => Self::DecryptionFailed {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidCiphertext { .. } => Self::InvalidCiphertext {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::AuthenticationFailed { .. } => Self::AuthenticationFailed {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::ArithmeticError { .. } => Self::ArithmeticError {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::NotImplemented { feature } => Self::NotImplemented { feature },
            Self::Other { .. } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context, .. } => {
                write!(f, "Invalid key: {}", context)
            }
            Self::DecryptionFailed { context, .. } => {
                write!(f, "Decryption failed: {}", context)
            }
            Self::InvalidCiphertext { context, .. } => {
                write!(f, "Invalid ciphertext: {}", context)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidParameter { context, .. } => {
                write!(f, "Invalid parameter: {}", context)
            }
            Self::AuthenticationFailed { context, .. } => {
                write!(f, "Authentication failed: {}", context)
            }
            Self::ArithmeticError { context, .. } => {
                write!(f, "Arithmetic error: {}", context)
            }
            Self::NotImplemented { feature } => {
                write!(f, "{} is not implemented", feature)
            }
            Self::Other { context, .. } => {
                write!(f, "Error: {}", context)
            }
        }
    }
}
