//! Minimal ASN.1 DER encoding
//!
//! Covers the distinguished-encoding subset that big-integer exchange
//! formats need: INTEGER (two's complement, minimal length), OCTET
//! STRING, NULL, and SEQUENCE, all with definite lengths. This is not a
//! general ASN.1 toolkit; unknown tags and indefinite lengths are
//! rejected.

pub mod der;

pub use der::DerValue;

#[cfg(test)]
mod tests;
