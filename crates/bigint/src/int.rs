//! Signed arbitrary-precision integers
//!
//! [`BigInt`] is a sign-and-magnitude pair over [`BigUint`]. The invariant
//! mirrors the unsigned canonical form: a zero magnitude always carries
//! [`Sign::Plus`], so there is no signed zero and equality is structural.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{vec::Vec, string::String};

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::error::{Error, Result};
use crate::uint::BigUint;

/// Sign of a [`BigInt`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Negative values
    Minus,
    /// Zero and positive values
    Plus,
}

impl Sign {
    fn flipped(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::Plus => Sign::Minus,
        }
    }
}

/// Signed big integer
#[derive(Clone, PartialEq, Eq)]
pub struct BigInt {
    sign: Sign,
    magnitude: BigUint,
}

impl BigInt {
    /// The value zero
    pub fn zero() -> Self {
        Self {
            sign: Sign::Plus,
            magnitude: BigUint::zero(),
        }
    }

    /// The value one
    pub fn one() -> Self {
        Self {
            sign: Sign::Plus,
            magnitude: BigUint::one(),
        }
    }

    /// Assemble from a sign and magnitude; a zero magnitude forces
    /// [`Sign::Plus`]
    pub fn from_biguint(sign: Sign, magnitude: BigUint) -> Self {
        let sign = if magnitude.is_zero() { Sign::Plus } else { sign };
        Self { sign, magnitude }
    }

    /// The sign (always [`Sign::Plus`] for zero)
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Borrow the magnitude
    pub fn magnitude(&self) -> &BigUint {
        &self.magnitude
    }

    /// Consume into the magnitude, discarding the sign
    pub fn into_magnitude(self) -> BigUint {
        self.magnitude
    }

    /// Whether the value is zero
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Absolute value
    pub fn abs(&self) -> BigInt {
        BigInt::from_biguint(Sign::Plus, self.magnitude.clone())
    }

    /// Multiplication by reference
    pub fn mul_ref(&self, other: &BigInt) -> BigInt {
        let sign = if self.sign == other.sign {
            Sign::Plus
        } else {
            Sign::Minus
        };
        BigInt::from_biguint(sign, self.magnitude.mul_ref(&other.magnitude))
    }

    /// Quotient and remainder, truncating toward zero
    ///
    /// The remainder takes the sign of the dividend, matching Rust's
    /// native `%`. A zero divisor is an error.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        let (q_mag, r_mag) = self.magnitude.div_rem(&divisor.magnitude)?;
        let q_sign = if self.sign == divisor.sign {
            Sign::Plus
        } else {
            Sign::Minus
        };
        Ok((
            BigInt::from_biguint(q_sign, q_mag),
            BigInt::from_biguint(self.sign, r_mag),
        ))
    }

    /// Minimal two's-complement big-endian serialization
    ///
    /// The encoding is the shortest byte string whose top bit matches the
    /// sign, the form DER INTEGER bodies use. Zero encodes as one zero
    /// byte.
    pub fn to_signed_bytes_be(&self) -> Vec<u8> {
        if self.is_zero() {
            return Vec::from([0u8]);
        }
        match self.sign {
            Sign::Plus => {
                let mut bytes = self.magnitude.to_bytes_be();
                if bytes[0] & 0x80 != 0 {
                    bytes.insert(0, 0);
                }
                bytes
            }
            Sign::Minus => {
                // -x is the complement of (x - 1) over the minimal width
                let reduced = &self.magnitude - &BigUint::one();
                let mut bytes = if reduced.is_zero() {
                    Vec::new()
                } else {
                    reduced.to_bytes_be()
                };
                for b in bytes.iter_mut() {
                    *b = !*b;
                }
                if bytes.first().map_or(true, |&b| b & 0x80 == 0) {
                    bytes.insert(0, 0xff);
                }
                bytes
            }
        }
    }

    /// Parse a two's-complement big-endian byte string
    pub fn from_signed_bytes_be(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return BigInt::zero();
        }
        if bytes[0] & 0x80 == 0 {
            return BigInt::from_biguint(Sign::Plus, BigUint::from_bytes_be(bytes));
        }
        // negative: complement, add one, negate
        let mut complemented: Vec<u8> = bytes.iter().map(|&b| !b).collect();
        let mut i = complemented.len();
        loop {
            if i == 0 {
                complemented.insert(0, 1);
                break;
            }
            i -= 1;
            let (sum, overflow) = complemented[i].overflowing_add(1);
            complemented[i] = sum;
            if !overflow {
                break;
            }
        }
        BigInt::from_biguint(Sign::Minus, BigUint::from_bytes_be(&complemented))
    }

    /// Parse from a string in the given radix, with an optional leading
    /// `-` sign
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self> {
        if let Some(rest) = s.strip_prefix('-') {
            Ok(BigInt::from_biguint(
                Sign::Minus,
                BigUint::from_str_radix(rest, radix)?,
            ))
        } else {
            Ok(BigInt::from_biguint(
                Sign::Plus,
                BigUint::from_str_radix(s, radix)?,
            ))
        }
    }

    /// Format in the given radix
    pub fn to_str_radix(&self, radix: u32) -> Result<String> {
        let digits = self.magnitude.to_str_radix(radix)?;
        Ok(match self.sign {
            Sign::Minus => {
                let mut s = String::with_capacity(digits.len() + 1);
                s.push('-');
                s.push_str(&digits);
                s
            }
            Sign::Plus => digits,
        })
    }
}

impl From<BigUint> for BigInt {
    fn from(magnitude: BigUint) -> Self {
        BigInt::from_biguint(Sign::Plus, magnitude)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        if value < 0 {
            BigInt::from_biguint(Sign::Minus, BigUint::from(value.unsigned_abs()))
        } else {
            BigInt::from_biguint(Sign::Plus, BigUint::from(value as u64))
        }
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        BigInt::from_biguint(Sign::Plus, BigUint::from(value))
    }
}

impl Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        BigInt::from_biguint(self.sign.flipped(), self.magnitude.clone())
    }
}

impl Neg for BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        BigInt::from_biguint(self.sign.flipped(), self.magnitude)
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;
    fn add(self, other: &BigInt) -> BigInt {
        if self.sign == other.sign {
            return BigInt::from_biguint(self.sign, &self.magnitude + &other.magnitude);
        }
        // opposite signs: the larger magnitude wins
        match self.magnitude.cmp(&other.magnitude) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => {
                BigInt::from_biguint(self.sign, &self.magnitude - &other.magnitude)
            }
            Ordering::Less => BigInt::from_biguint(other.sign, &other.magnitude - &self.magnitude),
        }
    }
}

impl Add for BigInt {
    type Output = BigInt;
    fn add(self, other: BigInt) -> BigInt {
        &self + &other
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;
    fn sub(self, other: &BigInt) -> BigInt {
        self + &(-other)
    }
}

impl Sub for BigInt {
    type Output = BigInt;
    fn sub(self, other: BigInt) -> BigInt {
        &self - &other
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;
    fn mul(self, other: &BigInt) -> BigInt {
        self.mul_ref(other)
    }
}

impl Mul for BigInt {
    type Output = BigInt;
    fn mul(self, other: BigInt) -> BigInt {
        self.mul_ref(&other)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Plus, Sign::Minus) => Ordering::Greater,
            (Sign::Minus, Sign::Plus) => Ordering::Less,
            (Sign::Plus, Sign::Plus) => self.magnitude.cmp(&other.magnitude),
            (Sign::Minus, Sign::Minus) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Minus {
            write!(f, "-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}
