//! Modular exponentiation

use crate::error::{Error, Result};
use crate::uint::BigUint;

impl BigUint {
    /// Modular exponentiation, right-to-left binary method
    ///
    /// Walks the exponent from least to most significant bit, squaring the
    /// running base once per bit and multiplying it into the accumulator
    /// for every set bit, reducing after each product. A modulus of one
    /// yields zero (including for `x^0`); a zero modulus is an error.
    pub fn mod_pow(&self, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if *modulus == BigUint::one() {
            return Ok(BigUint::zero());
        }

        let mut result = BigUint::one();
        let (_, mut base) = self.div_rem(modulus)?;
        let bits = exponent.bit_length();

        for i in 0..bits {
            if exponent.bit(i) {
                let (_, reduced) = result.mul_ref(&base).div_rem(modulus)?;
                result = reduced;
            }
            if i + 1 < bits {
                let (_, squared) = base.mul_ref(&base).div_rem(modulus)?;
                base = squared;
            }
        }

        Ok(result)
    }

    /// Modular multiplication helper: `(self * other) mod modulus`
    pub fn mul_mod(&self, other: &BigUint, modulus: &BigUint) -> Result<BigUint> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (_, r) = self.mul_ref(other).div_rem(modulus)?;
        Ok(r)
    }
}
