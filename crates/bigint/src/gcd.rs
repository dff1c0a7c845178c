//! Greatest common divisor and modular inverse

use crate::int::{BigInt, Sign};
use crate::uint::BigUint;

impl BigUint {
    /// Binary (Stein's) greatest common divisor
    ///
    /// Strips the shared power of two, then repeatedly subtracts the
    /// smaller odd operand from the larger after discarding trailing zero
    /// bits, until one operand vanishes. O(n^2) for n-word operands.
    pub fn gcd(&self, other: &BigUint) -> BigUint {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }

        let mut a = self.clone();
        let mut b = other.clone();

        let az = a.trailing_zeros();
        let bz = b.trailing_zeros();
        let common_twos = az.min(bz);
        a.shr_assign_bits(az);
        b.shr_assign_bits(bz);

        // both odd from here on
        loop {
            if a > b {
                core::mem::swap(&mut a, &mut b);
            }
            b.sub_assign_ref(&a);
            if b.is_zero() {
                break;
            }
            b.shr_assign_bits(b.trailing_zeros());
        }

        a.shl_assign_bits(common_twos);
        a
    }

    /// Modular multiplicative inverse via the extended Euclidean algorithm
    ///
    /// Tracks the Bezout coefficient in signed arithmetic and returns
    /// `None` when `gcd(self, modulus) != 1` or when `modulus <= 1` (no
    /// multiplicative group to invert in).
    pub fn mod_inverse(&self, modulus: &BigUint) -> Option<BigUint> {
        if *modulus <= BigUint::one() {
            return None;
        }

        let mut r_prev = BigInt::from_biguint(Sign::Plus, modulus.clone());
        let mut r = BigInt::from_biguint(Sign::Plus, self.div_rem(modulus).ok()?.1);
        let mut t_prev = BigInt::zero();
        let mut t = BigInt::one();

        while !r.is_zero() {
            let (q, rem) = r_prev.div_rem(&r).ok()?;
            let t_next = &t_prev - &q.mul_ref(&t);
            r_prev = r;
            r = rem;
            t_prev = t;
            t = t_next;
        }

        if r_prev.magnitude() != &BigUint::one() {
            return None;
        }

        // normalize the coefficient into [0, modulus)
        let mut inverse = t_prev;
        while inverse.sign() == Sign::Minus {
            inverse = &inverse + &BigInt::from_biguint(Sign::Plus, modulus.clone());
        }
        Some(inverse.into_magnitude())
    }
}
