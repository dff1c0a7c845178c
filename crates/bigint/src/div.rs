//! Full-precision long division
//!
//! Knuth's Algorithm D over 32-bit words: normalize the divisor so its
//! leading word has the high bit set, estimate each quotient word from the
//! top three dividend half-words against the top two divisor half-words,
//! correct the estimate at most twice, then multiply-subtract with a signed
//! borrow chain and add the divisor back on the rare underflow.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{vec, vec::Vec};

use core::ops::{Div, Rem};

use crate::error::{Error, Result};
use crate::uint::{BigUint, DoubleWord, Word, WORD_BITS};

const BASE: DoubleWord = 1 << WORD_BITS;

impl BigUint {
    /// Quotient and remainder in one pass
    ///
    /// Single-word divisors take an O(n) fast path; everything else runs
    /// Algorithm D. Returns [`Error::DivisionByZero`] for a zero divisor.
    pub fn div_rem(&self, divisor: &BigUint) -> Result<(BigUint, BigUint)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self < divisor {
            return Ok((BigUint::zero(), self.clone()));
        }
        if divisor.word_count() == 1 {
            let (q, r) = self.div_rem_word(divisor.word(0));
            return Ok((q, BigUint::from(r)));
        }
        Ok(self.div_rem_knuth(divisor))
    }

    /// Divide by a single non-zero word, O(n)
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero; use [`div_rem`](Self::div_rem) for a
    /// checked entry point.
    pub(crate) fn div_rem_word(&self, divisor: Word) -> (BigUint, Word) {
        assert!(divisor != 0, "division by zero word");
        let d = divisor as DoubleWord;
        let mut quotient = vec![0 as Word; self.word_count()];
        let mut rem: DoubleWord = 0;
        for i in (0..self.word_count()).rev() {
            let cur = (rem << WORD_BITS) | self.word(i) as DoubleWord;
            quotient[i] = (cur / d) as Word;
            rem = cur % d;
        }
        (BigUint::from_words(&quotient), rem as Word)
    }

    /// Algorithm D proper; requires `divisor.word_count() >= 2` and
    /// `self >= divisor`
    fn div_rem_knuth(&self, divisor: &BigUint) -> (BigUint, BigUint) {
        let n = divisor.word_count();
        let m = self.word_count() - n;

        // D1: normalize so the divisor's leading word has its high bit set
        let shift = divisor.word(n - 1).leading_zeros() as usize;
        let mut v = divisor.clone();
        v.shl_assign_bits(shift);
        let mut u = self.clone();
        u.shl_assign_bits(shift);
        let mut uw: Vec<Word> = u.as_words().to_vec();
        uw.resize(self.word_count() + 1, 0);
        let vw = v.as_words();

        let v1 = vw[n - 1] as DoubleWord;
        let v0 = vw[n - 2] as DoubleWord;

        let mut quotient = vec![0 as Word; m + 1];

        // D2..D7: one quotient word per iteration, most significant first
        for j in (0..=m).rev() {
            let u2 = uw[j + n] as DoubleWord;
            let u1 = uw[j + n - 1] as DoubleWord;
            let u0 = uw[j + n - 2] as DoubleWord;

            // D3: estimate, then correct by at most 2
            let top = (u2 << WORD_BITS) | u1;
            let mut qhat = top / v1;
            let mut rhat = top % v1;
            while qhat >= BASE
                || (qhat as u128) * (v0 as u128) > (((rhat << WORD_BITS) | u0) as u128)
            {
                qhat -= 1;
                rhat += v1;
                if rhat >= BASE {
                    break;
                }
            }

            // D4: multiply and subtract with a signed borrow chain
            let mut borrow: i64 = 0;
            for i in 0..n {
                let p = qhat * vw[i] as DoubleWord;
                let t = uw[i + j] as i64 - borrow - (p & (BASE - 1)) as i64;
                uw[i + j] = t as Word;
                borrow = (p >> WORD_BITS) as i64 - (t >> WORD_BITS);
            }
            let t = uw[j + n] as i64 - borrow;
            uw[j + n] = t as Word;

            // D5/D6: the estimate overshot by one; add the divisor back
            if t < 0 {
                qhat -= 1;
                let mut carry: DoubleWord = 0;
                for i in 0..n {
                    let sum = uw[i + j] as DoubleWord + vw[i] as DoubleWord + carry;
                    uw[i + j] = sum as Word;
                    carry = sum >> WORD_BITS;
                }
                uw[j + n] = (uw[j + n] as DoubleWord + carry) as Word;
            }

            quotient[j] = qhat as Word;
        }

        // D8: denormalize the remainder
        let mut remainder = BigUint::from_words(&uw[..n]);
        remainder.shr_assign_bits(shift);

        (BigUint::from_words(&quotient), remainder)
    }
}

impl Div<&BigUint> for &BigUint {
    type Output = BigUint;

    /// # Panics
    ///
    /// Panics on division by zero, matching the native integer operators.
    fn div(self, divisor: &BigUint) -> BigUint {
        match self.div_rem(divisor) {
            Ok((q, _)) => q,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl Div for BigUint {
    type Output = BigUint;
    fn div(self, divisor: BigUint) -> BigUint {
        &self / &divisor
    }
}

impl Rem<&BigUint> for &BigUint {
    type Output = BigUint;

    /// # Panics
    ///
    /// Panics on division by zero, matching the native integer operators.
    fn rem(self, divisor: &BigUint) -> BigUint {
        match self.div_rem(divisor) {
            Ok((_, r)) => r,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl Rem for BigUint {
    type Output = BigUint;
    fn rem(self, divisor: BigUint) -> BigUint {
        &self % &divisor
    }
}
