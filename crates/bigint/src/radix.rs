//! Radix 2-36 string conversion
//!
//! Parsing groups input digits into chunks that fit one word's worth of
//! digits at the given radix, so the accumulator does one multiply-by-power
//! and one add per chunk instead of per character. Formatting runs the
//! same scheme backwards with the single-word division fast path.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{string::String, vec::Vec};

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};
use crate::uint::{BigUint, Word};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Largest number of radix-`r` digits whose value always fits in one word,
/// together with `r` raised to that count
fn word_chunk(radix: u32) -> (usize, Word) {
    let mut digits = 0;
    let mut power: u64 = 1;
    while power * radix as u64 <= Word::MAX as u64 {
        power *= radix as u64;
        digits += 1;
    }
    (digits, power as Word)
}

fn digit_value(c: char, radix: u32) -> Result<Word> {
    let v = match c {
        '0'..='9' => c as u32 - '0' as u32,
        'a'..='z' => c as u32 - 'a' as u32 + 10,
        'A'..='Z' => c as u32 - 'A' as u32 + 10,
        _ => {
            return Err(Error::InvalidDigit {
                character: c,
                radix,
            })
        }
    };
    if v >= radix {
        return Err(Error::InvalidDigit {
            character: c,
            radix,
        });
    }
    Ok(v)
}

impl BigUint {
    /// Parse a string of digits in the given radix (2..=36)
    ///
    /// Both lowercase and uppercase letter digits are accepted. The empty
    /// string is rejected as an invalid digit sequence.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self> {
        if !(2..=36).contains(&radix) {
            return Err(Error::InvalidRadix { radix });
        }
        if s.is_empty() {
            return Err(Error::InvalidDigit {
                character: ' ',
                radix,
            });
        }

        let (digits_per_word, _) = word_chunk(radix);
        let chars: Vec<char> = s.chars().collect();
        let mut value = BigUint::zero();

        let mut index = 0;
        while index < chars.len() {
            let take = digits_per_word.min(chars.len() - index);
            let mut chunk: Word = 0;
            for &c in &chars[index..index + take] {
                chunk = chunk * radix as Word + digit_value(c, radix)?;
            }
            // scale by radix^take, then fold the chunk in
            let mut scale: Word = 1;
            for _ in 0..take {
                scale *= radix as Word;
            }
            value.mul_word(scale);
            value.add_word(chunk);
            index += take;
        }

        Ok(value)
    }

    /// Format in the given radix (2..=36), lowercase digits
    pub fn to_str_radix(&self, radix: u32) -> Result<String> {
        if !(2..=36).contains(&radix) {
            return Err(Error::InvalidRadix { radix });
        }
        if self.is_zero() {
            return Ok(String::from("0"));
        }

        let (digits_per_word, big_base) = word_chunk(radix);
        let mut chunks: Vec<Word> = Vec::new();
        let mut remaining = self.clone();
        while !remaining.is_zero() {
            let (q, r) = remaining.div_rem_word(big_base);
            chunks.push(r);
            remaining = q;
        }

        let mut out = String::new();
        for (i, &chunk) in chunks.iter().enumerate().rev() {
            let mut digits = [0u8; 32];
            let mut len = 0;
            let mut v = chunk;
            loop {
                digits[len] = DIGITS[(v % radix as Word) as usize];
                len += 1;
                v /= radix as Word;
                if v == 0 {
                    break;
                }
            }
            // interior chunks are zero-padded to full width
            if i != chunks.len() - 1 {
                for _ in len..digits_per_word {
                    out.push('0');
                }
            }
            for j in (0..len).rev() {
                out.push(digits[j] as char);
            }
        }
        Ok(out)
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_str_radix(10) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl fmt::Debug for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigUint({})", self)
    }
}

impl fmt::LowerHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_str_radix(16) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl FromStr for BigUint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BigUint::from_str_radix(s, 10)
    }
}
