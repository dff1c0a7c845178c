//! Algebraic laws over randomized operands

use crypta_bigint::{BigInt, BigUint};
use proptest::prelude::*;

fn biguint_strategy() -> impl Strategy<Value = BigUint> {
    proptest::collection::vec(any::<u32>(), 1..12).prop_map(|words| BigUint::from_words(&words))
}

proptest! {
    #[test]
    fn division_reconstructs_dividend(a in biguint_strategy(), b in biguint_strategy()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert!(r < b);
        prop_assert_eq!(&q.mul_ref(&b) + &r, a);
    }

    #[test]
    fn add_sub_round_trip(a in biguint_strategy(), b in biguint_strategy()) {
        let sum = &a + &b;
        prop_assert_eq!(&sum - &b, a.clone());
        prop_assert_eq!(&sum - &a, b);
    }

    #[test]
    fn mul_is_commutative(a in biguint_strategy(), b in biguint_strategy()) {
        prop_assert_eq!(a.mul_ref(&b), b.mul_ref(&a));
    }

    #[test]
    fn shift_round_trip(a in biguint_strategy(), shift in 0usize..200) {
        let shifted = &(&a << shift) >> shift;
        prop_assert_eq!(shifted, a);
    }

    #[test]
    fn radix_round_trip(a in biguint_strategy(), radix in 2u32..=36) {
        let s = a.to_str_radix(radix).unwrap();
        prop_assert_eq!(BigUint::from_str_radix(&s, radix).unwrap(), a);
    }

    #[test]
    fn byte_round_trip(a in biguint_strategy()) {
        prop_assert_eq!(BigUint::from_bytes_be(&a.to_bytes_be()), a);
    }

    #[test]
    fn gcd_divides_both(a in biguint_strategy(), b in biguint_strategy()) {
        prop_assume!(!a.is_zero() && !b.is_zero());
        let g = a.gcd(&b);
        prop_assert!(a.div_rem(&g).unwrap().1.is_zero());
        prop_assert!(b.div_rem(&g).unwrap().1.is_zero());
    }

    #[test]
    fn mod_pow_matches_naive(base in 0u64..1000, exp in 0u32..64, modulus in 2u64..100_000) {
        let b = BigUint::from(base);
        let e = BigUint::from(exp);
        let m = BigUint::from(modulus);
        let mut expected = 1u128;
        for _ in 0..exp {
            expected = expected * base as u128 % modulus as u128;
        }
        prop_assert_eq!(b.mod_pow(&e, &m).unwrap(), BigUint::from(expected));
    }

    #[test]
    fn signed_bytes_round_trip(v in any::<i64>()) {
        let n = BigInt::from(v);
        prop_assert_eq!(BigInt::from_signed_bytes_be(&n.to_signed_bytes_be()), n);
    }
}
