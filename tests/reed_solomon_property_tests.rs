//! Property-based tests for GF(256) arithmetic and Reed-Solomon encoding
//!
//! These tests use proptest to check the field axioms, the polynomial
//! division identity and that the optimized encoder agrees with the
//! reference division for randomly generated inputs.

use gf256::{data_matrix_field, qr_code_field, GaloisField, Poly, ReedSolomon};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn any_field() -> impl Strategy<Value = &'static GaloisField> {
    prop_oneof![Just(qr_code_field()), Just(data_matrix_field())]
}

proptest! {
    /// Property: addition is commutative with 0 as identity and every element its own negative
    #[test]
    fn prop_galois_addition(gf in any_field(), x in any::<u8>(), y in any::<u8>()) {
        prop_assert_eq!(gf.add(x, y), gf.add(y, x));
        prop_assert_eq!(gf.add(x, 0), x);
        prop_assert_eq!(gf.add(x, x), 0);
    }

    /// Property: x * inverse(x) = 1 for nonzero x
    #[test]
    fn prop_galois_inverse(gf in any_field(), x in 1u8..=255) {
        prop_assert_eq!(gf.mul(x, gf.inverse(x)), 1);
    }

    /// Property: exp and log are inverse mappings
    #[test]
    fn prop_galois_log_exp(gf in any_field(), x in 1u8..=255, e in 0i32..255) {
        prop_assert_eq!(gf.exp(gf.log(x)), x);
        prop_assert_eq!(gf.log(gf.exp(e)), e);
    }

    /// Property: multiplication distributes over addition
    #[test]
    fn prop_galois_distributive(gf in any_field(), x in any::<u8>(), y in any::<u8>(), z in any::<u8>()) {
        prop_assert_eq!(gf.mul(x, gf.add(y, z)), gf.add(gf.mul(x, y), gf.mul(x, z)));
    }

    /// Property: multiplication is commutative and associative
    #[test]
    fn prop_galois_multiplication(gf in any_field(), x in any::<u8>(), y in any::<u8>(), z in any::<u8>()) {
        prop_assert_eq!(gf.mul(x, y), gf.mul(y, x));
        prop_assert_eq!(gf.mul(gf.mul(x, y), z), gf.mul(x, gf.mul(y, z)));
    }

    /// Property: P = q * Q + r with deg r < deg Q
    #[test]
    fn prop_division_identity(
        gf in any_field(),
        p in prop::collection::vec(any::<u8>(), 0..40),
        q in prop::collection::vec(any::<u8>(), 1..12),
    ) {
        let p = Poly::from(p);
        let divisor = Poly::from(q);
        prop_assume!(!divisor.is_zero());

        let (quotient, remainder) = gf.div_poly(&p, &divisor).unwrap();
        prop_assert_eq!(gf.mul_poly(&quotient, &divisor).add(&remainder), p.normalized());

        let divisor_degree = divisor.degree().unwrap();
        match remainder.degree() {
            Some(d) => prop_assert!(d < divisor_degree),
            None => prop_assert!(remainder.is_zero()),
        }
    }

    /// Property: polynomial addition is commutative and self-cancelling
    #[test]
    fn prop_poly_addition(
        x in prop::collection::vec(any::<u8>(), 0..20),
        y in prop::collection::vec(any::<u8>(), 0..20),
    ) {
        let x = Poly::from(x);
        let y = Poly::from(y);
        prop_assert_eq!(x.add(&y), y.add(&x));
        prop_assert!(x.add(&x).coefficients().is_empty());
    }

    /// Property: the optimized encoder reproduces the reference check bytes
    #[test]
    fn prop_encoder_matches_reference(
        gf in any_field(),
        data in prop::collection::vec(any::<u8>(), 0..120),
        check_bytes in 0usize..40,
    ) {
        let mut rs = ReedSolomon::new(gf, check_bytes).unwrap();

        let mut expected = vec![0u8; check_bytes];
        gf.ec_bytes(&data, &mut expected).unwrap();
        let mut actual = vec![0u8; check_bytes];
        rs.encode(&data, &mut actual).unwrap();

        prop_assert_eq!(actual, expected);
    }
}

/// Reusing one encoder across varying lengths must not leak stale scratch bytes
#[test]
fn test_encoder_reuse_random_lengths() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let gf = qr_code_field();
    let mut rs = ReedSolomon::new(gf, 22).unwrap();

    let mut seen: Vec<(Vec<u8>, Vec<u8>)> = Vec::new();
    for _ in 0..200 {
        let len = rng.random_range(0..300);
        let data: Vec<u8> = (0..len).map(|_| rng.random()).collect();
        let check = rs.encode_to_vec(&data).unwrap();

        let mut expected = vec![0u8; 22];
        gf.ec_bytes(&data, &mut expected).unwrap();
        assert_eq!(check, expected, "length {}", len);

        seen.push((data, check));
    }

    for (data, check) in seen.iter().rev() {
        assert_eq!(&rs.encode_to_vec(data).unwrap(), check);
    }
}
