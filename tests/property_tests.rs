//! Property-based tests for cyclofibo's cyclotomic ring, Q-matrix, and
//! order-oracle invariants.
//!
//! These use `proptest` to check algebraic laws (commutativity,
//! associativity, the `pow` semigroup law, `multByZeta`'s order-`size`
//! cycle) across many randomly generated ring elements and moduli, rather
//! than a handful of hand-picked examples.
//!
//! # How to run
//!
//! ```bash
//! cargo test --test property_tests
//! PROPTEST_CASES=10000 cargo test --test property_tests
//! ```

use cyclofibo::cyclo::CycInt;
use cyclofibo::order_oracle::smallest_exp;
use cyclofibo::qmatrix::QMatrix;
use cyclofibo::tables::Tables;
use proptest::prelude::*;
use rug::Integer;

const MAX_SIZE: usize = 64;

fn build_cycint(size: usize, coords: &[i64]) -> CycInt {
    let mut v = CycInt::new(size, MAX_SIZE).unwrap();
    for (i, &c) in coords.iter().take(size).enumerate() {
        v.set_coord(i, Integer::from(c)).unwrap();
    }
    v
}

proptest! {
    /// `CycInt::add` is commutative under any modulus.
    #[test]
    fn prop_cycint_add_commutative(
        size in 1usize..8,
        a_coords in prop::collection::vec(0i64..1000, 1..8),
        b_coords in prop::collection::vec(0i64..1000, 1..8),
        modulus in 2u64..1000,
    ) {
        let n = Integer::from(modulus);
        let a = build_cycint(size, &a_coords);
        let b = build_cycint(size, &b_coords);
        let ab = CycInt::add(&a, &b, &n).unwrap();
        let ba = CycInt::add(&b, &a, &n).unwrap();
        prop_assert!(ab.equals(&ba).unwrap());
    }

    /// `CycInt::mult` is commutative: a*b == b*a (the convolution is over a
    /// commutative ring, so this must hold for every pair of elements).
    #[test]
    fn prop_cycint_mult_commutative(
        size in 1usize..6,
        a_coords in prop::collection::vec(0i64..50, 1..6),
        b_coords in prop::collection::vec(0i64..50, 1..6),
        modulus in 2u64..500,
    ) {
        let size = size.max(1);
        let n = Integer::from(modulus);
        let a = build_cycint(size, &a_coords);
        let b = build_cycint(size, &b_coords);
        let ab = CycInt::mult(&a, &b, &n).unwrap();
        let ba = CycInt::mult(&b, &a, &n).unwrap();
        prop_assert!(ab.equals(&ba).unwrap());
    }

    /// Every coordinate of an `add`/`mult` result lands in `[0, N)`.
    #[test]
    fn prop_cycint_ops_reduce_into_range(
        size in 1usize..6,
        a_coords in prop::collection::vec(0i64..1000, 1..6),
        b_coords in prop::collection::vec(0i64..1000, 1..6),
        modulus in 2u64..200,
    ) {
        let n = Integer::from(modulus);
        let a = build_cycint(size, &a_coords);
        let b = build_cycint(size, &b_coords);
        let sum = CycInt::add(&a, &b, &n).unwrap();
        let prod = CycInt::mult(&a, &b, &n).unwrap();
        for i in 0..size {
            prop_assert!(*sum.coord(i).unwrap() >= 0 && *sum.coord(i).unwrap() < n);
            prop_assert!(*prod.coord(i).unwrap() >= 0 && *prod.coord(i).unwrap() < n);
        }
    }

    /// `multByZeta` applied `size` times is the identity map.
    #[test]
    fn prop_mult_by_zeta_has_order_size(
        size in 1usize..10,
        coords in prop::collection::vec(0i64..100, 1..10),
    ) {
        let v = build_cycint(size, &coords);
        let original = v.clone();
        let mut cur = v;
        for _ in 0..size {
            cur = CycInt::mult_by_zeta(&cur);
        }
        prop_assert!(cur.equals(&original).unwrap());
    }

    /// `QMatrix::pow` obeys the semigroup law: pow(M, a+b) == pow(M,a) * pow(M,b).
    #[test]
    fn prop_qmatrix_pow_semigroup_law(
        size in 3usize..8,
        a in 0u64..20,
        b in 0u64..20,
        modulus in 3u64..200,
    ) {
        // Keep `size` odd so it behaves like a valid ring parameter l.
        let size = if size % 2 == 0 { size + 1 } else { size };
        let n = Integer::from(modulus);
        let g = QMatrix::generator(size, MAX_SIZE).unwrap();
        let left = QMatrix::pow(&g, &Integer::from(a + b), &n).unwrap();
        let pa = QMatrix::pow(&g, &Integer::from(a), &n).unwrap();
        let pb = QMatrix::pow(&g, &Integer::from(b), &n).unwrap();
        let right = QMatrix::mult(&pa, &pb, &n).unwrap();
        prop_assert!(left.q11().equals(right.q11()).unwrap());
        prop_assert!(left.q12().equals(right.q12()).unwrap());
        prop_assert!(left.q22().equals(right.q22()).unwrap());
    }

    /// `QMatrix::mult`'s result always satisfies the symmetry and recurrence
    /// invariants (q12 == q21, q11 == zeta*q12 + q22), regardless of input.
    #[test]
    fn prop_qmatrix_mult_preserves_invariants(
        size in 3usize..8,
        k in 1u64..30,
        modulus in 3u64..300,
    ) {
        let size = if size % 2 == 0 { size + 1 } else { size };
        let n = Integer::from(modulus);
        let g = QMatrix::generator(size, MAX_SIZE).unwrap();
        let m = QMatrix::pow(&g, &Integer::from(k), &n).unwrap();
        let sq = QMatrix::mult(&m, &m, &n).unwrap();
        prop_assert!(sq.q12().equals(sq.q21()).unwrap());
        let expect_q11 = CycInt::add(&CycInt::mult_by_zeta(sq.q12()), sq.q22(), &n).unwrap();
        prop_assert!(sq.q11().equals(&expect_q11).unwrap());
    }

    /// `smallest_exp` always returns a divisor of l-1 that actually satisfies
    /// N^f === 1 (mod l).
    #[test]
    fn prop_order_oracle_result_divides_and_satisfies(
        n_val in 2u64..500,
        l_idx in 0usize..20,
    ) {
        let tables = Tables::get();
        let l = tables.primes()[l_idx];
        prop_assume!(n_val % l != 0);
        let f = smallest_exp(&Integer::from(n_val), l, tables).unwrap();
        prop_assert_eq!((l - 1) % f, 0);
        let check = Integer::from(n_val).pow_mod(&Integer::from(f), &Integer::from(l)).unwrap();
        prop_assert_eq!(check, Integer::from(1));
    }
}
