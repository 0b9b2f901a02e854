//! Static, process-lifetime tables consulted by [`crate::ramification`],
//! [`crate::order_oracle`], and [`crate::engine`]: the ascending list of odd
//! primes up to [`crate::CYCLO_MAX_SIZE`], the prime→index map, the ascending
//! φ-divisor lists, and the (lazily computed, cached) ring discriminants.
//!
//! The source ships these as hand-transcribed C arrays
//! (`original_source/cpseudo.h`'s `primes[]`/`phi_divisors[]`/
//! `prime_to_index[]`/`discriminants[]`). No such data file is part of this
//! crate's retrieval pack, so every entry here is derived algorithmically at
//! table-build time instead.

use crate::error::Error;
use crate::sieve::odd_primes_up_to;
use rug::ops::Pow;
use rug::Integer;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Odd primes l, their φ-divisors, and (lazily) their ring discriminants,
/// for `3 <= l <= CYCLO_MAX_SIZE`. Built once and shared read-only across
/// threads — no locking is needed on the read path.
pub struct Tables {
    primes: Vec<u64>,
    prime_to_index: HashMap<u64, usize>,
    phi_divisors: Vec<Vec<u64>>,
    discriminants: Vec<OnceLock<Integer>>,
}

impl Tables {
    fn build(limit: u64) -> Tables {
        let primes = odd_primes_up_to(limit);
        let prime_to_index = primes
            .iter()
            .enumerate()
            .map(|(i, &l)| (l, i))
            .collect();
        let phi_divisors = primes.iter().map(|&l| divisors_excluding_one(l - 1)).collect();
        let discriminants = primes.iter().map(|_| OnceLock::new()).collect();
        Tables {
            primes,
            prime_to_index,
            phi_divisors,
            discriminants,
        }
    }

    /// The process-wide singleton, spanning `[3, CYCLO_MAX_SIZE]`.
    pub fn get() -> &'static Tables {
        static TABLES: OnceLock<Tables> = OnceLock::new();
        TABLES.get_or_init(|| Tables::build(crate::CYCLO_MAX_SIZE as u64))
    }

    /// Odd primes in ascending order, `primes()[0] == 3`.
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    fn index_of(&self, l: u64) -> Result<usize, Error> {
        self.prime_to_index
            .get(&l)
            .copied()
            .ok_or_else(|| Error::InvalidArgument(format!("{l} is not an odd prime known to the table")))
    }

    /// Ascending divisors of φ(l) = l−1, excluding 1. Always contains l−1.
    pub fn phi_divisors(&self, l: u64) -> Result<&[u64], Error> {
        let i = self.index_of(l)?;
        Ok(&self.phi_divisors[i])
    }

    /// Discriminant of ℤ[ζ_l] = (−1)^((l−1)/2)·l^(l−2), computed once and
    /// cached. Its magnitude runs to thousands of decimal digits for large
    /// l, so most candidates — which only ever probe the first few table
    /// entries — never pay for it.
    pub fn discriminant(&self, l: u64) -> Result<&Integer, Error> {
        let i = self.index_of(l)?;
        Ok(self.discriminants[i].get_or_init(|| compute_discriminant(l)))
    }
}

fn compute_discriminant(l: u64) -> Integer {
    let magnitude = Integer::from(l).pow((l - 2) as u32);
    if (l - 1) / 2 % 2 == 0 {
        magnitude
    } else {
        -magnitude
    }
}

/// Ascending divisors of `n`, excluding 1 (but including `n` itself).
fn divisors_excluding_one(n: u64) -> Vec<u64> {
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = 1u64;
    while d * d <= n {
        if n % d == 0 {
            if d != 1 {
                small.push(d);
            }
            let paired = n / d;
            if paired != d && paired != 1 {
                large.push(paired);
            }
        }
        d += 1;
    }
    large.reverse();
    small.extend(large);
    small
}
