//! Smallest-exponent oracle: the smallest `f >= 1` with `N^f === 1 (mod l)`.
//!
//! The source (`original_source/cpseudo.c`'s `smallest_exp`) walks
//! `phi_divisors` in ascending order and keeps overwriting `f` on every
//! match, which — given an ascending divisor list — returns the *largest*
//! matching divisor instead of the smallest. spec.md requires the smallest:
//! it is the mathematically correct value (the true multiplicative order of
//! `N mod l`, up to the divisor granularity the table tracks) and the value
//! [`crate::fibo::fibo_pseudoprime`] relies on for an efficient exponent.
//! This implementation returns on the first match instead.

use crate::error::Error;
use crate::tables::Tables;
use rug::Integer;

/// Smallest `f` among `tables.phi_divisors(l)` (all of which divide `l-1`)
/// with `N^f === 1 (mod l)`; falls back to `l-1` if no smaller divisor
/// matches (Fermat's little theorem guarantees `l-1` always matches when
/// `gcd(N, l) == 1`).
pub fn smallest_exp(n: &Integer, l: u64, tables: &Tables) -> Result<u64, Error> {
    let divisors = tables.phi_divisors(l)?;
    let modulus = Integer::from(l);
    for &f in divisors {
        let r = n
            .clone()
            .pow_mod(&Integer::from(f), &modulus)
            .map_err(|_| Error::InvalidArgument(format!("pow_mod failed for l={l}, f={f}")))?;
        if r == 1 {
            return Ok(f);
        }
    }
    Ok(l - 1)
}
