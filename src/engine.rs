//! Top-level Pocklington-style primality decision: chain
//! [`crate::fibo::fibo_pseudoprime`] rounds over ascending odd primes `l`
//! (skipping ramified ones) until the running product of successful `l`s
//! exceeds the candidate, or any round fails.

use crate::error::Error;
use crate::fibo::fibo_pseudoprime;
use crate::ramification::ramifies;
use crate::tables::Tables;
use rug::Integer;
use tracing::info;

/// Outcome of [`is_prime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Prime,
    Composite,
}

/// Decides primality of `n`. `verbose` emits one `tracing::info!` line per
/// round with `l`, whether `N` ramified, and the updated running bound.
///
/// Returns [`Error::TableExhausted`] if the small-prime table runs out
/// before the running bound exceeds `n` — the source returns "prime" in
/// this case, which spec.md identifies as a bug; this implementation
/// surfaces an error instead of a false certificate.
pub fn is_prime(n: &Integer, verbose: bool) -> Result<Verdict, Error> {
    if *n == 0 || *n == 1 {
        return Ok(Verdict::Composite);
    }
    if *n == 2 || *n == 5 {
        return Ok(Verdict::Prime);
    }
    if n.is_even() {
        return Ok(Verdict::Composite);
    }

    let tables = Tables::get();
    let mut bound = Integer::from(1);

    for &l in tables.primes() {
        if *n == l {
            return Ok(Verdict::Prime);
        }

        if ramifies(n, l, tables)? {
            if verbose {
                info!(l, ramified = true, "skipping ramified l");
            }
            continue;
        }

        if verbose {
            info!(l, "probing");
        }

        if !fibo_pseudoprime(n, l, tables)? {
            return Ok(Verdict::Composite);
        }

        bound *= l;

        if verbose {
            info!(l, bound = %bound, "round passed");
        }

        if bound > *n {
            return Ok(Verdict::Prime);
        }
    }

    Err(Error::TableExhausted {
        bound,
        candidate: n.clone(),
    })
}
