//! # Cyclofibo — Cyclotomic Fibonacci Primality Engine
//!
//! Deterministic primality testing by chaining Cyclotomic Fibonacci
//! pseudoprime rounds over small odd primes `l = 3, 5, 7, …`, each round
//! exponentiating a 2×2 Q-matrix over the cyclotomic ring ℤ[ζ_l]/(N), until
//! the running product of tested `l`s exceeds the candidate — a
//! Pocklington-style certificate.
//!
//! ## Module Organization
//!
//! **Core engine** (leaves-first dependency order):
//! - [`cyclo`] — ℤ[ζ_l]/(N) element arithmetic: add, multiply, multiply by ζ
//! - [`qmatrix`] — symmetric 2×2 matrix over `CycInt`, binary exponentiation
//! - [`tables`] — static-lifetime primes, φ-divisors, discriminants
//! - [`ramification`] — gcd(N, disc_l) > 1 ramification filter
//! - [`order_oracle`] — smallest `f` with `N^f ≡ 1 (mod l)`
//! - [`fibo`] — one Cyclotomic Fibonacci pseudoprime round
//! - [`engine`] — top-level decision loop (`is_prime`)
//!
//! **Infrastructure**:
//! - [`error`] — typed error taxonomy returned by every fallible public op
//! - [`sieve`] — small-prime generation backing `tables::Tables`
//! - [`logging`] — `tracing` subscriber setup for embedding front-ends
//!
//! ## Design Philosophy
//!
//! Every public operation returns `Result<T, error::Error>` rather than
//! panicking; the ring quotient is ℤ[x]/(x^l − 1) (the circulant
//! representation), not reduction by the l-th cyclotomic polynomial — a
//! deliberate choice carried throughout, not a shortcut. See `DESIGN.md` for
//! the full grounding ledger and `SPEC_FULL.md` for the expanded
//! requirements this crate implements.

pub mod cyclo;
pub mod engine;
pub mod error;
pub mod fibo;
pub mod logging;
pub mod order_oracle;
pub mod qmatrix;
pub mod ramification;
pub mod sieve;
pub mod tables;

pub use engine::{is_prime, Verdict};
pub use error::Error;

/// Ceiling on a `CycInt`'s ring size (and therefore on the largest odd
/// prime `l` the engine will try), matching `original_source/cyclo.h`'s
/// `CYCLO_MAX_SIZE`.
pub const CYCLO_MAX_SIZE: usize = 4096;
