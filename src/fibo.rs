//! One Cyclotomic Fibonacci pseudoprime round: given a candidate `N` and an
//! odd prime `l` at which `N` does not ramify, decides whether `N` passes
//! the round by checking `U_{N^{2f}-1} === 0 (mod N)` in ℤ[ζ_l], where `U` is
//! the (2,2) entry of the Q-matrix raised to `N^{2f}` and `f` is the order
//! oracle's smallest exponent.

use crate::error::Error;
use crate::order_oracle::smallest_exp;
use crate::qmatrix::QMatrix;
use crate::tables::Tables;
use rug::ops::Pow;
use rug::Integer;

/// One pseudoprime round at parameter `l`. Precondition: `N` does not
/// ramify at `l` (the caller — [`crate::engine::is_prime`] — filters those
/// out via [`crate::ramification::ramifies`] before calling this).
pub fn fibo_pseudoprime(n: &Integer, l: u64, tables: &Tables) -> Result<bool, Error> {
    let f = smallest_exp(n, l, tables)?;
    let exp = 2 * f;
    let exp_u32 = u32::try_from(exp)
        .map_err(|_| Error::InvalidArgument(format!("exponent {exp} exceeds u32::MAX")))?;
    let n_exp = n.clone().pow(exp_u32);

    let generator = QMatrix::generator(l as usize, crate::CYCLO_MAX_SIZE)?;
    let powed = QMatrix::pow(&generator, &n_exp, n)?;
    Ok(powed.q22().is_zero())
}
