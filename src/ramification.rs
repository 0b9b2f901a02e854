//! Ramification filter: `N` ramifies in ℤ[ζ_l] iff `gcd(N, disc(ℤ[ζ_l])) > 1`.
//! A ramified `l` carries no pseudoprime-test signal and must be skipped by
//! [`crate::engine::is_prime`] rather than treated as a failed round.

use crate::error::Error;
use crate::tables::Tables;
use rug::Integer;

/// True iff `N` ramifies in ℤ[ζ_l]. Does not indicate compositeness of `N` —
/// it only says `l` must be skipped by the primality engine.
pub fn ramifies(n: &Integer, l: u64, tables: &Tables) -> Result<bool, Error> {
    let disc = tables.discriminant(l)?;
    let g = n.clone().gcd(disc);
    Ok(g > 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_ramifies_at_three() {
        // disc(Z[zeta_3]) = -3, gcd(9, -3) = 3 > 1.
        let tables = Tables::get();
        assert!(ramifies(&Integer::from(9), 3, tables).unwrap());
    }

    #[test]
    fn eleven_does_not_ramify_at_three() {
        let tables = Tables::get();
        assert!(!ramifies(&Integer::from(11), 3, tables).unwrap());
    }

    #[test]
    fn unknown_l_is_rejected() {
        let tables = Tables::get();
        assert!(matches!(
            ramifies(&Integer::from(10), 4, tables),
            Err(Error::InvalidArgument(_))
        ));
    }
}
