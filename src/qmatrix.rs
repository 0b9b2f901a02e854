//! The Q-matrix [[ζ,1],[1,0]] over ℤ[x]/(x^size − 1), whose k-th power
//! encodes the cyclotomic Fibonacci numbers used by the pseudoprime test:
//!
//!     Q^k = [[F_{k+1}, F_k], [F_k, F_{k−1}]]
//!
//! with F_0 = 0, F_1 = 1 under the cyclotomic recurrence. `QMatrix` carries
//! two load-bearing optimizations over a naive 2×2 multiply: the matrix is
//! always symmetric (q21 is never computed, only copied from q12), and q11
//! is recovered from the recurrence q11 = ζ·q12 + q22 rather than by a
//! third ring multiplication.

use crate::cyclo::CycInt;
use crate::error::Error;
use rug::Integer;

/// A symmetric 2×2 matrix of [`CycInt`] entries, all of the same size.
#[derive(Debug, Clone)]
pub struct QMatrix {
    size: usize,
    q11: CycInt,
    q12: CycInt,
    q21: CycInt,
    q22: CycInt,
}

impl QMatrix {
    /// The generator Q = [[ζ,1],[1,0]]. Fresh `CycInt`s start zeroed, so
    /// q11 carries only its ζ coordinate and q22 is the zero element — the
    /// non-ζ coordinates of q11 are zero by construction, not by an
    /// explicit clear.
    pub fn generator(size: usize, max_size: usize) -> Result<QMatrix, Error> {
        Ok(QMatrix {
            size,
            q11: CycInt::zeta(size, max_size)?,
            q12: CycInt::one(size, max_size)?,
            q21: CycInt::one(size, max_size)?,
            q22: CycInt::new(size, max_size)?,
        })
    }

    /// The identity matrix [[1,0],[0,1]].
    pub fn identity(size: usize, max_size: usize) -> Result<QMatrix, Error> {
        Ok(QMatrix {
            size,
            q11: CycInt::one(size, max_size)?,
            q12: CycInt::new(size, max_size)?,
            q21: CycInt::new(size, max_size)?,
            q22: CycInt::one(size, max_size)?,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn q11(&self) -> &CycInt {
        &self.q11
    }

    pub fn q12(&self) -> &CycInt {
        &self.q12
    }

    pub fn q21(&self) -> &CycInt {
        &self.q21
    }

    pub fn q22(&self) -> &CycInt {
        &self.q22
    }

    fn check_compatible(&self, other: &QMatrix) -> Result<(), Error> {
        if self.size != other.size {
            return Err(Error::InvalidArgument(format!(
                "Q-matrix size mismatch: {} vs {}",
                self.size, other.size
            )));
        }
        Ok(())
    }

    /// `m1 * m2 mod N`, exploiting symmetry and the recurrence:
    ///
    /// - r12 = m1.q11·m2.q12 + m1.q12·m2.q22
    /// - r22 = m1.q21·m2.q12 + m1.q22·m2.q22
    /// - r21 = r12
    /// - r11 = ζ·r12 + r22
    ///
    /// Only two ring multiplications are needed per operand pair (four
    /// total), instead of the eight a naive 2×2 product would require.
    pub fn mult(m1: &QMatrix, m2: &QMatrix, n: &Integer) -> Result<QMatrix, Error> {
        m1.check_compatible(m2)?;
        let r12 = CycInt::add(
            &CycInt::mult(&m1.q11, &m2.q12, n)?,
            &CycInt::mult(&m1.q12, &m2.q22, n)?,
            n,
        )?;
        let r22 = CycInt::add(
            &CycInt::mult(&m1.q21, &m2.q12, n)?,
            &CycInt::mult(&m1.q22, &m2.q22, n)?,
            n,
        )?;
        let r21 = r12.clone();
        let r11 = CycInt::add(&CycInt::mult_by_zeta(&r12), &r22, n)?;
        Ok(QMatrix {
            size: m1.size,
            q11: r11,
            q12: r12,
            q21: r21,
            q22: r22,
        })
    }

    /// Binary exponentiation: `base^k mod N`.
    ///
    /// Invariant before each iteration: `base_original^k_original = acc *
    /// base^e`. Returns the identity when `k == 0`, including when `base`
    /// is the generator.
    pub fn pow(base: &QMatrix, k: &Integer, n: &Integer) -> Result<QMatrix, Error> {
        if *k == 0 {
            return QMatrix::identity(base.size, base.size);
        }
        let mut acc = QMatrix::identity(base.size, base.size)?;
        let mut cur = base.clone();
        let mut e = k.clone();
        while e > 0 {
            if e.is_odd() {
                acc = QMatrix::mult(&acc, &cur, n)?;
            }
            cur = QMatrix::mult(&cur, &cur, n)?;
            e >>= 1;
        }
        Ok(acc)
    }
}
