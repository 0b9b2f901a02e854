//! Cyclotomic integer arithmetic in ℤ[x]/(x^size − 1), reduced mod N.
//!
//! A [`CycInt`] of size `l` represents an algebraic integer in the
//! quotient ring ℤ[x]/(x^l − 1) by its ordered coordinates c_0, …, c_{l−1}.
//! This is the circulant representation rather than reduction by the l-th
//! cyclotomic polynomial Φ_l(x) — deliberate, not a shortcut: the engine's
//! Q-matrix recurrence is defined over this ring, and implementations must
//! not silently switch to Φ_l-reduction.

use crate::error::Error;
use rug::ops::RemRounding;
use rug::Integer;

/// An element of ℤ[x]/(x^size − 1), coordinates held in [0, N) once any
/// N-modulo operation has been applied.
#[derive(Debug, Clone)]
pub struct CycInt {
    size: usize,
    coords: Vec<Integer>,
}

impl CycInt {
    /// Allocates a zeroed element of the given ring size.
    pub fn new(size: usize, max_size: usize) -> Result<Self, Error> {
        if size == 0 || size > max_size {
            return Err(Error::InvalidSize {
                size,
                max: max_size,
            });
        }
        Ok(CycInt {
            size,
            coords: vec![Integer::new(); size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Assigns coordinate `i`.
    pub fn set_coord(&mut self, i: usize, value: Integer) -> Result<(), Error> {
        if i >= self.size {
            return Err(Error::OutOfRange {
                index: i,
                size: self.size,
            });
        }
        self.coords[i] = value;
        Ok(())
    }

    /// Reads coordinate `i`.
    pub fn coord(&self, i: usize) -> Result<&Integer, Error> {
        self.coords.get(i).ok_or(Error::OutOfRange {
            index: i,
            size: self.size,
        })
    }

    /// Sets every coordinate to zero.
    pub fn zero(&mut self) {
        for c in &mut self.coords {
            *c = Integer::new();
        }
    }

    /// True iff every coordinate is zero.
    pub fn is_zero(&self) -> bool {
        self.coords.iter().all(|c| *c == 0)
    }

    /// Coordinate-wise equality; only defined when sizes match.
    pub fn equals(&self, other: &CycInt) -> Result<bool, Error> {
        same_size(self, other)?;
        Ok(self.coords == other.coords)
    }

    fn same_size_as(&self, size: usize) -> Result<(), Error> {
        if self.size != size {
            return Err(Error::InvalidArgument(format!(
                "size mismatch: {} vs {}",
                self.size, size
            )));
        }
        Ok(())
    }

    /// `a + b`, coordinate-wise, each coordinate reduced into [0, N).
    /// Coordinates are independent — there is no carry between them.
    pub fn add(a: &CycInt, b: &CycInt, n: &Integer) -> Result<CycInt, Error> {
        same_size(a, b)?;
        let coords = a
            .coords
            .iter()
            .zip(&b.coords)
            .map(|(x, y)| Integer::from(x + y).rem_euc(n))
            .collect();
        Ok(CycInt {
            size: a.size,
            coords,
        })
    }

    /// Polynomial product in ℤ[x], truncated and folded modulo x^size − 1
    /// (coefficient at power i+j contributes to coordinate (i+j) mod size),
    /// each resulting coordinate then reduced mod N.
    ///
    /// There is no external dense-polynomial-multiplication dependency in
    /// this crate's stack, so the length-(2·size) convolution is computed
    /// directly over `Integer` coefficients and folded as it is produced.
    pub fn mult(a: &CycInt, b: &CycInt, n: &Integer) -> Result<CycInt, Error> {
        same_size(a, b)?;
        let size = a.size;
        let mut folded = vec![Integer::new(); size];
        for (i, ai) in a.coords.iter().enumerate() {
            if *ai == 0 {
                continue;
            }
            for (j, bj) in b.coords.iter().enumerate() {
                if *bj == 0 {
                    continue;
                }
                let k = (i + j) % size;
                folded[k] += Integer::from(ai * bj);
            }
        }
        for c in &mut folded {
            *c = std::mem::take(c).rem_euc(n);
        }
        Ok(CycInt {
            size,
            coords: folded,
        })
    }

    /// Cyclic right-shift by one position: result[(i+1) mod size] = a[i].
    /// A pure permutation of coordinates — no modular reduction needed.
    pub fn mult_by_zeta(a: &CycInt) -> CycInt {
        let size = a.size;
        let mut coords = vec![Integer::new(); size];
        for (i, c) in a.coords.iter().enumerate() {
            coords[(i + 1) % size] = c.clone();
        }
        CycInt { size, coords }
    }

    /// Coordinate 1 set to 1, all others zero: the primitive root ζ.
    pub fn zeta(size: usize, max_size: usize) -> Result<CycInt, Error> {
        let mut z = CycInt::new(size, max_size)?;
        z.set_coord(1, Integer::from(1))?;
        Ok(z)
    }

    /// Coordinate 0 set to 1, all others zero: the multiplicative identity.
    pub fn one(size: usize, max_size: usize) -> Result<CycInt, Error> {
        let mut o = CycInt::new(size, max_size)?;
        o.set_coord(0, Integer::from(1))?;
        Ok(o)
    }
}

fn same_size(a: &CycInt, b: &CycInt) -> Result<(), Error> {
    a.same_size_as(b.size)
}
