//! Polynomials over GF(256)
//!
//! Coefficients are stored in ascending degree order: index `i` holds the
//! coefficient of x^i. The empty vector is the zero polynomial.
//!
//! Addition needs no field (it is XOR). Multiplication and division are
//! methods on [`GaloisField`] since they depend on the field's tables.

use crate::error::{GfError, GfResult};
use crate::galois::GaloisField;
use std::fmt;
use std::ops::Add;

/// Polynomial with GF(256) coefficients, lowest degree first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Poly {
    coeffs: Vec<u8>,
}

impl Poly {
    /// The zero polynomial
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// The constant polynomial 1
    pub fn one() -> Self {
        Self { coeffs: vec![1] }
    }

    /// Single-term polynomial `coefficient · x^degree`
    pub fn monomial(coefficient: u8, degree: usize) -> Self {
        let mut coeffs = vec![0; degree + 1];
        coeffs[degree] = coefficient;
        Self { coeffs }
    }

    pub fn coefficients(&self) -> &[u8] {
        &self.coeffs
    }

    pub fn into_coefficients(self) -> Vec<u8> {
        self.coeffs
    }

    /// Number of stored coefficients, including any trailing zeros
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// True if this polynomial normalizes to zero
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// Degree of the polynomial, `None` for zero
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|&c| c != 0)
    }

    /// Strip trailing zero (high-degree) coefficients
    pub fn normalize(mut self) -> Self {
        let len = self.degree().map_or(0, |d| d + 1);
        self.coeffs.truncate(len);
        self
    }

    pub fn normalized(&self) -> Self {
        self.clone().normalize()
    }

    /// Sum of two polynomials, normalized
    pub fn add(&self, other: &Poly) -> Poly {
        let (long, short) = if self.len() >= other.len() {
            (&self.coeffs, &other.coeffs)
        } else {
            (&other.coeffs, &self.coeffs)
        };

        let mut coeffs = long.clone();
        for (z, &s) in coeffs.iter_mut().zip(short) {
            *z ^= s;
        }
        Poly { coeffs }.normalize()
    }
}

impl From<Vec<u8>> for Poly {
    fn from(coeffs: Vec<u8>) -> Self {
        Self { coeffs }
    }
}

impl From<&[u8]> for Poly {
    fn from(coeffs: &[u8]) -> Self {
        Self {
            coeffs: coeffs.to_vec(),
        }
    }
}

impl Add for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        Poly::add(self, rhs)
    }
}

/// Renders as `c x^d + ...` in descending degree, skipping zero
/// coefficients and writing no coefficient when it is 1.
impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &c) in self.coeffs.iter().enumerate().rev() {
            if c == 0 {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            if c != 1 {
                write!(f, "{} ", c)?;
            }
            write!(f, "x^{}", i)?;
        }
        Ok(())
    }
}

impl GaloisField {
    /// Product of two polynomials
    pub fn mul_poly(&self, x: &Poly, y: &Poly) -> Poly {
        if x.coeffs.is_empty() || y.coeffs.is_empty() {
            return Poly::zero();
        }

        let mut z = vec![0u8; x.len() + y.len() - 1];
        for (i, &xi) in x.coeffs.iter().enumerate() {
            if xi == 0 {
                continue;
            }
            for (zj, &yj) in z[i..].iter_mut().zip(&y.coeffs) {
                *zj ^= self.mul(xi, yj);
            }
        }
        Poly::from(z)
    }

    /// Long division of `x` by `y`, returning `(quotient, remainder)`.
    ///
    /// The remainder has degree strictly less than `y`'s, or is zero, and
    /// `x == quotient * y + remainder`.
    pub fn div_poly(&self, x: &Poly, y: &Poly) -> GfResult<(Poly, Poly)> {
        let y = y.normalized();
        let lead = match y.coeffs.last() {
            Some(&lead) => lead,
            None => return Err(GfError::DivideByZero),
        };

        let inv = self.inverse(lead);
        let mut q = Poly::zero();
        let mut r = x.normalized();
        while r.len() >= y.len() {
            let r_lead = r.coeffs[r.len() - 1];
            let term = Poly::monomial(self.mul(r_lead, inv), r.len() - y.len());
            r = r.add(&self.mul_poly(&term, &y));
            q = q.add(&term);
        }
        Ok((q, r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galois::qr_code_field;

    #[test]
    fn test_normalize() {
        assert_eq!(Poly::from(vec![1, 2, 0, 0]).normalize(), Poly::from(vec![1, 2]));
        assert_eq!(Poly::from(vec![0, 0]).normalize(), Poly::zero());
        assert!(Poly::from(vec![0, 0]).is_zero());
        assert_eq!(Poly::from(vec![0, 0]).degree(), None);
        assert_eq!(Poly::monomial(7, 3).degree(), Some(3));
    }

    #[test]
    fn test_add() {
        let x = Poly::from(vec![1, 2, 3]);
        let y = Poly::from(vec![4, 5]);

        assert_eq!(&x + &y, Poly::from(vec![5, 7, 3]));
        assert_eq!(x.add(&y), y.add(&x));
        assert_eq!(x.add(&x), Poly::zero());
        assert_eq!(x.add(&Poly::zero()), x);
        // Cancelling leading terms shrinks the result
        assert_eq!(x.add(&Poly::from(vec![0, 0, 3])), Poly::from(vec![1, 2]));
    }

    #[test]
    fn test_monomial() {
        assert_eq!(Poly::monomial(9, 2).coefficients(), &[0, 0, 9]);
        assert_eq!(Poly::monomial(1, 0), Poly::one());
    }

    #[test]
    fn test_mul_poly() {
        let gf = qr_code_field();

        // (x + 1)(x + 1) = x^2 + 1 in characteristic 2
        let x1 = Poly::from(vec![1, 1]);
        assert_eq!(gf.mul_poly(&x1, &x1), Poly::from(vec![1, 0, 1]));

        assert_eq!(gf.mul_poly(&x1, &Poly::zero()), Poly::zero());
        assert_eq!(gf.mul_poly(&Poly::one(), &x1), x1);
        assert_eq!(gf.mul_poly(&Poly::monomial(2, 1), &Poly::monomial(3, 2)).len(), 4);
    }

    #[test]
    fn test_div_poly() {
        let gf = qr_code_field();

        // (x^2 + 1) / (x + 1) = x + 1, remainder 0
        let (q, r) = gf
            .div_poly(&Poly::from(vec![1, 0, 1]), &Poly::from(vec![1, 1]))
            .unwrap();
        assert_eq!(q, Poly::from(vec![1, 1]));
        assert_eq!(r, Poly::zero());

        // Dividend of lower degree is its own remainder
        let (q, r) = gf
            .div_poly(&Poly::from(vec![5]), &Poly::from(vec![1, 1]))
            .unwrap();
        assert_eq!(q, Poly::zero());
        assert_eq!(r, Poly::from(vec![5]));
    }

    #[test]
    fn test_div_poly_by_zero() {
        let gf = qr_code_field();
        assert_eq!(
            gf.div_poly(&Poly::one(), &Poly::from(vec![0, 0])),
            Err(GfError::DivideByZero)
        );
        assert_eq!(
            gf.div_poly(&Poly::one(), &Poly::zero()),
            Err(GfError::DivideByZero)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Poly::from(vec![3, 0, 1, 5]).to_string(), "5 x^3 + x^2 + 3 x^0");
        assert_eq!(Poly::one().to_string(), "x^0");
        assert_eq!(Poly::zero().to_string(), "");
    }
}
