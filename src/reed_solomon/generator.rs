//! Generator polynomials and the reference check-byte computation
//!
//! [`GaloisField::ec_bytes`] computes check bytes by explicit polynomial
//! division. It rebuilds the generator on every call and is meant as the
//! executable reference for [`ReedSolomon`](super::ReedSolomon), not as the
//! fast path.

use crate::error::GfResult;
use crate::galois::GaloisField;
use crate::poly::Poly;

impl GaloisField {
    /// Reed-Solomon generator of degree `e`: the product of `(x + 2^i)` for `i` in `0..e`
    pub fn generator(&self, e: usize) -> Poly {
        (0..e).fold(Poly::one(), |p, i| {
            self.mul_poly(&p, &Poly::from(vec![self.exp(i as i32), 1]))
        })
    }

    /// Compute `check.len()` check bytes for `data` by polynomial division.
    ///
    /// `data` and `check` are in transmission order (highest degree first).
    pub fn ec_bytes(&self, data: &[u8], check: &mut [u8]) -> GfResult<()> {
        if check.is_empty() {
            return Ok(());
        }

        let p = Poly::from(data.iter().rev().copied().collect::<Vec<u8>>()).normalize();
        let p = self.mul_poly(&p, &Poly::monomial(1, check.len()));

        let (_, r) = self.div_poly(&p, &self.generator(check.len()))?;

        // A short remainder means leading zero check bytes
        check.fill(0);
        for (dst, &v) in check.iter_mut().rev().zip(r.coefficients()) {
            *dst = v;
        }
        Ok(())
    }
}
