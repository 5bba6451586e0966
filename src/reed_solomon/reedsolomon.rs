//! Reed-Solomon check-byte encoder
//!
//! ## Overview
//!
//! [`ReedSolomon`] computes the same check bytes as
//! [`GaloisField::ec_bytes`], i.e. the remainder of `data · x^c` divided by
//! the degree-`c` generator, but without building any polynomials per call.
//!
//! ## Implementation Notes
//!
//! The generator is converted to log form once, highest degree first. Each
//! call copies the data into a scratch buffer followed by `c` zero bytes and
//! walks it front to back: a nonzero lead byte `p[i]` is cancelled by XORing
//! `m · gen` into `p[i..]`, where `m = p[i] / gen[0]`. After the last data
//! byte only the remainder is left in the trailing `c` bytes.
//!
//! The scratch buffer is kept between calls and only ever grows, so `encode`
//! takes `&mut self`. Use one encoder per thread.

use crate::error::{GfError, GfResult};
use crate::galois::GaloisField;
use log::debug;

/// Reed-Solomon encoder for a fixed field and check-byte count
#[derive(Debug, Clone)]
pub struct ReedSolomon<'f> {
    field: &'f GaloisField,
    check_bytes: usize,
    /// log of each generator coefficient, highest degree first
    lgen: Vec<u8>,
    /// reusable work buffer
    scratch: Vec<u8>,
}

impl<'f> ReedSolomon<'f> {
    /// Create an encoder producing `check_bytes` check bytes per block
    pub fn new(field: &'f GaloisField, check_bytes: usize) -> GfResult<Self> {
        let generator = field.generator(check_bytes);
        debug!(
            "ReedSolomon::new: poly={:#x} check_bytes={} generator={}",
            field.polynomial(),
            check_bytes,
            generator
        );

        let lgen = generator
            .coefficients()
            .iter()
            .rev()
            .enumerate()
            .map(|(index, &g)| {
                field
                    .checked_log(g)
                    .ok_or(GfError::ZeroGeneratorCoefficient { index })
            })
            .collect::<GfResult<Vec<u8>>>()?;

        Ok(Self {
            field,
            check_bytes,
            lgen,
            scratch: Vec::new(),
        })
    }

    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    /// Number of check bytes produced per call
    pub fn check_bytes(&self) -> usize {
        self.check_bytes
    }

    /// Compute check bytes for `data` into `check`.
    ///
    /// `check` must be exactly [`check_bytes`](Self::check_bytes) long.
    /// Neither buffer is touched on error.
    pub fn encode(&mut self, data: &[u8], check: &mut [u8]) -> GfResult<()> {
        if check.len() != self.check_bytes {
            return Err(GfError::MismatchedCheckLength {
                expected: self.check_bytes,
                actual: check.len(),
            });
        }
        if check.is_empty() {
            return Ok(());
        }

        let n = data.len() + check.len();
        if self.scratch.len() < n {
            self.scratch.resize(n, 0);
        }
        let p = &mut self.scratch[..n];
        p[..data.len()].copy_from_slice(data);
        p[data.len()..].fill(0);

        let log = self.field.log_table();
        let exp = self.field.exp_table();
        let linv = 255 - self.lgen[0] as usize;

        for i in 0..data.len() {
            let lead = p[i];
            if lead == 0 {
                continue;
            }

            // m = p[i] / gen[0]
            let mut lm = log[lead as usize] as usize + linv;
            if lm >= 255 {
                lm -= 255;
            }
            let exp = &exp[lm..];
            for (q, &lg) in p[i..].iter_mut().zip(&self.lgen) {
                *q ^= exp[lg as usize];
            }
        }

        check.copy_from_slice(&p[data.len()..]);
        Ok(())
    }

    /// Compute check bytes for `data` into a new vector
    pub fn encode_to_vec(&mut self, data: &[u8]) -> GfResult<Vec<u8>> {
        let mut check = vec![0u8; self.check_bytes];
        self.encode(data, &mut check)?;
        Ok(check)
    }
}
