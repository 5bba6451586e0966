//! Galois Field GF(2^8) arithmetic for Reed-Solomon check bytes
//!
//! A field is defined by a degree-8 primitive polynomial over GF(2), written
//! as an integer with bit 8 set (0x11D is x⁸ + x⁴ + x³ + x² + 1). Elements are
//! bytes, addition is XOR and multiplication goes through log/antilog tables
//! built once from the generator 2.
//!
//! Fields are plain immutable values, so several fields with different
//! polynomials can coexist and be shared freely between threads.

use crate::error::{GfError, GfResult};
use log::debug;
use std::fmt;
use std::sync::OnceLock;

/// QR Code polynomial: 0x11D (x⁸ + x⁴ + x³ + x² + 1)
pub const QR_CODE_POLYNOMIAL: u32 = 0x11D;

/// Data Matrix (ECC 200) polynomial: 0x12D (x⁸ + x⁵ + x³ + x² + 1)
pub const DATA_MATRIX_POLYNOMIAL: u32 = 0x12D;

/// Order of the multiplicative group
const LIMIT: usize = 255;

/// GF(256) with precomputed logarithm and exponential tables
#[derive(Clone)]
pub struct GaloisField {
    poly: u32,
    log: [u8; 256], // log[0] is unused
    exp: [u8; 2 * LIMIT], // 2x size to avoid modulo in calculations
}

impl GaloisField {
    /// Build the field defined by `poly`.
    ///
    /// Fails with [`GfError::InvalidPolynomial`] unless `poly` is in
    /// `0x100..0x200`, and with [`GfError::ReduciblePolynomial`] when 2 does
    /// not generate all 255 nonzero elements.
    pub fn new(poly: u32) -> GfResult<Self> {
        if !(0x100..0x200).contains(&poly) {
            debug!("rejecting field polynomial {:#x}: out of range", poly);
            return Err(GfError::InvalidPolynomial(poly));
        }

        let mut gf = GaloisField {
            poly,
            log: [0; 256],
            exp: [0; 2 * LIMIT],
        };

        let mut x = 1u32;
        for i in 0..LIMIT {
            // Returning to 1 early means the cycle is shorter than 255
            if x == 1 && i != 0 {
                debug!("rejecting field polynomial {:#x}: cycle length {}", poly, i);
                return Err(GfError::ReduciblePolynomial(poly));
            }
            gf.exp[i] = x as u8;
            gf.exp[i + LIMIT] = x as u8;
            gf.log[x as usize] = i as u8;

            x <<= 1;
            if x >= 0x100 {
                x ^= poly;
            }
        }

        // Polynomials divisible by x never return to 1 at all
        if x != 1 {
            debug!("rejecting field polynomial {:#x}: no cycle through 1", poly);
            return Err(GfError::ReduciblePolynomial(poly));
        }

        debug!("built GF(256) tables for polynomial {:#x}", poly);
        Ok(gf)
    }

    /// The polynomial this field was built from
    pub fn polynomial(&self) -> u32 {
        self.poly
    }

    /// Add two elements - this is just XOR
    #[inline]
    pub fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Subtract two elements - same as addition (XOR)
    #[inline]
    pub fn sub(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Multiply two elements
    #[inline]
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }

        let log_a = self.log[a as usize] as usize;
        let log_b = self.log[b as usize] as usize;
        self.exp[log_a + log_b]
    }

    /// Divide `a` by `b`. Returns 0 when `b` is 0, like [`inverse`](Self::inverse).
    #[inline]
    pub fn div(&self, a: u8, b: u8) -> u8 {
        self.mul(a, self.inverse(b))
    }

    /// Multiplicative inverse of `a`, or 0 if `a` is 0
    #[inline]
    pub fn inverse(&self, a: u8) -> u8 {
        if a == 0 {
            return 0;
        }
        self.exp[LIMIT - self.log[a as usize] as usize]
    }

    /// Multiplicative inverse of `a`, or `None` if `a` is 0
    pub fn checked_inverse(&self, a: u8) -> Option<u8> {
        (a != 0).then(|| self.inverse(a))
    }

    /// Base 2 exponential of `e`. Returns 0 if `e < 0`.
    #[inline]
    pub fn exp(&self, e: i32) -> u8 {
        if e < 0 {
            return 0;
        }
        self.exp[e as usize % LIMIT]
    }

    /// Base 2 logarithm of `a`. Returns -1 if `a` is 0.
    #[inline]
    pub fn log(&self, a: u8) -> i32 {
        if a == 0 {
            return -1;
        }
        self.log[a as usize] as i32
    }

    /// Base 2 logarithm of `a`, or `None` if `a` is 0
    pub fn checked_log(&self, a: u8) -> Option<u8> {
        (a != 0).then(|| self.log[a as usize])
    }

    /// Raw logarithm table; entry 0 is meaningless
    #[inline]
    pub(crate) fn log_table(&self) -> &[u8; 256] {
        &self.log
    }

    /// Raw doubled exponential table (510 entries)
    #[inline]
    pub(crate) fn exp_table(&self) -> &[u8; 2 * LIMIT] {
        &self.exp
    }
}

impl fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaloisField")
            .field("poly", &format_args!("{:#x}", self.poly))
            .finish_non_exhaustive()
    }
}

impl PartialEq for GaloisField {
    fn eq(&self, other: &Self) -> bool {
        self.poly == other.poly
    }
}

impl Eq for GaloisField {}

static QR_CODE_FIELD: OnceLock<GaloisField> = OnceLock::new();
static DATA_MATRIX_FIELD: OnceLock<GaloisField> = OnceLock::new();

/// Shared field for QR Code error correction (0x11D)
pub fn qr_code_field() -> &'static GaloisField {
    QR_CODE_FIELD.get_or_init(|| well_known(QR_CODE_POLYNOMIAL))
}

/// Shared field for Data Matrix error correction (0x12D)
pub fn data_matrix_field() -> &'static GaloisField {
    DATA_MATRIX_FIELD.get_or_init(|| well_known(DATA_MATRIX_POLYNOMIAL))
}

fn well_known(poly: u32) -> GaloisField {
    match GaloisField::new(poly) {
        Ok(field) => field,
        Err(e) => unreachable!("standard polynomial {:#x} rejected: {}", poly, e),
    }
}
