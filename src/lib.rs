//! GF(256) arithmetic and Reed-Solomon check-byte encoding.
//!
//! Build a field from an 8-bit primitive polynomial, then compute check
//! bytes either with the reference division
//! ([`GaloisField::ec_bytes`]) or with a reusable [`ReedSolomon`] encoder.
//!
//! # Example
//!
//! ```
//! use gf256::{GaloisField, ReedSolomon, QR_CODE_POLYNOMIAL};
//!
//! let field = GaloisField::new(QR_CODE_POLYNOMIAL).unwrap();
//! let mut rs = ReedSolomon::new(&field, 10).unwrap();
//!
//! let data = [0x10, 0x20, 0x0c, 0x56, 0x61, 0x80, 0xec, 0x11,
//!             0xec, 0x11, 0xec, 0x11, 0xec, 0x11, 0xec, 0x11];
//! let mut check = [0u8; 10];
//! rs.encode(&data, &mut check).unwrap();
//! assert_eq!(check, [0xa5, 0x24, 0xd4, 0xc1, 0xed, 0x36, 0xc7, 0x87, 0x2c, 0x55]);
//! ```

pub mod error;
pub mod galois;
pub mod poly;
pub mod reed_solomon;

pub use error::{GfError, GfResult};
pub use galois::{
    data_matrix_field, qr_code_field, GaloisField, DATA_MATRIX_POLYNOMIAL, QR_CODE_POLYNOMIAL,
};
pub use poly::Poly;
pub use reed_solomon::{ReedSolomon, ReedSolomonBuilder};
