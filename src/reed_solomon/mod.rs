//! Reed-Solomon check-byte encoding over GF(256)
//!
//! Two code paths compute the same bytes:
//! - [`GaloisField::ec_bytes`](crate::galois::GaloisField::ec_bytes) divides
//!   polynomials explicitly on every call (reference)
//! - [`ReedSolomon::encode`] precomputes the generator once and runs a
//!   single pass over a reusable buffer

pub mod builder;
pub mod generator;
pub mod reedsolomon;

pub use builder::*;
pub use reedsolomon::*;
