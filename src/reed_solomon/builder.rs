//! Type-state builder for [`ReedSolomon`] encoders
//!
//! `build` only exists once a field has been supplied, so a missing field is
//! a compile error rather than a runtime one:
//!
//! ```
//! use gf256::galois::qr_code_field;
//! use gf256::reed_solomon::ReedSolomonBuilder;
//!
//! let mut rs = ReedSolomonBuilder::new()
//!     .with_field(qr_code_field())
//!     .with_check_bytes(10)
//!     .build()
//!     .unwrap();
//! assert_eq!(rs.encode_to_vec(b"hello").unwrap().len(), 10);
//! ```

use super::reedsolomon::ReedSolomon;
use crate::error::GfResult;
use crate::galois::GaloisField;

/// Builder state: no field chosen yet
pub struct NoField;

/// Builder state: field chosen, ready to build
pub struct WithField<'f>(&'f GaloisField);

/// Reed-Solomon encoder builder
pub struct ReedSolomonBuilder<State = NoField> {
    state: State,
    check_bytes: usize,
}

impl Default for ReedSolomonBuilder<NoField> {
    fn default() -> Self {
        Self::new()
    }
}

impl ReedSolomonBuilder<NoField> {
    pub fn new() -> Self {
        Self {
            state: NoField,
            check_bytes: 0,
        }
    }

    /// Choose the field the encoder works over
    pub fn with_field(self, field: &GaloisField) -> ReedSolomonBuilder<WithField<'_>> {
        ReedSolomonBuilder {
            state: WithField(field),
            check_bytes: self.check_bytes,
        }
    }
}

impl<State> ReedSolomonBuilder<State> {
    /// Number of check bytes per block (default 0)
    pub fn with_check_bytes(mut self, check_bytes: usize) -> Self {
        self.check_bytes = check_bytes;
        self
    }
}

impl<'f> ReedSolomonBuilder<WithField<'f>> {
    pub fn build(self) -> GfResult<ReedSolomon<'f>> {
        ReedSolomon::new(self.state.0, self.check_bytes)
    }
}
