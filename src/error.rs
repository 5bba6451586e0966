//! Error types for GF(256) and Reed-Solomon operations

use thiserror::Error;

/// Errors that can occur while building fields or computing check bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GfError {
    /// Field polynomial is not an 8-bit polynomial with bit 8 set
    #[error("invalid field polynomial {0:#x}: must be in 0x100..0x200")]
    InvalidPolynomial(u32),

    /// Field polynomial does not generate the full multiplicative group
    #[error("reducible field polynomial {0:#x}: 2 does not generate GF(256)")]
    ReduciblePolynomial(u32),

    /// Polynomial division by a divisor that normalizes to zero
    #[error("polynomial division by zero")]
    DivideByZero,

    /// Check buffer length differs from the encoder's check-byte count
    #[error("check buffer holds {actual} bytes, encoder produces {expected}")]
    MismatchedCheckLength { expected: usize, actual: usize },

    /// Generator polynomial has a zero coefficient, which has no logarithm
    #[error("generator polynomial coefficient {index} is zero")]
    ZeroGeneratorCoefficient { index: usize },
}

/// Result type for GF(256) operations
pub type GfResult<T> = Result<T, GfError>;
