//! Error types surfaced by [`Number`](crate::Number) parsing and
//! arithmetic.
//!
//! All failures here are deterministic value-level errors scoped to the
//! single call that raised them. Overflow is never an error: fixed-width
//! wraparound is part of the operator contract.

use core::fmt;

/// Decimal text that does not satisfy the grammar `['-'] digit+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedInteger {
    /// The input held no digits, with or without a leading sign.
    Empty,
    /// A byte that is not an ASCII decimal digit.
    InvalidDigit {
        /// Byte offset of the offending character.
        position: usize,
    },
}

impl fmt::Display for MalformedInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("no digits to parse"),
            Self::InvalidDigit { position } => {
                write!(f, "invalid decimal digit at byte {position}")
            }
        }
    }
}

impl core::error::Error for MalformedInteger {}

/// A value-level arithmetic failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Division or remainder with a zero divisor.
    DivisionByZero,
    /// A shift by a negative amount.
    InvalidShiftAmount,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => f.write_str("division by zero"),
            Self::InvalidShiftAmount => f.write_str("shift amount is negative"),
        }
    }
}

impl core::error::Error for ArithmeticError {}
