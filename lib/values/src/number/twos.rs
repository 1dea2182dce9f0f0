//! Materialization of the infinite-precision two's-complement view used by
//! the bitwise operators.
//!
//! Sign-magnitude storage keeps parsing, printing and comparison simple, so
//! the two's-complement bit pattern of a value only ever exists transiently:
//! it is materialized wide enough for one bitwise combination and converted
//! straight back to sign and magnitude.

use alloc::vec::Vec;

use super::{Number, Sign};
use crate::arithmetic::{
    limb::{adc, Limb},
    Magnitude,
};

/// Complement every limb and add one, in place. Encodes and decodes the
/// negative half of the two's-complement range over a fixed limb width.
fn negate_in_place(limbs: &mut [Limb]) {
    let mut carry = 1;
    for limb in limbs {
        (*limb, carry) = adc(!*limb, 0, carry);
    }
}

/// Materialize `value` as `width` two's-complement limbs.
///
/// `width` must exceed the operand's own limb count so the top limb holds
/// pure sign fill: all zeros for non-negative values, all ones for negative
/// ones. That spare limb is what lets a finite slice stand in for the
/// infinite sign extension.
pub(super) fn materialize(value: &Number, width: usize) -> Vec<Limb> {
    debug_assert!(width > value.magnitude.limbs().len());

    let mut limbs = Vec::with_capacity(width);
    limbs.extend_from_slice(value.magnitude.limbs());
    limbs.resize(width, 0);
    if value.sign == Sign::Negative {
        negate_in_place(&mut limbs);
    }
    limbs
}

/// Reinterpret a finite two's-complement pattern as a signed value.
///
/// The top materialized bit decides the sign; the magnitude of a negative
/// pattern is recovered by complement-and-add-one.
pub(super) fn reinterpret(mut limbs: Vec<Limb>) -> Number {
    let negative =
        limbs.last().is_some_and(|&limb| limb >> (Limb::BITS - 1) == 1);
    if negative {
        negate_in_place(&mut limbs);
    }

    let magnitude = Magnitude::from_limbs(limbs);
    let sign = if magnitude.is_zero() {
        Sign::Zero
    } else if negative {
        Sign::Negative
    } else {
        Sign::Positive
    };
    Number { sign, magnitude }
}
