//! This module contains [`Number`], an arbitrary-precision signed integer
//! whose operators behave like a 32-bit machine integer.
//!
//! Values are stored as a sign and an unbounded magnitude. Decimal parsing
//! and formatting keep the full magnitude, however long. Every arithmetic
//! and bitwise operator first computes its exact mathematical result and
//! then reduces it modulo 2^32 into the signed range `[-2^31, 2^31 - 1]`,
//! reproducing two's-complement overflow. Bitwise operators act on the
//! infinite-precision two's-complement view of the operands, so negative
//! values carry an implicit infinite run of sign bits.

mod error;
mod twos;

pub use error::{ArithmeticError, MalformedInteger};

use alloc::vec::Vec;
use core::{
    cmp::Ordering,
    fmt,
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor,
        BitXorAssign, Div, Mul, Neg, Not, Rem, Shl, ShlAssign, Shr,
        ShrAssign, Sub, SubAssign,
    },
    str::FromStr,
};

use num_traits::{One, Zero};

use crate::arithmetic::{limb::Limb, Magnitude};

/// Sign of a [`Number`].
///
/// The variant order gives the derived ordering numeric meaning:
/// `Negative < Zero < Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    /// Strictly below zero.
    Negative,
    /// Exactly zero. A value is `Zero` iff its magnitude is zero.
    Zero,
    /// Strictly above zero.
    Positive,
}

impl Sign {
    fn opposite(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }
}

/// Arbitrary-precision signed integer with machine-integer operator
/// semantics.
///
/// ```
/// use quadriga_values::Number;
///
/// // Parsing and printing keep the full magnitude.
/// let parsed: Number = "-4830879789038080759038".parse().unwrap();
/// assert_eq!(parsed.to_string(), "-4830879789038080759038");
///
/// // Operators wrap around like a 32-bit integer.
/// let wrapped = Number::from(2_002_407_556) * Number::from(-79_669_353);
/// assert_eq!(wrapped, -1_532_864_036);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Number {
    sign: Sign,
    magnitude: Magnitude,
}

impl Number {
    /// Zero.
    pub const ZERO: Self =
        Self { sign: Sign::Zero, magnitude: Magnitude::ZERO };

    fn new(sign: Sign, magnitude: Magnitude) -> Self {
        if magnitude.is_zero() {
            Self::ZERO
        } else {
            debug_assert!(sign != Sign::Zero);
            Self { sign, magnitude }
        }
    }

    fn from_i64(value: i64) -> Self {
        let sign = match value.cmp(&0) {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => return Self::ZERO,
            Ordering::Greater => Sign::Positive,
        };
        Self { sign, magnitude: Magnitude::from(value.unsigned_abs()) }
    }

    fn from_u64(value: u64) -> Self {
        if value == 0 {
            Self::ZERO
        } else {
            Self { sign: Sign::Positive, magnitude: Magnitude::from(value) }
        }
    }

    /// Returns the sign of `self`.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Checks `self` is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    /// Checks `self` is strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Returns the absolute value.
    ///
    /// A pure accessor: the full magnitude is kept, nothing is reduced.
    #[must_use]
    pub fn abs(&self) -> Self {
        let sign = if self.sign == Sign::Negative {
            Sign::Positive
        } else {
            self.sign
        };
        Self { sign, magnitude: self.magnitude.clone() }
    }

    /// Narrow to `i64`, or `None` when the stored value is out of range.
    ///
    /// Narrowing never wraps; oversized values parsed from text stay
    /// intact and simply refuse to narrow.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn to_i64(&self) -> Option<i64> {
        if self.magnitude.num_bits() > u64::BITS as usize {
            return None;
        }
        let low = self.magnitude.limbs().first().copied().unwrap_or(0);
        match self.sign {
            Sign::Negative => {
                (low <= 1 << 63).then(|| (low as i64).wrapping_neg())
            }
            _ => i64::try_from(low).ok(),
        }
    }

    /// Narrow to `i32`, or `None` when the stored value is out of range.
    #[must_use]
    pub fn to_i32(&self) -> Option<i32> {
        self.to_i64().and_then(|value| i32::try_from(value).ok())
    }

    /// Truncating division, or [`ArithmeticError::DivisionByZero`].
    ///
    /// The quotient rounds toward zero: `(a / b) * b + a % b == a`.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(div_rem_exact(self, rhs).0.reduced())
    }

    /// Remainder of truncating division, or
    /// [`ArithmeticError::DivisionByZero`].
    ///
    /// A nonzero remainder takes the dividend's sign.
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(div_rem_exact(self, rhs).1.reduced())
    }

    /// `self << rhs`, or [`ArithmeticError::InvalidShiftAmount`] when `rhs`
    /// is negative.
    pub fn checked_shl(&self, rhs: i32) -> Result<Self, ArithmeticError> {
        match u32::try_from(rhs) {
            Ok(amount) => Ok(self << amount),
            Err(_) => Err(ArithmeticError::InvalidShiftAmount),
        }
    }

    /// `self >> rhs`, or [`ArithmeticError::InvalidShiftAmount`] when `rhs`
    /// is negative.
    pub fn checked_shr(&self, rhs: i32) -> Result<Self, ArithmeticError> {
        match u32::try_from(rhs) {
            Ok(amount) => Ok(self >> amount),
            Err(_) => Err(ArithmeticError::InvalidShiftAmount),
        }
    }

    /// Step `self` up by one, returning the value held before the step.
    ///
    /// The postfix half of the increment pair; the prefix form is `n += 1`
    /// followed by reading `n`. Both wrap around at the 32-bit boundary.
    pub fn inc(&mut self) -> Self {
        let previous = self.clone();
        *self += 1;
        previous
    }

    /// Step `self` down by one, returning the value held before the step.
    pub fn dec(&mut self) -> Self {
        let previous = self.clone();
        *self -= 1;
        previous
    }

    /// Reduce an exact operator result modulo 2^32 and reinterpret it in
    /// the signed 32-bit range, the way a fixed-width machine integer
    /// overflows. Parsing and formatting never pass through here.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn reduced(self) -> Self {
        let low = self.magnitude.limbs().first().copied().unwrap_or(0) as u32;
        let low = match self.sign {
            Sign::Negative => low.wrapping_neg(),
            _ => low,
        };
        Self::from(low as i32)
    }

    fn negated(mut self) -> Self {
        self.sign = self.sign.opposite();
        self
    }
}

// ----------- From Impls -----------

macro_rules! impl_from_signed {
    ($($int:ty),* $(,)?) => {$(
        impl From<$int> for Number {
            fn from(value: $int) -> Self {
                Self::from_i64(i64::from(value))
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($int:ty),* $(,)?) => {$(
        impl From<$int> for Number {
            fn from(value: $int) -> Self {
                Self::from_u64(u64::from(value))
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

// ----------- Codec Impls -----------

impl FromStr for Number {
    type Err = MalformedInteger;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let (negative, digits) = match bytes.split_first() {
            Some((b'-', rest)) => (true, rest),
            _ => (false, bytes),
        };
        if digits.is_empty() {
            return Err(MalformedInteger::Empty);
        }

        let offset = bytes.len() - digits.len();
        let mut magnitude = Magnitude::ZERO;
        for (i, &byte) in digits.iter().enumerate() {
            if !byte.is_ascii_digit() {
                return Err(MalformedInteger::InvalidDigit {
                    position: offset + i,
                });
            }
            magnitude.mul_add_limb(10, Limb::from(byte - b'0'));
        }

        let sign = if magnitude.is_zero() {
            Sign::Zero
        } else if negative {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Ok(Self { sign, magnitude })
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        if self.sign == Sign::Negative {
            f.write_str("-")?;
        }

        // Peel 19-digit groups off the magnitude; only the most
        // significant group drops its leading zeros.
        const CHUNK: Limb = 10_000_000_000_000_000_000;
        let mut scratch = self.magnitude.clone();
        let mut chunks = Vec::new();
        while !scratch.is_zero() {
            chunks.push(scratch.div_rem_limb(CHUNK));
        }

        let mut chunks = chunks.into_iter().rev();
        if let Some(leading) = chunks.next() {
            write!(f, "{leading}")?;
        }
        for chunk in chunks {
            write!(f, "{chunk:019}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

// ----------- Comparison Impls -----------

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sign.cmp(&other.sign).then_with(|| match self.sign {
            Sign::Positive => self.magnitude.cmp(&other.magnitude),
            Sign::Negative => other.magnitude.cmp(&self.magnitude),
            Sign::Zero => Ordering::Equal,
        })
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<i32> for Number {
    fn eq(&self, other: &i32) -> bool {
        self.to_i32() == Some(*other)
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        self.to_i64() == Some(*other)
    }
}

// ----------- Engine Core -----------

/// Signed addition at full precision: equal signs add magnitudes, opposite
/// signs subtract the smaller magnitude from the larger, which also
/// decides the sign. An exact zero collapses to the canonical zero.
fn add_exact(a: &Number, b: &Number) -> Number {
    match (a.sign, b.sign) {
        (Sign::Zero, _) => b.clone(),
        (_, Sign::Zero) => a.clone(),
        (x, y) if x == y => {
            Number { sign: x, magnitude: a.magnitude.add(&b.magnitude) }
        }
        _ => match a.magnitude.cmp(&b.magnitude) {
            Ordering::Equal => Number::ZERO,
            Ordering::Greater => Number {
                sign: a.sign,
                magnitude: a.magnitude.sub_smaller(&b.magnitude),
            },
            Ordering::Less => Number {
                sign: b.sign,
                magnitude: b.magnitude.sub_smaller(&a.magnitude),
            },
        },
    }
}

fn combine_signs(a: Sign, b: Sign) -> Sign {
    match (a, b) {
        (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
        (x, y) if x == y => Sign::Positive,
        _ => Sign::Negative,
    }
}

/// Truncating division at full precision: the magnitude quotient rounds
/// toward zero by construction, and the remainder keeps the dividend's
/// sign. The caller guarantees a nonzero divisor.
fn div_rem_exact(a: &Number, b: &Number) -> (Number, Number) {
    debug_assert!(!b.is_zero());

    let (quotient, remainder) = a.magnitude.div_rem(&b.magnitude);
    let quotient = Number::new(combine_signs(a.sign, b.sign), quotient);
    let remainder = Number::new(a.sign, remainder);
    (quotient, remainder)
}

fn add_reduced(a: &Number, b: &Number) -> Number {
    add_exact(a, b).reduced()
}

/// Subtraction is addition of the negated right operand.
fn sub_reduced(a: &Number, b: &Number) -> Number {
    add_exact(a, &b.clone().negated()).reduced()
}

fn mul_reduced(a: &Number, b: &Number) -> Number {
    Number::new(combine_signs(a.sign, b.sign), a.magnitude.mul(&b.magnitude))
        .reduced()
}

fn div_reduced(a: &Number, b: &Number) -> Number {
    assert!(!b.is_zero(), "attempt to divide by zero");
    div_rem_exact(a, b).0.reduced()
}

fn rem_reduced(a: &Number, b: &Number) -> Number {
    assert!(
        !b.is_zero(),
        "attempt to calculate the remainder with a divisor of zero"
    );
    div_rem_exact(a, b).1.reduced()
}

/// Bitwise combination over the infinite-precision two's-complement view:
/// materialize one sign-extension limb past the wider operand, combine
/// limb-wise, reinterpret the finite pattern as a signed value.
fn combine(a: &Number, b: &Number, op: impl Fn(Limb, Limb) -> Limb) -> Number {
    let width = a.magnitude.limbs().len().max(b.magnitude.limbs().len()) + 1;
    let lhs = twos::materialize(a, width);
    let rhs = twos::materialize(b, width);
    let limbs = lhs.into_iter().zip(rhs).map(|(x, y)| op(x, y)).collect();
    twos::reinterpret(limbs).reduced()
}

fn bitand_reduced(a: &Number, b: &Number) -> Number {
    combine(a, b, |x, y| x & y)
}

fn bitor_reduced(a: &Number, b: &Number) -> Number {
    combine(a, b, |x, y| x | y)
}

fn bitxor_reduced(a: &Number, b: &Number) -> Number {
    combine(a, b, |x, y| x ^ y)
}

fn shl_exact(value: &Number, amount: u32) -> Number {
    Number::new(value.sign, value.magnitude.shl_bits(amount))
}

/// Arithmetic right shift: `floor(value / 2^amount)`. Negative values
/// round toward negative infinity, so any dropped set bit bumps the
/// magnitude by one.
fn shr_exact(value: &Number, amount: u32) -> Number {
    let (shifted, dropped) = value.magnitude.shr_bits(amount);
    let magnitude = if value.sign == Sign::Negative && dropped {
        shifted.add(&Magnitude::from(1u64))
    } else {
        shifted
    };
    Number::new(value.sign, magnitude)
}

// ----------- Operator Impls -----------

/// Implement a binary operator for every owned and borrowed operand
/// combination in terms of a by-reference engine function.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $func:ident) => {
        impl $imp<&Number> for &Number {
            type Output = Number;

            fn $method(self, rhs: &Number) -> Number {
                $func(self, rhs)
            }
        }

        impl $imp<Number> for &Number {
            type Output = Number;

            fn $method(self, rhs: Number) -> Number {
                $func(self, &rhs)
            }
        }

        impl $imp<&Number> for Number {
            type Output = Number;

            fn $method(self, rhs: &Number) -> Number {
                $func(&self, rhs)
            }
        }

        impl $imp<Number> for Number {
            type Output = Number;

            fn $method(self, rhs: Number) -> Number {
                $func(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, add_reduced);
forward_binop!(Sub, sub, sub_reduced);
forward_binop!(Mul, mul, mul_reduced);
forward_binop!(Div, div, div_reduced);
forward_binop!(Rem, rem, rem_reduced);
forward_binop!(BitAnd, bitand, bitand_reduced);
forward_binop!(BitOr, bitor, bitor_reduced);
forward_binop!(BitXor, bitxor, bitxor_reduced);

macro_rules! forward_binop_assign {
    ($imp:ident, $method:ident, $func:ident) => {
        impl $imp<&Number> for Number {
            fn $method(&mut self, rhs: &Number) {
                *self = $func(&*self, rhs);
            }
        }

        impl $imp<Number> for Number {
            fn $method(&mut self, rhs: Number) {
                *self = $func(&*self, &rhs);
            }
        }
    };
}

forward_binop_assign!(AddAssign, add_assign, add_reduced);
forward_binop_assign!(SubAssign, sub_assign, sub_reduced);
forward_binop_assign!(BitAndAssign, bitand_assign, bitand_reduced);
forward_binop_assign!(BitOrAssign, bitor_assign, bitor_reduced);
forward_binop_assign!(BitXorAssign, bitxor_assign, bitxor_reduced);

impl AddAssign<i32> for Number {
    fn add_assign(&mut self, rhs: i32) {
        *self += Number::from(rhs);
    }
}

impl SubAssign<i32> for Number {
    fn sub_assign(&mut self, rhs: i32) {
        *self -= Number::from(rhs);
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        self.clone().negated().reduced()
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        self.negated().reduced()
    }
}

impl Not for &Number {
    type Output = Number;

    fn not(self) -> Number {
        // `!x == -(x + 1)` under the infinite two's-complement view;
        // computed through the arithmetic path rather than bit by bit.
        add_exact(self, &Number::from(1)).negated().reduced()
    }
}

impl Not for Number {
    type Output = Number;

    fn not(self) -> Number {
        !&self
    }
}

macro_rules! forward_shift {
    ($imp:ident, $method:ident, $func:ident) => {
        impl $imp<u32> for &Number {
            type Output = Number;

            fn $method(self, rhs: u32) -> Number {
                $func(self, rhs).reduced()
            }
        }

        impl $imp<u32> for Number {
            type Output = Number;

            fn $method(self, rhs: u32) -> Number {
                $func(&self, rhs).reduced()
            }
        }
    };
}

forward_shift!(Shl, shl, shl_exact);
forward_shift!(Shr, shr, shr_exact);

impl ShlAssign<u32> for Number {
    fn shl_assign(&mut self, rhs: u32) {
        *self = &*self << rhs;
    }
}

impl ShrAssign<u32> for Number {
    fn shr_assign(&mut self, rhs: u32) {
        *self = &*self >> rhs;
    }
}

// ----------- Numeric Trait Impls -----------

impl Zero for Number {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Number::is_zero(self)
    }
}

impl One for Number {
    fn one() -> Self {
        Self::from(1)
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn number(text: &str) -> Number {
        text.parse().expect("valid decimal literal")
    }

    #[test]
    fn parses_and_formats_beyond_machine_width() {
        let value = number("-4830879789038080759038");
        assert_eq!(value.to_string(), "-4830879789038080759038");
        assert_eq!(value.to_i64(), None);
        assert_eq!(value.to_i32(), None);
    }

    #[test]
    fn converts_to_machine_integers() {
        let value = Number::from(608_227_025);
        assert_eq!(value.to_i32(), Some(608_227_025));
        assert_eq!(value.to_i64(), Some(608_227_025));
        assert_eq!(Number::from(i64::MIN).to_i64(), Some(i64::MIN));
        assert_eq!(Number::from(-5).abs(), 5);
    }

    #[test]
    fn zero_normalizes() {
        assert_eq!(number("-0"), Number::ZERO);
        assert_eq!(number("-0").to_string(), "0");
        assert_eq!(number("000042").to_string(), "42");
        assert_eq!(number("17").sign(), Sign::Positive);
        assert_eq!(number("-17").sign(), Sign::Negative);
        assert_eq!(number("0").sign(), Sign::Zero);
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!("".parse::<Number>(), Err(MalformedInteger::Empty));
        assert_eq!("-".parse::<Number>(), Err(MalformedInteger::Empty));
        assert_eq!(
            "+7".parse::<Number>(),
            Err(MalformedInteger::InvalidDigit { position: 0 })
        );
        assert_eq!(
            "12a4".parse::<Number>(),
            Err(MalformedInteger::InvalidDigit { position: 2 })
        );
        assert_eq!(
            " 5".parse::<Number>(),
            Err(MalformedInteger::InvalidDigit { position: 0 })
        );
        assert_eq!(
            "5 ".parse::<Number>(),
            Err(MalformedInteger::InvalidDigit { position: 1 })
        );
        assert_eq!(
            "--5".parse::<Number>(),
            Err(MalformedInteger::InvalidDigit { position: 1 })
        );
    }

    #[test]
    fn bitwise_not() {
        assert_eq!(!Number::from(-224_415_575), 224_415_574);
    }

    #[test]
    fn bitwise_and() {
        assert_eq!(
            Number::from(-1_888_848_548) & Number::from(-966_705_981),
            -2_040_515_520
        );
    }

    #[test]
    fn bitwise_or() {
        assert_eq!(
            Number::from(920_211_449) | Number::from(-1_001_774_907),
            -153_391_107
        );
    }

    #[test]
    fn bitwise_xor() {
        assert_eq!(
            Number::from(-1_414_427_748) ^ Number::from(-9_392_399),
            1_421_944_173
        );
    }

    #[test]
    fn left_shift_wraps_to_machine_width() {
        assert_eq!(Number::from(589_740_463) << 14, -1_368_670_208);
    }

    #[test]
    fn right_shift_floors_toward_negative_infinity() {
        assert_eq!(Number::from(-1_079_746_645) >> 23, -129);
        // Truncating division of the same operands stops at -128.
        assert_eq!(
            Number::from(-1_079_746_645) / Number::from(1 << 23),
            -128
        );
    }

    #[test]
    fn unary_minus() {
        assert_eq!(-Number::from(191_857_105), -191_857_105);
    }

    #[test]
    fn addition() {
        assert_eq!(
            Number::from(648_822_301) + Number::from(-802_766_913),
            -153_944_612
        );
    }

    #[test]
    fn subtraction() {
        assert_eq!(
            Number::from(919_082_178) - Number::from(-344_950_119),
            1_264_032_297
        );
    }

    #[test]
    fn multiplication_wraps() {
        assert_eq!(
            Number::from(2_002_407_556) * Number::from(-79_669_353),
            -1_532_864_036
        );
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(
            Number::from(-1_756_328_454) / Number::from(74_773),
            -23_488
        );
    }

    #[test]
    fn modulo_takes_dividend_sign() {
        assert_eq!(Number::from(1_653_088_120) % Number::from(135_216), 72_520);
        assert_eq!(
            Number::from(-1_653_088_120) % Number::from(135_216),
            -72_520
        );
    }

    #[test]
    fn increment_and_decrement() {
        let mut value = Number::from(-1_535_018_095);
        assert_eq!(value.inc(), -1_535_018_095);
        value += 1;
        assert_eq!(value, -1_535_018_093);

        let mut value = Number::from(746_676_346);
        assert_eq!(value.dec(), 746_676_346);
        value -= 1;
        assert_eq!(value, 746_676_344);
    }

    #[test]
    fn wraparound_at_the_boundary() {
        assert_eq!(Number::from(i32::MAX) + Number::from(1), i32::MIN);
        assert_eq!(Number::from(i32::MIN) - Number::from(1), i32::MAX);
        assert_eq!(-Number::from(i32::MIN), i32::MIN);

        let mut value = Number::from(i32::MAX);
        value.inc();
        assert_eq!(value, i32::MIN);
    }

    #[test]
    fn oversized_operands_reduce_like_machine_integers() {
        let value = number("4294967301"); // 2^32 + 5
        assert_eq!(value.clone() * Number::from(1), 5);
        assert_eq!(value + Number::from(1), 6);
    }

    #[test]
    fn checked_division_errors() {
        assert_eq!(
            Number::from(5).checked_div(&Number::ZERO),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(
            Number::from(5).checked_rem(&Number::ZERO),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(
            Number::from(5).checked_div(&Number::from(2)),
            Ok(Number::from(2))
        );
    }

    #[test]
    fn checked_shifts_reject_negative_amounts() {
        assert_eq!(
            Number::from(5).checked_shl(-1),
            Err(ArithmeticError::InvalidShiftAmount)
        );
        assert_eq!(
            Number::from(5).checked_shr(-7),
            Err(ArithmeticError::InvalidShiftAmount)
        );
        assert_eq!(Number::from(5).checked_shl(2), Ok(Number::from(20)));
        assert_eq!(Number::from(-20).checked_shr(2), Ok(Number::from(-5)));
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn operator_division_by_zero_panics() {
        let _ = Number::from(1) / Number::ZERO;
    }

    #[test]
    fn ordering_spans_signs_and_widths() {
        let mut values = vec![
            number("4830879789038080759038"),
            Number::from(-5),
            Number::ZERO,
            number("-4830879789038080759038"),
            Number::from(3),
        ];
        values.sort();
        assert_eq!(values[0].to_string(), "-4830879789038080759038");
        assert_eq!(values[1], -5);
        assert_eq!(values[2], 0);
        assert_eq!(values[3], 3);
        assert_eq!(values[4].to_string(), "4830879789038080759038");
    }

    #[test]
    fn complement_is_negate_plus_one() {
        for text in
            ["0", "7", "-7", "2147483647", "-2147483648", "4830879789038080759038"]
        {
            let x = number(text);
            assert_eq!(!&x, -(&x + Number::from(1)));
        }
    }

    #[test]
    fn round_trips_canonical_decimal_text() {
        proptest!(|(text in "0|-?[1-9][0-9]{0,37}")| {
            prop_assert_eq!(number(&text).to_string(), text);
        });
    }

    #[test]
    fn matches_wrapping_machine_arithmetic() {
        proptest!(|(a: i32, b: i32)| {
            let (x, y) = (Number::from(a), Number::from(b));
            prop_assert_eq!(&x + &y, a.wrapping_add(b));
            prop_assert_eq!(&x - &y, a.wrapping_sub(b));
            prop_assert_eq!(&x * &y, a.wrapping_mul(b));
            prop_assert_eq!(&x & &y, a & b);
            prop_assert_eq!(&x | &y, a | b);
            prop_assert_eq!(&x ^ &y, a ^ b);
            prop_assert_eq!(!&x, !a);
            prop_assert_eq!(-&x, a.wrapping_neg());
        });
    }

    #[test]
    fn division_matches_machine_semantics() {
        proptest!(|(a: i32, b in prop::num::i32::ANY.prop_filter("nonzero", |b| *b != 0))| {
            let (x, y) = (Number::from(a), Number::from(b));
            prop_assert_eq!(&x / &y, a.wrapping_div(b));
            prop_assert_eq!(&x % &y, a.wrapping_rem(b));

            // divisor * quotient + remainder restores the dividend.
            prop_assert_eq!(&y * (&x / &y) + &x % &y, a);

            let remainder = &x % &y;
            if !remainder.is_zero() {
                prop_assert_eq!(remainder.sign(), x.sign());
            }
        });
    }

    #[test]
    fn shifts_match_machine_semantics() {
        proptest!(|(a: i32, n in 0u32..32)| {
            let x = Number::from(a);
            prop_assert_eq!(&x << n, a.wrapping_shl(n));
            prop_assert_eq!(&x >> n, a >> n);
        });
    }

    #[test]
    fn de_morgan_holds() {
        proptest!(|(a: i32, b: i32)| {
            let (x, y) = (Number::from(a), Number::from(b));
            prop_assert_eq!(!(&x & &y), !&x | !&y);
            prop_assert_eq!(!(&x | &y), !&x & !&y);
        });
    }

    #[test]
    fn comparison_is_a_total_order() {
        proptest!(|(a: i64, b: i64)| {
            prop_assert_eq!(Number::from(a).cmp(&Number::from(b)), a.cmp(&b));
            prop_assert_eq!(
                Number::from(a).cmp(&Number::from(a)),
                core::cmp::Ordering::Equal
            );
        });
    }
}
