//! This module contains [`Magnitude`], the unbounded non-negative integer
//! that stores the digits of a [`Number`](crate::Number).

use alloc::{vec, vec::Vec};
use core::cmp::Ordering;

use crate::{
    arithmetic::limb::{adc, carrying_mac, sbb, Limb, WideLimb},
    bits::BitIteratorBE,
};

/// Heap-allocated unsigned big integer stored as base-2^64 limbs, least
/// significant first.
///
/// The representation is kept normalized: no most-significant zero limb is
/// ever stored, and zero is the empty limb vector. Every operation returns
/// a normalized value.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct Magnitude {
    limbs: Vec<Limb>,
}

impl Magnitude {
    /// The zero magnitude.
    pub const ZERO: Self = Self { limbs: Vec::new() };

    /// Wrap raw little-endian limbs, dropping most-significant zeros.
    pub(crate) fn from_limbs(limbs: Vec<Limb>) -> Self {
        let mut magnitude = Self { limbs };
        magnitude.normalize();
        magnitude
    }

    /// Returns the little-endian limbs of `self`.
    #[must_use]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Checks `self` is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Return the minimum number of bits needed to encode this number.
    ///
    /// Zero needs no bits.
    #[must_use]
    pub fn num_bits(&self) -> usize {
        match self.limbs.last() {
            None => 0,
            Some(&high) => {
                (self.limbs.len() - 1) * Limb::BITS as usize
                    + (Limb::BITS - high.leading_zeros()) as usize
            }
        }
    }

    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    /// Add `rhs` to `self`, limb-wise with carry propagation.
    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        let (longer, shorter) =
            if self.limbs.len() >= rhs.limbs.len() { (self, rhs) } else { (rhs, self) };

        let mut limbs = Vec::with_capacity(longer.limbs.len() + 1);
        let mut carry = 0;
        for (i, &a) in longer.limbs.iter().enumerate() {
            let b = shorter.limbs.get(i).copied().unwrap_or(0);
            let (limb, next) = adc(a, b, carry);
            limbs.push(limb);
            carry = next;
        }
        if carry != 0 {
            limbs.push(carry);
        }

        Self { limbs }
    }

    /// Subtract `rhs` from `self`, or `None` when `rhs` is larger.
    #[must_use]
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        if self < rhs {
            return None;
        }
        Some(self.sub_smaller(rhs))
    }

    /// Subtract `rhs` from `self`. The caller guarantees `self >= rhs`.
    pub(crate) fn sub_smaller(&self, rhs: &Self) -> Self {
        debug_assert!(self >= rhs);

        let mut limbs = Vec::with_capacity(self.limbs.len());
        let mut borrow = 0;
        for (i, &a) in self.limbs.iter().enumerate() {
            let b = rhs.limbs.get(i).copied().unwrap_or(0);
            let (limb, next) = sbb(a, b, borrow);
            limbs.push(limb);
            borrow = next;
        }
        debug_assert_eq!(borrow, 0);

        Self::from_limbs(limbs)
    }

    /// Schoolbook multiplication into a buffer sized to the sum of the
    /// operand lengths.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::ZERO;
        }

        let mut limbs = vec![0; self.limbs.len() + rhs.limbs.len()];
        // For each digit of the first number,
        for (i, &a) in self.limbs.iter().enumerate() {
            let mut carry = 0;
            // perform multiplication of each digit from the second.
            for (j, &b) in rhs.limbs.iter().enumerate() {
                let (limb, next) = carrying_mac(limbs[i + j], a, b, carry);
                limbs[i + j] = limb;
                carry = next;
            }
            // Set the last carry to the next limb.
            limbs[i + rhs.limbs.len()] = carry;
        }

        Self::from_limbs(limbs)
    }

    /// Long division of `self` by `rhs`, returning `(quotient, remainder)`.
    ///
    /// Shift-subtract over the dividend's bits, most significant first.
    /// The caller guarantees a nonzero divisor.
    #[must_use]
    pub fn div_rem(&self, rhs: &Self) -> (Self, Self) {
        debug_assert!(!rhs.is_zero(), "division by zero magnitude");

        if self < rhs {
            return (Self::ZERO, self.clone());
        }

        let mut quotient = Self::ZERO;
        let mut remainder = Self::ZERO;
        for bit in self.bit_be_trimmed_iter() {
            // Shift the remainder to the left by 1, and set its first bit
            // to the next bit of the dividend.
            remainder.shl1_or(bit);

            // If the remainder covers the divisor, subtract it and record a
            // set quotient bit.
            if remainder >= *rhs {
                remainder = remainder.sub_smaller(rhs);
                quotient.shl1_or(true);
            } else {
                quotient.shl1_or(false);
            }
        }

        (quotient, remainder)
    }

    /// Multiply `self` by 2 in place and set the lowest bit to `bit`.
    fn shl1_or(&mut self, bit: bool) {
        let mut carry = Limb::from(bit);
        for limb in &mut self.limbs {
            let high = *limb >> (Limb::BITS - 1);
            *limb = (*limb << 1) | carry;
            carry = high;
        }
        if carry != 0 {
            self.limbs.push(carry);
        }
    }

    /// Shift left by `n` bits, growing the limb vector as needed.
    #[must_use]
    pub fn shl_bits(&self, n: u32) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }

        let limb_shift = (n / Limb::BITS) as usize;
        let bit_shift = n % Limb::BITS;

        let mut limbs = vec![0; limb_shift];
        if bit_shift == 0 {
            limbs.extend_from_slice(&self.limbs);
        } else {
            let mut carry = 0;
            for &limb in &self.limbs {
                limbs.push((limb << bit_shift) | carry);
                carry = limb >> (Limb::BITS - bit_shift);
            }
            if carry != 0 {
                limbs.push(carry);
            }
        }

        Self { limbs }
    }

    /// Shift right by `n` bits, also reporting whether any dropped bit was
    /// set. The report drives the floor correction of arithmetic right
    /// shifts on negative values.
    #[must_use]
    pub fn shr_bits(&self, n: u32) -> (Self, bool) {
        let limb_shift = (n / Limb::BITS) as usize;
        let bit_shift = n % Limb::BITS;

        if limb_shift >= self.limbs.len() {
            return (Self::ZERO, !self.is_zero());
        }

        let mut dropped = self.limbs[..limb_shift].iter().any(|&limb| limb != 0);
        let limbs = if bit_shift == 0 {
            self.limbs[limb_shift..].to_vec()
        } else {
            dropped |= self.limbs[limb_shift] & ((1 << bit_shift) - 1) != 0;
            let mut limbs = Vec::with_capacity(self.limbs.len() - limb_shift);
            for i in limb_shift..self.limbs.len() {
                let mut limb = self.limbs[i] >> bit_shift;
                if let Some(&next) = self.limbs.get(i + 1) {
                    limb |= next << (Limb::BITS - bit_shift);
                }
                limbs.push(limb);
            }
            limbs
        };

        (Self::from_limbs(limbs), dropped)
    }

    /// Replace `self` with `self * mul + add` in a single carry pass.
    ///
    /// The decimal parser folds digits in with `mul = 10`.
    pub fn mul_add_limb(&mut self, mul: Limb, add: Limb) {
        let mut carry = add;
        for limb in &mut self.limbs {
            (*limb, carry) = carrying_mac(0, *limb, mul, carry);
        }
        if carry != 0 {
            self.limbs.push(carry);
        }
    }

    /// Divide `self` by a single nonzero limb in place, returning the
    /// remainder.
    ///
    /// The decimal formatter peels 19-digit groups off with
    /// `divisor = 10^19`.
    pub fn div_rem_limb(&mut self, divisor: Limb) -> Limb {
        debug_assert_ne!(divisor, 0);

        let mut remainder: Limb = 0;
        for limb in self.limbs.iter_mut().rev() {
            let wide = (remainder as WideLimb) << Limb::BITS | *limb as WideLimb;
            *limb = (wide / divisor as WideLimb) as Limb;
            remainder = (wide % divisor as WideLimb) as Limb;
        }
        self.normalize();
        remainder
    }
}

impl From<u64> for Magnitude {
    fn from(value: u64) -> Self {
        if value == 0 {
            Self::ZERO
        } else {
            Self { limbs: vec![value] }
        }
    }
}

impl From<u128> for Magnitude {
    fn from(value: u128) -> Self {
        Self::from_limbs(vec![value as Limb, (value >> Limb::BITS) as Limb])
    }
}

impl Ord for Magnitude {
    fn cmp(&self, rhs: &Self) -> Ordering {
        // Normalization makes limb count the primary key; equal lengths
        // compare most significant limb first.
        self.limbs.len().cmp(&rhs.limbs.len()).then_with(|| {
            for (a, b) in self.limbs.iter().rev().zip(rhs.limbs.iter().rev()) {
                match a.cmp(b) {
                    Ordering::Equal => {}
                    order => return order,
                }
            }
            Ordering::Equal
        })
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl BitIteratorBE for Magnitude {
    fn bit_be_iter(&self) -> impl Iterator<Item = bool> {
        self.limbs.iter().rev().flat_map(Limb::bit_be_iter)
    }
}
