use num_traits::{ConstOne, ConstZero};

/// A single base-2^64 digit of a magnitude.
pub type Limb = u64;
/// Double-width scratch type carry and borrow propagation widens through.
pub type WideLimb = u128;

/// Calculate `a + b + carry`, returning the low limb and the new carry.
#[inline(always)]
#[must_use]
pub const fn adc(a: Limb, b: Limb, carry: Limb) -> (Limb, Limb) {
    let tmp = a as WideLimb + b as WideLimb + carry as WideLimb;
    let carry = (tmp >> Limb::BITS) as Limb;
    (tmp as Limb, carry)
}

/// Calculate `a - b - borrow`, returning the low limb and the new borrow.
#[inline(always)]
#[must_use]
pub const fn sbb(a: Limb, b: Limb, borrow: Limb) -> (Limb, Limb) {
    let tmp =
        (WideLimb::ONE << Limb::BITS) + a as WideLimb - b as WideLimb - borrow as WideLimb;
    let borrow = if tmp >> Limb::BITS == 0 { Limb::ONE } else { Limb::ZERO };
    (tmp as Limb, borrow)
}

/// Calculate `a + (b * c) + carry`, returning the least significant limb
/// and setting carry to the most significant limb.
#[inline(always)]
#[must_use]
pub const fn carrying_mac(a: Limb, b: Limb, c: Limb, carry: Limb) -> (Limb, Limb) {
    let tmp = a as WideLimb + b as WideLimb * c as WideLimb + carry as WideLimb;
    let carry = (tmp >> Limb::BITS) as Limb;
    (tmp as Limb, carry)
}
