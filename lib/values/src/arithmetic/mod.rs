//! Limb-level primitives and the unbounded magnitude store they back.

pub mod limb;
pub mod magnitude;

pub use limb::Limb;
pub use magnitude::Magnitude;
