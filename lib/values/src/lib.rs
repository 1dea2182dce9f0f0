/*!
Four self-contained value types with exact, well-specified semantics:

- [`Number`] — an arbitrary-precision signed integer whose operators wrap
  around like a 32-bit machine integer, while decimal parsing and printing
  keep the full magnitude.
- [`Date`] — a second-resolution calendar instant convertible between the
  Unix epoch and the 100-nanosecond file-time encoding.
- [`Adam`] — a Byzantine world-era year with its indiction, solar and
  lunar cycle indices.
- [`Matrix`] — a dense row-major `f64` matrix with cofactor determinants
  and adjugate inversion.

The crate is `no_std`-compatible (it only needs `alloc`); the default
`std` feature is required by the test suite.
*/

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod adam;
pub mod arithmetic;
pub mod bits;
pub mod date;
pub mod matrix;
pub mod number;

pub use adam::Adam;
pub use date::Date;
pub use matrix::Matrix;
pub use number::{Number, Sign};
