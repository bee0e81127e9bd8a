//! # anyfft - arbitrary-length FFT over split real/imaginary buffers
//!
//! A small DFT engine that works on any input length. Power-of-two lengths go
//! through an iterative radix-2 Cooley-Tukey FFT; every other length is
//! reduced to a power-of-two circular convolution with Bluestein's chirp-z
//! algorithm. Circular convolution and FFT frequency-bin labels are built on
//! top of the same transform.
//!
//! ## Features
//!
//! - **Any length**: `N = 0` is a no-op, `N = 1` is the identity, everything
//!   else is an exact `O(N log N)` DFT.
//! - **In place**: transforms mutate the caller's `real`/`imag` slices.
//! - **Split layout**: signals are two equal-length slices, never interleaved.
//! - **Optional table cache**: [`FftPlanner`] keeps trigonometric tables per
//!   length without changing a single output bit.
//! - **no_std + alloc**: trigonometry falls back to `libm` without `std`.
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` impls and environment overrides
//! - `verbose-logging`: dispatch and cache decisions through the `log` facade
//!
//! ## Conventions
//!
//! The forward transform computes `X[k] = Σ x[j]·exp(-2πi·jk/N)`.
//! [`inverse_transform`] uses `+2πi` and is **not** scaled by `1/N`; use
//! [`inverse_transform_normalized`] for a true inverse.
//!
//! ```
//! use anyfft::{fftfreq, inverse_transform_normalized, transform};
//!
//! let mut re: Vec<f64> = vec![1.0, 1.0, 1.0, 1.0];
//! let mut im = vec![0.0; 4];
//! transform(&mut re, &mut im).unwrap();
//! assert_eq!(re, [4.0, 0.0, 0.0, 0.0]);
//!
//! inverse_transform_normalized(&mut re, &mut im).unwrap();
//! assert!(re.iter().all(|&x| (x - 1.0).abs() < 1e-12));
//!
//! assert_eq!(fftfreq(4, 1.0), [0.0, 0.25, -0.5, -0.25]);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "verbose-logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}
#[cfg(not(feature = "verbose-logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "verbose-logging")]
macro_rules! trace_log {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}
#[cfg(not(feature = "verbose-logging"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

/// Transform entry points and the crate error type.
pub mod fft;

/// Numeric primitives and split/owned complex signal containers.
pub mod num;

/// Bit-reversal permutation used by the radix-2 path.
pub mod bitrev;

/// Precomputed cosine/sine tables.
pub mod twiddle;

/// In-place iterative radix-2 decimation-in-time FFT.
pub mod radix2;

/// Bluestein chirp-z transform for arbitrary lengths.
pub mod bluestein;

/// Circular convolution via the convolution theorem.
pub mod convolve;

/// FFT frequency-bin labels.
pub mod freq;

/// Optional per-length table cache.
pub mod planner;

/// Test-tone and silence generation into sample buffers.
pub mod tone;

pub use convolve::{convolve_complex, convolve_real};
pub use fft::{inverse_transform, inverse_transform_normalized, transform, FftError};
pub use freq::fftfreq;
pub use num::{Complex, ComplexVec, Float, SplitComplex};
pub use planner::{FftPlanner, PlannerConfig};
pub use tone::{ToneBuffer, ToneError};
