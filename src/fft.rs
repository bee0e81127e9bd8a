//! Discrete Fourier transform entry points.
//!
//! [`transform`] dispatches on the input length: power-of-two lengths use the
//! radix-2 kernel in [`crate::radix2`], everything else goes through
//! [`crate::bluestein`]. Both paths mutate the caller's buffers in place.
//!
//! Every entry point validates buffer lengths before touching any element, so
//! an `Err` always leaves the inputs exactly as they were.

use crate::bluestein;
use crate::num::{ComplexVec, Float, SplitComplex};
use crate::radix2;
use crate::twiddle::{FreshTables, TableSource};

/// Errors reported by the transform and convolution routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// Buffers that must share a length do not.
    LengthMismatch,
    /// The radix-2 kernel was handed a length that is not a power of two, or
    /// a Bluestein convolution length does not fit in `usize`.
    InvalidLength,
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::LengthMismatch => write!(f, "mismatched buffer lengths"),
            FftError::InvalidLength => write!(f, "invalid transform length"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// In-place forward DFT of the complex signal `(real, imag)`.
///
/// Computes `X[k] = Σ_j x[j]·exp(-2πi·jk/N)`. An empty signal is a no-op.
///
/// # Errors
/// [`FftError::LengthMismatch`] if `real.len() != imag.len()`; the buffers
/// are left untouched.
pub fn transform<T: Float>(real: &mut [T], imag: &mut [T]) -> Result<(), FftError> {
    transform_with(&mut FreshTables, real, imag)
}

/// In-place **unnormalized** inverse DFT.
///
/// Uses the `+2πi` sign convention and does not divide by `N`, so
/// `transform` followed by `inverse_transform` scales the signal by `N`.
/// Prefer [`inverse_transform_normalized`] unless that factor is wanted.
pub fn inverse_transform<T: Float>(real: &mut [T], imag: &mut [T]) -> Result<(), FftError> {
    inverse_transform_with(&mut FreshTables, real, imag)
}

/// In-place inverse DFT scaled by `1/N`; the exact inverse of [`transform`].
pub fn inverse_transform_normalized<T: Float>(
    real: &mut [T],
    imag: &mut [T],
) -> Result<(), FftError> {
    inverse_transform_normalized_with(&mut FreshTables, real, imag)
}

/// [`transform`] over a borrowed split signal.
pub fn transform_split<T: Float>(signal: SplitComplex<'_, T>) -> Result<(), FftError> {
    transform(signal.re, signal.im)
}

/// [`transform`] over an owned signal.
pub fn transform_complex_vec<T: Float>(signal: &mut ComplexVec<T>) -> Result<(), FftError> {
    let (re, im) = signal.as_mut_slices();
    transform(re, im)
}

/// [`inverse_transform_normalized`] over an owned signal.
pub fn inverse_transform_complex_vec<T: Float>(
    signal: &mut ComplexVec<T>,
) -> Result<(), FftError> {
    let (re, im) = signal.as_mut_slices();
    inverse_transform_normalized(re, im)
}

pub(crate) fn transform_with<T: Float, S: TableSource<T>>(
    tables: &mut S,
    real: &mut [T],
    imag: &mut [T],
) -> Result<(), FftError> {
    let n = real.len();
    if n != imag.len() {
        return Err(FftError::LengthMismatch);
    }
    if n == 0 {
        return Ok(());
    }
    if n & (n - 1) == 0 {
        trace_log!("anyfft: radix-2 transform, n = {}", n);
        let table = tables.radix2_table(n);
        radix2::transform_with_table(real, imag, &table)
    } else {
        trace_log!("anyfft: bluestein transform, n = {}", n);
        bluestein::transform_with(tables, real, imag)
    }
}

// The inverse is the forward transform with the roles of the two buffers
// swapped.
pub(crate) fn inverse_transform_with<T: Float, S: TableSource<T>>(
    tables: &mut S,
    real: &mut [T],
    imag: &mut [T],
) -> Result<(), FftError> {
    transform_with(tables, imag, real)
}

pub(crate) fn inverse_transform_normalized_with<T: Float, S: TableSource<T>>(
    tables: &mut S,
    real: &mut [T],
    imag: &mut [T],
) -> Result<(), FftError> {
    inverse_transform_with(tables, real, imag)?;
    let n = T::from_usize(real.len());
    for (re, im) in real.iter_mut().zip(imag.iter_mut()) {
        *re = *re / n;
        *im = *im / n;
    }
    Ok(())
}
