//! Bluestein's algorithm (chirp-z transform).
//!
//! An `n`-point DFT is rewritten as a circular convolution of length
//! `m >= 2n + 1`, `m` a power of two, between the chirp-premultiplied input
//! and the chirp mirrored around `m`. The convolution itself runs on the
//! radix-2 path, so any length costs `O(m log m)`.

use crate::convolve;
use crate::fft::FftError;
use crate::num::{ComplexVec, Float};
use crate::twiddle::{FreshTables, TableSource};

/// Power-of-two convolution length used for an `n`-point transform: the
/// smallest power of two that is at least `2n + 1`.
pub fn convolution_len(n: usize) -> Result<usize, FftError> {
    n.checked_mul(2)
        .and_then(|v| v.checked_add(1))
        .and_then(usize::checked_next_power_of_two)
        .ok_or(FftError::InvalidLength)
}

/// In-place DFT of any length through the chirp-z path, regardless of
/// whether the length is a power of two.
///
/// [`crate::transform`] only routes non-power-of-two lengths here; calling
/// this directly is useful to cross-check the radix-2 kernel.
pub fn transform_bluestein<T: Float>(real: &mut [T], imag: &mut [T]) -> Result<(), FftError> {
    transform_with(&mut FreshTables, real, imag)
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
    let m = convolution_len(n)?;
    debug_log!("anyfft: bluestein n = {} via convolution length m = {}", n, m);

    let chirp = tables.chirp_table(n);
    let (cos_table, sin_table) = (chirp.cos(), chirp.sin());

    // Input premultiplied by the conjugate chirp, zero-padded to m.
    let mut a = ComplexVec::zeros(m);
    for i in 0..n {
        a.re[i] = real[i] * cos_table[i] + imag[i] * sin_table[i];
        a.im[i] = -real[i] * sin_table[i] + imag[i] * cos_table[i];
    }

    // Chirp and its mirror image around m.
    let mut b = ComplexVec::zeros(m);
    b.re[0] = cos_table[0];
    b.im[0] = sin_table[0];
    for i in 1..n {
        b.re[i] = cos_table[i];
        b.re[m - i] = cos_table[i];
        b.im[i] = sin_table[i];
        b.im[m - i] = sin_table[i];
    }

    convolve::convolve_in_place(tables, &mut a, &mut b)?;

    for i in 0..n {
        real[i] = a.re[i] * cos_table[i] + a.im[i] * sin_table[i];
        imag[i] = -a.re[i] * sin_table[i] + a.im[i] * cos_table[i];
    }
    Ok(())
}
