//! Iterative radix-2 Cooley-Tukey FFT (decimation in time).
//!
//! Samples are first put into bit-reversed order, then combined by
//! `log2(N)` passes of butterflies whose twiddles come from a
//! [`TrigTable::radix2`] table. The index arithmetic matches the textbook
//! formulation exactly so results agree bit-for-bit with reference code
//! using the same tables.

use crate::bitrev::bit_reverse_permute;
use crate::fft::FftError;
use crate::num::Float;
use crate::twiddle::TrigTable;

/// In-place radix-2 FFT with freshly computed twiddles.
///
/// # Errors
/// [`FftError::LengthMismatch`] for unequal buffers, [`FftError::InvalidLength`]
/// if the length is not a power of two. Neither touches the buffers.
pub fn transform_radix2<T: Float>(real: &mut [T], imag: &mut [T]) -> Result<(), FftError> {
    check_lengths(real, imag)?;
    let table = TrigTable::radix2(real.len());
    transform_with_table(real, imag, &table)
}

/// In-place radix-2 FFT using a caller-supplied twiddle table, which must be
/// `TrigTable::radix2(real.len())`.
pub fn transform_with_table<T: Float>(
    real: &mut [T],
    imag: &mut [T],
    table: &TrigTable<T>,
) -> Result<(), FftError> {
    check_lengths(real, imag)?;
    let n = real.len();
    if n == 1 {
        return Ok(());
    }
    if table.len() != n / 2 {
        return Err(FftError::InvalidLength);
    }
    let levels = n.trailing_zeros();
    let cos_table = table.cos();
    let sin_table = table.sin();

    bit_reverse_permute(real, imag, levels);

    let mut size = 2;
    while size <= n {
        let halfsize = size / 2;
        let tablestep = n / size;
        for i in (0..n).step_by(size) {
            let mut k = 0;
            for j in i..i + halfsize {
                let l = j + halfsize;
                let tpre = real[l] * cos_table[k] + imag[l] * sin_table[k];
                let tpim = -real[l] * sin_table[k] + imag[l] * cos_table[k];
                real[l] = real[j] - tpre;
                imag[l] = imag[j] - tpim;
                real[j] += tpre;
                imag[j] += tpim;
                k += tablestep;
            }
        }
        size *= 2;
    }
    Ok(())
}

fn check_lengths<T>(real: &[T], imag: &[T]) -> Result<(), FftError> {
    if real.len() != imag.len() {
        return Err(FftError::LengthMismatch);
    }
    if !real.len().is_power_of_two() {
        return Err(FftError::InvalidLength);
    }
    Ok(())
}
