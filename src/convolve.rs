//! Circular convolution through the convolution theorem.
//!
//! Both operands are copied, transformed, multiplied pointwise, transformed
//! back with the unnormalized inverse and divided by `N`. The caller's inputs
//! are never modified. Linear convolution needs the caller to zero-pad both
//! operands to at least `len(x) + len(y) - 1` first.

use crate::fft::{self, FftError};
use crate::num::{Complex, ComplexVec, Float};
use crate::twiddle::{FreshTables, TableSource};

/// Circular convolution of two complex sequences into `(outreal, outimag)`.
///
/// # Errors
/// [`FftError::LengthMismatch`] unless all six buffers share one length;
/// the outputs are not written in that case.
pub fn convolve_complex<T: Float>(
    xreal: &[T],
    ximag: &[T],
    yreal: &[T],
    yimag: &[T],
    outreal: &mut [T],
    outimag: &mut [T],
) -> Result<(), FftError> {
    convolve_complex_with(
        &mut FreshTables,
        xreal,
        ximag,
        yreal,
        yimag,
        outreal,
        outimag,
    )
}

/// Circular convolution of two real sequences into `out`.
///
/// # Errors
/// [`FftError::LengthMismatch`] unless `x`, `y` and `out` share one length.
pub fn convolve_real<T: Float>(x: &[T], y: &[T], out: &mut [T]) -> Result<(), FftError> {
    convolve_real_with(&mut FreshTables, x, y, out)
}

pub(crate) fn convolve_complex_with<T: Float, S: TableSource<T>>(
    tables: &mut S,
    xreal: &[T],
    ximag: &[T],
    yreal: &[T],
    yimag: &[T],
    outreal: &mut [T],
    outimag: &mut [T],
) -> Result<(), FftError> {
    let n = xreal.len();
    if n != ximag.len()
        || n != yreal.len()
        || n != yimag.len()
        || n != outreal.len()
        || n != outimag.len()
    {
        return Err(FftError::LengthMismatch);
    }
    let mut x = ComplexVec::new(xreal.to_vec(), ximag.to_vec())?;
    let mut y = ComplexVec::new(yreal.to_vec(), yimag.to_vec())?;
    convolve_in_place(tables, &mut x, &mut y)?;
    outreal.copy_from_slice(&x.re);
    outimag.copy_from_slice(&x.im);
    Ok(())
}

pub(crate) fn convolve_real_with<T: Float, S: TableSource<T>>(
    tables: &mut S,
    x: &[T],
    y: &[T],
    out: &mut [T],
) -> Result<(), FftError> {
    let n = x.len();
    if n != y.len() || n != out.len() {
        return Err(FftError::LengthMismatch);
    }
    let mut x = ComplexVec::from_real(x);
    let mut y = ComplexVec::from_real(y);
    convolve_in_place(tables, &mut x, &mut y)?;
    out.copy_from_slice(&x.re);
    Ok(())
}

/// Convolve owned operands, leaving the result in `x`. `y` is consumed as
/// scratch and holds its spectrum afterwards.
pub(crate) fn convolve_in_place<T: Float, S: TableSource<T>>(
    tables: &mut S,
    x: &mut ComplexVec<T>,
    y: &mut ComplexVec<T>,
) -> Result<(), FftError> {
    let n = x.len();
    if n != y.len() {
        return Err(FftError::LengthMismatch);
    }
    {
        let (re, im) = x.as_mut_slices();
        fft::transform_with(tables, re, im)?;
    }
    {
        let (re, im) = y.as_mut_slices();
        fft::transform_with(tables, re, im)?;
    }

    for i in 0..n {
        let product = Complex::new(x.re[i], x.im[i]) * Complex::new(y.re[i], y.im[i]);
        x.re[i] = product.re;
        x.im[i] = product.im;
    }

    {
        let (re, im) = x.as_mut_slices();
        fft::inverse_transform_with(tables, re, im)?;
    }

    let scale = T::from_usize(n);
    for (re, im) in x.re.iter_mut().zip(x.im.iter_mut()) {
        *re = *re / scale;
        *im = *im / scale;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn naive_circular(x: &[f64], y: &[f64]) -> Vec<f64> {
        let n = x.len();
        (0..n)
            .map(|k| (0..n).map(|j| x[j] * y[(k + n - j) % n]).sum())
            .collect()
    }

    #[test]
    fn real_convolution_matches_naive() {
        for n in [1usize, 4, 5, 9] {
            let x: Vec<f64> = (0..n).map(|i| (i as f64) * 0.5 - 1.0).collect();
            let y: Vec<f64> = (0..n).map(|i| ((i * 7) % 3) as f64).collect();
            let mut out = vec![0.0; n];
            convolve_real(&x, &y, &mut out).unwrap();
            for (a, b) in out.iter().zip(naive_circular(&x, &y).iter()) {
                assert!((a - b).abs() < 1e-9, "n = {n}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn inputs_are_not_mutated() {
        let xr = [1.0f64, 2.0, 3.0];
        let xi = [0.5f64, -0.5, 0.0];
        let yr = [0.0f64, 1.0, 0.0];
        let yi = [0.0f64; 3];
        let mut or = [0.0f64; 3];
        let mut oi = [0.0f64; 3];
        convolve_complex(&xr, &xi, &yr, &yi, &mut or, &mut oi).unwrap();
        assert_eq!(xr, [1.0, 2.0, 3.0]);
        assert_eq!(xi, [0.5, -0.5, 0.0]);
        // shift by one
        assert!((or[0] - 3.0).abs() < 1e-12);
        assert!((or[1] - 1.0).abs() < 1e-12);
        assert!((or[2] - 2.0).abs() < 1e-12);
        assert!((oi[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn empty_convolution_is_ok() {
        let mut out: [f64; 0] = [];
        assert_eq!(convolve_real(&[], &[], &mut out), Ok(()));
    }

    #[test]
    fn any_mismatch_is_rejected_and_output_untouched() {
        let a = [1.0f64; 4];
        let b = [1.0f64; 3];
        let mut out = [9.0f64; 4];
        let mut out_im = [9.0f64; 4];
        assert_eq!(
            convolve_real(&a, &b, &mut out),
            Err(FftError::LengthMismatch)
        );
        assert_eq!(
            convolve_complex(&a, &a, &a, &b, &mut out, &mut out_im),
            Err(FftError::LengthMismatch)
        );
        let mut short = [9.0f64; 3];
        assert_eq!(
            convolve_complex(&a, &a, &a, &a, &mut out, &mut short),
            Err(FftError::LengthMismatch)
        );
        assert_eq!(out, [9.0; 4]);
    }
}
