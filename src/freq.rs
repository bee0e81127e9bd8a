//! Sample frequencies for the bins produced by [`crate::transform`].

use alloc::vec::Vec;

use crate::num::Float;

/// Frequency label of each of the `n` bins of an `n`-point transform with
/// sample spacing `d` (pass `1.0` for cycles per sample).
///
/// Bins below `ceil(n/2)` are non-negative, `i / (n·d)`; the remaining bins
/// hold the negative frequencies `(i - n) / (n·d)`, in the same order the
/// transform emits them.
///
/// `d` must be finite and non-zero. A zero spacing yields infinite labels
/// (and NaN for bin 0), a non-finite one yields NaN or zero; no error is
/// reported.
///
/// ```
/// let f = anyfft::fftfreq(5, 1.0_f64);
/// let expected = [0.0, 0.2, 0.4, -0.4, -0.2];
/// assert!(f.iter().zip(expected).all(|(a, b)| (a - b).abs() < 1e-12));
/// ```
pub fn fftfreq<T: Float>(n: usize, d: T) -> Vec<T> {
    let val = T::one() / (T::from_usize(n) * d);
    let positive = n.div_ceil(2);
    (0..n)
        .map(|i| {
            if i < positive {
                T::from_usize(i) * val
            } else {
                -T::from_usize(n - i) * val
            }
        })
        .collect()
}
