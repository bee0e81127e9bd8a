//! Trigonometric tables for the radix-2 butterflies and the Bluestein chirp.
//!
//! Tables are immutable once built. The free functions build fresh tables on
//! every call; [`crate::FftPlanner`] hands out shared cached copies instead.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::num::Float;

/// Ordered `(cos, sin)` pairs stored as two parallel vectors.
#[derive(Clone, Debug, PartialEq)]
pub struct TrigTable<T: Float> {
    cos: Vec<T>,
    sin: Vec<T>,
}

impl<T: Float> TrigTable<T> {
    /// Twiddle table for an `n`-point radix-2 FFT: `n/2` entries of
    /// `cos(2π·i/n)` and `sin(2π·i/n)`.
    pub fn radix2(n: usize) -> Self {
        let half = n / 2;
        let two_pi = T::from_f64(2.0) * T::pi();
        let len = T::from_usize(n);
        let mut cos = Vec::with_capacity(half);
        let mut sin = Vec::with_capacity(half);
        for i in 0..half {
            let angle = two_pi * T::from_usize(i) / len;
            cos.push(angle.cos());
            sin.push(angle.sin());
        }
        Self { cos, sin }
    }

    /// Chirp table for an `n`-point Bluestein transform: `n` entries of
    /// `cos(π·j/n)` and `sin(π·j/n)` with `j = i² mod 2n`.
    pub fn chirp(n: usize) -> Self {
        let len = T::from_usize(n);
        let mut cos = Vec::with_capacity(n);
        let mut sin = Vec::with_capacity(n);
        for i in 0..n {
            let angle = T::pi() * T::from_usize(chirp_index(i, n)) / len;
            cos.push(angle.cos());
            sin.push(angle.sin());
        }
        Self { cos, sin }
    }

    pub fn len(&self) -> usize {
        self.cos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cos.is_empty()
    }

    pub fn cos(&self) -> &[T] {
        &self.cos
    }

    pub fn sin(&self) -> &[T] {
        &self.sin
    }
}

/// `i² mod 2n` without the intermediate square overflowing or losing
/// precision.
#[inline]
pub fn chirp_index(i: usize, n: usize) -> usize {
    let modulus = 2 * n as u128;
    ((i as u128 * i as u128) % modulus) as usize
}

/// Where transforms obtain their tables from.
pub(crate) trait TableSource<T: Float> {
    fn radix2_table(&mut self, n: usize) -> Arc<TrigTable<T>>;
    fn chirp_table(&mut self, n: usize) -> Arc<TrigTable<T>>;
}

/// Builds every table on demand and keeps nothing.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FreshTables;

impl<T: Float> TableSource<T> for FreshTables {
    fn radix2_table(&mut self, n: usize) -> Arc<TrigTable<T>> {
        Arc::new(TrigTable::radix2(n))
    }

    fn chirp_table(&mut self, n: usize) -> Arc<TrigTable<T>> {
        Arc::new(TrigTable::chirp(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radix2_table_values() {
        let t = TrigTable::<f64>::radix2(8);
        assert_eq!(t.len(), 4);
        assert_eq!(t.cos()[0], 1.0);
        assert_eq!(t.sin()[0], 0.0);
        assert!((t.cos()[2]).abs() < 1e-15);
        assert!((t.sin()[2] - 1.0).abs() < 1e-15);
        assert!((t.cos()[1] - core::f64::consts::FRAC_1_SQRT_2).abs() < 1e-15);
    }

    #[test]
    fn radix2_table_for_trivial_sizes_is_empty() {
        assert!(TrigTable::<f64>::radix2(1).is_empty());
        assert!(TrigTable::<f64>::radix2(0).is_empty());
    }

    #[test]
    fn chirp_index_wraps_modulo_two_n() {
        // n = 3: i² = 0, 1, 4 -> mod 6 = 0, 1, 4
        assert_eq!(chirp_index(0, 3), 0);
        assert_eq!(chirp_index(1, 3), 1);
        assert_eq!(chirp_index(2, 3), 4);
        // large i would overflow a naive u64 square
        let n = usize::MAX / 4;
        assert!(chirp_index(n - 1, n) < 2 * n);
    }

    #[test]
    fn chirp_table_matches_direct_formula() {
        let n = 5;
        let t = TrigTable::<f64>::chirp(n);
        assert_eq!(t.len(), n);
        for i in 0..n {
            let angle = core::f64::consts::PI * ((i * i) % (2 * n)) as f64 / n as f64;
            assert!((t.cos()[i] - angle.cos()).abs() < 1e-15);
            assert!((t.sin()[i] - angle.sin()).abs() < 1e-15);
        }
    }
}
