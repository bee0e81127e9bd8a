//! Numeric building blocks shared by every transform: a minimal [`Float`]
//! trait, a plain [`Complex`] value type and the two split-buffer signal
//! representations ([`SplitComplex`] borrowed, [`ComplexVec`] owned).

use alloc::vec;
use alloc::vec::Vec;

use crate::fft::FftError;

// Minimal float trait for the generic transforms (no_std, trig via libm)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + core::ops::AddAssign
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f64(x: f64) -> Self;
    /// Lossy conversion; values above the mantissa width are rounded.
    fn from_usize(x: usize) -> Self;
    fn cos(self) -> Self;
    fn sin(self) -> Self;
    fn pi() -> Self;
}

/// # Note
/// `#[allow(unconditional_recursion)]` silences a false positive: with `std`
/// enabled, `f32::cos(self)` resolves to the inherent method, not the trait.
#[allow(unconditional_recursion)]
impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn from_usize(x: usize) -> Self {
        x as f32
    }
    #[cfg(feature = "std")]
    fn cos(self) -> Self {
        f32::cos(self)
    }
    #[cfg(not(feature = "std"))]
    fn cos(self) -> Self {
        libm::cosf(self)
    }
    #[cfg(feature = "std")]
    fn sin(self) -> Self {
        f32::sin(self)
    }
    #[cfg(not(feature = "std"))]
    fn sin(self) -> Self {
        libm::sinf(self)
    }
    fn pi() -> Self {
        core::f32::consts::PI
    }
}

#[allow(unconditional_recursion)]
impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x
    }
    fn from_usize(x: usize) -> Self {
        x as f64
    }
    #[cfg(feature = "std")]
    fn cos(self) -> Self {
        f64::cos(self)
    }
    #[cfg(not(feature = "std"))]
    fn cos(self) -> Self {
        libm::cos(self)
    }
    #[cfg(feature = "std")]
    fn sin(self) -> Self {
        f64::sin(self)
    }
    #[cfg(not(feature = "std"))]
    fn sin(self) -> Self {
        libm::sin(self)
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
}

/// A single complex value, used for the pointwise spectrum products.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: Float> core::ops::Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.im * other.re + self.re * other.im,
        }
    }
}

/// Borrowed complex signal stored as two equal-length slices.
#[derive(Debug, PartialEq)]
pub struct SplitComplex<'a, T: Float> {
    pub re: &'a mut [T],
    pub im: &'a mut [T],
}

impl<'a, T: Float> SplitComplex<'a, T> {
    pub fn new(re: &'a mut [T], im: &'a mut [T]) -> Result<Self, FftError> {
        if re.len() != im.len() {
            return Err(FftError::LengthMismatch);
        }
        Ok(Self { re, im })
    }
    pub fn len(&self) -> usize {
        self.re.len()
    }
    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }
}

/// Owned complex signal: the `(real, imag)` pair every transform operates on.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexVec<T: Float> {
    pub re: Vec<T>,
    pub im: Vec<T>,
}

impl<T: Float> ComplexVec<T> {
    pub fn new(re: Vec<T>, im: Vec<T>) -> Result<Self, FftError> {
        if re.len() != im.len() {
            return Err(FftError::LengthMismatch);
        }
        Ok(Self { re, im })
    }

    pub fn zeros(n: usize) -> Self {
        Self {
            re: vec![T::zero(); n],
            im: vec![T::zero(); n],
        }
    }

    /// Real signal with an all-zero imaginary part.
    pub fn from_real(re: &[T]) -> Self {
        Self {
            re: re.to_vec(),
            im: vec![T::zero(); re.len()],
        }
    }

    pub fn len(&self) -> usize {
        self.re.len()
    }
    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        (&mut self.re, &mut self.im)
    }
}
