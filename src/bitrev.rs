//! Bit-reversed addressing for the iterative radix-2 FFT.

/// Returns the integer whose value is the reverse of the lowest `width` bits
/// of `val`.
#[inline]
pub fn reverse_bits(val: usize, width: u32) -> usize {
    if width == 0 {
        return 0;
    }
    val.reverse_bits() >> (usize::BITS - width)
}

/// Reorder `(real, imag)` pairs into bit-reversed index order.
///
/// `levels` is `log2(len)`; both slices must have length `1 << levels`.
pub fn bit_reverse_permute<T>(real: &mut [T], imag: &mut [T], levels: u32) {
    debug_assert_eq!(real.len(), imag.len());
    for i in 0..real.len() {
        let j = reverse_bits(i, levels);
        if j > i {
            real.swap(i, j);
            imag.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses_low_bits_only() {
        assert_eq!(reverse_bits(0b001, 3), 0b100);
        assert_eq!(reverse_bits(0b110, 3), 0b011);
        assert_eq!(reverse_bits(0b1, 1), 0b1);
        assert_eq!(reverse_bits(5, 0), 0);
    }

    #[test]
    fn permutation_of_eight() {
        let mut re: [usize; 8] = core::array::from_fn(|i| i);
        let mut im: [usize; 8] = core::array::from_fn(|i| 10 * i);
        bit_reverse_permute(&mut re, &mut im, 3);
        assert_eq!(re, [0, 4, 2, 6, 1, 5, 3, 7]);
        assert_eq!(im, [0, 40, 20, 60, 10, 50, 30, 70]);
    }

    #[test]
    fn permutation_is_an_involution() {
        let mut re: [usize; 16] = core::array::from_fn(|i| i);
        let mut im = re;
        bit_reverse_permute(&mut re, &mut im, 4);
        bit_reverse_permute(&mut re, &mut im, 4);
        assert_eq!(re, core::array::from_fn::<usize, 16, _>(|i| i));
    }
}
