//! Basic usage example for anyfft
//!
//! Forward and inverse transforms on power-of-two and arbitrary lengths,
//! circular convolution, frequency labels and the cached planner.

use anyfft::tone::ToneBuffer;
use anyfft::{
    convolve_real, fftfreq, inverse_transform_normalized, transform, FftPlanner,
};

fn fmt_complex(re: &[f64], im: &[f64]) -> Vec<String> {
    re.iter()
        .zip(im)
        .map(|(r, i)| format!("{:.2}{:+.2}i", r, i))
        .collect()
}

fn main() {
    println!("=== anyfft Basic Usage Example ===\n");

    // 1. Power-of-two FFT
    println!("1. Radix-2 FFT (N = 4)");
    let mut re = vec![1.0f64, 2.0, 3.0, 4.0];
    let mut im = vec![0.0f64; 4];
    println!("   Input: {:?}", re);
    transform(&mut re, &mut im).unwrap();
    println!("   FFT: {:?}", fmt_complex(&re, &im));
    inverse_transform_normalized(&mut re, &mut im).unwrap();
    println!("   IFFT: {:?}", re);
    println!();

    // 2. Arbitrary length
    println!("2. Bluestein FFT (N = 5)");
    let mut re = vec![1.0f64, 0.0, -1.0, 0.0, 2.0];
    let mut im = vec![0.0f64; 5];
    transform(&mut re, &mut im).unwrap();
    println!("   FFT: {:?}", fmt_complex(&re, &im));
    println!("   Bins: {:?}", fftfreq(5, 1.0f64));
    println!();

    // 3. Circular convolution
    println!("3. Circular convolution");
    let x = [1.0f64, 2.0, 3.0, 0.0, 0.0];
    let y = [0.0f64, 1.0, 0.5, 0.0, 0.0];
    let mut out = [0.0f64; 5];
    convolve_real(&x, &y, &mut out).unwrap();
    println!("   {:?} * {:?} = {:.2?}", x, y, out);
    println!();

    // 4. Tone analysis with a cached planner
    println!("4. Tone analysis");
    let mut tone = ToneBuffer::with_sample_rate(8000).unwrap();
    tone.append_sinewaves(&[440.0, 1000.0], 25.0).unwrap();
    let mut re = tone.into_samples();
    let mut im = vec![0.0f64; re.len()];
    let mut planner = FftPlanner::<f64>::new();
    planner.transform(&mut re, &mut im).unwrap();
    let freqs = fftfreq(re.len(), 1.0f64 / 8000.0);
    let (peak, mag) = re
        .iter()
        .zip(&im)
        .map(|(r, i)| r.hypot(*i))
        .enumerate()
        .take(re.len() / 2)
        .fold((0, 0.0), |best, (k, m)| if m > best.1 { (k, m) } else { best });
    println!(
        "   {} samples, strongest bin {} at {:.1} Hz (|X| = {:.1})",
        re.len(),
        peak,
        freqs[peak],
        mag
    );
    println!("   Cached tables (radix-2, chirp): {:?}", planner.cached_lengths());
}
