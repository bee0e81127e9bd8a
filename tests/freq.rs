// Test intent: frequency-bin labels and their agreement with the transform's bin order.
use anyfft::tone::ToneBuffer;
use anyfft::{fftfreq, transform};

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!((a - e).abs() < 1e-12, "{actual:?} vs {expected:?}");
    }
}

#[test]
fn reference_layouts() {
    assert_close(&fftfreq(5, 1.0), &[0.0, 0.2, 0.4, -0.4, -0.2]);
    assert_close(&fftfreq(4, 1.0), &[0.0, 0.25, -0.5, -0.25]);
}

#[test]
fn bins_are_antisymmetric_except_nyquist() {
    for n in 1..40usize {
        let f = fftfreq(n, 0.5f64);
        assert_eq!(f[0], 0.0);
        for i in 1..n {
            if 2 * i == n {
                assert!(f[i] < 0.0);
                continue;
            }
            assert!((f[i] + f[n - i]).abs() < 1e-12, "n = {n}, i = {i}");
        }
    }
}

#[test]
fn tone_peak_lands_on_its_labelled_bin() {
    // 250 Hz at 1 kHz, 100 samples: exact bin, non power of two
    let mut tone = ToneBuffer::with_sample_rate(1000).unwrap();
    let n = tone.append_sinewave(250.0, 100.0, 1.0).unwrap();
    assert_eq!(n, 100);
    let mut re = tone.into_samples();
    let mut im = vec![0.0f64; n];
    transform(&mut re, &mut im).unwrap();

    let mags: Vec<f64> = re.iter().zip(&im).map(|(r, i)| r.hypot(*i)).collect();
    let peak = mags
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
        .unwrap()
        .0;
    let freqs = fftfreq(n, 1.0f64 / 1000.0);
    assert!((freqs[peak].abs() - 250.0).abs() < 1e-9, "peak at {}", freqs[peak]);
}
