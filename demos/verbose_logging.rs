//! Demonstrates enabling verbose logging for anyfft.
use anyfft::{convolve_real, FftPlanner};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let mut planner = FftPlanner::<f64>::new();
    let mut re = vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
    let mut im = vec![0.0f64; 6];
    planner.transform(&mut re, &mut im).unwrap();
    planner.transform(&mut re, &mut im).unwrap();

    let mut out = [0.0f64; 3];
    convolve_real(&[1.0, 2.0, 3.0], &[1.0, 0.0, 0.0], &mut out).unwrap();
}
