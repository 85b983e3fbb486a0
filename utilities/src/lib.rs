pub extern crate rustfft;

// export rustfft to ctfft tests and benches
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex;
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Asserts that two complex signals are element-wise approximately equal.
///
/// # Panics
///
/// Panics if the lengths differ, or if any pair of samples is further apart than `epsilon`
/// in either component
#[track_caller]
pub fn assert_complex_closeness<T: Float + std::fmt::Display>(
    actual: &[Complex<T>],
    expected: &[Complex<T>],
    epsilon: T,
) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Signals must be of equal length"
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        if (a.re - e.re).abs() >= epsilon || (a.im - e.im).abs() >= epsilon {
            panic!(
                "Assertion failed at index {i}: {} + {}i too far from expected value {} + {}i (with epsilon {epsilon})",
                a.re, a.im, e.re, e.im,
            );
        }
    }
}

/// Generate a random, complex, signal of length `len` with both components in `[-1, 1)`
pub fn gen_random_signal<T>(len: usize) -> Vec<Complex<T>>
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    (0..len)
        .map(|_| Complex::new(uniform_dist.sample(&mut rng), uniform_dist.sample(&mut rng)))
        .collect()
}

/// Transform `signal` with rustfft, for use as a reference result
pub fn rustfft_forward(signal: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let mut buffer = signal.to_vec();
    let mut planner = rustfft::FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
}
