//! Iterative in-place FFT
//!
//! 1. Apply bit-reversal to input data
//! 2. Start with small butterflies (size 2)
//! 3. Work up to stage `log(N)`, where `N` is the size of the input.
//!
//! The output is in natural order, and no memory beyond the signal itself is used.
use std::f64::consts::PI;

use log::trace;
use num_complex::Complex64;

use crate::bit_reverse::bit_reverse_permutation;
use crate::error::FftError;
use crate::size::check_power_of_two;

/// Iterative FFT, in place
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if the length of `signal` is zero or not a power of two.
/// The signal is not modified in that case.
pub fn fft_iterative(signal: &mut [Complex64]) -> Result<(), FftError> {
    let log_n = check_power_of_two(signal.len())?;
    trace!("iterative FFT of {} points", signal.len());

    bit_reverse_permutation(signal, log_n);
    butterfly_stages(signal);
    Ok(())
}

/// Runs every butterfly stage over a bit-reversed signal, from chunks of 2 up to the whole signal.
#[multiversion::multiversion(targets(
    "x86_64+avx2+fma", // x86_64-v3
    "x86_64+sse4.2", // x86_64-v2
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
fn butterfly_stages(signal: &mut [Complex64]) {
    let n = signal.len();
    let mut chunk_size = 2;

    while chunk_size <= n {
        let dist = chunk_size >> 1;
        let (sin, cos) = (-2.0 * PI / chunk_size as f64).sin_cos();
        let root = Complex64::new(cos, sin);

        signal.chunks_exact_mut(chunk_size).for_each(|chunk| {
            let (s0, s1) = chunk.split_at_mut(dist);
            let mut w = Complex64::new(1.0, 0.0);

            for (top, bottom) in s0.iter_mut().zip(s1.iter_mut()) {
                let t = w * *bottom;
                let u = *top;
                *top = u + t;
                *bottom = u - t;
                w *= root;
            }
        });

        chunk_size <<= 1;
    }
}
