//! Recursive Decimation-in-Time (DIT) FFT
//!
//! The signal is split by index parity into its even and odd samples, both halves are
//! transformed by the same procedure, and the two half-size spectra are merged with one
//! butterfly per output pair.
//!
//! ## Memory
//!
//! A single scratch buffer the size of the input is allocated per call. Each level
//! de-interleaves its samples into its scratch, which then holds the two halves, and the
//! level's own (now dead) samples become the scratch of its two children.
use std::f64::consts::PI;

use log::{debug, trace};
use num_complex::Complex64;

use crate::error::FftError;
use crate::options::Options;
use crate::parallel::run_maybe_in_parallel;

/// Recursive DIT FFT, in place
///
/// Signals of length 0 and 1 are their own transform and are left as they are.
///
/// # Errors
///
/// Returns [`FftError::PreconditionViolated`] if the length is greater than 1 and not a power
/// of two. The signal is not modified in that case.
pub fn fft_recursive(signal: &mut [Complex64]) -> Result<(), FftError> {
    fft_recursive_with_opts(signal, &Options::default())
}

/// Recursive DIT FFT with explicit [`Options`]
///
/// With `opts.parallel` set and the `parallel` feature enabled, the two halves of every
/// sub-transform of at least `opts.parallel_threshold` points are computed concurrently.
pub fn fft_recursive_with_opts(signal: &mut [Complex64], opts: &Options) -> Result<(), FftError> {
    let n = signal.len();
    if n <= 1 {
        return Ok(());
    }
    if !n.is_power_of_two() {
        debug!("recursive FFT called on non-power-of-two length {n}");
        return Err(FftError::PreconditionViolated { len: n });
    }

    trace!("recursive FFT of {n} points (parallel: {})", opts.parallel);
    let mut scratch = vec![Complex64::default(); n];
    recurse(signal, &mut scratch, opts);
    Ok(())
}

/// Transforms `data` in place using `scratch` (same length) as auxiliary storage.
///
/// `data.len()` must be a power of two.
fn recurse(data: &mut [Complex64], scratch: &mut [Complex64], opts: &Options) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    let half = n / 2;

    let (evens, odds) = scratch.split_at_mut(half);
    for ((pair, even), odd) in data
        .chunks_exact(2)
        .zip(evens.iter_mut())
        .zip(odds.iter_mut())
    {
        *even = pair[0];
        *odd = pair[1];
    }

    {
        let (scratch_even, scratch_odd) = data.split_at_mut(half);
        let parallel = opts.parallel && n >= opts.parallel_threshold;
        run_maybe_in_parallel(
            parallel,
            || recurse(evens, scratch_even, opts),
            || recurse(odds, scratch_odd, opts),
        );
    }

    let (evens, odds) = scratch.split_at(half);
    let (lo, hi) = data.split_at_mut(half);
    let angle = -2.0 * PI / n as f64;
    for (k, ((x_lo, x_hi), (even, odd))) in lo
        .iter_mut()
        .zip(hi.iter_mut())
        .zip(evens.iter().zip(odds.iter()))
        .enumerate()
    {
        let t = Complex64::from_polar(1.0, angle * k as f64) * odd;
        *x_lo = even + t;
        *x_hi = even - t;
    }
}

#[cfg(test)]
mod tests {
    use utilities::{assert_complex_closeness, gen_random_signal, rustfft_forward};

    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn impulse() {
        let mut signal = vec![c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)];
        fft_recursive(&mut signal).unwrap();
        assert_complex_closeness(&signal, &[c(1.0, 0.0); 4], 1e-12);

        let mut signal = vec![c(0.0, 0.0); 8];
        signal[0] = c(1.0, 0.0);
        fft_recursive(&mut signal).unwrap();
        assert_complex_closeness(&signal, &[c(1.0, 0.0); 8], 1e-12);
    }

    #[test]
    fn constant() {
        let mut signal = vec![c(1.0, 0.0); 4];
        fft_recursive(&mut signal).unwrap();
        assert_complex_closeness(
            &signal,
            &[c(4.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
            1e-12,
        );
    }

    #[test]
    fn trivial_lengths_are_untouched() {
        let mut empty: Vec<Complex64> = vec![];
        fft_recursive(&mut empty).unwrap();
        assert!(empty.is_empty());

        let mut single = vec![c(3.0, -2.0)];
        fft_recursive(&mut single).unwrap();
        assert_eq!(single, vec![c(3.0, -2.0)]);
    }

    #[test]
    fn rejects_non_power_of_two() {
        let original: Vec<Complex64> = (0..6).map(|i| c(i as f64, 0.0)).collect();
        let mut signal = original.clone();
        assert_eq!(
            fft_recursive(&mut signal),
            Err(FftError::PreconditionViolated { len: 6 })
        );
        assert_eq!(signal, original);

        let mut odd = vec![c(1.0, 1.0); 3];
        assert_eq!(
            fft_recursive(&mut odd),
            Err(FftError::PreconditionViolated { len: 3 })
        );
    }

    #[test]
    fn fft() {
        for k in 1..14 {
            let n = 1 << k;

            let mut signal: Vec<Complex64> = (1..=n)
                .map(|i| c(f64::from(i), f64::from(i)))
                .collect();
            let expected = rustfft_forward(&signal);
            fft_recursive(&mut signal).unwrap();

            assert_complex_closeness(&signal, &expected, 1e-6 * n as f64);
        }
    }

    #[test]
    fn random_signals() {
        for k in [2, 5, 9, 12] {
            let mut signal = gen_random_signal::<f64>(1 << k);
            let expected = rustfft_forward(&signal);
            fft_recursive(&mut signal).unwrap();
            assert_complex_closeness(&signal, &expected, 1e-9);
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_split_matches_sequential() {
        let opts = Options {
            parallel: true,
            parallel_threshold: 64,
            ..Options::default()
        };

        let original = gen_random_signal::<f64>(1 << 12);
        let mut sequential = original.clone();
        let mut parallel = original;

        fft_recursive(&mut sequential).unwrap();
        fft_recursive_with_opts(&mut parallel, &opts).unwrap();

        assert_complex_closeness(&parallel, &sequential, 1e-12);
    }
}
