//! Inverse FFT built from any forward FFT
//!
//! Uses the conjugation identity `ifft(x) = conj(fft(conj(x))) / N`, so the forward transform
//! is reused as is: conjugate, transform, conjugate, scale.
use log::trace;
use num_complex::Complex64;

use crate::error::FftError;
use crate::iterative::fft_iterative;
use crate::options::Algorithm;
use crate::recursive::fft_recursive;
use crate::size::check_power_of_two;

/// An in-place forward FFT.
///
/// Implemented by [`Algorithm`] and by every `Fn(&mut [Complex64]) -> Result<(), FftError>`,
/// so both [`fft_recursive`] and [`fft_iterative`] can be passed to [`ifft`] directly.
pub trait ForwardFft {
    /// Transforms `signal` in place into its frequency domain representation
    fn forward(&self, signal: &mut [Complex64]) -> Result<(), FftError>;
}

impl<F> ForwardFft for F
where
    F: Fn(&mut [Complex64]) -> Result<(), FftError>,
{
    fn forward(&self, signal: &mut [Complex64]) -> Result<(), FftError> {
        self(signal)
    }
}

impl ForwardFft for Algorithm {
    fn forward(&self, signal: &mut [Complex64]) -> Result<(), FftError> {
        match self {
            Algorithm::Recursive => fft_recursive(signal),
            Algorithm::Iterative => fft_iterative(signal),
        }
    }
}

/// Inverse FFT, in place, computed with the `forward` transform
///
/// The result is scaled by `1/N`, so `ifft` undoes a forward transform.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if the length of `signal` is zero or not a power of two,
/// without modifying the signal. An error from `forward` itself is passed through after the
/// signal is conjugated back, so it is left as it was passed in provided `forward` does not
/// modify the signals it rejects (none of the transforms in this crate do).
///
/// ```
/// use ctfft::{fft_iterative, fft_recursive, ifft, Complex64};
///
/// let original = vec![Complex64::new(1.0, 2.0), Complex64::new(-3.0, 0.5)];
/// let mut signal = original.clone();
/// fft_iterative(&mut signal).unwrap();
/// ifft(&mut signal, &fft_recursive).unwrap();
///
/// for (a, b) in signal.iter().zip(original.iter()) {
///     assert!((a - b).norm() < 1e-12);
/// }
/// ```
pub fn ifft<F: ForwardFft + ?Sized>(signal: &mut [Complex64], forward: &F) -> Result<(), FftError> {
    check_power_of_two(signal.len())?;
    trace!("inverse FFT of {} points", signal.len());

    conjugate(signal);
    if let Err(e) = forward.forward(signal) {
        conjugate(signal);
        return Err(e);
    }

    let scaling_factor = 1.0 / signal.len() as f64;
    for z in signal.iter_mut() {
        z.re *= scaling_factor;
        z.im *= -scaling_factor;
    }
    Ok(())
}

fn conjugate(signal: &mut [Complex64]) {
    for z in signal.iter_mut() {
        z.im = -z.im;
    }
}
