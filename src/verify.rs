//! Round-trip error statistics, for comparing a signal against its reconstruction
use num_complex::Complex64;

use crate::error::FftError;

/// Error statistics between an original signal and its reconstruction
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundTripStats {
    /// Mean of `|original[i] - reconstructed[i]|^2`
    pub mean_squared_error: f64,
    /// Largest `|original[i] - reconstructed[i]|`
    pub max_abs_error: f64,
    /// Square root of the mean squared error
    pub rms_error: f64,
}

/// Computes the [`RoundTripStats`] of `reconstructed` against `original`.
///
/// Empty signals have no error.
///
/// # Errors
///
/// Returns [`FftError::MismatchedLengths`] if the two signals differ in length.
pub fn round_trip_stats(
    original: &[Complex64],
    reconstructed: &[Complex64],
) -> Result<RoundTripStats, FftError> {
    if original.len() != reconstructed.len() {
        return Err(FftError::MismatchedLengths {
            expected: original.len(),
            actual: reconstructed.len(),
        });
    }
    if original.is_empty() {
        return Ok(RoundTripStats::default());
    }

    let (sum_sq, max_abs) = original
        .iter()
        .zip(reconstructed.iter())
        .map(|(a, b)| (a - b).norm_sqr())
        .fold((0.0, 0.0_f64), |(sum, max), sq| (sum + sq, max.max(sq)));

    let mean_squared_error = sum_sq / original.len() as f64;
    Ok(RoundTripStats {
        mean_squared_error,
        max_abs_error: max_abs.sqrt(),
        rms_error: mean_squared_error.sqrt(),
    })
}
