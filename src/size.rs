//! Size normalization: rounding sample counts up to a power of two and zero-padding signals
//! so that they can be handed to the transforms.
use log::debug;
use num_complex::Complex64;

use crate::error::FftError;

/// Returns the smallest power of two that is greater than or equal to `n`.
///
/// `0` maps to `0`, and so does any `n` above `2^63`, since there is no power of two left to
/// round up to. Both fall out of the wrapping bit trick below.
///
/// ```
/// use ctfft::next_power_of_two;
///
/// assert_eq!(next_power_of_two(3), 4);
/// assert_eq!(next_power_of_two(1024), 1024);
/// assert_eq!(next_power_of_two(1025), 2048);
/// ```
pub const fn next_power_of_two(n: usize) -> usize {
    let mut n = n.wrapping_sub(1);
    n |= n >> 1;
    n |= n >> 2;
    n |= n >> 4;
    n |= n >> 8;
    n |= n >> 16;
    #[cfg(target_pointer_width = "64")]
    {
        n |= n >> 32;
    }
    n.wrapping_add(1)
}

/// Checks that `len` is a non-zero power of two and returns `log2(len)`.
pub fn check_power_of_two(len: usize) -> Result<usize, FftError> {
    if len == 0 || !len.is_power_of_two() {
        debug!("rejecting signal of length {len}");
        return Err(FftError::InvalidLength { len });
    }
    Ok(len.ilog2() as usize)
}

/// Zero-pads `signal` up to the next power of two. An empty signal stays empty.
pub fn pad_to_power_of_two(signal: &mut Vec<Complex64>) {
    let target = next_power_of_two(signal.len());
    signal.resize(target, Complex64::new(0.0, 0.0));
}

/// Zero-pads `signal` to `next_power_of_two(max(signal.len(), requested))`.
///
/// Samples are never dropped: a `requested` size smaller than the signal only rounds the
/// signal's own length up.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if no power of two `>= requested` fits in a `usize`.
/// The signal is not modified in that case.
pub fn pad_to_size(signal: &mut Vec<Complex64>, requested: usize) -> Result<(), FftError> {
    let wanted = signal.len().max(requested);
    let target = next_power_of_two(wanted);
    if target < wanted {
        debug!("cannot pad {} samples to {requested}", signal.len());
        return Err(FftError::InvalidLength { len: requested });
    }
    signal.resize(target, Complex64::new(0.0, 0.0));
    Ok(())
}
