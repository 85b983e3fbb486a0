//! Radix-2 Cooley-Tukey FFT over `Complex64` signals.
//!
//! Two forward transforms compute the same DFT:
//!
//! - [`fft_recursive`]: decimation in time by recursive even/odd splitting.
//! - [`fft_iterative`]: in place, via a bit reversal permutation and `log2(N)` butterfly stages.
//!
//! [`ifft`] turns either of them (or any other [`ForwardFft`]) into the inverse transform.
//!
//! Both transforms need a power-of-two length. Pad signals first with [`pad_to_power_of_two`]:
//!
//! ```
//! use ctfft::{fft_iterative, ifft, pad_to_power_of_two, Algorithm, Complex64};
//!
//! let mut signal: Vec<Complex64> = (0..5).map(|i| Complex64::new(i as f64, 0.0)).collect();
//! pad_to_power_of_two(&mut signal);
//! assert_eq!(signal.len(), 8);
//!
//! fft_iterative(&mut signal).unwrap();
//! assert!((signal[0].re - 10.0).abs() < 1e-12);
//!
//! ifft(&mut signal, &Algorithm::Recursive).unwrap();
//! assert!((signal[4].re - 4.0).abs() < 1e-12);
//! ```
#![warn(
    missing_docs,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::correctness,
    clippy::suspicious
)]

use log::trace;

pub use num_complex::Complex64;

pub use crate::bit_reverse::{bit_reverse_permutation, reverse_bits};
pub use crate::error::FftError;
pub use crate::inverse::{ifft, ForwardFft};
pub use crate::iterative::fft_iterative;
pub use crate::options::{Algorithm, Direction, Options};
pub use crate::recursive::{fft_recursive, fft_recursive_with_opts};
pub use crate::size::{check_power_of_two, next_power_of_two, pad_to_power_of_two, pad_to_size};
pub use crate::verify::{round_trip_stats, RoundTripStats};

mod bit_reverse;
mod error;
mod inverse;
mod iterative;
pub mod options;
mod parallel;
mod recursive;
mod size;
mod verify;

/// FFT in the given [`Direction`], using the transform selected by `opts`
///
/// `Direction::Reverse` runs [`ifft`] on top of the selected forward transform.
///
/// # Errors
///
/// Returns the [`FftError`] of the selected transform when the signal length is not accepted.
pub fn fft_with_opts(
    signal: &mut [Complex64],
    direction: Direction,
    opts: &Options,
) -> Result<(), FftError> {
    trace!(
        "{direction:?} FFT of {} points with {:?}",
        signal.len(),
        opts.algorithm
    );

    let forward = |s: &mut [Complex64]| -> Result<(), FftError> {
        match opts.algorithm {
            Algorithm::Recursive => fft_recursive_with_opts(s, opts),
            Algorithm::Iterative => fft_iterative(s),
        }
    };

    match direction {
        Direction::Forward => forward(signal),
        Direction::Reverse => ifft(signal, &forward),
    }
}
