//! Errors reported by the transform engine.
//!
//! All of these are precondition failures: the computation is deterministic, so a failed call
//! has to be fixed at the call site (usually by padding the signal), never retried. A call that
//! returns an error leaves the signal untouched.
use thiserror::Error;

/// Error types related to FFT preconditions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// Signal length is zero, or is not a power of two where the transform requires one.
    #[error("invalid signal length {len}: expected a non-zero power of two")]
    InvalidLength {
        /// length of the rejected signal
        len: usize,
    },
    /// The recursive transform was called on a length that cannot be split evenly down to 1.
    #[error("recursive FFT requires a power-of-two length, got {len}")]
    PreconditionViolated {
        /// length of the rejected signal
        len: usize,
    },
    /// Two signals that must be compared sample by sample have different lengths.
    #[error("mismatched signal lengths: expected {expected}, got {actual}")]
    MismatchedLengths {
        /// length of the reference signal
        expected: usize,
        /// length of the signal compared against it
        actual: usize,
    },
}
