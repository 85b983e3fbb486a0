//! Runtime configuration: which transform to run, in which direction, and on how many threads.

/// Options to tune the transform depending on the hardware and input size.
///
/// Calling FFT routines without specifying options will automatically select reasonable defaults
/// depending on the input size and other factors.
///
/// You only need to tune these options if you are trying to squeeze maximum performance
/// out of a known hardware platform that you can benchmark at varying input sizes.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Which forward transform to run, and to reuse for the inverse
    pub algorithm: Algorithm,
    /// Split the two halves of the recursive transform across threads.
    ///
    /// Only has an effect with the `parallel` cargo feature enabled.
    pub parallel: bool,
    /// Smallest sub-transform length whose halves are split across threads
    pub parallel_threshold: usize,
}

/// Sub-transforms smaller than this are cheaper to run than to hand off to another thread.
const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 14;

impl Default for Options {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            parallel: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Options {
    /// Options for a signal of `input_size` points.
    ///
    /// Below `2^20` points the iterative transform is picked since it needs no scratch memory.
    /// From there on the recursive transform is picked with its halves split across threads,
    /// provided the `parallel` feature is enabled.
    pub fn guess_options(input_size: usize) -> Options {
        let mut options = Options::default();
        let n = input_size.checked_ilog2().unwrap_or(0) as usize;
        if cfg!(feature = "parallel") && n >= 20 {
            options.algorithm = Algorithm::Recursive;
            options.parallel = true;
        }
        options
    }

    /// Same as the defaults, but running `algorithm`
    pub fn with_algorithm(algorithm: Algorithm) -> Options {
        Options {
            algorithm,
            ..Options::default()
        }
    }
}

/// The forward transform implementation to run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Recursive decimation-in-time by even/odd splitting.
    /// Needs a scratch buffer the size of the input.
    Recursive,
    /// In-place transform: bit reversal permutation followed by butterfly stages.
    #[default]
    Iterative,
}

/// Forward runs the DFT; Reverse runs the inverse DFT, scaled by `1/N`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// `X[k] = sum x[n] * e^(-2*pi*i*k*n/N)`
    Forward,
    /// `x[n] = (1/N) * sum X[k] * e^(2*pi*i*k*n/N)`
    Reverse,
}
