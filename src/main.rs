use std::env;
use std::f64::consts::PI;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use ctfft::{
    fft_with_opts, pad_to_size, round_trip_stats, Algorithm, Complex64, Direction, FftError,
    Options,
};
use log::{error, info};

const STEP: f64 = 0.01;

/// Largest padded length the demo accepts (2^26 points, 1 GiB of samples)
const MAX_SIZE: usize = 1 << 26;

struct Args {
    size: usize,
    /// `None` lets [`Options::guess_options`] decide from the padded length
    algorithm: Option<Algorithm>,
    print_spectrum: bool,
}

fn usage(program: &str) -> String {
    format!("Usage: {program} [size] [--recursive|--iterative] [--print]")
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args {
        size: 0,
        algorithm: None,
        print_spectrum: false,
    };

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--recursive" => parsed.algorithm = Some(Algorithm::Recursive),
            "--iterative" => parsed.algorithm = Some(Algorithm::Iterative),
            "--print" => parsed.print_spectrum = true,
            other => {
                parsed.size = usize::from_str(other)
                    .map_err(|e| format!("invalid size {other:?}: {e}"))?;
                if parsed.size > MAX_SIZE {
                    return Err(format!("size {} exceeds the maximum of {MAX_SIZE}", parsed.size));
                }
            }
        }
    }

    Ok(parsed)
}

/// `{t, sin(t)}` for `t` in `[0, 2pi]`
fn generate_signal() -> Vec<Complex64> {
    let mut signal = Vec::new();
    let mut t = 0.0;
    while t <= 2.0 * PI {
        signal.push(Complex64::new(t, t.sin()));
        t += STEP;
    }
    signal
}

fn print_spectrum(spectrum: &[Complex64]) {
    let formatted: Vec<String> = spectrum
        .iter()
        .map(|z| format!("{} + {}i", z.re, z.im))
        .collect();
    println!("[{}]", formatted.join("; "));
}

fn run(args: &Args) -> Result<(), FftError> {
    let mut signal = generate_signal();
    let num_samples = signal.len();
    pad_to_size(&mut signal, args.size)?;

    let opts = match args.algorithm {
        Some(algorithm) => Options::with_algorithm(algorithm),
        None => Options::guess_options(signal.len()),
    };
    info!(
        "{num_samples} samples padded to {} points, {:?} FFT",
        signal.len(),
        opts.algorithm
    );

    let input = signal.clone();

    let now = Instant::now();
    fft_with_opts(&mut signal, Direction::Forward, &opts)?;
    info!("forward transform: {} us", now.elapsed().as_micros());

    if args.print_spectrum {
        print_spectrum(&signal);
    }

    let now = Instant::now();
    fft_with_opts(&mut signal, Direction::Reverse, &opts)?;
    info!("inverse transform: {} us", now.elapsed().as_micros());

    let stats = round_trip_stats(&input, &signal)?;
    println!("mean squared error: {:e}", stats.mean_squared_error);
    println!("max absolute error: {:e}", stats.max_abs_error);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("ctfft", String::as_str);

    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("{msg}\n{}", usage(program));
            return ExitCode::from(2);
        }
    };

    match run(&parsed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
