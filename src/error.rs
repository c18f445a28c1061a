//! Error types for the phasestretch crate.

use std::fmt;

/// Errors that can occur while configuring or running the engine.
///
/// All errors are detected synchronously at the offending call and are
/// deterministic: retrying the same call with the same inputs fails the
/// same way. Degenerate-but-valid inputs (a signal shorter than one
/// frame, a config that yields zero frames) produce empty results, not
/// errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StretchError {
    /// Transform size must be a power of two (and at least 2).
    InvalidFftSize(usize),
    /// Hop size must be nonzero and smaller than the transform size.
    InvalidHopSize { hop: usize, fft_size: usize },
    /// Sample rate must be positive.
    InvalidSampleRate(u32),
    /// Stretch factor must be positive and finite.
    InvalidFactor(String),
    /// Synthesis requires at least one analysis frame.
    EmptyFrames,
    /// A supplied buffer's length differs from the configured transform size.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for StretchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StretchError::InvalidFftSize(size) => {
                write!(f, "invalid FFT size: {}. Must be a power of two >= 2.", size)
            }
            StretchError::InvalidHopSize { hop, fft_size } => {
                write!(
                    f,
                    "invalid hop size: {} (FFT size {}). Must satisfy 0 < hop < FFT size.",
                    hop, fft_size
                )
            }
            StretchError::InvalidSampleRate(rate) => {
                write!(f, "invalid sample rate: {}. Must be greater than 0.", rate)
            }
            StretchError::InvalidFactor(factor) => {
                write!(
                    f,
                    "invalid stretch factor: {}. Must be positive and finite.",
                    factor
                )
            }
            StretchError::EmptyFrames => {
                write!(f, "synthesis input required: frame sequence is empty")
            }
            StretchError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "buffer length mismatch: expected {} samples, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for StretchError {}
