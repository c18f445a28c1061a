#![forbid(unsafe_code)]
//! STFT phase vocoder for stretching audio in time without changing its
//! pitch.
//!
//! `phasestretch` slices a signal into overlapping windowed frames,
//! transforms each with a self-contained radix-2 FFT, rewrites the
//! per-bin phase trajectories for the requested stretch factor, and
//! rebuilds the signal by overlap-add. A paul-stretch mode swaps the
//! phase tracking for randomized phases, trading coherence for
//! stability under extreme factors. The engine is deterministic,
//! synchronous, and allocation-free on its transform hot path, so it
//! behaves identically whether driven from a file batch job, a test
//! harness, or a real-time callback.
//!
//! # Quick Start
//!
//! ```
//! use phasestretch::{stretch, StretchConfig};
//!
//! // 1 second of 440 Hz sine at 44.1 kHz
//! let input: Vec<f32> = (0..44100)
//!     .map(|i| (2.0 * std::f32::consts::PI * 440.0 * i as f32 / 44100.0).sin())
//!     .collect();
//!
//! // Stretch to 1.5x duration at the same pitch
//! let config = StretchConfig::new(1.5).with_sample_rate(44100);
//! let output = stretch(&input, &config).unwrap();
//! assert!(output.len() > input.len());
//! ```
//!
//! # Spectral hook
//!
//! An optional hook runs between analysis and phase tracking and may
//! edit frames in place — the seam through which pitch shifters,
//! formant filters, and other spectral effects plug in:
//!
//! ```
//! use phasestretch::{stretch_with, StretchConfig};
//!
//! let input: Vec<f32> = (0..8192)
//!     .map(|i| (2.0 * std::f32::consts::PI * 220.0 * i as f32 / 8000.0).sin())
//!     .collect();
//! let config = StretchConfig::new(1.0)
//!     .with_fft_size(1024)
//!     .with_sample_rate(8000);
//!
//! // Halve every magnitude: a -6 dB spectral gain
//! let output = stretch_with(&input, &config, |frames, _| {
//!     for frame in frames.iter_mut() {
//!         for mag in frame.magnitudes.iter_mut() {
//!             *mag *= 0.5;
//!         }
//!     }
//! })
//! .unwrap();
//! assert!(!output.is_empty());
//! ```

pub mod core;
pub mod error;
pub mod stretch;

pub use crate::core::fft::FftEngine;
pub use crate::core::spectrum::{band_frequency, band_width, ComplexFrame, PolarFrame};
pub use crate::core::types::{Algorithm, Sample, StretchConfig};
pub use crate::core::window::WindowType;
pub use crate::error::StretchError;
pub use crate::stretch::Stretcher;

/// Stretches a mono signal by the configured factor.
///
/// One-shot convenience over [`Stretcher`]: builds the engine, runs the
/// pipeline once, and discards the tables. Reuse a [`Stretcher`] when
/// processing many signals with one configuration.
///
/// A signal shorter than one frame yields an empty output, not an
/// error.
///
/// # Errors
///
/// Configuration errors from [`StretchConfig::validate`].
pub fn stretch(input: &[Sample], config: &StretchConfig) -> Result<Vec<Sample>, StretchError> {
    Stretcher::new(config.clone())?.process(input)
}

/// Stretches a mono signal, running `hook` on the analyzed frames
/// before phase tracking.
///
/// See [`Stretcher::process_with`].
///
/// # Errors
///
/// Configuration errors from [`StretchConfig::validate`].
pub fn stretch_with<F>(
    input: &[Sample],
    config: &StretchConfig,
    hook: F,
) -> Result<Vec<Sample>, StretchError>
where
    F: FnMut(&mut [PolarFrame], &StretchConfig),
{
    Stretcher::new(config.clone())?.process_with(input, hook)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time assertions that the engine types are Send + Sync;
    // shared transform tables must be usable from an audio thread.
    const _: () = {
        fn assert_send_sync<T: Send + Sync>() {}
        fn check() {
            assert_send_sync::<Stretcher>();
            assert_send_sync::<FftEngine>();
            assert_send_sync::<StretchConfig>();
            assert_send_sync::<ComplexFrame>();
            assert_send_sync::<PolarFrame>();
            assert_send_sync::<StretchError>();
        }
        let _ = check;
    };

    #[test]
    fn test_stretch_empty_input() {
        let config = StretchConfig::new(1.5);
        let output = stretch(&[], &config).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_stretch_invalid_config() {
        let config = StretchConfig::new(0.0);
        assert!(stretch(&[0.0; 8192], &config).is_err());
    }

    #[test]
    fn test_stretch_mono_sine() {
        let sample_rate = 8000u32;
        let input: Vec<f32> = (0..sample_rate as usize)
            .map(|i| (2.0 * std::f32::consts::PI * 440.0 * i as f32 / sample_rate as f32).sin())
            .collect();

        let config = StretchConfig::new(1.5)
            .with_fft_size(1024)
            .with_sample_rate(sample_rate);
        let output = stretch(&input, &config).unwrap();
        assert!(!output.is_empty());

        let len_ratio = output.len() as f64 / input.len() as f64;
        assert!(
            (len_ratio - 1.5).abs() < 0.2,
            "length ratio {} too far from 1.5",
            len_ratio
        );
    }

    #[test]
    fn test_stretch_with_identity_hook_matches_plain() {
        let input: Vec<f32> = (0..4096)
            .map(|i| (2.0 * std::f32::consts::PI * 330.0 * i as f32 / 8000.0).sin())
            .collect();
        let config = StretchConfig::new(1.25)
            .with_fft_size(512)
            .with_sample_rate(8000);

        let plain = stretch(&input, &config).unwrap();
        let hooked = stretch_with(&input, &config, |_, _| {}).unwrap();
        assert_eq!(plain, hooked);
    }
}
