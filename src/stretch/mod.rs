//! The analysis / phase-tracking / synthesis pipeline.

pub mod analysis;
pub mod phase;
pub mod synthesis;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::fft::FftEngine;
use crate::core::spectrum::PolarFrame;
use crate::core::types::{Algorithm, Sample, StretchConfig};
use crate::core::window::generate_window;
use crate::error::StretchError;

pub use analysis::{analyze, frame_count};
pub use phase::{randomize_phases, recalculate_phases};
pub use synthesis::{synthesize, synthesize_into};

/// The time-stretch engine.
///
/// Owns the transform tables and the window table for one configuration;
/// both are immutable after construction, so a `Stretcher` can be shared
/// across threads and reused for any number of signals. Each call
/// operates on caller-owned buffers and performs no I/O.
#[derive(Debug, Clone)]
pub struct Stretcher {
    config: StretchConfig,
    fft: FftEngine,
    window: Vec<Sample>,
}

impl Stretcher {
    /// Builds an engine from a validated configuration.
    ///
    /// Validation happens here, once; the per-call paths assume a valid
    /// config.
    ///
    /// # Errors
    ///
    /// Any of the configuration errors from
    /// [`StretchConfig::validate`].
    pub fn new(config: StretchConfig) -> Result<Self, StretchError> {
        config.validate()?;
        let fft = FftEngine::new(config.fft_size)?;
        let window = generate_window(config.window, config.fft_size);
        log::debug!(
            "stretcher ready: fft_size={} hop={} factor={} algorithm={:?}",
            config.fft_size,
            config.effective_hop_size(),
            config.factor,
            config.algorithm
        );
        Ok(Self {
            config,
            fft,
            window,
        })
    }

    /// The engine's configuration.
    #[inline]
    pub fn config(&self) -> &StretchConfig {
        &self.config
    }

    /// The engine's transform tables.
    #[inline]
    pub fn fft(&self) -> &FftEngine {
        &self.fft
    }

    /// Analyzes a signal into polar frames.
    ///
    /// A signal shorter than one frame yields an empty sequence.
    pub fn analyze(&self, signal: &[Sample]) -> Vec<PolarFrame> {
        analysis::analyze(
            signal,
            &self.window,
            &self.fft,
            self.config.effective_hop_size(),
        )
    }

    /// Resynthesizes a frame sequence produced by [`Stretcher::analyze`]
    /// (and typically rewritten by the phase tracker).
    ///
    /// # Errors
    ///
    /// [`StretchError::EmptyFrames`] for an empty sequence,
    /// [`StretchError::LengthMismatch`] for frames of the wrong size.
    pub fn synthesize(&self, frames: &[PolarFrame]) -> Result<Vec<Sample>, StretchError> {
        synthesis::synthesize(
            frames,
            &self.fft,
            self.config.effective_hop_size(),
            self.config.factor,
        )
    }

    /// Like [`Stretcher::synthesize`], writing into a caller-supplied
    /// buffer.
    pub fn synthesize_into(
        &self,
        frames: &[PolarFrame],
        output: &mut Vec<Sample>,
    ) -> Result<(), StretchError> {
        synthesis::synthesize_into(
            frames,
            &self.fft,
            self.config.effective_hop_size(),
            self.config.factor,
            output,
        )
    }

    /// Runs the full pipeline: analysis, phase tracking, synthesis.
    ///
    /// Returns an empty signal (not an error) when the input is too
    /// short to produce a single frame.
    pub fn process(&self, input: &[Sample]) -> Result<Vec<Sample>, StretchError> {
        self.process_with(input, |_, _| {})
    }

    /// Runs the full pipeline with a spectral hook.
    ///
    /// The hook runs between analysis and phase tracking and may mutate
    /// the frames in place; this is the seam external effect chains plug
    /// into.
    pub fn process_with<F>(&self, input: &[Sample], mut hook: F) -> Result<Vec<Sample>, StretchError>
    where
        F: FnMut(&mut [PolarFrame], &StretchConfig),
    {
        let mut frames = self.analyze(input);
        log::debug!(
            "processing {} samples -> {} frames",
            input.len(),
            frames.len()
        );
        if frames.is_empty() {
            return Ok(Vec::new());
        }

        hook(&mut frames, &self.config);

        match self.config.algorithm {
            Algorithm::PhaseVocoder => phase::recalculate_phases(&mut frames, &self.config),
            Algorithm::PaulStretch => {
                let mut rng = match self.config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                phase::randomize_phases(&mut frames, &mut rng);
            }
        }

        self.synthesize(&frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::window::WindowType;

    fn sine(freq: f32, sample_rate: u32, n: usize) -> Vec<Sample> {
        (0..n)
            .map(|i| (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate as f32).sin())
            .collect()
    }

    #[test]
    fn test_new_validates_config() {
        assert!(Stretcher::new(StretchConfig::new(1.0).with_fft_size(100)).is_err());
        assert!(Stretcher::new(StretchConfig::new(0.0)).is_err());
        assert!(Stretcher::new(StretchConfig::new(1.0)).is_ok());
    }

    #[test]
    fn test_short_input_yields_empty_output() {
        let stretcher = Stretcher::new(
            StretchConfig::new(2.0).with_fft_size(1024).with_hop_size(256),
        )
        .unwrap();
        let output = stretcher.process(&vec![0.5; 1023]).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_output_length_matches_law() {
        let config = StretchConfig::new(2.0)
            .with_fft_size(256)
            .with_hop_size(128)
            .with_sample_rate(8000);
        let stretcher = Stretcher::new(config).unwrap();

        let input = sine(500.0, 8000, 2048);
        let output = stretcher.process(&input).unwrap();

        let num_frames = (2048 - 256) / 128;
        assert_eq!(output.len(), num_frames * 256 + 256);
    }

    #[test]
    fn test_hook_runs_between_analysis_and_tracking() {
        let config = StretchConfig::new(1.0)
            .with_fft_size(256)
            .with_hop_size(128)
            .with_sample_rate(8000);
        let stretcher = Stretcher::new(config).unwrap();
        let input = sine(500.0, 8000, 2048);

        // Muting every magnitude through the hook must silence the output.
        let output = stretcher
            .process_with(&input, |frames, _| {
                for frame in frames.iter_mut() {
                    frame.magnitudes.iter_mut().for_each(|m| *m = 0.0);
                }
            })
            .unwrap();
        assert!(!output.is_empty());
        assert!(output.iter().all(|&s| s.abs() < 1e-6));
    }

    #[test]
    fn test_hook_sees_config() {
        let config = StretchConfig::new(1.0)
            .with_fft_size(256)
            .with_hop_size(64)
            .with_sample_rate(8000);
        let stretcher = Stretcher::new(config).unwrap();
        let input = sine(500.0, 8000, 1024);

        let mut seen = None;
        stretcher
            .process_with(&input, |frames, cfg| {
                seen = Some((frames.len(), cfg.fft_size, cfg.effective_hop_size()));
            })
            .unwrap();
        assert_eq!(seen, Some(((1024 - 256) / 64, 256, 64)));
    }

    #[test]
    fn test_paul_stretch_deterministic_with_seed() {
        let base = StretchConfig::new(4.0)
            .with_fft_size(256)
            .with_hop_size(64)
            .with_sample_rate(8000)
            .with_window(WindowType::Hann)
            .with_algorithm(Algorithm::PaulStretch);
        let input = sine(440.0, 8000, 2048);

        let a = Stretcher::new(base.clone().with_seed(11))
            .unwrap()
            .process(&input)
            .unwrap();
        let b = Stretcher::new(base.clone().with_seed(11))
            .unwrap()
            .process(&input)
            .unwrap();
        assert_eq!(a, b);

        let c = Stretcher::new(base.with_seed(12))
            .unwrap()
            .process(&input)
            .unwrap();
        assert_eq!(a.len(), c.len());
        assert_ne!(a, c);
    }

    #[test]
    fn test_engine_is_reusable() {
        let stretcher = Stretcher::new(
            StretchConfig::new(1.5)
                .with_fft_size(256)
                .with_hop_size(128)
                .with_sample_rate(8000),
        )
        .unwrap();

        let input = sine(440.0, 8000, 2048);
        let first = stretcher.process(&input).unwrap();
        let second = stretcher.process(&input).unwrap();
        assert_eq!(first, second);
    }
}
