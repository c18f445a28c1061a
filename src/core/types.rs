//! Shared types: sample alias, algorithm selection, and engine configuration.

use serde::{Deserialize, Serialize};

use crate::core::window::WindowType;
use crate::error::StretchError;

/// A single audio sample (32-bit float, nominal range -1.0 to 1.0).
pub type Sample = f32;

/// Phase policy applied between analysis and synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// Instantaneous-frequency preservation: per-bin phase trajectories are
    /// recomputed so the locally estimated frequency survives the change of
    /// hop, keeping tonal content coherent.
    PhaseVocoder,
    /// Randomized phase: every bin of every frame gets an independent
    /// uniform phase in `[0, 2pi)`. Discards temporal coherence in exchange
    /// for stability under extreme stretch factors (texture synthesis).
    PaulStretch,
}

/// Parameters controlling analysis, phase tracking, and synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StretchConfig {
    /// Transform length in samples; must be a power of two (default: 4096).
    pub fft_size: usize,
    /// Stride between successive analysis frames (default: `fft_size / 2`).
    pub hop_size: Option<usize>,
    /// Sample rate in Hz (default: 44100).
    pub sample_rate: u32,
    /// Output/input hop ratio: > 1.0 stretches, < 1.0 compresses.
    pub factor: f64,
    /// Analysis window applied to each frame before the transform.
    pub window: WindowType,
    /// Phase policy (default: [`Algorithm::PhaseVocoder`]).
    pub algorithm: Algorithm,
    /// Seed for the paul-stretch phase generator. `None` draws from OS
    /// entropy; set a value for reproducible output.
    pub seed: Option<u64>,
}

impl StretchConfig {
    /// Creates a config with the given stretch factor and default
    /// analysis parameters.
    pub fn new(factor: f64) -> Self {
        Self {
            fft_size: 4096,
            hop_size: None,
            sample_rate: 44100,
            factor,
            window: WindowType::Hann,
            algorithm: Algorithm::PhaseVocoder,
            seed: None,
        }
    }

    /// Sets the stretch factor.
    pub fn with_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    /// Sets the transform size.
    pub fn with_fft_size(mut self, fft_size: usize) -> Self {
        self.fft_size = fft_size;
        self
    }

    /// Sets the analysis hop size.
    pub fn with_hop_size(mut self, hop_size: usize) -> Self {
        self.hop_size = Some(hop_size);
        self
    }

    /// Sets the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the analysis window.
    pub fn with_window(mut self, window: WindowType) -> Self {
        self.window = window;
        self
    }

    /// Sets the phase policy.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the seed for the paul-stretch phase generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The effective analysis hop: the configured value, or `fft_size / 2`.
    ///
    /// Half-window overlap keeps the Hann analysis windows summing to
    /// unity across hops, so overlap-add needs no extra normalization.
    #[inline]
    pub fn effective_hop_size(&self) -> usize {
        self.hop_size.unwrap_or(self.fft_size / 2)
    }

    /// Hop between synthesis frames: the analysis hop scaled by the
    /// stretch factor, rounded, never below one sample.
    #[inline]
    pub fn synthesis_hop_size(&self) -> usize {
        ((self.effective_hop_size() as f64 * self.factor).round() as usize).max(1)
    }

    /// Validates all parameters.
    ///
    /// Callers are expected to validate once at engine construction,
    /// not per call; [`crate::Stretcher::new`] does this.
    pub fn validate(&self) -> Result<(), StretchError> {
        if self.fft_size < 2 || !self.fft_size.is_power_of_two() {
            return Err(StretchError::InvalidFftSize(self.fft_size));
        }
        let hop = self.effective_hop_size();
        if hop == 0 || hop >= self.fft_size {
            return Err(StretchError::InvalidHopSize {
                hop,
                fft_size: self.fft_size,
            });
        }
        if self.sample_rate == 0 {
            return Err(StretchError::InvalidSampleRate(self.sample_rate));
        }
        if !self.factor.is_finite() || self.factor <= 0.0 {
            return Err(StretchError::InvalidFactor(self.factor.to_string()));
        }
        Ok(())
    }
}

impl Default for StretchConfig {
    fn default() -> Self {
        Self::new(1.0)
    }
}
