//! Phase tracking between analysis and synthesis.
//!
//! Two mutually exclusive policies drive the time-stretch behavior:
//!
//! * [`recalculate_phases`] implements the phase-vocoder rule. Each
//!   bin's frame-to-frame phase difference is unwrapped against the
//!   bin's nominal center frequency to recover the instantaneous
//!   frequency, and the phase trajectory is rebuilt with the hop scaled
//!   by the stretch factor. Frequency content survives the change of
//!   hop; that is the property that makes the stretch pitch-neutral.
//! * [`randomize_phases`] implements paul-stretch: every phase is
//!   replaced with an independent uniform draw, discarding coherence
//!   entirely. Useful for extreme factors where unwrapping breaks down.

use std::f64::consts::PI;

use rand::Rng;

use crate::core::spectrum::{band_frequency, PolarFrame};
use crate::core::types::{Sample, StretchConfig};

const TWO_PI: f64 = 2.0 * PI;

/// Wraps a phase value into `(-pi, pi]`.
#[inline]
fn wrap_phase(phase: f64) -> f64 {
    let p = phase + PI;
    p - (p / TWO_PI).floor() * TWO_PI - PI
}

/// Recomputes per-bin phase trajectories in place for the given stretch
/// factor.
///
/// Frames 0 and 1 keep their raw analysis phase; correction starts at
/// frame 2. Updates run in ascending frame order, so each frame chains
/// off the already-recalculated phase of its predecessor.
pub fn recalculate_phases(frames: &mut [PolarFrame], config: &StretchConfig) {
    if frames.len() < 3 {
        return;
    }

    let size = config.fft_size;
    let sample_rate = config.sample_rate;
    let hop_time = config.effective_hop_size() as f64 / sample_rate as f64;
    let stretched_hop_time = hop_time * config.factor;

    // Per-bin center frequency (rad/s) and the phase a bin sitting
    // exactly on it would advance per analysis hop.
    let center_freq: Vec<f64> = (0..size)
        .map(|b| TWO_PI * band_frequency(size, sample_rate, b))
        .collect();
    let expected_advance: Vec<f64> = center_freq.iter().map(|w| hop_time * w).collect();

    for i in 2..frames.len() {
        let (head, tail) = frames.split_at_mut(i);
        let prev = &head[i - 1];
        let cur = &mut tail[0];

        for b in 0..size {
            let prev_phase = prev.phases[b] as f64;
            let delta_phi = cur.phases[b] as f64 - prev_phase;
            // Unwrap in the phase domain, then convert to a frequency
            // offset; the deviation stays within +-pi/hop_time rad/s of
            // the bin center.
            let deviation = wrap_phase(delta_phi - expected_advance[b]) / hop_time;
            let inst_freq = center_freq[b] + deviation;
            cur.phases[b] = (prev_phase + stretched_hop_time * inst_freq) as Sample;
        }
    }
}

/// Replaces every phase of every frame with an independent uniform draw
/// from `[0, 2pi)`. Magnitudes are left untouched.
pub fn randomize_phases<R: Rng>(frames: &mut [PolarFrame], rng: &mut R) {
    for frame in frames.iter_mut() {
        for phase in frame.phases.iter_mut() {
            *phase = rng.gen::<f32>() * TWO_PI as f32;
        }
    }
}
