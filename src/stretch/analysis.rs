//! Sliding-window spectral analysis.
//!
//! Slices the input signal into overlapping frames, windows each frame,
//! applies the zero-phase shift, runs the forward transform, and stores
//! the result in polar form. Each produced frame owns independent
//! storage; nothing aliases the input signal.

use crate::core::fft::FftEngine;
use crate::core::shift::fftshift;
use crate::core::spectrum::{ComplexFrame, PolarFrame};
use crate::core::types::Sample;
use crate::core::window::apply_window;

/// Number of complete frames available from a signal: `(len - size) / hop`,
/// or zero when the signal is shorter than one frame.
#[inline]
pub fn frame_count(signal_len: usize, size: usize, hop: usize) -> usize {
    if signal_len < size || hop == 0 {
        0
    } else {
        (signal_len - size) / hop
    }
}

/// Analyzes `signal` into a sequence of polar frames.
///
/// `window` must be a table of the engine's transform size; a signal
/// shorter than one frame yields an empty sequence, never an error.
pub fn analyze(
    signal: &[Sample],
    window: &[Sample],
    fft: &FftEngine,
    hop: usize,
) -> Vec<PolarFrame> {
    let size = fft.size();
    let num_frames = frame_count(signal.len(), size, hop);
    let mut frames = Vec::with_capacity(num_frames);
    if num_frames == 0 {
        return frames;
    }

    let mut scratch = vec![0.0; size];
    let mut spectrum = ComplexFrame::zeroed(size);
    for i in 0..num_frames {
        let start = i * hop;
        scratch.copy_from_slice(&signal[start..start + size]);
        apply_window(&mut scratch, window);
        fftshift(&mut scratch);
        fft.forward_real_unchecked(&scratch, &mut spectrum);

        let mut frame = PolarFrame::zeroed(size);
        spectrum.write_polar(&mut frame);
        frames.push(frame);
    }
    frames
}
