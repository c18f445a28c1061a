//! Overlap-add resynthesis.
//!
//! Converts each polar frame back to the time domain (polar to
//! rectangular, inverse transform, inverse zero-phase shift) and adds it
//! into the output at the running write position. Successive frames are
//! spaced by the synthesis hop, so overlapping regions sum, which is
//! what reconstructs a continuous signal from windowed frames.

use crate::core::fft::FftEngine;
use crate::core::shift::ifftshift;
use crate::core::spectrum::{ComplexFrame, PolarFrame};
use crate::core::types::Sample;
use crate::error::StretchError;

/// Resynthesizes a frame sequence into a freshly allocated signal.
///
/// # Errors
///
/// Returns [`StretchError::EmptyFrames`] when `frames` is empty, or
/// [`StretchError::LengthMismatch`] if a frame's arrays differ from the
/// engine's transform size.
pub fn synthesize(
    frames: &[PolarFrame],
    fft: &FftEngine,
    hop: usize,
    factor: f64,
) -> Result<Vec<Sample>, StretchError> {
    let mut output = Vec::new();
    synthesize_into(frames, fft, hop, factor, &mut output)?;
    Ok(output)
}

/// Resynthesizes a frame sequence into a caller-supplied buffer.
///
/// The buffer is cleared and zero-filled to
/// `frames.len() * synthesis_hop + size` before the overlap-add pass,
/// where `synthesis_hop = round(hop * factor)` (never below one sample).
pub fn synthesize_into(
    frames: &[PolarFrame],
    fft: &FftEngine,
    hop: usize,
    factor: f64,
    output: &mut Vec<Sample>,
) -> Result<(), StretchError> {
    if frames.is_empty() {
        return Err(StretchError::EmptyFrames);
    }
    let size = fft.size();
    for frame in frames {
        if frame.magnitudes.len() != size || frame.phases.len() != size {
            return Err(StretchError::LengthMismatch {
                expected: size,
                actual: frame.magnitudes.len().min(frame.phases.len()),
            });
        }
    }

    let step = ((hop as f64 * factor).round() as usize).max(1);
    output.clear();
    output.resize(frames.len() * step + size, 0.0);

    let mut spectrum = ComplexFrame::zeroed(size);
    let mut time = ComplexFrame::zeroed(size);
    let mut pos = 0;
    for frame in frames {
        frame.write_complex(&mut spectrum);
        fft.inverse_unchecked(&spectrum, &mut time);
        ifftshift(&mut time.re);

        for (out, &sample) in output[pos..pos + size].iter_mut().zip(time.re.iter()) {
            *out += sample;
        }
        pos += step;
    }
    Ok(())
}
