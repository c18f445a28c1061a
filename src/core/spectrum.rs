//! Frequency-domain frame representations.
//!
//! A frame exists in one of two forms: rectangular ([`ComplexFrame`],
//! parallel real/imaginary arrays) straight out of the transform, or
//! polar ([`PolarFrame`], magnitude/phase arrays) for phase processing.
//! Magnitude and phase fully determine the complex pair, so conversion
//! round-trips up to floating-point rounding.

use crate::core::types::Sample;

/// One frequency-domain frame in rectangular form.
///
/// `re` and `im` always have equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexFrame {
    pub re: Vec<Sample>,
    pub im: Vec<Sample>,
}

impl ComplexFrame {
    /// Creates a zero-filled frame of the given length.
    pub fn zeroed(len: usize) -> Self {
        Self {
            re: vec![0.0; len],
            im: vec![0.0; len],
        }
    }

    /// Creates a frame from existing real/imaginary parts.
    ///
    /// # Panics
    /// Panics if the parts differ in length.
    pub fn new(re: Vec<Sample>, im: Vec<Sample>) -> Self {
        assert_eq!(re.len(), im.len(), "real/imaginary length mismatch");
        Self { re, im }
    }

    /// Number of bins in the frame.
    #[inline]
    pub fn len(&self) -> usize {
        self.re.len()
    }

    /// Returns true if the frame holds no bins.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    /// Converts to polar form: magnitude `sqrt(re^2 + im^2)`, phase
    /// `atan2(im, re)` in `(-pi, pi]`.
    pub fn to_polar(&self) -> PolarFrame {
        let magnitudes = self
            .re
            .iter()
            .zip(self.im.iter())
            .map(|(&re, &im)| (re * re + im * im).sqrt())
            .collect();
        let phases = self
            .re
            .iter()
            .zip(self.im.iter())
            .map(|(&re, &im)| im.atan2(re))
            .collect();
        PolarFrame { magnitudes, phases }
    }

    /// Converts to polar form into an existing frame of the same length.
    pub fn write_polar(&self, out: &mut PolarFrame) {
        debug_assert_eq!(self.len(), out.len());
        for b in 0..self.len() {
            let (re, im) = (self.re[b], self.im[b]);
            out.magnitudes[b] = (re * re + im * im).sqrt();
            out.phases[b] = im.atan2(re);
        }
    }
}

/// One frequency-domain frame in polar form.
///
/// Phases are whatever `atan2` produced, in `(-pi, pi]`, until the phase
/// tracker rewrites them; recomputed phases are unbounded accumulators.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarFrame {
    pub magnitudes: Vec<Sample>,
    pub phases: Vec<Sample>,
}

impl PolarFrame {
    /// Creates a zero-filled frame of the given length.
    pub fn zeroed(len: usize) -> Self {
        Self {
            magnitudes: vec![0.0; len],
            phases: vec![0.0; len],
        }
    }

    /// Number of bins in the frame.
    #[inline]
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    /// Returns true if the frame holds no bins.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Converts to rectangular form: `re = mag * cos(phase)`,
    /// `im = mag * sin(phase)`.
    pub fn to_complex(&self) -> ComplexFrame {
        let mut out = ComplexFrame::zeroed(self.len());
        self.write_complex(&mut out);
        out
    }

    /// Converts to rectangular form into an existing frame of the same
    /// length, without allocating.
    pub fn write_complex(&self, out: &mut ComplexFrame) {
        debug_assert_eq!(self.len(), out.len());
        for b in 0..self.len() {
            let (sin, cos) = self.phases[b].sin_cos();
            out.re[b] = self.magnitudes[b] * cos;
            out.im[b] = self.magnitudes[b] * sin;
        }
    }
}

/// Width in Hz of one transform bin: `sample_rate / size`.
#[inline]
pub fn band_width(size: usize, sample_rate: u32) -> f64 {
    sample_rate as f64 / size as f64
}

/// Nominal center frequency in Hz of bin `index`: the band's midpoint,
/// `band_width * index + band_width / 2`.
#[inline]
pub fn band_frequency(size: usize, sample_rate: u32, index: usize) -> f64 {
    let width = band_width(size, sample_rate);
    width * index as f64 + width / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_lengths() {
        let frame = ComplexFrame::zeroed(8);
        assert_eq!(frame.len(), 8);
        assert!(frame.re.iter().all(|&x| x == 0.0));
        assert!(frame.im.iter().all(|&x| x == 0.0));

        let polar = PolarFrame::zeroed(8);
        assert_eq!(polar.len(), 8);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn test_new_rejects_mismatched_parts() {
        ComplexFrame::new(vec![0.0; 4], vec![0.0; 3]);
    }

    #[test]
    fn test_polar_conversion_known_values() {
        let frame = ComplexFrame::new(vec![3.0, 0.0, -1.0], vec![4.0, 2.0, 0.0]);
        let polar = frame.to_polar();
        assert!((polar.magnitudes[0] - 5.0).abs() < 1e-6);
        assert!((polar.phases[1] - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((polar.phases[2] - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_polar_round_trip() {
        let frame = ComplexFrame::new(
            vec![1.0, -0.5, 0.25, 0.0, -3.75, 2.5, -0.125, 0.875],
            vec![0.5, 1.5, -2.25, -1.0, 0.0, -0.625, 3.0, -0.375],
        );
        let back = frame.to_polar().to_complex();
        for b in 0..frame.len() {
            assert!((frame.re[b] - back.re[b]).abs() < 1e-5, "re bin {}", b);
            assert!((frame.im[b] - back.im[b]).abs() < 1e-5, "im bin {}", b);
        }
    }

    #[test]
    fn test_write_variants_match_allocating_ones() {
        let frame = ComplexFrame::new(vec![0.5, -1.5, 2.0], vec![-0.5, 0.75, 1.25]);
        let mut polar = PolarFrame::zeroed(3);
        frame.write_polar(&mut polar);
        assert_eq!(polar, frame.to_polar());

        let mut rect = ComplexFrame::zeroed(3);
        polar.write_complex(&mut rect);
        assert_eq!(rect, polar.to_complex());
    }

    #[test]
    fn test_band_math() {
        // 8 bins across 8 Hz: 1 Hz per band, centers at 0.5, 1.5, ...
        assert_eq!(band_width(8, 8), 1.0);
        assert_eq!(band_frequency(8, 8, 0), 0.5);
        assert_eq!(band_frequency(8, 8, 3), 3.5);

        assert_eq!(band_width(1024, 44100), 44100.0 / 1024.0);
    }
}
