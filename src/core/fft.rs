//! Radix-2 Cooley-Tukey FFT with precomputed tables.
//!
//! An [`FftEngine`] is constructed once per transform size and owns the
//! bit-reversal permutation and per-stage twiddle tables. After
//! construction the engine is immutable, so a single instance can be
//! shared freely across concurrent transforms. The transform itself
//! performs no allocation when the caller supplies full-size output
//! buffers, keeping the hot path viable inside a real-time budget.
//!
//! The inverse transform conjugates its input, runs the same butterfly
//! kernel, and divides every output sample by the transform size, so
//! `inverse(forward(x))` reproduces `x` up to rounding.

use std::f64::consts::PI;

use crate::core::spectrum::ComplexFrame;
use crate::core::types::Sample;
use crate::error::StretchError;

/// Precomputed-table radix-2 FFT for one fixed power-of-two size.
#[derive(Debug, Clone)]
pub struct FftEngine {
    size: usize,
    /// Bit-reversal permutation applied while loading input.
    reverse: Vec<usize>,
    /// Per-stage twiddle bases: `cos(-pi / i)` indexed by stage width.
    cos_table: Vec<f64>,
    /// Per-stage twiddle bases: `sin(-pi / i)` indexed by stage width.
    sin_table: Vec<f64>,
}

impl FftEngine {
    /// Creates an engine for the given transform size.
    ///
    /// # Errors
    ///
    /// Returns [`StretchError::InvalidFftSize`] unless `size` is a power
    /// of two no smaller than 2.
    pub fn new(size: usize) -> Result<Self, StretchError> {
        if size < 2 || !size.is_power_of_two() {
            return Err(StretchError::InvalidFftSize(size));
        }

        let mut reverse = vec![0usize; size];
        let mut limit = 1;
        let mut bit = size >> 1;
        while limit < size {
            for i in 0..limit {
                reverse[i + limit] = reverse[i] + bit;
            }
            limit <<= 1;
            bit >>= 1;
        }

        // Index 0 is never consulted: stage widths start at 1.
        let mut cos_table = vec![0.0f64; size];
        let mut sin_table = vec![0.0f64; size];
        for (i, (cos, sin)) in cos_table
            .iter_mut()
            .zip(sin_table.iter_mut())
            .enumerate()
            .skip(1)
        {
            let angle = -PI / i as f64;
            *cos = angle.cos();
            *sin = angle.sin();
        }

        Ok(Self {
            size,
            reverse,
            cos_table,
            sin_table,
        })
    }

    /// The transform size this engine was built for.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Forward transform of a real signal.
    ///
    /// # Errors
    ///
    /// Returns [`StretchError::LengthMismatch`] if `input.len() != size`.
    pub fn forward(&self, input: &[Sample]) -> Result<ComplexFrame, StretchError> {
        let mut out = ComplexFrame::zeroed(self.size);
        self.forward_into(input, &mut out)?;
        Ok(out)
    }

    /// Forward transform of a real signal into a caller-supplied frame.
    ///
    /// `out` may be shorter than the transform size; only the overlap is
    /// written. Real signals have conjugate-symmetric spectra, so a
    /// caller can keep just the first `size / 2 + 1` bins. With a
    /// full-size `out` the transform runs in place with no allocation.
    pub fn forward_into(
        &self,
        input: &[Sample],
        out: &mut ComplexFrame,
    ) -> Result<(), StretchError> {
        self.check_len(input.len())?;
        self.process_into(input, None, false, false, out);
        Ok(())
    }

    /// Forward transform of a complex frame.
    ///
    /// # Errors
    ///
    /// Returns [`StretchError::LengthMismatch`] if either part of the
    /// input differs from the transform size.
    pub fn forward_frame(&self, frame: &ComplexFrame) -> Result<ComplexFrame, StretchError> {
        let mut out = ComplexFrame::zeroed(self.size);
        self.forward_frame_into(frame, &mut out)?;
        Ok(out)
    }

    /// Forward transform of a complex frame into a caller-supplied frame,
    /// with the same partial-write contract as [`FftEngine::forward_into`].
    pub fn forward_frame_into(
        &self,
        frame: &ComplexFrame,
        out: &mut ComplexFrame,
    ) -> Result<(), StretchError> {
        self.check_len(frame.re.len())?;
        self.check_len(frame.im.len())?;
        self.process_into(&frame.re, Some(&frame.im), false, false, out);
        Ok(())
    }

    /// Inverse transform of a complex frame.
    ///
    /// # Errors
    ///
    /// Returns [`StretchError::LengthMismatch`] if either part of the
    /// input differs from the transform size.
    pub fn inverse(&self, frame: &ComplexFrame) -> Result<ComplexFrame, StretchError> {
        let mut out = ComplexFrame::zeroed(self.size);
        self.inverse_into(frame, &mut out)?;
        Ok(out)
    }

    /// Inverse transform into a caller-supplied frame, with the same
    /// partial-write contract as [`FftEngine::forward_into`].
    ///
    /// For a spectrum of a real signal the time-domain result is the
    /// `re` part; `im` comes out at rounding-noise level.
    pub fn inverse_into(
        &self,
        frame: &ComplexFrame,
        out: &mut ComplexFrame,
    ) -> Result<(), StretchError> {
        self.check_len(frame.re.len())?;
        self.check_len(frame.im.len())?;
        self.process_into(&frame.re, Some(&frame.im), true, true, out);
        Ok(())
    }

    /// Pipeline fast path: forward transform of a real frame whose length
    /// is guaranteed by construction.
    pub(crate) fn forward_real_unchecked(&self, input: &[Sample], out: &mut ComplexFrame) {
        debug_assert_eq!(input.len(), self.size);
        self.process_into(input, None, false, false, out);
    }

    /// Pipeline fast path: inverse transform of a frame whose length is
    /// guaranteed by construction.
    pub(crate) fn inverse_unchecked(&self, frame: &ComplexFrame, out: &mut ComplexFrame) {
        debug_assert_eq!(frame.re.len(), self.size);
        debug_assert_eq!(frame.im.len(), self.size);
        self.process_into(&frame.re, Some(&frame.im), true, true, out);
    }

    #[inline]
    fn check_len(&self, len: usize) -> Result<(), StretchError> {
        if len != self.size {
            return Err(StretchError::LengthMismatch {
                expected: self.size,
                actual: len,
            });
        }
        Ok(())
    }

    fn process_into(
        &self,
        src_re: &[Sample],
        src_im: Option<&[Sample]>,
        conjugate: bool,
        normalize: bool,
        out: &mut ComplexFrame,
    ) {
        if out.re.len() == self.size && out.im.len() == self.size {
            self.load(src_re, src_im, conjugate, &mut out.re, &mut out.im);
            self.butterflies(&mut out.re, &mut out.im);
            if normalize {
                scale(&mut out.re, &mut out.im, 1.0 / self.size as f32);
            }
        } else {
            // Truncated output: compute in a full-size scratch, then copy
            // the overlap.
            let mut re = vec![0.0; self.size];
            let mut im = vec![0.0; self.size];
            self.load(src_re, src_im, conjugate, &mut re, &mut im);
            self.butterflies(&mut re, &mut im);
            if normalize {
                scale(&mut re, &mut im, 1.0 / self.size as f32);
            }
            let n_re = out.re.len().min(self.size);
            out.re[..n_re].copy_from_slice(&re[..n_re]);
            let n_im = out.im.len().min(self.size);
            out.im[..n_im].copy_from_slice(&im[..n_im]);
        }
    }

    /// Loads the source into working buffers in bit-reversed order,
    /// optionally conjugating on the way in.
    fn load(
        &self,
        src_re: &[Sample],
        src_im: Option<&[Sample]>,
        conjugate: bool,
        re: &mut [Sample],
        im: &mut [Sample],
    ) {
        match src_im {
            None => {
                for (i, &r) in self.reverse.iter().enumerate() {
                    re[i] = src_re[r];
                    im[i] = 0.0;
                }
            }
            Some(src_im) => {
                let sign: Sample = if conjugate { -1.0 } else { 1.0 };
                for (i, &r) in self.reverse.iter().enumerate() {
                    re[i] = src_re[r];
                    im[i] = sign * src_im[r];
                }
            }
        }
    }

    /// Iterative butterfly passes over bit-reversed data.
    ///
    /// Twiddles are rotated incrementally from the per-stage base angle;
    /// the rotation runs in f64 so the recurrence does not drift across
    /// wide stages.
    fn butterflies(&self, re: &mut [Sample], im: &mut [Sample]) {
        let size = self.size;
        let mut half = 1;
        while half < size {
            let step_cos = self.cos_table[half];
            let step_sin = self.sin_table[half];
            let mut cur_cos = 1.0f64;
            let mut cur_sin = 0.0f64;

            for step in 0..half {
                let (w_re, w_im) = (cur_cos as f32, cur_sin as f32);
                let mut i = step;
                while i < size {
                    let off = i + half;
                    let t_re = w_re * re[off] - w_im * im[off];
                    let t_im = w_re * im[off] + w_im * re[off];
                    re[off] = re[i] - t_re;
                    im[off] = im[i] - t_im;
                    re[i] += t_re;
                    im[i] += t_im;
                    i += half << 1;
                }
                let prev_cos = cur_cos;
                cur_cos = prev_cos * step_cos - cur_sin * step_sin;
                cur_sin = prev_cos * step_sin + cur_sin * step_cos;
            }
            half <<= 1;
        }
    }
}

#[inline]
fn scale(re: &mut [Sample], im: &mut [Sample], factor: Sample) {
    for v in re.iter_mut() {
        *v *= factor;
    }
    for v in im.iter_mut() {
        *v *= factor;
    }
}
