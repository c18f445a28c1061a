//! Window functions for spectral analysis.
//!
//! Provides the Hann, Hamming, Blackman, and Blackman-Harris windows
//! applied to each frame before the forward transform. Windows are
//! evaluated once at engine construction into a table and applied by
//! elementwise multiplication.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::types::Sample;

/// Blackman-Harris window coefficients (4-term).
const BH_A0: f64 = 0.35875;
const BH_A1: f64 = 0.48829;
const BH_A2: f64 = 0.14128;
const BH_A3: f64 = 0.01168;

/// Conventional Blackman alpha, scaled by 1000.
pub const BLACKMAN_DEFAULT_ALPHA: u32 = 160;

/// Window function types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowType {
    Hann,
    Hamming,
    /// Alpha parameter scaled by 1000 (e.g., 160 = 0.16).
    Blackman(u32),
    BlackmanHarris,
}

/// Generates a window table of the specified type and size.
pub fn generate_window(window_type: WindowType, size: usize) -> Vec<Sample> {
    match window_type {
        WindowType::Hann => hann_window(size),
        WindowType::Hamming => hamming_window(size),
        WindowType::Blackman(alpha_1000) => blackman_window(size, alpha_1000 as f64 / 1000.0),
        WindowType::BlackmanHarris => blackman_harris_window(size),
    }
}

/// Returns `Some(trivial_window)` for degenerate sizes (0 or 1), or `None`
/// to indicate the caller should compute the full window.
#[inline]
fn trivial_window(size: usize) -> Option<Vec<Sample>> {
    match size {
        0 => Some(vec![]),
        1 => Some(vec![1.0]),
        _ => None,
    }
}

/// Generates a Hann window: `0.5 * (1 - cos(2*pi*n / (N-1)))`.
#[inline]
fn hann_window(size: usize) -> Vec<Sample> {
    if let Some(w) = trivial_window(size) {
        return w;
    }
    let n = size as f64;
    (0..size)
        .map(|i| {
            let x = (2.0 * PI * i as f64) / (n - 1.0);
            (0.5 * (1.0 - x.cos())) as Sample
        })
        .collect()
}

/// Generates a Hamming window: `0.54 - 0.46 * cos(2*pi*n / (N-1))`.
#[inline]
fn hamming_window(size: usize) -> Vec<Sample> {
    if let Some(w) = trivial_window(size) {
        return w;
    }
    let n = size as f64;
    (0..size)
        .map(|i| {
            let x = (2.0 * PI * i as f64) / (n - 1.0);
            (0.54 - 0.46 * x.cos()) as Sample
        })
        .collect()
}

/// Generates a Blackman window with the given alpha.
#[inline]
fn blackman_window(size: usize, alpha: f64) -> Vec<Sample> {
    if let Some(w) = trivial_window(size) {
        return w;
    }
    let a0 = (1.0 - alpha) / 2.0;
    let a1 = 0.5;
    let a2 = alpha / 2.0;
    let n = size as f64;
    (0..size)
        .map(|i| {
            let x = (2.0 * PI * i as f64) / (n - 1.0);
            (a0 - a1 * x.cos() + a2 * (2.0 * x).cos()) as Sample
        })
        .collect()
}

/// Generates a 4-term Blackman-Harris window.
#[inline]
fn blackman_harris_window(size: usize) -> Vec<Sample> {
    if let Some(w) = trivial_window(size) {
        return w;
    }
    let n = size as f64;
    (0..size)
        .map(|i| {
            let x = i as f64 / (n - 1.0);
            let w = BH_A0 - BH_A1 * (2.0 * PI * x).cos() + BH_A2 * (4.0 * PI * x).cos()
                - BH_A3 * (6.0 * PI * x).cos();
            w as Sample
        })
        .collect()
}

/// Applies a window table to a frame in place.
#[inline]
pub fn apply_window(frame: &mut [Sample], window: &[Sample]) {
    for (sample, &w) in frame.iter_mut().zip(window.iter()) {
        *sample *= w;
    }
}
