#![allow(dead_code)]

use std::f32::consts::PI;

/// Generates a sine wave with a per-sample amplitude function.
pub fn gen_sine<F>(freq_hz: f32, sr: u32, n: usize, amp_fn: F) -> Vec<f32>
where
    F: Fn(usize) -> f32,
{
    (0..n)
        .map(|i| {
            let phase = 2.0 * PI * freq_hz * i as f32 / sr as f32;
            amp_fn(i) * phase.sin()
        })
        .collect()
}

/// RMS of a signal.
pub fn rms(signal: &[f32]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = signal
        .iter()
        .map(|&s| {
            let v = s as f64;
            v * v
        })
        .sum();
    (sum_sq / signal.len() as f64).sqrt()
}

/// Normalized cross-correlation between two equal-region signals.
pub fn correlation(a: &[f32], b: &[f32]) -> f64 {
    let len = a.len().min(b.len());
    if len == 0 {
        return 0.0;
    }
    let a_mean: f64 = a[..len].iter().map(|x| *x as f64).sum::<f64>() / len as f64;
    let b_mean: f64 = b[..len].iter().map(|x| *x as f64).sum::<f64>() / len as f64;

    let mut cross = 0.0f64;
    let mut a_var = 0.0f64;
    let mut b_var = 0.0f64;
    for i in 0..len {
        let ad = a[i] as f64 - a_mean;
        let bd = b[i] as f64 - b_mean;
        cross += ad * bd;
        a_var += ad * ad;
        b_var += bd * bd;
    }
    let denom = (a_var * b_var).sqrt();
    if denom < 1e-20 {
        return 0.0;
    }
    cross / denom
}

/// Max absolute difference between two signals over their overlap.
pub fn max_abs_error(a: &[f32], b: &[f32]) -> f32 {
    let len = a.len().min(b.len());
    a[..len]
        .iter()
        .zip(b[..len].iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0f32, f32::max)
}

/// Dominant frequency estimate from the zero-crossing rate.
pub fn dominant_freq_zcr(signal: &[f32], sample_rate: u32) -> f32 {
    if signal.len() < 4 {
        return 0.0;
    }
    let mut crossings = 0usize;
    for i in 1..signal.len() {
        if (signal[i] >= 0.0) != (signal[i - 1] >= 0.0) {
            crossings += 1;
        }
    }
    let duration = (signal.len() - 1) as f32 / sample_rate as f32;
    crossings as f32 / (2.0 * duration)
}

/// Deterministic pseudo-random signal in [-1, 1).
pub fn gen_noise(seed: u32, n: usize) -> Vec<f32> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            (state >> 16) as f32 / 32768.0 - 1.0
        })
        .collect()
}
