//! Zero-phase cyclic shifts.
//!
//! `fftshift` rotates a windowed frame so the window's temporal center
//! lands on sample index 0 before the forward transform, removing the
//! linear phase ramp that would otherwise corrupt per-bin phase
//! processing. `ifftshift` undoes the rotation after the inverse
//! transform, ahead of overlap-add.

/// Rotates `buf` left by `mid` positions using three in-place reversals.
///
/// O(n) time, O(1) extra space.
#[inline]
fn rotate_left<T>(buf: &mut [T], mid: usize) {
    if buf.is_empty() {
        return;
    }
    let mid = mid % buf.len();
    buf[..mid].reverse();
    buf[mid..].reverse();
    buf.reverse();
}

/// Rotates a buffer in place by `floor(n / 2)`, aligning the center of
/// the frame with index 0.
#[inline]
pub fn fftshift<T>(buf: &mut [T]) {
    let mid = buf.len() / 2;
    rotate_left(buf, mid);
}

/// Exact inverse of [`fftshift`] for any length: rotates in place by
/// `floor((n + 1) / 2)`.
#[inline]
pub fn ifftshift<T>(buf: &mut [T]) {
    let mid = (buf.len() + 1) / 2;
    rotate_left(buf, mid);
}
