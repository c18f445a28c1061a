//! Transform primitives: FFT engine, frame representations, window
//! functions, and zero-phase shifts.

pub mod fft;
pub mod shift;
pub mod spectrum;
pub mod types;
pub mod window;

pub use fft::FftEngine;
pub use shift::{fftshift, ifftshift};
pub use spectrum::{band_frequency, band_width, ComplexFrame, PolarFrame};
pub use types::{Algorithm, Sample, StretchConfig};
pub use window::{apply_window, generate_window, WindowType};
