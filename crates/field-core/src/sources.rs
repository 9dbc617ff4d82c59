use crate::constants::wave_number;
use crate::Source;
use num_complex::Complex64;
use std::f64::consts::PI;

/// An idealised point emitter radiating spherically symmetric pressure
/// waves.
#[derive(Debug, Clone)]
pub struct Monopole {
    /// X position in metres.
    pub x: f64,
    /// Y position in metres.
    pub y: f64,
    /// Amplitude; complex values act as phase-shifted sources, negative
    /// values are permitted.
    pub amp: Complex64,
    /// Frequency in Hz. Zero is accepted and gives a non-oscillating 1/r
    /// decay field.
    pub freq: f64,
    /// Phase offset in radians.
    pub phase: f64,
}

impl Monopole {
    pub fn new(coords: (f64, f64), amp: impl Into<Complex64>, freq: f64, phase: f64) -> Self {
        Self {
            x: coords.0,
            y: coords.1,
            amp: amp.into(),
            freq,
            phase,
        }
    }
}

impl Source for Monopole {
    fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Free-space Green's function of a harmonic point source:
    ///
    /// p(r) = A · exp(j·k·r) · exp(j·φ) / (4πr)
    ///
    /// This is the 3D point-source kernel, kept as-is for the 2D sampling
    /// plane (see DESIGN.md).
    fn pressure(&self, r: f64, c: f64) -> Complex64 {
        let k = wave_number(self.freq, c);
        let j = Complex64::new(0.0, 1.0);
        self.amp * (j * k * r).exp() * (j * self.phase).exp() / (4.0 * PI * r)
    }
}
