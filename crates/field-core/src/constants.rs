use std::f64::consts::PI;

/// SPL reference pressure, 20 µPa.
pub const P_REF: f64 = 20e-6;

/// Speed of sound in air (m/s) as a function of temperature in °C.
/// Uses the ideal-gas approximation.
pub fn speed_of_sound(temperature_c: f64) -> f64 {
    let t_kelvin = temperature_c + 273.15;
    // c = 331.3 * sqrt(T/273.15)
    331.3 * (t_kelvin / 273.15).sqrt()
}

/// Wave number k = 2πf/c for frequency `freq` (Hz) and speed of sound
/// `c` (m/s).
pub fn wave_number(freq: f64, c: f64) -> f64 {
    2.0 * PI * freq / c
}
