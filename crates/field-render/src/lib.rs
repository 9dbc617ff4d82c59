pub mod colormap;
pub mod heatmap;

use field_core::Environment;
use heatmap::Scale;

pub use heatmap::{render, HeatMap};

/// Fixed colour range of the instantaneous pressure map, in Pa.
const PRESSURE_SCALE: Scale = Scale::Fixed(-5.0, 5.0);

/// Render the instantaneous pressure (real part of the field at t = 0) as
/// a heat map, clamped to the fixed [-5, 5] Pa colour range.
///
/// The result carries the grid's spatial extent and the colour range for
/// axis and colorbar labelling; a fresh image is produced each call and the
/// caller decides whether to save, display, or discard it.
pub fn pressure_map(env: &Environment) -> HeatMap {
    let (ny, nx) = env.grid().shape();
    log::debug!("rendering {nx}x{ny} pressure map");
    heatmap::render(&env.pressure(), env.grid().extent(), PRESSURE_SCALE)
}

/// Render the sound pressure level (dB re 20 µPa) as a heat map with an
/// automatically scaled colour range.
pub fn spl_map(env: &Environment) -> HeatMap {
    let (ny, nx) = env.grid().shape();
    log::debug!("rendering {nx}x{ny} SPL map");
    heatmap::render(&env.spl(), env.grid().extent(), Scale::Auto)
}
