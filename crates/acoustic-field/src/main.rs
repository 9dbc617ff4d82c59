//! Demo driver: renders the pressure and SPL maps of two example scenes,
//! a phased line array and a triangular array.

use anyhow::{Context, Result};
use field_core::constants::speed_of_sound;
use field_core::{Environment, Monopole};
use std::f64::consts::PI;
use std::sync::Arc;

const RESOLUTION: f64 = 200.0;
const FREQ: f64 = 1000.0;

fn main() -> Result<()> {
    env_logger::init();
    let c = speed_of_sound(20.0);

    let line = line_array(c)?;
    save_maps(&line, "line_array")?;

    let triangle = triangular_array(c)?;
    save_maps(&triangle, "triangular_array")?;

    Ok(())
}

/// Ten monopoles along the x-axis with phases sweeping 0..π.
fn line_array(c: f64) -> Result<Environment> {
    let mut env = Environment::new(&[-0.5, 1.0], &[-1.0, 1.0], RESOLUTION, c)?;
    let n = 10;
    for i in 0..n {
        let t = i as f64 / (n - 1) as f64;
        let x = -0.3 + 0.6 * t;
        let phase = PI * t;
        env.add_source(Arc::new(Monopole::new((x, 0.0), 1.0, FREQ, phase)));
    }
    log::info!("line array: {} sources at {FREQ} Hz", env.sources().len());
    Ok(env)
}

/// Three monopoles on a circle of radius 0.5, phases sweeping 0..π.
fn triangular_array(c: f64) -> Result<Environment> {
    let mut env = Environment::new(&[-1.0, 1.0], &[-1.0, 1.0], RESOLUTION, c)?;
    let n = 3;
    let radius = 0.5;
    for i in 0..n {
        let angle = 2.0 * PI * i as f64 / n as f64;
        let phase = PI * i as f64 / n as f64;
        let coords = (radius * angle.cos(), radius * angle.sin());
        env.add_source(Arc::new(Monopole::new(coords, 1.0, FREQ, phase)));
    }
    log::info!(
        "triangular array: {} sources at {FREQ} Hz",
        env.sources().len()
    );
    Ok(env)
}

fn save_maps(env: &Environment, name: &str) -> Result<()> {
    let pressure = field_render::pressure_map(env);
    let pressure_path = format!("{name}_pressure.png");
    pressure
        .image
        .save(&pressure_path)
        .with_context(|| format!("writing {pressure_path}"))?;
    let (xmin, xmax, ymin, ymax) = pressure.extent;
    log::info!(
        "wrote {pressure_path}: extent [{xmin}, {xmax}] x [{ymin}, {ymax}] m, scale {:?} Pa",
        pressure.range
    );

    let spl = field_render::spl_map(env);
    let spl_path = format!("{name}_spl.png");
    spl.image
        .save(&spl_path)
        .with_context(|| format!("writing {spl_path}"))?;
    let (lo, hi) = spl.range;
    log::info!("wrote {spl_path}: colorbar {lo:.1} to {hi:.1} dB re 20 uPa");

    Ok(())
}
