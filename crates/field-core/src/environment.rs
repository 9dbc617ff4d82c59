use crate::constants::P_REF;
use crate::grid::Grid;
use crate::Source;
use ndarray::{Array2, Zip};
use num_complex::Complex64;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvironmentError {
    /// An axis limit was not given as exactly `[min, max]`.
    #[error("{axis} limits must have exactly 2 elements [min, max], got {len}")]
    BadLimits { axis: &'static str, len: usize },
}

/// A 2D sampling environment accumulating the superposed pressure field of
/// the sources added to it.
///
/// The grid and speed of sound are fixed at construction; only the complex
/// field `p` and the source list change, and only through [`add_source`].
/// There is no removal of sources and no resizing of the grid.
///
/// [`add_source`]: Environment::add_source
pub struct Environment {
    grid: Grid,
    /// Accumulated complex pressure at every grid point.
    p: Array2<Complex64>,
    sources: Vec<Arc<dyn Source>>,
    /// Speed of sound in m/s.
    c: f64,
}

impl Environment {
    /// Create an empty environment over `[xmin, xmax] × [ymin, ymax]` with
    /// `resolution` sample points per linear metre and speed of sound `c`.
    ///
    /// `xlim` and `ylim` must each hold exactly two elements.
    pub fn new(
        xlim: &[f64],
        ylim: &[f64],
        resolution: f64,
        c: f64,
    ) -> Result<Self, EnvironmentError> {
        let xlim = Self::limits("xlim", xlim)?;
        let ylim = Self::limits("ylim", ylim)?;

        let grid = Grid::new(xlim, ylim, resolution);
        let (ny, nx) = grid.shape();
        let p = Array2::zeros((ny, nx));

        Ok(Self {
            grid,
            p,
            sources: Vec::new(),
            c,
        })
    }

    fn limits(axis: &'static str, lim: &[f64]) -> Result<(f64, f64), EnvironmentError> {
        match lim {
            [min, max] => Ok((*min, *max)),
            _ => Err(EnvironmentError::BadLimits {
                axis,
                len: lim.len(),
            }),
        }
    }

    /// Add a source to the environment, accumulating its contribution into
    /// the pressure field in place.
    ///
    /// Duplicates are allowed and contribute again; the addition order is
    /// recorded but does not affect the final field.
    pub fn add_source(&mut self, source: Arc<dyn Source>) {
        let (sx, sy) = source.position();
        let r = self.grid.distances(sx, sy);
        let c = self.c;
        Zip::from(&mut self.p).and(&r).for_each(|p, &r| {
            *p += source.pressure(r, c);
        });
        self.sources.push(source);
    }

    /// Accumulated complex pressure field.
    pub fn field(&self) -> &Array2<Complex64> {
        &self.p
    }

    /// Instantaneous pressure at t = 0: the real part of the field.
    pub fn pressure(&self) -> Array2<f64> {
        self.p.mapv(|p| p.re)
    }

    /// Sound pressure level in dB re 20 µPa: `20·log10(|p| / P_REF)`.
    ///
    /// Zero magnitude (far from any source, or exact cancellation) yields
    /// negative infinity, which is propagated rather than suppressed.
    pub fn spl(&self) -> Array2<f64> {
        self.p.mapv(|p| 20.0 * (p.norm() / P_REF).log10())
    }

    /// Sources added so far, in addition order.
    pub fn sources(&self) -> &[Arc<dyn Source>] {
        &self.sources
    }

    /// Speed of sound in m/s.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// The sampling grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
