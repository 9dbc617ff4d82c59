use ndarray::{Array1, Array2};

/// Rectangular sampling grid over a 2D region.
///
/// Holds the two coordinate grids of a meshgrid: `x[[i, j]]` is column j's
/// x-sample and `y[[i, j]]` is row i's y-sample, both of shape `(ny, nx)`.
#[derive(Debug, Clone)]
pub struct Grid {
    x: Array2<f64>,
    y: Array2<f64>,
}

impl Grid {
    /// Build a grid over `[xmin, xmax] × [ymin, ymax]` with `resolution`
    /// sample points per linear metre.
    ///
    /// Axis sample counts are `floor(span * resolution)`; samples are evenly
    /// spaced and include both endpoints. A span or resolution small enough
    /// to leave an axis with fewer than two samples is accepted but logged,
    /// since the resulting field is degenerate.
    pub fn new(xlim: (f64, f64), ylim: (f64, f64), resolution: f64) -> Self {
        let nx = Self::sample_count(xlim.0, xlim.1, resolution);
        let ny = Self::sample_count(ylim.0, ylim.1, resolution);
        if nx < 2 || ny < 2 {
            log::warn!("degenerate grid: {nx}x{ny} samples for xlim={xlim:?}, ylim={ylim:?}, resolution={resolution}");
        }

        let xs = Array1::linspace(xlim.0, xlim.1, nx);
        let ys = Array1::linspace(ylim.0, ylim.1, ny);

        let x = Array2::from_shape_fn((ny, nx), |(_, j)| xs[j]);
        let y = Array2::from_shape_fn((ny, nx), |(i, _)| ys[i]);
        Self { x, y }
    }

    fn sample_count(min: f64, max: f64, resolution: f64) -> usize {
        let n = ((max - min) * resolution).floor();
        if n > 0.0 {
            n as usize
        } else {
            0
        }
    }

    /// Grid shape as `(ny, nx)`.
    pub fn shape(&self) -> (usize, usize) {
        self.x.dim()
    }

    /// Spatial extent `(xmin, xmax, ymin, ymax)` covered by the samples.
    /// Empty axes report a zero-width extent.
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        let (ny, nx) = self.shape();
        if nx == 0 || ny == 0 {
            return (0.0, 0.0, 0.0, 0.0);
        }
        (
            self.x[[0, 0]],
            self.x[[0, nx - 1]],
            self.y[[0, 0]],
            self.y[[ny - 1, 0]],
        )
    }

    /// X-coordinate grid.
    pub fn x(&self) -> &Array2<f64> {
        &self.x
    }

    /// Y-coordinate grid.
    pub fn y(&self) -> &Array2<f64> {
        &self.y
    }

    /// Euclidean distance from every grid point to `(x0, y0)`.
    pub fn distances(&self, x0: f64, y0: f64) -> Array2<f64> {
        let mut r = Array2::zeros(self.x.dim());
        ndarray::Zip::from(&mut r)
            .and(&self.x)
            .and(&self.y)
            .for_each(|r, &x, &y| {
                *r = ((x - x0).powi(2) + (y - y0).powi(2)).sqrt();
            });
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_law() {
        // floor((1 - 0) * 10) = 10 samples along each axis
        let grid = Grid::new((0.0, 1.0), (0.0, 1.0), 10.0);
        assert_eq!(grid.shape(), (10, 10));
    }

    #[test]
    fn test_meshgrid_orientation() {
        let grid = Grid::new((0.0, 2.0), (0.0, 3.0), 1.0);
        let (ny, nx) = grid.shape();
        assert_eq!((ny, nx), (3, 2));
        // x varies along columns, y along rows
        for i in 0..ny {
            assert_eq!(grid.x()[[i, 0]], 0.0);
            assert_eq!(grid.x()[[i, nx - 1]], 2.0);
        }
        for j in 0..nx {
            assert_eq!(grid.y()[[0, j]], 0.0);
            assert_eq!(grid.y()[[ny - 1, j]], 3.0);
        }
    }

    #[test]
    fn test_endpoints_included() {
        let grid = Grid::new((-1.0, 1.0), (-1.0, 1.0), 2.0);
        let (xmin, xmax, ymin, ymax) = grid.extent();
        assert_eq!((xmin, xmax), (-1.0, 1.0));
        assert_eq!((ymin, ymax), (-1.0, 1.0));
    }

    #[test]
    fn test_degenerate_grid_is_empty_not_panic() {
        // span * resolution < 1 floors to zero samples
        let grid = Grid::new((0.0, 0.1), (0.0, 0.1), 5.0);
        assert_eq!(grid.shape(), (0, 0));
        assert_eq!(grid.distances(0.0, 0.0).len(), 0);
    }

    #[test]
    fn test_distances() {
        let grid = Grid::new((0.0, 2.0), (0.0, 2.0), 1.0);
        let r = grid.distances(0.0, 0.0);
        assert_eq!(r[[0, 0]], 0.0);
        assert_eq!(r[[0, 1]], 2.0);
        assert_eq!(r[[1, 0]], 2.0);
        assert!((r[[1, 1]] - 8.0_f64.sqrt()).abs() < 1e-12);
    }
}
