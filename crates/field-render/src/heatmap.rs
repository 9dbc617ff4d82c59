use crate::colormap;
use image::{Rgb, RgbImage};
use ndarray::Array2;

/// Gap between the data area and the colorbar, in pixels.
const GAP: u32 = 8;
/// Width of the colorbar legend, in pixels.
const BAR_WIDTH: u32 = 16;
/// Image height used when the field itself is empty.
const EMPTY_HEIGHT: u32 = 64;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// How field values map onto the colour scale.
#[derive(Debug, Clone, Copy)]
pub enum Scale {
    /// Clamp the scale to `[lo, hi]`; values outside clip visually but the
    /// underlying data is untouched.
    Fixed(f64, f64),
    /// Span the finite values present in the field.
    Auto,
}

/// A rendered heat map together with the annotations needed to read it:
/// the spatial extent of the data area and the value range the colorbar
/// spans. The caller labels axes and colorbar ends from these when
/// displaying or embedding the image.
#[derive(Debug, Clone)]
pub struct HeatMap {
    pub image: RgbImage,
    /// Spatial extent `(xmin, xmax, ymin, ymax)` of the data area.
    pub extent: (f64, f64, f64, f64),
    /// Value range `(lo, hi)` spanned by the colour scale; the colorbar
    /// runs from `lo` at the bottom to `hi` at the top.
    pub range: (f64, f64),
}

/// Render a scalar field as a heat map with one pixel per sample and a
/// vertical colorbar legend on the right.
///
/// `extent` is the spatial region `(xmin, xmax, ymin, ymax)` the samples
/// cover; it is carried through to the result for axis labelling. The
/// image is oriented like a plot: the field's last row (largest y) renders
/// at the top. Non-finite samples are handled by the colormap — infinities
/// saturate at the scale ends and NaN gets a sentinel colour — so
/// degenerate fields (all `-inf` SPL, empty grids) render without error.
pub fn render(field: &Array2<f64>, extent: (f64, f64, f64, f64), scale: Scale) -> HeatMap {
    let (ny, nx) = field.dim();
    let (lo, hi) = resolve_range(field, scale);

    let height = if ny == 0 { EMPTY_HEIGHT } else { ny as u32 };
    let width = nx as u32 + GAP + BAR_WIDTH;
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);

    // Data area, flipped so row 0 of the image is the top of the plot
    for py in 0..height.min(ny as u32) {
        let row = ny - 1 - py as usize;
        for px in 0..nx as u32 {
            let v = field[[row, px as usize]];
            let t = (v - lo) / (hi - lo);
            img.put_pixel(px, py, colormap::sample(t));
        }
    }

    // Colorbar, high values at the top
    for py in 0..height {
        let t = if height > 1 {
            1.0 - py as f64 / (height - 1) as f64
        } else {
            0.5
        };
        for bx in 0..BAR_WIDTH {
            img.put_pixel(nx as u32 + GAP + bx, py, colormap::sample(t));
        }
    }

    HeatMap {
        image: img,
        extent,
        range: (lo, hi),
    }
}

fn resolve_range(field: &Array2<f64>, scale: Scale) -> (f64, f64) {
    match scale {
        Scale::Fixed(lo, hi) => (lo, hi),
        Scale::Auto => {
            let mut lo = f64::INFINITY;
            let mut hi = f64::NEG_INFINITY;
            for &v in field.iter().filter(|v| v.is_finite()) {
                lo = lo.min(v);
                hi = hi.max(v);
            }
            if !lo.is_finite() || !hi.is_finite() {
                // No finite samples to scale against
                log::warn!("auto colour scale found no finite values, using [0, 1]");
                (0.0, 1.0)
            } else if lo == hi {
                (lo - 0.5, hi + 0.5)
            } else {
                (lo, hi)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const UNIT_EXTENT: (f64, f64, f64, f64) = (0.0, 1.0, 0.0, 1.0);

    #[test]
    fn test_image_dimensions_include_colorbar() {
        let field = Array2::zeros((5, 7));
        let map = render(&field, UNIT_EXTENT, Scale::Fixed(0.0, 1.0));
        assert_eq!(map.image.width(), 7 + GAP + BAR_WIDTH);
        assert_eq!(map.image.height(), 5);
    }

    #[test]
    fn test_extent_carried_to_result() {
        let field = Array2::zeros((3, 3));
        let extent = (-0.5, 1.0, -1.0, 1.0);
        let map = render(&field, extent, Scale::Fixed(0.0, 1.0));
        assert_eq!(map.extent, extent);
    }

    #[test]
    fn test_fixed_scale_reported_as_range() {
        let field = array![[-100.0, 0.0, 100.0]];
        let map = render(&field, UNIT_EXTENT, Scale::Fixed(-5.0, 5.0));
        assert_eq!(map.range, (-5.0, 5.0));
    }

    #[test]
    fn test_empty_field_renders_colorbar_only() {
        let field = Array2::zeros((0, 0));
        let map = render(&field, (0.0, 0.0, 0.0, 0.0), Scale::Auto);
        assert_eq!(map.image.width(), GAP + BAR_WIDTH);
        assert_eq!(map.image.height(), EMPTY_HEIGHT);
    }

    #[test]
    fn test_rows_flipped_to_plot_orientation() {
        // Bottom row of the field is 1.0, top row 0.0; the image must show
        // the high value at the bottom.
        let field = array![[1.0, 1.0], [0.0, 0.0]];
        let map = render(&field, UNIT_EXTENT, Scale::Fixed(0.0, 1.0));
        assert_eq!(*map.image.get_pixel(0, 1), colormap::sample(1.0));
        assert_eq!(*map.image.get_pixel(0, 0), colormap::sample(0.0));
    }

    #[test]
    fn test_fixed_scale_clips_visually() {
        let field = array![[-100.0, 0.0, 100.0]];
        let map = render(&field, UNIT_EXTENT, Scale::Fixed(-5.0, 5.0));
        assert_eq!(*map.image.get_pixel(0, 0), colormap::sample(0.0));
        assert_eq!(*map.image.get_pixel(1, 0), colormap::sample(0.5));
        assert_eq!(*map.image.get_pixel(2, 0), colormap::sample(1.0));
    }

    #[test]
    fn test_auto_scale_spans_finite_values() {
        let field = array![[2.0, 4.0], [f64::NEG_INFINITY, 3.0]];
        let map = render(&field, UNIT_EXTENT, Scale::Auto);
        assert_eq!(map.range, (2.0, 4.0));
        // -inf clips to the bottom colour. Image row 0 shows field row 1
        // and vice versa.
        assert_eq!(*map.image.get_pixel(0, 0), colormap::sample(0.0)); // -inf
        assert_eq!(*map.image.get_pixel(1, 0), colormap::sample(0.5)); // 3.0
        assert_eq!(*map.image.get_pixel(0, 1), colormap::sample(0.0)); // 2.0
        assert_eq!(*map.image.get_pixel(1, 1), colormap::sample(1.0)); // 4.0
    }

    #[test]
    fn test_all_non_finite_field_does_not_panic() {
        let field = Array2::from_elem((4, 4), f64::NEG_INFINITY);
        let map = render(&field, UNIT_EXTENT, Scale::Auto);
        assert_eq!(map.range, (0.0, 1.0));
        assert_eq!(map.image.height(), 4);
        for py in 0..4 {
            for px in 0..4 {
                assert_eq!(*map.image.get_pixel(px, py), colormap::sample(0.0));
            }
        }
    }

    #[test]
    fn test_constant_field_gets_usable_range() {
        let field = Array2::from_elem((2, 2), 3.0);
        let map = render(&field, UNIT_EXTENT, Scale::Auto);
        // Constant field sits mid-scale rather than dividing by zero
        assert_eq!(map.range, (2.5, 3.5));
        assert_eq!(*map.image.get_pixel(0, 0), colormap::sample(0.5));
    }
}
