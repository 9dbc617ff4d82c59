use image::Rgb;

/// Colour used for NaN samples, which have no position on the scale.
pub const NAN_COLOR: Rgb<u8> = Rgb([40, 40, 40]);

/// Viridis anchor points, evenly spaced over [0, 1].
const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [72, 40, 120],
    [62, 74, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [109, 205, 89],
    [253, 231, 37],
];

/// Sample the viridis colormap at `t`, linearly interpolating between
/// anchor points. `t` is clamped to [0, 1]; infinities land on the scale
/// ends, NaN gets [`NAN_COLOR`].
pub fn sample(t: f64) -> Rgb<u8> {
    if t.is_nan() {
        return NAN_COLOR;
    }
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let lo = scaled.floor() as usize;
    let hi = (lo + 1).min(VIRIDIS.len() - 1);
    let frac = scaled - lo as f64;

    let mut rgb = [0u8; 3];
    for ch in 0..3 {
        let a = VIRIDIS[lo][ch] as f64;
        let b = VIRIDIS[hi][ch] as f64;
        rgb[ch] = (a + (b - a) * frac).round() as u8;
    }
    Rgb(rgb)
}
