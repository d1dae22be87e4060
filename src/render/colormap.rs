//! Sequential colormap for heatmap cells.

use palette::{LinSrgb, Mix, Srgb};

/// Viridis control points (sRGB), low to high.
const STOPS: [(f32, f32, f32); 9] = [
    (0.267, 0.005, 0.329),
    (0.282, 0.141, 0.458),
    (0.254, 0.265, 0.530),
    (0.207, 0.372, 0.553),
    (0.164, 0.471, 0.558),
    (0.128, 0.567, 0.551),
    (0.135, 0.659, 0.518),
    (0.478, 0.821, 0.318),
    (0.993, 0.906, 0.144),
];

/// Map `t` in [0, 1] onto the viridis-style ramp, mixing between the two
/// nearest control points in linear RGB. Out-of-range values are clamped.
pub fn viridis(t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0) as f32;
    let scaled = t * (STOPS.len() - 1) as f32;
    let idx = (scaled.floor() as usize).min(STOPS.len() - 2);
    let frac = scaled - idx as f32;

    let (r0, g0, b0) = STOPS[idx];
    let (r1, g1, b1) = STOPS[idx + 1];
    let lo: LinSrgb = Srgb::new(r0, g0, b0).into_linear();
    let hi: LinSrgb = Srgb::new(r1, g1, b1).into_linear();

    let mixed = Srgb::<f32>::from_linear(lo.mix(hi, frac)).into_format::<u8>();
    [mixed.red, mixed.green, mixed.blue]
}

/// Relative luminance of an sRGB color, for picking readable text colors.
pub fn luminance(rgb: [u8; 3]) -> f64 {
    let [r, g, b] = rgb.map(|c| c as f64 / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_match_stops() {
        assert_eq!(viridis(0.0), viridis(-1.0));
        assert_eq!(viridis(1.0), viridis(2.0));
        // Low end is dark purple, high end is bright yellow
        assert!(luminance(viridis(0.0)) < 0.2);
        assert!(luminance(viridis(1.0)) > 0.7);
    }

    #[test]
    fn test_ramp_is_monotone_in_luminance() {
        let mut prev = luminance(viridis(0.0));
        for step in 1..=20 {
            let lum = luminance(viridis(step as f64 / 20.0));
            assert!(lum >= prev - 1e-6, "luminance dipped at step {step}");
            prev = lum;
        }
    }
}
