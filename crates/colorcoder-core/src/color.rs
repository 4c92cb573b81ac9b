//! Colorspace conversion between the tool's slider units and normalized RGB.
//!
//! Sliders report hue in degrees (0-360) and saturation/value in percent
//! (0-100). Everything stored in the palette is normalized RGB in 0.0-1.0.

use serde::{Deserialize, Serialize};

/// Upper bound of the hue slider, in degrees.
pub const HUE_MAX: f64 = 360.0;
/// Upper bound of the saturation and value sliders, in percent.
pub const PERCENT_MAX: f64 = 100.0;
/// Decimal places kept when a new color is stored.
pub const ROUND_DECIMALS: i32 = 4;
/// Brightness factor applied to the "hidden" preview label.
pub const HIDDEN_DIM_FACTOR: f64 = 0.548;

/// A normalized RGB triple, persisted as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    /// Create a color from normalized components.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Components as an array.
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Whether every component lies in 0.0-1.0.
    pub fn is_normalized(self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Round every component to `decimals` places.
    pub fn rounded(self, decimals: i32) -> Self {
        let scale = 10f64.powi(decimals);
        let round = |c: f64| (c * scale).round() / scale;
        Self::new(round(self.r), round(self.g), round(self.b))
    }

    /// Multiply every component by `factor`, clamping to 0.0-1.0.
    pub fn scaled(self, factor: f64) -> Self {
        let scale = |c: f64| (c * factor).clamp(0.0, 1.0);
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl From<[f64; 3]> for Rgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

/// Standard HSV to RGB transform. All inputs and outputs are 0.0-1.0.
pub fn hsv_unit_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    if s == 0.0 {
        return Rgb::new(v, v, v);
    }

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => Rgb::new(v, t, p),
        1 => Rgb::new(q, v, p),
        2 => Rgb::new(p, v, t),
        3 => Rgb::new(p, q, v),
        4 => Rgb::new(t, p, v),
        _ => Rgb::new(v, p, q),
    }
}

/// Convert slider units (hue 0-360, saturation 0-100, value 0-100) to RGB.
///
/// Out-of-range slider values are clamped first.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Rgb {
    let h = hue.clamp(0.0, HUE_MAX) / HUE_MAX;
    let s = saturation.clamp(0.0, PERCENT_MAX) / PERCENT_MAX;
    let v = value.clamp(0.0, PERCENT_MAX) / PERCENT_MAX;
    hsv_unit_to_rgb(h, s, v)
}

/// Colors for the live preview shown while the sliders move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preview {
    /// Fill of the scene preview frame.
    pub scene: Rgb,
    /// Text color of the "Visible" label.
    pub visible_label: Rgb,
    /// Text color of the "Hidden" label, a dimmed copy of the scene color.
    pub hidden_label: Rgb,
}

/// Compute the preview colors for the current slider state.
pub fn preview(hue: f64, saturation: f64, value: f64) -> Preview {
    let scene = hsv_to_rgb(hue, saturation, value);
    Preview {
        scene,
        visible_label: scene,
        hidden_label: scene.scaled(HIDDEN_DIM_FACTOR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb(actual: Rgb, expected: (f64, f64, f64)) {
        let (r, g, b) = expected;
        assert!(
            (actual.r - r).abs() < 1e-4 && (actual.g - g).abs() < 1e-4 && (actual.b - b).abs() < 1e-4,
            "expected ({r}, {g}, {b}), got {actual:?}"
        );
    }

    #[test]
    fn test_primary_hues() {
        assert_rgb(hsv_to_rgb(0.0, 100.0, 100.0), (1.0, 0.0, 0.0));
        assert_rgb(hsv_to_rgb(120.0, 100.0, 100.0), (0.0, 1.0, 0.0));
        assert_rgb(hsv_to_rgb(240.0, 100.0, 100.0), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_greys() {
        assert_rgb(hsv_to_rgb(0.0, 0.0, 100.0), (1.0, 1.0, 1.0));
        assert_rgb(hsv_to_rgb(200.0, 0.0, 50.0), (0.5, 0.5, 0.5));
        assert_rgb(hsv_to_rgb(77.0, 40.0, 0.0), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_secondary_hues() {
        assert_rgb(hsv_to_rgb(60.0, 100.0, 100.0), (1.0, 1.0, 0.0));
        assert_rgb(hsv_to_rgb(180.0, 100.0, 100.0), (0.0, 1.0, 1.0));
        assert_rgb(hsv_to_rgb(300.0, 100.0, 100.0), (1.0, 0.0, 1.0));
        assert_rgb(hsv_to_rgb(30.0, 100.0, 100.0), (1.0, 0.5, 0.0));
    }

    #[test]
    fn test_full_circle_wraps_to_red() {
        assert_rgb(hsv_to_rgb(360.0, 100.0, 100.0), (1.0, 0.0, 0.0));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_rgb(hsv_to_rgb(-20.0, 150.0, 250.0), (1.0, 0.0, 0.0));
    }

    #[test]
    fn test_rounded() {
        let rgb = Rgb::new(0.123456, 0.98766, 1.0 / 3.0).rounded(ROUND_DECIMALS);
        assert_eq!(rgb, Rgb::new(0.1235, 0.9877, 0.3333));
    }

    #[test]
    fn test_preview_dims_hidden_label() {
        let p = preview(0.0, 100.0, 100.0);
        assert_eq!(p.scene, p.visible_label);
        assert_rgb(p.hidden_label, (0.548, 0.0, 0.0));
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_string(&Rgb::new(0.25, 0.5, 1.0)).unwrap();
        assert_eq!(json, "[0.25,0.5,1.0]");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(0.25, 0.5, 1.0));
    }
}
