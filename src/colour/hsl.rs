//! RGB <-> HSL conversion.
//!
//! Hue, saturation and lightness are all normalized to `[0, 1]`; a hue of
//! `1.0` is a full turn around the colour wheel. The conversion back to RGB
//! rounds each channel to the nearest integer, so a round trip can move a
//! channel by at most one step.

use std::fmt;

use super::Colour;

/// A colour in hue/saturation/lightness form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert back to RGB.
    pub fn to_rgb(self) -> Colour {
        hsl_to_rgb(self)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.1}deg, {:.1}%, {:.1}%)",
            self.hue * 360.0,
            self.saturation * 100.0,
            self.lightness * 100.0
        )
    }
}

/// Convert an RGB colour to HSL.
pub fn rgb_to_hsl(colour: Colour) -> Hsl {
    let r = f64::from(colour.r) / 255.0;
    let g = f64::from(colour.g) / 255.0;
    let b = f64::from(colour.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, lightness);
    }

    let d = max - min;
    let saturation = if lightness > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(sector / 6.0, saturation, lightness)
}

/// Convert an HSL colour to RGB, rounding each channel to the nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> Colour {
    let Hsl {
        hue: h,
        saturation: s,
        lightness: l,
    } = hsl;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Colour::rgb(to_byte(r), to_byte(g), to_byte(b))
}

/// Piecewise-linear interpolation between `p` and `q` over one hue turn.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::IntoColor;
    use proptest::prelude::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_primaries() {
        let red = rgb_to_hsl(Colour::rgb(255, 0, 0));
        assert_eq!(red, Hsl::new(0.0, 1.0, 0.5));

        let green = rgb_to_hsl(Colour::rgb(0, 255, 0));
        assert_close(green.hue, 1.0 / 3.0);

        let blue = rgb_to_hsl(Colour::rgb(0, 0, 255));
        assert_close(blue.hue, 2.0 / 3.0);
    }

    #[test]
    fn test_red_branch_wraps_when_blue_exceeds_green() {
        // Magenta-ish red: max is red, green < blue
        let hsl = rgb_to_hsl(Colour::rgb(255, 0, 128));
        assert!(hsl.hue > 0.9 && hsl.hue < 1.0, "hue = {}", hsl.hue);
    }

    #[test]
    fn test_saturation_branches() {
        // Dark colour: l <= 0.5 uses d / (max + min)
        let dark = rgb_to_hsl(Colour::rgb(100, 0, 0));
        assert_close(dark.saturation, 1.0);

        // Light colour: l > 0.5 uses d / (2 - max - min)
        let light = rgb_to_hsl(Colour::rgb(255, 200, 200));
        let (max, min) = (1.0, 200.0 / 255.0);
        assert_close(light.saturation, (max - min) / (2.0 - max - min));
    }

    #[test]
    fn test_achromatic_fixed_point() {
        for x in 0..=255u8 {
            let hsl = rgb_to_hsl(Colour::rgb(x, x, x));
            assert_eq!(hsl, Hsl::new(0.0, 0.0, f64::from(x) / 255.0));
            assert_eq!(hsl_to_rgb(hsl), Colour::rgb(x, x, x));
        }
    }

    #[test]
    fn test_end_to_end_example() {
        let hsl = rgb_to_hsl(Colour::rgb(200, 50, 50));
        assert_eq!(hsl.hue, 0.0);
        let back = hsl_to_rgb(hsl);
        assert!(back.max_channel_delta(Colour::rgb(200, 50, 50)) <= 1);
    }

    #[test]
    fn test_hue_wraps_outside_unit_interval() {
        // h = 0 puts the blue offset at -1/3, which must wrap to 2/3
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 1.0, 0.5)), Colour::rgb(255, 0, 0));
        // h = 1 is the same point on the wheel
        assert_eq!(hsl_to_rgb(Hsl::new(1.0, 1.0, 0.5)), Colour::rgb(255, 0, 0));
    }

    #[test]
    fn test_round_trip_strided_grid() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let c = Colour::rgb(r, g, b);
                    let back = hsl_to_rgb(rgb_to_hsl(c));
                    assert!(c.max_channel_delta(back) <= 1, "{c} -> {back}");
                }
            }
        }
    }

    #[test]
    fn test_matches_palette_crate() {
        for c in [
            Colour::rgb(30, 144, 255),
            Colour::rgb(255, 165, 0),
            Colour::rgb(46, 139, 87),
            Colour::rgb(128, 0, 128),
        ] {
            let ours = rgb_to_hsl(c);
            let rgb = palette::Srgb::new(
                f64::from(c.r) / 255.0,
                f64::from(c.g) / 255.0,
                f64::from(c.b) / 255.0,
            );
            let theirs: palette::Hsl<palette::encoding::Srgb, f64> = rgb.into_color();

            assert!((ours.hue * 360.0 - theirs.hue.into_positive_degrees()).abs() < 1e-6);
            assert!((ours.saturation - theirs.saturation).abs() < 1e-6);
            assert!((ours.lightness - theirs.lightness).abs() < 1e-6);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Hsl::new(0.5, 0.25, 1.0).to_string(),
            "hsl(180.0deg, 25.0%, 100.0%)"
        );
    }

    proptest! {
        #[test]
        fn prop_round_trip_within_one(r: u8, g: u8, b: u8) {
            let c = Colour::rgb(r, g, b);
            let back = rgb_to_hsl(c).to_rgb();
            prop_assert!(c.max_channel_delta(back) <= 1);
        }

        #[test]
        fn prop_components_in_unit_interval(r: u8, g: u8, b: u8) {
            let hsl = rgb_to_hsl(Colour::rgb(r, g, b));
            prop_assert!((0.0..=1.0).contains(&hsl.hue));
            prop_assert!((0.0..=1.0).contains(&hsl.saturation));
            prop_assert!((0.0..=1.0).contains(&hsl.lightness));
        }
    }
}
