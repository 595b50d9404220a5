use derive_more::Display;

use crate::error::ColorError;
use crate::{CssHexColor, HslColor, RgbColor};

/// Holds one validated RGB color and renders it in any notation on demand.
///
/// Rounding anywhere in the HSL math is half away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ColorConverter {
    rgb: RgbColor,
}

impl ColorConverter {
    pub fn new(rgb: RgbColor) -> Self {
        ColorConverter { rgb }
    }

    pub fn from_rgb(red: i32, green: i32, blue: i32) -> Result<Self, ColorError> {
        Ok(ColorConverter::new(RgbColor::new(red, green, blue)?))
    }

    pub fn from_hex_code(hex: &str) -> Result<Self, ColorError> {
        Ok(CssHexColor::new(hex)?.into())
    }

    pub fn from_hsl(hue: i32, saturation: i32, lightness: i32) -> Result<Self, ColorError> {
        Ok(HslColor::new(hue, saturation, lightness)?.into())
    }

    pub fn to_rgb(&self) -> RgbColor {
        self.rgb
    }

    pub fn to_hex_code(&self) -> CssHexColor {
        CssHexColor::from_channels(self.rgb.channels())
    }

    /// Black and white report hue and saturation as 0.
    pub fn to_hsl(&self) -> HslColor {
        let (hue, saturation, lightness) = rgb_to_hsl(self.rgb);

        let lightness = (lightness * 100.0).round() as u8;
        if lightness == 0 || lightness == 100 {
            return HslColor::from_parts(0, 0, lightness);
        }

        let hue = (hue.round() as u16) % 360;
        let saturation = (saturation * 100.0).round() as u8;
        HslColor::from_parts(hue, saturation, lightness)
    }
}

impl From<RgbColor> for ColorConverter {
    fn from(rgb: RgbColor) -> Self {
        ColorConverter::new(rgb)
    }
}

impl From<CssHexColor> for ColorConverter {
    fn from(hex: CssHexColor) -> Self {
        let rgb = RgbColor::from_channels(hex.channels());
        log::debug!("{} -> {}", hex, rgb);
        ColorConverter::new(rgb)
    }
}

impl From<HslColor> for ColorConverter {
    fn from(hsl: HslColor) -> Self {
        let rgb = hsl_to_rgb(hsl);
        log::debug!("{} -> {}", hsl, rgb);
        ColorConverter::new(rgb)
    }
}

/// Unrounded hue in degrees, saturation and lightness as fractions.
fn rgb_to_hsl(rgb: RgbColor) -> (f64, f64, f64) {
    let [r, g, b] = rgb.channels().map(|c| f64::from(c) / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, lightness);
    }

    let chroma = max - min;
    let saturation = if lightness > 0.5 {
        chroma / (2.0 - max - min)
    } else {
        chroma / (max + min)
    };

    let sector = if max == r {
        (g - b) / chroma + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    (sector * 60.0, saturation, lightness)
}

fn hsl_to_rgb(hsl: HslColor) -> RgbColor {
    let h = f64::from(hsl.hue()) / 360.0;
    let s = f64::from(hsl.saturation()) / 100.0;
    let l = f64::from(hsl.lightness()) / 100.0;

    let unit = if s == 0.0 {
        [l, l, l]
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        [
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        ]
    };

    RgbColor::from_channels(unit.map(|c| (c * 255.0).round() as u8))
}

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
