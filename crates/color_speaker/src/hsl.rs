#[cfg(test)]
pub(crate) mod test_utils;

use derive_more::Display;

use crate::bounds::{self, Bound};
use crate::error::ColorError;

const HUE: Bound = Bound::new("hue", 0, 360);
const SATURATION: Bound = Bound::new("saturation", 0, 100);
const LIGHTNESS: Bound = Bound::new("lightness", 0, 100);

const OUT_OF_BOUNDS: &str =
    "Hue must be between 0 and 360, and saturation and lightness between 0 and 100, inclusive.";

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "hsl({}, {}%, {}%)", hue, saturation, lightness)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "HslFields"))]
pub struct HslColor {
    hue: u16,
    saturation: u8,
    lightness: u8,
}

/// Unvalidated HSL components, addressed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct HslFields {
    pub hue: i32,
    pub saturation: i32,
    pub lightness: i32,
}

impl HslColor {
    pub fn new(hue: i32, saturation: i32, lightness: i32) -> Result<Self, ColorError> {
        bounds::check(
            OUT_OF_BOUNDS,
            &[(HUE, hue), (SATURATION, saturation), (LIGHTNESS, lightness)],
        )?;
        Ok(HslColor::from_parts(hue as u16, saturation as u8, lightness as u8))
    }

    /// Caller guarantees the parts are already in range.
    pub(crate) fn from_parts(hue: u16, saturation: u8, lightness: u8) -> Self {
        HslColor {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    pub fn saturation(&self) -> u8 {
        self.saturation
    }

    pub fn lightness(&self) -> u8 {
        self.lightness
    }
}

impl TryFrom<HslFields> for HslColor {
    type Error = ColorError;

    fn try_from(fields: HslFields) -> Result<Self, Self::Error> {
        HslColor::new(fields.hue, fields.saturation, fields.lightness)
    }
}
