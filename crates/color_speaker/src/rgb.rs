use derive_more::Display;

use crate::bounds::{self, Bound};
use crate::error::ColorError;

const RED: Bound = Bound::new("red", 0, 255);
const GREEN: Bound = Bound::new("green", 0, 255);
const BLUE: Bound = Bound::new("blue", 0, 255);

const OUT_OF_BOUNDS: &str = "Color values must be between 0 and 255, inclusive.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "rgb({}, {}, {})", red, green, blue)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RgbFields"))]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

/// Unvalidated RGB channels, addressed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct RgbFields {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl RgbColor {
    pub fn new(red: i32, green: i32, blue: i32) -> Result<Self, ColorError> {
        bounds::check(OUT_OF_BOUNDS, &[(RED, red), (GREEN, green), (BLUE, blue)])?;
        Ok(RgbColor::from_channels([red as u8, green as u8, blue as u8]))
    }

    pub(crate) fn from_channels([red, green, blue]: [u8; 3]) -> Self {
        RgbColor { red, green, blue }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl TryFrom<RgbFields> for RgbColor {
    type Error = ColorError;

    fn try_from(fields: RgbFields) -> Result<Self, Self::Error> {
        RgbColor::new(fields.red, fields.green, fields.blue)
    }
}
