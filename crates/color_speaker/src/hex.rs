use std::str::FromStr;

use derive_more::{Deref, Display, Into};

use crate::error::ColorError;

/// `#RRGGBB`, always stored with uppercase digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CssHexColor(String);

impl CssHexColor {
    pub fn new(value: &str) -> Result<Self, ColorError> {
        let bytes = value.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[0] == b'#'
            && bytes[1..].iter().all(u8::is_ascii_hexdigit);

        if !well_formed {
            log::trace!("rejected hex color {:?}", value);
            return Err(ColorError::FormatViolation(value.to_string()));
        }

        Ok(CssHexColor(value.to_ascii_uppercase()))
    }

    pub(crate) fn from_channels([red, green, blue]: [u8; 3]) -> Self {
        CssHexColor(format!("#{:02X}{:02X}{:02X}", red, green, blue))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the three digit pairs.
    pub fn channels(&self) -> [u8; 3] {
        let bytes = self.0.as_bytes();
        let pair = |i: usize| (nibble(bytes[i]) << 4) | nibble(bytes[i + 1]);
        [pair(1), pair(3), pair(5)]
    }
}

// Stored digits are 0-9 or A-F.
fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        _ => c - b'A' + 10,
    }
}

impl FromStr for CssHexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CssHexColor::new(s)
    }
}

impl TryFrom<String> for CssHexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CssHexColor::new(&value)
    }
}
