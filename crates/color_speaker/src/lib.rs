//! Converts a color between RGB triplets, CSS hex codes and HSL triplets.
//!
//! 1. Every value type is validated once, when it is built. A live value is always in range.
//! 2. [`ColorConverter`] stores RGB only. The other notations are computed on request.

mod bounds;
mod converter;
mod error;
mod hex;
mod hsl;
mod notation;
mod rgb;

#[cfg(test)]
mod fixtures;

pub use converter::ColorConverter;
pub use error::{ColorError, Reasons};
pub use hex::CssHexColor;
pub use hsl::{HslColor, HslFields};
pub use rgb::{RgbColor, RgbFields};
