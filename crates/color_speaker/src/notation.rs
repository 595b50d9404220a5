//! Parses the textual forms the value types display as:
//! * #RRGGBB
//! * rgb(r, g, b)
//! * hsl(h, s%, l%) (the percent signs are optional)

use std::str::FromStr;

use crate::error::ColorError;
use crate::ColorConverter;

impl FromStr for ColorConverter {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('#') {
            return ColorConverter::from_hex_code(trimmed);
        }

        let unrecognized = || ColorError::UnrecognizedNotation(s.to_string());
        let (name, args) = function_call(trimmed).ok_or_else(unrecognized)?;

        match name.to_ascii_lowercase().as_str() {
            "rgb" => {
                let [r, g, b] = components(args, false).ok_or_else(unrecognized)?;
                ColorConverter::from_rgb(r, g, b)
            }
            "hsl" => {
                let [h, s, l] = components(args, true).ok_or_else(unrecognized)?;
                ColorConverter::from_hsl(h, s, l)
            }
            _ => Err(unrecognized()),
        }
    }
}

fn function_call(s: &str) -> Option<(&str, &str)> {
    let (name, rest) = s.split_once('(')?;
    let args = rest.strip_suffix(')')?;
    Some((name.trim_end(), args))
}

/// Exactly three integers. With `percent`, the last two may end in `%`.
fn components(args: &str, percent: bool) -> Option<[i32; 3]> {
    let mut parts = args.split(',').map(str::trim);
    let first = parts.next()?.parse().ok()?;
    let second = number(parts.next()?, percent)?;
    let third = number(parts.next()?, percent)?;

    if parts.next().is_some() {
        return None;
    }
    Some([first, second, third])
}

fn number(part: &str, percent: bool) -> Option<i32> {
    let digits = if percent {
        part.strip_suffix('%').map_or(part, str::trim_end)
    } else {
        part
    };
    digits.parse().ok()
}
