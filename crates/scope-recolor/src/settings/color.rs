//! Color string parsing.

use std::str::FromStr;

use super::error::ParseColorError;
use crate::raster::Rgb;

const NAMED: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("red", Rgb::new(255, 0, 0)),
    ("lime", Rgb::new(0, 255, 0)),
    ("green", Rgb::new(0, 128, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("aqua", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("fuchsia", Rgb::new(255, 0, 255)),
    ("orange", Rgb::new(255, 165, 0)),
    ("purple", Rgb::new(128, 0, 128)),
    ("navy", Rgb::new(0, 0, 128)),
    ("gray", Rgb::new(128, 128, 128)),
    ("grey", Rgb::new(128, 128, 128)),
    ("silver", Rgb::new(192, 192, 192)),
    ("darkgray", Rgb::new(169, 169, 169)),
    ("darkgrey", Rgb::new(169, 169, 169)),
];

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color.
    ///
    /// Supports:
    /// - `#RRGGBB` / `#RGB` (the `#` is optional)
    /// - `rgb(R, G, B)` with decimal components
    /// - a handful of CSS color names (`black`, `white`, `red`, ...)
    ///
    /// # Example
    /// ```
    /// use scope_recolor::Rgb;
    ///
    /// let c: Rgb = "#ff8000".parse().unwrap();
    /// assert_eq!(c, Rgb::new(255, 128, 0));
    /// assert_eq!("rgb(1, 2, 3)".parse::<Rgb>().unwrap(), Rgb::new(1, 2, 3));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();

        if let Some(inner) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
            if parts.len() != 3 {
                return Err(ParseColorError::InvalidFunction);
            }
            return Ok(Rgb::new(
                parts[0].parse()?,
                parts[1].parse()?,
                parts[2].parse()?,
            ));
        }

        if let Some(&(_, rgb)) = NAMED.iter().find(|(name, _)| *name == lower) {
            return Ok(rgb);
        }

        let hex = match lower.strip_prefix('#') {
            Some(h) => h,
            None if lower.chars().all(|c| c.is_ascii_hexdigit()) && !lower.is_empty() => &lower,
            None => return Err(ParseColorError::UnknownName(s.to_string())),
        };
        if !hex.is_ascii() {
            return Err(ParseColorError::UnknownName(s.to_string()));
        }

        match hex.len() {
            6 => Ok(Rgb::new(
                u8::from_str_radix(&hex[0..2], 16)?,
                u8::from_str_radix(&hex[2..4], 16)?,
                u8::from_str_radix(&hex[4..6], 16)?,
            )),
            3 => {
                let digit = |i: usize| -> Result<u8, ParseColorError> {
                    let v = u8::from_str_radix(&hex[i..i + 1], 16)?;
                    Ok(v * 17)
                };
                Ok(Rgb::new(digit(0)?, digit(1)?, digit(2)?))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
