//! Rgb: the color value read back from the picker surface.
//!
//! Stores 8-bit channels exactly as sampled. Formats through the channel
//! math in [`crate::math`] and parses CSS color strings with `bigcolor`.

use std::fmt;

use bigcolor::BigColor;

use crate::math;

/// Opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex string (with or without `#`, 3 or 6 chars).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match stripped.len() {
            3 => {
                let r = u8::from_str_radix(&stripped[0..1], 16).ok()?;
                let g = u8::from_str_radix(&stripped[1..2], 16).ok()?;
                let b = u8::from_str_radix(&stripped[2..3], 16).ok()?;
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&stripped[0..2], 16).ok()?;
                let g = u8::from_str_radix(&stripped[2..4], 16).ok()?;
                let b = u8::from_str_radix(&stripped[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Parse any CSS color string (`"black"`, `"#333"`, `"rgb(0, 0, 0)"`).
    ///
    /// Alpha is discarded.
    pub fn from_css(css: &str) -> Option<Self> {
        if let Some(rgb) = Self::from_hex(css) {
            return Some(rgb);
        }
        let parsed = BigColor::new(css);
        if !parsed.is_valid() {
            return None;
        }
        Self::from_hex(&parsed.to_hex_string(false))
    }

    /// Format as uppercase hex (`RRGGBB`, no `#` prefix).
    pub fn to_hex(&self) -> String {
        math::channels_to_hex(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    /// `#RRGGBB`, the form handed to pick callbacks.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl From<[u8; 4]> for Rgb {
    fn from(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_hash_prefixed_uppercase() {
        assert_eq!(Rgb::new(0xab, 0x01, 0xff).to_string(), "#AB01FF");
        assert_eq!(Rgb::BLACK.to_hex(), "000000");
    }

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Rgb::from_hex("#fff"), Some(Rgb::WHITE));
        assert_eq!(Rgb::from_hex("008000"), Some(Rgb::new(0, 128, 0)));
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("zzzzzz"), None);
    }

    #[test]
    fn parses_css_names() {
        assert_eq!(Rgb::from_css("black"), Some(Rgb::BLACK));
        assert_eq!(Rgb::from_css("#FF0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::from_css("not a color"), None);
    }

    #[test]
    fn pixel_alpha_is_dropped() {
        assert_eq!(Rgb::from([1, 2, 3, 0]), Rgb::new(1, 2, 3));
    }
}
