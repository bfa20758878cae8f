// Simple color struct, parsed once from a CSS hex string and formatted as
// an rgba(...) string for the canvas API.

use std::error::Error;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Raised when a color string is not a `#rgb` or `#rrggbb` hex value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorError {
    InvalidColorFormat(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidColorFormat(input) => {
                write!(f, "invalid hex color {:?}, expected #rgb or #rrggbb", input)
            }
        }
    }
}

impl Error for ColorError {}

impl Color {
    // Accepts "#rgb" and "#rrggbb". The short form expands by digit
    // duplication, so "#abc" means "#aabbcc".
    pub fn from_hex(hex: &str) -> Result<Color, ColorError> {
        let invalid = || ColorError::InvalidColorFormat(hex.to_owned());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded: String = match digits.len() {
            3 => digits
                .chars()
                .flat_map(|c| std::iter::repeat(c).take(2))
                .collect(),
            6 => digits.to_owned(),
            _ => return Err(invalid()),
        };
        let num = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
        Ok(Color::from_u32(num))
    }

    fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Color { r, g, b }
    }

    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let color = Color::from_hex("#A476FF").unwrap();
        assert_eq!(color, Color { r: 0xa4, g: 0x76, b: 0xff });
    }

    #[test]
    fn parses_lowercase_hex() {
        let color = Color::from_hex("#5e4491").unwrap();
        assert_eq!(color, Color { r: 0x5e, g: 0x44, b: 0x91 });
    }

    #[test]
    fn expands_three_digit_shorthand() {
        assert_eq!(
            Color::from_hex("#abc").unwrap(),
            Color::from_hex("#aabbcc").unwrap(),
        );
    }

    #[test]
    fn formats_rgba_with_alpha_passed_through() {
        let color = Color::from_hex("#A476FF").unwrap();
        assert_eq!(color.rgba(0.5), "rgba(164,118,255,0.5)");
        assert_eq!(color.rgba(1.0), "rgba(164,118,255,1)");
        assert_eq!(color.rgba(0.0), "rgba(164,118,255,0)");
    }

    #[test]
    fn rejects_named_colors() {
        assert_eq!(
            Color::from_hex("blue"),
            Err(ColorError::InvalidColorFormat("blue".to_owned())),
        );
    }

    #[test]
    fn rejects_wrong_digit_counts() {
        assert!(Color::from_hex("#12").is_err());
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#1234567").is_err());
        assert!(Color::from_hex("#").is_err());
    }

    #[test]
    fn rejects_missing_hash() {
        assert!(Color::from_hex("123456").is_err());
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!(Color::from_hex("#a476fg").is_err());
        assert!(Color::from_hex("#xyz").is_err());
    }
}
