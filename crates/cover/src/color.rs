use crate::{Error, Result};

/// RGBA color used for chart legends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Parses `#rrggbb` or `#rrggbbaa` notation.
    pub fn from_hex(hex: &str) -> Result<Color> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidArgument(format!("Invalid hex color: {hex}")))?;
        if !digits.is_ascii() {
            return Err(Error::InvalidArgument(format!("Invalid hex color: {hex}")));
        }

        match digits.len() {
            6 => Ok(Color::rgb(
                u8::from_str_radix(&digits[0..2], 16)?,
                u8::from_str_radix(&digits[2..4], 16)?,
                u8::from_str_radix(&digits[4..6], 16)?,
            )),
            8 => Ok(Color::rgba(
                u8::from_str_radix(&digits[0..2], 16)?,
                u8::from_str_radix(&digits[2..4], 16)?,
                u8::from_str_radix(&digits[4..6], 16)?,
                u8::from_str_radix(&digits[6..8], 16)?,
            )),
            _ => Err(Error::InvalidArgument(format!("Invalid hex color: {hex}"))),
        }
    }

    pub fn to_hex_rgb(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 255 {
            write!(f, "{}", self.to_hex_rgb())
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() -> Result {
        let color = Color::from_hex("#ffbb22")?;
        assert_eq!(color, Color::rgb(0xff, 0xbb, 0x22));
        assert_eq!(color.to_string(), "#ffbb22");

        let translucent = Color::from_hex("#0064c880")?;
        assert_eq!(translucent.a, 0x80);
        assert_eq!(translucent.to_string(), "#0064c880");
        Ok(())
    }

    #[test]
    fn invalid_hex_rejected() {
        assert!(Color::from_hex("006400").is_err());
        assert!(Color::from_hex("#06400").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
    }
}
