//! RGB color value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// An RGB color, used for leather armor and firework effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::from_rgb(0x00, 0x00, 0x00);
    pub const RED: Color = Color::from_rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Color = Color::from_rgb(0x00, 0x80, 0x00);
    pub const BLUE: Color = Color::from_rgb(0x00, 0x00, 0xFF);
    pub const YELLOW: Color = Color::from_rgb(0xFF, 0xFF, 0x00);
    pub const PURPLE: Color = Color::from_rgb(0x80, 0x00, 0x80);

    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build a color from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    pub const fn from_packed(rgb: u32) -> Self {
        Self {
            red: ((rgb >> 16) & 0xFF) as u8,
            green: ((rgb >> 8) & 0xFF) as u8,
            blue: (rgb & 0xFF) as u8,
        }
    }

    /// Packed `0xRRGGBB` value
    pub const fn as_packed(&self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }

    #[inline]
    pub fn red(&self) -> u8 {
        self.red
    }

    #[inline]
    pub fn green(&self) -> u8 {
        self.green
    }

    #[inline]
    pub fn blue(&self) -> u8 {
        self.blue
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_conversion() {
        let color = Color::from_packed(0x12_34_56);
        assert_eq!(color.red(), 0x12);
        assert_eq!(color.green(), 0x34);
        assert_eq!(color.blue(), 0x56);
        assert_eq!(color.as_packed(), 0x12_34_56);
    }

    #[test]
    fn packed_ignores_high_bits() {
        assert_eq!(Color::from_packed(0xFF_00_00_00), Color::BLACK);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Color::PURPLE.to_string(), "#800080");
        assert_eq!(Color::from_rgb(1, 2, 3).to_string(), "#010203");
    }
}
