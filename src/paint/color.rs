//! B/W Color for the panel

use embedded_graphics::pixelcolor::BinaryColor;

/// Pixel color.
///
/// The panel RAM is inverted, a black ("colored") pixel is a cleared bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Colored pixel, bit 0
    Black,
    /// Background, bit 1
    #[default]
    White,
}

impl Color {
    /// Byte value with all 8 pixels in this color
    pub fn get_byte_value(self) -> u8 {
        match self {
            Color::Black => 0x00,
            Color::White => 0xFF,
        }
    }

    /// Whether this color clears the bit
    pub fn is_colored(self) -> bool {
        self == Color::Black
    }
}

/// `true` means colored
impl From<bool> for Color {
    fn from(colored: bool) -> Self {
        if colored {
            Color::Black
        } else {
            Color::White
        }
    }
}

/// `On` is colored, the way embedded-graphics mono fonts draw their glyphs
impl From<BinaryColor> for Color {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::On => Color::Black,
            BinaryColor::Off => Color::White,
        }
    }
}

impl From<Color> for BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => BinaryColor::On,
            Color::White => BinaryColor::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_values_are_inverted() {
        assert_eq!(Color::Black.get_byte_value(), 0x00);
        assert_eq!(Color::White.get_byte_value(), 0xFF);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Color::from(true), Color::Black);
        assert_eq!(Color::from(false), Color::White);
        assert_eq!(Color::from(BinaryColor::On), Color::Black);
        assert_eq!(BinaryColor::from(Color::White), BinaryColor::Off);
        assert_eq!(BinaryColor::from(Color::Black), BinaryColor::On);
        assert!(Color::Black.is_colored());
    }
}
