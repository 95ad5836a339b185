//! Indicator colors.
//!
//! The status LED has three independently switched channels, so a color is
//! just a 3-bit mask: bit0 red, bit1 green, bit2 blue. Conversions to
//! `palette::Srgb` are provided for drivers that take a full color.

use palette::Srgb;

/// A color the status LED can show, as a channel mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorColor(u8);

impl IndicatorColor {
    /// Mask covering the three channels.
    pub const MASK: u8 = 0b111;

    pub const OFF: Self = IndicatorColor(0b000);
    pub const RED: Self = IndicatorColor(0b001);
    pub const GREEN: Self = IndicatorColor(0b010);
    pub const BLUE: Self = IndicatorColor(0b100);
    /// Red + green.
    pub const YELLOW: Self = IndicatorColor(0b011);
    /// Green + blue.
    pub const CYAN: Self = IndicatorColor(0b110);
    /// Red + blue.
    pub const MAGENTA: Self = IndicatorColor(0b101);
    pub const WHITE: Self = IndicatorColor(0b111);

    /// Creates a color from a channel mask. Bits above bit2 are dropped.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        IndicatorColor(bits & Self::MASK)
    }

    /// Returns the channel mask.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True if no channel is lit.
    #[inline]
    pub const fn is_off(self) -> bool {
        self.0 == 0
    }

    /// Red channel lit.
    #[inline]
    pub const fn red(self) -> bool {
        self.0 & 0b001 != 0
    }

    /// Green channel lit.
    #[inline]
    pub const fn green(self) -> bool {
        self.0 & 0b010 != 0
    }

    /// Blue channel lit.
    #[inline]
    pub const fn blue(self) -> bool {
        self.0 & 0b100 != 0
    }

    /// Converts to a full-brightness `Srgb` (each channel 0.0 or 1.0).
    pub fn to_srgb(self) -> Srgb {
        self.to_srgb_scaled(1.0)
    }

    /// Converts to an `Srgb` with lit channels at `brightness` (clamped to 0.0-1.0).
    pub fn to_srgb_scaled(self, brightness: f32) -> Srgb {
        let level = brightness.clamp(0.0, 1.0);
        let channel = |lit: bool| if lit { level } else { 0.0 };
        Srgb::new(
            channel(self.red()),
            channel(self.green()),
            channel(self.blue()),
        )
    }

    /// Converts to 8-bit components for drivers that take raw bytes.
    pub fn to_rgb8(self) -> Srgb<u8> {
        self.to_srgb().into_format()
    }
}

impl From<u8> for IndicatorColor {
    fn from(bits: u8) -> Self {
        IndicatorColor::from_bits(bits)
    }
}

impl From<IndicatorColor> for Srgb {
    fn from(color: IndicatorColor) -> Self {
        color.to_srgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bits_masks_high_bits() {
        assert_eq!(
            IndicatorColor::from_bits(0b1111_1101),
            IndicatorColor::MAGENTA
        );
    }

    #[test]
    fn named_colors_match_channel_bits() {
        assert!(IndicatorColor::RED.red());
        assert!(!IndicatorColor::RED.green());
        assert!(IndicatorColor::CYAN.green() && IndicatorColor::CYAN.blue());
        assert!(IndicatorColor::OFF.is_off());
    }

    #[test]
    fn srgb_conversion_uses_full_channels() {
        let c = IndicatorColor::YELLOW.to_srgb();
        assert_eq!((c.red, c.green, c.blue), (1.0, 1.0, 0.0));

        let dim = IndicatorColor::BLUE.to_srgb_scaled(0.25);
        assert_eq!((dim.red, dim.green, dim.blue), (0.0, 0.0, 0.25));
    }

    #[test]
    fn rgb8_conversion() {
        let c = IndicatorColor::MAGENTA.to_rgb8();
        assert_eq!((c.red, c.green, c.blue), (255, 0, 255));
    }
}
