//! De-duplicating color setter.

use crate::colors::IndicatorColor;
use crate::driver::LedDriver;

/// Pushes [`IndicatorColor`] changes to an [`LedDriver`].
///
/// Remembers the last applied color and skips the hardware entirely when the
/// same color is requested again. On a change the whole mask goes to
/// [`LedDriver::show`], which by default writes every channel, red first. The
/// cache starts at [`IndicatorColor::OFF`], so the driver must
/// come up with all channels dark.
pub struct ColorSetter<L: LedDriver> {
    led: L,
    last: IndicatorColor,
}

impl<L: LedDriver> ColorSetter<L> {
    /// Wraps `led`, assuming it is currently dark.
    pub fn new(led: L) -> Self {
        Self {
            led,
            last: IndicatorColor::OFF,
        }
    }

    /// Shows `color` if it differs from the last one shown.
    pub fn set_indicator_color(&mut self, color: IndicatorColor) {
        if color != self.last {
            self.write(color);
            self.last = color;
        }
    }

    /// Re-writes the cached color regardless of the cache, e.g. after the LED
    /// driver was reset behind our back.
    pub fn force_refresh(&mut self) {
        let color = self.last;
        self.write(color);
    }

    /// Returns the last color written to the hardware.
    pub fn last_color(&self) -> IndicatorColor {
        self.last
    }

    /// Returns the wrapped driver.
    pub fn driver(&self) -> &L {
        &self.led
    }

    /// Returns the wrapped driver mutably. Changes made through it are not
    /// seen by the cache.
    pub fn driver_mut(&mut self) -> &mut L {
        &mut self.led
    }

    /// Releases the wrapped driver.
    pub fn into_inner(self) -> L {
        self.led
    }

    fn write(&mut self, color: IndicatorColor) {
        trace!("indicator color {}", color.bits());
        self.led.show(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::LedChannel;

    // Counts driver calls and tracks the lit channels
    #[derive(Default)]
    struct CountingLed {
        lit: u8,
        calls: usize,
    }

    impl LedDriver for CountingLed {
        fn channel_on(&mut self, channel: LedChannel) {
            self.lit |= channel.bit();
            self.calls += 1;
        }

        fn channel_off(&mut self, channel: LedChannel) {
            self.lit &= !channel.bit();
            self.calls += 1;
        }
    }

    #[test]
    fn repeated_color_is_written_once() {
        let mut setter = ColorSetter::new(CountingLed::default());
        setter.set_indicator_color(IndicatorColor::CYAN);
        setter.set_indicator_color(IndicatorColor::CYAN);

        assert_eq!(setter.driver().calls, 3);
        assert_eq!(setter.driver().lit, 0b110);
    }

    #[test]
    fn off_at_startup_writes_nothing() {
        let mut setter = ColorSetter::new(CountingLed::default());
        setter.set_indicator_color(IndicatorColor::OFF);
        assert_eq!(setter.driver().calls, 0);
    }

    #[test]
    fn change_writes_all_channels() {
        let mut setter = ColorSetter::new(CountingLed::default());
        setter.set_indicator_color(IndicatorColor::RED);
        setter.set_indicator_color(IndicatorColor::BLUE);

        assert_eq!(setter.driver().calls, 6);
        assert_eq!(setter.driver().lit, 0b100);
        assert_eq!(setter.last_color(), IndicatorColor::BLUE);
    }

    #[test]
    fn force_refresh_rewrites_cached_color() {
        let mut setter = ColorSetter::new(CountingLed::default());
        setter.set_indicator_color(IndicatorColor::GREEN);
        setter.driver_mut().lit = 0;

        setter.force_refresh();
        assert_eq!(setter.driver().lit, 0b010);
        assert_eq!(setter.driver().calls, 6);
    }
}
