//! LED hardware abstraction.
//!
//! The sequencer only ever switches three fixed channels on or off through
//! [`LedDriver`]. Two adapters are provided: [`GpioLeds`] for discrete LEDs on
//! `embedded-hal` output pins, and [`RgbChannels`] for LEDs that take a full
//! color through [`RgbLed`].

use embedded_hal::digital::OutputPin;
use palette::Srgb;

use crate::colors::IndicatorColor;

/// One channel of the status LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedChannel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl LedChannel {
    /// All channels in bit order.
    pub const ALL: [LedChannel; 3] = [LedChannel::Red, LedChannel::Green, LedChannel::Blue];

    /// Bit for this channel in an [`IndicatorColor`] mask.
    #[inline]
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Position of this channel in pin and channel arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Trait for abstracting the three-channel status LED.
///
/// Implementations should handle hardware errors internally; these methods
/// cannot fail.
pub trait LedDriver {
    /// Lights one channel.
    fn channel_on(&mut self, channel: LedChannel);

    /// Darkens one channel.
    fn channel_off(&mut self, channel: LedChannel);

    /// Shows a whole color mask.
    ///
    /// The default writes every channel, red first. Drivers that can switch
    /// all channels at once should override this so no intermediate color is
    /// shown between the per-channel writes.
    fn show(&mut self, color: IndicatorColor) {
        for channel in LedChannel::ALL {
            if color.bits() & channel.bit() != 0 {
                self.channel_on(channel);
            } else {
                self.channel_off(channel);
            }
        }
    }
}

/// Trait for LEDs driven with a full RGB color (PWM, addressable, ...).
///
/// Color components are in the range 0.0-1.0.
pub trait RgbLed {
    /// Sets the LED to the specified RGB color.
    fn set_color(&mut self, color: Srgb);
}

/// Three discrete LEDs wired to GPIO outputs.
pub struct GpioLeds<P: OutputPin> {
    pins: [P; 3],
    active_low: bool,
}

impl<P: OutputPin> GpioLeds<P> {
    /// Creates a driver for LEDs lit by driving the pin high.
    pub fn new(red: P, green: P, blue: P) -> Self {
        Self {
            pins: [red, green, blue],
            active_low: false,
        }
    }

    /// Creates a driver for LEDs lit by driving the pin low.
    pub fn new_active_low(red: P, green: P, blue: P) -> Self {
        Self {
            pins: [red, green, blue],
            active_low: true,
        }
    }

    /// Releases the pins.
    pub fn release(self) -> [P; 3] {
        self.pins
    }

    fn drive(&mut self, channel: LedChannel, lit: bool) {
        let pin = &mut self.pins[channel.index()];
        let result = if lit != self.active_low {
            pin.set_high()
        } else {
            pin.set_low()
        };

        if result.is_err() {
            warn!("failed to drive LED channel {}", channel.index());
        }
    }
}

impl<P: OutputPin> LedDriver for GpioLeds<P> {
    fn channel_on(&mut self, channel: LedChannel) {
        self.drive(channel, true);
    }

    fn channel_off(&mut self, channel: LedChannel) {
        self.drive(channel, false);
    }
}

/// Adapts an [`RgbLed`] into a three-channel [`LedDriver`].
///
/// Keeps the set of lit channels and pushes the combined color to the LED.
/// A mask change through [`LedDriver::show`] is a single `set_color` call;
/// the per-channel methods push one color each.
pub struct RgbChannels<L: RgbLed> {
    led: L,
    lit: IndicatorColor,
    brightness: f32,
}

impl<L: RgbLed> RgbChannels<L> {
    /// Wraps `led` at full brightness and turns it off.
    pub fn new(led: L) -> Self {
        Self::with_brightness(led, 1.0)
    }

    /// Wraps `led` with lit channels at `brightness` (0.0-1.0) and turns it off.
    pub fn with_brightness(mut led: L, brightness: f32) -> Self {
        led.set_color(IndicatorColor::OFF.to_srgb());

        Self {
            led,
            lit: IndicatorColor::OFF,
            brightness: brightness.clamp(0.0, 1.0),
        }
    }

    /// Returns the channels currently lit.
    pub fn lit(&self) -> IndicatorColor {
        self.lit
    }

    /// Releases the wrapped LED.
    pub fn into_inner(self) -> L {
        self.led
    }

    fn update(&mut self, lit: IndicatorColor) {
        self.lit = lit;
        self.led.set_color(lit.to_srgb_scaled(self.brightness));
    }
}

impl<L: RgbLed> LedDriver for RgbChannels<L> {
    fn channel_on(&mut self, channel: LedChannel) {
        self.update(IndicatorColor::from_bits(self.lit.bits() | channel.bit()));
    }

    fn channel_off(&mut self, channel: LedChannel) {
        self.update(IndicatorColor::from_bits(self.lit.bits() & !channel.bit()));
    }

    fn show(&mut self, color: IndicatorColor) {
        self.update(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setter::ColorSetter;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    #[derive(Default)]
    struct MockPin {
        high: bool,
        writes: usize,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    struct MockRgb {
        color: Srgb,
        writes: usize,
    }

    impl MockRgb {
        fn new(color: Srgb) -> Self {
            Self { color, writes: 0 }
        }
    }

    impl RgbLed for MockRgb {
        fn set_color(&mut self, color: Srgb) {
            self.color = color;
            self.writes += 1;
        }
    }

    struct HistoryRgb {
        shown: Vec<IndicatorColor>,
    }

    impl RgbLed for HistoryRgb {
        fn set_color(&mut self, color: Srgb) {
            let bits = u8::from(color.red > 0.0)
                | u8::from(color.green > 0.0) << 1
                | u8::from(color.blue > 0.0) << 2;
            self.shown.push(IndicatorColor::from_bits(bits));
        }
    }

    #[test]
    fn channel_bits_follow_mask_layout() {
        assert_eq!(LedChannel::Red.bit(), 0b001);
        assert_eq!(LedChannel::Green.bit(), 0b010);
        assert_eq!(LedChannel::Blue.bit(), 0b100);
    }

    #[test]
    fn gpio_leds_drive_pins_high_when_lit() {
        let mut leds = GpioLeds::new(MockPin::default(), MockPin::default(), MockPin::default());
        leds.channel_on(LedChannel::Green);

        let [red, green, blue] = leds.release();
        assert!(!red.high);
        assert!(green.high);
        assert!(!blue.high);
        assert_eq!(green.writes, 1);
        assert_eq!(red.writes + blue.writes, 0);
    }

    #[test]
    fn gpio_leds_active_low_inverts_level() {
        let mut leds =
            GpioLeds::new_active_low(MockPin::default(), MockPin::default(), MockPin::default());
        leds.channel_off(LedChannel::Red);
        leds.channel_on(LedChannel::Blue);

        let [red, _, blue] = leds.release();
        assert!(red.high);
        assert!(!blue.high);
    }

    #[test]
    fn rgb_channels_combine_lit_channels() {
        let mut leds = RgbChannels::new(MockRgb::new(Srgb::new(1.0, 1.0, 1.0)));
        assert_eq!(leds.lit(), IndicatorColor::OFF);

        leds.channel_on(LedChannel::Red);
        leds.channel_on(LedChannel::Blue);
        assert_eq!(leds.lit(), IndicatorColor::MAGENTA);

        leds.channel_off(LedChannel::Red);
        let led = leds.into_inner();
        assert_eq!(
            (led.color.red, led.color.green, led.color.blue),
            (0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn rgb_channels_scale_brightness() {
        let mut leds =
            RgbChannels::with_brightness(MockRgb::new(Srgb::new(0.0, 0.0, 0.0)), 0.5);
        leds.channel_on(LedChannel::Green);
        let led = leds.into_inner();
        assert_eq!(led.color.green, 0.5);
    }

    #[test]
    fn rgb_channels_show_pushes_whole_mask_at_once() {
        let mut leds = RgbChannels::new(MockRgb::new(Srgb::new(0.0, 0.0, 0.0)));
        leds.show(IndicatorColor::YELLOW);
        leds.show(IndicatorColor::BLUE);

        assert_eq!(leds.lit(), IndicatorColor::BLUE);
        let led = leds.into_inner();
        // One write at construction plus one per shown color
        assert_eq!(led.writes, 3);
        assert_eq!(led.color.blue, 1.0);
    }

    #[test]
    fn yellow_to_blue_skips_intermediate_colors() {
        let mut setter = ColorSetter::new(RgbChannels::new(HistoryRgb { shown: Vec::new() }));
        setter.set_indicator_color(IndicatorColor::YELLOW);
        setter.set_indicator_color(IndicatorColor::BLUE);

        let led = setter.into_inner().into_inner();
        assert_eq!(
            led.shown,
            [IndicatorColor::OFF, IndicatorColor::YELLOW, IndicatorColor::BLUE]
        );
    }

    #[test]
    fn default_show_writes_every_channel_red_first() {
        let mut leds = GpioLeds::new(MockPin::default(), MockPin::default(), MockPin::default());
        leds.show(IndicatorColor::CYAN);

        let [red, green, blue] = leds.release();
        assert!(!red.high);
        assert!(green.high);
        assert!(blue.high);
        assert_eq!(red.writes + green.writes + blue.writes, 3);
    }
}
