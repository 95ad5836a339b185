//! Indicator tuning.

use crate::colors::IndicatorColor;

/// Number of BLE profile slots that have an indicator color.
pub const PROFILE_SLOTS: usize = 3;

/// Battery value meaning "no report received yet".
pub const BATTERY_UNKNOWN: u8 = 111;

/// Keycode that re-announces the BLE status when pressed.
pub const DEFAULT_REANNOUNCE_KEYCODE: u32 = 0xAB;

/// Timing, thresholds and colors used by the listeners and the sequencer.
///
/// `IndicatorConfig::new()` yields the stock firmware values. Every field can
/// be overridden with the `with_*` methods, which are `const` so a config can
/// live in a `static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorConfig {
    /// Keycode that triggers a BLE status re-announce.
    pub reannounce_keycode: u32,

    /// Battery percentages below this show the low-battery blink.
    pub low_battery_threshold: u8,

    /// Phase boundaries to animate after a profile connects.
    pub connected_flash_steps: u8,

    /// Phase boundaries to animate while a profile is pairing.
    pub pairing_flash_steps: u8,

    /// Sequencer wake-up period.
    pub tick_period_ms: u32,

    /// Delay between boot and the first sequencer tick.
    pub sequencer_start_delay_ms: u32,

    /// Delay between boot and the boot defaults being applied.
    pub startup_delay_ms: u32,

    /// Color for each profile slot.
    pub profile_palette: [IndicatorColor; PROFILE_SLOTS],
}

impl IndicatorConfig {
    /// Stock firmware settings.
    pub const fn new() -> Self {
        Self {
            reannounce_keycode: DEFAULT_REANNOUNCE_KEYCODE,
            low_battery_threshold: 10,
            // 3 and 15 full cycles of 4 phases
            connected_flash_steps: 3 * 4,
            pairing_flash_steps: 15 * 4,
            tick_period_ms: 20,
            sequencer_start_delay_ms: 100,
            startup_delay_ms: 200,
            profile_palette: [
                IndicatorColor::YELLOW,
                IndicatorColor::CYAN,
                IndicatorColor::MAGENTA,
            ],
        }
    }

    /// Sets the keycode that re-announces the BLE status.
    pub const fn with_reannounce_keycode(mut self, keycode: u32) -> Self {
        self.reannounce_keycode = keycode;
        self
    }

    /// Sets the battery percentage below which the red blink starts.
    pub const fn with_low_battery_threshold(mut self, percent: u8) -> Self {
        self.low_battery_threshold = percent;
        self
    }

    /// Sets the flash counts for the connected and pairing animations.
    pub const fn with_flash_steps(mut self, connected: u8, pairing: u8) -> Self {
        self.connected_flash_steps = connected;
        self.pairing_flash_steps = pairing;
        self
    }

    /// Sets the sequencer tick period.
    pub const fn with_tick_period_ms(mut self, period_ms: u32) -> Self {
        self.tick_period_ms = period_ms;
        self
    }

    /// Sets the delays before the first tick and before the boot defaults.
    pub const fn with_boot_delays_ms(mut self, sequencer: u32, startup: u32) -> Self {
        self.sequencer_start_delay_ms = sequencer;
        self.startup_delay_ms = startup;
        self
    }

    /// Sets the color for each profile slot.
    pub const fn with_profile_palette(mut self, palette: [IndicatorColor; PROFILE_SLOTS]) -> Self {
        self.profile_palette = palette;
        self
    }

    /// Returns the color for a profile slot, or `None` past the last slot.
    #[inline]
    pub fn profile_color(&self, slot: u8) -> Option<IndicatorColor> {
        self.profile_palette.get(slot as usize).copied()
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
