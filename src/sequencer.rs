//! Blink sequencer.
//!
//! Provides [`BlinkSequencer`], which polls the shared [`IndicatorState`] once
//! per tick, picks the indication mode by priority and renders it through a
//! [`ColorSetter`]. Mode changes come only from state mutations made by the
//! listeners; the sequencer re-evaluates priority on every tick.

use crate::colors::IndicatorColor;
use crate::config::IndicatorConfig;
use crate::driver::LedDriver;
use crate::error::IndicatorError;
use crate::listener::BleProfiles;
use crate::setter::ColorSetter;
use crate::state::IndicatorState;
use crate::types::Connection;

/// Ticks per phase minus one; a phase boundary is `ticks & PHASE_MASK == PHASE_MASK`.
pub const PHASE_MASK: u16 = 0x0F;

/// Ticks per low-battery cycle minus one.
pub const BATTERY_CYCLE_MASK: u16 = 0x1F;

/// Step within the low-battery cycle at which the red flash starts; the LED
/// goes dark again at [`BATTERY_CYCLE_MASK`].
pub const BATTERY_ON_STEP: u16 = BATTERY_CYCLE_MASK >> 1;

/// Phases in one BLE animation cycle.
pub const PHASES: u8 = 4;

/// Which indication the sequencer is rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorMode {
    /// Profile slot animation; active while `connection != Idle`.
    BleStatus,
    /// Slow red blink; active while the battery is below the threshold.
    LowBattery,
    /// Steady caps-lock color.
    LockStatus,
}

/// Renders keyboard state onto the status LED.
///
/// Call [`tick`](Self::tick) once per tick period (20 ms by default). The
/// sequencer owns the color setter, so it is the only writer to the LED.
///
/// # Type Parameters
/// * `'a` - Lifetime of the shared state and BLE collaborator
/// * `L` - LED driver type
/// * `B` - BLE profile query type
pub struct BlinkSequencer<'a, L: LedDriver, B: BleProfiles> {
    setter: ColorSetter<L>,
    state: &'a IndicatorState,
    ble: &'a B,
    config: IndicatorConfig,
    ticks: u16,
}

impl<'a, L: LedDriver, B: BleProfiles> BlinkSequencer<'a, L, B> {
    /// Creates a sequencer at tick 0 with the LED assumed dark.
    pub fn new(led: L, state: &'a IndicatorState, ble: &'a B, config: IndicatorConfig) -> Self {
        Self {
            setter: ColorSetter::new(led),
            state,
            ble,
            config,
            ticks: 0,
        }
    }

    /// Advances one tick and renders the active mode.
    ///
    /// Returns the mode that was evaluated on this tick.
    pub fn tick(&mut self) -> IndicatorMode {
        self.ticks = self.ticks.wrapping_add(1);

        let mode = self.mode();
        match mode {
            IndicatorMode::BleStatus => self.render_ble_status(),
            IndicatorMode::LowBattery => self.render_low_battery(),
            IndicatorMode::LockStatus => self.render_lock_status(),
        }
        mode
    }

    /// Picks the mode the current state calls for: BLE, then low battery, then lock.
    pub fn mode(&self) -> IndicatorMode {
        if self.state.connection() != Connection::Idle {
            IndicatorMode::BleStatus
        } else if self.state.battery() < self.config.low_battery_threshold {
            IndicatorMode::LowBattery
        } else {
            IndicatorMode::LockStatus
        }
    }

    /// Phase within the 4-phase BLE cycle, 0-3.
    #[inline]
    pub fn phase(&self) -> u8 {
        ((self.ticks >> 4) & u16::from(PHASES - 1)) as u8
    }

    /// Ticks elapsed, wrapping at `u16::MAX`.
    #[inline]
    pub fn ticks(&self) -> u16 {
        self.ticks
    }

    /// True on the last tick of a phase, where the BLE animation advances.
    #[inline]
    pub fn is_phase_boundary(&self) -> bool {
        self.ticks & PHASE_MASK == PHASE_MASK
    }

    /// Color currently shown on the LED.
    pub fn current_color(&self) -> IndicatorColor {
        self.setter.last_color()
    }

    /// Configuration the sequencer was built with.
    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Shared state the sequencer reads.
    pub fn state(&self) -> &'a IndicatorState {
        self.state
    }

    /// Color setter owning the LED driver.
    pub fn setter(&self) -> &ColorSetter<L> {
        &self.setter
    }

    /// Mutable access to the color setter.
    pub fn setter_mut(&mut self) -> &mut ColorSetter<L> {
        &mut self.setter
    }

    /// Releases the LED driver.
    pub fn into_inner(self) -> L {
        self.setter.into_inner()
    }

    fn slot_color(&self, slot: u8) -> Result<IndicatorColor, IndicatorError> {
        self.config
            .profile_color(slot)
            .ok_or(IndicatorError::InvalidActiveDevice { slot })
    }

    fn render_ble_status(&mut self) {
        let color = match self.slot_color(self.state.active_device()) {
            Ok(color) => Some(color),
            Err(err) => {
                // No usable slot: stay dark but keep counting down so the mode still exits.
                self.setter.set_indicator_color(IndicatorColor::OFF);
                if self.is_phase_boundary() {
                    warn!("{}", err);
                }
                None
            }
        };

        if !self.is_phase_boundary() {
            return;
        }

        self.state.decrement_flash_times();

        if let Some(color) = color {
            let connected = self.state.connection() == Connection::Connected;
            match self.phase() {
                0 => self.setter.set_indicator_color(IndicatorColor::OFF),
                1 => self.setter.set_indicator_color(color),
                2 if !connected => self.setter.set_indicator_color(IndicatorColor::OFF),
                3 if !connected => {
                    let bonded = !self.ble.active_profile_address().is_unset();
                    let color = if bonded {
                        IndicatorColor::BLUE
                    } else {
                        IndicatorColor::RED
                    };
                    self.setter.set_indicator_color(color);
                }
                // Connected holds the slot color through phases 2 and 3
                _ => {}
            }
        }

        if self.state.flash_times() == 0 {
            debug!("BLE animation done");
            self.state.set_connection(Connection::Idle);
        }
    }

    fn render_low_battery(&mut self) {
        let step = self.ticks & BATTERY_CYCLE_MASK;
        if step == BATTERY_ON_STEP {
            self.setter.set_indicator_color(IndicatorColor::RED);
        } else if step == BATTERY_CYCLE_MASK {
            self.setter.set_indicator_color(IndicatorColor::OFF);
        }
    }

    fn render_lock_status(&mut self) {
        let color = if self.state.keylock().caps_lock() {
            IndicatorColor::MAGENTA
        } else {
            IndicatorColor::OFF
        };
        self.setter.set_indicator_color(color);
    }
}
