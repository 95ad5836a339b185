//! Event listeners.
//!
//! Each keyboard notification the indicator cares about is an
//! [`IndicatorEvent`]. [`IndicatorListeners`] pulls whatever extra data the
//! event needs from the HID and BLE collaborators and writes the result into
//! the shared [`IndicatorState`]. Listeners run synchronously on the
//! dispatcher's context and never block.

use crate::config::{IndicatorConfig, PROFILE_SLOTS};
use crate::error::IndicatorError;
use crate::state::IndicatorState;
use crate::types::{BleAddress, Connection, LockIndicators};

/// Highest profile index the listener accepts. Index 3 is stored as the
/// "no usable slot" sentinel that the sequencer renders dark.
pub const MAX_PROFILE_INDEX: u8 = PROFILE_SLOTS as u8;

/// Host lock-indicator queries.
pub trait HidIndicators {
    /// Returns the lock indicators the host last reported.
    fn current_indicators(&self) -> LockIndicators;
}

/// Bluetooth profile queries.
pub trait BleProfiles {
    /// Index of the selected profile slot.
    fn active_profile_index(&self) -> u8;

    /// Whether the selected profile has a live connection.
    fn active_profile_is_connected(&self) -> bool;

    /// Bonded address of the selected profile, [`BleAddress::ANY`] if unbonded.
    fn active_profile_address(&self) -> BleAddress;
}

/// Notifications delivered by the keyboard event bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorEvent {
    /// Host lock LEDs changed.
    HidIndicatorsChanged,

    /// Active BLE profile changed or its connection state did.
    BleActiveProfileChanged,

    /// A key was pressed or released.
    KeycodeStateChanged { keycode: u32, pressed: bool },

    /// Battery telemetry update.
    BatteryStateChanged {
        /// 0-100
        state_of_charge: u8,
    },
}

/// The four indicator listeners bound to their collaborators.
pub struct IndicatorListeners<'a, H: HidIndicators, B: BleProfiles> {
    state: &'a IndicatorState,
    hid: &'a H,
    ble: &'a B,
    config: IndicatorConfig,
}

impl<'a, H: HidIndicators, B: BleProfiles> IndicatorListeners<'a, H, B> {
    /// Binds the listeners to the shared state and collaborators.
    pub fn new(state: &'a IndicatorState, hid: &'a H, ble: &'a B, config: IndicatorConfig) -> Self {
        Self {
            state,
            hid,
            ble,
            config,
        }
    }

    /// Routes an event to its listener.
    ///
    /// Listener errors are logged and dropped; the state is left as it was.
    pub fn handle(&self, event: IndicatorEvent) {
        match event {
            IndicatorEvent::HidIndicatorsChanged => self.on_hid_indicators_changed(),
            IndicatorEvent::BleActiveProfileChanged => self.on_ble_active_profile_changed(),
            IndicatorEvent::KeycodeStateChanged { keycode, pressed } => {
                self.on_keycode_state_changed(keycode, pressed)
            }
            IndicatorEvent::BatteryStateChanged { state_of_charge } => {
                self.on_battery_state_changed(state_of_charge)
            }
        }
    }

    /// Copies the host lock indicators into the state.
    pub fn on_hid_indicators_changed(&self) {
        let keylock = self.hid.current_indicators();
        debug!("lock leds: {}", keylock.bits());
        self.state.set_keylock(keylock);
    }

    /// Restarts the BLE animation for the active profile.
    pub fn on_ble_active_profile_changed(&self) {
        if let Err(err) = self.update_ble_profile() {
            warn!("ignoring profile update: {}", err);
        }
    }

    /// Re-announces the BLE status when the configured key is seen.
    ///
    /// Fires on both press and release, so one key tap restarts the animation
    /// twice in quick succession with identical values.
    pub fn on_keycode_state_changed(&self, keycode: u32, pressed: bool) {
        trace!("key {} pressed={}", keycode, pressed);
        if keycode == self.config.reannounce_keycode {
            self.on_ble_active_profile_changed();
        }
    }

    /// Stores the reported state of charge.
    #[cfg(feature = "battery-reporting")]
    pub fn on_battery_state_changed(&self, state_of_charge: u8) {
        debug!("battery {}%", state_of_charge);
        self.state.set_battery(state_of_charge);
    }

    /// Battery reporting is disabled; the event is ignored.
    #[cfg(not(feature = "battery-reporting"))]
    pub fn on_battery_state_changed(&self, _state_of_charge: u8) {}

    /// Reads the active profile from the BLE stack and restarts the BLE
    /// animation for it.
    ///
    /// # Errors
    /// * `ProfileIndexOutOfRange` - the stack reported an index above
    ///   [`MAX_PROFILE_INDEX`]; the state is not touched.
    pub fn update_ble_profile(&self) -> Result<(), IndicatorError> {
        let index = self.ble.active_profile_index();
        if index > MAX_PROFILE_INDEX {
            return Err(IndicatorError::ProfileIndexOutOfRange { index });
        }

        self.state.set_active_device(index);
        if self.ble.active_profile_is_connected() {
            self.state.set_connection(Connection::Connected);
            self.state.set_flash_times(self.config.connected_flash_steps);
        } else {
            self.state.set_connection(Connection::Pairing);
            self.state.set_flash_times(self.config.pairing_flash_steps);
        }

        let connection = self.state.connection();
        debug!("device BT{}, connection {}", index + 1, connection);
        Ok(())
    }

    /// Shared state the listeners write.
    pub fn state(&self) -> &'a IndicatorState {
        self.state
    }

    /// Configuration the listeners were built with.
    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }
}
