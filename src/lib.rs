#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`IndicatorState`**: Shared, lock-free record of lock bits, BLE phase, active slot, flash countdown and battery
//! - **`IndicatorListeners`**: Turns keyboard notifications (`IndicatorEvent`) into state updates
//! - **`BlinkSequencer`**: Polls the state every tick and renders the highest-priority mode
//! - **`ColorSetter`**: Writes a 3-bit `IndicatorColor` to the LED, skipping repeats
//! - **`LedDriver`**: Trait to implement for your three-channel LED (or use `GpioLeds` / `RgbChannels`)
//! - **`HidIndicators`** / **`BleProfiles`**: Traits to implement over your HID and Bluetooth stacks
//! - **`IndicatorConfig`**: Keycode, thresholds, timing and per-slot colors
//!
//! Modes, highest priority first: BLE status while a profile change is being
//! announced, low battery below 10%, and caps lock otherwise.

// Must come first so the logging macros are visible to the other modules
mod fmt;

pub mod colors;
pub mod config;
pub mod driver;
pub mod error;
pub mod listener;
pub mod sequencer;
pub mod setter;
pub mod state;
pub mod types;

#[cfg(feature = "embassy")]
pub mod runner;

pub use colors::IndicatorColor;
pub use config::{BATTERY_UNKNOWN, IndicatorConfig, PROFILE_SLOTS};
pub use driver::{GpioLeds, LedChannel, LedDriver, RgbChannels, RgbLed};
pub use error::IndicatorError;
pub use listener::{BleProfiles, HidIndicators, IndicatorEvent, IndicatorListeners};
pub use sequencer::{BlinkSequencer, IndicatorMode};
pub use setter::ColorSetter;
pub use state::{IndicatorSnapshot, IndicatorState};
pub use types::{BleAddress, BlinkItem, Connection, LockIndicators};

// Re-export Srgb from palette for RgbLed implementors
pub use palette::Srgb;
