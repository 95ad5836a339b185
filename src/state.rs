//! Shared indicator state.
//!
//! One [`IndicatorState`] lives for the whole program, typically in a
//! `static`. Listeners write into it from the event dispatcher's context and
//! the sequencer reads it every tick. Each field is a separate `AtomicU8`
//! touched only with plain loads and stores, so the type works on cores
//! without compare-and-swap.
//!
//! Updates spanning several fields (a profile change writes slot, phase and
//! flash count) are not atomic as a group. The sequencer may observe a
//! half-applied update for at most one tick.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::config::BATTERY_UNKNOWN;
use crate::types::{Connection, LockIndicators};

/// Keyboard state that drives the status LED.
#[derive(Debug)]
pub struct IndicatorState {
    keylock: AtomicU8,
    connection: AtomicU8,
    active_device: AtomicU8,
    flash_times: AtomicU8,
    battery: AtomicU8,
}

/// A plain copy of [`IndicatorState`] at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorSnapshot {
    pub keylock: LockIndicators,
    pub connection: Connection,
    pub active_device: u8,
    pub flash_times: u8,
    pub battery: u8,
}

impl IndicatorState {
    /// Creates a zeroed state, the same as a freshly booted image before the
    /// startup task has run.
    pub const fn new() -> Self {
        Self {
            keylock: AtomicU8::new(0),
            connection: AtomicU8::new(Connection::Idle.as_raw()),
            active_device: AtomicU8::new(0),
            flash_times: AtomicU8::new(0),
            battery: AtomicU8::new(0),
        }
    }

    /// Applies the boot-time defaults.
    ///
    /// Starts the BLE animation before any profile event has arrived and marks
    /// the battery as unknown so the low-battery blink stays off until a real
    /// reading comes in. `flash_times` is left alone; at zero the wrapping
    /// countdown gives a 256-boundary boot animation.
    pub fn apply_boot_defaults(&self) {
        self.set_connection(Connection::Pairing);
        self.set_battery(BATTERY_UNKNOWN);
        info!("indicator boot defaults applied");
    }

    /// Host lock indicators.
    #[inline]
    pub fn keylock(&self) -> LockIndicators {
        LockIndicators(self.keylock.load(Ordering::Relaxed))
    }

    /// Stores the host lock indicators.
    #[inline]
    pub fn set_keylock(&self, keylock: LockIndicators) {
        self.keylock.store(keylock.bits(), Ordering::Relaxed);
    }

    /// BLE animation phase.
    #[inline]
    pub fn connection(&self) -> Connection {
        Connection::from_raw(self.connection.load(Ordering::Relaxed))
    }

    /// Sets the BLE animation phase.
    #[inline]
    pub fn set_connection(&self, connection: Connection) {
        self.connection.store(connection.as_raw(), Ordering::Relaxed);
    }

    /// Active profile slot, 3 when no usable slot is selected.
    #[inline]
    pub fn active_device(&self) -> u8 {
        self.active_device.load(Ordering::Relaxed)
    }

    /// Sets the active profile slot.
    #[inline]
    pub fn set_active_device(&self, slot: u8) {
        self.active_device.store(slot, Ordering::Relaxed);
    }

    /// Phase boundaries left in the BLE animation.
    #[inline]
    pub fn flash_times(&self) -> u8 {
        self.flash_times.load(Ordering::Relaxed)
    }

    /// Sets the BLE animation countdown.
    #[inline]
    pub fn set_flash_times(&self, count: u8) {
        self.flash_times.store(count, Ordering::Relaxed);
    }

    /// Decrements the flash countdown (wrapping) and returns the new value.
    ///
    /// Load followed by store: only the sequencer calls this, so the sole
    /// competing writer is the BLE listener resetting the count.
    #[inline]
    pub fn decrement_flash_times(&self) -> u8 {
        let next = self.flash_times().wrapping_sub(1);
        self.set_flash_times(next);
        next
    }

    /// Battery state of charge in percent, or [`BATTERY_UNKNOWN`].
    #[inline]
    pub fn battery(&self) -> u8 {
        self.battery.load(Ordering::Relaxed)
    }

    /// Stores the battery state of charge.
    #[inline]
    pub fn set_battery(&self, percent: u8) {
        self.battery.store(percent, Ordering::Relaxed);
    }

    /// Copies every field out. Fields are read one by one, not as a group.
    pub fn snapshot(&self) -> IndicatorSnapshot {
        IndicatorSnapshot {
            keylock: self.keylock(),
            connection: self.connection(),
            active_device: self.active_device(),
            flash_times: self.flash_times(),
            battery: self.battery(),
        }
    }
}

impl Default for IndicatorState {
    fn default() -> Self {
        Self::new()
    }
}
