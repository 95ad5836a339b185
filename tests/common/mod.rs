//! Shared test infrastructure for klink-indicator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;

use klink_indicator::{
    BleAddress, BleProfiles, HidIndicators, IndicatorColor, LedChannel, LedDriver, LockIndicators,
};

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records every channel write
pub struct MockLed {
    lit: u8,
    calls: usize,
    history: heapless::Vec<(LedChannel, bool), 64>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            lit: 0,
            calls: 0,
            history: heapless::Vec::new(),
        }
    }

    /// Channels currently lit
    pub fn lit(&self) -> IndicatorColor {
        IndicatorColor::from_bits(self.lit)
    }

    /// Total channel writes since creation
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// First 64 channel writes
    pub fn history(&self) -> &[(LedChannel, bool)] {
        &self.history
    }
}

impl LedDriver for MockLed {
    fn channel_on(&mut self, channel: LedChannel) {
        self.lit |= channel.bit();
        self.calls += 1;
        let _ = self.history.push((channel, true));
    }

    fn channel_off(&mut self, channel: LedChannel) {
        self.lit &= !channel.bit();
        self.calls += 1;
        let _ = self.history.push((channel, false));
    }
}

// ============================================================================
// Mock collaborators
// ============================================================================

/// Mock HID stack with settable lock indicators
pub struct MockHid {
    indicators: Cell<u8>,
}

impl MockHid {
    pub fn new() -> Self {
        Self {
            indicators: Cell::new(0),
        }
    }

    pub fn set(&self, bits: u8) {
        self.indicators.set(bits);
    }
}

impl HidIndicators for MockHid {
    fn current_indicators(&self) -> LockIndicators {
        LockIndicators(self.indicators.get())
    }
}

/// Mock BLE stack with a settable active profile
pub struct MockBle {
    index: Cell<u8>,
    connected: Cell<bool>,
    address: Cell<BleAddress>,
}

impl MockBle {
    pub fn new() -> Self {
        Self {
            index: Cell::new(0),
            connected: Cell::new(false),
            address: Cell::new(BleAddress::ANY),
        }
    }

    pub fn select(&self, index: u8, connected: bool) {
        self.index.set(index);
        self.connected.set(connected);
    }

    pub fn bond(&self) {
        self.address
            .set(BleAddress::new(1, [0xC1, 0x2E, 0x44, 0x90, 0x0B, 0xD3]));
    }
}

impl BleProfiles for MockBle {
    fn active_profile_index(&self) -> u8 {
        self.index.get()
    }

    fn active_profile_is_connected(&self) -> bool {
        self.connected.get()
    }

    fn active_profile_address(&self) -> BleAddress {
        self.address.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Color masks seen after each tick, starting with tick 1
pub fn tick_colors<B: BleProfiles>(
    sequencer: &mut klink_indicator::BlinkSequencer<'_, MockLed, B>,
    ticks: usize,
) -> std::vec::Vec<IndicatorColor> {
    (0..ticks)
        .map(|_| {
            sequencer.tick();
            sequencer.setter().driver().lit()
        })
        .collect()
}
