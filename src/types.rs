//! Core types shared by the listeners and the sequencer.

/// Host lock-indicator bitmask as reported over HID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LockIndicators(pub u8);

impl LockIndicators {
    /// Num lock bit.
    pub const NUM_LOCK: u8 = 1 << 0;

    /// Caps lock bit.
    pub const CAPS_LOCK: u8 = 1 << 1;

    /// Scroll lock bit.
    pub const SCROLL_LOCK: u8 = 1 << 2;

    /// No lock active.
    pub const NONE: Self = LockIndicators(0);

    /// Returns the raw bitmask.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Num lock LED requested by the host.
    #[inline]
    pub const fn num_lock(self) -> bool {
        self.0 & Self::NUM_LOCK != 0
    }

    /// Caps lock LED requested by the host.
    #[inline]
    pub const fn caps_lock(self) -> bool {
        self.0 & Self::CAPS_LOCK != 0
    }

    /// Scroll lock LED requested by the host.
    #[inline]
    pub const fn scroll_lock(self) -> bool {
        self.0 & Self::SCROLL_LOCK != 0
    }
}

impl From<u8> for LockIndicators {
    fn from(bits: u8) -> Self {
        LockIndicators(bits)
    }
}

/// Bluetooth link phase of the active profile, as far as the indicator cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Connection {
    /// No BLE animation pending.
    #[default]
    Idle = 0,

    /// Profile is advertising or waiting for a host.
    Pairing = 1,

    /// Profile has a live connection.
    Connected = 2,
}

impl Connection {
    /// Decodes the raw value stored in the shared state. Unknown values map to `Pairing`,
    /// matching the firmware's "anything non-zero and not connected blinks" reading.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Connection::Idle,
            2 => Connection::Connected,
            _ => Connection::Pairing,
        }
    }

    /// Raw value as stored in the shared state.
    #[inline]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }
}

impl core::fmt::Display for Connection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Connection::Idle => write!(f, "idle"),
            Connection::Pairing => write!(f, "pairing"),
            Connection::Connected => write!(f, "connected"),
        }
    }
}

/// A Bluetooth LE address with its address type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BleAddress {
    /// Address type (public, random, ...).
    pub kind: u8,

    /// Address bytes, little endian.
    pub bytes: [u8; 6],
}

impl BleAddress {
    /// The "any" address. A profile slot holding it has never been bonded.
    pub const ANY: Self = BleAddress {
        kind: 0,
        bytes: [0; 6],
    };

    /// Creates an address from its type byte and six address bytes.
    #[inline]
    pub const fn new(kind: u8, bytes: [u8; 6]) -> Self {
        Self { kind, bytes }
    }

    /// Returns true if this is the unset sentinel.
    #[inline]
    pub fn is_unset(&self) -> bool {
        *self == Self::ANY
    }
}

/// A queued blink request.
///
/// Nothing in the crate produces or consumes these yet; the type is kept so a
/// request queue can be added without changing the public data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkItem {
    /// Time the LED stays lit, in milliseconds.
    pub duration_ms: u16,

    /// Time the LED stays dark between blinks, in milliseconds.
    pub sleep_ms: u16,

    /// Number of blinks.
    pub count: u8,
}

impl BlinkItem {
    /// Creates a blink item.
    #[inline]
    pub const fn new(duration_ms: u16, sleep_ms: u16, count: u8) -> Self {
        Self {
            duration_ms,
            sleep_ms,
            count,
        }
    }
}
