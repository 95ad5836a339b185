//! Error types.

/// Errors reported by the indicator core.
///
/// Neither variant is fatal: the listener leaves state untouched on a bad
/// profile index, and the sequencer renders the LED off on a bad slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorError {
    /// The BLE stack reported a profile index past the last slot.
    ProfileIndexOutOfRange {
        /// The index that was read
        index: u8,
    },

    /// The stored active device has no palette entry.
    InvalidActiveDevice {
        /// The stored slot
        slot: u8,
    },
}

impl core::fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IndicatorError::ProfileIndexOutOfRange { index } => {
                write!(f, "BLE profile index {} is out of range", index)
            }
            IndicatorError::InvalidActiveDevice { slot } => {
                write!(f, "active device slot {} has no indicator color", slot)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IndicatorError {}
