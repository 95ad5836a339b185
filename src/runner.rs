//! Async drivers for the sequencer and the boot defaults, on `embassy-time`.
//!
//! `embassy_executor::task` functions cannot be generic, so these are plain
//! async functions for the firmware to wrap in its own tasks:
//!
//! ```ignore
//! #[embassy_executor::task]
//! async fn indicator_task(seq: &'static mut BlinkSequencer<'static, Leds, Ble>) -> ! {
//!     klink_indicator::runner::run_sequencer(seq).await
//! }
//! ```

use embassy_time::Timer;

use crate::config::IndicatorConfig;
use crate::driver::LedDriver;
use crate::listener::BleProfiles;
use crate::sequencer::BlinkSequencer;
use crate::state::IndicatorState;

/// Ticks the sequencer forever, starting after the configured boot delay.
pub async fn run_sequencer<L: LedDriver, B: BleProfiles>(
    sequencer: &mut BlinkSequencer<'_, L, B>,
) -> ! {
    let config = *sequencer.config();
    Timer::after_millis(u64::from(config.sequencer_start_delay_ms)).await;
    info!("indicator sequencer running");

    loop {
        Timer::after_millis(u64::from(config.tick_period_ms)).await;
        sequencer.tick();
    }
}

/// Waits for the startup delay, then applies the boot defaults once.
pub async fn run_startup(state: &IndicatorState, config: &IndicatorConfig) {
    Timer::after_millis(u64::from(config.startup_delay_ms)).await;
    state.apply_boot_defaults();
}
