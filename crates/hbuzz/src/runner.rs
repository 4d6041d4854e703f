//! The buzz session: open the device, pulse on a fixed cadence, close once.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use hbuzz_hid_common::{HidDevice, HidPort, HidResult};
use hid_steamdeck_protocol::{HapticPulse, PadSelect};
use tracing::{debug, warn};

use crate::locator::open_haptic_device;

/// Granularity at which the inter-cycle pause polls the stop flag, so an
/// interrupt during the pause still exits promptly.
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Fixed driving parameters for the buzz loop.
#[derive(Debug, Clone)]
pub struct BuzzConfig {
    pub pulse: HapticPulse,
    pub select: PadSelect,
    pub interval: Duration,
}

impl Default for BuzzConfig {
    /// A ~200 ms buzz on both pads every 2 seconds: mid amplitude, 50 µs
    /// period repeated 4000 times.
    fn default() -> Self {
        Self {
            pulse: HapticPulse::new(0x8000, 0x0032, 4000),
            select: PadSelect::Both,
            interval: Duration::from_secs(2),
        }
    }
}

/// What the loop did before it was stopped.
#[derive(Debug, Default, Clone, Copy)]
pub struct SessionSummary {
    pub cycles: u64,
    pub write_failures: u64,
}

/// Open the haptic device and buzz until `stop` is raised, then close it.
///
/// Write failures are logged and counted, never fatal; the handle is closed
/// exactly once on loop exit.
///
/// # Errors
///
/// Only locate/open failures are returned; once the device is open the
/// session always runs to a clean stop.
pub fn run_session(
    port: &impl HidPort,
    config: &BuzzConfig,
    stop: &AtomicBool,
) -> HidResult<SessionSummary> {
    let mut device = open_haptic_device(port)?;
    println!("Connected to Steam Deck controller");
    println!();

    let mut summary = SessionSummary::default();
    while !stop.load(Ordering::Relaxed) {
        summary.cycles += 1;
        send_pulse(device.as_mut(), config, &mut summary);
        debug!(cycle = summary.cycles, "pulse cycle sent");
        sleep_until_stop(config.interval, stop);
    }

    device.close()?;
    Ok(summary)
}

fn send_pulse(device: &mut dyn HidDevice, config: &BuzzConfig, summary: &mut SessionSummary) {
    for report in config.pulse.reports(config.select) {
        if let Err(err) = device.write_report(&report) {
            summary.write_failures += 1;
            warn!(error = %err, "haptic write failed");
        }
    }
}

fn sleep_until_stop(total: Duration, stop: &AtomicBool) {
    let deadline = Instant::now() + total;
    while !stop.load(Ordering::Relaxed) {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            break;
        }
        std::thread::sleep(remaining.min(STOP_POLL_INTERVAL));
    }
}
