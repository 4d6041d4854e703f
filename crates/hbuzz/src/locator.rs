//! Locating the haptic interface among enumerated HID devices.
//!
//! The Steam Deck controller enumerates several HID interfaces under one
//! VID/PID; only interface 2 takes the vendor output reports. Selection is
//! pure over enumeration snapshots so it can be tested without hardware.

use hbuzz_hid_common::{HidDevice, HidDeviceInfo, HidError, HidPort, HidResult};
use hid_steamdeck_protocol::{HAPTIC_INTERFACE_NUMBER, STEAM_DECK_PID, VALVE_VENDOR_ID};
use tracing::{debug, info};

/// The Steam Deck node exposing the haptic interface, if present.
pub fn find_haptic_interface(devices: &[HidDeviceInfo]) -> Option<&HidDeviceInfo> {
    devices.iter().find(|d| {
        d.matches(VALVE_VENDOR_ID, STEAM_DECK_PID) && d.interface_number == HAPTIC_INTERFACE_NUMBER
    })
}

/// Enumerate, select the haptic interface node, and open it by path.
///
/// # Errors
///
/// `DeviceNotFound` when no enumerated device exposes the haptic interface;
/// otherwise whatever the port's enumeration or open reported.
pub fn open_haptic_device(port: &impl HidPort) -> HidResult<Box<dyn HidDevice>> {
    let devices = port.list_devices()?;
    debug!(candidates = devices.len(), "enumerated HID devices");

    let target = find_haptic_interface(&devices).ok_or_else(|| {
        HidError::DeviceNotFound(format!(
            "{VALVE_VENDOR_ID:04x}:{STEAM_DECK_PID:04x} interface {HAPTIC_INTERFACE_NUMBER}"
        ))
    })?;

    info!(
        path = %target.path,
        device = %target.display_name(),
        "opening haptic interface"
    );
    port.open_device(&target.path)
}
