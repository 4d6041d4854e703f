//! hidapi-backed implementations of the device traits
//!
//! Enumeration is the snapshot hidapi takes when the API context is
//! initialised; this tool enumerates once at startup, so the snapshot is
//! never refreshed. On Linux this goes through the hidraw backend.

use std::ffi::CString;

use hidapi::HidApi;
use tracing::debug;

use crate::{HidDevice, HidDeviceInfo, HidError, HidPort, HidResult};

fn path_to_cstring(path: &str) -> HidResult<CString> {
    CString::new(path).map_err(|err| HidError::InvalidPath(format!("{path}: {err}")))
}

fn snapshot(d: &hidapi::DeviceInfo) -> HidDeviceInfo {
    let mut info = HidDeviceInfo::new(
        d.vendor_id(),
        d.product_id(),
        d.path().to_string_lossy().to_string(),
    )
    .with_interface_number(d.interface_number());
    if let Some(serial) = d.serial_number() {
        info = info.with_serial(serial);
    }
    if let Some(manufacturer) = d.manufacturer_string() {
        info = info.with_manufacturer(manufacturer);
    }
    if let Some(product) = d.product_string() {
        info = info.with_product_name(product);
    }
    info
}

/// [`HidPort`] over a hidapi context.
pub struct HidapiPort {
    api: HidApi,
}

impl HidapiPort {
    /// Initialise the hidapi backend.
    ///
    /// # Errors
    ///
    /// Fails when the platform has no usable HID support (missing hidraw
    /// backend, no permission to enumerate).
    pub fn new() -> HidResult<Self> {
        Ok(Self {
            api: HidApi::new()?,
        })
    }
}

impl HidPort for HidapiPort {
    fn list_devices(&self) -> HidResult<Vec<HidDeviceInfo>> {
        Ok(self.api.device_list().map(snapshot).collect())
    }

    fn open_device(&self, path: &str) -> HidResult<Box<dyn HidDevice>> {
        let cpath = path_to_cstring(path)?;
        let handle = self
            .api
            .open_path(&cpath)
            .map_err(|err| HidError::OpenError(format!("{path}: {err}")))?;

        let info = self
            .api
            .device_list()
            .find(|d| d.path().to_string_lossy() == path)
            .map(snapshot)
            .unwrap_or_else(|| HidDeviceInfo::new(0, 0, path.to_string()));

        debug!(path, device = %info.display_name(), "opened HID device");
        Ok(Box::new(HidapiDevice {
            handle: Some(handle),
            info,
        }))
    }
}

/// An open hidapi device handle.
///
/// `close` drops the underlying handle; dropping the struct releases the OS
/// handle regardless, so the device is freed on every exit path including
/// unwind.
pub struct HidapiDevice {
    handle: Option<hidapi::HidDevice>,
    info: HidDeviceInfo,
}

impl HidDevice for HidapiDevice {
    fn write_report(&mut self, data: &[u8]) -> HidResult<usize> {
        let handle = self.handle.as_ref().ok_or(HidError::Disconnected)?;
        handle
            .write(data)
            .map_err(|err| HidError::WriteError(err.to_string()))
    }

    fn device_info(&self) -> &HidDeviceInfo {
        &self.info
    }

    fn is_connected(&self) -> bool {
        self.handle.is_some()
    }

    fn close(&mut self) -> HidResult<()> {
        if self.handle.take().is_some() {
            debug!(path = %self.info.path, "closed HID device");
        }
        Ok(())
    }
}
