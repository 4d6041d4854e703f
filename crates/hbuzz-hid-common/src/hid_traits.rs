//! Synchronous HID device traits
//!
//! The driving tool is single-threaded and blocking, so there is no async
//! seam here: opens, writes, and closes all block the caller.

use crate::{HidError, HidResult};

/// An open HID device handle.
///
/// Implementations must release the OS handle when dropped even if `close`
/// was never called; `close` exists so sessions can release deterministically
/// and tests can observe the release.
pub trait HidDevice: Send {
    fn write_report(&mut self, data: &[u8]) -> HidResult<usize>;

    fn device_info(&self) -> &crate::HidDeviceInfo;

    fn is_connected(&self) -> bool;

    fn close(&mut self) -> HidResult<()>;
}

/// Access to the host's HID enumeration and open facilities.
pub trait HidPort {
    fn list_devices(&self) -> HidResult<Vec<crate::HidDeviceInfo>>;

    fn open_device(&self, path: &str) -> HidResult<Box<dyn HidDevice>>;
}

pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex, PoisonError};

    /// Test double recording every write and close issued to it.
    ///
    /// State is behind shared handles, so a clone opened through
    /// [`MockHidPort`] stays inspectable after the session has consumed and
    /// closed the boxed device.
    pub struct MockHidDevice {
        info: crate::HidDeviceInfo,
        write_history: Arc<Mutex<Vec<Vec<u8>>>>,
        connected: Arc<AtomicBool>,
        close_count: Arc<AtomicUsize>,
        fail_writes: Arc<AtomicBool>,
    }

    impl MockHidDevice {
        pub fn new(vendor_id: u16, product_id: u16, path: impl Into<String>) -> Self {
            Self {
                info: crate::HidDeviceInfo::new(vendor_id, product_id, path.into()),
                write_history: Arc::new(Mutex::new(Vec::new())),
                connected: Arc::new(AtomicBool::new(true)),
                close_count: Arc::new(AtomicUsize::new(0)),
                fail_writes: Arc::new(AtomicBool::new(false)),
            }
        }

        pub fn with_interface_number(mut self, interface_number: i32) -> Self {
            self.info = self.info.with_interface_number(interface_number);
            self
        }

        pub fn get_write_history(&self) -> Vec<Vec<u8>> {
            let history = self
                .write_history
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            history.clone()
        }

        pub fn close_count(&self) -> usize {
            self.close_count.load(Ordering::Relaxed)
        }

        pub fn disconnect(&self) {
            self.connected.store(false, Ordering::Relaxed);
        }

        /// Make subsequent writes fail without recording, until cleared.
        pub fn set_write_failure(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::Relaxed);
        }

        /// A second handle sharing this device's state, as the port hands out.
        pub fn share(&self) -> MockHidDevice {
            MockHidDevice {
                info: self.info.clone(),
                write_history: Arc::clone(&self.write_history),
                connected: Arc::clone(&self.connected),
                close_count: Arc::clone(&self.close_count),
                fail_writes: Arc::clone(&self.fail_writes),
            }
        }
    }

    impl HidDevice for MockHidDevice {
        fn write_report(&mut self, data: &[u8]) -> HidResult<usize> {
            if !self.connected.load(Ordering::Relaxed) {
                return Err(HidError::Disconnected);
            }
            if self.fail_writes.load(Ordering::Relaxed) {
                return Err(HidError::WriteError("injected write failure".to_string()));
            }

            let mut history = self
                .write_history
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            history.push(data.to_vec());
            Ok(data.len())
        }

        fn device_info(&self) -> &crate::HidDeviceInfo {
            &self.info
        }

        fn is_connected(&self) -> bool {
            self.connected.load(Ordering::Relaxed)
        }

        fn close(&mut self) -> HidResult<()> {
            self.close_count.fetch_add(1, Ordering::Relaxed);
            self.connected.store(false, Ordering::Relaxed);
            Ok(())
        }
    }

    pub struct MockHidPort {
        devices: Vec<MockHidDevice>,
        fail_open: AtomicBool,
        opened_paths: Mutex<Vec<String>>,
    }

    impl MockHidPort {
        pub fn new() -> Self {
            Self {
                devices: Vec::new(),
                fail_open: AtomicBool::new(false),
                opened_paths: Mutex::new(Vec::new()),
            }
        }

        pub fn add_device(&mut self, device: MockHidDevice) {
            self.devices.push(device);
        }

        pub fn device_count(&self) -> usize {
            self.devices.len()
        }

        /// Make every open attempt fail, as when another process holds the
        /// node or udev permissions deny it.
        pub fn set_open_failure(&self, fail: bool) {
            self.fail_open.store(fail, Ordering::Relaxed);
        }

        pub fn opened_paths(&self) -> Vec<String> {
            let opened = self
                .opened_paths
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            opened.clone()
        }
    }

    impl HidPort for MockHidPort {
        fn list_devices(&self) -> HidResult<Vec<crate::HidDeviceInfo>> {
            Ok(self.devices.iter().map(|d| d.info.clone()).collect())
        }

        fn open_device(&self, path: &str) -> HidResult<Box<dyn HidDevice>> {
            if self.fail_open.load(Ordering::Relaxed) {
                return Err(HidError::OpenError(format!("{path}: permission denied")));
            }
            for device in &self.devices {
                if device.info.path == path {
                    let mut opened = self
                        .opened_paths
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner);
                    opened.push(path.to_string());
                    return Ok(Box::new(device.share()));
                }
            }
            Err(HidError::DeviceNotFound(path.to_string()))
        }
    }

    impl Default for MockHidPort {
        fn default() -> Self {
            Self::new()
        }
    }
}
