//! Common HID utilities for the hbuzz haptic driver
//!
//! This crate provides the device seam shared by the driver binary and its
//! tests: a typed error taxonomy, enumeration snapshots, synchronous device
//! and port traits with mock implementations, and the hidapi backend.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod device_info;
pub mod hid_traits;

pub use backend::*;
pub use device_info::*;
pub use hid_traits::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HidError {
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Failed to open device: {0}")]
    OpenError(String),

    #[error("Failed to write to device: {0}")]
    WriteError(String),

    #[error("Invalid device path: {0}")]
    InvalidPath(String),

    #[error("Device disconnected")]
    Disconnected,

    #[error("HID backend error: {0}")]
    Api(#[from] hidapi::HidError),
}

pub type HidResult<T> = Result<T, HidError>;
