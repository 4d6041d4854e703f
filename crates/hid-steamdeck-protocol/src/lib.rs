//! HID protocol definitions for the Steam Deck controller's haptic interface.
//!
//! The Steam Deck's built-in controller (VID `0x28DE`, PID `0x1205`) exposes
//! several HID interfaces on one USB device. Interface `2` accepts vendor
//! control reports, including the trackpad haptic pulse command this crate
//! encodes.
//!
//! ## Protocol Notes
//!
//! A haptic pulse is requested with a single 64-byte output report per pad:
//!
//! | Offset | Size | Field | Value |
//! |--------|------|-------|-------|
//! | 0 | 1 | command | `0x8F` (trigger haptic pulse) |
//! | 1 | 1 | subcommand | `0x07` |
//! | 2 | 1 | pad | `0x00` right, `0x01` left |
//! | 3 | 2 | amplitude | `u16` LE |
//! | 5 | 2 | period | `u16` LE, microseconds |
//! | 7 | 2 | repeat count | `u16` LE |
//! | 9 | 55 | padding | zero |
//!
//! The actuator plays `count` cycles of `period` microseconds each, so the
//! perceived duration is roughly `period × count` (50 µs × 4000 ≈ 200 ms).
//! The device does not acknowledge the report; delivery is fire-and-forget.
//! Addressing both pads means two reports on the wire, one per pad.
//!
//! This crate is I/O-free and allocation-free: it produces fixed `[u8; 64]`
//! buffers and leaves device access to callers.
//!
//! ## Sources
//!
//! - Steam Controller reverse-engineering notes (`ynsta/steamcontroller`),
//!   which document command `0x8F` as the haptic pulse trigger
//! - SDL hidapi Steam driver (`libsdl-org/SDL`, `SDL_hidapi_steam.c`)
//! - Linux kernel `hid-steam` driver, for VID/PID and interface enumeration

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(static_mut_refs)]

pub mod haptic;
pub mod ids;

pub use haptic::*;
pub use ids::*;

use thiserror::Error;

/// Errors returned by Steam Deck protocol operations.
#[derive(Error, Debug)]
pub enum SteamDeckError {
    #[error("Invalid report size: expected {expected}, got {actual}")]
    InvalidReportSize { expected: usize, actual: usize },

    #[error("Unexpected command bytes: {command:#04X}/{subcommand:#04X}")]
    UnexpectedCommand { command: u8, subcommand: u8 },

    #[error("Invalid pad id: {0:#04X}")]
    InvalidPad(u8),
}

/// Convenience result alias for Steam Deck protocol operations.
pub type SteamDeckResult<T> = Result<T, SteamDeckError>;
