//! Device IDs for Valve controller hardware
//!
//! All Valve input devices enumerate under VID `0x28DE`. The Steam Deck's
//! built-in controller is PID `0x1205`; the original Steam Controller used
//! `0x1102` (wired) and `0x1142` (wireless dongle). Products are
//! distinguished by product ID only.
//!
//! Sources: Linux kernel `hid-steam` driver id table, SDL hidapi Steam
//! driver, USB VID registry.

/// Valve Software USB Vendor ID (`0x28DE`).
pub const VALVE_VENDOR_ID: u16 = 0x28DE;

/// Steam Deck built-in controller.
pub const STEAM_DECK_PID: u16 = 0x1205;
/// Original Steam Controller over a wired connection.
pub const STEAM_CONTROLLER_WIRED_PID: u16 = 0x1102;
/// Steam Controller wireless dongle.
pub const STEAM_CONTROLLER_DONGLE_PID: u16 = 0x1142;

/// HID interface number that accepts haptic control reports on the Steam
/// Deck. The controller enumerates several interfaces on the same VID/PID;
/// only this one takes the vendor output reports encoded by this crate.
pub const HAPTIC_INTERFACE_NUMBER: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValveController {
    SteamDeck,
    SteamControllerWired,
    SteamControllerDongle,
    Unknown,
}

impl ValveController {
    pub fn from_product_id(product_id: u16) -> Self {
        match product_id {
            STEAM_DECK_PID => Self::SteamDeck,
            STEAM_CONTROLLER_WIRED_PID => Self::SteamControllerWired,
            STEAM_CONTROLLER_DONGLE_PID => Self::SteamControllerDongle,
            _ => Self::Unknown,
        }
    }

    /// Whether the device carries the dual haptic trackpads addressed by the
    /// pulse command. The dongle counts: it forwards reports to the paired
    /// controller.
    pub fn has_haptic_trackpads(&self) -> bool {
        match self {
            Self::SteamDeck | Self::SteamControllerWired | Self::SteamControllerDongle => true,
            Self::Unknown => false,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SteamDeck => "Steam Deck Controller",
            Self::SteamControllerWired => "Steam Controller",
            Self::SteamControllerDongle => "Steam Controller Dongle",
            Self::Unknown => "Unknown Valve Device",
        }
    }
}

pub fn valve_model_from_info(vendor_id: u16, product_id: u16) -> ValveController {
    if vendor_id != VALVE_VENDOR_ID {
        return ValveController::Unknown;
    }
    ValveController::from_product_id(product_id)
}

pub fn is_valve_device(vendor_id: u16) -> bool {
    vendor_id == VALVE_VENDOR_ID
}
