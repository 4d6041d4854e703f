//! Haptic pulse output report encoding for the Steam Deck trackpads.
//!
//! Each trackpad has its own actuator, addressed by a pad id byte in the
//! report; the device takes one pad per report. A "both pads" request is
//! therefore two reports on the wire, right first, then left.

use serde::{Deserialize, Serialize};

use crate::{SteamDeckError, SteamDeckResult};

/// Command bytes and byte offsets for haptic pulse output reports.
pub mod output_report {
    /// Trigger-haptic-pulse command byte.
    pub const CMD: u8 = 0x8F;
    /// Subcommand selecting the simple pulse train form.
    pub const SUBCMD: u8 = 0x07;
    pub const CMD_START: usize = 0;
    pub const SUBCMD_START: usize = 1;
    pub const PAD_START: usize = 2;
    pub const AMPLITUDE_START: usize = 3;
    pub const PERIOD_START: usize = 5;
    pub const COUNT_START: usize = 7;
    pub const PADDING_START: usize = 9;
}

/// Haptic output report size in bytes. Reports are always exactly this long;
/// every byte from [`output_report::PADDING_START`] onward is zero.
pub const HAPTIC_REPORT_LEN: usize = 64;

/// One of the two trackpad actuators. Discriminants are the wire pad ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pad {
    Right = 0x00,
    Left = 0x01,
}

impl Pad {
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0x00 => Some(Self::Right),
            0x01 => Some(Self::Left),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
        }
    }
}

/// Pad addressing for a pulse request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PadSelect {
    Right,
    Left,
    Both,
}

impl PadSelect {
    /// Pads implied by this selector, in wire send order (right before left).
    pub fn pads(self) -> &'static [Pad] {
        match self {
            Self::Right => &[Pad::Right],
            Self::Left => &[Pad::Left],
            Self::Both => &[Pad::Right, Pad::Left],
        }
    }
}

/// Parameters for one haptic pulse train: `count` cycles of `period_us`
/// microseconds at `amplitude`.
///
/// Values map directly to the wire fields. There is no range validation
/// beyond the `u16` field widths, and none is meaningful: the actuator
/// accepts the full range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HapticPulse {
    pub amplitude: u16,
    pub period_us: u16,
    pub count: u16,
}

impl HapticPulse {
    pub const fn new(amplitude: u16, period_us: u16, count: u16) -> Self {
        Self {
            amplitude,
            period_us,
            count,
        }
    }

    pub fn with_amplitude(mut self, amplitude: u16) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_period_us(mut self, period_us: u16) -> Self {
        self.period_us = period_us;
        self
    }

    pub fn with_count(mut self, count: u16) -> Self {
        self.count = count;
        self
    }

    /// Encode the pulse for one pad as a complete 64-byte output report.
    pub fn encode(&self, pad: Pad) -> [u8; HAPTIC_REPORT_LEN] {
        let mut report = [0u8; HAPTIC_REPORT_LEN];
        report[output_report::CMD_START] = output_report::CMD;
        report[output_report::SUBCMD_START] = output_report::SUBCMD;
        report[output_report::PAD_START] = pad.id();
        report[output_report::AMPLITUDE_START..output_report::PERIOD_START]
            .copy_from_slice(&self.amplitude.to_le_bytes());
        report[output_report::PERIOD_START..output_report::COUNT_START]
            .copy_from_slice(&self.period_us.to_le_bytes());
        report[output_report::COUNT_START..output_report::PADDING_START]
            .copy_from_slice(&self.count.to_le_bytes());
        report
    }

    /// Encoded reports for every pad implied by `select`, in send order.
    pub fn reports(&self, select: PadSelect) -> impl Iterator<Item = [u8; HAPTIC_REPORT_LEN]> + '_ {
        select.pads().iter().map(|pad| self.encode(*pad))
    }
}

impl Default for HapticPulse {
    /// A short confirmation tick: 4 cycles of 80 µs at mid amplitude.
    fn default() -> Self {
        Self::new(0x8000, 0x0050, 4)
    }
}

/// Decode a haptic output report back into its pad and pulse parameters.
///
/// Rejects buffers that are not exactly [`HAPTIC_REPORT_LEN`] bytes, carry
/// unexpected command/subcommand bytes, or name a pad id outside {0, 1}.
/// Padding bytes are not checked.
pub fn parse_haptic_report(report: &[u8]) -> SteamDeckResult<(Pad, HapticPulse)> {
    if report.len() != HAPTIC_REPORT_LEN {
        return Err(SteamDeckError::InvalidReportSize {
            expected: HAPTIC_REPORT_LEN,
            actual: report.len(),
        });
    }
    let command = report[output_report::CMD_START];
    let subcommand = report[output_report::SUBCMD_START];
    if command != output_report::CMD || subcommand != output_report::SUBCMD {
        return Err(SteamDeckError::UnexpectedCommand {
            command,
            subcommand,
        });
    }
    let pad_id = report[output_report::PAD_START];
    let pad = Pad::from_id(pad_id).ok_or(SteamDeckError::InvalidPad(pad_id))?;

    // Length was checked above; field reads cannot run off the end.
    let amplitude = u16::from_le_bytes([
        report[output_report::AMPLITUDE_START],
        report[output_report::AMPLITUDE_START + 1],
    ]);
    let period_us = u16::from_le_bytes([
        report[output_report::PERIOD_START],
        report[output_report::PERIOD_START + 1],
    ]);
    let count = u16::from_le_bytes([
        report[output_report::COUNT_START],
        report[output_report::COUNT_START + 1],
    ]);

    Ok((pad, HapticPulse::new(amplitude, period_us, count)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_matches_known_capture() {
        // Left pad, mid amplitude, 50 µs period, 4000 repeats.
        let pulse = HapticPulse::new(0x8000, 0x0032, 4000);
        let report = pulse.encode(Pad::Left);

        let mut expected = [0u8; HAPTIC_REPORT_LEN];
        expected[..9].copy_from_slice(&[0x8F, 0x07, 0x01, 0x00, 0x80, 0x32, 0x00, 0xA0, 0x0F]);
        assert_eq!(report, expected);
    }

    #[test]
    fn encode_right_pad_id_is_zero() {
        let report = HapticPulse::default().encode(Pad::Right);
        assert_eq!(report[output_report::PAD_START], 0x00);
    }

    #[test]
    fn encode_left_pad_id_is_one() {
        let report = HapticPulse::default().encode(Pad::Left);
        assert_eq!(report[output_report::PAD_START], 0x01);
    }

    #[test]
    fn selector_report_counts() {
        let pulse = HapticPulse::default();
        assert_eq!(pulse.reports(PadSelect::Left).count(), 1);
        assert_eq!(pulse.reports(PadSelect::Right).count(), 1);
        assert_eq!(pulse.reports(PadSelect::Both).count(), 2);
    }

    #[test]
    fn both_sends_right_before_left() {
        let pulse = HapticPulse::default();
        let pads: Vec<u8> = pulse
            .reports(PadSelect::Both)
            .map(|r| r[output_report::PAD_START])
            .collect();
        assert_eq!(pads, vec![0x00, 0x01]);
    }

    #[test]
    fn padding_is_zero() {
        let report = HapticPulse::new(u16::MAX, u16::MAX, u16::MAX).encode(Pad::Left);
        assert!(
            report[output_report::PADDING_START..]
                .iter()
                .all(|&b| b == 0)
        );
    }

    #[test]
    fn default_is_short_tick() {
        let pulse = HapticPulse::default();
        assert_eq!(pulse.amplitude, 0x8000);
        assert_eq!(pulse.period_us, 0x0050);
        assert_eq!(pulse.count, 4);
    }

    #[test]
    fn builder_methods_set_fields() {
        let pulse = HapticPulse::default()
            .with_amplitude(0x1234)
            .with_period_us(0x5678)
            .with_count(0x9ABC);
        assert_eq!(pulse.amplitude, 0x1234);
        assert_eq!(pulse.period_us, 0x5678);
        assert_eq!(pulse.count, 0x9ABC);
    }

    #[test]
    fn parse_round_trips_encode() -> Result<(), Box<dyn std::error::Error>> {
        let pulse = HapticPulse::new(0xCAFE, 0xBEEF, 0x1234);
        let (pad, parsed) = parse_haptic_report(&pulse.encode(Pad::Right))?;
        assert_eq!(pad, Pad::Right);
        assert_eq!(parsed, pulse);
        Ok(())
    }

    #[test]
    fn parse_rejects_short_buffer() {
        let report = [0x8Fu8, 0x07, 0x00];
        assert!(matches!(
            parse_haptic_report(&report),
            Err(SteamDeckError::InvalidReportSize {
                expected: HAPTIC_REPORT_LEN,
                actual: 3
            })
        ));
    }

    #[test]
    fn parse_rejects_oversized_buffer() {
        let report = [0u8; HAPTIC_REPORT_LEN + 1];
        assert!(matches!(
            parse_haptic_report(&report),
            Err(SteamDeckError::InvalidReportSize { .. })
        ));
    }

    #[test]
    fn parse_rejects_wrong_command() {
        let mut report = HapticPulse::default().encode(Pad::Left);
        report[output_report::CMD_START] = 0x90;
        assert!(matches!(
            parse_haptic_report(&report),
            Err(SteamDeckError::UnexpectedCommand {
                command: 0x90,
                subcommand: 0x07
            })
        ));
    }

    #[test]
    fn parse_rejects_wrong_subcommand() {
        let mut report = HapticPulse::default().encode(Pad::Left);
        report[output_report::SUBCMD_START] = 0x00;
        assert!(matches!(
            parse_haptic_report(&report),
            Err(SteamDeckError::UnexpectedCommand { .. })
        ));
    }

    #[test]
    fn parse_rejects_unknown_pad_id() {
        let mut report = HapticPulse::default().encode(Pad::Left);
        report[output_report::PAD_START] = 0x02;
        assert!(matches!(
            parse_haptic_report(&report),
            Err(SteamDeckError::InvalidPad(0x02))
        ));
    }

    #[test]
    fn pad_from_id() {
        assert_eq!(Pad::from_id(0x00), Some(Pad::Right));
        assert_eq!(Pad::from_id(0x01), Some(Pad::Left));
        assert_eq!(Pad::from_id(0x02), None);
    }

    #[test]
    fn pad_display_names() {
        assert_eq!(Pad::Right.display_name(), "right");
        assert_eq!(Pad::Left.display_name(), "left");
    }

    #[test]
    fn haptic_pulse_serializes() -> Result<(), serde_json::Error> {
        let pulse = HapticPulse::new(0x0102, 0x0304, 0x0506);
        let json = serde_json::to_string(&pulse)?;
        let back: HapticPulse = serde_json::from_str(&json)?;
        assert_eq!(back, pulse);
        Ok(())
    }
}
