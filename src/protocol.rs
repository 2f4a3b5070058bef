//! Frame codec for the MH-Z19 UART protocol
//!
//! Every exchange is a fixed 9-byte frame: a start byte, an address or
//! opcode echo, five payload bytes and a trailing checksum. Commands go
//! out addressed to the sensor (0x01); the read response echoes the
//! opcode in byte 1 instead.

use crate::types::{bytes_to_hex, Mhz19Error};

/// Length of every command and response frame in bytes
pub const FRAME_LEN: usize = 9;

// Frame layout
const START_BYTE: u8 = 0xFF;
const SENSOR_ADDRESS: u8 = 0x01;

// Command opcodes
const CMD_READ_CO2: u8 = 0x86;
const CMD_CALIBRATE_ZERO: u8 = 0x87;
const CMD_AUTO_CALIBRATION: u8 = 0x79;

// Auto-calibration is switched by payload, not by opcode
const AUTO_CAL_ON: u8 = 0xA0;

// Read responses echo the opcode where commands carry the address
const RESP_READ_CO2: u8 = CMD_READ_CO2;

/// Commands understood by the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Request the current CO2 concentration
    ReadCo2,
    /// Recalibrate the zero point to the current reading
    CalibrateZero,
    /// Switch automatic baseline correction on or off
    AutoCalibration { enabled: bool },
}

impl Command {
    fn opcode(&self) -> u8 {
        match self {
            Command::ReadCo2 => CMD_READ_CO2,
            Command::CalibrateZero => CMD_CALIBRATE_ZERO,
            Command::AutoCalibration { .. } => CMD_AUTO_CALIBRATION,
        }
    }

    /// Encode the command as a wire frame, checksum included
    pub fn encode(&self) -> [u8; FRAME_LEN] {
        let mut frame = [0u8; FRAME_LEN];
        frame[0] = START_BYTE;
        frame[1] = SENSOR_ADDRESS;
        frame[2] = self.opcode();
        if let Command::AutoCalibration { enabled: true } = self {
            frame[3] = AUTO_CAL_ON;
        }
        frame[FRAME_LEN - 1] = checksum(&frame);
        frame
    }
}

/// Compute the checksum over bytes 1..=7 of a frame
///
/// The start byte and the checksum slot itself are excluded. The sum
/// wraps at 8 bits, matching what the sensor firmware does.
pub fn checksum(frame: &[u8; FRAME_LEN]) -> u8 {
    let sum = frame[1..FRAME_LEN - 1]
        .iter()
        .fold(0u8, |acc, &b| acc.wrapping_add(b));
    0xFFu8.wrapping_sub(sum).wrapping_add(1)
}

/// Validate a read response and extract the CO2 concentration in ppm
///
/// Checks run in order: length, then header, then checksum. The
/// concentration is the big-endian u16 in bytes 2 and 3.
pub fn parse_co2_response(raw: &[u8]) -> Result<u16, Mhz19Error> {
    let frame: &[u8; FRAME_LEN] = raw.try_into().map_err(|_| Mhz19Error::FrameLength {
        expected: FRAME_LEN,
        actual: raw.len(),
    })?;

    if frame[0] != START_BYTE || frame[1] != RESP_READ_CO2 {
        return Err(Mhz19Error::FrameHeader {
            frame: bytes_to_hex(frame),
        });
    }

    let expected = checksum(frame);
    let actual = frame[FRAME_LEN - 1];
    if actual != expected {
        return Err(Mhz19Error::FrameChecksum { expected, actual });
    }

    Ok(u16::from_be_bytes([frame[2], frame[3]]))
}
