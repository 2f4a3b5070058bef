//! Types for CO2 sensor operations

use std::fmt;

use thiserror::Error;

/// Errors that can occur while talking to the sensor
#[derive(Debug, Error)]
pub enum Mhz19Error {
    /// Serial device could not be opened
    #[error("unable to open port {0}")]
    Connection(String),
    /// Transport layer error (write or read failed, timeout, device gone)
    #[error("transport error: {0}")]
    Transport(String),
    /// Fewer bytes than a full frame were read
    #[error("short response: {actual} bytes instead of {expected}")]
    FrameLength { expected: usize, actual: usize },
    /// Start byte or opcode echo mismatch
    #[error("wrong header: {frame}")]
    FrameHeader { frame: String },
    /// Frame checksum did not match
    #[error("wrong checksum: expected 0x{expected:02X}, got 0x{actual:02X}")]
    FrameChecksum { expected: u8, actual: u8 },
}

/// Qualitative band for an indoor CO2 concentration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirQuality {
    VeryLow,
    VeryGood,
    Good,
    Ok,
    Bad,
    VeryBad,
}

impl AirQuality {
    /// Band a CO2 concentration in ppm
    pub fn from_ppm(ppm: u16) -> Self {
        match ppm {
            0..400 => AirQuality::VeryLow,
            400..600 => AirQuality::VeryGood,
            600..1000 => AirQuality::Good,
            1000..1500 => AirQuality::Ok,
            1500..2500 => AirQuality::Bad,
            _ => AirQuality::VeryBad,
        }
    }
}

impl fmt::Display for AirQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AirQuality::VeryLow => "Very low",
            AirQuality::VeryGood => "Very good",
            AirQuality::Good => "Good",
            AirQuality::Ok => "Ok",
            AirQuality::Bad => "Bad",
            AirQuality::VeryBad => "Very bad",
        })
    }
}

/// Convert bytes to uppercase hex string
pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}
