//! MH-Z19 CO2 sensor driver with support for multiple transport backends.
//!
//! The MH-Z19 is an NDIR CO2 sensor that speaks a fixed 9-byte frame
//! protocol over UART at 9600 8N1. This crate implements the frame codec,
//! a high-level driver and a desktop serial transport.
//!
//! # Features
//!
//! - `serial` - Serial port transport for desktop using serialport crate
//! - `cli` - Polling monitor binary (`mhz19-monitor`), implies `serial`
//!
//! # Example
//!
//! ```ignore
//! use mhz19::{Mhz19, SerialTransport};
//!
//! let transport = SerialTransport::new("/dev/ttyAMA0")?;
//! let mut sensor = Mhz19::new(transport);
//!
//! let ppm = sensor.read_co2()?;
//! println!("CO2: {} ppm", ppm);
//! ```

mod protocol;
mod sensor;
mod transport;
mod types;

#[cfg(feature = "serial")]
mod serial;

// Re-exports
pub use protocol::{checksum, parse_co2_response, Command, FRAME_LEN};
pub use sensor::Mhz19;
pub use transport::SensorTransport;
pub use types::{AirQuality, Mhz19Error};

#[cfg(feature = "serial")]
pub use serial::SerialTransport;
