//! High-level driver for the MH-Z19 sensor

use log::{debug, error, info};

use crate::protocol::{parse_co2_response, Command, FRAME_LEN};
use crate::transport::SensorTransport;
use crate::types::Mhz19Error;

pub struct Mhz19<T: SensorTransport> {
    transport: T,
}

impl<T: SensorTransport> Mhz19<T> {
    const READ_TIMEOUT_MS: u32 = 2_000;

    /// Create a new driver instance over the given transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Read the current CO2 concentration in ppm
    pub fn read_co2(&mut self) -> Result<u16, Mhz19Error> {
        self.transport
            .clear_input()
            .map_err(|e| Mhz19Error::Transport(format!("{:?}", e)))?;
        self.send(Command::ReadCo2)?;

        let mut response = [0u8; FRAME_LEN];
        match self.transport.read(&mut response, Self::READ_TIMEOUT_MS) {
            Ok(bytes_read) => {
                let bytes_read = bytes_read.min(FRAME_LEN);
                debug!("Received {} bytes: {:02X?}", bytes_read, &response[..bytes_read]);
                parse_co2_response(&response[..bytes_read])
            }
            Err(e) => {
                error!("Read error: {:?}", e);
                Err(Mhz19Error::Transport(format!("{:?}", e)))
            }
        }
    }

    /// Recalibrate the zero point to the current reading
    ///
    /// The sensor should have been running in fresh air (around 400 ppm)
    /// for at least 20 minutes beforehand, otherwise the new zero point
    /// will be wrong. The sensor does not acknowledge this command.
    pub fn calibrate_zero(&mut self) -> Result<(), Mhz19Error> {
        self.send(Command::CalibrateZero)?;
        info!("Zero point calibration requested");
        Ok(())
    }

    /// Switch automatic baseline correction on or off
    ///
    /// When enabled the sensor re-zeroes itself every 24 hours against the
    /// lowest reading it saw, which suits living spaces that are aired out
    /// regularly but not greenhouses or sealed enclosures. The sensor does
    /// not acknowledge this command.
    pub fn set_auto_calibration(&mut self, enabled: bool) -> Result<(), Mhz19Error> {
        self.send(Command::AutoCalibration { enabled })?;
        info!(
            "Auto calibration {}",
            if enabled { "enabled" } else { "disabled" }
        );
        Ok(())
    }

    fn send(&mut self, command: Command) -> Result<(), Mhz19Error> {
        let cmd = command.encode();
        debug!("Sending command: {:02X?}", cmd);
        let written = self
            .transport
            .write(&cmd)
            .map_err(|e| Mhz19Error::Transport(format!("{:?}", e)))?;
        debug!("Wrote {} bytes", written);
        Ok(())
    }
}
