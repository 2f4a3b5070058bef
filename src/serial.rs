//! Serial port transport for desktop using serialport crate

use crate::transport::SensorTransport;
use crate::types::Mhz19Error;
use std::time::Duration;

// The sensor UART is fixed at 9600 8N1
const BAUD_RATE: u32 = 9_600;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

pub struct SerialTransport {
    port: Box<dyn serialport::SerialPort>,
}

impl SerialTransport {
    /// Open the named serial device with the sensor's fixed settings
    pub fn new(port_name: &str) -> Result<Self, Mhz19Error> {
        let port = serialport::new(port_name, BAUD_RATE)
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .timeout(DEFAULT_TIMEOUT)
            .open()
            .map_err(|e| Mhz19Error::Connection(format!("{}: {}", port_name, e)))?;
        port.clear(serialport::ClearBuffer::Input)
            .map_err(|e| Mhz19Error::Connection(format!("{}: {}", port_name, e)))?;

        Ok(Self { port })
    }
}

impl SensorTransport for SerialTransport {
    type Error = std::io::Error;

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        std::io::Write::write(&mut self.port, data)
    }

    fn read(&mut self, buf: &mut [u8], timeout_ms: u32) -> Result<usize, Self::Error> {
        self.port
            .set_timeout(Duration::from_millis(timeout_ms as u64))
            .map_err(|e| std::io::Error::other(e))?;
        std::io::Read::read(&mut self.port, buf)
    }

    fn clear_input(&mut self) -> Result<(), Self::Error> {
        self.port
            .clear(serialport::ClearBuffer::Input)
            .map_err(|e| std::io::Error::other(e))
    }
}
