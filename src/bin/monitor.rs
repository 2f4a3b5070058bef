//! Polls the sensor every ten seconds and prints the readings.
//!
//! Usage: mhz19-monitor [PORT]
//!
//! PORT defaults to /dev/ttyAMA0. Set RUST_LOG=debug to see the frames
//! going over the wire.

use std::time::Duration;

use log::error;
use mhz19::{AirQuality, Mhz19, SerialTransport};

const POLL_INTERVAL: Duration = Duration::from_secs(10);

fn main() {
    env_logger::init();

    let port = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyAMA0".to_string());

    let transport = match SerialTransport::new(&port) {
        Ok(transport) => transport,
        Err(e) => {
            error!("connection error: {}", e);
            std::process::exit(1);
        }
    };
    let mut sensor = Mhz19::new(transport);

    println!("sensor is ready");

    loop {
        match sensor.read_co2() {
            Ok(co2) => {
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                println!("[{}] CO2: {} ppm", timestamp, co2);
                println!("air quality: {}\n", AirQuality::from_ppm(co2));
            }
            Err(e) => error!("reading error: {}", e),
        }

        std::thread::sleep(POLL_INTERVAL);
    }
}
