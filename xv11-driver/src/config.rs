use crate::constants::DEFAULT_BAUD_RATE;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings used by [`crate::run_driver`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DriverConfig {
    /// Serial port name such as `/dev/ttyUSB0`.
    pub port_name: String,
    pub baud_rate: u32,
    /// Timeout of a single read on the serial port.
    pub read_timeout: Duration,
    /// Number of raw byte chunks buffered between the reader and the parser.
    pub raw_channel_capacity: usize,
    /// Number of decoded scans buffered for the consumer.
    pub scan_channel_capacity: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            port_name: "/dev/ttyUSB0".to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            read_timeout: Duration::from_millis(10),
            raw_channel_capacity: 200,
            scan_channel_capacity: 10,
        }
    }
}

impl DriverConfig {
    pub fn new(port_name: &str) -> DriverConfig {
        DriverConfig {
            port_name: port_name.to_string(),
            ..DriverConfig::default()
        }
    }

    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    pub fn with_channel_capacities(mut self, raw: usize, scans: usize) -> Self {
        self.raw_channel_capacity = raw;
        self.scan_channel_capacity = scans;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DriverConfig::default();
        assert_eq!(config.port_name, "/dev/ttyUSB0");
        assert_eq!(config.baud_rate, 115_200);
        assert_eq!(config.read_timeout, Duration::from_millis(10));
    }

    #[test]
    fn test_builder() {
        let config = DriverConfig::new("/dev/ttyACM1")
            .with_baud_rate(57_600)
            .with_read_timeout(Duration::from_millis(50))
            .with_channel_capacities(16, 2);
        assert_eq!(config.port_name, "/dev/ttyACM1");
        assert_eq!(config.baud_rate, 57_600);
        assert_eq!(config.read_timeout, Duration::from_millis(50));
        assert_eq!(config.raw_channel_capacity, 16);
        assert_eq!(config.scan_channel_capacity, 2);
    }
}
