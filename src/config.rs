//! Driver and monitor configuration.
//!
//! Device identity lives in constants; each driver instance copies the
//! address it was built with, so there is no shared mutable default.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Human-readable device name.
pub const DEVICE_NAME: &str = "SparkFun Top pHAT Button";

/// Addresses the device can answer on. The first entry is the factory default.
pub const AVAILABLE_ADDRESSES: [u8; 1] = [0x71];

/// Factory-default I2C address.
pub const DEFAULT_ADDRESS: u8 = AVAILABLE_ADDRESSES[0];

/// Lowest and highest non-reserved 7-bit I2C addresses.
const ADDRESS_RANGE: core::ops::RangeInclusive<u8> = 0x08..=0x77;

/// Per-device driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// 7-bit I2C address of the device.
    pub address: u8,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
        }
    }
}

impl DriverConfig {
    pub fn with_address(address: u8) -> Self {
        Self { address }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if ADDRESS_RANGE.contains(&self.address) {
            Ok(())
        } else {
            Err(ConfigError::InvalidAddress(self.address))
        }
    }
}

/// How the host learns about button activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonitorMode {
    /// Both interrupt enables off; the host reads the status registers on a timer.
    Polling,
    /// Both interrupt enables on; the host reads the status registers when
    /// the interrupt line falls.
    Interrupt,
}

/// Settings for [`ButtonMonitor`](crate::app::monitor::ButtonMonitor) and the firmware main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
    pub mode: MonitorMode,
    /// Poll period in polling mode; upper bound on the wait between
    /// services in interrupt mode.
    pub poll_interval_ms: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            mode: MonitorMode::Polling,
            poll_interval_ms: 100, // 10 Hz
        }
    }
}

impl MonitorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}
