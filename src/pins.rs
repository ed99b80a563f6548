//! GPIO assignments for the firmware build.
//!
//! Single source of truth for the ESP32 wiring of the Top pHAT.
//! The numbers are informational on the host; the firmware binary takes
//! the matching typed pins from `esp_idf_hal::peripherals::Peripherals`.

/// I2C data line (Qwiic SDA).
pub const I2C_SDA_GPIO: i32 = 21;
/// I2C clock line (Qwiic SCL).
pub const I2C_SCL_GPIO: i32 = 22;
/// Open-drain interrupt output of the button controller, active LOW.
pub const BUTTON_INT_GPIO: i32 = 25;

/// Bus clock. The controller is specified for standard mode.
pub const I2C_BAUDRATE_HZ: u32 = 100_000;
