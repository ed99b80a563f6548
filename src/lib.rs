//! Top pHAT button driver library.
//!
//! Register-level driver for the SparkFun Top pHAT button controller: the
//! A/B buttons and five-way joystick behind a single I2C address.
//!
//! ```text
//!  embedded-hal I2c ──▶ I2cRegisterBus ──▶ RegisterBus ──▶ TopPhatButton
//!                                                              │
//!                                 EventSink ◀── ButtonMonitor ◀┘
//! ```
//!
//! The driver decodes the PRESSED and CLICKED status registers into named
//! flags and flips the interrupt-enable bits with read-modify-write. The
//! monitor turns decoded snapshots into [`ButtonEvent`]s.
//!
//! ```
//! use top_phat_button::{Button, ButtonFlags};
//!
//! let flags = ButtonFlags::from_raw(0b1000_0001);
//! assert!(flags.a && flags.event_available);
//! assert_eq!(flags.iter().collect::<Vec<_>>(), vec![Button::A]);
//! ```

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod registers;
pub mod state;

pub use adapters::i2c::I2cRegisterBus;
pub use adapters::log_sink::LogEventSink;
pub use app::events::ButtonEvent;
pub use app::monitor::ButtonMonitor;
pub use app::ports::{EventSink, RegisterBus};
pub use config::{DriverConfig, MonitorConfig, MonitorMode};
pub use drivers::top_phat::{TopPhatButton, VersionString};
pub use error::{ConfigError, Error};
pub use registers::{Button, InterruptSource, Register};
pub use state::{ButtonFlags, ButtonSnapshot, FirmwareVersion, InterruptConfig};
