//! Application core — port traits, events, and the button monitor.
//!
//! All interaction with hardware happens through the **port traits** in
//! [`ports`], keeping this layer testable without a real bus.

pub mod events;
pub mod monitor;
pub mod ports;
