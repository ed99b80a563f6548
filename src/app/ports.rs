//! Port traits — the boundary between the driver core and the platform.
//!
//! ```text
//!   I2C adapter ──▶ RegisterBus ──▶ TopPhatButton ──▶ ButtonMonitor ──▶ EventSink
//! ```
//!
//! Adapters (an embedded-hal I2C bus, a log writer, test mocks) implement
//! these traits. The driver and monitor consume them via generics, so the
//! register logic never touches a concrete bus.

use core::fmt::Debug;

use super::events::ButtonEvent;

// ───────────────────────────────────────────────────────────────
// Register bus port (driven adapter: driver ↔ I2C)
// ───────────────────────────────────────────────────────────────

/// Byte-wide register access to devices on a shared bus.
///
/// Every call is exactly one bus transaction. Implementations must not
/// retry; errors are handed back as-is.
pub trait RegisterBus {
    /// Error reported by the underlying transport.
    type Error: Debug;

    /// Read one byte from `register` of the device at `address`.
    fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error>;

    /// Write one byte to `register` of the device at `address`.
    /// `Ok(())` means the device acknowledged the write.
    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Whether a device acknowledges at `address`. Absence is `false`, not an error.
    fn is_device_connected(&mut self, address: u8) -> bool;
}

impl<T: RegisterBus + ?Sized> RegisterBus for &mut T {
    type Error = T::Error;

    fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        (**self).read_byte(address, register)
    }

    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        (**self).write_byte(address, register, value)
    }

    fn is_device_connected(&mut self, address: u8) -> bool {
        (**self).is_device_connected(address)
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: monitor → logging / UI)
// ───────────────────────────────────────────────────────────────

/// The monitor emits [`ButtonEvent`]s through this port. Adapters decide
/// where they go (serial log, UI queue, test recorder).
pub trait EventSink {
    fn emit(&mut self, event: &ButtonEvent);
}

impl<T: EventSink + ?Sized> EventSink for &mut T {
    fn emit(&mut self, event: &ButtonEvent) {
        (**self).emit(event);
    }
}
