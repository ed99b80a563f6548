//! Top pHAT button controller driver.
//!
//! ## Hardware
//!
//! A small microcontroller on the Top pHAT scans the A/B buttons and the
//! five-way joystick and exposes the result as byte registers over I2C
//! (default address `0x71`). Two status registers latch activity:
//!
//! | Register | Meaning                          | Cleared by     |
//! |----------|----------------------------------|----------------|
//! | PRESSED  | buttons held down                | reading it     |
//! | CLICKED  | full press/release cycles        | reading it     |
//!
//! Reading a status register also releases the matching interrupt line, so
//! every read is a side effect and lives behind an explicit `read_*` call.
//! The accessors [`TopPhatButton::pressed`] and [`TopPhatButton::clicked`]
//! return the last decoded value without touching the bus.
//!
//! ## Concurrency
//!
//! All bus operations take `&mut self`. Sharing one driver between an
//! interrupt handler and a main loop needs a caller-provided lock.

use core::fmt::Write as _;

use log::{debug, warn};

use crate::app::ports::RegisterBus;
use crate::config::{DEFAULT_ADDRESS, DEVICE_NAME, DriverConfig};
use crate::error::{ConfigError, Error, Result};
use crate::registers::{InterruptSource, Register};
use crate::state::{ButtonFlags, ButtonSnapshot, FirmwareVersion, InterruptConfig};

/// Capacity of [`VersionString`]; fits the longest rendering, `"v 255.255"`.
pub const VERSION_STRING_LEN: usize = 16;

/// Formatted firmware version, e.g. `"v 1.3"`.
pub type VersionString = heapless::String<VERSION_STRING_LEN>;

pub struct TopPhatButton<B> {
    bus: B,
    address: u8,
    snapshot: ButtonSnapshot,
}

impl<B: RegisterBus> TopPhatButton<B> {
    /// Driver for a device at the factory-default address.
    pub fn new(bus: B) -> Self {
        Self::with_address(bus, DEFAULT_ADDRESS)
    }

    pub fn with_address(bus: B, address: u8) -> Self {
        Self {
            bus,
            address,
            snapshot: ButtonSnapshot::default(),
        }
    }

    /// Driver for the address in `config`, rejecting reserved addresses.
    pub fn from_config(bus: B, config: &DriverConfig) -> core::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_address(bus, config.address))
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// PRESSED flags from the last [`read_pressed`](Self::read_pressed).
    pub fn pressed(&self) -> &ButtonFlags {
        &self.snapshot.pressed
    }

    /// CLICKED flags from the last [`read_clicked`](Self::read_clicked).
    pub fn clicked(&self) -> &ButtonFlags {
        &self.snapshot.clicked
    }

    pub fn snapshot(&self) -> ButtonSnapshot {
        self.snapshot
    }

    /// Give the bus back.
    pub fn release(self) -> B {
        self.bus
    }

    // ── Presence ──────────────────────────────────────────────

    /// Whether the device acknowledges at the configured address.
    pub fn is_connected(&mut self) -> bool {
        let present = self.bus.is_device_connected(self.address);
        if !present {
            warn!("{} not found at 0x{:02X}", DEVICE_NAME, self.address);
        }
        present
    }

    /// The device needs no setup sequence; this only checks presence.
    pub fn initialize(&mut self) -> bool {
        self.is_connected()
    }

    /// Alias for [`initialize`](Self::initialize).
    pub fn begin(&mut self) -> bool {
        self.initialize()
    }

    // ── Identity ──────────────────────────────────────────────

    pub fn read_id(&mut self) -> Result<u8, B::Error> {
        self.read_register(Register::Id)
    }

    pub fn read_firmware_version(&mut self) -> Result<FirmwareVersion, B::Error> {
        let major = self.read_register(Register::Version1)?;
        let minor = self.read_register(Register::Version2)?;
        Ok(FirmwareVersion { major, minor })
    }

    /// Firmware version rendered as `"v {major}.{minor}"`. Not cached.
    pub fn read_version(&mut self) -> Result<VersionString, B::Error> {
        let version = self.read_firmware_version()?;
        let mut s = VersionString::new();
        // Cannot overflow: at most 9 bytes.
        let _ = write!(s, "{version}");
        Ok(s)
    }

    // ── Button status ─────────────────────────────────────────

    /// Read and clear PRESSED, update [`pressed`](Self::pressed), return the raw byte.
    ///
    /// On error the previous flags are kept.
    pub fn read_pressed(&mut self) -> Result<u8, B::Error> {
        let raw = self.read_register(Register::Pressed)?;
        self.snapshot.pressed = ButtonFlags::from_raw(raw);
        debug!("PRESSED 0x{:02X} -> {:?}", raw, self.snapshot.pressed);
        Ok(raw)
    }

    /// Read and clear CLICKED, update [`clicked`](Self::clicked), return the raw byte.
    ///
    /// On error the previous flags are kept.
    pub fn read_clicked(&mut self) -> Result<u8, B::Error> {
        let raw = self.read_register(Register::Clicked)?;
        self.snapshot.clicked = ButtonFlags::from_raw(raw);
        debug!("CLICKED 0x{:02X} -> {:?}", raw, self.snapshot.clicked);
        Ok(raw)
    }

    // ── Interrupt enables ─────────────────────────────────────

    pub fn interrupt_config(&mut self) -> Result<InterruptConfig, B::Error> {
        self.read_register(Register::Interrupt)
            .map(InterruptConfig::from_raw)
    }

    pub fn pressed_interrupt_enabled(&mut self) -> Result<bool, B::Error> {
        self.interrupt_enabled(InterruptSource::Pressed)
    }

    pub fn set_pressed_interrupt_enabled(&mut self, enabled: bool) -> Result<(), B::Error> {
        self.set_interrupt_enabled(InterruptSource::Pressed, enabled)
    }

    pub fn clicked_interrupt_enabled(&mut self) -> Result<bool, B::Error> {
        self.interrupt_enabled(InterruptSource::Clicked)
    }

    pub fn set_clicked_interrupt_enabled(&mut self, enabled: bool) -> Result<(), B::Error> {
        self.set_interrupt_enabled(InterruptSource::Clicked, enabled)
    }

    fn interrupt_enabled(&mut self, source: InterruptSource) -> Result<bool, B::Error> {
        Ok(self.interrupt_config()?.is_enabled(source))
    }

    /// Read-modify-write of a single enable bit. A failed read issues no write.
    fn set_interrupt_enabled(
        &mut self,
        source: InterruptSource,
        enabled: bool,
    ) -> Result<(), B::Error> {
        let current = self.interrupt_config()?;
        let updated = current.with(source, enabled);
        debug!(
            "INTERRUPT 0x{:02X} -> 0x{:02X} ({:?} = {})",
            current.raw(),
            updated.raw(),
            source,
            enabled
        );
        self.write_register(Register::Interrupt, updated.raw())
    }

    // ── Raw access ────────────────────────────────────────────

    fn read_register(&mut self, register: Register) -> Result<u8, B::Error> {
        self.bus
            .read_byte(self.address, register.addr())
            .map_err(|source| Error::Read { register, source })
    }

    fn write_register(&mut self, register: Register, value: u8) -> Result<(), B::Error> {
        self.bus
            .write_byte(self.address, register.addr(), value)
            .map_err(|source| Error::Write { register, source })
    }
}
