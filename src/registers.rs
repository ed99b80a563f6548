//! Register map and bit layout of the Top pHAT button controller.
//!
//! ```text
//! PRESSED / CLICKED
//! 7(MSB)  6    5    4    3    2    1    0(LSB)
//!   EVT  CTR  RGT  LFT  DWN   UP   B    A
//!
//! INTERRUPT
//! 7..2       1            0
//! reserved   PRESSED_EN   CLICKED_EN
//! ```

use core::fmt;

/// Register offsets, passed verbatim to the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Device identifier.
    Id = 0x00,
    /// Firmware major version.
    Version1 = 0x01,
    /// Firmware minor version.
    Version2 = 0x02,
    /// Buttons currently held. Cleared on read.
    Pressed = 0x03,
    /// Buttons that completed a press/release cycle. Cleared on read.
    Clicked = 0x04,
    /// Interrupt enables; bits 2..=7 are reserved and must be written back unchanged.
    Interrupt = 0x05,
    /// Debounce time. Not used by this driver.
    Debounce = 0x06,
    /// Writing here moves the device to a new I2C address. Not used by this driver.
    ChangeAddress = 0x1F,
}

impl Register {
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Id => "ID",
            Self::Version1 => "VERSION1",
            Self::Version2 => "VERSION2",
            Self::Pressed => "PRESSED",
            Self::Clicked => "CLICKED",
            Self::Interrupt => "INTERRUPT",
            Self::Debounce => "DEBOUNCE",
            Self::ChangeAddress => "CHANGE_ADDRESS",
        };
        write!(f, "{name}(0x{:02X})", self.addr())
    }
}

/// Bit position of the "at least one button changed" flag in PRESSED and CLICKED.
pub const EVENT_AVAILABLE_BIT: u8 = 7;

/// One physical button, discriminant = bit position in PRESSED / CLICKED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Button {
    A = 0,
    B = 1,
    Up = 2,
    Down = 3,
    Left = 4,
    Right = 5,
    Center = 6,
}

impl Button {
    /// Every button in bit order.
    pub const ALL: [Button; 7] = [
        Button::A,
        Button::B,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::Center,
    ];

    pub const fn bit(self) -> u8 {
        self as u8
    }

    pub const fn mask(self) -> u8 {
        1 << self.bit()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Center => "Center",
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interrupt-enable switches inside the INTERRUPT register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InterruptSource {
    /// Assert the interrupt line when a click completes.
    Clicked = 0,
    /// Assert the interrupt line when a button goes down.
    Pressed = 1,
}

impl InterruptSource {
    pub const fn bit(self) -> u8 {
        self as u8
    }

    pub const fn mask(self) -> u8 {
        1 << self.bit()
    }
}
