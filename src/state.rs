//! Decoded register contents.
//!
//! Everything here is pure bit manipulation so it can be tested without a
//! bus. The driver owns one [`ButtonSnapshot`] and overwrites half of it on
//! every PRESSED / CLICKED read.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::registers::{Button, EVENT_AVAILABLE_BIT, InterruptSource};

#[inline]
const fn bit_is_set(raw: u8, bit: u8) -> bool {
    (raw >> bit) & 1 == 1
}

/// Seven button flags plus the event-available flag, decoded from one
/// status byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonFlags {
    pub a: bool,
    pub b: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub center: bool,
    /// At least one button changed since the register was last read.
    pub event_available: bool,
}

impl ButtonFlags {
    /// Decode a PRESSED or CLICKED byte. Every value is valid.
    pub const fn from_raw(raw: u8) -> Self {
        Self {
            a: bit_is_set(raw, Button::A.bit()),
            b: bit_is_set(raw, Button::B.bit()),
            up: bit_is_set(raw, Button::Up.bit()),
            down: bit_is_set(raw, Button::Down.bit()),
            left: bit_is_set(raw, Button::Left.bit()),
            right: bit_is_set(raw, Button::Right.bit()),
            center: bit_is_set(raw, Button::Center.bit()),
            event_available: bit_is_set(raw, EVENT_AVAILABLE_BIT),
        }
    }

    /// Re-encode to the register layout.
    pub fn raw(&self) -> u8 {
        let buttons = Button::ALL
            .iter()
            .filter(|b| self.is_set(**b))
            .fold(0u8, |acc, b| acc | b.mask());
        buttons | (u8::from(self.event_available) << EVENT_AVAILABLE_BIT)
    }

    pub const fn is_set(&self, button: Button) -> bool {
        match button {
            Button::A => self.a,
            Button::B => self.b,
            Button::Up => self.up,
            Button::Down => self.down,
            Button::Left => self.left,
            Button::Right => self.right,
            Button::Center => self.center,
        }
    }

    /// Buttons whose flag is set, in bit order.
    pub fn iter(&self) -> impl Iterator<Item = Button> + '_ {
        Button::ALL.into_iter().filter(move |b| self.is_set(*b))
    }

    /// `true` if any of the seven button flags is set (ignores event-available).
    pub fn any(&self) -> bool {
        self.iter().next().is_some()
    }
}

/// Last decoded PRESSED and CLICKED contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSnapshot {
    pub pressed: ButtonFlags,
    pub clicked: ButtonFlags,
}

/// Decoded INTERRUPT register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptConfig {
    raw: u8,
}

impl InterruptConfig {
    pub const fn from_raw(raw: u8) -> Self {
        Self { raw }
    }

    pub const fn raw(&self) -> u8 {
        self.raw
    }

    pub const fn is_enabled(&self, source: InterruptSource) -> bool {
        bit_is_set(self.raw, source.bit())
    }

    pub const fn clicked_enabled(&self) -> bool {
        self.is_enabled(InterruptSource::Clicked)
    }

    pub const fn pressed_enabled(&self) -> bool {
        self.is_enabled(InterruptSource::Pressed)
    }

    /// Same register with one enable bit replaced. Reserved bits and the
    /// other enable bit are carried over unchanged.
    pub const fn with(self, source: InterruptSource, enabled: bool) -> Self {
        let cleared = self.raw & !source.mask();
        Self {
            raw: cleared | ((enabled as u8) << source.bit()),
        }
    }
}

/// Firmware version as reported by VERSION1 / VERSION2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmwareVersion {
    pub major: u8,
    pub minor: u8,
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v {}.{}", self.major, self.minor)
    }
}
