//! Outbound button events.
//!
//! The [`ButtonMonitor`](super::monitor::ButtonMonitor) emits these through
//! the [`EventSink`](super::ports::EventSink) port after each service pass.

use crate::registers::Button;

/// One button observation from a service pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// The button was held down when PRESSED was read.
    Pressed(Button),
    /// The button completed a press/release cycle since CLICKED was last read.
    Clicked(Button),
}

impl ButtonEvent {
    pub fn button(&self) -> Button {
        match self {
            Self::Pressed(b) | Self::Clicked(b) => *b,
        }
    }
}
