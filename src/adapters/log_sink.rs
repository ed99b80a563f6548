//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing button events to the `log` facade
//! (the ESP-IDF logger in the firmware build). Clicks are reported as
//! releases, since a click completes when the button comes back up.

use log::info;

use crate::app::events::ButtonEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`ButtonEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &ButtonEvent) {
        match event {
            ButtonEvent::Pressed(button) => info!("BUTTON | {} pressed", button),
            ButtonEvent::Clicked(button) => info!("BUTTON | {} released", button),
        }
    }
}
