//! Button monitor — turns register snapshots into discrete events.
//!
//! [`ButtonMonitor`] owns no bus and no sink; both are passed in per call,
//! the same way from a polling timer or from the task woken by the
//! interrupt line.
//!
//! ```text
//!  TopPhatButton ──read PRESSED, CLICKED──▶ ButtonMonitor ──▶ EventSink
//! ```

use log::info;

use crate::config::{MonitorConfig, MonitorMode};
use crate::drivers::top_phat::TopPhatButton;
use crate::error::Result;

use super::events::ButtonEvent;
use super::ports::{EventSink, RegisterBus};

pub struct ButtonMonitor {
    config: MonitorConfig,
    services: u64,
}

impl ButtonMonitor {
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            services: 0,
        }
    }

    pub fn mode(&self) -> MonitorMode {
        self.config.mode
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Completed [`service`](Self::service) passes.
    pub fn service_count(&self) -> u64 {
        self.services
    }

    /// Set both interrupt enables to match the mode: off for polling, on
    /// for interrupt-driven operation.
    pub fn configure<B: RegisterBus>(&self, driver: &mut TopPhatButton<B>) -> Result<(), B::Error> {
        let enable = self.config.mode == MonitorMode::Interrupt;
        driver.set_pressed_interrupt_enabled(enable)?;
        driver.set_clicked_interrupt_enabled(enable)?;
        info!("Button monitor configured for {:?}", self.config.mode);
        Ok(())
    }

    /// Read PRESSED then CLICKED and emit one event per set flag.
    ///
    /// Both registers are always read: with both interrupts armed the line
    /// stays asserted until each latch has been cleared. Pressed events
    /// come first, each group in bit order. Returns the number of events.
    pub fn service<B: RegisterBus>(
        &mut self,
        driver: &mut TopPhatButton<B>,
        sink: &mut impl EventSink,
    ) -> Result<usize, B::Error> {
        driver.read_pressed()?;
        driver.read_clicked()?;
        self.services += 1;

        let snapshot = driver.snapshot();
        let pressed = snapshot.pressed.iter().map(ButtonEvent::Pressed);
        let clicked = snapshot.clicked.iter().map(ButtonEvent::Clicked);

        let mut emitted = 0;
        for event in pressed.chain(clicked) {
            sink.emit(&event);
            emitted += 1;
        }
        Ok(emitted)
    }
}
