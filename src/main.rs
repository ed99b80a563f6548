//! Top pHAT button monitor — ESP32 firmware entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  I2cDriver ──▶ I2cRegisterBus ──▶ TopPhatButton          │
//! │                                        │                 │
//! │  GPIO25 (INT, falling edge) ──notify──▶ main task        │
//! │                                        │                 │
//! │                 ButtonMonitor ──▶ LogEventSink ──▶ UART  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The interrupt handler only notifies the main task; all bus traffic
//! happens in task context, so the driver needs no lock.
#![deny(unused_must_use)]

use std::num::NonZeroU32;

use anyhow::{Context, Result, bail};
use esp_idf_hal::delay::{FreeRtos, TickType};
use esp_idf_hal::gpio::{InterruptType, PinDriver, Pull};
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::task::notification::Notification;
use esp_idf_hal::units::Hertz;
use log::{error, info, warn};

use top_phat_button::config::{DEVICE_NAME, DriverConfig, MonitorConfig, MonitorMode};
use top_phat_button::{ButtonMonitor, I2cRegisterBus, LogEventSink, TopPhatButton, pins};

const MONITOR: MonitorConfig = MonitorConfig {
    mode: MonitorMode::Interrupt,
    poll_interval_ms: 100,
};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("{} monitor v{}", DEVICE_NAME, env!("CARGO_PKG_VERSION"));

    MONITOR.validate()?;
    let driver_config = DriverConfig::default();

    // ── 2. I2C bus + driver ───────────────────────────────────
    info!(
        "I2C SDA=GPIO{} SCL=GPIO{} @ {} Hz, INT=GPIO{}",
        pins::I2C_SDA_GPIO,
        pins::I2C_SCL_GPIO,
        pins::I2C_BAUDRATE_HZ,
        pins::BUTTON_INT_GPIO
    );
    let peripherals = Peripherals::take()?;
    let i2c_config = I2cConfig::new().baudrate(Hertz(pins::I2C_BAUDRATE_HZ));
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio21,
        peripherals.pins.gpio22,
        &i2c_config,
    )
    .context("I2C driver init")?;

    let mut buttons = TopPhatButton::from_config(I2cRegisterBus::new(i2c), &driver_config)?;

    if !buttons.begin() {
        error!(
            "{} isn't connected at 0x{:02X}. Please check your connection",
            DEVICE_NAME,
            buttons.address()
        );
        bail!("device not found");
    }

    match buttons.read_version() {
        Ok(v) => info!("Firmware {}", v),
        Err(e) => warn!("Firmware version unavailable: {}", e),
    }

    // ── 3. Monitor ────────────────────────────────────────────
    let mut monitor = ButtonMonitor::new(MONITOR);
    monitor
        .configure(&mut buttons)
        .context("interrupt enable write")?;
    let mut sink = LogEventSink::new();

    match MONITOR.mode {
        MonitorMode::Polling => loop {
            if let Err(e) = monitor.service(&mut buttons, &mut sink) {
                warn!("Button service failed: {}", e);
            }
            FreeRtos::delay_ms(MONITOR.poll_interval_ms);
        },
        MonitorMode::Interrupt => {
            let mut int_pin = PinDriver::input(peripherals.pins.gpio25)?;
            int_pin.set_pull(Pull::Up)?;
            int_pin.set_interrupt_type(InterruptType::NegEdge)?;

            let notification = Notification::new();
            let notifier = notification.notifier();
            // SAFETY: the callback only posts a task notification.
            unsafe {
                int_pin.subscribe(move || {
                    notifier.notify_and_yield(NonZeroU32::MIN);
                })?;
            }

            let wait = TickType::new_millis(u64::from(MONITOR.poll_interval_ms)).ticks();
            loop {
                int_pin.enable_interrupt()?;
                let woke = notification.wait(wait).is_some();
                // A held-low line means a latch is still set, e.g. an edge
                // arrived while the interrupt was disarmed.
                if woke || int_pin.is_low() {
                    if let Err(e) = monitor.service(&mut buttons, &mut sink) {
                        warn!("Button service failed: {}", e);
                    }
                }
            }
        }
    }
}
