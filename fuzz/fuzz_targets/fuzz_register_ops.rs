//! Fuzz target: arbitrary operation sequences against `TopPhatButton`
//!
//! The first byte of every pair picks an operation, the second is the
//! value the bus will answer with (or a fault). Asserts that decoded
//! flags always mirror the last raw byte and that interrupt writes only
//! ever change the targeted enable bit.
//!
//! cargo fuzz run fuzz_register_ops

#![no_main]

use libfuzzer_sys::fuzz_target;
use top_phat_button::app::ports::RegisterBus;
use top_phat_button::drivers::top_phat::TopPhatButton;
use top_phat_button::registers::InterruptSource;
use top_phat_button::state::ButtonFlags;

#[derive(Default)]
struct FuzzBus {
    next: Option<u8>,
    last_read: Option<u8>,
    last_write: Option<u8>,
}

impl RegisterBus for FuzzBus {
    type Error = ();

    fn read_byte(&mut self, _address: u8, _register: u8) -> Result<u8, ()> {
        self.last_read = self.next;
        self.next.ok_or(())
    }

    fn write_byte(&mut self, _address: u8, _register: u8, value: u8) -> Result<(), ()> {
        self.last_write = Some(value);
        Ok(())
    }

    fn is_device_connected(&mut self, _address: u8) -> bool {
        self.next.is_some()
    }
}

fuzz_target!(|data: &[u8]| {
    let mut bus = FuzzBus::default();

    for pair in data.chunks_exact(2) {
        let (op, value) = (pair[0], pair[1]);
        // The high bit of `op` makes every read in this step fail.
        bus.next = if op & 0x80 == 0 { Some(value) } else { None };
        bus.last_write = None;

        let mut btn = TopPhatButton::new(&mut bus);
        let before = btn.snapshot();
        match op & 0x07 {
            0 => {
                if let Ok(raw) = btn.read_pressed() {
                    assert_eq!(*btn.pressed(), ButtonFlags::from_raw(raw));
                } else {
                    assert_eq!(btn.snapshot(), before);
                }
            }
            1 => {
                if let Ok(raw) = btn.read_clicked() {
                    assert_eq!(btn.clicked().raw(), raw);
                }
            }
            2 => {
                let _ = btn.read_version();
            }
            3 | 4 => {
                let source = if op & 0x07 == 3 {
                    InterruptSource::Pressed
                } else {
                    InterruptSource::Clicked
                };
                let enabled = op & 0x08 != 0;
                let result = match source {
                    InterruptSource::Pressed => btn.set_pressed_interrupt_enabled(enabled),
                    InterruptSource::Clicked => btn.set_clicked_interrupt_enabled(enabled),
                };
                if result.is_ok() {
                    let written = bus.last_write.expect("successful set must write");
                    let original = bus.last_read.expect("set must read first");
                    assert_eq!(written & !source.mask(), original & !source.mask());
                    assert_eq!(written & source.mask() != 0, enabled);
                } else {
                    assert!(bus.last_write.is_none(), "failed read must not write");
                }
            }
            5 => {
                let _ = btn.is_connected();
            }
            _ => {
                let _ = btn.pressed_interrupt_enabled();
                let _ = btn.clicked_interrupt_enabled();
            }
        }
    }
});
