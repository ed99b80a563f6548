//! Integration tests for `TopPhatButton` against the mock bus.
//!
//! The driver borrows the bus (`&mut MockBus` is itself a `RegisterBus`) so
//! each test can inspect the transaction log once the driver is done.

use super::mock_hw::{BusFault, BusOp, MockBus};

use top_phat_button::drivers::top_phat::TopPhatButton;
use top_phat_button::error::Error;
use top_phat_button::registers::Register;
use top_phat_button::state::ButtonFlags;

// ── Presence ──────────────────────────────────────────────────

#[test]
fn connected_device_reports_true() {
    let mut bus = MockBus::new();
    let mut btn = TopPhatButton::new(&mut bus);
    assert!(btn.is_connected());
    assert!(btn.initialize());
    assert_eq!(bus.ops, vec![BusOp::Probe { address: 0x71 }; 2]);
}

#[test]
fn absent_device_reports_false_without_touching_state() {
    let mut bus = MockBus::new();
    bus.present = false;
    let mut btn = TopPhatButton::new(&mut bus);

    assert!(!btn.is_connected());
    assert!(!btn.begin());
    assert_eq!(*btn.pressed(), ButtonFlags::default());
    assert_eq!(*btn.clicked(), ButtonFlags::default());
}

#[test]
fn custom_address_is_used_for_every_transaction() {
    let mut bus = MockBus::at(0x42);
    bus.set(Register::Pressed, 0x01);
    let mut btn = TopPhatButton::with_address(&mut bus, 0x42);

    assert!(btn.is_connected());
    btn.read_pressed().unwrap();
    btn.set_pressed_interrupt_enabled(true).unwrap();

    assert!(bus.ops.iter().all(|op| match op {
        BusOp::Read { address, .. } | BusOp::Write { address, .. } | BusOp::Probe { address } =>
            *address == 0x42,
    }));
}

#[test]
fn default_address_misses_relocated_device() {
    let mut bus = MockBus::at(0x42);
    let mut btn = TopPhatButton::new(&mut bus);
    assert!(!btn.is_connected());
    assert_eq!(
        btn.read_pressed(),
        Err(Error::Read {
            register: Register::Pressed,
            source: BusFault::Nack
        })
    );
}

// ── Status registers ──────────────────────────────────────────

#[test]
fn read_pressed_maps_every_bit() {
    let cases: [(u8, fn(&ButtonFlags) -> bool); 8] = [
        (0x01, |f| f.a),
        (0x02, |f| f.b),
        (0x04, |f| f.up),
        (0x08, |f| f.down),
        (0x10, |f| f.left),
        (0x20, |f| f.right),
        (0x40, |f| f.center),
        (0x80, |f| f.event_available),
    ];
    for (raw, flag) in cases {
        let mut bus = MockBus::new();
        bus.set(Register::Pressed, raw);
        let mut btn = TopPhatButton::new(&mut bus);

        assert_eq!(btn.read_pressed(), Ok(raw));
        assert!(flag(btn.pressed()), "bit for 0x{raw:02X} not decoded");
        let others = ButtonFlags::from_raw(!raw);
        assert_eq!(btn.pressed().raw() & others.raw(), 0);
    }
}

#[test]
fn consecutive_reads_overwrite_all_flags() {
    let mut bus = MockBus::new();
    bus.set(Register::Pressed, 0x7F);
    let mut btn = TopPhatButton::new(&mut bus);
    btn.read_pressed().unwrap();
    assert!(btn.pressed().a && btn.pressed().center);
    assert!(!btn.pressed().event_available);
    drop(btn);

    bus.set(Register::Pressed, 0x80);
    let mut btn = TopPhatButton::new(&mut bus);
    btn.read_pressed().unwrap();
    assert_eq!(
        *btn.pressed(),
        ButtonFlags {
            event_available: true,
            ..ButtonFlags::default()
        }
    );
}

#[test]
fn status_registers_clear_on_read() {
    let mut bus = MockBus::new();
    bus.set(Register::Clicked, 0x84);
    let mut btn = TopPhatButton::new(&mut bus);

    assert_eq!(btn.read_clicked(), Ok(0x84));
    assert!(btn.clicked().up);
    assert_eq!(btn.read_clicked(), Ok(0x00));
    assert!(!btn.clicked().up);
    assert_eq!(bus.get(Register::Clicked), 0);
}

#[test]
fn pressed_and_clicked_halves_are_independent() {
    let mut bus = MockBus::new();
    bus.set(Register::Pressed, 0x01);
    bus.set(Register::Clicked, 0x02);
    let mut btn = TopPhatButton::new(&mut bus);

    btn.read_pressed().unwrap();
    assert!(btn.pressed().a);
    assert_eq!(*btn.clicked(), ButtonFlags::default());

    btn.read_clicked().unwrap();
    assert!(btn.clicked().b);
    assert!(btn.pressed().a, "reading CLICKED must not touch pressed flags");
}

#[test]
fn failed_status_read_keeps_snapshot() {
    let mut bus = MockBus::new();
    bus.read_script.extend([Ok(0x10), Err(BusFault::Transfer)]);
    let mut btn = TopPhatButton::new(&mut bus);

    btn.read_pressed().unwrap();
    assert!(btn.pressed().left);

    assert_eq!(
        btn.read_pressed(),
        Err(Error::Read {
            register: Register::Pressed,
            source: BusFault::Transfer
        })
    );
    assert!(btn.pressed().left, "failed read must not overwrite flags");
    assert_eq!(btn.pressed().raw(), 0x10);
}

// ── Identity ──────────────────────────────────────────────────

#[test]
fn version_is_read_fresh_each_time() {
    let mut bus = MockBus::new();
    bus.set(Register::Version1, 1);
    bus.set(Register::Version2, 3);
    let mut btn = TopPhatButton::new(&mut bus);

    assert_eq!(btn.read_version().unwrap().as_str(), "v 1.3");
    assert_eq!(btn.read_version().unwrap().as_str(), "v 1.3");
    assert_eq!(bus.reads(), vec![0x01, 0x02, 0x01, 0x02]);
}

#[test]
fn version_failure_names_register() {
    let mut bus = MockBus::new();
    bus.fail_reads_of(Register::Version2);
    let mut btn = TopPhatButton::new(&mut bus);

    let err = btn.read_version().unwrap_err();
    assert_eq!(err.register(), Register::Version2);
    assert_eq!(err.into_source(), BusFault::Transfer);
}

#[test]
fn read_id_returns_raw_identifier() {
    let mut bus = MockBus::new();
    bus.set(Register::Id, 0x5D);
    let mut btn = TopPhatButton::new(&mut bus);
    assert_eq!(btn.read_id(), Ok(0x5D));
}

// ── Interrupt enables ─────────────────────────────────────────

#[test]
fn enabling_pressed_interrupt_only_touches_bit_one() {
    let initial = 0b1111_0100;
    let mut bus = MockBus::new();
    bus.set(Register::Interrupt, initial);
    let mut btn = TopPhatButton::new(&mut bus);

    btn.set_pressed_interrupt_enabled(true).unwrap();
    assert!(btn.pressed_interrupt_enabled().unwrap());

    let writes = bus.writes();
    assert_eq!(writes.len(), 1);
    let (register, written) = writes[0];
    assert_eq!(register, Register::Interrupt.addr());
    assert_eq!(written ^ initial, 0b0000_0010);
}

#[test]
fn disabling_clicked_interrupt_from_both_enabled() {
    let mut bus = MockBus::new();
    bus.set(Register::Interrupt, 0x03);
    let mut btn = TopPhatButton::new(&mut bus);

    btn.set_clicked_interrupt_enabled(false).unwrap();
    assert!(!btn.clicked_interrupt_enabled().unwrap());
    assert!(btn.pressed_interrupt_enabled().unwrap());
    assert_eq!(bus.writes(), vec![(0x05, 0x02)]);
}

#[test]
fn set_is_read_then_write() {
    let mut bus = MockBus::new();
    let mut btn = TopPhatButton::new(&mut bus);
    btn.set_clicked_interrupt_enabled(true).unwrap();
    assert_eq!(
        bus.ops,
        vec![
            BusOp::Read {
                address: 0x71,
                register: 0x05
            },
            BusOp::Write {
                address: 0x71,
                register: 0x05,
                value: 0x01
            },
        ]
    );
}

#[test]
fn failed_read_phase_skips_write() {
    let mut bus = MockBus::new();
    bus.fail_reads_of(Register::Interrupt);
    let mut btn = TopPhatButton::new(&mut bus);

    assert_eq!(
        btn.set_pressed_interrupt_enabled(true),
        Err(Error::Read {
            register: Register::Interrupt,
            source: BusFault::Transfer
        })
    );
    assert!(bus.writes().is_empty());
}

#[test]
fn failed_write_is_reported() {
    let mut bus = MockBus::new();
    bus.fail_writes = true;
    let mut btn = TopPhatButton::new(&mut bus);

    assert_eq!(
        btn.set_clicked_interrupt_enabled(true),
        Err(Error::Write {
            register: Register::Interrupt,
            source: BusFault::Transfer
        })
    );
}

#[test]
fn interrupt_config_exposes_raw_byte() {
    let mut bus = MockBus::new();
    bus.set(Register::Interrupt, 0xA2);
    let mut btn = TopPhatButton::new(&mut bus);

    let cfg = btn.interrupt_config().unwrap();
    assert_eq!(cfg.raw(), 0xA2);
    assert!(cfg.pressed_enabled());
    assert!(!cfg.clicked_enabled());
}
