//! embedded-hal I2C adapter.
//!
//! Implements [`RegisterBus`] for any `embedded_hal::i2c::I2c` bus, so the
//! driver runs unchanged on ESP-IDF, Linux, RP2040, STM32 and friends.
//!
//! | Port call             | I2C transaction                       |
//! |-----------------------|---------------------------------------|
//! | `read_byte`           | write `[reg]`, repeated start, read 1 |
//! | `write_byte`          | write `[reg, value]`                  |
//! | `is_device_connected` | zero-length write, ACK = present      |

use embedded_hal::i2c::I2c;

use crate::app::ports::RegisterBus;

pub struct I2cRegisterBus<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> I2cRegisterBus<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RegisterBus for I2cRegisterBus<I2C> {
    type Error = I2C::Error;

    fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(address, &[register], &mut buf)?;
        Ok(buf[0])
    }

    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(address, &[register, value])
    }

    fn is_device_connected(&mut self, address: u8) -> bool {
        self.i2c.write(address, &[]).is_ok()
    }
}
