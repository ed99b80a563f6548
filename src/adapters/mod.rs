//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements    | Connects to                   |
//! |------------|---------------|-------------------------------|
//! | `i2c`      | RegisterBus   | any `embedded_hal::i2c::I2c`  |
//! | `log_sink` | EventSink     | `log` facade / serial console |

pub mod i2c;
pub mod log_sink;
