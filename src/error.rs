//! Error types for the Top pHAT button driver.
//!
//! Bus failures are never retried or swallowed: the transport's own error
//! comes back to the caller wrapped with the register that was being
//! accessed. Device absence is not an error at all (see
//! [`TopPhatButton::is_connected`](crate::drivers::top_phat::TopPhatButton::is_connected)).

use core::fmt;

use crate::registers::Register;

// ---------------------------------------------------------------------------
// Driver errors
// ---------------------------------------------------------------------------

/// Every fallible register access returns this, generic over the bus error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Reading a register failed.
    Read { register: Register, source: E },
    /// Writing a register failed.
    Write { register: Register, source: E },
}

impl<E> Error<E> {
    /// The register whose access failed.
    pub fn register(&self) -> Register {
        match self {
            Self::Read { register, .. } | Self::Write { register, .. } => *register,
        }
    }

    /// The underlying bus error.
    pub fn source_error(&self) -> &E {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => source,
        }
    }

    pub fn into_source(self) -> E {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => source,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { register, source } => write!(f, "read {register} failed: {source:?}"),
            Self::Write { register, source } => write!(f, "write {register} failed: {source:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Address is outside the usable 7-bit range `0x08..=0x77`.
    InvalidAddress(u8),
    /// Poll interval of zero would spin the bus.
    ZeroPollInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAddress(addr) => {
                write!(f, "invalid I2C address 0x{addr:02X} (expected 0x08..=0x77)")
            }
            Self::ZeroPollInterval => write!(f, "poll interval must be non-zero"),
        }
    }
}

impl core::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Driver-wide `Result` alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;
