//! Peripheral drivers.

pub mod top_phat;
