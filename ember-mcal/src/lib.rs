//! PIC18F4620-family MCAL
//!
//! Peripheral drivers that turn declarative configuration records into
//! special-function-register writes and route hardware interrupts to
//! user-supplied callbacks:
//!
//! - CCP capture/compare/PWM driver (two instances, shared timer routing)
//! - GPIO pin configuration glue (TRIS/LAT)
//! - Interrupt controller glue (PIE/PIR/IPR/INTCON/RCON)
//!
//! Drivers are written against the `ember-hal` traits; [`Mcu`] bundles the
//! chip-specific implementations behind a single value, so tests can run
//! the exact driver code against a simulated register file.

#![no_std]

pub mod ccp;
pub mod mcu;
#[cfg(feature = "mmio")]
pub mod mmio;
pub mod regs;

#[cfg(test)]
pub(crate) mod testbus;

pub use mcu::Mcu;
