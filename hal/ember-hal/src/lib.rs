//! Ember Hardware Abstraction Layer
//!
//! This crate defines the abstraction traits the Ember peripheral drivers
//! are written against. Chip-specific code (or a simulated register file
//! in tests) implements them, so the same driver logic runs everywhere.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (embedded firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ember-mcal (peripheral drivers)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ember-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`bus::SfrBus`] - byte-wide special-function-register access
//! - [`gpio::PinConfigure`] - pin direction/level setup
//! - [`interrupt::InterruptControl`] - per-source interrupt primitives

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod gpio;
pub mod interrupt;

// Re-export key traits at crate root for convenience
pub use bus::SfrBus;
pub use gpio::{PinConfig, PinConfigure, PinError};
pub use interrupt::{InterruptControl, IrqSource, Priority};
