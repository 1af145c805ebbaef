//! GPIO pin configuration
//!
//! Peripheral drivers do not own pins; they forward an opaque [`PinConfig`]
//! descriptor to whatever implements [`PinConfigure`] during init.

/// Port identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
}

/// Pin direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Output,
    Input,
}

/// Initial output level for pins configured as outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    #[default]
    Low,
    High,
}

/// Pin descriptor.
///
/// Treated as opaque by drivers; only the [`PinConfigure`] implementation
/// interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    pub port: Port,
    /// Pin index within the port, 0..=7.
    pub pin: u8,
    pub direction: Direction,
    /// Initial level, applied before the direction switch for outputs.
    pub level: Level,
}

/// Errors from pin configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin index outside the port width.
    InvalidPin,
}

/// GPIO collaborator: configures a pin's direction and initial level.
pub trait PinConfigure {
    fn configure(&mut self, pin: &PinConfig) -> Result<(), PinError>;
}
