//! CCPxCON mode select encodings.
//!
//! The CCPxM field multiplexes all three operating modes; the variant
//! enums below carry the exact hardware discriminants. Configs hold the
//! variant as a raw byte and decode it during init, so an out-of-range
//! value surfaces as a configuration error instead of being coerced.

/// CCPxM value that disables the module.
pub const MODE_DISABLED: u8 = 0x00;

/// CCPxM value for PWM operation. PWM has no sub-variants; this single
/// encoding is the whole mode family.
pub const MODE_PWM: u8 = 0x0C;

/// Capture mode variants: which edge/count latches the timer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CaptureVariant {
    EveryFallingEdge = 0x04,
    EveryRisingEdge = 0x05,
    Every4thRisingEdge = 0x06,
    Every16thRisingEdge = 0x07,
}

impl CaptureVariant {
    /// Decode a raw CCPxM discriminant; `None` outside the capture set.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0x04 => Some(Self::EveryFallingEdge),
            0x05 => Some(Self::EveryRisingEdge),
            0x06 => Some(Self::Every4thRisingEdge),
            0x07 => Some(Self::Every16thRisingEdge),
            _ => None,
        }
    }

    pub fn bits(self) -> u8 {
        self as u8
    }
}

/// Compare mode variants: the pin/event action on timer match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CompareVariant {
    ToggleOnMatch = 0x02,
    SetPinLow = 0x08,
    SetPinHigh = 0x09,
    /// Interrupt only; the pin is untouched.
    SoftwareInterrupt = 0x0A,
    /// Trigger the special event (timer reset / ADC start).
    SpecialEvent = 0x0B,
}

impl CompareVariant {
    /// Decode a raw CCPxM discriminant; `None` outside the compare set.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0x02 => Some(Self::ToggleOnMatch),
            0x08 => Some(Self::SetPinLow),
            0x09 => Some(Self::SetPinHigh),
            0x0A => Some(Self::SoftwareInterrupt),
            0x0B => Some(Self::SpecialEvent),
            _ => None,
        }
    }

    pub fn bits(self) -> u8 {
        self as u8
    }
}
