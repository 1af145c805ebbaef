//! Interrupt controller primitives
//!
//! Each operation is scoped to one named interrupt source. The PIC18
//! interrupt controller offers two priority levels; controllers without
//! priority support implement the flat global/peripheral enables and may
//! treat the priority operations as no-ops.

/// Named interrupt sources the drivers route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IrqSource {
    Ccp1,
    Ccp2,
}

/// Hardware interrupt priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Priority {
    High,
    Low,
}

/// Interrupt collaborator: per-source enable/flag/priority primitives
/// plus the global enables they compose with.
pub trait InterruptControl {
    /// Unmask the source.
    fn enable(&mut self, src: IrqSource);

    /// Mask the source.
    fn disable(&mut self, src: IrqSource);

    /// Clear the source's pending flag.
    fn clear_flag(&mut self, src: IrqSource);

    /// Check whether the source's pending flag is set.
    fn is_flagged(&mut self, src: IrqSource) -> bool;

    /// Route the source to the given priority level.
    fn set_priority(&mut self, src: IrqSource, priority: Priority);

    /// Enable the two-level priority scheme.
    fn enable_priority_levels(&mut self);

    /// Enable high-priority global interrupts (priority scheme active).
    fn enable_global_high(&mut self);

    /// Enable low-priority global interrupts (priority scheme active).
    fn enable_global_low(&mut self);

    /// Enable global interrupts (flat, non-priority scheme).
    fn enable_global(&mut self);

    /// Enable peripheral interrupts (flat, non-priority scheme).
    fn enable_peripheral(&mut self);
}
