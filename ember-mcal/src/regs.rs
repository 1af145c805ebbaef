//! PIC18F4620 special-function-register map
//!
//! Only the registers this MCAL touches are listed. Addresses are the
//! data-memory locations from the device data sheet.

// CCP module registers
pub const CCP1CON: u16 = 0x0FBD;
pub const CCPR1L: u16 = 0x0FBE;
pub const CCPR1H: u16 = 0x0FBF;
pub const CCP2CON: u16 = 0x0FBA;
pub const CCPR2L: u16 = 0x0FBB;
pub const CCPR2H: u16 = 0x0FBC;

/// CCPxCON mode select field (CCPxM, bits 3:0).
pub const CCPM_MASK: u8 = 0x0F;
/// CCPxCON PWM duty low bits (DCxB, bits 5:4).
pub const DCB_MASK: u8 = 0x30;
pub const DCB_SHIFT: u8 = 4;

// Timer registers shared with the CCP modules
pub const T3CON: u16 = 0x0FB1;
/// Timer2 period register; shared by both PWM outputs.
pub const PR2: u16 = 0x0FCB;

/// T3CON bit selecting CCP1's capture/compare clock source.
pub const T3CCP1_BIT: u8 = 3;
/// T3CON bit selecting CCP2's capture/compare clock source.
pub const T3CCP2_BIT: u8 = 6;

// Interrupt controller registers
pub const INTCON: u16 = 0x0FF2;
pub const RCON: u16 = 0x0FD0;
pub const PIR1: u16 = 0x0F9E;
pub const PIE1: u16 = 0x0F9D;
pub const IPR1: u16 = 0x0F9F;
pub const PIR2: u16 = 0x0FA1;
pub const PIE2: u16 = 0x0FA0;
pub const IPR2: u16 = 0x0FA2;

/// INTCON GIE/GIEH: global (or high-priority) interrupt enable.
pub const GIE_GIEH_BIT: u8 = 7;
/// INTCON PEIE/GIEL: peripheral (or low-priority) interrupt enable.
pub const PEIE_GIEL_BIT: u8 = 6;
/// RCON IPEN: interrupt priority scheme enable.
pub const IPEN_BIT: u8 = 7;

/// CCP1 flag/enable/priority bit within PIR1/PIE1/IPR1.
pub const CCP1_IRQ_BIT: u8 = 2;
/// CCP2 flag/enable/priority bit within PIR2/PIE2/IPR2.
pub const CCP2_IRQ_BIT: u8 = 0;

// GPIO registers; ports A..E occupy consecutive addresses.
pub const LATA: u16 = 0x0F89;
pub const TRISA: u16 = 0x0F92;
