//! Volatile memory-mapped SFR access for running on the actual chip.

use ember_hal::SfrBus;

/// Direct memory-mapped register bus.
///
/// Every access is a volatile byte read/write at the SFR's data-memory
/// address. Only meaningful on the target device.
#[derive(Default)]
pub struct MmioBus;

impl MmioBus {
    pub fn new() -> Self {
        Self
    }
}

impl SfrBus for MmioBus {
    #[allow(unsafe_code)]
    fn read(&mut self, addr: u16) -> u8 {
        // SAFETY: SFR addresses from `regs` point at valid device registers
        unsafe { core::ptr::read_volatile(addr as usize as *const u8) }
    }

    #[allow(unsafe_code)]
    fn write(&mut self, addr: u16, value: u8) {
        // SAFETY: SFR addresses from `regs` point at valid device registers
        unsafe { core::ptr::write_volatile(addr as usize as *mut u8, value) }
    }
}
