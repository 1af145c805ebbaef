//! Simulated SFR file for driver tests.

use ember_hal::SfrBus;

/// Array-backed register file covering the full SFR address space.
pub struct SimBus {
    regs: [u8; 0x1000],
}

impl SimBus {
    pub fn new() -> Self {
        Self { regs: [0; 0x1000] }
    }
}

impl SfrBus for SimBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.regs[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.regs[addr as usize] = value;
    }
}
