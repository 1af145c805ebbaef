//! Special-function-register bus access
//!
//! PIC18-family peripherals are programmed through byte-wide special
//! function registers mapped into the upper data memory bank. Drivers go
//! through this trait so the same code runs against real hardware or a
//! simulated register file in tests.

/// Byte-wide register bus.
///
/// Implementations handle the actual memory access for the chip. The
/// helper methods are plain read-modify-write sequences; callers that
/// need atomicity against interrupts must provide it themselves.
pub trait SfrBus {
    /// Read the register at `addr`.
    fn read(&mut self, addr: u16) -> u8;

    /// Write `value` to the register at `addr`.
    fn write(&mut self, addr: u16, value: u8);

    /// Read-modify-write the register at `addr`.
    fn modify<F: FnOnce(u8) -> u8>(&mut self, addr: u16, f: F) {
        let value = self.read(addr);
        self.write(addr, f(value));
    }

    /// Set a single bit.
    fn set_bit(&mut self, addr: u16, bit: u8) {
        self.modify(addr, |v| v | (1 << bit));
    }

    /// Clear a single bit.
    fn clear_bit(&mut self, addr: u16, bit: u8) {
        self.modify(addr, |v| v & !(1 << bit));
    }

    /// Read a single bit.
    fn bit(&mut self, addr: u16, bit: u8) -> bool {
        self.read(addr) & (1 << bit) != 0
    }

    /// Write a multi-bit field. `mask` is the field mask in place,
    /// `shift` the offset of its least significant bit.
    fn write_field(&mut self, addr: u16, mask: u8, shift: u8, value: u8) {
        self.modify(addr, |v| (v & !mask) | ((value << shift) & mask));
    }

    /// Read a multi-bit field.
    fn read_field(&mut self, addr: u16, mask: u8, shift: u8) -> u8 {
        (self.read(addr) & mask) >> shift
    }
}
