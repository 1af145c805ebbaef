//! Chip glue: the `ember-hal` traits implemented against the PIC18F4620
//! register map.
//!
//! [`Mcu`] wraps any [`SfrBus`] and layers the GPIO and interrupt
//! controller implementations on top, so one value serves as the whole
//! collaborator bundle a driver needs.

use ember_hal::gpio::{Direction, Level, PinConfig, PinConfigure, PinError};
use ember_hal::interrupt::{InterruptControl, IrqSource, Priority};
use ember_hal::SfrBus;

use crate::regs;

/// The MCU register surface plus GPIO and interrupt glue.
pub struct Mcu<B> {
    pub bus: B,
}

impl<B: SfrBus> Mcu<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }
}

impl<B: SfrBus> SfrBus for Mcu<B> {
    fn read(&mut self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }
}

impl<B: SfrBus> PinConfigure for Mcu<B> {
    fn configure(&mut self, pin: &PinConfig) -> Result<(), PinError> {
        if pin.pin > 7 {
            return Err(PinError::InvalidPin);
        }
        let offset = pin.port as u16;
        let tris = regs::TRISA + offset;
        let lat = regs::LATA + offset;

        match pin.direction {
            Direction::Output => {
                // Latch first so the pin does not glitch when TRIS opens it
                match pin.level {
                    Level::High => self.bus.set_bit(lat, pin.pin),
                    Level::Low => self.bus.clear_bit(lat, pin.pin),
                }
                self.bus.clear_bit(tris, pin.pin);
            }
            Direction::Input => {
                self.bus.set_bit(tris, pin.pin);
            }
        }
        Ok(())
    }
}

/// Flag/enable/priority register addresses plus the bit index for one
/// interrupt source.
fn irq_regs(src: IrqSource) -> (u16, u16, u16, u8) {
    match src {
        IrqSource::Ccp1 => (regs::PIE1, regs::PIR1, regs::IPR1, regs::CCP1_IRQ_BIT),
        IrqSource::Ccp2 => (regs::PIE2, regs::PIR2, regs::IPR2, regs::CCP2_IRQ_BIT),
    }
}

impl<B: SfrBus> InterruptControl for Mcu<B> {
    fn enable(&mut self, src: IrqSource) {
        let (pie, _, _, bit) = irq_regs(src);
        self.bus.set_bit(pie, bit);
    }

    fn disable(&mut self, src: IrqSource) {
        let (pie, _, _, bit) = irq_regs(src);
        self.bus.clear_bit(pie, bit);
    }

    fn clear_flag(&mut self, src: IrqSource) {
        let (_, pir, _, bit) = irq_regs(src);
        self.bus.clear_bit(pir, bit);
    }

    fn is_flagged(&mut self, src: IrqSource) -> bool {
        let (_, pir, _, bit) = irq_regs(src);
        self.bus.bit(pir, bit)
    }

    fn set_priority(&mut self, src: IrqSource, priority: Priority) {
        let (_, _, ipr, bit) = irq_regs(src);
        match priority {
            Priority::High => self.bus.set_bit(ipr, bit),
            Priority::Low => self.bus.clear_bit(ipr, bit),
        }
    }

    fn enable_priority_levels(&mut self) {
        self.bus.set_bit(regs::RCON, regs::IPEN_BIT);
    }

    fn enable_global_high(&mut self) {
        self.bus.set_bit(regs::INTCON, regs::GIE_GIEH_BIT);
    }

    fn enable_global_low(&mut self) {
        self.bus.set_bit(regs::INTCON, regs::PEIE_GIEL_BIT);
    }

    fn enable_global(&mut self) {
        self.bus.set_bit(regs::INTCON, regs::GIE_GIEH_BIT);
    }

    fn enable_peripheral(&mut self) {
        self.bus.set_bit(regs::INTCON, regs::PEIE_GIEL_BIT);
    }
}
