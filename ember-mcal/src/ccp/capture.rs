//! Capture mode: latch the routed timer's value on an external edge.

use ember_hal::gpio::PinConfigure;
use ember_hal::interrupt::{InterruptControl, IrqSource};
use ember_hal::SfrBus;

use crate::regs;

use super::mode::{CaptureVariant, MODE_DISABLED};
use super::value::RegPair;
use super::{Capture, CaptureTimerRouting, Ccp, CcpError, IrqConfig};

/// Capture mode configuration.
#[derive(Debug, Clone, Copy)]
pub struct CaptureConfig {
    /// Raw CCPxM discriminant; must be one of the [`CaptureVariant`]
    /// encodings (`0x04..=0x07`).
    pub variant: u8,
    pub pin: ember_hal::gpio::PinConfig,
    pub timer_routing: CaptureTimerRouting,
    pub irq: Option<IrqConfig>,
}

impl Ccp<Capture> {
    /// Configure the instance for capture operation.
    ///
    /// An unrecognized variant returns an error, but pin setup and
    /// interrupt arming still run: downstream code relies on the
    /// interrupt being armed even after a failed mode dispatch, so there
    /// is no early return and no rollback of partial register writes.
    pub fn init<M>(&mut self, config: &CaptureConfig, mcu: &mut M) -> Result<(), CcpError>
    where
        M: SfrBus + PinConfigure + InterruptControl,
    {
        Self::set_mode_bits(mcu, self.instance, MODE_DISABLED);

        let dispatch = match CaptureVariant::from_raw(config.variant) {
            Some(variant) => {
                Self::set_mode_bits(mcu, self.instance, variant.bits());
                Ok(())
            }
            None => Err(CcpError::InvalidModeVariant),
        };
        Self::select_capture_timer(mcu, config.timer_routing);

        let pin = mcu.configure(&config.pin);
        self.arm_interrupt(mcu, &config.irq);

        dispatch?;
        pin.map_err(CcpError::Pin)
    }

    /// Poll the capture flag, clearing it when set.
    ///
    /// Edge-triggered: a `true` result consumes the event, so the next
    /// call reports `false` until the hardware latches another edge.
    /// Polls the CCP1 flag regardless of instance (see
    /// [`read_capture_value`](Self::read_capture_value)).
    pub fn is_capture_ready<I: InterruptControl>(&self, irq: &mut I) -> bool {
        if irq.is_flagged(IrqSource::Ccp1) {
            irq.clear_flag(IrqSource::Ccp1);
            true
        } else {
            false
        }
    }

    /// Fresh snapshot of the captured timer value.
    ///
    /// Known gap: only CCP1's register pair is wired up; a CCP2 driver
    /// still reads CCPR1. CCP2 capture readout has never been
    /// implemented in this layer.
    pub fn read_capture_value<B: SfrBus>(&self, bus: &mut B) -> u16 {
        let pair = RegPair {
            low: bus.read(regs::CCPR1L),
            high: bus.read(regs::CCPR1H),
        };
        pair.join()
    }
}
