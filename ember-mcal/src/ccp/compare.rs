//! Compare mode: trigger a pin/event action when the routed timer matches
//! the programmed CCPRx value.

use ember_hal::gpio::PinConfigure;
use ember_hal::interrupt::{InterruptControl, IrqSource};
use ember_hal::SfrBus;

use super::mode::{CompareVariant, MODE_DISABLED};
use super::value::RegPair;
use super::{CaptureTimerRouting, Ccp, CcpError, Compare, IrqConfig};

/// Compare mode configuration.
#[derive(Debug, Clone, Copy)]
pub struct CompareConfig {
    /// Raw CCPxM discriminant; must be one of the [`CompareVariant`]
    /// encodings (`0x02`, `0x08..=0x0B`).
    pub variant: u8,
    pub pin: ember_hal::gpio::PinConfig,
    pub timer_routing: CaptureTimerRouting,
    pub irq: Option<IrqConfig>,
}

impl Ccp<Compare> {
    /// Configure the instance for compare operation.
    ///
    /// Same best-effort policy as capture init: a bad variant is
    /// reported, but pin setup and interrupt arming still run.
    pub fn init<M>(&mut self, config: &CompareConfig, mcu: &mut M) -> Result<(), CcpError>
    where
        M: SfrBus + PinConfigure + InterruptControl,
    {
        Self::set_mode_bits(mcu, self.instance, MODE_DISABLED);

        let dispatch = match CompareVariant::from_raw(config.variant) {
            Some(variant) => {
                Self::set_mode_bits(mcu, self.instance, variant.bits());
                Ok(())
            }
            None => Err(CcpError::InvalidModeVariant),
        };
        // The comparator clock comes from the same shared routing bits as
        // capture mode
        Self::select_capture_timer(mcu, config.timer_routing);

        let pin = mcu.configure(&config.pin);
        self.arm_interrupt(mcu, &config.irq);

        dispatch?;
        pin.map_err(CcpError::Pin)
    }

    /// Poll the match flag, clearing it when set.
    ///
    /// Edge-triggered like the capture flag. Known gap: polls the CCP1
    /// flag regardless of instance, matching the capture path.
    pub fn is_compare_complete<I: InterruptControl>(&self, irq: &mut I) -> bool {
        if irq.is_flagged(IrqSource::Ccp1) {
            irq.clear_flag(IrqSource::Ccp1);
            true
        } else {
            false
        }
    }

    /// Program the 16-bit match value into the instance's register pair.
    pub fn set_compare_value<B: SfrBus>(&self, bus: &mut B, value: u16) {
        let pair = RegPair::split(value);
        bus.write(self.instance.ccpr_low(), pair.low);
        bus.write(self.instance.ccpr_high(), pair.high);
    }
}
