//! CCP (Capture/Compare/PWM) driver
//!
//! Two hardware instances (CCP1, CCP2) multiplex three mutually exclusive
//! operating modes. The active mode is a typestate parameter on [`Ccp`]:
//! mode-specific accessors exist only on the matching typestate, so a
//! driver value compiled for one mode cannot call another mode's runtime
//! path. Switching mode means constructing and initializing a new driver,
//! never mutating a field.
//!
//! Both instances share resources: the capture/compare timer routing bits
//! in T3CON and the PWM period register PR2. A second PWM init silently
//! overwrites the first's period; configuring both instances for
//! independent PWM frequencies is unsupported.
//!
//! ```ignore
//! let mut mcu = Mcu::new(MmioBus::new());
//! let mut pwm: Ccp<Pwm> = Ccp::new(CcpInstance::Ccp1);
//! pwm.init(&config, &mut mcu)?;
//! pwm.set_duty(&mut mcu, 50)?;
//! ```

use core::marker::PhantomData;

use ember_hal::gpio::PinError;
use ember_hal::interrupt::{InterruptControl, IrqSource, Priority};
use ember_hal::SfrBus;

use crate::regs;

pub mod capture;
pub mod compare;
pub mod mode;
pub mod pwm;
pub mod value;

pub use capture::CaptureConfig;
pub use compare::CompareConfig;
pub use mode::{CaptureVariant, CompareVariant};
pub use pwm::PwmConfig;
pub use value::RegPair;

/// Marker: capture operating mode.
pub struct Capture;
/// Marker: compare operating mode.
pub struct Compare;
/// Marker: PWM operating mode.
pub struct Pwm;

/// Physical CCP module selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CcpInstance {
    Ccp1,
    Ccp2,
}

impl CcpInstance {
    /// The instance's CCPxCON control register.
    fn con(self) -> u16 {
        match self {
            CcpInstance::Ccp1 => regs::CCP1CON,
            CcpInstance::Ccp2 => regs::CCP2CON,
        }
    }

    /// Low byte of the instance's CCPRx register pair.
    fn ccpr_low(self) -> u16 {
        match self {
            CcpInstance::Ccp1 => regs::CCPR1L,
            CcpInstance::Ccp2 => regs::CCPR2L,
        }
    }

    /// High byte of the instance's CCPRx register pair.
    fn ccpr_high(self) -> u16 {
        match self {
            CcpInstance::Ccp1 => regs::CCPR1H,
            CcpInstance::Ccp2 => regs::CCPR2H,
        }
    }

    /// The instance's interrupt source.
    fn irq(self) -> IrqSource {
        match self {
            CcpInstance::Ccp1 => IrqSource::Ccp1,
            CcpInstance::Ccp2 => IrqSource::Ccp2,
        }
    }
}

/// Errors from CCP configuration and runtime accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CcpError {
    /// Raw mode variant outside the set valid for the active mode.
    InvalidModeVariant,
    /// PWM frequency or scaler of zero.
    InvalidPwmConfig,
    /// Duty cycle above 100 percent.
    InvalidDutyCycle,
    /// Pin setup rejected by the GPIO collaborator.
    Pin(PinError),
}

/// Capture/compare clock routing for the instance *pair*.
///
/// The two T3CON bits jointly select which 16-bit timer feeds each
/// instance's comparator; there is no per-instance setting. These three
/// combinations are the only modeled ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CaptureTimerRouting {
    /// Timer3 clocks both CCP1 and CCP2.
    Ccp1Ccp2Timer3,
    /// Timer1 clocks CCP1, Timer3 clocks CCP2.
    Ccp1Timer1Ccp2Timer3,
    /// Timer1 clocks both CCP1 and CCP2.
    Ccp1Ccp2Timer1,
}

/// Callback invoked from the instance's interrupt vector.
pub type IsrHandler = fn();

/// Interrupt routing for one instance.
#[derive(Debug, Clone, Copy)]
pub struct IrqConfig {
    pub handler: IsrHandler,
    /// `None` selects the flat global+peripheral enable path instead of
    /// the two-level priority scheme.
    pub priority: Option<Priority>,
}

/// One CCP instance driver.
///
/// Owns nothing but the registered callback; every register access is a
/// fresh read/write through the caller's bus. `Mode` is one of
/// [`Capture`], [`Compare`], [`Pwm`].
pub struct Ccp<Mode> {
    instance: CcpInstance,
    handler: Option<IsrHandler>,
    _mode: PhantomData<Mode>,
}

impl<M> Ccp<M> {
    pub fn new(instance: CcpInstance) -> Self {
        Self {
            instance,
            handler: None,
            _mode: PhantomData,
        }
    }

    pub fn instance(&self) -> CcpInstance {
        self.instance
    }

    /// Write the CCPxM mode select field.
    fn set_mode_bits<B: SfrBus>(bus: &mut B, instance: CcpInstance, bits: u8) {
        bus.write_field(instance.con(), regs::CCPM_MASK, 0, bits);
    }

    /// Select which timer feeds the capture/compare comparators.
    ///
    /// Internal step of capture/compare init; always writes both routing
    /// bits so the pair is never left half-configured.
    fn select_capture_timer<B: SfrBus>(bus: &mut B, routing: CaptureTimerRouting) {
        match routing {
            CaptureTimerRouting::Ccp1Ccp2Timer3 => {
                bus.clear_bit(regs::T3CON, regs::T3CCP1_BIT);
                bus.set_bit(regs::T3CON, regs::T3CCP2_BIT);
            }
            CaptureTimerRouting::Ccp1Timer1Ccp2Timer3 => {
                bus.set_bit(regs::T3CON, regs::T3CCP1_BIT);
                bus.clear_bit(regs::T3CON, regs::T3CCP2_BIT);
            }
            CaptureTimerRouting::Ccp1Ccp2Timer1 => {
                bus.clear_bit(regs::T3CON, regs::T3CCP1_BIT);
                bus.clear_bit(regs::T3CON, regs::T3CCP2_BIT);
            }
        }
    }

    /// Register the callback and arm the instance's interrupt.
    ///
    /// The source is masked while the handler slot is swapped: a previous
    /// init may already have armed it, and the ISR must never observe a
    /// half-written slot. Re-running init re-registers and re-arms without
    /// an explicit unregister.
    fn arm_interrupt<I: InterruptControl>(&mut self, irq: &mut I, cfg: &Option<IrqConfig>) {
        let Some(cfg) = cfg else {
            return;
        };
        let src = self.instance.irq();

        irq.disable(src);
        self.handler = Some(cfg.handler);
        irq.clear_flag(src);
        irq.enable(src);

        match cfg.priority {
            Some(Priority::High) => {
                irq.enable_priority_levels();
                irq.enable_global_high();
                irq.set_priority(src, Priority::High);
            }
            Some(Priority::Low) => {
                irq.enable_priority_levels();
                irq.enable_global_low();
                irq.set_priority(src, Priority::Low);
            }
            None => {
                irq.enable_global();
                irq.enable_peripheral();
            }
        }
    }

    /// Disable the module and its interrupt source, dropping the callback.
    ///
    /// Does not wait for an in-flight ISR; the caller must ensure no
    /// concurrent deinit/ISR race.
    pub fn deinit<M2>(&mut self, mcu: &mut M2)
    where
        M2: SfrBus + InterruptControl,
    {
        Self::set_mode_bits(mcu, self.instance, mode::MODE_DISABLED);
        mcu.disable(self.instance.irq());
        self.handler = None;
    }

    /// ISR trampoline: call from the instance's hardware vector.
    ///
    /// Clears the pending flag before invoking the callback so an edge
    /// arriving during the callback is not lost. No-op without a
    /// registered callback.
    pub fn on_interrupt<I: InterruptControl>(&mut self, irq: &mut I) {
        irq.clear_flag(self.instance.irq());
        if let Some(handler) = self.handler {
            handler();
        }
    }
}
