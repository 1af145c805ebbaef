//! PWM mode: periodic output with programmable period and duty cycle.
//!
//! The period lives in PR2 (shared by both PWM-capable outputs) and the
//! 10-bit duty value splits across the 8-bit CCPRxL register and the
//! 2-bit DCxB field of CCPxCON. The arithmetic is kept in standalone
//! functions so the encoding laws are testable without a register file.

use ember_hal::gpio::PinConfigure;
use ember_hal::interrupt::InterruptControl;
use ember_hal::SfrBus;

use crate::regs;

use super::mode::{MODE_DISABLED, MODE_PWM};
use super::{Ccp, CcpError, IrqConfig, Pwm};

/// Timer2 input prescaler division factors usable for PWM.
pub const PRESCALER_DIV_1: u8 = 1;
pub const PRESCALER_DIV_4: u8 = 4;
pub const PRESCALER_DIV_16: u8 = 16;

/// Largest Timer2 output postscaler division factor (1..=16 are valid).
pub const POSTSCALER_DIV_MAX: u8 = 16;

/// PWM mode configuration.
#[derive(Debug, Clone, Copy)]
pub struct PwmConfig {
    pub pin: ember_hal::gpio::PinConfig,
    /// Instruction clock feeding Timer2, in Hz.
    pub clock_hz: u32,
    /// Target PWM frequency in Hz; must be non-zero.
    pub frequency_hz: u32,
    /// Timer2 prescaler division factor (1, 4 or 16).
    pub prescaler: u8,
    /// Timer2 postscaler division factor (1..=16).
    pub postscaler: u8,
    pub irq: Option<IrqConfig>,
}

/// Rounded integer division. Widened so the half-denominator bias and
/// the scaler products cannot overflow for any 32-bit input.
fn div_round(num: u64, den: u64) -> u64 {
    (num + den / 2) / den
}

/// Period register ticks for a target PWM frequency:
/// `round(clock / (freq × 4 × postscaler × prescaler)) − 1`.
///
/// PR2 keeps only the low 8 bits of the result; a frequency too low for
/// the chosen scalers overflows the register and wraps.
pub fn period_ticks(clock_hz: u32, freq_hz: u32, prescaler: u8, postscaler: u8) -> u32 {
    let den = u64::from(freq_hz) * 4 * u64::from(prescaler) * u64::from(postscaler);
    // The quotient never exceeds clock_hz, so the narrowing is lossless.
    div_round(u64::from(clock_hz), den).saturating_sub(1) as u32
}

/// Duty ticks for a duty-cycle percentage:
/// `round(4 × (PR2 + 1) × duty / 100)`.
///
/// Saturates at `u32::MAX` for periods no real timer can hold.
pub fn duty_ticks(period_plus_one: u32, duty_percent: u8) -> u32 {
    let ticks = div_round(4 * u64::from(period_plus_one) * u64::from(duty_percent), 100);
    ticks.min(u64::from(u32::MAX)) as u32
}

/// Split duty ticks into the CCPRxL part and the 2-bit DCxB part.
pub fn split_duty(ticks: u32) -> (u32, u8) {
    (ticks >> 2, (ticks & 0x03) as u8)
}

/// Reassemble duty ticks from the two register fields.
pub fn join_duty(coarse: u32, fine: u8) -> u32 {
    coarse << 2 | u32::from(fine)
}

impl Ccp<Pwm> {
    /// Configure the instance for PWM operation and program the shared
    /// period register.
    ///
    /// A zero frequency or scaler is reported without touching the mode
    /// or period registers, but pin setup and interrupt arming still run
    /// (same best-effort policy as the capture/compare dispatch). A later
    /// PWM init on the other instance overwrites PR2.
    pub fn init<M>(&mut self, config: &PwmConfig, mcu: &mut M) -> Result<(), CcpError>
    where
        M: SfrBus + PinConfigure + InterruptControl,
    {
        Self::set_mode_bits(mcu, self.instance, MODE_DISABLED);

        let dispatch = if config.frequency_hz == 0 || config.prescaler == 0 || config.postscaler == 0
        {
            Err(CcpError::InvalidPwmConfig)
        } else {
            Self::set_mode_bits(mcu, self.instance, MODE_PWM);
            let ticks = period_ticks(
                config.clock_hz,
                config.frequency_hz,
                config.prescaler,
                config.postscaler,
            );
            mcu.write(regs::PR2, ticks as u8);
            Ok(())
        };

        let pin = mcu.configure(&config.pin);
        self.arm_interrupt(mcu, &config.irq);

        dispatch?;
        pin.map_err(CcpError::Pin)
    }

    /// Program the duty cycle as a percentage of the current period.
    ///
    /// Reads PR2 live, so this must run after `init` has set the period;
    /// before that the computation uses a stale or zero period.
    pub fn set_duty<B: SfrBus>(&self, bus: &mut B, percent: u8) -> Result<(), CcpError> {
        if percent > 100 {
            return Err(CcpError::InvalidDutyCycle);
        }
        let period_plus_one = u32::from(bus.read(regs::PR2)) + 1;
        let (coarse, fine) = split_duty(duty_ticks(period_plus_one, percent));

        bus.write_field(self.instance.con(), regs::DCB_MASK, regs::DCB_SHIFT, fine);
        bus.write(self.instance.ccpr_low(), coarse as u8);
        Ok(())
    }

    /// Re-enable PWM output on the module.
    pub fn start<B: SfrBus>(&self, bus: &mut B) {
        Self::set_mode_bits(bus, self.instance, MODE_PWM);
    }

    /// Disable the whole module.
    pub fn stop<B: SfrBus>(&self, bus: &mut B) {
        Self::set_mode_bits(bus, self.instance, MODE_DISABLED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ccp::CcpInstance;
    use crate::testbus::SimBus;
    use crate::Mcu;
    use ember_hal::gpio::{Direction, Level, PinConfig, Port};
    use proptest::prelude::*;

    fn pin_rc2() -> PinConfig {
        PinConfig {
            port: Port::C,
            pin: 2,
            direction: Direction::Output,
            level: Level::Low,
        }
    }

    fn config() -> PwmConfig {
        PwmConfig {
            pin: pin_rc2(),
            clock_hz: 8_000_000,
            frequency_hz: 10_000,
            prescaler: PRESCALER_DIV_4,
            postscaler: 1,
            irq: None,
        }
    }

    #[test]
    fn test_period_ticks_reference_scenario() {
        // 20 MHz clock, 1 kHz target, prescaler 4, postscaler 1:
        // 20e6 / (1000 * 4 * 1 * 4) = 1250, minus one
        assert_eq!(period_ticks(20_000_000, 1_000, 4, 1), 1249);
    }

    #[test]
    fn test_duty_ticks_reference_scenario() {
        let ticks = duty_ticks(1250, 50);
        assert_eq!(ticks, 2500);

        let (coarse, fine) = split_duty(ticks);
        assert_eq!(coarse, 625);
        assert_eq!(fine, 0);
    }

    #[test]
    fn test_period_ticks_extreme_inputs_do_not_overflow() {
        // Scaled denominator exceeds u32: a huge target frequency just
        // yields a zero-tick period
        assert_eq!(period_ticks(20_000_000, u32::MAX / 2, 16, 16), 0);

        // Biased numerator exceeds u32 when the clock is at the limit
        assert_eq!(period_ticks(u32::MAX, 1, 1, 1), 1_073_741_823);
    }

    #[test]
    fn test_duty_ticks_saturates_at_extreme_period() {
        assert_eq!(duty_ticks(u32::MAX, 100), u32::MAX);
    }

    #[test]
    fn test_duty_ticks_rounds() {
        // 4 * 51 * 33 / 100 = 67.32 rounds down
        assert_eq!(duty_ticks(51, 33), 67);
        // 4 * 51 * 37 / 100 = 75.48 rounds down
        assert_eq!(duty_ticks(51, 37), 75);
        // 4 * 51 * 63 / 100 = 128.52 rounds up
        assert_eq!(duty_ticks(51, 63), 129);
    }

    #[test]
    fn test_init_programs_period_and_mode() {
        let mut mcu = Mcu::new(SimBus::new());
        let mut pwm: Ccp<Pwm> = Ccp::new(CcpInstance::Ccp1);

        pwm.init(&config(), &mut mcu).unwrap();

        // 8e6 / (10000 * 4 * 1 * 4) = 50 -> PR2 = 49
        assert_eq!(mcu.read(regs::PR2), 49);
        assert_eq!(mcu.read(regs::CCP1CON) & regs::CCPM_MASK, MODE_PWM);
    }

    #[test]
    fn test_second_init_overwrites_shared_period() {
        let mut mcu = Mcu::new(SimBus::new());
        let mut pwm1: Ccp<Pwm> = Ccp::new(CcpInstance::Ccp1);
        let mut pwm2: Ccp<Pwm> = Ccp::new(CcpInstance::Ccp2);

        pwm1.init(&config(), &mut mcu).unwrap();
        let first = mcu.read(regs::PR2);

        let mut faster = config();
        faster.frequency_hz = 20_000;
        pwm2.init(&faster, &mut mcu).unwrap();

        assert_ne!(mcu.read(regs::PR2), first);
        assert_eq!(mcu.read(regs::PR2), 24);
    }

    #[test]
    fn test_zero_frequency_rejected_but_pin_and_irq_proceed() {
        let mut mcu = Mcu::new(SimBus::new());
        mcu.write(regs::TRISA + 2, 0xFF);
        let mut pwm: Ccp<Pwm> = Ccp::new(CcpInstance::Ccp1);

        let mut cfg = config();
        cfg.frequency_hz = 0;
        fn noop() {}
        cfg.irq = Some(IrqConfig {
            handler: noop,
            priority: None,
        });

        assert_eq!(pwm.init(&cfg, &mut mcu), Err(CcpError::InvalidPwmConfig));

        // Mode and period untouched
        assert_eq!(mcu.read(regs::CCP1CON) & regs::CCPM_MASK, MODE_DISABLED);
        assert_eq!(mcu.read(regs::PR2), 0);
        // Pin driven as output and interrupt armed anyway
        assert!(!mcu.bit(regs::TRISA + 2, 2));
        assert!(mcu.bit(regs::PIE1, regs::CCP1_IRQ_BIT));
        assert!(mcu.bit(regs::INTCON, regs::GIE_GIEH_BIT));
        assert!(mcu.bit(regs::INTCON, regs::PEIE_GIEL_BIT));
    }

    #[test]
    fn test_set_duty_splits_registers() {
        let mut mcu = Mcu::new(SimBus::new());
        let mut pwm: Ccp<Pwm> = Ccp::new(CcpInstance::Ccp1);
        pwm.init(&config(), &mut mcu).unwrap();

        // PR2 = 49: duty_ticks(50, 50%) = 100 -> coarse 25, fine 0
        pwm.set_duty(&mut mcu, 50).unwrap();
        assert_eq!(mcu.read(regs::CCPR1L), 25);
        assert_eq!(mcu.read_field(regs::CCP1CON, regs::DCB_MASK, regs::DCB_SHIFT), 0);

        // 37%: 4 * 50 * 37 / 100 = 74 -> coarse 18, fine 2
        pwm.set_duty(&mut mcu, 37).unwrap();
        assert_eq!(mcu.read(regs::CCPR1L), 18);
        assert_eq!(mcu.read_field(regs::CCP1CON, regs::DCB_MASK, regs::DCB_SHIFT), 2);
        // Mode bits survive the DCxB field write
        assert_eq!(mcu.read(regs::CCP1CON) & regs::CCPM_MASK, MODE_PWM);
    }

    #[test]
    fn test_set_duty_rejects_out_of_range() {
        let mut mcu = Mcu::new(SimBus::new());
        let pwm: Ccp<Pwm> = Ccp::new(CcpInstance::Ccp1);

        assert_eq!(pwm.set_duty(&mut mcu, 101), Err(CcpError::InvalidDutyCycle));
        assert_eq!(mcu.read(regs::CCPR1L), 0);
    }

    #[test]
    fn test_start_stop_toggle_mode_bits() {
        let mut mcu = Mcu::new(SimBus::new());
        let mut pwm: Ccp<Pwm> = Ccp::new(CcpInstance::Ccp2);
        pwm.init(&config(), &mut mcu).unwrap();

        pwm.stop(&mut mcu);
        assert_eq!(mcu.read(regs::CCP2CON) & regs::CCPM_MASK, MODE_DISABLED);

        pwm.start(&mut mcu);
        assert_eq!(mcu.read(regs::CCP2CON) & regs::CCPM_MASK, MODE_PWM);
    }

    proptest! {
        #[test]
        fn prop_duty_split_join_identity(ticks in 0u32..=4096) {
            let (coarse, fine) = split_duty(ticks);
            prop_assert!(fine < 4);
            prop_assert_eq!(join_duty(coarse, fine), ticks);
        }

        #[test]
        fn prop_duty_ticks_monotonic(period in 1u32..=256, a in 0u8..=100, b in 0u8..=100) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(duty_ticks(period, lo) <= duty_ticks(period, hi));
        }
    }
}
