//! Backlight PWM
//!
//! One channel (A) of a PWM slice. The counter wraps at the configured
//! resolution, and the clock divider is chosen so the wrap rate matches
//! the requested carrier.

use cooldown_hal::pwm::PwmConfig;
use embassy_rp::pwm::{Config, Pwm};
use fixed::types::U12F4;

/// Smallest divider the slice accepts (1.0)
const DIVIDER_MIN_BITS: u32 = 1 << 4;

/// Clock divider giving `frequency_hz` with a counter of `top + 1` steps
///
/// Returned as 8.4 fixed point, saturated to the hardware range.
pub fn divider_for(sys_clk_hz: u32, frequency_hz: u32, top: u16) -> U12F4 {
    let steps = frequency_hz.max(1) as u64 * (top as u64 + 1);
    let bits = (sys_clk_hz as u64 * 16 / steps).clamp(DIVIDER_MIN_BITS as u64, 0x0FFF);
    U12F4::from_bits(bits as u16)
}

/// PWM output driving the backlight
pub struct BacklightPwm {
    pwm: Pwm<'static>,
    config: Config,
}

impl BacklightPwm {
    /// Configure the slice for `settings` and start with the output off
    pub fn new(mut pwm: Pwm<'static>, settings: &PwmConfig) -> Self {
        let mut config = Config::default();
        config.top = settings.max_duty();
        config.compare_a = 0;
        config.divider = divider_for(
            embassy_rp::clocks::clk_sys_freq(),
            settings.frequency_hz,
            config.top,
        );
        pwm.set_config(&config);
        Self { pwm, config }
    }
}

impl cooldown_hal::PwmChannel for BacklightPwm {
    fn max_duty(&self) -> u16 {
        self.config.top
    }

    fn set_duty(&mut self, duty: u16) {
        self.config.compare_a = duty.min(self.config.top);
        self.pwm.set_config(&self.config);
    }

    fn duty(&self) -> u16 {
        self.config.compare_a
    }
}
