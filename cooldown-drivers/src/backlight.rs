//! PWM backlight
//!
//! Brightness is a fraction in `0.0..=1.0`, mapped linearly onto the
//! channel's duty range. Out-of-range requests are clamped.

use cooldown_hal::PwmChannel;

/// Backlight driven by one PWM channel
pub struct Backlight<P> {
    pwm: P,
}

impl<P: PwmChannel> Backlight<P> {
    pub fn new(pwm: P) -> Self {
        Self { pwm }
    }

    /// Duty value for a brightness fraction on a channel topping out at `max_duty`
    pub fn duty_for(fraction: f32, max_duty: u16) -> u16 {
        // NaN clamps to NaN, which casts to 0
        (fraction.clamp(0.0, 1.0) * max_duty as f32) as u16
    }

    /// Set brightness and return the duty written
    pub fn set_brightness(&mut self, fraction: f32) -> u16 {
        let duty = Self::duty_for(fraction, self.pwm.max_duty());
        self.pwm.set_duty(duty);
        duty
    }

    /// Current brightness as a fraction
    pub fn brightness(&self) -> f32 {
        match self.pwm.max_duty() {
            0 => 0.0,
            max => self.pwm.duty() as f32 / max as f32,
        }
    }
}
