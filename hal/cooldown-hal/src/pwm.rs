//! PWM output abstraction
//!
//! Only the backlight uses PWM, so the trait is limited to a single
//! channel with a fixed carrier and a duty setter.

/// A single PWM output channel
pub trait PwmChannel {
    /// Largest accepted duty value (100% on)
    fn max_duty(&self) -> u16;

    /// Set the duty cycle, clamped to `max_duty()`
    fn set_duty(&mut self, duty: u16);

    /// Currently programmed duty value
    fn duty(&self) -> u16;
}

/// PWM carrier configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmConfig {
    /// Carrier frequency in Hz
    pub frequency_hz: u32,
    /// Duty resolution in bits
    pub resolution_bits: u8,
}

impl PwmConfig {
    /// Largest duty value representable at this resolution
    pub const fn max_duty(&self) -> u16 {
        ((1u32 << self.resolution_bits) - 1) as u16
    }
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self {
            frequency_hz: 5_000,
            resolution_bits: 13,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolution() {
        let config = PwmConfig::default();
        assert_eq!(config.max_duty(), 8191);
        assert_eq!(config.frequency_hz, 5_000);
    }
}
