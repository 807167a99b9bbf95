//! GPIO line wrappers

use embassy_rp::gpio::{Flex, Input, Output};

/// Push-pull output line
pub struct OutputLine(Output<'static>);

impl OutputLine {
    pub fn new(pin: Output<'static>) -> Self {
        Self(pin)
    }
}

impl cooldown_hal::OutputPin for OutputLine {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Input line with whatever pull the caller configured
pub struct InputLine(Input<'static>);

impl InputLine {
    pub fn new(pin: Input<'static>) -> Self {
        Self(pin)
    }
}

impl cooldown_hal::InputPin for InputLine {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Line that switches between output and high-impedance input
///
/// Used for matrix column strobes. Starts as an input with no pull.
pub struct FlexLine {
    pin: Flex<'static>,
}

impl FlexLine {
    pub fn new(mut pin: Flex<'static>) -> Self {
        pin.set_as_input();
        Self { pin }
    }
}

impl cooldown_hal::OutputPin for FlexLine {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

impl cooldown_hal::FlexPin for FlexLine {
    fn set_as_output(&mut self) {
        self.pin.set_as_output();
    }

    fn set_as_input(&mut self) {
        self.pin.set_as_input();
    }
}
