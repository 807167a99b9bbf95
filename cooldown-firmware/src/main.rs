//! Cooldown - hero cooldown tracker firmware
//!
//! Main firmware binary for the RP2040 handheld: an 11-key keypad, a
//! 480x320 SPI colour panel and a PWM backlight.
//!
//! # Board wiring
//!
//! | Signal          | GPIO          |
//! |-----------------|---------------|
//! | Panel SCK       | 18 (SPI0)     |
//! | Panel MOSI      | 19 (SPI0)     |
//! | Panel CS        | 17            |
//! | Panel D/C       | 16            |
//! | Panel RESET     | 21            |
//! | Backlight       | 20 (PWM 2A)   |
//! | Matrix rows     | 2, 3          |
//! | Matrix columns  | 4, 5, 6, 7, 8 |
//! | Standalone key  | 9             |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Flex, Input, Level, Output, Pull};
use embassy_rp::pwm::{Config as PwmSliceConfig, Pwm};
use embassy_rp::spi::Spi;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use cooldown_core::config::{BacklightConfig, DisplayConfig, ScanConfig, TimerConfig};
use cooldown_drivers::backlight::Backlight;
use cooldown_drivers::display::{Panel, PanelSurface, UiStrip};
use cooldown_drivers::input::MatrixScanner;
use cooldown_hal::pwm::PwmConfig;
use cooldown_hal::spi::SpiConfig;
use cooldown_hal_rp2040::spi::spi_config;
use cooldown_hal_rp2040::{BacklightPwm, FlexLine, InputLine, OutputLine, PanelSpi};

mod channels;
mod display;
mod tasks;

/// Keypad as wired on the board
pub type Keypad = MatrixScanner<FlexLine, InputLine, InputLine>;

// Render strip (30 KiB), kept out of the task future
static STRIP: StaticCell<UiStrip> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Cooldown firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let display_config = DisplayConfig::default();
    let scan_config = ScanConfig::default();
    let backlight_config = BacklightConfig::default();

    // Panel bus
    let bus_settings = SpiConfig::default();
    let spi = Spi::new_txonly(
        p.SPI0,
        p.PIN_18,
        p.PIN_19,
        p.DMA_CH0,
        spi_config(&bus_settings),
    );
    let panel = Panel::new(
        PanelSpi::new(spi),
        OutputLine::new(Output::new(p.PIN_17, Level::High)),
        OutputLine::new(Output::new(p.PIN_16, Level::Low)),
        OutputLine::new(Output::new(p.PIN_21, Level::High)),
    );
    let mut surface = PanelSurface::new(panel, &display_config);

    // Backlight
    let pwm = Pwm::new_output_a(p.PWM_SLICE2, p.PIN_20, PwmSliceConfig::default());
    let pwm_settings = PwmConfig {
        frequency_hz: backlight_config.frequency_hz,
        resolution_bits: backlight_config.resolution_bits,
    };
    let mut backlight = Backlight::new(BacklightPwm::new(pwm, &pwm_settings));
    let duty = backlight.set_brightness(backlight_config.boot_brightness);
    info!("Backlight duty {}", duty);

    if let Err(e) = display::boot(&mut surface).await {
        error!("Panel bring-up failed: {:?}", e);
        panic!("panel bring-up failed");
    }

    // Keypad
    let keypad: Keypad = MatrixScanner::new(
        [
            FlexLine::new(Flex::new(p.PIN_4)),
            FlexLine::new(Flex::new(p.PIN_5)),
            FlexLine::new(Flex::new(p.PIN_6)),
            FlexLine::new(Flex::new(p.PIN_7)),
            FlexLine::new(Flex::new(p.PIN_8)),
        ],
        [
            InputLine::new(Input::new(p.PIN_2, Pull::Down)),
            InputLine::new(Input::new(p.PIN_3, Pull::Down)),
        ],
        InputLine::new(Input::new(p.PIN_9, Pull::Up)),
        &scan_config,
    );
    info!("Keypad initialized");

    let strip = STRIP.init(UiStrip::new());

    // Spawn tasks
    spawner.spawn(tasks::clock_task(TimerConfig::default())).unwrap();
    spawner.spawn(tasks::scan_task(keypad, scan_config)).unwrap();
    spawner
        .spawn(tasks::render_task(surface, strip, display_config))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // The backlight has no other owner; park it here with main
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat, backlight {}", backlight.brightness());
    }
}
