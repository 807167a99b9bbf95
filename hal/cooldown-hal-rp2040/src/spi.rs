//! Panel SPI bus
//!
//! Transmit-only SPI with a DMA channel. Register framing uses the blocking
//! path; pixel chunks go through DMA and the future resolves once the last
//! byte has been shifted out.

use cooldown_hal::spi::{Phase as HalPhase, Polarity as HalPolarity, SpiConfig};
use embassy_rp::spi::{Async, Config, Error, Instance, Phase, Polarity, Spi};

/// Map the shared bus configuration onto an embassy-rp SPI config
pub fn spi_config(config: &SpiConfig) -> Config {
    let (polarity, phase): (HalPolarity, HalPhase) = config.mode.into();
    let mut out = Config::default();
    out.frequency = config.frequency;
    out.polarity = match polarity {
        HalPolarity::IdleLow => Polarity::IdleLow,
        HalPolarity::IdleHigh => Polarity::IdleHigh,
    };
    out.phase = match phase {
        HalPhase::CaptureOnFirstTransition => Phase::CaptureOnFirstTransition,
        HalPhase::CaptureOnSecondTransition => Phase::CaptureOnSecondTransition,
    };
    out
}

/// Panel bus on one of the SPI blocks
pub struct PanelSpi<T: Instance + 'static> {
    spi: Spi<'static, T, Async>,
}

impl<T: Instance + 'static> PanelSpi<T> {
    pub fn new(spi: Spi<'static, T, Async>) -> Self {
        Self { spi }
    }
}

impl<T: Instance + 'static> cooldown_hal::SpiBus for PanelSpi<T> {
    type Error = Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Error> {
        self.spi.blocking_write(data)
    }

    async fn write_queued(&mut self, data: &[u8]) -> Result<(), Error> {
        self.spi.write(data).await
    }
}
