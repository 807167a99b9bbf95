//! Panel controller bring-up table
//!
//! Opaque vendor register values, sent verbatim after the hardware reset.
//! Only the last two entries carry a settle delay: sleep-out needs 120 ms
//! before the panel accepts display-on, and display-on needs 20 ms before
//! the first pixel write.

/// One controller register write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitCommand {
    /// Command opcode, sent with D/C low
    pub opcode: u8,
    /// Parameter bytes, sent with D/C high
    pub data: &'static [u8],
    /// Delay after the command in milliseconds
    pub delay_ms: u16,
}

impl InitCommand {
    const fn new(opcode: u8, data: &'static [u8]) -> Self {
        Self {
            opcode,
            data,
            delay_ms: 0,
        }
    }

    const fn with_delay(opcode: u8, delay_ms: u16) -> Self {
        Self {
            opcode,
            data: &[],
            delay_ms,
        }
    }
}

/// Sleep out
pub const CMD_SLEEP_OUT: u8 = 0x11;
/// Display on
pub const CMD_DISPLAY_ON: u8 = 0x29;
/// Column address set
pub const CMD_COLUMN_ADDRESS: u8 = 0x2A;
/// Row address set
pub const CMD_ROW_ADDRESS: u8 = 0x2B;
/// Memory write
pub const CMD_MEMORY_WRITE: u8 = 0x2C;

/// Bring-up sequence, in transmission order
pub static INIT_SEQUENCE: [InitCommand; 50] = [
    InitCommand::new(0xEF, &[]),
    InitCommand::new(0xEB, &[0x14]),
    InitCommand::new(0xFE, &[]),
    InitCommand::new(0xEF, &[]),
    InitCommand::new(0xEB, &[0x14]),
    InitCommand::new(0x84, &[0x40]),
    InitCommand::new(0x85, &[0xFF]),
    InitCommand::new(0x86, &[0xFF]),
    InitCommand::new(0x87, &[0xFF]),
    InitCommand::new(0x88, &[0x0A]),
    InitCommand::new(0x89, &[0x21]),
    InitCommand::new(0x8A, &[0x00]),
    InitCommand::new(0x8B, &[0x80]),
    InitCommand::new(0x8C, &[0x01]),
    InitCommand::new(0x8D, &[0x01]),
    InitCommand::new(0x8E, &[0xFF]),
    InitCommand::new(0x8F, &[0xFF]),
    InitCommand::new(0xB6, &[0x00, 0x20]),
    // Memory access: row/column exchange for landscape
    InitCommand::new(0x36, &[0x28]),
    // 16 bits per pixel
    InitCommand::new(0x3A, &[0x05]),
    InitCommand::new(0x90, &[0x08, 0x08, 0x08, 0x08]),
    InitCommand::new(0xBD, &[0x06]),
    InitCommand::new(0xBC, &[0x00]),
    InitCommand::new(0xFF, &[0x60, 0x01, 0x04]),
    InitCommand::new(0xC3, &[0x13]),
    InitCommand::new(0xC4, &[0x13]),
    InitCommand::new(0xC9, &[0x22]),
    InitCommand::new(0xBE, &[0x11]),
    InitCommand::new(0xE1, &[0x10, 0x0E]),
    InitCommand::new(0xDF, &[0x21, 0x0C, 0x02]),
    // Gamma
    InitCommand::new(0xF0, &[0x45, 0x09, 0x08, 0x08, 0x26, 0x2A]),
    InitCommand::new(0xF1, &[0x43, 0x70, 0x72, 0x36, 0x37, 0x6F]),
    InitCommand::new(0xF2, &[0x45, 0x09, 0x08, 0x08, 0x26, 0x2A]),
    InitCommand::new(0xF3, &[0x43, 0x70, 0x72, 0x36, 0x37, 0x6F]),
    InitCommand::new(0xED, &[0x1B, 0x0B]),
    InitCommand::new(0xAE, &[0x77]),
    InitCommand::new(0xCD, &[0x63]),
    InitCommand::new(
        0x70,
        &[0x07, 0x07, 0x04, 0x0E, 0x0F, 0x09, 0x07, 0x08, 0x03],
    ),
    InitCommand::new(0xE8, &[0x34]),
    InitCommand::new(
        0x62,
        &[
            0x18, 0x0D, 0x71, 0xED, 0x70, 0x70, 0x18, 0x0F, 0x71, 0xEF, 0x70, 0x70,
        ],
    ),
    InitCommand::new(
        0x63,
        &[
            0x18, 0x11, 0x71, 0xF1, 0x70, 0x70, 0x18, 0x13, 0x71, 0xF3, 0x70, 0x70,
        ],
    ),
    InitCommand::new(0x64, &[0x28, 0x29, 0xF1, 0x01, 0xF1, 0x00, 0x07]),
    InitCommand::new(
        0x66,
        &[0x3C, 0x00, 0xCD, 0x67, 0x45, 0x45, 0x10, 0x00, 0x00, 0x00],
    ),
    InitCommand::new(
        0x67,
        &[0x00, 0x3C, 0x00, 0x00, 0x00, 0x01, 0x54, 0x10, 0x32, 0x98],
    ),
    InitCommand::new(0x74, &[0x10, 0x85, 0x80, 0x00, 0x00, 0x4E, 0x00]),
    InitCommand::new(0x98, &[0x3E, 0x07]),
    // Tearing effect line on
    InitCommand::new(0x35, &[]),
    // Display inversion on
    InitCommand::new(0x21, &[]),
    InitCommand::with_delay(CMD_SLEEP_OUT, 120),
    InitCommand::with_delay(CMD_DISPLAY_ON, 20),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_bounds() {
        assert_eq!(INIT_SEQUENCE.len(), 50);
        assert_eq!(INIT_SEQUENCE[0].opcode, 0xEF);
        let tail = &INIT_SEQUENCE[48..];
        assert_eq!(tail[0], InitCommand::with_delay(0x11, 120));
        assert_eq!(tail[1], InitCommand::with_delay(0x29, 20));
    }

    #[test]
    fn test_only_tail_delays() {
        let delayed = INIT_SEQUENCE.iter().filter(|c| c.delay_ms > 0).count();
        assert_eq!(delayed, 2);
    }

    #[test]
    fn test_pixel_format_and_orientation() {
        let madctl = INIT_SEQUENCE.iter().find(|c| c.opcode == 0x36).unwrap();
        assert_eq!(madctl.data, &[0x28]);
        let colmod = INIT_SEQUENCE.iter().find(|c| c.opcode == 0x3A).unwrap();
        assert_eq!(colmod.data, &[0x05]);
    }

    #[test]
    fn test_parameter_bytes() {
        let total: usize = INIT_SEQUENCE.iter().map(|c| c.data.len()).sum();
        let gamma = INIT_SEQUENCE.iter().find(|c| c.opcode == 0x62).unwrap();
        assert_eq!(gamma.data.len(), 12);
        assert_eq!(total, 134);
    }
}
