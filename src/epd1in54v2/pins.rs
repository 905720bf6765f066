//! Control lines of the panel
//!
//! Chip select, clock and MOSI belong to the SPI device and never show up here.

/// Control line identifiers used by [`super::Transport::set_pin`] and
/// [`super::Transport::read_pin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pin {
    /// Data/Command control pin (High for data, Low for command)
    DataCommand,
    /// Reset pin, active low
    Reset,
    /// Busy status pin (High while the panel is processing)
    Busy,
}
