//! Panel protocol for the 1.54" v2 e-paper display
//!
//! Used in the [Waveshare 1.54inch e-Paper Module (V2)](https://www.waveshare.com/wiki/1.54inch_e-Paper_Module_Manual).
//! The controller is an SSD1681 class chip, so most of the command set is
//! shared with the SSD1680.
//!
//! ### Usage
//! This driver does not hide that you're working with one buffer for black/white
//! and two RAM banks on the panel side. To display something you:
//!
//! 1. bring the panel up with [`driver::Epd::initialize`]
//! 1. draw into a buffer with [`crate::paint`]
//! 1. send it with [`driver::Epd::display`] for a full refresh, or seed both RAM
//!    banks with [`driver::Epd::display_part_base_image`] and follow up with
//!    [`driver::Epd::display_part`] for partial refreshes
//! 1. put the panel to sleep with [`driver::Epd::sleep`]
//!

pub mod cmd;
pub mod config;
pub mod driver;
pub mod flag;
pub mod interface;
pub mod pins;

#[cfg(test)]
pub(crate) mod mock;

pub use cmd::Cmd;
pub use config::Config;
pub use display_interface::DisplayError;
pub use driver::{Epd, PanelState, ScanDirection};
pub use flag::Flag;
pub use interface::{SpiInterface, Transport};
pub use pins::Pin;

pub use crate::{BUFFER_SIZE, HEIGHT, ROW_BYTES, WIDTH};
