//! 1.54" v2 Display Driver Implementation
//!
//! This module contains the protocol driver for the panel: bring-up, RAM window
//! programming and the refresh variants.
//!
//! ## Architecture
//!
//! ### Initialization
//! - `initialize()` - hardware reset, software reset and one of the two scan
//!   direction setups ([`ScanDirection`])
//!
//! ### Display Update Functions
//! - `display()` - write bank 1 and run a full refresh
//! - `display_part_base_image()` - write both banks and run a full refresh
//! - `display_part_base_white_image()` - same with an all white frame
//! - `display_part()` - write bank 1 and run a partial refresh
//! - `clear_display()` - white bank 1 and run a full refresh
//! - `set_frame_memory()` - write a sub rectangle, no refresh
//!
//! ### Power Management
//! - `sleep()` - enter deep sleep, needs reset + `initialize()` to wake up
//!
//! ## Critical Implementation Details
//!
//! ### Two RAM banks
//!
//! `0x24` writes the new image, `0x26` the previous one. A partial refresh
//! (`0xFF`) only drives the pixels that differ between the two, which is why
//! both banks have to be seeded with the same base image first.
//!
//! ### BUSY Pin Wait
//!
//! The wait is bounded by [`Config::busy_poll_limit`]. When the limit runs out
//! the driver carries on anyway, a stuck busy line must not hang the host.

pub use display_interface::DisplayError;

use embedded_hal::digital::PinState;

use crate::epd1in54v2::interface::Transport;
use crate::epd1in54v2::{cmd::Cmd, config::Config, flag::Flag, pins::Pin};
use crate::{BUFFER_SIZE, HEIGHT, WIDTH};

/// The two vendor documented init sequences.
///
/// They only differ in the gate scan byte, the data entry mode and how the
/// RAM window is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Y decrements from the last row, X increments
    High,
    /// Y and X both increment from the origin
    Low,
}

/// Where the panel is in its power cycle, as far as the host knows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Nothing sent yet, only `initialize()` makes sense
    Uninitialized,
    /// Init sequence sent, the panel accepts RAM writes and refreshes
    Initialized,
    /// Deep sleep, needs `initialize()` again
    Sleeping,
}

/// 1.54" v2 E-Paper Display Driver
///
/// ## Type Parameters
///
/// - `T` - the [`Transport`] carrying bytes, pin levels and delays
pub struct Epd<T> {
    transport: T,
    config: Config,
    state: PanelState,
}

impl<T> Epd<T> {
    /// Create the driver with default timing. Nothing is sent yet.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, Config::default())
    }

    /// Create the driver with explicit timing
    pub fn with_config(transport: T, config: Config) -> Self {
        Epd {
            transport,
            config,
            state: PanelState::Uninitialized,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Active timing configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Borrow the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Borrow the transport mutably
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give back the transport
    pub fn release(self) -> T {
        self.transport
    }
}

impl<T: Transport> Epd<T> {
    /// Run the full panel bring-up.
    ///
    /// Safe to call again at any point, it re-arms the whole sequence. This is
    /// also the way out of deep sleep.
    pub fn initialize(&mut self, direction: ScanDirection) -> Result<(), DisplayError> {
        log::info!("Initializing e-paper display, {:?} scan direction", direction);

        if let Err(e) = self.transport.bring_up() {
            log::error!("Transport bring-up failed: {:?}", e);
            return Err(e);
        }

        self.reset();

        self.wait_until_idle();
        self.send_command(Cmd::SW_RESET);
        self.wait_until_idle();

        let (gate_scan, data_entry) = match direction {
            ScanDirection::High => (
                Flag::DRIVER_OUTPUT_GATE_SCAN_INTERLACED,
                Flag::DATA_ENTRY_DECRY_INCRX,
            ),
            ScanDirection::Low => (
                Flag::DRIVER_OUTPUT_GATE_SCAN_FROM_G0,
                Flag::DATA_ENTRY_INCRY_INCRX,
            ),
        };

        let last_row = HEIGHT - 1;
        self.send_command(Cmd::DRIVER_OUTPUT_CONTROL);
        self.send_data_bytes(&[last_row as u8, (last_row >> 8) as u8, gate_scan]);

        self.send_command(Cmd::DATA_ENTRY_MODE);
        self.send_data(data_entry);

        match direction {
            ScanDirection::High => {
                // Y window runs from the last row down to row 0
                self.send_command(Cmd::SET_RAMX_START_END);
                self.send_data_bytes(&[0x00, ((WIDTH - 1) >> 3) as u8]);
                self.send_command(Cmd::SET_RAMY_START_END);
                self.send_data_bytes(&[last_row as u8, (last_row >> 8) as u8, 0x00, 0x00]);
            }
            ScanDirection::Low => {
                // Vendor sequence ends both windows one past the last pixel
                self.send_command(Cmd::SET_RAMX_START_END);
                self.send_data_bytes(&[0x00, (WIDTH >> 3) as u8]);
                self.send_command(Cmd::SET_RAMY_START_END);
                self.send_data_bytes(&[0x00, 0x00, HEIGHT as u8, (HEIGHT >> 8) as u8]);
            }
        }

        self.send_command(Cmd::BORDER_WAVEFORM_CONTROL);
        self.send_data(Flag::BORDER_WAVEFORM_LUT1);

        self.send_command(Cmd::TEMP_CONTROL);
        self.send_data(Flag::INTERNAL_TEMP_SENSOR);

        // Load temperature and waveform setting
        self.send_command(Cmd::DISPLAY_UPDATE_CTRL2);
        self.send_data(Flag::DISPLAY_UPDATE_LOAD_TEMP_LUT);
        self.send_command(Cmd::MASTER_ACTIVATE);

        self.send_command(Cmd::SET_RAMX_COUNTER);
        self.send_data(0x00);
        self.send_command(Cmd::SET_RAMY_COUNTER);
        self.send_data_bytes(&[last_row as u8, (last_row >> 8) as u8]);
        self.wait_until_idle();

        self.state = PanelState::Initialized;
        log::info!("E-paper display initialized");
        Ok(())
    }

    /// Write `frame` to RAM bank 1 and run a full refresh.
    ///
    /// With `None` only the refresh runs, redrawing whatever RAM already holds.
    pub fn display(&mut self, frame: Option<&[u8]>) {
        self.warn_if_not_ready("display");
        if let Some(frame) = frame {
            self.write_ram(Cmd::WRITE_RAM, frame);
        }
        self.display_frame();
    }

    /// Write `frame` to both RAM banks and run a full refresh.
    ///
    /// This sets the baseline the following [`Epd::display_part`] calls diff
    /// against.
    pub fn display_part_base_image(&mut self, frame: Option<&[u8]>) {
        self.warn_if_not_ready("display_part_base_image");
        if let Some(frame) = frame {
            self.write_ram(Cmd::WRITE_RAM, frame);
            self.write_ram(Cmd::WRITE_RAM_PREVIOUS, frame);
        }
        self.display_frame();
    }

    /// Reset the partial refresh baseline to all white
    pub fn display_part_base_white_image(&mut self) {
        self.warn_if_not_ready("display_part_base_white_image");
        self.fill_ram(Cmd::WRITE_RAM, Flag::RAM_ALL_WHITE);
        self.fill_ram(Cmd::WRITE_RAM_PREVIOUS, Flag::RAM_ALL_WHITE);
        self.display_frame();
    }

    /// Write `frame` to RAM bank 1 and run a partial refresh
    pub fn display_part(&mut self, frame: Option<&[u8]>) {
        self.warn_if_not_ready("display_part");
        if let Some(frame) = frame {
            self.write_ram(Cmd::WRITE_RAM, frame);
        }
        self.display_part_frame();
    }

    /// Make the whole panel white with a full refresh
    pub fn clear_display(&mut self) {
        self.warn_if_not_ready("clear_display");
        self.fill_ram(Cmd::WRITE_RAM, Flag::RAM_ALL_WHITE);
        self.display_frame();
    }

    /// Put an image into RAM bank 1 at (`x`, `y`) without refreshing.
    ///
    /// `x` and `image_width` are rounded down to a multiple of 8, the panel
    /// addresses X in bytes. The rectangle is clipped to the panel, but rows
    /// are still read from `image` with a stride of `image_width / 8` bytes,
    /// so the buffer has to be sized for the unclipped width.
    ///
    /// A missing image, negative arguments or an image too short for the
    /// clipped rectangle make this a no-op.
    pub fn set_frame_memory(
        &mut self,
        image: Option<&[u8]>,
        x: i32,
        y: i32,
        image_width: i32,
        image_height: i32,
    ) {
        let Some(image) = image else {
            log::warn!("set_frame_memory without an image, ignoring");
            return;
        };
        if x < 0 || image_width < 0 || y < 0 || image_height < 0 {
            log::warn!(
                "set_frame_memory with negative geometry ({}, {}, {}x{}), ignoring",
                x,
                y,
                image_width,
                image_height
            );
            return;
        }

        // x point must be the multiple of 8 or the last 3 bits will be ignored
        let x = x & !0x07;
        let image_width = image_width & !0x07;

        let width = i32::from(WIDTH);
        let height = i32::from(HEIGHT);
        let x_end = if x.saturating_add(image_width) >= width {
            width - 1
        } else {
            x + image_width - 1
        };
        let y_end = if y.saturating_add(image_height) >= height {
            height - 1
        } else {
            y + image_height - 1
        };

        let stride = (image_width / 8) as usize;
        let columns = ((x_end - x + 1) / 8).max(0) as usize;
        let rows = (y_end - y + 1).max(0) as usize;
        let needed = if columns == 0 || rows == 0 {
            0
        } else {
            (rows - 1).saturating_mul(stride).saturating_add(columns)
        };
        if image.len() < needed {
            log::warn!(
                "set_frame_memory image has {} bytes, {} needed, ignoring",
                image.len(),
                needed
            );
            return;
        }

        self.warn_if_not_ready("set_frame_memory");
        self.set_memory_area(x, y, x_end, y_end);
        self.set_memory_pointer(x, y);
        self.send_command(Cmd::WRITE_RAM);
        for row in 0..rows {
            let start = row * stride;
            for &byte in &image[start..start + columns] {
                self.send_data(byte);
            }
        }
        log::debug!("Wrote {}x{} bytes at ({}, {})", columns, rows, x, y);
    }

    /// Enter deep sleep.
    ///
    /// The panel only answers to a hardware reset afterwards, so run
    /// [`Epd::initialize`] before sending anything else.
    pub fn sleep(&mut self) {
        log::info!("Putting display into deep sleep mode");
        self.send_command(Cmd::DEEP_SLEEP_MODE);
        self.send_data(Flag::DEEP_SLEEP_MODE_1);
        self.wait_until_idle();

        self.transport.set_pin(Pin::Reset, PinState::Low);
        self.state = PanelState::Sleeping;
    }

    /// Basic function for sending commands
    pub(crate) fn send_command(&mut self, command: u8) {
        // low for commands
        self.transport.set_pin(Pin::DataCommand, PinState::Low);
        self.transport.transfer(command);
    }

    /// Basic function for sending one byte of data
    pub(crate) fn send_data(&mut self, data: u8) {
        // high for data
        self.transport.set_pin(Pin::DataCommand, PinState::High);
        self.transport.transfer(data);
    }

    fn send_data_bytes(&mut self, data: &[u8]) {
        for &byte in data {
            self.send_data(byte);
        }
    }

    /// Poll the busy line, at most `busy_poll_limit` samples
    pub(crate) fn wait_until_idle(&mut self) {
        let limit = self.config.busy_poll_limit.max(1);
        let mut polls = 0;
        loop {
            polls += 1;
            if self.transport.read_pin(Pin::Busy) == PinState::Low {
                return;
            }
            if polls >= limit {
                log::warn!("BUSY still high after {} polls, continuing", polls);
                return;
            }
            self.transport.delay_ms(self.config.busy_poll_interval_ms);
        }
    }

    /// Hardware reset: high, low pulse, high
    fn reset(&mut self) {
        let Config {
            reset_settle_ms,
            reset_pulse_ms,
            ..
        } = self.config;
        self.transport.set_pin(Pin::Reset, PinState::High);
        self.transport.delay_ms(reset_settle_ms);
        self.transport.set_pin(Pin::Reset, PinState::Low);
        self.transport.delay_ms(reset_pulse_ms);
        self.transport.set_pin(Pin::Reset, PinState::High);
        self.transport.delay_ms(reset_settle_ms);
    }

    /// Program the RAM window, X in pixels (sent as bytes), Y in rows
    fn set_memory_area(&mut self, x_start: i32, y_start: i32, x_end: i32, y_end: i32) {
        log::debug!(
            "RAM window x {}..={} y {}..={}",
            x_start,
            x_end,
            y_start,
            y_end
        );
        self.send_command(Cmd::SET_RAMX_START_END);
        self.send_data_bytes(&[(x_start >> 3) as u8, (x_end >> 3) as u8]);
        self.send_command(Cmd::SET_RAMY_START_END);
        self.send_data_bytes(&[
            y_start as u8,
            (y_start >> 8) as u8,
            y_end as u8,
            (y_end >> 8) as u8,
        ]);
    }

    /// Program the RAM address counters and let the panel settle
    fn set_memory_pointer(&mut self, x: i32, y: i32) {
        self.send_command(Cmd::SET_RAMX_COUNTER);
        self.send_data((x >> 3) as u8);
        // 2 Databytes: A[7:0] & 0..A[8]
        self.send_command(Cmd::SET_RAMY_COUNTER);
        self.send_data_bytes(&[y as u8, (y >> 8) as u8]);
        self.wait_until_idle();
    }

    fn write_ram(&mut self, command: u8, frame: &[u8]) {
        if frame.len() != BUFFER_SIZE {
            log::warn!(
                "Frame has {} bytes, panel RAM takes {}",
                frame.len(),
                BUFFER_SIZE
            );
        }
        self.send_command(command);
        self.send_data_bytes(&frame[..frame.len().min(BUFFER_SIZE)]);
        log::debug!("Sent {} bytes to RAM 0x{:02X}", frame.len().min(BUFFER_SIZE), command);
    }

    fn fill_ram(&mut self, command: u8, value: u8) {
        self.send_command(command);
        for _ in 0..BUFFER_SIZE {
            self.send_data(value);
        }
    }

    /// Full refresh of whatever RAM holds
    fn display_frame(&mut self) {
        log::info!("Full refresh");
        self.send_command(Cmd::DISPLAY_UPDATE_CTRL2);
        self.send_data(Flag::DISPLAY_UPDATE_FULL);
        self.send_command(Cmd::MASTER_ACTIVATE);
        self.wait_until_idle();
    }

    /// Partial refresh, only pixels that differ between the banks change
    fn display_part_frame(&mut self) {
        log::info!("Partial refresh");
        self.send_command(Cmd::DISPLAY_UPDATE_CTRL2);
        self.send_data(Flag::DISPLAY_UPDATE_PARTIAL);
        self.send_command(Cmd::MASTER_ACTIVATE);
        self.wait_until_idle();
    }

    fn warn_if_not_ready(&self, operation: &str) {
        if self.state != PanelState::Initialized {
            log::warn!("{} while panel is {:?}, run initialize() first", operation, self.state);
        }
    }
}
