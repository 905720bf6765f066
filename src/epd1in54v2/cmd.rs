//! Command bytes of the SSD1681 class controller

/// Command bytes understood by the panel controller.
pub struct Cmd;

#[allow(missing_docs)]
impl Cmd {
    // Init
    pub const DRIVER_OUTPUT_CONTROL: u8 = 0x01;
    pub const DATA_ENTRY_MODE: u8 = 0x11;
    pub const SW_RESET: u8 = 0x12;
    pub const TEMP_CONTROL: u8 = 0x18;
    pub const BORDER_WAVEFORM_CONTROL: u8 = 0x3C;
    pub const SET_RAMX_START_END: u8 = 0x44;
    pub const SET_RAMY_START_END: u8 = 0x45;
    pub const DEEP_SLEEP_MODE: u8 = 0x10;

    // Update
    pub const SET_RAMX_COUNTER: u8 = 0x4E;
    pub const SET_RAMY_COUNTER: u8 = 0x4F;
    pub const WRITE_RAM: u8 = 0x24;
    pub const WRITE_RAM_PREVIOUS: u8 = 0x26;
    pub const DISPLAY_UPDATE_CTRL2: u8 = 0x22;
    pub const MASTER_ACTIVATE: u8 = 0x20;
}

/*
Vendor header also lists these, none of them are sent by the v2 sequences:
0x0C - Booster Soft Start Control
0x0F - Gate Scan Start Position
0x1A - Temperature Sensor Control (write)
0x21 - Display Update Control 1
0x2C - Write VCOM Register
0x32 - Write LUT Register
0x3A - Set Dummy Line Period
0x3B - Set Gate Time
0xFF - Terminate Frame Read/Write
*/
