//! Payload bytes sent with the commands in [`super::cmd`]

/// Parameter bytes sent after the commands in [`super::Cmd`].
pub struct Flag;

#[allow(missing_docs)]
impl Flag {
    // Driver Output Control (0x01), third byte
    pub const DRIVER_OUTPUT_GATE_SCAN_FROM_G0: u8 = 0x00;
    pub const DRIVER_OUTPUT_GATE_SCAN_INTERLACED: u8 = 0x01;

    // Data Entry Mode (0x11) flags
    pub const DATA_ENTRY_DECRY_INCRX: u8 = 0x01; // Y decrement, X increment
    pub const DATA_ENTRY_INCRY_INCRX: u8 = 0x03; // Y increment, X increment

    // Deep Sleep Mode (0x10) flags
    pub const DEEP_SLEEP_MODE_1: u8 = 0x01;

    // Temperature Sensor Control (0x18) flags
    pub const INTERNAL_TEMP_SENSOR: u8 = 0x80;

    // Border Waveform Control (0x3C) flags
    pub const BORDER_WAVEFORM_LUT1: u8 = 0x01;

    // Display Update Control 2 (0x22) sequences
    pub const DISPLAY_UPDATE_LOAD_TEMP_LUT: u8 = 0xB1;
    pub const DISPLAY_UPDATE_FULL: u8 = 0xF7;
    pub const DISPLAY_UPDATE_PARTIAL: u8 = 0xFF;

    // RAM content, 1 = white
    pub const RAM_ALL_WHITE: u8 = 0xFF;
}
