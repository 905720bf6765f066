//! Display interface using SPI
use crate::epd1in54v2::pins::Pin;
use display_interface::DisplayError;
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin, PinState},
    spi::SpiDevice,
};

/// The byte/pin/delay primitives the panel protocol is written against.
///
/// Only [`Transport::bring_up`] can fail. Everything else is fire-and-forget,
/// the panel has no acknowledgement to report back anyway.
pub trait Transport {
    /// One-time hardware preparation, called at the start of every init sequence
    fn bring_up(&mut self) -> Result<(), DisplayError>;

    /// Clock one byte out and return the byte clocked in
    fn transfer(&mut self, byte: u8) -> u8;

    /// Drive a control line
    fn set_pin(&mut self, pin: Pin, level: PinState);

    /// Sample a control line
    fn read_pin(&mut self, pin: Pin) -> PinState;

    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

/// The Connection Interface of all (?) Waveshare EPD-Devices
///
pub struct SpiInterface<SPI, BSY, DC, RST, DELAY> {
    /// SPI device, owns chip select
    spi: SPI,
    /// High for busy, Wait until display is ready!
    busy: BSY,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for Reseting
    rst: RST,
    /// Delay provider
    delay: DELAY,
}

impl<SPI, BSY, DC, RST, DELAY> SpiInterface<SPI, BSY, DC, RST, DELAY> {
    /// Create the interface, nothing is sent until [`Transport::bring_up`]
    pub fn new(spi: SPI, busy: BSY, dc: DC, rst: RST, delay: DELAY) -> Self {
        SpiInterface {
            spi,
            busy,
            dc,
            rst,
            delay,
        }
    }

    /// Give back the bus, the pins and the delay
    pub fn release(self) -> (SPI, BSY, DC, RST, DELAY) {
        (self.spi, self.busy, self.dc, self.rst, self.delay)
    }
}

impl<SPI, BSY, DC, RST, DELAY> Transport for SpiInterface<SPI, BSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    fn bring_up(&mut self) -> Result<(), DisplayError> {
        log::info!("Bringing up SPI interface");
        // Park reset released and D/C in data mode until the init sequence runs
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;
        Ok(())
    }

    fn transfer(&mut self, byte: u8) -> u8 {
        let mut read = [0u8; 1];
        match self.spi.transfer(&mut read, &[byte]) {
            Ok(()) => read[0],
            Err(e) => {
                log::error!("SPI transfer error for byte 0x{:02X}: {:?}", byte, e);
                0
            }
        }
    }

    fn set_pin(&mut self, pin: Pin, level: PinState) {
        let failed = match pin {
            Pin::DataCommand => self.dc.set_state(level).is_err(),
            Pin::Reset => self.rst.set_state(level).is_err(),
            Pin::Busy => {
                log::warn!("BUSY is an input, ignoring write");
                return;
            }
        };
        if failed {
            log::error!("Error driving {:?} pin {:?}", pin, level);
        }
    }

    fn read_pin(&mut self, pin: Pin) -> PinState {
        match pin {
            Pin::Busy => match self.busy.is_high() {
                Ok(high) => PinState::from(high),
                Err(_) => {
                    // Error reading pin - report idle to avoid a hang
                    log::error!("Error reading BUSY pin state - assuming not busy to continue");
                    PinState::Low
                }
            },
            Pin::DataCommand | Pin::Reset => {
                log::warn!("{:?} is an output, reading back as low", pin);
                PinState::Low
            }
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinMockState, Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
    use embedded_hal_mock::eh1::MockError;
    use std::io::ErrorKind as IoErrorKind;

    /// SPI device whose every transaction fails
    struct BrokenSpi;

    impl embedded_hal::spi::ErrorType for BrokenSpi {
        type Error = embedded_hal::spi::ErrorKind;
    }

    impl SpiDevice for BrokenSpi {
        fn transaction(
            &mut self,
            _operations: &mut [embedded_hal::spi::Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            Err(embedded_hal::spi::ErrorKind::Other)
        }
    }

    fn disconnected() -> MockError {
        MockError::Io(IoErrorKind::NotConnected)
    }

    #[test]
    fn test_bring_up_parks_control_lines() {
        let spi = SpiMock::new(&[]);
        let busy = PinMock::new(&[]);
        let dc = PinMock::new(&[PinTransaction::set(PinMockState::High)]);
        let rst = PinMock::new(&[PinTransaction::set(PinMockState::High)]);

        let mut interface = SpiInterface::new(spi, busy, dc, rst, NoopDelay::new());
        assert!(interface.bring_up().is_ok());

        let (mut spi, mut busy, mut dc, mut rst, _) = interface.release();
        spi.done();
        busy.done();
        dc.done();
        rst.done();
    }

    #[test]
    fn test_command_then_data_framing() {
        let spi = SpiMock::new(&[
            SpiTransaction::transaction_start(),
            SpiTransaction::transfer(vec![0x12], vec![0x00]),
            SpiTransaction::transaction_end(),
            SpiTransaction::transaction_start(),
            SpiTransaction::transfer(vec![0x01], vec![0x5A]),
            SpiTransaction::transaction_end(),
        ]);
        let busy = PinMock::new(&[
            PinTransaction::get(PinMockState::High),
            PinTransaction::get(PinMockState::Low),
        ]);
        let dc = PinMock::new(&[
            PinTransaction::set(PinMockState::Low),
            PinTransaction::set(PinMockState::High),
        ]);
        let rst = PinMock::new(&[]);

        let mut interface = SpiInterface::new(spi, busy, dc, rst, NoopDelay::new());
        interface.set_pin(Pin::DataCommand, PinState::Low);
        assert_eq!(interface.transfer(0x12), 0x00);
        interface.set_pin(Pin::DataCommand, PinState::High);
        assert_eq!(interface.transfer(0x01), 0x5A);
        assert_eq!(interface.read_pin(Pin::Busy), PinState::High);
        assert_eq!(interface.read_pin(Pin::Busy), PinState::Low);

        let (mut spi, mut busy, mut dc, mut rst, _) = interface.release();
        spi.done();
        busy.done();
        dc.done();
        rst.done();
    }

    #[test]
    fn test_bus_error_is_swallowed() {
        let busy = PinMock::new(&[]);
        let dc = PinMock::new(&[]);
        let rst = PinMock::new(&[]);

        let mut interface = SpiInterface::new(BrokenSpi, busy, dc, rst, NoopDelay::new());
        assert_eq!(interface.transfer(0x12), 0);
        assert_eq!(interface.transfer(0xFF), 0);

        let (_, mut busy, mut dc, mut rst, _) = interface.release();
        busy.done();
        dc.done();
        rst.done();
    }

    #[test]
    fn test_failing_busy_read_reports_idle() {
        let spi = SpiMock::new(&[]);
        let busy = PinMock::new(&[
            PinTransaction::get(PinMockState::High).with_error(disconnected())
        ]);
        let dc = PinMock::new(&[]);
        let rst = PinMock::new(&[]);

        let mut interface = SpiInterface::new(spi, busy, dc, rst, NoopDelay::new());
        assert_eq!(interface.read_pin(Pin::Busy), PinState::Low);
        // Outputs are never sampled
        assert_eq!(interface.read_pin(Pin::DataCommand), PinState::Low);

        let (mut spi, mut busy, mut dc, mut rst, _) = interface.release();
        spi.done();
        busy.done();
        dc.done();
        rst.done();
    }

    #[test]
    fn test_pin_write_errors_are_swallowed() {
        let spi = SpiMock::new(&[]);
        let busy = PinMock::new(&[]);
        let dc = PinMock::new(&[
            PinTransaction::set(PinMockState::Low).with_error(disconnected())
        ]);
        let rst = PinMock::new(&[
            PinTransaction::set(PinMockState::High).with_error(disconnected()),
            PinTransaction::set(PinMockState::Low),
        ]);

        let mut interface = SpiInterface::new(spi, busy, dc, rst, NoopDelay::new());
        interface.set_pin(Pin::DataCommand, PinState::Low);
        interface.set_pin(Pin::Reset, PinState::High);
        interface.set_pin(Pin::Reset, PinState::Low);
        // Writing the input is ignored without touching any pin
        interface.set_pin(Pin::Busy, PinState::High);

        let (mut spi, mut busy, mut dc, mut rst, _) = interface.release();
        spi.done();
        busy.done();
        dc.done();
        rst.done();
    }

    #[test]
    fn test_bring_up_maps_pin_errors() {
        let spi = SpiMock::new(&[]);
        let busy = PinMock::new(&[]);
        let dc = PinMock::new(&[]);
        let rst = PinMock::new(&[
            PinTransaction::set(PinMockState::High).with_error(disconnected())
        ]);

        let mut interface = SpiInterface::new(spi, busy, dc, rst, NoopDelay::new());
        assert!(matches!(interface.bring_up(), Err(DisplayError::RSError)));

        let (mut spi, mut busy, mut dc, mut rst, _) = interface.release();
        spi.done();
        busy.done();
        dc.done();
        rst.done();
    }
}
