//! UART serial communication abstractions
//!
//! The display link needs five primitives from the serial peripheral: send
//! bytes, check whether received bytes are waiting, copy them out, discard
//! whatever is left, and reset the "data available" flag. These traits
//! expose exactly those, so any UART driver can carry the link.

/// Shared error type for a UART's transmit and receive halves
pub trait ErrorType {
    /// Error type for transport operations
    type Error: core::fmt::Debug;
}

/// UART transmitter
pub trait UartTx: ErrorType {
    /// Send a sequence of bytes
    ///
    /// Blocks (or buffers internally) until every byte has been accepted.
    fn transmit(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// UART receiver
///
/// All methods are non-blocking.
pub trait UartRx: ErrorType {
    /// True if unread bytes are buffered
    fn receive_status(&mut self) -> Result<bool, Self::Error>;

    /// Copy buffered bytes into `buf`
    ///
    /// Returns the number of bytes copied, at most `buf.len()`.
    fn receive_into(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Discard any bytes still buffered
    fn clear_receive_buffer(&mut self) -> Result<(), Self::Error>;

    /// Reset the "data available" status flag
    ///
    /// Peripherals that derive the flag from the FIFO level have nothing
    /// to do here.
    fn clear_receive_status(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Combined UART interface
///
/// For UARTs that provide both TX and RX on a single peripheral.
pub trait Uart: UartTx + UartRx {}

// Blanket implementation
impl<T: UartTx + UartRx> Uart for T {}

impl<T: ErrorType + ?Sized> ErrorType for &mut T {
    type Error = T::Error;
}

impl<T: UartTx + ?Sized> UartTx for &mut T {
    fn transmit(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::transmit(self, data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        T::flush(self)
    }
}

impl<T: UartRx + ?Sized> UartRx for &mut T {
    fn receive_status(&mut self) -> Result<bool, Self::Error> {
        T::receive_status(self)
    }

    fn receive_into(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        T::receive_into(self, buf)
    }

    fn clear_receive_buffer(&mut self) -> Result<(), Self::Error> {
        T::clear_receive_buffer(self)
    }

    fn clear_receive_status(&mut self) -> Result<(), Self::Error> {
        T::clear_receive_status(self)
    }
}

/// Baud rates the display accepts for its `baud=` / `bauds=` settings
pub const SUPPORTED_BAUDRATES: [u32; 13] = [
    2400, 4800, 9600, 19200, 31250, 38400, 57600, 115200, 230400, 250000, 256000, 512000, 921600,
];

/// Factory default baud rate of a Nextion display
pub const DEFAULT_BAUDRATE: u32 = 9600;

/// Check whether the display can run at `baudrate`
pub const fn is_supported_baudrate(baudrate: u32) -> bool {
    let mut i = 0;
    while i < SUPPORTED_BAUDRATES.len() {
        if SUPPORTED_BAUDRATES[i] == baudrate {
            return true;
        }
        i += 1;
    }
    false
}

/// UART configuration
///
/// The display always frames 8N1, so only the rate is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: DEFAULT_BAUDRATE,
        }
    }
}

impl UartConfig {
    /// Create a configuration for the given baud rate
    pub const fn new(baudrate: u32) -> Self {
        Self { baudrate }
    }

    /// True if the display supports this configuration
    pub const fn is_supported(&self) -> bool {
        is_supported_baudrate(self.baudrate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_factory_rate() {
        let config = UartConfig::default();
        assert_eq!(config.baudrate, 9600);
        assert!(config.is_supported());
    }

    #[test]
    fn test_unsupported_baudrate() {
        assert!(!is_supported_baudrate(14400));
        assert!(!UartConfig::new(0).is_supported());
        assert!(UartConfig::new(115200).is_supported());
    }
}
