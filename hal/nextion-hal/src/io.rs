//! Adapter from `embedded-io` serial ports to the UART traits
//!
//! Most HALs expose their buffered UARTs through `embedded_io::{Read, Write,
//! ReadReady}`. [`IoUart`] maps those onto [`UartTx`]/[`UartRx`]:
//!
//! - receive status is `read_ready()`
//! - clearing the receive buffer reads and discards until nothing is ready
//! - the status flag follows the buffer level, so clearing it is a no-op
//!
//! `embedded_io_async::ReadReady` is this same trait re-exported, so async
//! UARTs that also implement the blocking `Read`/`Write` (embassy-rp's
//! `BufferedUart`, for one) can be wrapped directly.

use embedded_io::{Read, ReadReady, Write};

use crate::uart::{ErrorType, UartRx, UartTx};

/// Scratch size used while draining the receive buffer
const DRAIN_CHUNK: usize = 16;

/// UART transport over an `embedded-io` serial port
pub struct IoUart<T> {
    inner: T,
}

impl<T> IoUart<T> {
    /// Wrap a serial port
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped port
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the wrapped port
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Return the wrapped port
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: embedded_io::ErrorType> ErrorType for IoUart<T> {
    type Error = T::Error;
}

impl<T: Write> UartTx for IoUart<T> {
    fn transmit(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.flush()
    }
}

impl<T: Read + ReadReady> UartRx for IoUart<T> {
    fn receive_status(&mut self) -> Result<bool, Self::Error> {
        self.inner.read_ready()
    }

    fn receive_into(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        // A zero-length read may block on some ports
        if buf.is_empty() {
            return Ok(0);
        }
        self.inner.read(buf)
    }

    fn clear_receive_buffer(&mut self) -> Result<(), Self::Error> {
        let mut scratch = [0u8; DRAIN_CHUNK];
        while self.inner.read_ready()? {
            if self.inner.read(&mut scratch)? == 0 {
                break;
            }
        }
        Ok(())
    }
}
