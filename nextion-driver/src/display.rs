//! Nextion display operations
//!
//! | Operation | Wire bytes |
//! |---|---|
//! | [`Nextion::set_text`] | `<obj>.txt="<text>"` FF FF FF |
//! | [`Nextion::set_progressbar`] | `<obj>.val=<value>` FF FF FF |
//! | [`Nextion::change_page`] | `page <page>` FF FF FF |
//! | [`Nextion::command`] | caller bytes, verbatim |
//!
//! Calls are synchronous and run to completion on the caller's thread.
//! There is no locking: if several tasks share one UART they must
//! serialize access themselves.

use nextion_hal::Uart;
use nextion_protocol::Instruction;

use crate::error::Error;

/// Highest value a progress bar accepts
pub const PROGRESS_MAX: u8 = 100;

/// Driver for one Nextion display
pub struct Nextion<U> {
    uart: U,
}

impl<U: Uart> Nextion<U> {
    /// Bind a driver to a transport
    pub fn new(uart: U) -> Self {
        Self { uart }
    }

    /// Release the transport
    pub fn release(self) -> U {
        self.uart
    }

    /// Send a complete instruction verbatim
    ///
    /// No terminator is added; include the three 0xFF bytes yourself.
    pub fn command(&mut self, raw: &[u8]) -> Result<(), Error<U::Error>> {
        self.send(&Instruction::Raw(raw))
    }

    /// Set the text of a text widget
    pub fn set_text(&mut self, object: &str, text: &str) -> Result<(), Error<U::Error>> {
        self.send(&Instruction::SetText { object, text })
    }

    /// Set the value of a progress bar
    ///
    /// `value` is the decimal text of the new value, usually 0 to 100.
    pub fn set_progressbar(&mut self, object: &str, value: &str) -> Result<(), Error<U::Error>> {
        self.send(&Instruction::SetValue { object, value })
    }

    /// Set the value of a numeric widget
    pub fn set_value(&mut self, object: &str, value: i32) -> Result<(), Error<U::Error>> {
        self.send(&Instruction::SetNumber { object, value })
    }

    /// Set a progress bar, clamping `percent` to 0..=100
    pub fn set_progress_percent(
        &mut self,
        object: &str,
        percent: u8,
    ) -> Result<(), Error<U::Error>> {
        self.set_value(object, i32::from(percent.min(PROGRESS_MAX)))
    }

    /// Navigate to a page by name or index
    pub fn change_page(&mut self, page: &str) -> Result<(), Error<U::Error>> {
        self.send(&Instruction::Page { page })
    }

    /// Compose and transmit an instruction
    ///
    /// If composition fails nothing is transmitted. [`Instruction::Raw`]
    /// skips composition and goes straight to the transport, so it is not
    /// bound by the command buffer size.
    pub fn send(&mut self, instruction: &Instruction<'_>) -> Result<(), Error<U::Error>> {
        if let Instruction::Raw(raw) = instruction {
            return self.uart.transmit(raw).map_err(Error::Transport);
        }

        let command = instruction.encode()?;
        self.uart.transmit(&command).map_err(Error::Transport)
    }

    /// Poll for bytes sent by the display
    ///
    /// Returns `Ok(None)` without touching `buf` when nothing is pending.
    /// Otherwise copies up to `buf.len()` bytes, clears the receive buffer
    /// and its status flag, and returns the number of bytes copied.
    ///
    /// This drains on read: bytes that did not fit in `buf` are discarded
    /// by the clear and will not be returned by a later call. An empty
    /// `buf` therefore returns `Ok(Some(0))` and throws away everything
    /// pending.
    ///
    /// A failing transport call stops the sequence and is returned as
    /// [`Error::Transport`]; the steps after it are not attempted.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>, Error<U::Error>> {
        if !self.uart.receive_status().map_err(Error::Transport)? {
            return Ok(None);
        }

        let n = self.uart.receive_into(buf).map_err(Error::Transport)?;
        self.uart.clear_receive_buffer().map_err(Error::Transport)?;
        self.uart.clear_receive_status().map_err(Error::Transport)?;

        Ok(Some(n))
    }

    /// Flush the transport
    pub fn flush(&mut self) -> Result<(), Error<U::Error>> {
        self.uart.flush().map_err(Error::Transport)
    }
}
