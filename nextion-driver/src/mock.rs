//! Scripted UART used by the driver tests

use nextion_hal::{ErrorType, UartRx, UartTx};

/// Failure injected by [`MockUart`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Records transmitted bytes and serves queued receive data
#[derive(Debug, Default)]
pub struct MockUart {
    /// Every byte passed to `transmit`, in order
    pub tx: Vec<u8>,
    /// Bytes waiting to be received
    pub rx: Vec<u8>,
    /// "Data available" flag, cleared only by `clear_receive_status`
    pub rx_flag: bool,
    /// Make every `transmit` fail while set
    pub fail_transmit: bool,
    /// Make every `receive_status` fail while set
    pub fail_receive_status: bool,
    /// Make every `receive_into` fail while set
    pub fail_receive_into: bool,
    /// Make every `clear_receive_buffer` fail while set
    pub fail_clear: bool,
    /// Number of `transmit` calls
    pub transmit_calls: usize,
}

impl MockUart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes as if the display had sent them
    pub fn push_rx(&mut self, bytes: &[u8]) {
        self.rx.extend_from_slice(bytes);
        self.rx_flag = true;
    }
}

impl ErrorType for MockUart {
    type Error = MockError;
}

impl UartTx for MockUart {
    fn transmit(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.transmit_calls += 1;
        if self.fail_transmit {
            return Err(MockError);
        }
        self.tx.extend_from_slice(data);
        Ok(())
    }
}

impl UartRx for MockUart {
    fn receive_status(&mut self) -> Result<bool, Self::Error> {
        if self.fail_receive_status {
            return Err(MockError);
        }
        Ok(self.rx_flag)
    }

    fn receive_into(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.fail_receive_into {
            return Err(MockError);
        }
        let n = buf.len().min(self.rx.len());
        buf[..n].copy_from_slice(&self.rx[..n]);
        self.rx.drain(..n);
        Ok(n)
    }

    fn clear_receive_buffer(&mut self) -> Result<(), Self::Error> {
        if self.fail_clear {
            return Err(MockError);
        }
        self.rx.clear();
        Ok(())
    }

    fn clear_receive_status(&mut self) -> Result<(), Self::Error> {
        self.rx_flag = false;
        Ok(())
    }
}
