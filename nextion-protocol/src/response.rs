//! Return data sent by the display.
//!
//! Frame format:
//! - CODE (1 byte): return code
//! - PAYLOAD (0-64 bytes): code-specific data
//! - TERMINATOR (3 bytes): 0xFF 0xFF 0xFF
//!
//! Touch, page and numeric frames have a fixed payload length and may carry
//! 0xFF inside the payload (a numeric -1 is four of them), so the parser
//! counts their payload bytes instead of scanning for the terminator.

use heapless::Vec;

/// Maximum payload size in bytes
pub const MAX_RESPONSE_LEN: usize = 64;

/// CODE + MAX_RESPONSE_LEN
const MAX_FRAME_LEN: usize = 1 + MAX_RESPONSE_LEN;

/// Number of 0xFF bytes closing a frame
const TERMINATOR_LEN: u8 = 3;

/// Return codes
pub mod code {
    pub const INVALID_INSTRUCTION: u8 = 0x00;
    pub const SUCCESS: u8 = 0x01;
    pub const INVALID_COMPONENT: u8 = 0x02;
    pub const INVALID_PAGE: u8 = 0x03;
    pub const INVALID_PICTURE: u8 = 0x04;
    pub const INVALID_FONT: u8 = 0x05;
    pub const INVALID_BAUD: u8 = 0x11;
    pub const INVALID_VARIABLE: u8 = 0x1A;
    pub const INVALID_OPERATION: u8 = 0x1B;
    pub const BUFFER_OVERFLOW: u8 = 0x24;
    pub const TOUCH_EVENT: u8 = 0x65;
    pub const CURRENT_PAGE: u8 = 0x66;
    pub const TOUCH_COORDINATE: u8 = 0x67;
    pub const SLEEP_TOUCH: u8 = 0x68;
    pub const STRING_DATA: u8 = 0x70;
    pub const NUMERIC_DATA: u8 = 0x71;
    pub const AUTO_SLEEP: u8 = 0x86;
    pub const AUTO_WAKE: u8 = 0x87;
    pub const READY: u8 = 0x88;
}

/// Errors that can occur while parsing return data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResponseError {
    /// Payload exceeded [`MAX_RESPONSE_LEN`]; the frame was dropped
    Overflow,
    /// Fixed-length frame was not followed by the terminator
    InvalidFrame,
}

/// A parsed frame of return data
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response {
    /// Instruction was not understood
    InvalidInstruction,
    /// Instruction executed (only sent when `bkcmd` asks for it)
    Success,
    /// Unknown component name or ID
    InvalidComponent,
    /// Unknown page name or ID
    InvalidPage,
    /// Unknown picture ID
    InvalidPicture,
    /// Unknown font ID
    InvalidFont,
    /// Unsupported baud rate
    InvalidBaud,
    /// Unknown variable or attribute
    InvalidVariable,
    /// Operation not valid for the variable
    InvalidOperation,
    /// Display's serial buffer overflowed
    BufferOverflow,
    /// A component was pressed or released
    Touch { page: u8, component: u8, pressed: bool },
    /// Reply to `sendme`
    CurrentPage(u8),
    /// Touch coordinates while awake (`sendxy=1`)
    TouchCoordinate { x: u16, y: u16, pressed: bool },
    /// Touch coordinates that woke the display
    SleepTouch { x: u16, y: u16, pressed: bool },
    /// Reply to `get` on a text attribute
    StringData(Vec<u8, MAX_RESPONSE_LEN>),
    /// Reply to `get` on a numeric attribute
    NumericData(i32),
    /// Display entered sleep
    AutoSleep,
    /// Display woke up
    AutoWake,
    /// Display finished booting
    Startup,
    /// Display is ready to accept instructions
    Ready,
    /// Any other code
    Unknown {
        code: u8,
        payload: Vec<u8, MAX_RESPONSE_LEN>,
    },
}

impl Response {
    /// Decode a complete frame (without terminator)
    fn decode(code: u8, payload: &[u8]) -> Self {
        match (code, payload) {
            (code::INVALID_INSTRUCTION, []) => Response::InvalidInstruction,
            (code::INVALID_INSTRUCTION, [0x00, 0x00]) => Response::Startup,
            (code::SUCCESS, []) => Response::Success,
            (code::INVALID_COMPONENT, []) => Response::InvalidComponent,
            (code::INVALID_PAGE, []) => Response::InvalidPage,
            (code::INVALID_PICTURE, []) => Response::InvalidPicture,
            (code::INVALID_FONT, []) => Response::InvalidFont,
            (code::INVALID_BAUD, []) => Response::InvalidBaud,
            (code::INVALID_VARIABLE, []) => Response::InvalidVariable,
            (code::INVALID_OPERATION, []) => Response::InvalidOperation,
            (code::BUFFER_OVERFLOW, []) => Response::BufferOverflow,
            (code::TOUCH_EVENT, &[page, component, event]) => Response::Touch {
                page,
                component,
                pressed: event == 0x01,
            },
            (code::CURRENT_PAGE, &[page]) => Response::CurrentPage(page),
            (code::TOUCH_COORDINATE, &[x_hi, x_lo, y_hi, y_lo, event]) => {
                Response::TouchCoordinate {
                    x: u16::from_be_bytes([x_hi, x_lo]),
                    y: u16::from_be_bytes([y_hi, y_lo]),
                    pressed: event == 0x01,
                }
            }
            (code::SLEEP_TOUCH, &[x_hi, x_lo, y_hi, y_lo, event]) => Response::SleepTouch {
                x: u16::from_be_bytes([x_hi, x_lo]),
                y: u16::from_be_bytes([y_hi, y_lo]),
                pressed: event == 0x01,
            },
            (code::STRING_DATA, text) => Response::StringData(to_payload(text)),
            (code::NUMERIC_DATA, &[b0, b1, b2, b3]) => {
                Response::NumericData(i32::from_le_bytes([b0, b1, b2, b3]))
            }
            (code::AUTO_SLEEP, []) => Response::AutoSleep,
            (code::AUTO_WAKE, []) => Response::AutoWake,
            (code::READY, []) => Response::Ready,
            (code, payload) => Response::Unknown {
                code,
                payload: to_payload(payload),
            },
        }
    }

    /// Returns true if the display rejected an instruction
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Response::InvalidInstruction
                | Response::InvalidComponent
                | Response::InvalidPage
                | Response::InvalidPicture
                | Response::InvalidFont
                | Response::InvalidBaud
                | Response::InvalidVariable
                | Response::InvalidOperation
                | Response::BufferOverflow
        )
    }
}

/// Copy a payload the parser has already bounded to `MAX_RESPONSE_LEN`
fn to_payload(bytes: &[u8]) -> Vec<u8, MAX_RESPONSE_LEN> {
    let len = bytes.len().min(MAX_RESPONSE_LEN);
    let mut payload = Vec::new();
    let _ = payload.extend_from_slice(&bytes[..len]);
    payload
}

/// Payload length of codes whose payload may contain 0xFF
fn fixed_payload_len(code: u8) -> Option<usize> {
    match code {
        code::TOUCH_EVENT => Some(3),
        code::CURRENT_PAGE => Some(1),
        code::TOUCH_COORDINATE | code::SLEEP_TOUCH => Some(5),
        code::NUMERIC_DATA => Some(4),
        _ => None,
    }
}

/// Incremental parser for return data
#[derive(Debug, Clone, Default)]
pub struct ResponseParser {
    /// CODE followed by payload bytes seen so far
    buffer: Vec<u8, MAX_FRAME_LEN>,
    /// Consecutive 0xFF bytes not yet committed to the payload
    pending_ff: u8,
    /// Current frame outgrew the buffer and is being skipped
    overflowed: bool,
}

impl ResponseParser {
    /// Create a new response parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.pending_ff = 0;
        self.overflowed = false;
    }

    /// True if no partial frame is buffered
    pub fn is_idle(&self) -> bool {
        self.buffer.is_empty() && !self.overflowed
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(response))` when a frame completes, `Ok(None)` when
    /// more bytes are needed, or `Err` when a frame had to be dropped.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Response>, ResponseError> {
        if self.is_idle() {
            // Stray terminator bytes between frames
            if byte != 0xFF {
                let _ = self.buffer.push(byte);
            }
            return Ok(None);
        }

        match self.buffer.first().copied().and_then(fixed_payload_len) {
            Some(len) if !self.overflowed => self.feed_fixed(byte, len),
            _ => self.feed_variable(byte),
        }
    }

    fn feed_fixed(
        &mut self,
        byte: u8,
        payload_len: usize,
    ) -> Result<Option<Response>, ResponseError> {
        if self.buffer.len() < 1 + payload_len {
            // Bounded by fixed_payload_len, always fits
            let _ = self.buffer.push(byte);
            return Ok(None);
        }

        if byte != 0xFF {
            // The byte that broke this frame may start the next one
            self.reset();
            let _ = self.buffer.push(byte);
            return Err(ResponseError::InvalidFrame);
        }

        self.pending_ff += 1;
        if self.pending_ff < TERMINATOR_LEN {
            return Ok(None);
        }

        Ok(Some(self.finish()))
    }

    fn feed_variable(&mut self, byte: u8) -> Result<Option<Response>, ResponseError> {
        if byte == 0xFF {
            self.pending_ff += 1;
            if self.pending_ff < TERMINATOR_LEN {
                return Ok(None);
            }

            if self.overflowed {
                self.reset();
                return Err(ResponseError::Overflow);
            }
            return Ok(Some(self.finish()));
        }

        // 0xFF bytes short of a terminator were payload
        for _ in 0..self.pending_ff {
            self.push_payload(0xFF);
        }
        self.pending_ff = 0;
        self.push_payload(byte);
        Ok(None)
    }

    fn push_payload(&mut self, byte: u8) {
        if self.overflowed {
            return;
        }
        if self.buffer.push(byte).is_err() {
            self.buffer.clear();
            self.overflowed = true;
        }
    }

    fn finish(&mut self) -> Response {
        let response = match self.buffer.split_first() {
            Some((&code, payload)) => Response::decode(code, payload),
            None => Response::InvalidInstruction,
        };
        self.reset();
        response
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first complete response found, if any. Feeding stops at
    /// that frame (or at the first error), and the bytes after it are not
    /// consumed. Use [`ResponseParser::feed`] per byte when a buffer may
    /// hold more than one frame.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Response>, ResponseError> {
        for &byte in bytes {
            if let Some(response) = self.feed(byte)? {
                return Ok(Some(response));
            }
        }
        Ok(None)
    }
}
