//! Typed display instructions
//!
//! Each variant maps to a fixed specifier/suffix pair and is encoded through
//! [`compose`], so the wire format is defined in one place:
//!
//! | Instruction | Object | Specifier | Suffix |
//! |---|---|---|---|
//! | `SetText` | widget | `.txt="` | `"` + terminator |
//! | `SetValue` / `SetNumber` | widget | `.val=` | terminator |
//! | `Page` | `page` | space | terminator |
//! | `Raw` | caller bytes | none | none |
//!
//! Text is sent as-is. A `"` inside the text ends the string early on the
//! display; escaping it is the caller's job.

use core::fmt::Write;

use heapless::String;

use crate::compose::{compose, Command, CommandError};

/// Attribute specifier for text widgets
pub const TEXT_SPECIFIER: &[u8] = b".txt=\"";
/// Closing quote plus terminator for text instructions
pub const TEXT_SUFFIX: &[u8] = b"\"\xFF\xFF\xFF";
/// Attribute specifier for numeric widgets (progress bars, number boxes)
pub const VALUE_SPECIFIER: &[u8] = b".val=";
/// Object name used for page navigation
pub const PAGE_OBJECT: &[u8] = b"page";
/// Separator between `page` and its argument
pub const PAGE_SPECIFIER: &[u8] = b" ";
/// Plain terminator suffix
pub const TERMINATOR_SUFFIX: &[u8] = &crate::compose::TERMINATOR;

/// Longest decimal rendering of an `i32` ("-2147483648")
const MAX_I32_DIGITS: usize = 11;

/// Instructions understood by the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Instruction<'a> {
    /// Set the text of a text widget
    SetText { object: &'a str, text: &'a str },
    /// Set the value of a numeric widget from caller-formatted text
    SetValue { object: &'a str, value: &'a str },
    /// Set the value of a numeric widget
    SetNumber { object: &'a str, value: i32 },
    /// Navigate to a page by name or index
    Page { page: &'a str },
    /// A complete instruction, terminator included, sent as-is
    Raw(&'a [u8]),
}

impl<'a> Instruction<'a> {
    /// Encode this instruction into a command buffer
    pub fn encode(&self) -> Result<Command, CommandError> {
        match self {
            Instruction::SetText { object, text } => compose(
                object.as_bytes(),
                TEXT_SPECIFIER,
                text.as_bytes(),
                TEXT_SUFFIX,
            ),
            Instruction::SetValue { object, value } => compose(
                object.as_bytes(),
                VALUE_SPECIFIER,
                value.as_bytes(),
                TERMINATOR_SUFFIX,
            ),
            Instruction::SetNumber { object, value } => {
                let digits = format_i32(*value);
                compose(
                    object.as_bytes(),
                    VALUE_SPECIFIER,
                    digits.as_bytes(),
                    TERMINATOR_SUFFIX,
                )
            }
            Instruction::Page { page } => compose(
                PAGE_OBJECT,
                PAGE_SPECIFIER,
                page.as_bytes(),
                TERMINATOR_SUFFIX,
            ),
            Instruction::Raw(raw) => compose(raw, b"", b"", b""),
        }
    }
}

/// Render an integer as decimal text without allocating
fn format_i32(value: i32) -> String<MAX_I32_DIGITS> {
    let mut digits = String::new();
    // Cannot fail: the buffer holds the longest i32
    let _ = write!(digits, "{}", value);
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_wire_bytes() {
        let command = Instruction::SetText {
            object: "t0",
            text: "Hello",
        }
        .encode()
        .unwrap();
        assert_eq!(command.as_slice(), b"t0.txt=\"Hello\"\xFF\xFF\xFF");
    }

    #[test]
    fn test_set_value_wire_bytes() {
        let command = Instruction::SetValue {
            object: "j0",
            value: "42",
        }
        .encode()
        .unwrap();
        assert_eq!(command.as_slice(), b"j0.val=42\xFF\xFF\xFF");
    }

    #[test]
    fn test_page_wire_bytes() {
        let command = Instruction::Page { page: "page1" }.encode().unwrap();
        assert_eq!(command.as_slice(), b"page page1\xFF\xFF\xFF");
    }

    #[test]
    fn test_set_number_negative() {
        let command = Instruction::SetNumber {
            object: "n0",
            value: -17,
        }
        .encode()
        .unwrap();
        assert_eq!(command.as_slice(), b"n0.val=-17\xFF\xFF\xFF");
    }

    #[test]
    fn test_format_i32_extremes() {
        assert_eq!(format_i32(i32::MIN).as_str(), "-2147483648");
        assert_eq!(format_i32(i32::MAX).as_str(), "2147483647");
        assert_eq!(format_i32(0).as_str(), "0");
    }

    #[test]
    fn test_text_is_not_escaped() {
        let command = Instruction::SetText {
            object: "t1",
            text: "a\"b",
        }
        .encode()
        .unwrap();
        assert_eq!(command.as_slice(), b"t1.txt=\"a\"b\"\xFF\xFF\xFF");
    }

    #[test]
    fn test_raw_is_verbatim() {
        let command = Instruction::Raw(b"dim=50\xFF\xFF\xFF").encode().unwrap();
        assert_eq!(command.as_slice(), b"dim=50\xFF\xFF\xFF");

        let command = Instruction::Raw(b"").encode().unwrap();
        assert!(command.is_empty());
    }

    #[test]
    fn test_text_too_long() {
        let text = "x".repeat(300);
        let result = Instruction::SetText {
            object: "t0",
            text: &text,
        }
        .encode();
        assert_eq!(
            result,
            Err(CommandError::AllocationFailure {
                required: 2 + 6 + 300 + 4
            })
        );
    }
}
