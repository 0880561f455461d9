//! Nextion Serial Instruction Protocol
//!
//! This crate builds the plain-text instructions a Nextion HMI display
//! accepts over UART, and parses the return data it sends back.
//!
//! # Protocol Overview
//!
//! Every instruction is ASCII text followed by three `0xFF` bytes:
//! ```text
//! ┌──────────┬───────────┬───────────┬────────────────┐
//! │ OBJECT   │ SPECIFIER │ VALUE     │ SUFFIX         │
//! │ t0       │ .txt="    │ Hello     │ " FF FF FF     │
//! │ j0       │ .val=     │ 42        │ FF FF FF       │
//! │ page     │ ␠         │ page1     │ FF FF FF       │
//! └──────────┴───────────┴───────────┴────────────────┘
//! ```
//!
//! Return data from the display uses the same terminator, led by a one
//! byte return code.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod compose;
pub mod instruction;
pub mod response;

pub use compose::{compose, compose_into, Command, CommandError, MAX_COMMAND_LEN, TERMINATOR};
pub use instruction::Instruction;
pub use response::{Response, ResponseError, ResponseParser, MAX_RESPONSE_LEN};
