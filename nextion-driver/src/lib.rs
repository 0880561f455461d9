//! Nextion display driver
//!
//! This crate drives a Nextion serial HMI over any transport implementing
//! the `nextion-hal` UART traits:
//!
//! - [`Nextion`] - set text, set progress bars, change page, raw commands,
//!   and the non-blocking receive check
//! - [`NextionConfig`] - link settings for the embedding application
//! - [`Error`] - composition and transport failures
//!
//! The driver keeps no state beyond the transport it wraps. Every
//! instruction is composed into an owned buffer, written out, and dropped
//! before the call returns.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod error;

#[cfg(test)]
mod mock;

pub use config::NextionConfig;
pub use display::Nextion;
pub use error::Error;
