//! Nextion Hardware Abstraction Layer
//!
//! This crate defines the UART transport traits the Nextion driver is
//! written against. Chip-specific code implements them directly, or wraps
//! any `embedded-io` serial port with [`IoUart`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (nextion-firmware, etc.)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  nextion-driver (Nextion<U>)            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  nextion-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  IoUart over  │       │  chip-level   │
//! │  embedded-io  │       │  UART impl    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`] - transmit primitive
//! - [`uart::UartRx`] - receive status, receive, and clear primitives
//! - [`uart::Uart`] - both, on one peripheral

#![no_std]
#![deny(unsafe_code)]

pub mod io;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use io::IoUart;
pub use uart::{ErrorType, Uart, UartConfig, UartRx, UartTx};
