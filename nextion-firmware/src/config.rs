//! Link configuration
//!
//! Values come from display.toml, validated by build.rs and compiled in.
//! Edit display.toml and rebuild to customize.

use nextion_driver::NextionConfig;
use nextion_hal::UartConfig;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/display_config.rs"));
}

pub use generated::{HOME_PAGE, PROGRESS, STATUS_TEXT};

/// Settings for the display link on UART0
pub const NEXTION: NextionConfig = NextionConfig {
    uart: UartConfig::new(generated::BAUDRATE),
    poll_interval_ms: generated::POLL_INTERVAL_MS,
    rx_buffer_len: generated::RX_BUFFER_LEN,
};

// Checked at compile time, like display.toml in build.rs
const _: () = assert!(NEXTION.is_valid(), "invalid display link settings");
