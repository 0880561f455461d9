//! Link configuration

use nextion_hal::UartConfig;

/// Default receive poll interval in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 50;

/// Default size of the scratch buffer handed to `Nextion::read`
///
/// Fits the longest fixed-length frame (touch coordinates, 9 bytes) several
/// times over.
pub const DEFAULT_RX_BUFFER_LEN: usize = 64;

/// Settings for one display link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NextionConfig {
    /// Serial settings; must match the display's `bauds` value
    pub uart: UartConfig,
    /// How often the application polls for return data
    pub poll_interval_ms: u32,
    /// Bytes copied out per poll; anything beyond is dropped by the read
    pub rx_buffer_len: usize,
}

impl Default for NextionConfig {
    fn default() -> Self {
        Self {
            uart: UartConfig::default(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            rx_buffer_len: DEFAULT_RX_BUFFER_LEN,
        }
    }
}

impl NextionConfig {
    /// Returns true if the display supports these settings
    pub const fn is_valid(&self) -> bool {
        self.uart.is_supported() && self.poll_interval_ms > 0 && self.rx_buffer_len > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NextionConfig::default();
        assert_eq!(config.uart.baudrate, 9600);
        assert_eq!(config.poll_interval_ms, 50);
        assert_eq!(config.rx_buffer_len, DEFAULT_RX_BUFFER_LEN);
        assert!(config.is_valid());
    }

    #[test]
    fn test_invalid_config() {
        let config = NextionConfig {
            uart: UartConfig::new(12345),
            ..Default::default()
        };
        assert!(!config.is_valid());

        let config = NextionConfig {
            poll_interval_ms: 0,
            ..Default::default()
        };
        assert!(!config.is_valid());

        let config = NextionConfig {
            rx_buffer_len: 0,
            ..Default::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_is_valid_in_const_context() {
        const CONFIG: NextionConfig = NextionConfig {
            uart: UartConfig::new(115200),
            poll_interval_ms: 10,
            rx_buffer_len: 16,
        };
        const VALID: bool = CONFIG.is_valid();
        assert!(VALID);
    }
}
