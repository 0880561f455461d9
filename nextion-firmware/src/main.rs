//! Nextion display demo firmware
//!
//! Drives a Nextion HMI from an RP2040 over UART0 (GPIO0 TX, GPIO1 RX).
//! Opens the home page, keeps an uptime text and a progress bar updated,
//! and logs whatever the display sends back.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use nextion_driver::Nextion;
use nextion_hal::IoUart;

mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Nextion firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Setup UART for display communication
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = config::NEXTION.uart.baudrate;

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);

    info!(
        "UART initialized for display communication at {} baud",
        config::NEXTION.uart.baudrate
    );

    let display = Nextion::new(IoUart::new(uart));

    spawner.spawn(tasks::display_task(display)).unwrap();
}
