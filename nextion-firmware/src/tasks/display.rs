//! Display task
//!
//! Owns the display link. Polls for return data every tick and refreshes
//! the status text and progress bar every [`REFRESH_TICKS`] ticks. Being
//! the only user of the UART, it needs no locking.

use core::fmt::Write as _;

use defmt::*;
use embassy_rp::uart::BufferedUart;
use embassy_time::{Duration, Instant, Ticker};
use heapless::String;

use nextion_driver::Nextion;
use nextion_hal::IoUart;
use nextion_protocol::{Response, ResponseParser};

use crate::config;

/// Display driver on the buffered UART0
pub type Display = Nextion<IoUart<BufferedUart>>;

/// Poll ticks between screen refreshes
const REFRESH_TICKS: u32 = 20;

/// Progress bar increment per refresh
const PROGRESS_STEP: u8 = 5;

/// Display task - sends screen updates and reads return data
#[embassy_executor::task]
pub async fn display_task(mut display: Display) {
    info!("Display task started");

    if let Err(e) = display.change_page(config::HOME_PAGE) {
        warn!("Failed to open home page: {:?}", e);
    }

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(
        config::NEXTION.poll_interval_ms,
    )));
    let mut parser = ResponseParser::new();
    let mut rx = [0u8; config::NEXTION.rx_buffer_len];
    let mut progress: u8 = 0;
    let mut ticks: u32 = 0;

    loop {
        poll_display(&mut display, &mut parser, &mut rx);

        ticks = ticks.wrapping_add(1);
        if ticks % REFRESH_TICKS == 0 {
            progress = (progress + PROGRESS_STEP) % (100 + PROGRESS_STEP);
            refresh(&mut display, progress);
        }

        ticker.next().await;
    }
}

/// Drain pending return data into the parser
fn poll_display(display: &mut Display, parser: &mut ResponseParser, rx: &mut [u8]) {
    match display.read(rx) {
        Ok(Some(n)) => {
            trace!("RX: {} bytes", n);

            for &byte in &rx[..n] {
                match parser.feed(byte) {
                    Ok(Some(response)) => handle_response(response),
                    Ok(None) => {
                        // Need more bytes
                    }
                    Err(e) => {
                        warn!("Return data parse error: {:?}", e);
                    }
                }
            }
        }
        Ok(None) => {
            // Nothing pending
        }
        Err(e) => {
            warn!("UART read error: {:?}", e);
        }
    }
}

/// Handle a parsed frame of return data
fn handle_response(response: Response) {
    match response {
        Response::Touch {
            page,
            component,
            pressed,
        } => {
            info!(
                "Touch: page {} component {} pressed={}",
                page, component, pressed
            );
        }
        Response::Startup | Response::Ready => {
            info!("Display ready");
        }
        response if response.is_error() => {
            warn!("Display rejected instruction: {:?}", response);
        }
        other => {
            debug!("Display: {:?}", other);
        }
    }
}

/// Send uptime and progress to the display
fn refresh(display: &mut Display, progress: u8) {
    let mut status: String<32> = String::new();
    let _ = core::write!(status, "Up {}s", Instant::now().as_secs());

    if let Err(e) = display.set_text(config::STATUS_TEXT, &status) {
        warn!("Failed to update status text: {:?}", e);
    }
    if let Err(e) = display.set_progress_percent(config::PROGRESS, progress) {
        warn!("Failed to update progress bar: {:?}", e);
    }

    trace!("Screen update sent");
}
