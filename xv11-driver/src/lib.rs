//! Driver for the Neato XV-11 spinning LiDAR, see [`run_driver`] and [`ScanReader`].

use std::sync::atomic::AtomicUsize;
use std::sync::{mpsc, Arc};

mod config;
mod constants;
mod decoder;
mod driver_threads;
mod error;
mod flags;
mod frame;
mod numeric;
mod packet;
mod reader;
mod serial;
#[cfg(test)]
mod test_util;
mod time;

use crate::driver_threads::{parse_packets, read_device_signal};
use crate::serial::{flush, open_port};
use crate::time::sleep_ms;
use crossbeam_channel::bounded;
use crossbeam_utils::CachePadded;
use tracing::debug;
use xv11_data::Scan;

pub use crate::config::DriverConfig;
pub use crate::decoder::{count_checksum_errors, decode_frame, parse_frame};
pub use crate::driver_threads::{join, DriverThreads};
pub use crate::error::{Result, Xv11Error};
pub use crate::frame::{AssemblerState, Frame, FrameAssembler, FrameReader};
pub use crate::reader::ScanReader;

/// Function to launch the XV-11 driver.
/// # Arguments
///
/// * `config` - Port name, baud rate and buffering, see [`DriverConfig`].
pub fn run_driver(config: &DriverConfig) -> Result<(DriverThreads, mpsc::Receiver<Scan>)> {
    let mut port = open_port(config)?;

    if !cfg!(test) {
        // In testing, disable flushing to receive dummy signals
        flush(&mut port)?;
        sleep_ms(10);
        flush(&mut port)?;
    }

    let (reader_terminator_tx, reader_terminator_rx) = bounded(10);
    let (parser_terminator_tx, parser_terminator_rx) = bounded(10);
    let (scan_data_tx, scan_data_rx) = mpsc::sync_channel::<Vec<u8>>(config.raw_channel_capacity);

    let reader_thread = Some(std::thread::spawn(move || {
        read_device_signal(&mut port, scan_data_tx, reader_terminator_rx);
    }));

    let dropped_frames = Arc::new(CachePadded::new(AtomicUsize::new(0)));
    let skipped_scans = Arc::new(CachePadded::new(AtomicUsize::new(0)));
    let parser_dropped_frames = Arc::clone(&dropped_frames);
    let parser_skipped_scans = Arc::clone(&skipped_scans);
    let (scan_tx, scan_rx) = mpsc::sync_channel::<Scan>(config.scan_channel_capacity);
    let receiver_thread = Some(std::thread::spawn(move || {
        parse_packets(
            scan_data_rx,
            parser_terminator_rx,
            scan_tx,
            parser_dropped_frames,
            parser_skipped_scans,
        );
    }));
    debug!(port = %config.port_name, "Driver threads started");

    let driver_threads = DriverThreads {
        reader_thread,
        receiver_thread,
        reader_terminator_tx,
        parser_terminator_tx,
        dropped_frames,
        skipped_scans,
    };

    Ok((driver_threads, scan_rx))
}
